pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod image_file;
pub mod render;
pub mod workflow;
