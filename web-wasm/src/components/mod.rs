pub mod analyze_button;
pub mod bar_chart;
pub mod header;
pub mod result_panel;
pub mod upload_area;
