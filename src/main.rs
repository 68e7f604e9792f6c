use clap::Parser;
use emotion_lens::{cli, client, config, error, render, workflow};
use cli::{Cli, Commands};
use config::Config;
use emotion_lens_common::DisplayState;
use error::Result;
use tracing::Level;

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { image, api_url, json } => {
            let base_url = config.resolve_api_url(api_url.as_deref());
            let client = client::PredictClient::new(&base_url, config.timeout())?;
            tracing::debug!(url = client.url(), "endpoint resolved");

            let mut session = workflow::CliSession::new();
            workflow::select_image(&mut session, &image)?;

            if !json {
                println!("🎨 {}\n", emotion_lens_common::messages::APP_TITLE);
                if let Some(selection) = session.selection() {
                    println!(
                        "{} {}",
                        emotion_lens_common::messages::PREVIEW_LABEL,
                        selection.file.describe()
                    );
                    println!("  {}\n", selection.preview);
                }
            }

            let state = match workflow::run_analysis(&mut session, &client, !json).await {
                Ok(state) => state,
                Err(e) => match e.user_message() {
                    Some(message) => {
                        tracing::debug!(error = %e, "analysis not started");
                        eprintln!("✖ {}", message);
                        std::process::exit(1);
                    }
                    None => return Err(e),
                },
            };

            if let Some(message) = session.error() {
                eprintln!("✖ {}", message);
                std::process::exit(1);
            }

            if state == DisplayState::Settled {
                if let Some(result) = session.result() {
                    if json {
                        println!("{}", serde_json::to_string_pretty(result)?);
                    } else if let Some(view) = session.view() {
                        println!("{}", render::render_result(&view, render::DEFAULT_BAR_WIDTH));
                    }
                }
            }
        }

        Commands::Config { set_api_url, set_timeout, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                changed = true;
                println!("✔ 接続先を設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                changed = true;
                println!("✔ タイムアウトを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  接続先: {}", config.resolve_api_url(None));
                println!(
                    "  タイムアウト: {}",
                    config
                        .timeout_seconds
                        .map(|s| format!("{}秒", s))
                        .unwrap_or_else(|| "未設定".to_string())
                );
                if let Ok(path) = Config::config_path() {
                    println!("  設定ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
