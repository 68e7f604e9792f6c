use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "emotion-lens")]
#[command(about = "児童画の感情分析クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を推論サービスへ送信して結果をグラフ表示
    Analyze {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 推論サービスのベースURL（設定ファイルより優先）
        #[arg(long)]
        api_url: Option<String>,

        /// グラフの代わりに解析結果JSONを出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 推論サービスのベースURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["emotion-lens", "analyze", "dibujo.png", "--json"]).unwrap();
        match cli.command {
            Commands::Analyze { image, api_url, json } => {
                assert_eq!(image, PathBuf::from("dibujo.png"));
                assert!(api_url.is_none());
                assert!(json);
            }
            _ => panic!("analyze expected"),
        }
    }

    #[test]
    fn test_parse_analyze_requires_image() {
        assert!(Cli::try_parse_from(["emotion-lens", "analyze"]).is_err());
    }

    #[test]
    fn test_parse_config_global_verbose() {
        let cli = Cli::try_parse_from([
            "emotion-lens",
            "config",
            "--set-api-url",
            "http://localhost:9000",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Config { set_api_url: Some(_), set_timeout: None, show: false }
        ));
    }
}
