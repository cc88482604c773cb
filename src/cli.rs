use clap::{Parser, Subcommand};
use portfolio_common::{CategoryFilter, WorkFilter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "ポートフォリオサイトのデータ確認ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// リモートの代わりにJSONフィクスチャを使う
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// プロジェクト一覧
    Projects {
        /// カテゴリ（複数指定でいずれか）
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// Workページのフィルタ (all/identity/digital/visual)
        #[arg(short, long, conflicts_with = "categories")]
        filter: Option<WorkFilterArg>,

        /// featured のみ
        #[arg(long)]
        featured: bool,

        /// 出力形式 (text/json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// プロジェクト詳細
    Project {
        /// プロジェクトID
        #[arg(required = true)]
        id: String,

        /// 出力形式 (text/json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// パスからルートとビューを解決
    Route {
        /// 例: /work, #/project/abc
        #[arg(required = true)]
        path: String,
    },

    /// 設定を表示/編集
    Config {
        /// SupabaseのURLを設定
        #[arg(long)]
        set_url: Option<String>,

        /// anonキーを設定
        #[arg(long)]
        set_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

impl Commands {
    /// 一覧コマンドのフィルタを解決
    pub fn category_filter(categories: &[String], filter: Option<WorkFilterArg>) -> CategoryFilter {
        match filter {
            Some(WorkFilterArg(work)) => work.category_filter(),
            None => CategoryFilter::from_tokens(categories),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

/// `WorkFilter` のCLI引数
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkFilterArg(pub WorkFilter);

impl std::str::FromStr for WorkFilterArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        WorkFilter::ALL
            .iter()
            .find(|f| f.label().to_lowercase() == wanted)
            .map(|f| WorkFilterArg(*f))
            .ok_or_else(|| format!("Unknown filter: {}. Use all, identity, digital, or visual", s))
    }
}
