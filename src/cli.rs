use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spell-catalog")]
#[command(about = "法术文档スキャン・カタログ生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 進捗表示を抑制
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// フォルダをスキャンしてカタログJSONを出力
    Scan {
        /// スキャンルート（省略時は設定値）
        root: Option<PathBuf>,

        /// 出力JSONファイル（省略時は設定値）。既存のディレクトリなら spells_data.json を作成
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 連番付与前にパス順へ並べる
        #[arg(long)]
        sort_paths: bool,

        /// 書き出さずに集計のみ表示
        #[arg(long)]
        dry_run: bool,
    },

    /// 出力済みカタログの分類統計を表示
    Stats {
        /// カタログJSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 組み込みの分類ルールを表示
    Rules,

    /// 設定を表示/編集
    Config {
        /// 既定のスキャンルートを設定
        #[arg(long)]
        set_root: Option<PathBuf>,

        /// 既定の出力先を設定
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
