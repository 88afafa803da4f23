use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "freshtech")]
#[command(about = "青果鮮度解析・商品ラベル抽出クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub backend_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 青果画像の鮮度を解析
    Freshness {
        /// 解析する画像
        #[arg(required = true)]
        image: PathBuf,

        /// 注釈付き画像の保存先（デフォルト: freshness-<日時>.jpg）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 商品ラベル画像から商品情報を抽出
    Extract {
        /// 正面画像（必須）
        #[arg(long)]
        front: Option<PathBuf>,

        /// 背面画像
        #[arg(long)]
        back: Option<PathBuf>,

        /// 側面画像
        #[arg(long)]
        side: Option<PathBuf>,

        /// 注釈付き画像の保存先（デフォルト: product-<日時>.jpg）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 商品情報をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// バックエンドURLを設定
        #[arg(long)]
        set_backend_url: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
