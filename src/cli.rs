use clap::{Parser, Subcommand};

use crate::commands::{import, list, purge};

#[derive(Debug, Parser)]
#[command(name = "brushset")]
#[command(about = "Batch image importer for texture registries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// ディレクトリまたは選択したファイルから画像をインポート
    Import(import::Args),

    /// 登録済みのテクスチャ・画像一覧
    List(list::Args),

    /// fake user でないアセットを削除
    Purge(purge::Args),
}
