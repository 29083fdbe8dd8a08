//! brushset purge コマンド
//!
//! fake user の付いていないテクスチャと、どこからも参照されていない画像を削除する。

use super::Context;
use crate::output::PurgeSummary;
use crate::registry::{AssetRegistry, PurgeReport};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Show what would be removed without modifying the registry
    #[arg(long)]
    pub dry_run: bool,

    /// Registry file to purge (overrides config)
    #[arg(long, value_name = "PATH")]
    pub registry: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<(), String> {
    let context = Context::load(args.registry.as_deref()).map_err(|e| e.to_string())?;
    let mut store = context.store();

    let candidates = store
        .registry()
        .map(|registry| registry.purge_candidates())
        .map_err(|e| e.to_string())?;

    let report = if args.dry_run || candidates.is_empty() {
        candidates
    } else {
        store
            .update(|registry| Ok(registry.purge()))
            .map_err(|e| e.to_string())?
    };

    print_report(&report, args.dry_run);
    Ok(())
}

fn print_report(report: &PurgeReport, dry_run: bool) {
    for name in &report.textures {
        println!("  texture {}", name);
    }
    for name in &report.images {
        println!("  image   {}", name);
    }

    let summary = PurgeSummary::format(report.textures.len(), report.images.len(), dry_run);
    println!("{} {}", summary.prefix, summary.message);
}
