//! brushset import コマンド
//!
//! ディレクトリ内の画像、または指定した画像ファイルをレジストリにインポートする。

use super::Context;
use crate::config::ImportDefaults;
use crate::fs::RealFs;
use crate::importer::{BatchImporter, ImportResult};
use crate::output::{ConsoleLog, ImportLog, QuietLog};
use crate::request::{ImportRequest, ImportSource};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Directory containing the images
    pub directory: PathBuf,

    /// Image files inside DIRECTORY to import (every file in DIRECTORY when omitted)
    pub files: Vec<String>,

    /// Import textures and images with fake user so purge keeps them
    #[arg(long)]
    pub fake_user: bool,

    /// Print one line per imported file
    #[arg(long, short)]
    pub verbose: bool,

    /// Reuse textures and images already registered under the same name
    #[arg(long)]
    pub overwrite: bool,

    /// Print the import result as JSON instead of progress lines
    #[arg(long)]
    pub json: bool,

    /// Registry file to import into (overrides config)
    #[arg(long, value_name = "PATH")]
    pub registry: Option<PathBuf>,
}

/// 引数と設定の既定値から要求を組み立てる
///
/// フラグは加算的で、CLI で指定すれば設定値に関わらず有効になる。
pub fn build_request(args: &Args, defaults: ImportDefaults) -> ImportRequest {
    let source = ImportSource::from_selection(&args.directory, args.files.clone());
    ImportRequest::new(source)
        .persistent(args.fake_user || defaults.fake_user)
        .verbose(args.verbose || defaults.verbose)
        .overwrite(args.overwrite || defaults.overwrite)
}

pub fn run(args: Args) -> Result<(), String> {
    let context = Context::load(args.registry.as_deref()).map_err(|e| e.to_string())?;
    let request = build_request(&args, context.config.import);

    let fs = RealFs;
    let importer = BatchImporter::new(&fs);
    let mut console = ConsoleLog::new();
    let mut quiet = QuietLog;
    let progress: &mut dyn ImportLog = if args.json {
        &mut quiet
    } else {
        &mut console
    };

    let mut store = context.store();
    let result: ImportResult = store
        .update(|registry| importer.run(&request, registry, progress))
        .map_err(|e| e.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
        println!("{}", json);
    }

    Ok(())
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;
