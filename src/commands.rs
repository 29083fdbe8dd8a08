use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::env::EnvVar;
use crate::error::Result;
use crate::fs::RealFs;
use crate::registry::RegistryStore;
use std::path::{Path, PathBuf};

pub mod import;
pub mod list;
pub mod purge;

pub fn dispatch(cli: Cli) -> std::result::Result<(), String> {
    match cli.command {
        Command::Import(args) => import::run(args),
        Command::List(args) => list::run(args),
        Command::Purge(args) => purge::run(args),
    }
}

/// コマンド共通の実行コンテキスト
///
/// ホームディレクトリ、設定、レジストリファイルの場所をまとめて解決する。
pub struct Context {
    pub config: Config,
    pub registry_path: PathBuf,
}

impl Context {
    pub fn load(registry_override: Option<&Path>) -> Result<Self> {
        let home = EnvVar::brushset_home();
        let config = Config::load(&RealFs, &home)?;
        let registry_path = config.registry_path(&home, registry_override);
        log::debug!("registry: {}", registry_path.display());
        Ok(Self {
            config,
            registry_path,
        })
    }

    pub fn store(&self) -> RegistryStore {
        RegistryStore::with_path(&self.registry_path)
    }
}
