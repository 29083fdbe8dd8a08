//! 設定ファイル
//!
//! `$BRUSHSET_HOME/config.toml` からインポートの既定値とレジストリの場所を読み込む。
//!
//! ```toml
//! registry = "/path/to/registry.json"
//!
//! [import]
//! fake_user = true
//! verbose = false
//! overwrite = false
//! ```

use crate::error::{BrushSetError, Result};
use crate::fs::FileSystem;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";
pub const REGISTRY_FILE: &str = "registry.json";

/// インポートフラグの既定値
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportDefaults {
    pub fake_user: bool,
    pub verbose: bool,
    pub overwrite: bool,
}

/// brushset の設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// レジストリファイルのパス（未指定ならホーム配下）
    pub registry: Option<PathBuf>,
    pub import: ImportDefaults,
}

impl Config {
    /// TOML 文字列から読み込み
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if let Some(path) = &config.registry {
            if path.as_os_str().is_empty() {
                return Err(BrushSetError::Config(
                    "'registry' must not be empty".to_string(),
                ));
            }
        }
        Ok(config)
    }

    /// ホームディレクトリの config.toml を読み込み（無ければ既定値）
    pub fn load(fs: &dyn FileSystem, home: &Path) -> Result<Self> {
        let path = home.join(CONFIG_FILE);
        if !fs.exists(&path) {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs.read_to_string(&path)?;
        Self::parse(&content).map_err(|e| match e {
            BrushSetError::Toml(inner) => {
                BrushSetError::Config(format!("{}: {}", path.display(), inner))
            }
            other => other,
        })
    }

    /// 使用するレジストリファイルのパス
    ///
    /// 優先順位: CLI 引数 > 設定ファイル > `<home>/registry.json`
    pub fn registry_path(&self, home: &Path, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.registry.clone())
            .unwrap_or_else(|| home.join(REGISTRY_FILE))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
