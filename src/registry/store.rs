//! レジストリの永続化（状態マシン）
//!
//! ```text
//!                    ┌─────────────┐
//!              ┌────▶│    Idle     │◀────┐
//!              │     └──────┬──────┘     │
//!              │    load()  │            │
//!              │            ▼            │
//!              │     ┌─────────────┐     │
//!              │     │   Loaded    │─────┤ update() が Err
//!              │     └──────┬──────┘     │
//!              │   update() │ Ok         │
//!              │            ▼            │
//!              │     ┌─────────────┐     │
//!              │     │  Modified   │     │
//!              │     └──────┬──────┘     │
//!              │       save()            │
//!              └────────────┴────────────┘
//! ```

use super::MemoryRegistry;
use crate::error::{BrushSetError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// 状態マシンの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Loaded,
    Modified,
}

/// JSON ファイルに保存されるレジストリ
pub struct RegistryStore {
    path: PathBuf,
    state: State,
    registry: Option<MemoryRegistry>,
}

impl RegistryStore {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: State::Idle,
            registry: None,
        }
    }

    /// ファイルを読み込み（Idle → Loaded）
    ///
    /// ファイルが無ければ空のレジストリとして扱う。
    pub fn load(&mut self) -> Result<&MemoryRegistry> {
        let registry = match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                BrushSetError::Registry(format!(
                    "Failed to parse {}: {}",
                    self.path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => MemoryRegistry::default(),
            Err(e) => return Err(BrushSetError::Io(e)),
        };

        self.state = State::Loaded;
        let registry: &MemoryRegistry = self.registry.insert(registry);
        Ok(registry)
    }

    /// 読み込み済みのレジストリを参照（未読み込みなら読み込む）
    pub fn registry(&mut self) -> Result<&MemoryRegistry> {
        if self.state == State::Idle {
            return self.load();
        }
        self.loaded()
    }

    /// レジストリを変更して保存（Loaded → Modified → Idle）
    ///
    /// クロージャが Err を返した場合は保存せず、メモリ上の変更も破棄する。
    pub fn update<T>(&mut self, f: impl FnOnce(&mut MemoryRegistry) -> Result<T>) -> Result<T> {
        if self.state == State::Idle {
            self.load()?;
        }

        let registry = self
            .registry
            .as_mut()
            .ok_or_else(|| BrushSetError::Registry("No registry loaded".to_string()))?;

        match f(registry) {
            Ok(value) => {
                self.state = State::Modified;
                self.save()?;
                Ok(value)
            }
            Err(e) => {
                self.registry = None;
                self.state = State::Idle;
                Err(e)
            }
        }
    }

    /// 変更があればアトミックに保存（Modified → Idle）
    fn save(&mut self) -> Result<()> {
        if self.state != State::Modified {
            return Ok(());
        }
        let registry = self.loaded()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // 同じディレクトリに一時ファイルを作成
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| {
            BrushSetError::Registry(format!("Failed to create temp file: {}", e))
        })?;

        let content = serde_json::to_string_pretty(registry)?;
        temp_file.write_all(content.as_bytes())?;

        // アトミックに置換
        temp_file.persist(&self.path).map_err(|e| {
            BrushSetError::Registry(format!("Failed to persist registry: {}", e))
        })?;

        log::info!("saved registry to {}", self.path.display());
        self.state = State::Idle;
        Ok(())
    }

    fn loaded(&self) -> Result<&MemoryRegistry> {
        self.registry
            .as_ref()
            .ok_or_else(|| BrushSetError::Registry("No registry loaded".to_string()))
    }

    /// 現在の状態を取得（デバッグ用）
    #[cfg(test)]
    pub fn current_state(&self) -> &'static str {
        match self.state {
            State::Idle => "Idle",
            State::Loaded => "Loaded",
            State::Modified => "Modified",
        }
    }
}
