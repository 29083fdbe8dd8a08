//! ファイルシステム抽象化
//!
//! インポート対象ディレクトリの列挙と画像ファイルの読み込みを抽象化する。
//! テスト時に MockFs を注入してディスクアクセスをモック化できる。

use crate::error::Result;
use std::path::{Path, PathBuf};

/// ファイルシステム操作を抽象化するトレイト
///
/// 本番コードでは RealFs を使用する。
pub trait FileSystem: Send + Sync {
    /// パスが存在するか（シンボリックリンク追従）
    fn exists(&self, path: &Path) -> bool;

    /// ファイル内容をバイト列として読み込み
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// ファイル内容を文字列として読み込み
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// ディレクトリ直下のエントリのパスを取得
    ///
    /// - 順序は未定義
    /// - パスは OS から返されたまま（UTF-8 でない名前も変換しない）
    /// - 引数がディレクトリでない場合は Err
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;
}

/// 本番用ファイルシステム実装
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(std::fs::read(path)?)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            entries.push(entry?.path());
        }
        Ok(entries)
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "fs_test.rs"]
mod tests;
