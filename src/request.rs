//! インポート要求
//!
//! 「ディレクトリ全体」か「明示的なファイル一覧」かを列挙型で区別する。

use crate::error::Result;
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};

/// インポート元の指定方法
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    /// ディレクトリ内の全エントリを対象にする
    DirectoryMode { directory: PathBuf },
    /// 指定されたファイル名をその順序のまま対象にする（存在確認はしない）
    FileListMode {
        directory: PathBuf,
        names: Vec<String>,
    },
}

impl ImportSource {
    /// ファイル選択ダイアログ形式の入力から変換
    ///
    /// 空リスト、または先頭が空文字列のリストは「未選択」を意味し、
    /// ディレクトリモードになる。
    pub fn from_selection(directory: impl Into<PathBuf>, names: Vec<String>) -> Self {
        let directory = directory.into();
        match names.first() {
            None => ImportSource::DirectoryMode { directory },
            Some(first) if first.is_empty() => ImportSource::DirectoryMode { directory },
            Some(_) => ImportSource::FileListMode { directory, names },
        }
    }

    /// 対象ディレクトリ
    pub fn directory(&self) -> &Path {
        match self {
            ImportSource::DirectoryMode { directory } => directory,
            ImportSource::FileListMode { directory, .. } => directory,
        }
    }

    /// 処理対象のファイル一覧を解決
    ///
    /// ディレクトリモードでは出力を安定させるため名前順に並べる。
    /// ディレクトリが読めない場合はそのまま Err を返す。
    pub fn resolve_files(&self, fs: &dyn FileSystem) -> Result<Vec<ResolvedFile>> {
        match self {
            ImportSource::DirectoryMode { directory } => {
                let mut files: Vec<ResolvedFile> = fs
                    .read_dir(directory)?
                    .into_iter()
                    .filter_map(|path| {
                        let name = path.file_name()?.to_string_lossy().into_owned();
                        Some(ResolvedFile { name, path })
                    })
                    .collect();
                files.sort_by(|a, b| a.name.cmp(&b.name));
                Ok(files)
            }
            ImportSource::FileListMode { directory, names } => Ok(names
                .iter()
                .map(|name| ResolvedFile::in_directory(directory, name))
                .collect()),
        }
    }
}

/// 解決済みの1ファイル
///
/// `path` は読み込みに使う実パス、`name` はレコード名に使う表示名。
/// UTF-8 でない名前は `name` だけが置換文字になり、`path` はそのまま残る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub name: String,
    pub path: PathBuf,
}

impl ResolvedFile {
    /// 明示指定されたファイル名を解決
    ///
    /// `sub/a.png` のような区切りを含む指定でも、名前は画像の命名と同じく
    /// パスの末尾要素になる。
    fn in_directory(directory: &Path, name: &str) -> Self {
        let path = directory.join(name);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.to_string());
        Self { name, path }
    }
}

/// インポート要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    pub source: ImportSource,
    /// fake user（ガベージコレクション対象外）として登録するか
    pub persistent: bool,
    /// 1ファイルごとにログを出すか
    pub verbose: bool,
    /// 同名のテクスチャ・画像が既にあれば再利用するか
    pub overwrite: bool,
}

impl ImportRequest {
    /// フラグをすべて false にした要求を作成
    pub fn new(source: ImportSource) -> Self {
        Self {
            source,
            persistent: false,
            verbose: false,
            overwrite: false,
        }
    }

    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod tests;
