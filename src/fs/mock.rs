//! テスト用モックファイルシステム

use super::*;
use crate::error::BrushSetError;
use std::collections::HashMap;
use std::sync::RwLock;

/// テスト用モックファイルシステム
///
/// パスごとの読み込み回数を記録するため、
/// 「ディスクから再読み込みしていないこと」を検証できる。
pub struct MockFs {
    files: RwLock<HashMap<String, MockFile>>,
    reads: RwLock<HashMap<String, usize>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MockKind {
    File,
    Dir,
}

struct MockFile {
    content: Vec<u8>,
    kind: MockKind,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            reads: RwLock::new(HashMap::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.add_file_bytes(path, content.as_bytes());
    }

    /// バイナリファイルを追加
    pub fn add_file_bytes(&self, path: &str, content: &[u8]) {
        self.files.write().unwrap().insert(
            path.to_string(),
            MockFile {
                content: content.to_vec(),
                kind: MockKind::File,
            },
        );
    }

    /// ディレクトリを追加
    pub fn add_dir(&self, path: &str) {
        self.files.write().unwrap().insert(
            path.to_string(),
            MockFile {
                content: Vec::new(),
                kind: MockKind::Dir,
            },
        );
    }

    /// 指定パスが read() された回数
    pub fn read_count(&self, path: &str) -> usize {
        self.reads.read().unwrap().get(path).copied().unwrap_or(0)
    }

    /// 全パス合計の read() 回数
    pub fn total_reads(&self) -> usize {
        self.reads.read().unwrap().values().sum()
    }

    fn not_found(path: &Path) -> BrushSetError {
        BrushSetError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("not found: {}", path.display()),
        ))
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap()
            .contains_key(path.to_string_lossy().as_ref())
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let key = path.to_string_lossy().to_string();
        let content = {
            let files = self.files.read().unwrap();
            match files.get(&key) {
                Some(f) if f.kind == MockKind::File => f.content.clone(),
                Some(_) => {
                    return Err(BrushSetError::Io(std::io::Error::new(
                        std::io::ErrorKind::IsADirectory,
                        "Is a directory",
                    )))
                }
                None => return Err(Self::not_found(path)),
            }
        };
        *self.reads.write().unwrap().entry(key).or_insert(0) += 1;
        Ok(content)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .read()
            .unwrap()
            .get(path.to_string_lossy().as_ref())
            .map(|f| String::from_utf8_lossy(&f.content).to_string())
            .ok_or_else(|| Self::not_found(path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let path_str = path.to_string_lossy().to_string();
        let files = self.files.read().unwrap();

        match files.get(&path_str) {
            Some(file) if file.kind != MockKind::Dir => {
                return Err(BrushSetError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotADirectory,
                    "Not a directory",
                )));
            }
            Some(_) => {}
            None => return Err(Self::not_found(path)),
        }

        let prefix = if path_str.ends_with('/') {
            path_str.clone()
        } else {
            format!("{}/", path_str)
        };

        let entries = files
            .iter()
            .filter(|(k, _)| {
                // 直接の子のみ（サブディレクトリの中身は除外）
                k.strip_prefix(&prefix)
                    .map(|rest| !rest.is_empty() && !rest.contains('/'))
                    .unwrap_or(false)
            })
            .map(|(k, _)| PathBuf::from(k))
            .collect();

        Ok(entries)
    }
}
