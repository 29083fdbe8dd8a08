use std::path::PathBuf;

/// brushset のホームディレクトリを指す環境変数
pub const HOME_ENV: &str = "BRUSHSET_HOME";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// 設定とレジストリを置くディレクトリ
    ///
    /// 優先順位: `$BRUSHSET_HOME` > `$HOME/.brushset` > `./.brushset`
    pub fn brushset_home() -> PathBuf {
        if let Some(home) = Self::get(HOME_ENV) {
            return PathBuf::from(home);
        }
        Self::get("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".brushset")
    }
}
