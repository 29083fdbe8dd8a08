use thiserror::Error;

/// brushset 統一エラー型
#[derive(Debug, Error)]
pub enum BrushSetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Texture not found: {0}")]
    TextureNotFound(String),

    #[error("Image not found: {0}")]
    ImageNotFound(String),
}

pub type Result<T> = std::result::Result<T, BrushSetError>;

impl BrushSetError {
    /// ファイルが見つからないことに起因するエラーかどうか
    #[cfg(test)]
    pub fn is_not_found(&self) -> bool {
        match self {
            BrushSetError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            BrushSetError::TextureNotFound(_) | BrushSetError::ImageNotFound(_) => true,
            _ => false,
        }
    }
}
