//! アセットレジストリ
//!
//! テクスチャレコードと画像ペイロードを名前で管理する。
//! インポーターはホストのデータベースを直接触らず、
//! `AssetRegistry` トレイト経由で操作する。

mod memory;
mod store;

pub use memory::MemoryRegistry;
pub use store::RegistryStore;

use crate::error::Result;
use crate::fs::FileSystem;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// テクスチャレコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureRecord {
    /// レジストリ内で一意な名前
    pub name: String,
    /// 作成元ファイルパス
    pub source_path: String,
    /// fake user（purge 対象外）
    pub persistent: bool,
    /// 紐付いている画像の名前
    pub image: Option<String>,
    /// 作成日時（RFC3339形式）
    pub created_at: String,
}

/// 画像ペイロード
///
/// 画素はデコードせず、読み込んだバイト列の長さとハッシュだけを持つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub name: String,
    pub source_path: String,
    pub persistent: bool,
    pub byte_len: u64,
    pub content_hash: u64,
    /// 読み込み日時（RFC3339形式）
    pub loaded_at: String,
}

/// purge の結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PurgeReport {
    pub textures: Vec<String>,
    pub images: Vec<String>,
}

impl PurgeReport {
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty() && self.images.is_empty()
    }
}

/// ホスト側アセットデータベースの抽象化
///
/// 名前はレジストリ内で一意。作成時に同名が存在する場合は
/// `.001`, `.002` ... のサフィックスを付けて別レコードにする。
pub trait AssetRegistry {
    /// 名前でテクスチャを取得
    fn texture(&self, name: &str) -> Option<&TextureRecord>;

    /// 名前で画像を取得
    fn image(&self, name: &str) -> Option<&ImageData>;

    /// テクスチャを新規作成し、実際に付けられた名前を返す
    fn create_texture(&mut self, name: &str, source_path: &Path) -> String;

    /// ファイルを読み込んで画像を新規作成し、実際に付けられた名前を返す
    ///
    /// 画像名はファイル名から決まる。読み込みエラーはそのまま返す。
    fn load_image(&mut self, fs: &dyn FileSystem, path: &Path) -> Result<String>;

    fn set_texture_persistent(&mut self, name: &str, persistent: bool) -> Result<()>;

    fn set_image_persistent(&mut self, name: &str, persistent: bool) -> Result<()>;

    /// テクスチャに画像を紐付ける（既存の紐付けは上書き）
    fn bind_image(&mut self, texture: &str, image: &str) -> Result<()>;

    /// 全テクスチャ（名前順）
    fn textures(&self) -> Vec<&TextureRecord>;

    /// 全画像（名前順）
    fn images(&self) -> Vec<&ImageData>;

    /// purge で削除される予定のレコード（変更しない）
    fn purge_candidates(&self) -> PurgeReport;

    /// persistent でないテクスチャと、参照されていない persistent でない画像を削除
    fn purge(&mut self) -> PurgeReport;
}

/// 既存名と衝突しない名前を生成
///
/// `base` が空いていればそのまま、埋まっていれば `base.001` から順に探す。
pub fn unique_name(base: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(base) {
        return base.to_string();
    }
    (1u32..)
        .map(|n| format!("{}.{:03}", base, n))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
