//! バッチインポーター
//!
//! 要求からファイル一覧を解決し、画像拡張子のファイルごとに
//! テクスチャレコードと画像ペイロードを作成（または再利用）して紐付ける。
//!
//! 読み込みエラーは捕捉せずにそのまま返す。途中まで処理した分の
//! レジストリ変更を残すかどうかは呼び出し側（`RegistryStore::update`）が決める。

use crate::error::Result;
use crate::extension::is_image_file;
use crate::fs::FileSystem;
use crate::output::ImportLog;
use crate::registry::AssetRegistry;
use crate::request::{ImportRequest, ResolvedFile};
use serde::Serialize;

/// インポートされた1ファイル分の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedAsset {
    /// 入力ファイル名
    pub file: String,
    /// 紐付け先テクスチャ名
    pub texture: String,
    /// 紐付けた画像名
    pub image: String,
    /// 既存のテクスチャと画像を再利用したか（true ならディスクから読んでいない）
    pub reused: bool,
}

/// インポート結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportResult {
    pub imported_count: usize,
    pub assets: Vec<ImportedAsset>,
}

/// バッチインポーター
pub struct BatchImporter<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> BatchImporter<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// インポートを実行
    pub fn run(
        &self,
        request: &ImportRequest,
        registry: &mut dyn AssetRegistry,
        progress: &mut dyn ImportLog,
    ) -> Result<ImportResult> {
        let files: Vec<ResolvedFile> = request
            .source
            .resolve_files(self.fs)?
            .into_iter()
            .filter(|f| {
                let keep = is_image_file(&f.name);
                if !keep {
                    log::debug!("skip non-image file '{}'", f.name);
                }
                keep
            })
            .collect();

        progress.begin(files.len());
        let mut result = ImportResult::default();

        for file in &files {
            let asset = self.import_one(request, registry, file)?;
            progress.imported(&file.name, request.verbose);
            result.assets.push(asset);
            result.imported_count += 1;
        }

        progress.finished(result.imported_count);
        Ok(result)
    }

    fn import_one(
        &self,
        request: &ImportRequest,
        registry: &mut dyn AssetRegistry,
        file: &ResolvedFile,
    ) -> Result<ImportedAsset> {
        let name = file.name.as_str();

        // テクスチャと画像が両方そろっている場合だけ再利用する
        let existing = request.overwrite
            && registry.texture(name).is_some()
            && registry.image(name).is_some();

        let (texture, image) = if existing {
            (name.to_string(), name.to_string())
        } else {
            let texture = registry.create_texture(name, &file.path);
            let image = registry.load_image(self.fs, &file.path)?;
            (texture, image)
        };
        log::debug!(
            "'{}': texture '{}', image '{}' (reused: {})",
            name,
            texture,
            image,
            existing
        );

        registry.set_texture_persistent(&texture, request.persistent)?;
        registry.set_image_persistent(&image, request.persistent)?;
        registry.bind_image(&texture, &image)?;

        Ok(ImportedAsset {
            file: name.to_string(),
            texture,
            image,
            reused: existing,
        })
    }
}

#[cfg(test)]
#[path = "importer_test.rs"]
mod tests;
