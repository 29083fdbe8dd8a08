//! インメモリのアセットレジストリ

use super::{unique_name, AssetRegistry, ImageData, PurgeReport, TextureRecord};
use crate::error::{BrushSetError, Result};
use crate::fs::FileSystem;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, BTreeSet};
use std::hash::Hasher;
use std::path::Path;

/// BTreeMap ベースのレジストリ
///
/// `RegistryStore` はこれを JSON としてそのまま永続化する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRegistry {
    #[serde(default)]
    textures: BTreeMap<String, TextureRecord>,
    #[serde(default)]
    images: BTreeMap<String, ImageData>,
}

impl MemoryRegistry {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    #[cfg(test)]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    fn texture_mut(&mut self, name: &str) -> Result<&mut TextureRecord> {
        self.textures
            .get_mut(name)
            .ok_or_else(|| BrushSetError::TextureNotFound(name.to_string()))
    }

    fn image_mut(&mut self, name: &str) -> Result<&mut ImageData> {
        self.images
            .get_mut(name)
            .ok_or_else(|| BrushSetError::ImageNotFound(name.to_string()))
    }
}

impl AssetRegistry for MemoryRegistry {
    fn texture(&self, name: &str) -> Option<&TextureRecord> {
        self.textures.get(name)
    }

    fn image(&self, name: &str) -> Option<&ImageData> {
        self.images.get(name)
    }

    fn create_texture(&mut self, name: &str, source_path: &Path) -> String {
        let name = unique_name(name, |n| self.textures.contains_key(n));
        log::debug!("create texture '{}'", name);
        self.textures.insert(
            name.clone(),
            TextureRecord {
                name: name.clone(),
                source_path: source_path.to_string_lossy().into_owned(),
                persistent: false,
                image: None,
                created_at: Utc::now().to_rfc3339(),
            },
        );
        name
    }

    fn load_image(&mut self, fs: &dyn FileSystem, path: &Path) -> Result<String> {
        let bytes = fs.read(path)?;

        let mut hasher = DefaultHasher::new();
        hasher.write(&bytes);

        let base = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                BrushSetError::Registry(format!("No file name in path: {}", path.display()))
            })?;
        let name = unique_name(&base, |n| self.images.contains_key(n));
        log::debug!("load image '{}' ({} bytes)", name, bytes.len());

        self.images.insert(
            name.clone(),
            ImageData {
                name: name.clone(),
                source_path: path.to_string_lossy().into_owned(),
                persistent: false,
                byte_len: bytes.len() as u64,
                content_hash: hasher.finish(),
                loaded_at: Utc::now().to_rfc3339(),
            },
        );
        Ok(name)
    }

    fn set_texture_persistent(&mut self, name: &str, persistent: bool) -> Result<()> {
        self.texture_mut(name)?.persistent = persistent;
        Ok(())
    }

    fn set_image_persistent(&mut self, name: &str, persistent: bool) -> Result<()> {
        self.image_mut(name)?.persistent = persistent;
        Ok(())
    }

    fn bind_image(&mut self, texture: &str, image: &str) -> Result<()> {
        if !self.images.contains_key(image) {
            return Err(BrushSetError::ImageNotFound(image.to_string()));
        }
        self.texture_mut(texture)?.image = Some(image.to_string());
        Ok(())
    }

    fn textures(&self) -> Vec<&TextureRecord> {
        self.textures.values().collect()
    }

    fn images(&self) -> Vec<&ImageData> {
        self.images.values().collect()
    }

    fn purge_candidates(&self) -> PurgeReport {
        let textures: Vec<String> = self
            .textures
            .values()
            .filter(|t| !t.persistent)
            .map(|t| t.name.clone())
            .collect();

        // 残るテクスチャから参照されている画像
        let referenced: BTreeSet<&str> = self
            .textures
            .values()
            .filter(|t| t.persistent)
            .filter_map(|t| t.image.as_deref())
            .collect();

        let images = self
            .images
            .values()
            .filter(|i| !i.persistent && !referenced.contains(i.name.as_str()))
            .map(|i| i.name.clone())
            .collect();

        PurgeReport { textures, images }
    }

    fn purge(&mut self) -> PurgeReport {
        let report = self.purge_candidates();
        for name in &report.textures {
            self.textures.remove(name);
        }
        for name in &report.images {
            self.images.remove(name);
        }
        report
    }
}
