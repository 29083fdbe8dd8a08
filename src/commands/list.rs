//! brushset list コマンド
//!
//! レジストリに登録されたテクスチャ（または画像）の一覧を表示する。

use super::Context;
use crate::registry::{AssetRegistry, ImageData, TextureRecord};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// List image payloads instead of textures
    #[arg(long)]
    pub images: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Registry file to read (overrides config)
    #[arg(long, value_name = "PATH")]
    pub registry: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<(), String> {
    let context = Context::load(args.registry.as_deref()).map_err(|e| e.to_string())?;
    let mut store = context.store();
    let registry = store.registry().map_err(|e| e.to_string())?;

    if args.images {
        let images = registry.images();
        if args.json {
            print_json(&images)?;
        } else {
            print_images(&images, registry);
        }
    } else {
        let textures = registry.textures();
        if args.json {
            print_json(&textures)?;
        } else {
            print_textures(&textures);
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(items: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(items)
        .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn fake_user_mark(persistent: bool) -> String {
    if persistent {
        "F".green().to_string()
    } else {
        "-".to_string()
    }
}

fn print_textures(textures: &[&TextureRecord]) {
    if textures.is_empty() {
        println!("No textures registered");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Image", "Fake User", "Source", "Created"]);

    for texture in textures {
        table.add_row(vec![
            texture.name.clone(),
            texture.image.clone().unwrap_or_else(|| "-".to_string()),
            fake_user_mark(texture.persistent),
            texture.source_path.clone(),
            texture.created_at.clone(),
        ]);
    }

    println!("{table}");
    println!("{} texture(s)", textures.len());
}

/// 画像を参照しているテクスチャ数
fn user_count(image: &ImageData, registry: &dyn AssetRegistry) -> usize {
    registry
        .textures()
        .iter()
        .filter(|t| t.image.as_deref() == Some(image.name.as_str()))
        .count()
}

fn print_images(images: &[&ImageData], registry: &dyn AssetRegistry) {
    if images.is_empty() {
        println!("No images registered");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Size", "Users", "Fake User", "Source"]);

    for image in images {
        table.add_row(vec![
            image.name.clone(),
            format!("{} B", image.byte_len),
            user_count(image, registry).to_string(),
            fake_user_mark(image.persistent),
            image.source_path.clone(),
        ]);
    }

    println!("{table}");
    println!("{} image(s)", images.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFs;
    use crate::registry::MemoryRegistry;
    use std::path::Path;

    #[test]
    fn user_count_counts_bound_textures() {
        let fs = MockFs::new();
        fs.add_file("/b/a.png", "a");
        let mut registry = MemoryRegistry::new();
        let image = registry.load_image(&fs, Path::new("/b/a.png")).unwrap();
        let first = registry.create_texture("a.png", Path::new("/b/a.png"));
        let second = registry.create_texture("a.png", Path::new("/b/a.png"));
        registry.bind_image(&first, &image).unwrap();
        registry.bind_image(&second, &image).unwrap();

        let data = registry.image(&image).unwrap().clone();
        assert_eq!(user_count(&data, &registry), 2);
    }

    #[test]
    fn fake_user_mark_for_unprotected_asset() {
        assert_eq!(fake_user_mark(false), "-");
    }
}
