//! 画像拡張子フィルタ
//!
//! インポート対象とみなすファイルを拡張子で判定する。
//! 判定はファイル名の末尾に対する大文字小文字を区別しない比較で、
//! ファイル内容は見ない。

/// 認識する画像拡張子（ドット付き、小文字）
pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".bmp", ".png", ".jpg", ".jp2", ".rgb", ".dds", ".hdr", ".exr", ".dpx", ".cin", ".tga", ".tif",
];

/// ファイル名が認識済みの画像拡張子で終わるか
///
/// `".png"` のように拡張子だけの名前も一致扱いになる。
pub fn is_image_file(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
#[path = "extension_test.rs"]
mod tests;
