//! # Link-to-image Module
//!
//! Encodes arbitrary text as a QR code and saves it as a PNG.

use std::path::{Path, PathBuf};

use image::Luma;
use qrcode::{EcLevel, QrCode};
use tracing::info;

use crate::errors::QrError;

/// Pixel size of one QR module
pub const MODULE_PIXELS: u32 = 10;

/// Append `.png` unless the path already ends with it (case-insensitive)
pub fn normalize_png_path(path: &Path) -> PathBuf {
    let has_png_suffix = path
        .to_string_lossy()
        .to_lowercase()
        .ends_with(".png");

    if has_png_suffix {
        path.to_path_buf()
    } else {
        let mut raw = path.as_os_str().to_os_string();
        raw.push(".png");
        PathBuf::from(raw)
    }
}

/// Encode `text` as a black-on-white QR code and save it; returns the final path
pub fn encode_link_as_image(text: &str, path: impl AsRef<Path>) -> Result<PathBuf, QrError> {
    let path = normalize_png_path(path.as_ref());

    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::L)?;
    let image = code
        .render::<Luma<u8>>()
        .dark_color(Luma([0u8]))
        .light_color(Luma([255u8]))
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .quiet_zone(true)
        .build();

    image.save(&path)?;
    info!(path = %path.display(), width = image.width(), "QR code saved");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_extension_is_appended_once() {
        assert_eq!(normalize_png_path(Path::new("invite")), PathBuf::from("invite.png"));
        assert_eq!(normalize_png_path(Path::new("invite.png")), PathBuf::from("invite.png"));
        assert_eq!(normalize_png_path(Path::new("INVITE.PNG")), PathBuf::from("INVITE.PNG"));
        assert_eq!(normalize_png_path(Path::new("invite.jpg")), PathBuf::from("invite.jpg.png"));
    }
}
