use std::path::Path;

use image::RgbaImage;
use thiserror::Error;

/// Image decoding failures.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load image {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("image {path} is empty")]
    Empty { path: String },
}

/// Decodes an image file into straight-alpha RGBA8.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbaImage, AssetError> {
    let path = path.as_ref();
    let label = path.display().to_string();

    let decoded = image::open(path)
        .map_err(|source| AssetError::Image { path: label.clone(), source })?
        .to_rgba8();
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(AssetError::Empty { path: label });
    }

    log::info!("loaded image {label} ({}x{})", decoded.width(), decoded.height());
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn garbage_file_is_a_decode_error() {
        let path = std::env::temp_dir().join(format!("iconbench-garbage-{}.png", std::process::id()));
        std::fs::write(&path, b"definitely not an image").unwrap();

        let err = load_image(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, AssetError::Image { .. }));
    }

    #[test]
    fn missing_file_names_the_path() {
        let path = std::env::temp_dir().join("iconbench-missing-icon.png");
        let err = load_image(&path).unwrap_err();
        assert!(err.to_string().contains("iconbench-missing-icon.png"), "{err}");
    }

    #[test]
    fn loads_png_from_disk() {
        let path = std::env::temp_dir().join(format!("iconbench-icon-{}.png", std::process::id()));
        let src = RgbaImage::from_pixel(2, 2, Rgba([9, 8, 7, 255]));
        std::fs::write(&path, png_bytes(&src)).unwrap();

        let loaded = load_image(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.unwrap(), src);
    }
}
