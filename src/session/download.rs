use crate::error::{ImagenError, Result};
use image::codecs::jpeg::JpegEncoder;
use std::path::Path;

/// Matches the fixed export quality of the original download flow.
pub const JPEG_QUALITY: u8 = 90;

/// Decode fetched image bytes (any supported format) and re-encode them as
/// a fixed-quality JPEG.
pub fn reencode_jpeg(bytes: &[u8]) -> Result<Vec<u8>> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| ImagenError::Download(format!("Failed to decode image: {}", e)))?;

    // JPEG has no alpha channel; flatten before encoding.
    let rgb = decoded.to_rgb8();

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| ImagenError::Download(format!("Failed to encode JPEG: {}", e)))?;

    Ok(out)
}

pub fn save_jpeg(bytes: &[u8], path: &Path) -> Result<()> {
    let jpeg = reencode_jpeg(bytes)?;
    std::fs::write(path, jpeg)
        .map_err(|e| ImagenError::Download(format!("Failed to write {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png_fixture() -> Vec<u8> {
        let img = RgbaImage::from_fn(4, 4, |x, y| {
            image::Rgba([(x * 60) as u8, (y * 60) as u8, 128, 255])
        });
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_reencode_png_to_jpeg() {
        let jpeg = reencode_jpeg(&png_fixture()).unwrap();
        let reloaded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(reloaded.width(), 4);
        assert_eq!(reloaded.height(), 4);
        assert_eq!(
            image::guess_format(&jpeg).unwrap(),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_reencode_rejects_garbage() {
        let err = reencode_jpeg(b"not an image").unwrap_err();
        assert!(matches!(err, ImagenError::Download(_)));
    }
}
