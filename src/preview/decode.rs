/// Image preview decoding
///
/// Decodes an image blob off the UI thread and downscales it so the
/// modal never uploads a huge texture. The result is an iced handle.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::sync::Arc;

/// Decode `bytes` into a handle no larger than `max_dimension` on either edge
pub async fn decode_preview(bytes: Arc<[u8]>, max_dimension: u32) -> Result<Handle, String> {
    // Spawn blocking because decoding is CPU-intensive
    tokio::task::spawn_blocking(move || decode_preview_blocking(&bytes, max_dimension))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

fn decode_preview_blocking(bytes: &[u8], max_dimension: u32) -> Result<Handle, String> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| format!("Failed to decode image: {}", e))?;

    let img = if img.width() > max_dimension || img.height() > max_dimension {
        // Aspect ratio is preserved by `resize`
        img.resize(max_dimension, max_dimension, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!("🖼️  Decoded preview {}x{}", width, height);

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::new(width, height);
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_small_image_decodes() {
        assert!(decode_preview_blocking(&png(4, 3), 1280).is_ok());
    }

    #[test]
    fn test_garbage_fails() {
        let err = decode_preview_blocking(b"not an image", 1280).unwrap_err();
        assert!(err.starts_with("Failed to decode image"));
    }

    #[tokio::test]
    async fn test_async_decode() {
        let bytes: Arc<[u8]> = Arc::from(png(64, 32));
        assert!(decode_preview(bytes, 16).await.is_ok());
    }
}
