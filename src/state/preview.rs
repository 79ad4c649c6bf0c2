/// Preview generation for selected images
/// Reads the file off the UI thread and encodes it as a data URI
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use super::data::{ImageFile, ImagePreview};
use crate::error::ImageError;

/// Largest image the form accepts ("up to 10MB" in the drop zone)
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Generate a preview for an image file
pub async fn load_preview(file: ImageFile) -> Result<ImagePreview, ImageError> {
    // Spawn blocking task for file IO + header probing
    tokio::task::spawn_blocking(move || load_preview_blocking(&file))
        .await
        .map_err(|e| ImageError::Join(e.to_string()))?
}

/// Blocking version of preview generation
fn load_preview_blocking(file: &ImageFile) -> Result<ImagePreview, ImageError> {
    let bytes = read_image_bytes(&file.path)?;
    let (width, height) = probe_dimensions(&file.path, &bytes)?;

    tracing::debug!(
        "🖼️  Decoded {} ({}x{}, {} bytes)",
        file.file_name,
        width,
        height,
        bytes.len()
    );

    Ok(ImagePreview {
        data_uri: encode_data_uri(&file.media_type, &bytes),
        width,
        height,
    })
}

/// Read an image file, enforcing the size limit before loading it
pub fn read_image_bytes(path: &Path) -> Result<Vec<u8>, ImageError> {
    let read_err = |e: std::io::Error| ImageError::Read {
        path: path.to_path_buf(),
        source: Arc::new(e),
    };

    let size = std::fs::metadata(path).map_err(read_err)?.len();
    if size > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }

    std::fs::read(path).map_err(read_err)
}

/// Async counterpart of `read_image_bytes`, used when building the payload
pub async fn read_image_bytes_async(path: &Path) -> Result<Vec<u8>, ImageError> {
    let read_err = |e: std::io::Error| ImageError::Read {
        path: path.to_path_buf(),
        source: Arc::new(e),
    };

    let size = tokio::fs::metadata(path).await.map_err(read_err)?.len();
    if size > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }

    tokio::fs::read(path).await.map_err(read_err)
}

/// Check the bytes really are an image and return its dimensions
fn probe_dimensions(path: &Path, bytes: &[u8]) -> Result<(u32, u32), ImageError> {
    let not_an_image = || ImageError::NotAnImage { path: path.to_path_buf() };

    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|_| not_an_image())?
        .into_dimensions()
        .map_err(|_| not_an_image())
}

/// Encode bytes as `data:<media type>;base64,<payload>`
pub fn encode_data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

/// Decode a base64 data URI back into its bytes
/// Returns None for anything that isn't a base64 data URI
pub fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let rest = uri.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    if !meta.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload).ok()
}
