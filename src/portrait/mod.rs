/// Portrait loading module
///
/// This module handles:
/// - Reading a user-chosen image file
/// - Decoding it and cutting the preview and summary thumbnails
/// - Wrapping the pixels as image handles the UI can draw

pub mod thumbnail;

use iced::widget::image::Handle;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use thumbnail::ThumbnailSizes;

/// File extensions offered by the image picker
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "ico"];

/// Errors raised while turning a file into thumbnails
#[derive(Debug, Error)]
pub enum PortraitError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Task join error: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A portrait scaled for both places it is shown
#[derive(Debug, Clone)]
pub struct Thumbnails {
    /// Small version next to the upload button
    pub preview: Handle,
    /// Larger version stored with the student record
    pub display: Handle,
}

/// Load an image file and produce both thumbnails.
///
/// The file is read asynchronously and decoding runs on a blocking task,
/// so the UI stays responsive on large photos.
pub async fn load(path: PathBuf, sizes: ThumbnailSizes) -> Result<Thumbnails, PortraitError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| PortraitError::Io { path: path.clone(), source })?;

    let pair = tokio::task::spawn_blocking(move || thumbnail::decode_and_scale(&bytes, sizes)).await??;

    tracing::debug!(
        path = %path.display(),
        preview = sizes.preview,
        display = sizes.display,
        "scaled portrait"
    );

    Ok(Thumbnails {
        preview: to_handle(pair.preview),
        display: to_handle(pair.display),
    })
}

/// Whether the picker should offer this file
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn to_handle(img: RgbaImage) -> Handle {
    let (width, height) = img.dimensions();
    Handle::from_rgba(width, height, img.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba};

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("grade-tracker-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported(Path::new("/photos/alice.PNG")));
        assert!(is_supported(Path::new("bob.jpeg")));
        assert!(!is_supported(Path::new("notes.txt")));
        assert!(!is_supported(Path::new("no_extension")));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = load(PathBuf::from("/nonexistent/portrait.png"), ThumbnailSizes::default()).await;
        assert!(matches!(result, Err(PortraitError::Io { .. })));
    }

    #[tokio::test]
    async fn test_load_not_an_image() {
        let path = temp_file("not-an-image.png");
        std::fs::write(&path, b"plain text pretending to be a png").unwrap();

        let result = load(path.clone(), ThumbnailSizes::default()).await;
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(PortraitError::Decode(_))));
    }

    #[tokio::test]
    async fn test_load_png() {
        let path = temp_file("portrait.png");
        let img = RgbaImage::from_pixel(120, 80, Rgba([10, 120, 240, 255]));
        DynamicImage::ImageRgba8(img)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let result = load(path.clone(), ThumbnailSizes { preview: 32, display: 64 }).await;
        let _ = std::fs::remove_file(&path);

        let thumbnails = result.unwrap();
        match thumbnails.display {
            Handle::Rgba { width, height, .. } => assert_eq!((width, height), (64, 64)),
            other => panic!("unexpected handle {:?}", other),
        }
        match thumbnails.preview {
            Handle::Rgba { width, height, .. } => assert_eq!((width, height), (32, 32)),
            other => panic!("unexpected handle {:?}", other),
        }
    }
}
