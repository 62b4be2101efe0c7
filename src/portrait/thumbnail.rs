use image::{imageops::FilterType, DynamicImage, RgbaImage};

use super::PortraitError;

/// Pixel sizes for the two square thumbnails cut from a portrait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailSizes {
    /// Shown next to the upload button
    pub preview: u32,
    /// Shown in the summary report
    pub display: u32,
}

impl Default for ThumbnailSizes {
    fn default() -> Self {
        Self {
            preview: 48,
            display: 96,
        }
    }
}

/// Both scaled versions of one source image
#[derive(Debug, Clone)]
pub struct ScaledPair {
    pub preview: RgbaImage,
    pub display: RgbaImage,
}

/// Decode image bytes and cut both thumbnails.
///
/// CPU bound; callers on the UI side should run this on a blocking task.
pub fn decode_and_scale(bytes: &[u8], sizes: ThumbnailSizes) -> Result<ScaledPair, PortraitError> {
    let img = image::load_from_memory(bytes)?;

    // Each size comes from the full source so the larger one stays sharp
    Ok(ScaledPair {
        preview: scale_square(&img, sizes.preview),
        display: scale_square(&img, sizes.display),
    })
}

/// Crop to a centred square and resize to `size` x `size`
pub fn scale_square(img: &DynamicImage, size: u32) -> RgbaImage {
    let size = size.max(1);
    img.resize_to_fill(size, size, FilterType::Lanczos3).to_rgba8()
}
