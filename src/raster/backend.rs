use std::path::PathBuf;

use image::GrayImage;

use crate::{
    foundation::error::ContribResult,
    raster::{bitmap::BitmapFont, outline::OutlineRasterizer},
};

/// Text rendering capability used by the grid rasterizer.
///
/// Implementations draw `text` onto a monochrome canvas large enough to hold it: background
/// pixels are 0 and ink is any non-zero intensity. Failures belong to construction (loading
/// fonts), so rendering itself is infallible.
pub trait TextRasterizer: Send + Sync {
    /// Family name of the font in use.
    fn family_name(&self) -> &str;

    /// Raw font bytes, when the font came from a file.
    fn font_bytes(&self) -> Option<&[u8]> {
        None
    }

    fn render(&self, text: &str) -> GrayImage;
}

/// Which text rendering backend to load.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RasterBackend {
    /// Built-in fixed-size bitmap font.
    #[default]
    Bitmap,
    /// TrueType/OpenType font loaded from disk, shaped with parley and drawn by vello_cpu.
    Outline { font_path: PathBuf, size_px: f32 },
}

/// Load the requested backend. Errors are [`crate::ContribError::DependencyUnavailable`].
pub fn create_rasterizer(kind: &RasterBackend) -> ContribResult<Box<dyn TextRasterizer>> {
    match kind {
        RasterBackend::Bitmap => Ok(Box::new(BitmapFont::new())),
        RasterBackend::Outline { font_path, size_px } => Ok(Box::new(
            OutlineRasterizer::from_path(font_path, *size_px)?,
        )),
    }
}
