use std::path::Path;

use image::{GrayImage, Luma};

use crate::{
    foundation::error::{ContribError, ContribResult},
    raster::backend::TextRasterizer,
};

/// Default glyph size for outline fonts; large enough that the downscale keeps letter shapes.
pub const DEFAULT_SIZE_PX: f32 = 32.0;

/// Empty space left around the laid-out text so antialiased edges are not clipped.
const PAD_PX: u32 = 2;

/// Brush carried through parley layouts. Only coverage matters, so it holds no colour.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct InkBrush;

/// Renders text with a font file: parley shapes and lays out, vello_cpu draws the glyphs.
pub struct OutlineRasterizer {
    font_bytes: Vec<u8>,
    family_name: String,
    size_px: f32,
}

impl std::fmt::Debug for OutlineRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineRasterizer")
            .field("family_name", &self.family_name)
            .field("size_px", &self.size_px)
            .field("font_bytes", &self.font_bytes.len())
            .finish()
    }
}

impl OutlineRasterizer {
    /// Read a TTF/OTF file from disk.
    pub fn from_path(path: &Path, size_px: f32) -> ContribResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            ContribError::dependency_unavailable(format!(
                "read font '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_bytes(bytes, size_px)
    }

    /// Validate `font_bytes` by registering them with a parley font collection.
    pub fn from_bytes(font_bytes: Vec<u8>, size_px: f32) -> ContribResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ContribError::dependency_unavailable(
                "font size_px must be finite and > 0",
            ));
        }

        let mut font_ctx = parley::FontContext::default();
        let family_name = register_family(&mut font_ctx, &font_bytes)?;
        tracing::debug!(family = %family_name, size_px, "loaded outline font");

        Ok(Self {
            font_bytes,
            family_name,
            size_px,
        })
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    fn layout(&self, text: &str) -> Option<parley::Layout<InkBrush>> {
        let mut font_ctx = parley::FontContext::default();
        let family_name = register_family(&mut font_ctx, &self.font_bytes).ok()?;
        let mut layout_ctx: parley::LayoutContext<InkBrush> = parley::LayoutContext::new();

        let mut builder = layout_ctx.ranged_builder(&mut font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(InkBrush));

        let mut layout: parley::Layout<InkBrush> = builder.build(text);
        layout.break_all_lines(None);
        Some(layout)
    }
}

fn register_family(font_ctx: &mut parley::FontContext, font_bytes: &[u8]) -> ContribResult<String> {
    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
    let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
        ContribError::dependency_unavailable("no font families registered from font bytes")
    })?;

    font_ctx
        .collection
        .family_name(family_id)
        .map(str::to_string)
        .ok_or_else(|| ContribError::dependency_unavailable("registered font family has no name"))
}

impl TextRasterizer for OutlineRasterizer {
    fn family_name(&self) -> &str {
        &self.family_name
    }

    fn font_bytes(&self) -> Option<&[u8]> {
        Some(&self.font_bytes)
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn render(&self, text: &str) -> GrayImage {
        if text.trim().is_empty() {
            return GrayImage::new(0, 0);
        }
        let Some(layout) = self.layout(text) else {
            return GrayImage::new(0, 0);
        };

        let width = canvas_extent(layout.width());
        let height = canvas_extent(layout.height());

        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(self.font_bytes.clone()),
            0,
        );

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
        let offset = PAD_PX as f32;
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x + offset,
                    y: g.y + offset,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);

        // Premultiplied RGBA: alpha alone is the ink coverage.
        let data = pixmap.data_as_u8_slice();
        let row_bytes = usize::from(width) * 4;
        GrayImage::from_fn(u32::from(width), u32::from(height), |x, y| {
            let i = y as usize * row_bytes + x as usize * 4 + 3;
            Luma([data.get(i).copied().unwrap_or(0)])
        })
    }
}

/// Canvas side for a layout extent, including padding, clamped to what vello_cpu accepts.
fn canvas_extent(extent: f32) -> u16 {
    let px = if extent.is_finite() && extent > 0.0 {
        extent.ceil() as u32
    } else {
        0
    };
    let padded = px.saturating_add(2 * PAD_PX).max(1);
    u16::try_from(padded).unwrap_or(u16::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/outline.rs"]
mod tests;
