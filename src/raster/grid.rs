use image::{GrayImage, imageops::FilterType};

use crate::{
    foundation::core::{GRID_COLUMNS, GRID_ROWS, PixelGrid},
    raster::{backend::TextRasterizer, bitmap::BitmapFont},
};

/// Tight box around every non-background pixel of a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InkBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Bounding box of all non-zero pixels; `None` when the canvas holds no ink.
pub fn ink_bounds(canvas: &GrayImage) -> Option<InkBounds> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut any = false;

    for (x, y, px) in canvas.enumerate_pixels() {
        if px.0[0] == 0 {
            continue;
        }
        any = true;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    any.then(|| InkBounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Fit an already rendered canvas into the contribution grid.
///
/// Crops to [`ink_bounds`], resamples nearest-neighbour to `GRID_COLUMNS x GRID_ROWS` and
/// treats any non-zero result as lit. A canvas without ink gives the blank grid.
pub fn grid_from_canvas(canvas: &GrayImage) -> PixelGrid {
    let Some(bounds) = ink_bounds(canvas) else {
        return PixelGrid::empty();
    };

    let cropped =
        image::imageops::crop_imm(canvas, bounds.x, bounds.y, bounds.width, bounds.height)
            .to_image();
    let small = image::imageops::resize(
        &cropped,
        GRID_COLUMNS as u32,
        GRID_ROWS as u32,
        FilterType::Nearest,
    );

    let mut grid = PixelGrid::empty();
    for (x, y, px) in small.enumerate_pixels() {
        if px.0[0] != 0 {
            grid.set(x as usize, y as usize, true);
        }
    }
    grid
}

/// Render `text` with `rasterizer` and fit it into the contribution grid.
#[tracing::instrument(level = "debug", skip(rasterizer), fields(font = rasterizer.family_name()))]
pub fn rasterize_with(rasterizer: &dyn TextRasterizer, text: &str) -> PixelGrid {
    let canvas = rasterizer.render(text);
    let grid = grid_from_canvas(&canvas);
    tracing::debug!(
        canvas_w = canvas.width(),
        canvas_h = canvas.height(),
        lit = grid.lit_count(),
        "rasterized"
    );
    grid
}

/// Render `text` with the built-in bitmap font.
pub fn rasterize(text: &str) -> PixelGrid {
    rasterize_with(&BitmapFont::new(), text)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/grid.rs"]
mod tests;
