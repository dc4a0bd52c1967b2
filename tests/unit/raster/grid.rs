use image::Luma;

use super::*;

/// Hands back a fixed canvas regardless of the text.
struct FixedCanvas(GrayImage);

impl TextRasterizer for FixedCanvas {
    fn family_name(&self) -> &str {
        "fixed"
    }

    fn render(&self, _text: &str) -> GrayImage {
        self.0.clone()
    }
}

fn canvas_with(width: u32, height: u32, lit: &[(u32, u32)]) -> GrayImage {
    let mut img = GrayImage::new(width, height);
    for &(x, y) in lit {
        img.put_pixel(x, y, Luma([200]));
    }
    img
}

#[test]
fn empty_and_whitespace_text_give_blank_grid() {
    assert_eq!(rasterize(""), PixelGrid::empty());
    assert_eq!(rasterize("   "), PixelGrid::empty());
    assert_eq!(rasterize("\n \n"), PixelGrid::empty());
}

#[test]
fn words_light_some_cells() {
    let grid = rasterize("HELLO");
    assert!(!grid.is_blank());
    assert!(grid.lit_count() < GRID_COLUMNS * GRID_ROWS);
}

#[test]
fn long_input_keeps_grid_dimensions() {
    let text = "The quick brown fox jumps over the lazy dog ".repeat(8);
    let grid = rasterize(&text);
    assert_eq!(grid.rows().len(), GRID_ROWS);
    assert!(grid.rows().iter().all(|r| r.len() == GRID_COLUMNS));
    assert!(!grid.is_blank());
}

#[test]
fn rasterize_is_deterministic() {
    for word in ["LEBRON", "elephanto", "feel", "a:b", "é"] {
        assert_eq!(rasterize(word), rasterize(word));
    }
}

#[test]
fn tall_glyph_is_stretched_across_the_grid() {
    // 'I' crops to .#./.#./... with a full top and bottom bar.
    let grid = rasterize("I");
    assert!((0..GRID_COLUMNS).all(|x| grid.get(x, 0)));
    assert!((0..GRID_COLUMNS).all(|x| grid.get(x, GRID_ROWS - 1)));
    assert!(!grid.get(0, 3));
    assert!(grid.get(GRID_COLUMNS / 2, 3));
    assert!(!grid.get(GRID_COLUMNS - 1, 3));
}

#[test]
fn ink_bounds_is_tight() {
    let img = canvas_with(40, 20, &[(3, 5), (10, 2), (7, 9)]);
    assert_eq!(
        ink_bounds(&img),
        Some(InkBounds {
            x: 3,
            y: 2,
            width: 8,
            height: 8,
        })
    );
    assert_eq!(ink_bounds(&GrayImage::new(10, 10)), None);
    assert_eq!(ink_bounds(&GrayImage::new(0, 0)), None);
}

#[test]
fn single_ink_pixel_fills_the_grid() {
    let stub = FixedCanvas(canvas_with(100, 50, &[(42, 17)]));
    let grid = rasterize_with(&stub, "ignored");
    assert_eq!(grid.lit_count(), GRID_COLUMNS * GRID_ROWS);
}

#[test]
fn grid_sized_canvas_maps_one_to_one() {
    let canvas = canvas_with(
        GRID_COLUMNS as u32,
        GRID_ROWS as u32,
        &[(0, 0), (52, 6), (20, 3)],
    );
    let grid = grid_from_canvas(&canvas);
    assert_eq!(grid, PixelGrid::from_lit_cells([(0, 0), (52, 6), (20, 3)]));
}

#[test]
fn blank_canvas_from_backend_gives_blank_grid() {
    let stub = FixedCanvas(GrayImage::new(300, 40));
    assert!(rasterize_with(&stub, "anything").is_blank());
}
