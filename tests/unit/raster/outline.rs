use super::*;

#[test]
fn garbage_bytes_are_dependency_unavailable() {
    let err = OutlineRasterizer::from_bytes(b"not a font".to_vec(), DEFAULT_SIZE_PX).unwrap_err();
    assert!(matches!(err, ContribError::DependencyUnavailable(_)));
}

#[test]
fn missing_file_is_dependency_unavailable() {
    let err = OutlineRasterizer::from_path(
        Path::new("target/definitely/missing/font.ttf"),
        DEFAULT_SIZE_PX,
    )
    .unwrap_err();
    assert!(matches!(err, ContribError::DependencyUnavailable(_)));
    assert!(err.to_string().contains("font.ttf"));
}

#[test]
fn invalid_size_is_rejected_before_parsing() {
    for size in [0.0, -3.0, f32::NAN, f32::INFINITY] {
        let err = OutlineRasterizer::from_bytes(Vec::new(), size).unwrap_err();
        assert!(err.to_string().contains("size_px"));
    }
}

#[test]
fn canvas_extent_pads_and_clamps() {
    assert_eq!(canvas_extent(0.0), (2 * PAD_PX) as u16);
    assert_eq!(canvas_extent(f32::NAN), (2 * PAD_PX) as u16);
    assert_eq!(canvas_extent(10.2), 11 + (2 * PAD_PX) as u16);
    assert_eq!(canvas_extent(1.0e9), u16::MAX);
}

const FONT_PATH: &str = "tests/data/fonts/DejaVuSansMono.ttf";

fn mono() -> OutlineRasterizer {
    OutlineRasterizer::from_path(Path::new(FONT_PATH), DEFAULT_SIZE_PX).unwrap()
}

#[test]
fn real_font_exposes_family_and_bytes() {
    let r = mono();
    assert!(r.family_name().contains("DejaVu"));
    assert_eq!(r.font_bytes().unwrap(), std::fs::read(FONT_PATH).unwrap().as_slice());
    assert_eq!(r.size_px(), DEFAULT_SIZE_PX);
}

#[test]
fn real_font_draws_ink_inside_the_padded_canvas() {
    let canvas = mono().render("HELLO");
    assert!(canvas.width() > 2 * PAD_PX && canvas.height() > 2 * PAD_PX);
    assert!(canvas.pixels().any(|p| p.0[0] != 0));
    // Padding rows stay blank.
    assert!((0..canvas.width()).all(|x| canvas.get_pixel(x, 0).0[0] == 0));
}

#[test]
fn real_font_rasterizes_words_into_the_grid() {
    let r = mono();
    let grid = crate::raster::grid::rasterize_with(&r, "HELLO");
    assert!(!grid.is_blank());
    assert_eq!(grid.rows().len(), crate::GRID_ROWS);
    assert!(grid.rows().iter().all(|row| row.len() == crate::GRID_COLUMNS));
    assert_eq!(grid, crate::raster::grid::rasterize_with(&r, "HELLO"));
}

#[test]
fn real_font_whitespace_is_blank() {
    let r = mono();
    assert_eq!(r.render("   ").dimensions(), (0, 0));
    assert!(crate::raster::grid::rasterize_with(&r, "   ").is_blank());
    assert!(crate::raster::grid::rasterize_with(&r, "").is_blank());
}
