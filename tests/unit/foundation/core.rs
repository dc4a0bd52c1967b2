use super::*;

#[test]
fn empty_grid_has_fixed_dimensions() {
    let grid = PixelGrid::empty();
    assert_eq!(grid.rows().len(), GRID_ROWS);
    assert!(grid.rows().iter().all(|row| row.len() == GRID_COLUMNS));
    assert!(grid.is_blank());
}

#[test]
fn out_of_range_access_is_ignored() {
    let mut grid = PixelGrid::empty();
    grid.set(GRID_COLUMNS, 0, true);
    grid.set(0, GRID_ROWS, true);
    assert!(grid.is_blank());
    assert!(!grid.get(GRID_COLUMNS + 10, GRID_ROWS + 10));
}

#[test]
fn lit_cells_are_column_major() {
    let grid = PixelGrid::from_lit_cells([(5, 0), (0, 6), (0, 1), (52, 6)]);
    let cells: Vec<_> = grid.lit_cells().collect();
    assert_eq!(cells, vec![(0, 1), (0, 6), (5, 0), (52, 6)]);
    assert_eq!(grid.lit_count(), 4);
}

#[test]
fn display_draws_one_line_per_row() {
    let grid = PixelGrid::from_lit_cells([(0, 0)]);
    let text = grid.to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), GRID_ROWS);
    assert!(lines[0].starts_with("#."));
    assert!(lines.iter().all(|l| l.chars().count() == GRID_COLUMNS));
}

#[test]
fn emit_time_is_noon() {
    assert_eq!(emit_time(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());
}
