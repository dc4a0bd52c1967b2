use super::*;
use crate::schedule::builder::schedule_from_grid;
use crate::PixelGrid;

#[test]
fn report_counts_each_pair_and_totals() {
    let schedules = vec![
        schedule_from_grid("a", 2021, &PixelGrid::from_lit_cells([(1, 1), (2, 2)])),
        schedule_from_grid("", 2022, &PixelGrid::empty()),
        schedule_from_grid("c", 2023, &PixelGrid::from_lit_cells([(5, 5)])),
    ];
    let report = PreviewReport::from_schedules(&schedules);
    assert_eq!(report.total, 3);
    assert_eq!(report.rows[1].count, 0);

    let text = report.to_string();
    assert_eq!(
        text,
        "[DRY-RUN] 2021 'a': 2 commits\n\
         [DRY-RUN] 2022 '': 0 commits\n\
         [DRY-RUN] 2023 'c': 1 commits\n\
         [DRY-RUN] Total would commit: 3\n"
    );
}

#[test]
fn empty_report_still_prints_total() {
    let report = PreviewReport::from_schedules(&[]);
    assert_eq!(report.to_string(), "[DRY-RUN] Total would commit: 0\n");
}
