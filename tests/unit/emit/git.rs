use super::*;
use crate::schedule::builder::schedule_from_grid;
use crate::PixelGrid;

#[derive(Default)]
struct Recorder {
    recorded: Vec<String>,
    published: bool,
}

impl RecordSink for Recorder {
    fn record(&mut self, entry: &ScheduleEntry) -> ContribResult<()> {
        self.recorded.push(entry.record_time());
        Ok(())
    }

    fn publish(&mut self) -> ContribResult<()> {
        self.published = true;
        Ok(())
    }
}

struct FailAfter(usize);

impl RecordSink for FailAfter {
    fn record(&mut self, _entry: &ScheduleEntry) -> ContribResult<()> {
        if self.0 == 0 {
            return Err(ContribError::consumer("disk full"));
        }
        self.0 -= 1;
        Ok(())
    }

    fn publish(&mut self) -> ContribResult<()> {
        Ok(())
    }
}

#[test]
fn emits_in_schedule_order_with_progress_lines() {
    let schedules = vec![
        schedule_from_grid("hi", 2021, &PixelGrid::from_lit_cells([(3, 0), (1, 2)])),
        schedule_from_grid("yo", 2022, &PixelGrid::from_lit_cells([(0, 6)])),
    ];
    let mut sink = Recorder::default();
    let mut out = Vec::new();

    let n = emit_schedules(&mut sink, &schedules, &mut out).unwrap();

    assert_eq!(n, 3);
    assert_eq!(
        sink.recorded,
        vec![
            "2021-01-05 12:00:00 +0000",
            "2021-01-17 12:00:00 +0000",
            "2022-01-01 12:00:00 +0000",
        ]
    );
    assert!(!sink.published);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "2021 'hi': 2 commits\n2022 'yo': 1 commits\n"
    );
}

#[test]
fn sink_failure_stops_emission() {
    let schedules = vec![schedule_from_grid(
        "hi",
        2021,
        &PixelGrid::from_lit_cells([(3, 0), (1, 2), (7, 4)]),
    )];
    let mut out = Vec::new();
    let err = emit_schedules(&mut FailAfter(1), &schedules, &mut out).unwrap_err();
    assert!(err.to_string().contains("disk full"));
}
