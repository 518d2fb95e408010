use chrono::{Duration, TimeZone, Utc};
use timelog_chart::core::{Sample, Viewport};
use timelog_chart::render::NullRenderer;
use timelog_chart::{ChartConfig, ChartEngine, EngineSnapshot};

fn engine() -> ChartEngine<NullRenderer> {
    let start = Utc.with_ymd_and_hms(2024, 6, 14, 10, 0, 0).unwrap();
    let samples: Vec<Sample> = (0..=26)
        .map(|i| Sample::new(start + Duration::hours(i), (i % 7) as f64))
        .collect();

    ChartEngine::new(
        NullRenderer::default(),
        Viewport::new(880, 480),
        samples,
        ChartConfig::default(),
    )
    .expect("engine init")
}

#[test]
fn snapshot_reflects_engine_state() {
    let mut engine = engine();
    engine.set_metadata("source", "unit-test");

    let snapshot = engine.snapshot();

    assert_eq!(snapshot.viewport, Viewport::new(880, 480));
    assert_eq!(snapshot.drawable_width, 800.0);
    assert_eq!(snapshot.drawable_height, 400.0);
    assert_eq!(snapshot.boundary_keys.last().map(String::as_str), Some("max"));
    assert_eq!(snapshot.scale_range.first().copied(), Some(0.0));
    assert_eq!(snapshot.scale_range.last().copied(), Some(800.0));
    assert_eq!(snapshot.total_samples, 27);
    // The two samples older than the 1d boundary fall off the axis.
    assert_eq!(snapshot.visible_samples, 25);
    assert_eq!(
        snapshot.metadata.get("source").map(String::as_str),
        Some("unit-test")
    );
    assert_eq!(
        snapshot.boundary_keys.len(),
        snapshot.boundary_unix_seconds.len()
    );
    assert_eq!(snapshot.boundary_keys.len(), snapshot.scale_range.len());
}

#[test]
fn snapshot_round_trips_through_json() {
    let snapshot = engine().snapshot();

    let json = serde_json::to_string(&snapshot).expect("serialize");
    let restored: EngineSnapshot = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, snapshot);
}

#[test]
fn major_tick_labels_match_boundary_kinds() {
    let snapshot = engine().snapshot();

    let labels = &snapshot.major_tick_labels;
    assert_eq!(labels.len(), snapshot.boundary_keys.len());

    // Interior boundaries label relatively, the newest absolutely.
    assert!(labels[..labels.len() - 1].iter().all(|l| l.starts_with('-')));
    assert_eq!(labels.last().map(String::as_str), Some("12:00:00"));
}
