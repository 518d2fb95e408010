use chrono::{DateTime, Duration, TimeZone, Utc};
use timelog_chart::core::axis::{synthesize_x, synthesize_y};
use timelog_chart::core::boundaries::generate;
use timelog_chart::core::value_scale::DEFAULT_TICK_COUNT;
use timelog_chart::core::{Boundary, BoundaryKind, Sample, TimeScale, ValueScale};

fn hour_series(start: DateTime<Utc>, hours: i64) -> Vec<Sample> {
    (0..=hours)
        .map(|i| Sample::new(start + Duration::hours(i), i as f64))
        .collect()
}

#[test]
fn one_major_tick_per_boundary_positioned_by_the_scale() {
    let start = Utc.with_ymd_and_hms(2024, 6, 14, 10, 0, 0).unwrap();
    let samples = hour_series(start, 26);
    let boundaries = generate(&samples, "1h").expect("generate");
    let scale = TimeScale::build(&boundaries, 800.0).expect("build");

    let axis = synthesize_x(&boundaries, &scale);

    assert_eq!(axis.majors.len(), boundaries.len());
    for (major, boundary) in axis.majors.iter().zip(&boundaries) {
        assert_eq!(major.offset, scale.time_to_pixel(boundary.at));
        assert_eq!(major.at, boundary.at);
    }
}

#[test]
fn minor_ticks_fill_gaps_hourly_and_stay_strictly_inside() {
    let start = Utc.with_ymd_and_hms(2024, 6, 14, 10, 0, 0).unwrap();
    let samples = hour_series(start, 26);
    let boundaries = generate(&samples, "1h").expect("generate");
    let keys: Vec<String> = boundaries.iter().map(|b| b.label_key()).collect();
    assert_eq!(keys, vec!["1d", "12h", "6h", "3h", "1h", "max"]);

    let scale = TimeScale::build(&boundaries, 800.0).expect("build");
    let axis = synthesize_x(&boundaries, &scale);

    // 11 hourly ticks below the 12h boundary, 5 below 6h, 2 below 3h and
    // one below 1h.
    assert_eq!(axis.minor_offsets.len(), 19);

    let gaps: Vec<(f64, f64)> = boundaries
        .windows(2)
        .map(|pair| {
            (
                scale.time_to_pixel(pair[0].at),
                scale.time_to_pixel(pair[1].at),
            )
        })
        .collect();
    for &offset in &axis.minor_offsets {
        assert!(
            gaps.iter()
                .any(|&(low, high)| low < offset && offset < high),
            "minor tick at {offset} must sit strictly inside a gap"
        );
    }
}

#[test]
fn adjacent_boundaries_with_no_room_produce_no_minor_ticks() {
    let start = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
    let samples: Vec<Sample> = (0..=120)
        .map(|i| Sample::new(start + Duration::minutes(i), i as f64))
        .collect();
    let boundaries = generate(&samples, "1h").expect("generate");
    let keys: Vec<String> = boundaries.iter().map(|b| b.label_key()).collect();
    assert_eq!(keys, vec!["1h", "max"]);

    let scale = TimeScale::build(&boundaries, 800.0).expect("build");
    let axis = synthesize_x(&boundaries, &scale);

    // The hour step lands exactly on the previous boundary, which the
    // strictly-inside rule excludes.
    assert!(axis.minor_offsets.is_empty());
}

#[test]
fn labels_follow_the_boundary_kind() {
    let min_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let span_at = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
    let max_at = Utc.with_ymd_and_hms(2024, 1, 4, 15, 6, 7).unwrap();
    let boundaries = vec![
        Boundary {
            kind: BoundaryKind::Min,
            at: min_at,
            minor_step: None,
        },
        Boundary {
            kind: BoundaryKind::Span("1w"),
            at: span_at,
            minor_step: None,
        },
        Boundary {
            kind: BoundaryKind::Max,
            at: max_at,
            minor_step: None,
        },
    ];
    let scale = TimeScale::build(&boundaries, 800.0).expect("build");

    let axis = synthesize_x(&boundaries, &scale);
    let labels: Vec<&str> = axis.majors.iter().map(|m| m.label.as_str()).collect();

    assert_eq!(labels, vec!["2024-01-02", "-1w", "15:06:07"]);
}

#[test]
fn vertical_ticks_mirror_the_nice_domain() {
    let start = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
    let samples: Vec<Sample> = [0.0, 50.0, 100.0]
        .iter()
        .enumerate()
        .map(|(i, &value)| Sample::new(start + Duration::hours(i as i64), value))
        .collect();
    let scale = ValueScale::fit(&samples, 400.0).expect("fit");

    let ticks = synthesize_y(&scale, DEFAULT_TICK_COUNT);

    assert_eq!(ticks.first().map(|t| t.value), Some(0.0));
    assert_eq!(ticks.last().map(|t| t.value), Some(100.0));
    assert_eq!(ticks.first().map(|t| t.offset), Some(400.0));
    assert_eq!(ticks.last().map(|t| t.offset), Some(0.0));
}
