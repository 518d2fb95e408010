use approx::assert_relative_eq;
use chrono::{DateTime, Duration, TimeZone, Utc};
use timelog_chart::core::{Boundary, BoundaryKind, TimeScale};

fn breakpoint(at: DateTime<Utc>) -> Boundary {
    Boundary {
        kind: BoundaryKind::Span("1h"),
        at,
        minor_step: None,
    }
}

fn hourly_breakpoints(count: usize) -> Vec<Boundary> {
    let start = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| breakpoint(start + Duration::hours(i as i64)))
        .collect()
}

#[test]
fn endpoints_pin_to_edges() {
    let boundaries = hourly_breakpoints(5);
    let scale = TimeScale::build(&boundaries, 800.0).expect("build");

    assert_eq!(scale.time_to_pixel(boundaries[0].at), 0.0);
    assert_eq!(scale.time_to_pixel(boundaries[4].at), 800.0);
}

#[test]
fn interior_breakpoints_follow_the_power_law() {
    let boundaries = hourly_breakpoints(4);
    let scale = TimeScale::build(&boundaries, 800.0).expect("build");

    let count = 4.0_f64;
    for index in 1..3 {
        let expected = 800.0_f64.powf((index as f64 / count).powf(1.0 / count));
        assert_relative_eq!(scale.range()[index], expected, max_relative = 1e-12);
    }
}

#[test]
fn interior_offsets_increase_strictly_within_the_width() {
    let boundaries = hourly_breakpoints(8);
    let scale = TimeScale::build(&boundaries, 800.0).expect("build");
    let range = scale.range();

    for pair in range.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    for &offset in &range[1..7] {
        assert!(offset > 0.0 && offset < 800.0);
    }
}

#[test]
fn interpolation_is_monotone_inside_and_outside_the_domain() {
    let boundaries = hourly_breakpoints(6);
    let scale = TimeScale::build(&boundaries, 640.0).expect("build");

    let start = boundaries[0].at - Duration::hours(2);
    let mut previous = f64::NEG_INFINITY;
    for step in 0..40 {
        let probe = start + Duration::minutes(step * 15);
        let offset = scale.time_to_pixel(probe);
        assert!(offset.is_finite());
        assert!(offset >= previous);
        previous = offset;
    }
}

#[test]
fn out_of_domain_times_extrapolate_along_edge_segments() {
    let boundaries = hourly_breakpoints(4);
    let scale = TimeScale::build(&boundaries, 800.0).expect("build");

    let older = scale.time_to_pixel(boundaries[0].at - Duration::minutes(30));
    let newer = scale.time_to_pixel(boundaries[3].at + Duration::minutes(30));

    assert!(older < 0.0);
    assert!(newer > 800.0);
}

#[test]
fn degenerate_zero_width_domain_stays_nan_free() {
    let at = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let boundaries = vec![
        Boundary {
            kind: BoundaryKind::Min,
            at,
            minor_step: None,
        },
        Boundary {
            kind: BoundaryKind::Max,
            at,
            minor_step: None,
        },
    ];

    let scale = TimeScale::build(&boundaries, 800.0).expect("build");
    assert_eq!(scale.time_to_pixel(at), 0.0);
    assert!(scale.time_to_pixel(at + Duration::hours(1)).is_finite());
    assert!(scale.time_to_pixel(at - Duration::hours(1)).is_finite());
}

#[test]
fn invalid_width_is_rejected() {
    let boundaries = hourly_breakpoints(3);
    assert!(TimeScale::build(&boundaries, 0.0).is_err());
    assert!(TimeScale::build(&boundaries, -10.0).is_err());
    assert!(TimeScale::build(&boundaries, f64::NAN).is_err());
}

#[test]
fn short_or_descending_boundary_lists_are_rejected() {
    let one = hourly_breakpoints(1);
    assert!(TimeScale::build(&one, 800.0).is_err());

    let mut descending = hourly_breakpoints(3);
    descending.reverse();
    assert!(TimeScale::build(&descending, 800.0).is_err());
}
