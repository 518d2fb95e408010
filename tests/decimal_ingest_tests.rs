use chrono::TimeZone;
use chrono::Utc;
use rust_decimal::Decimal;

use timelog_chart::core::Sample;

#[test]
fn sample_from_decimal_is_supported() {
    let time = Utc
        .timestamp_opt(1_700_000_000, 0)
        .single()
        .expect("valid ts");
    let sample = Sample::from_decimal(time, Decimal::new(12345, 2)).expect("sample");

    assert_eq!(sample.time, time);
    assert!((sample.value - 123.45).abs() <= 1e-9);
}

#[test]
fn decimal_values_survive_validation() {
    let time = Utc
        .timestamp_opt(1_700_000_100, 0)
        .single()
        .expect("valid ts");
    let sample = Sample::from_decimal(time, Decimal::new(-5, 1)).expect("sample");

    sample.validate().expect("finite value");
    assert!((sample.value + 0.5).abs() <= 1e-9);
}
