//! Headless end-to-end run: build an engine against the null renderer,
//! stream in a few extra samples and print the resulting state snapshot.

use chrono::{Duration, Utc};
use timelog_chart::core::{Sample, Viewport};
use timelog_chart::render::NullRenderer;
use timelog_chart::{ChartConfig, ChartEngine, ChartResult, telemetry};

fn main() -> ChartResult<()> {
    let _ = telemetry::init_default_tracing();

    let now = Utc::now();
    let samples: Vec<Sample> = (0..=48 * 60)
        .map(|i| {
            let age_minutes = 48 * 60 - i;
            let value = (i as f64 / 97.0).sin().abs() * 0.8;
            Sample::new(now - Duration::minutes(age_minutes), value)
        })
        .collect();

    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        Viewport::new(1280, 640),
        samples,
        ChartConfig::default(),
    )?;
    engine.set_metadata("source", "headless-demo");

    for i in 1..=5 {
        engine.push_sample(Sample::new(now + Duration::minutes(i), 0.5))?;
    }

    let snapshot = engine.snapshot();
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).expect("serialize snapshot")
    );
    Ok(())
}
