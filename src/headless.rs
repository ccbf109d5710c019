//! Headless mode: build a trace, drain a playback engine to completion,
//! and print a validation report. Used for scripted runs and CI smoke
//! checks; the TUI never enters the picture.

use anyhow::Context;

use crate::config::Config;
use crate::data::DataGenerator;
use crate::playback::PlaybackEngine;
use crate::trace::build_trace;
use crate::verify;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut generator = match config.seed {
        Some(seed) => DataGenerator::with_seed(seed),
        None => DataGenerator::new(),
    };
    let dataset = generator
        .generate(config.shape, config.size, config.min_value, config.max_value)
        .context("dataset generation failed")?;

    println!(
        "{} over {} ({} elements, {}..={})",
        config.algorithm.display_name(),
        config.shape.display_name(),
        dataset.len(),
        config.min_value,
        config.max_value,
    );
    println!("Before: {}", format_array(&dataset));

    let outcome = build_trace(config.algorithm, &dataset);

    let mut engine = PlaybackEngine::new();
    engine
        .start(outcome.trace.clone(), &dataset)
        .context("playback start rejected")?;

    let mut last = engine.snapshot();
    while !last.is_finished() {
        last = engine.tick().context("playback tick rejected")?;
    }

    println!("After:  {}", format_array(&last.values));
    println!(
        "Events: {}  comparisons: {}  swaps: {}",
        outcome.trace.len(),
        last.comparisons,
        last.swaps,
    );

    anyhow::ensure!(
        last.values == outcome.sorted,
        "playback diverged from builder result"
    );

    let report = verify::report(&dataset, &last.values);
    print!("{report}");

    anyhow::ensure!(
        verify::validate(&dataset, &last.values).passed(),
        "sort validation failed"
    );
    Ok(())
}

fn format_array(values: &[i32]) -> String {
    let rendered: Vec<String> = values.iter().map(i32::to_string).collect();
    rendered.join(" ")
}
