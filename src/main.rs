//! Respiring - paced-breathing instruction video generator
//!
//! Produces a video of a circle that grows on the inhale, holds, and shrinks
//! on the exhale, with a bell tone at the start of each breath.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use respiring::cli::Args;
use respiring::exercise::BreathingExercise;
use respiring::rendering::save_frame;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over -v/-vv
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .init();

    let pattern = args.breathing_pattern().context("Invalid breathing pattern")?;
    let exercise = BreathingExercise::new(pattern).with_bells(args.bell_config());
    info!(%pattern, cycle_s = pattern.cycle_duration(), "Breathing pattern");

    if let Some(time_s) = args.snapshot {
        let frame = exercise.make_frame(time_s);
        save_frame(&frame, &args.snapshot_path)
            .with_context(|| format!("Failed to save {}", args.snapshot_path.display()))?;
        println!("Frame at {}s saved to {}", time_s, args.snapshot_path.display());
        return Ok(());
    }

    let config = args.recording_config();
    let summary = exercise
        .generate_video(&config)
        .with_context(|| format!("Failed to generate {}", config.output_path.display()))?;

    println!(
        "Breathing exercise video saved to {} ({} cycles, {} frames)",
        summary.output.display(),
        summary.cycles,
        summary.frames
    );
    Ok(())
}
