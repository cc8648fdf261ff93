#![allow(clippy::cast_precision_loss)]
//! Headless run of pipes-rs.
//!
//! Grows pipes for two simulated minutes at 60 frames per second without a
//! window and logs what a renderer would have drawn. Pass a JSON options
//! object as the first argument to change the settings, e.g.
//!
//! ```text
//! RUST_LOG=info cargo run --example headless_demo -- '{"joints": "ball", "interval": [5, 10]}'
//! ```

use std::time::Duration;

use pipes::{ClearOutcome, RecordingScene};
use rand::rngs::StdRng;
use rand::SeedableRng;

const FRAME: Duration = Duration::from_micros(16_667);
const FRAMES: usize = 60 * 120;

fn main() -> pipes::Result<()> {
    let options = std::env::args().nth(1).unwrap_or_default();
    let mut saver = pipes::start(&options, RecordingScene::counting(), StdRng::seed_from_u64(2024))?;

    let mut grown = 0;
    let mut cohorts = 0;
    let mut paused = 0;
    for frame in 0..FRAMES {
        // Halfway through, ask for a fast clear.
        if frame == FRAMES / 2 {
            if let ClearOutcome::Started(token) = saver.request_clear(true) {
                log::info!("fast clear requested ({token:?})");
            }
        }
        match saver.frame(FRAME) {
            Some(report) => {
                grown += report.grown;
                cohorts += usize::from(report.spawned.is_some());
            }
            None => paused += 1,
        }
    }

    let scene = saver.scene();
    log::info!(
        "{FRAMES} frames: {} presented, {paused} paused for clearing",
        scene.frame_count()
    );
    log::info!(
        "{cohorts} cohorts, {grown} cells grown, {} segments, {} joints ({} teapots)",
        scene.segment_count(),
        scene.joint_count(),
        scene.teapot_count()
    );
    log::info!(
        "{} resets, {} pipes live, {:.1}% of the grid occupied",
        saver.lifecycle().reset_count(),
        saver.population().len(),
        100.0 * saver.world().occupancy().len() as f64 / saver.world().bounds().cell_count() as f64
    );
    Ok(())
}
