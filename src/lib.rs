//! Rep Coach Web - exercise rep counting and workout sequencing
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The browser runs the pose model and hands each frame to a `FormCoach`;
//! everything below the bridge is plain Rust and runs natively in tests.

pub mod error;
pub mod pose;
pub mod exercise;
pub mod workout;
pub mod coach;
mod bridge;

#[cfg(test)]
mod test_support;

use wasm_bindgen::prelude::*;

pub use bridge::FormCoach;
pub use coach::{Coach, CoachConfig, CoachOutput, Pumped};
pub use error::{CoachError, CoachResult};
pub use exercise::{ExerciseCatalog, ExerciseRule, RepDetector, RepOutcome};
pub use pose::{Frame, Keypoint, PoseSource};
pub use workout::{ProgramEntry, SessionPhase, WorkoutSession, WorkoutStatus};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console
///
/// @param {string} level - "trace", "debug", "info", "warn" or "error"
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("rep-coach-web {} logging at {}", env!("CARGO_PKG_VERSION"), level);
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Format a countdown as `MM:SS`
#[wasm_bindgen(js_name = formatClock)]
pub fn format_clock(seconds: f64) -> String {
    workout::format_clock(seconds)
}
