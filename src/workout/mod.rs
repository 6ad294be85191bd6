//! Workout module - programs, sequencing, session time
//!
//! Re-exports only. All logic in submodules.

mod clock;
mod program;
mod sequencer;

pub use clock::{format_clock, DefaultClock, ManualClock, SessionClock};
#[cfg(not(target_arch = "wasm32"))]
pub use clock::MonotonicClock;
#[cfg(target_arch = "wasm32")]
pub use clock::PerformanceClock;
pub use program::{
    parse_program, program_to_json, ProgramEntry, WorkoutEntry,
    REST_SECONDS_RANGE, SETS_RANGE, TARGET_REPS_RANGE,
};
pub use sequencer::{
    FrameResult, SequencerEvent, SequencerOutcome, SessionPhase, WorkoutSession, WorkoutStatus,
};
