//! Error types for rep detection and workout sequencing.
//!
//! Every error here is local and recoverable. Low keypoint confidence is
//! deliberately absent: it is an expected, frequent condition reported via
//! [`RepOutcome::rejected`](crate::exercise::RepOutcome), not an error.
//!
//! - [`GeometryError`]: a joint vector collapsed to zero length
//! - [`RuleError`]: a malformed exercise rule, caught at construction or load
//! - [`CatalogError`]: a rule table that failed to load
//! - [`ProgramError`]: workout authoring or command misuse
//! - [`FrameError`]: a pose buffer of the wrong shape

use thiserror::Error;

/// A specialized `Result` type for coach operations.
pub type CoachResult<T> = Result<T, CoachError>;

/// Top-level error type, one variant per subsystem.
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("workout program error: {0}")]
    Program(#[from] ProgramError),

    #[error("frame error: {0}")]
    Frame(#[from] FrameError),
}

/// Angle computation failed because two joints coincide.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// One of the rays leaving the vertex has zero length.
    #[error("degenerate geometry: zero-length vector at joint vertex ({x:.4}, {y:.4})")]
    Degenerate { x: f32, y: f32 },
}

/// Static rule configuration that can never produce correct reps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    #[error("rule id must not be empty")]
    EmptyId,

    #[error("rule '{id}': enter and exit thresholds are both {threshold}° (no hysteresis)")]
    IdenticalThresholds { id: String, threshold: f32 },

    #[error("rule '{id}': exit threshold {exit}° does not lie beyond enter threshold {enter}° on the return side")]
    InvertedThresholds { id: String, enter: f32, exit: f32 },

    #[error("rule '{id}': depth tiers are out of order (shallow {shallow}°, deep {deep}°)")]
    InvalidDepthTiers { id: String, shallow: f32, deep: f32 },

    #[error("rule '{id}': hold band [{low}°, {high}°] is empty or outside [0°, 180°]")]
    InvalidHoldBand { id: String, low: f32, high: f32 },

    #[error("rule '{id}': joint index {index} is outside the 17-joint layout")]
    JointOutOfRange { id: String, index: usize },

    #[error("rule '{id}': confidence floor {floor} is outside [0, 1]")]
    InvalidConfidenceFloor { id: String, floor: f32 },
}

/// Failure to build an exercise catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid exercise rule: {0}")]
    InvalidRule(#[from] RuleError),

    #[error("duplicate exercise id '{0}'")]
    DuplicateId(String),
}

/// Workout program authoring and command errors.
///
/// A command that fails with one of these leaves the session untouched.
#[derive(Error, Debug)]
pub enum ProgramError {
    #[error("unknown exercise '{0}'")]
    UnknownExercise(String),

    #[error("cannot start an empty workout program")]
    EmptyProgram,

    #[error("{field} = {value} is outside the allowed range {min}..={max}")]
    InvalidEntry {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("entry index {index} out of range (program has {len} entries)")]
    EntryOutOfRange { index: usize, len: usize },

    #[error("program can only be edited while idle (currently {phase})")]
    ProgramLocked { phase: &'static str },

    #[error("'{command}' is not valid while {phase}")]
    InvalidCommand {
        command: &'static str,
        phase: &'static str,
    },

    #[error("program JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A flat keypoint buffer that does not match the 17-joint layout.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[error("invalid keypoint data length: {actual} (expected {expected})")]
    WrongLength { expected: usize, actual: usize },
}
