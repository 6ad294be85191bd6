//! Exercise module - rule table and rep detection
//!
//! Re-exports only. All logic in submodules.

mod rule;
mod catalog;
mod detector;

pub use rule::{DepthTiers, EffortDirection, ExerciseRule, HoldBand, JointTriplet, RuleMode};
pub use catalog::ExerciseCatalog;
pub use detector::{RepDetector, RepEvent, RepOutcome, RepPhase, LOW_CONFIDENCE_FEEDBACK};
