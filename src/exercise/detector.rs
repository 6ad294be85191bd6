//! Rep detection state machine
//!
//! One detector per tracked exercise. Each frame is gated on joint
//! confidence, reduced to a single joint angle, and fed through a
//! two-phase machine (Resting ⇄ InEffort). The enter and exit thresholds
//! differ, so an angle hovering near either one cannot double-count.

use std::sync::Arc;

use serde::Serialize;

use super::rule::{ExerciseRule, RuleMode};
use crate::error::GeometryError;
use crate::pose::{angle_at, ConfidenceGate, Frame};

/// Feedback returned for frames rejected by the confidence gate
pub const LOW_CONFIDENCE_FEEDBACK: &str = "cannot detect key points";

/// Where the detector is in the current rep
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepPhase {
    Resting,
    InEffort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepEvent {
    None,
    RepCompleted,
}

/// Result of observing one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RepOutcome {
    pub rep_count: u32,
    pub event: RepEvent,
    pub feedback: Option<String>,
    /// Frame failed the confidence gate; detector state is unchanged
    pub rejected: bool,
    /// Measured joint angle, when the frame was accepted
    pub angle: Option<f32>,
}

impl RepOutcome {
    pub fn is_rep(&self) -> bool {
        self.event == RepEvent::RepCompleted
    }
}

/// Generic rep detector driven by one [`ExerciseRule`]
#[derive(Clone, Debug)]
pub struct RepDetector {
    rule: Arc<ExerciseRule>,
    gate: ConfidenceGate,
    phase: RepPhase,
    rep_count: u32,
    /// Most extreme angle of the rep in progress
    extremum_angle: Option<f32>,
}

impl RepDetector {
    pub fn new(rule: Arc<ExerciseRule>) -> Self {
        let gate = ConfidenceGate::new(rule.confidence_floor());
        Self {
            rule,
            gate,
            phase: RepPhase::Resting,
            rep_count: 0,
            extremum_angle: None,
        }
    }

    /// Override the rule's confidence floor for this detector only
    pub fn set_confidence_floor(&mut self, floor: f32) {
        self.gate.set_threshold(floor.clamp(0.0, 1.0));
    }

    pub fn rule(&self) -> &Arc<ExerciseRule> {
        &self.rule
    }

    pub fn phase(&self) -> RepPhase {
        self.phase
    }

    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    pub fn extremum_angle(&self) -> Option<f32> {
        self.extremum_angle
    }

    /// Observe one frame
    ///
    /// Low confidence is reported via `rejected`, not as an error. A
    /// degenerate joint geometry is an error; the caller skips the frame
    /// and detector state is untouched.
    pub fn observe(&mut self, frame: &Frame) -> Result<RepOutcome, GeometryError> {
        let Some((a, b, c)) = self.gate.apply(frame, self.rule.joints()) else {
            return Ok(RepOutcome {
                rep_count: self.rep_count,
                event: RepEvent::None,
                feedback: Some(LOW_CONFIDENCE_FEEDBACK.to_string()),
                rejected: true,
                angle: None,
            });
        };

        let angle = angle_at(a, b, c)?;
        Ok(self.observe_angle(angle))
    }

    /// Advance the state machine with an already-measured angle
    pub fn observe_angle(&mut self, angle: f32) -> RepOutcome {
        let rule = Arc::clone(&self.rule);
        let (event, feedback) = match rule.mode() {
            RuleMode::StaticHold(band) => (RepEvent::None, Some(band.feedback(angle).to_string())),
            RuleMode::Repetition {
                enter_threshold,
                exit_threshold,
                direction,
                success_feedback,
                depth,
            } => match self.phase {
                RepPhase::Resting => {
                    if direction.past_on_effort(angle, *enter_threshold) {
                        self.phase = RepPhase::InEffort;
                        self.extremum_angle = Some(angle);
                    }
                    (RepEvent::None, None)
                }
                RepPhase::InEffort => {
                    let extremum = self
                        .extremum_angle
                        .map_or(angle, |prev| direction.more_extreme(prev, angle));
                    self.extremum_angle = Some(extremum);

                    if direction.past_on_return(angle, *exit_threshold) {
                        self.phase = RepPhase::Resting;
                        self.rep_count = self.rep_count.saturating_add(1);
                        self.extremum_angle = None;

                        let feedback = match depth {
                            Some(tiers) => tiers.grade(*direction, extremum),
                            None => success_feedback.as_str(),
                        };
                        log::debug!(
                            "{}: rep {} completed (extremum {:.1}°)",
                            rule.id(),
                            self.rep_count,
                            extremum
                        );
                        (RepEvent::RepCompleted, Some(feedback.to_string()))
                    } else {
                        (RepEvent::None, None)
                    }
                }
            },
        };

        RepOutcome {
            rep_count: self.rep_count,
            event,
            feedback,
            rejected: false,
            angle: Some(angle),
        }
    }

    /// Reset detector state
    pub fn reset(&mut self) {
        self.phase = RepPhase::Resting;
        self.rep_count = 0;
        self.extremum_angle = None;
    }
}
