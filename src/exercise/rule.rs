//! Exercise rules - declarative description of one exercise
//!
//! A rule names the three joints whose angle is measured and how that
//! angle is judged: either as a repeating effort cycle with hysteresis
//! thresholds, or as a static hold inside an acceptable band.

use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::pose::{DEFAULT_CONFIDENCE_FLOOR, JOINT_COUNT};

/// (first joint, vertex joint, third joint); the angle is measured at the vertex
pub type JointTriplet = (usize, usize, usize);

/// Which way the measured angle moves while the user is working
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortDirection {
    /// Angle closes under effort (squat knee, push-up elbow)
    ShrinksOnEffort,
    /// Angle opens under effort (lateral raise shoulder, press elbow)
    GrowsOnEffort,
}

impl EffortDirection {
    /// `angle` lies strictly past `threshold` on the effort side
    pub fn past_on_effort(self, angle: f32, threshold: f32) -> bool {
        match self {
            EffortDirection::ShrinksOnEffort => angle < threshold,
            EffortDirection::GrowsOnEffort => angle > threshold,
        }
    }

    /// `angle` lies strictly past `threshold` on the return side
    pub fn past_on_return(self, angle: f32, threshold: f32) -> bool {
        match self {
            EffortDirection::ShrinksOnEffort => angle > threshold,
            EffortDirection::GrowsOnEffort => angle < threshold,
        }
    }

    /// The more extreme of two angles in the effort direction
    pub fn more_extreme(self, a: f32, b: f32) -> f32 {
        match self {
            EffortDirection::ShrinksOnEffort => a.min(b),
            EffortDirection::GrowsOnEffort => a.max(b),
        }
    }
}

/// Three-tier grading of how far a rep went
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepthTiers {
    /// The extremum must reach this angle, otherwise the rep was too shallow
    pub shallow_limit: f32,
    /// An extremum strictly past this angle went too deep
    pub deep_limit: f32,
    pub shallow_feedback: String,
    pub deep_feedback: String,
    pub good_feedback: String,
}

impl DepthTiers {
    /// Feedback for a completed rep whose most extreme angle was `extremum`
    pub fn grade(&self, direction: EffortDirection, extremum: f32) -> &str {
        if direction.past_on_return(extremum, self.shallow_limit) {
            &self.shallow_feedback
        } else if direction.past_on_effort(extremum, self.deep_limit) {
            &self.deep_feedback
        } else {
            &self.good_feedback
        }
    }
}

/// Acceptable angle band for an isometric hold
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoldBand {
    pub low: f32,
    pub high: f32,
    pub good_feedback: String,
    pub adjust_feedback: String,
}

impl HoldBand {
    pub fn contains(&self, angle: f32) -> bool {
        (self.low..=self.high).contains(&angle)
    }

    pub fn feedback(&self, angle: f32) -> &str {
        if self.contains(angle) {
            &self.good_feedback
        } else {
            &self.adjust_feedback
        }
    }
}

/// How a rule turns angles into reps and feedback
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleMode {
    Repetition {
        enter_threshold: f32,
        exit_threshold: f32,
        direction: EffortDirection,
        success_feedback: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        depth: Option<DepthTiers>,
    },
    StaticHold(HoldBand),
}

impl RuleMode {
    pub fn repetition(
        enter_threshold: f32,
        exit_threshold: f32,
        direction: EffortDirection,
        success_feedback: impl Into<String>,
    ) -> Self {
        RuleMode::Repetition {
            enter_threshold,
            exit_threshold,
            direction,
            success_feedback: success_feedback.into(),
            depth: None,
        }
    }

    /// Attach depth tiers; ignored for static holds
    pub fn with_depth(mut self, tiers: DepthTiers) -> Self {
        if let RuleMode::Repetition { depth, .. } = &mut self {
            *depth = Some(tiers);
        }
        self
    }

    pub fn static_hold(
        low: f32,
        high: f32,
        good_feedback: impl Into<String>,
        adjust_feedback: impl Into<String>,
    ) -> Self {
        RuleMode::StaticHold(HoldBand {
            low,
            high,
            good_feedback: good_feedback.into(),
            adjust_feedback: adjust_feedback.into(),
        })
    }
}

/// Immutable description of one exercise
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RuleDef")]
pub struct ExerciseRule {
    id: String,
    name: String,
    joints: JointTriplet,
    confidence_floor: f32,
    mode: RuleMode,
}

/// Unvalidated rule as read from configuration
#[derive(Deserialize)]
pub(crate) struct RuleDef {
    id: String,
    #[serde(default)]
    name: Option<String>,
    joints: JointTriplet,
    #[serde(default = "default_confidence_floor")]
    confidence_floor: f32,
    mode: RuleMode,
}

fn default_confidence_floor() -> f32 {
    DEFAULT_CONFIDENCE_FLOOR
}

impl TryFrom<RuleDef> for ExerciseRule {
    type Error = RuleError;

    fn try_from(def: RuleDef) -> Result<Self, Self::Error> {
        let name = def.name.unwrap_or_else(|| def.id.clone());
        ExerciseRule::new(def.id, name, def.joints, def.mode)?
            .with_confidence_floor(def.confidence_floor)
    }
}

impl ExerciseRule {
    /// Build and validate a rule with the default confidence floor
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        joints: JointTriplet,
        mode: RuleMode,
    ) -> Result<Self, RuleError> {
        let rule = Self {
            id: id.into(),
            name: name.into(),
            joints,
            confidence_floor: DEFAULT_CONFIDENCE_FLOOR,
            mode,
        };
        rule.validate()?;
        Ok(rule)
    }

    pub fn with_confidence_floor(mut self, floor: f32) -> Result<Self, RuleError> {
        self.confidence_floor = floor;
        self.validate()?;
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn joints(&self) -> JointTriplet {
        self.joints
    }

    pub fn confidence_floor(&self) -> f32 {
        self.confidence_floor
    }

    pub fn mode(&self) -> &RuleMode {
        &self.mode
    }

    /// Static holds never count reps; their sets are timed
    pub fn is_static_hold(&self) -> bool {
        matches!(self.mode, RuleMode::StaticHold(_))
    }

    fn validate(&self) -> Result<(), RuleError> {
        if self.id.trim().is_empty() {
            return Err(RuleError::EmptyId);
        }

        let (a, b, c) = self.joints;
        if let Some(index) = [a, b, c].into_iter().find(|&i| i >= JOINT_COUNT) {
            return Err(RuleError::JointOutOfRange {
                id: self.id.clone(),
                index,
            });
        }

        if !(0.0..=1.0).contains(&self.confidence_floor) {
            return Err(RuleError::InvalidConfidenceFloor {
                id: self.id.clone(),
                floor: self.confidence_floor,
            });
        }

        match &self.mode {
            RuleMode::Repetition {
                enter_threshold,
                exit_threshold,
                direction,
                depth,
                ..
            } => {
                let (enter, exit) = (*enter_threshold, *exit_threshold);
                if enter == exit {
                    return Err(RuleError::IdenticalThresholds {
                        id: self.id.clone(),
                        threshold: enter,
                    });
                }
                // Exit must sit on the return side of enter, or there is no hysteresis band
                if !direction.past_on_return(exit, enter) {
                    return Err(RuleError::InvertedThresholds {
                        id: self.id.clone(),
                        enter,
                        exit,
                    });
                }
                if let Some(tiers) = depth {
                    if !direction.past_on_effort(tiers.deep_limit, tiers.shallow_limit) {
                        return Err(RuleError::InvalidDepthTiers {
                            id: self.id.clone(),
                            shallow: tiers.shallow_limit,
                            deep: tiers.deep_limit,
                        });
                    }
                }
            }
            RuleMode::StaticHold(band) => {
                if !(0.0 <= band.low && band.low < band.high && band.high <= 180.0) {
                    return Err(RuleError::InvalidHoldBand {
                        id: self.id.clone(),
                        low: band.low,
                        high: band.high,
                    });
                }
            }
        }

        Ok(())
    }
}
