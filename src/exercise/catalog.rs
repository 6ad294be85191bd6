//! Exercise catalog - the rule table
//!
//! Adding an exercise is a data change: one more row here, or one more
//! object in a JSON catalog merged over the built-ins.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::rule::{DepthTiers, EffortDirection, ExerciseRule, JointTriplet, RuleDef, RuleMode};
use crate::error::{CatalogError, RuleError};
use crate::pose::{
    LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST,
};

use EffortDirection::{GrowsOnEffort, ShrinksOnEffort};

// Joint triplets measured on the camera-facing side
const KNEE: JointTriplet = (LEFT_HIP, LEFT_KNEE, LEFT_ANKLE);
const ELBOW: JointTriplet = (LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST);
const SHOULDER: JointTriplet = (LEFT_HIP, LEFT_SHOULDER, LEFT_ELBOW);
const HIP: JointTriplet = (LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE);
const BODY_LINE: JointTriplet = (LEFT_SHOULDER, LEFT_HIP, LEFT_ANKLE);

/// Lookup table of exercise rules, shared read-only by detectors
#[derive(Clone, Debug, Default)]
pub struct ExerciseCatalog {
    rules: BTreeMap<String, Arc<ExerciseRule>>,
}

impl ExerciseCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in exercise table
    pub fn builtin() -> Self {
        let rules = builtin_rules()
            .into_iter()
            .filter_map(|rule| match rule {
                Ok(rule) => Some((rule.id().to_string(), Arc::new(rule))),
                Err(e) => {
                    log::error!("skipping built-in exercise: {}", e);
                    None
                }
            })
            .collect();
        Self { rules }
    }

    /// Build a catalog, rejecting duplicate ids
    pub fn from_rules(rules: impl IntoIterator<Item = ExerciseRule>) -> Result<Self, CatalogError> {
        let mut catalog = Self::empty();
        for rule in rules {
            if catalog.contains(rule.id()) {
                return Err(CatalogError::DuplicateId(rule.id().to_string()));
            }
            catalog.insert(rule);
        }
        Ok(catalog)
    }

    /// Parse a JSON array of rules; every rule is validated on the way in
    ///
    /// Malformed JSON is [`CatalogError::Json`]; well-formed rules that fail
    /// validation are [`CatalogError::InvalidRule`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let defs: Vec<RuleDef> = serde_json::from_str(json)?;
        let rules = defs
            .into_iter()
            .map(ExerciseRule::try_from)
            .collect::<Result<Vec<_>, RuleError>>()?;
        Self::from_rules(rules)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        let rules: Vec<&ExerciseRule> = self.rules.values().map(|r| r.as_ref()).collect();
        Ok(serde_json::to_string_pretty(&rules)?)
    }

    /// Add or replace a rule
    pub fn insert(&mut self, rule: ExerciseRule) {
        self.rules.insert(rule.id().to_string(), Arc::new(rule));
    }

    /// Overlay `other` on this catalog; rules with the same id are replaced
    pub fn merge(&mut self, other: ExerciseCatalog) {
        self.rules.extend(other.rules);
    }

    pub fn get(&self, id: &str) -> Option<Arc<ExerciseRule>> {
        self.rules.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rules.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn rules(&self) -> impl Iterator<Item = &Arc<ExerciseRule>> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn rep(
    id: &str,
    name: &str,
    joints: JointTriplet,
    enter: f32,
    exit: f32,
    direction: EffortDirection,
    feedback: &str,
) -> Result<ExerciseRule, RuleError> {
    ExerciseRule::new(id, name, joints, RuleMode::repetition(enter, exit, direction, feedback))
}

fn hold(
    id: &str,
    name: &str,
    joints: JointTriplet,
    band: (f32, f32),
    good: &str,
    adjust: &str,
) -> Result<ExerciseRule, RuleError> {
    ExerciseRule::new(id, name, joints, RuleMode::static_hold(band.0, band.1, good, adjust))
}

fn tiers(shallow: f32, deep: f32, shallow_msg: &str, deep_msg: &str, good_msg: &str) -> DepthTiers {
    DepthTiers {
        shallow_limit: shallow,
        deep_limit: deep,
        shallow_feedback: shallow_msg.to_string(),
        deep_feedback: deep_msg.to_string(),
        good_feedback: good_msg.to_string(),
    }
}

fn builtin_rules() -> Vec<Result<ExerciseRule, RuleError>> {
    vec![
        // Lower body
        ExerciseRule::new(
            "squat",
            "Squat",
            KNEE,
            RuleMode::repetition(150.0, 160.0, ShrinksOnEffort, "Good squat!").with_depth(tiers(
                100.0,
                60.0,
                "Squat deeper!",
                "Don't go too deep!",
                "Good form!",
            )),
        ),
        rep("forward_lunge", "Forward Lunge", KNEE, 100.0, 160.0, ShrinksOnEffort, "Good lunge!"),
        rep("side_lunge", "Side Lunge", KNEE, 110.0, 160.0, ShrinksOnEffort, "Good side lunge!"),
        ExerciseRule::new(
            "deadlift",
            "Deadlift",
            HIP,
            RuleMode::repetition(120.0, 165.0, ShrinksOnEffort, "Good deadlift!").with_depth(tiers(
                110.0,
                60.0,
                "Hinge further at the hips!",
                "Don't round down too far!",
                "Good hinge!",
            )),
        ),
        // Upper body
        rep("push_up", "Push-up", ELBOW, 90.0, 160.0, ShrinksOnEffort, "Good push-up!"),
        rep("pull_up", "Pull-up", ELBOW, 90.0, 150.0, ShrinksOnEffort, "Good pull-up!"),
        rep("bicep_curl", "Bicep Curl", ELBOW, 50.0, 150.0, ShrinksOnEffort, "Good curl!"),
        rep("tricep_extension", "Tricep Extension", ELBOW, 150.0, 90.0, GrowsOnEffort, "Good extension!"),
        rep("shoulder_press", "Shoulder Press", ELBOW, 160.0, 100.0, GrowsOnEffort, "Good press!"),
        rep("lateral_raise", "Lateral Raise", SHOULDER, 80.0, 30.0, GrowsOnEffort, "Good lateral raise!"),
        // Cardio
        rep("jumping_jack", "Jumping Jack", SHOULDER, 140.0, 40.0, GrowsOnEffort, "Good jumping jack!"),
        rep("high_knees", "High Knees", HIP, 100.0, 150.0, ShrinksOnEffort, "Good knee drive!"),
        rep("mountain_climber", "Mountain Climber", HIP, 90.0, 140.0, ShrinksOnEffort, "Good climber!"),
        rep("burpee", "Burpee", HIP, 90.0, 160.0, ShrinksOnEffort, "Good burpee!"),
        // Static holds
        hold("plank", "Plank", BODY_LINE, (160.0, 180.0), "Good form!", "Keep your hips in line!"),
        hold("wall_sit", "Wall Sit", KNEE, (80.0, 100.0), "Good form!", "Aim for a right angle at the knee!"),
        hold("bird_dog", "Bird Dog", BODY_LINE, (150.0, 180.0), "Good extension!", "Extend your leg further!"),
    ]
}
