//! Workout program entries and authoring validation
//!
//! A program is an ordered list of (exercise, reps, sets, rest) rows. Rows
//! come in as [`ProgramEntry`] values (from the UI or JSON) and are
//! resolved against the exercise catalog into [`WorkoutEntry`] values the
//! sequencer runs.

use std::ops::RangeInclusive;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ProgramError;
use crate::exercise::{ExerciseCatalog, ExerciseRule};

/// Reps per set (seconds held, for static-hold exercises)
pub const TARGET_REPS_RANGE: RangeInclusive<u32> = 1..=50;
pub const SETS_RANGE: RangeInclusive<u32> = 1..=10;
pub const REST_SECONDS_RANGE: RangeInclusive<u32> = 0..=300;

/// One program row as authored
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramEntry {
    pub exercise_id: String,
    pub target_reps: u32,
    pub sets: u32,
    pub rest_seconds: u32,
}

impl ProgramEntry {
    pub fn new(exercise_id: impl Into<String>, target_reps: u32, sets: u32, rest_seconds: u32) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            target_reps,
            sets,
            rest_seconds,
        }
    }

    /// Check ranges and resolve the exercise id
    pub fn resolve(&self, catalog: &ExerciseCatalog) -> Result<WorkoutEntry, ProgramError> {
        check_range("target_reps", self.target_reps, &TARGET_REPS_RANGE)?;
        check_range("sets", self.sets, &SETS_RANGE)?;
        check_range("rest_seconds", self.rest_seconds, &REST_SECONDS_RANGE)?;

        let rule = catalog
            .get(&self.exercise_id)
            .ok_or_else(|| ProgramError::UnknownExercise(self.exercise_id.clone()))?;
        Ok(WorkoutEntry::new(rule, self.target_reps, self.sets, self.rest_seconds))
    }
}

fn check_range(field: &'static str, value: u32, range: &RangeInclusive<u32>) -> Result<(), ProgramError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ProgramError::InvalidEntry {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// A program row bound to its exercise rule, with set progress
#[derive(Clone, Debug)]
pub struct WorkoutEntry {
    rule: Arc<ExerciseRule>,
    target_reps: u32,
    sets: u32,
    remaining_sets: u32,
    rest_seconds: u32,
}

impl WorkoutEntry {
    /// Bind a row without authoring range checks
    pub fn new(rule: Arc<ExerciseRule>, target_reps: u32, sets: u32, rest_seconds: u32) -> Self {
        Self {
            rule,
            target_reps,
            sets,
            remaining_sets: sets,
            rest_seconds,
        }
    }

    pub fn rule(&self) -> &Arc<ExerciseRule> {
        &self.rule
    }

    pub fn exercise_id(&self) -> &str {
        self.rule.id()
    }

    pub fn target_reps(&self) -> u32 {
        self.target_reps
    }

    /// Authored set count
    pub fn sets(&self) -> u32 {
        self.sets
    }

    pub fn remaining_sets(&self) -> u32 {
        self.remaining_sets
    }

    pub fn rest_seconds(&self) -> u32 {
        self.rest_seconds
    }

    /// 1-based number of the set currently due
    pub fn current_set(&self) -> u32 {
        (self.sets - self.remaining_sets + 1).min(self.sets.max(1))
    }

    /// Static-hold entries count `target_reps` as seconds held
    pub fn is_timed(&self) -> bool {
        self.rule.is_static_hold()
    }

    pub(crate) fn complete_set(&mut self) {
        self.remaining_sets = self.remaining_sets.saturating_sub(1);
    }

    pub(crate) fn restore_sets(&mut self) {
        self.remaining_sets = self.sets;
    }

    pub fn to_program_entry(&self) -> ProgramEntry {
        ProgramEntry::new(self.exercise_id(), self.target_reps, self.sets, self.rest_seconds)
    }
}

/// Parse a JSON array of program rows and resolve every one; all or nothing
pub fn parse_program(json: &str, catalog: &ExerciseCatalog) -> Result<Vec<WorkoutEntry>, ProgramError> {
    let rows: Vec<ProgramEntry> = serde_json::from_str(json)?;
    rows.iter().map(|row| row.resolve(catalog)).collect()
}

/// Serialize a program back to its authored rows
pub fn program_to_json(entries: &[WorkoutEntry]) -> Result<String, ProgramError> {
    let rows: Vec<ProgramEntry> = entries.iter().map(WorkoutEntry::to_program_entry).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_valid_entry() {
        let catalog = ExerciseCatalog::builtin();
        let entry = ProgramEntry::new("squat", 12, 3, 60).resolve(&catalog).unwrap();
        assert_eq!(entry.exercise_id(), "squat");
        assert_eq!(entry.remaining_sets(), 3);
        assert_eq!(entry.current_set(), 1);
        assert!(!entry.is_timed());
    }

    #[test]
    fn test_unknown_exercise() {
        let catalog = ExerciseCatalog::builtin();
        let err = ProgramEntry::new("calf_raise", 12, 3, 60).resolve(&catalog).unwrap_err();
        assert!(matches!(err, ProgramError::UnknownExercise(id) if id == "calf_raise"));
    }

    #[test]
    fn test_range_checks() {
        let catalog = ExerciseCatalog::builtin();
        let cases = [
            (ProgramEntry::new("squat", 0, 3, 60), "target_reps"),
            (ProgramEntry::new("squat", 51, 3, 60), "target_reps"),
            (ProgramEntry::new("squat", 10, 0, 60), "sets"),
            (ProgramEntry::new("squat", 10, 11, 60), "sets"),
            (ProgramEntry::new("squat", 10, 3, 301), "rest_seconds"),
        ];
        for (entry, expected) in cases {
            match entry.resolve(&catalog) {
                Err(ProgramError::InvalidEntry { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected InvalidEntry for {expected}, got {other:?}"),
            }
        }
        assert!(ProgramEntry::new("squat", 50, 10, 0).resolve(&catalog).is_ok());
        assert!(ProgramEntry::new("squat", 1, 1, 300).resolve(&catalog).is_ok());
    }

    #[test]
    fn test_sets_never_exceed_authored() {
        let catalog = ExerciseCatalog::builtin();
        let mut entry = ProgramEntry::new("push_up", 10, 2, 30).resolve(&catalog).unwrap();
        entry.complete_set();
        assert_eq!(entry.current_set(), 2);
        entry.complete_set();
        entry.complete_set();
        assert_eq!(entry.remaining_sets(), 0);
        entry.restore_sets();
        assert_eq!(entry.remaining_sets(), 2);
    }

    #[test]
    fn test_program_json_round_trip() {
        let catalog = ExerciseCatalog::builtin();
        let json = r#"[
            {"exercise_id": "squat", "target_reps": 12, "sets": 3, "rest_seconds": 60},
            {"exercise_id": "plank", "target_reps": 30, "sets": 2, "rest_seconds": 45}
        ]"#;
        let entries = parse_program(json, &catalog).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[1].is_timed());

        let again = parse_program(&program_to_json(&entries).unwrap(), &catalog).unwrap();
        let rows: Vec<_> = again.iter().map(WorkoutEntry::to_program_entry).collect();
        assert_eq!(rows, entries.iter().map(WorkoutEntry::to_program_entry).collect::<Vec<_>>());
    }

    #[test]
    fn test_program_json_is_all_or_nothing() {
        let catalog = ExerciseCatalog::builtin();
        let json = r#"[
            {"exercise_id": "squat", "target_reps": 12, "sets": 3, "rest_seconds": 60},
            {"exercise_id": "moonwalk", "target_reps": 5, "sets": 1, "rest_seconds": 0}
        ]"#;
        assert!(matches!(parse_program(json, &catalog), Err(ProgramError::UnknownExercise(_))));
        assert!(matches!(parse_program("{", &catalog), Err(ProgramError::Json(_))));
    }
}
