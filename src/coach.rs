//! Coach - one user's explicit session
//!
//! Owns the exercise catalog, an optional ad-hoc detector (single exercise
//! picked outside any program) and the workout program. Every frame goes
//! through [`Coach::process_frame`], which ticks the program first and then
//! routes the frame to whichever detector is live.

use serde::{Deserialize, Serialize};

use crate::error::{CoachResult, GeometryError, ProgramError};
use crate::exercise::{ExerciseCatalog, RepDetector, RepOutcome};
use crate::pose::{Frame, PoseSource};
use crate::workout::{
    parse_program, program_to_json, ProgramEntry, SequencerEvent, SessionClock, SessionPhase,
    WorkoutSession, WorkoutStatus,
};

/// Session-wide settings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    /// Overrides every rule's confidence floor when set
    pub confidence_floor: Option<f32>,
}

/// Everything the presentation layer needs after one frame or tick
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CoachOutput {
    pub rep_count: u32,
    pub feedback: Option<String>,
    pub rejected: bool,
    pub angle: Option<f32>,
    pub events: Vec<SequencerEvent>,
    /// Present while a program is loaded and not idle
    pub workout: Option<WorkoutStatus>,
}

impl CoachOutput {
    fn apply(&mut self, outcome: RepOutcome) {
        self.rep_count = outcome.rep_count;
        self.feedback = outcome.feedback;
        self.rejected = outcome.rejected;
        self.angle = outcome.angle;
    }

    /// Frame skipped for degenerate geometry; counts carry over
    fn skipped(&mut self, rep_count: u32) {
        self.rep_count = rep_count;
        self.rejected = true;
    }
}

/// Result of [`Coach::pump`]
#[derive(Clone, Debug, PartialEq)]
pub enum Pumped {
    /// A frame was scored
    Frame(CoachOutput),
    /// No frame available; timers only
    Exhausted(CoachOutput),
}

impl Pumped {
    pub fn output(&self) -> &CoachOutput {
        match self {
            Pumped::Frame(output) | Pumped::Exhausted(output) => output,
        }
    }

    pub fn into_output(self) -> CoachOutput {
        match self {
            Pumped::Frame(output) | Pumped::Exhausted(output) => output,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Pumped::Exhausted(_))
    }
}

pub struct Coach {
    catalog: ExerciseCatalog,
    config: CoachConfig,
    selected: Option<RepDetector>,
    workout: WorkoutSession,
}

impl Default for Coach {
    fn default() -> Self {
        Self::new(ExerciseCatalog::builtin(), CoachConfig::default())
    }
}

impl Coach {
    pub fn new(catalog: ExerciseCatalog, config: CoachConfig) -> Self {
        let mut workout = WorkoutSession::new();
        workout.set_confidence_floor(config.confidence_floor);
        Self {
            catalog,
            config,
            selected: None,
            workout,
        }
    }

    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &CoachConfig {
        &self.config
    }

    pub fn workout(&self) -> &WorkoutSession {
        &self.workout
    }

    pub fn selected(&self) -> Option<&RepDetector> {
        self.selected.as_ref()
    }

    /// Overlay a JSON rule table on the current catalog
    ///
    /// Already-bound detectors keep the rule they were created with.
    pub fn load_catalog(&mut self, json: &str) -> CoachResult<usize> {
        let extra = ExerciseCatalog::from_json(json)?;
        let added = extra.len();
        self.catalog.merge(extra);
        log::info!("catalog loaded: {} rules merged, {} total", added, self.catalog.len());
        Ok(added)
    }

    /// Bind an ad-hoc detector for one exercise, replacing any previous one
    pub fn select_exercise(&mut self, id: &str) -> CoachResult<()> {
        let rule = self.catalog.get(id).ok_or_else(|| {
            log::warn!("select rejected: unknown exercise '{}'", id);
            ProgramError::UnknownExercise(id.to_string())
        })?;
        let mut detector = RepDetector::new(rule);
        if let Some(floor) = self.config.confidence_floor {
            detector.set_confidence_floor(floor);
        }
        self.selected = Some(detector);
        log::info!("selected exercise '{}'", id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ============================================================================
    // Program authoring
    // ============================================================================

    pub fn add_entry(&mut self, entry: &ProgramEntry) -> CoachResult<usize> {
        Ok(self.workout.add_entry(entry, &self.catalog)?)
    }

    pub fn edit_entry(&mut self, index: usize, entry: &ProgramEntry) -> CoachResult<()> {
        Ok(self.workout.edit_entry(index, entry, &self.catalog)?)
    }

    pub fn remove_entry(&mut self, index: usize) -> CoachResult<()> {
        self.workout.remove_entry(index)?;
        Ok(())
    }

    pub fn entries(&self) -> Vec<ProgramEntry> {
        self.workout.entries().iter().map(|e| e.to_program_entry()).collect()
    }

    /// Replace the program with a JSON list of rows
    pub fn import_program(&mut self, json: &str) -> CoachResult<usize> {
        let entries = parse_program(json, &self.catalog)?;
        let count = entries.len();
        self.workout.replace_entries(entries)?;
        log::info!("program imported: {} entries", count);
        Ok(count)
    }

    pub fn export_program(&self) -> CoachResult<String> {
        Ok(program_to_json(self.workout.entries())?)
    }

    // ============================================================================
    // Program commands
    // ============================================================================

    pub fn start_workout(&mut self, now: f64) -> CoachResult<()> {
        Ok(self.workout.start(now)?)
    }

    pub fn pause_workout(&mut self) -> CoachResult<()> {
        Ok(self.workout.pause()?)
    }

    pub fn reset_workout(&mut self) {
        self.workout.reset();
    }

    pub fn workout_status(&self) -> Option<WorkoutStatus> {
        (self.workout.phase() != SessionPhase::Idle).then(|| self.workout.status())
    }

    /// Advance program timers without a frame
    pub fn tick(&mut self, now: f64) -> CoachOutput {
        let mut output = CoachOutput::default();
        self.tick_into(now, &mut output);
        output.rep_count = self.current_rep_count();
        output
    }

    fn tick_into(&mut self, now: f64, output: &mut CoachOutput) {
        let outcome = self.workout.tick(now);
        output.events.extend(outcome.event);
        output.workout = self.workout_status();
    }

    fn current_rep_count(&self) -> u32 {
        match self.workout.phase() {
            SessionPhase::Idle => self.selected.as_ref().map_or(0, RepDetector::rep_count),
            _ => self.workout.detector().map_or(0, RepDetector::rep_count),
        }
    }

    // ============================================================================
    // Frame input
    // ============================================================================

    /// Tick the program to `now`, then score the frame
    ///
    /// While a program is active its detector scores frames (only during a
    /// set; frames while resting or paused are ignored). Otherwise the
    /// ad-hoc detector, if any, scores them. Degenerate joint geometry
    /// skips the frame: `rejected` is set, no feedback, state untouched.
    pub fn process_frame(&mut self, frame: &Frame, now: f64) -> CoachOutput {
        let mut output = CoachOutput::default();
        self.tick_into(now, &mut output);

        let scored = if self.workout.phase().is_active() {
            self.score_workout(frame, now, &mut output)
        } else {
            self.score_selected(frame, &mut output)
        };

        if let Err(e) = scored {
            log::warn!("skipping frame: {}", e);
            output.skipped(self.current_rep_count());
        }
        if output.workout.is_some() {
            output.workout = self.workout_status();
        }
        output
    }

    fn score_workout(&mut self, frame: &Frame, now: f64, output: &mut CoachOutput) -> Result<(), GeometryError> {
        match self.workout.observe(frame, now)? {
            Some(result) => {
                // Reports the count that closed the set, not the reset detector's
                output.apply(result.outcome);
                output.events.extend(result.event);
            }
            None => output.rep_count = self.current_rep_count(),
        }
        Ok(())
    }

    fn score_selected(&mut self, frame: &Frame, output: &mut CoachOutput) -> Result<(), GeometryError> {
        if let Some(detector) = self.selected.as_mut() {
            output.apply(detector.observe(frame)?);
        }
        Ok(())
    }

    /// Pull one frame from `source` and process it at the clock's time
    ///
    /// An exhausted source still ticks the program, so rest timers keep
    /// running and their events are reported.
    pub fn pump<S, C>(&mut self, source: &mut S, clock: &C) -> Pumped
    where
        S: PoseSource + ?Sized,
        C: SessionClock + ?Sized,
    {
        let now = clock.now();
        match source.next_keypoints() {
            Some(frame) => Pumped::Frame(self.process_frame(&frame, now)),
            None => Pumped::Exhausted(self.tick(now)),
        }
    }
}
