//! Workout sequencer - exercising / resting state machine
//!
//! Walks an ordered program of entries. Each entry is worked set by set
//! with a rest after every set (including the last, before the next
//! exercise). Reps arrive through [`WorkoutSession::feed_frame`]; time
//! arrives through [`WorkoutSession::tick`] with caller-supplied
//! timestamps, so nothing here blocks or reads a clock.

use std::fmt;

use serde::Serialize;

use super::program::{ProgramEntry, WorkoutEntry};
use crate::error::{GeometryError, ProgramError};
use crate::exercise::{ExerciseCatalog, RepDetector, RepOutcome};
use crate::pose::Frame;

/// Sequencer state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    Exercising,
    Resting,
    /// Timers frozen; `start()` resumes the phase that was paused
    Paused,
    Complete,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Exercising => "exercising",
            SessionPhase::Resting => "resting",
            SessionPhase::Paused => "paused",
            SessionPhase::Complete => "complete",
        }
    }

    /// A program run is in progress (possibly paused)
    pub fn is_active(&self) -> bool {
        matches!(self, SessionPhase::Exercising | SessionPhase::Resting | SessionPhase::Paused)
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transitions worth telling the presentation layer about
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SequencerEvent {
    SetCompleted {
        exercise_id: String,
        remaining_sets: u32,
        rest_seconds: u32,
    },
    SetStarted {
        index: usize,
        exercise_id: String,
        set_number: u32,
    },
    WorkoutCompleted,
}

/// Status snapshot for display
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorkoutStatus {
    pub phase: SessionPhase,
    pub current_index: Option<usize>,
    pub current_exercise_id: Option<String>,
    pub target_reps: Option<u32>,
    pub remaining_sets: Option<u32>,
    pub rep_count: u32,
    pub rest_remaining_seconds: f64,
    pub held_seconds: f64,
}

/// Result of one [`WorkoutSession::tick`]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SequencerOutcome {
    pub event: Option<SequencerEvent>,
    pub status: WorkoutStatus,
}

/// Result of running one frame through the bound detector
#[derive(Clone, Debug, PartialEq)]
pub struct FrameResult {
    pub outcome: RepOutcome,
    pub event: Option<SequencerEvent>,
}

/// One user's workout program and its progress
#[derive(Debug)]
pub struct WorkoutSession {
    entries: Vec<WorkoutEntry>,
    current_index: usize,
    phase: SessionPhase,
    /// Phase to resume when paused
    resume_phase: Option<SessionPhase>,
    rest_remaining: f64,
    /// Seconds spent exercising in the current timed set
    held_seconds: f64,
    last_tick: Option<f64>,
    detector: Option<RepDetector>,
    confidence_floor: Option<f32>,
}

impl Default for WorkoutSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutSession {
    pub fn new() -> Self {
        Self::from_entries(Vec::new())
    }

    pub fn from_entries(entries: Vec<WorkoutEntry>) -> Self {
        Self {
            entries,
            current_index: 0,
            phase: SessionPhase::Idle,
            resume_phase: None,
            rest_remaining: 0.0,
            held_seconds: 0.0,
            last_tick: None,
            detector: None,
            confidence_floor: None,
        }
    }

    /// Floor applied to every detector this session binds (`None` = per-rule)
    pub fn set_confidence_floor(&mut self, floor: Option<f32>) {
        self.confidence_floor = floor;
        if let (Some(detector), Some(floor)) = (self.detector.as_mut(), floor) {
            detector.set_confidence_floor(floor);
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn entries(&self) -> &[WorkoutEntry] {
        &self.entries
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_entry(&self) -> Option<&WorkoutEntry> {
        if self.phase.is_active() {
            self.entries.get(self.current_index)
        } else {
            None
        }
    }

    pub fn detector(&self) -> Option<&RepDetector> {
        self.detector.as_ref()
    }

    pub fn rest_remaining(&self) -> f64 {
        self.rest_remaining
    }

    // ============================================================================
    // Authoring (Idle only)
    // ============================================================================

    fn ensure_editable(&self) -> Result<(), ProgramError> {
        if self.phase == SessionPhase::Idle {
            Ok(())
        } else {
            Err(ProgramError::ProgramLocked {
                phase: self.phase.as_str(),
            })
        }
    }

    fn ensure_index(&self, index: usize) -> Result<(), ProgramError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(ProgramError::EntryOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    /// Append a row; returns its index
    pub fn add_entry(&mut self, entry: &ProgramEntry, catalog: &ExerciseCatalog) -> Result<usize, ProgramError> {
        self.ensure_editable()?;
        let resolved = entry.resolve(catalog)?;
        self.entries.push(resolved);
        Ok(self.entries.len() - 1)
    }

    pub fn edit_entry(
        &mut self,
        index: usize,
        entry: &ProgramEntry,
        catalog: &ExerciseCatalog,
    ) -> Result<(), ProgramError> {
        self.ensure_editable()?;
        self.ensure_index(index)?;
        self.entries[index] = entry.resolve(catalog)?;
        Ok(())
    }

    pub fn remove_entry(&mut self, index: usize) -> Result<WorkoutEntry, ProgramError> {
        self.ensure_editable()?;
        self.ensure_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Replace the whole program
    pub fn replace_entries(&mut self, entries: Vec<WorkoutEntry>) -> Result<(), ProgramError> {
        self.ensure_editable()?;
        self.entries = entries;
        Ok(())
    }

    // ============================================================================
    // Commands
    // ============================================================================

    /// Begin the program from the first entry, or resume a paused run
    pub fn start(&mut self, now: f64) -> Result<(), ProgramError> {
        match self.phase {
            SessionPhase::Idle | SessionPhase::Complete => {
                if self.entries.is_empty() {
                    log::warn!("start rejected: program is empty");
                    return Err(ProgramError::EmptyProgram);
                }
                self.entries.iter_mut().for_each(WorkoutEntry::restore_sets);
                self.current_index = 0;
                self.rest_remaining = 0.0;
                self.resume_phase = None;
                self.begin_set();
                self.phase = SessionPhase::Exercising;
                self.last_tick = Some(now);
                log::info!(
                    "workout started: {} entries, first '{}'",
                    self.entries.len(),
                    self.entries[0].exercise_id()
                );
                Ok(())
            }
            SessionPhase::Paused => {
                self.phase = self.resume_phase.take().unwrap_or(SessionPhase::Exercising);
                self.last_tick = Some(now);
                log::info!("workout resumed ({})", self.phase);
                Ok(())
            }
            SessionPhase::Exercising | SessionPhase::Resting => Err(self.invalid_command("start")),
        }
    }

    /// Freeze timers, keeping index, set counts and reps
    pub fn pause(&mut self) -> Result<(), ProgramError> {
        match self.phase {
            SessionPhase::Exercising | SessionPhase::Resting => {
                self.resume_phase = Some(self.phase);
                self.phase = SessionPhase::Paused;
                self.last_tick = None;
                log::info!("workout paused");
                Ok(())
            }
            _ => Err(self.invalid_command("pause")),
        }
    }

    /// Back to Idle with authored set counts; valid from any phase
    pub fn reset(&mut self) {
        self.entries.iter_mut().for_each(WorkoutEntry::restore_sets);
        self.current_index = 0;
        self.phase = SessionPhase::Idle;
        self.resume_phase = None;
        self.rest_remaining = 0.0;
        self.held_seconds = 0.0;
        self.last_tick = None;
        self.detector = None;
        log::info!("workout reset");
    }

    fn invalid_command(&self, command: &'static str) -> ProgramError {
        log::warn!("'{}' rejected while {}", command, self.phase);
        ProgramError::InvalidCommand {
            command,
            phase: self.phase.as_str(),
        }
    }

    // ============================================================================
    // Frame and time input
    // ============================================================================

    /// Run a frame captured at `now` through the bound detector and account
    /// for any rep
    ///
    /// Returns `Ok(None)` when no set is in progress (frames are not
    /// scored while resting, paused or idle).
    pub fn observe(&mut self, frame: &Frame, now: f64) -> Result<Option<FrameResult>, GeometryError> {
        if self.phase != SessionPhase::Exercising {
            return Ok(None);
        }
        let outcome = match self.detector.as_mut() {
            Some(detector) => detector.observe(frame)?,
            None => return Ok(None),
        };
        let event = self.feed_frame(&outcome, now);
        Ok(Some(FrameResult { outcome, event }))
    }

    /// Account for one detector outcome produced at `now` while exercising
    ///
    /// A set finished here starts its rest countdown at `now`.
    pub fn feed_frame(&mut self, outcome: &RepOutcome, now: f64) -> Option<SequencerEvent> {
        if self.phase != SessionPhase::Exercising || !outcome.is_rep() {
            return None;
        }
        let entry = self.entries.get(self.current_index)?;
        if entry.is_timed() || outcome.rep_count < entry.target_reps() {
            return None;
        }
        Some(self.complete_set(now))
    }

    /// Advance timers to `now`
    pub fn tick(&mut self, now: f64) -> SequencerOutcome {
        let delta = self.last_tick.map_or(0.0, |prev| (now - prev).max(0.0));

        let event = match self.phase {
            SessionPhase::Exercising => {
                self.last_tick = Some(now);
                self.tick_exercising(delta, now)
            }
            SessionPhase::Resting => {
                self.last_tick = Some(now);
                self.tick_resting(delta)
            }
            SessionPhase::Idle | SessionPhase::Paused | SessionPhase::Complete => None,
        };

        SequencerOutcome {
            event,
            status: self.status(),
        }
    }

    fn tick_exercising(&mut self, delta: f64, now: f64) -> Option<SequencerEvent> {
        let entry = self.entries.get(self.current_index)?;
        let target = f64::from(entry.target_reps());

        let done = if entry.is_timed() {
            self.held_seconds += delta;
            self.held_seconds >= target
        } else {
            // A zero-rep target is satisfied without any rep events
            entry.target_reps() == 0
        };

        done.then(|| self.complete_set(now))
    }

    fn tick_resting(&mut self, delta: f64) -> Option<SequencerEvent> {
        self.rest_remaining -= delta;
        if self.rest_remaining > 0.0 {
            return None;
        }
        self.rest_remaining = 0.0;

        let sets_left = self.entries.get(self.current_index)?.remaining_sets() > 0;
        if !sets_left {
            self.current_index += 1;
            if self.current_index >= self.entries.len() {
                self.phase = SessionPhase::Complete;
                self.detector = None;
                self.last_tick = None;
                log::info!("workout complete");
                return Some(SequencerEvent::WorkoutCompleted);
            }
        }

        self.begin_set();
        self.phase = SessionPhase::Exercising;
        let entry = &self.entries[self.current_index];
        log::info!(
            "starting '{}' set {}/{}",
            entry.exercise_id(),
            entry.current_set(),
            entry.sets()
        );
        Some(SequencerEvent::SetStarted {
            index: self.current_index,
            exercise_id: entry.exercise_id().to_string(),
            set_number: entry.current_set(),
        })
    }

    /// Bind a fresh detector for the current entry
    fn begin_set(&mut self) {
        self.held_seconds = 0.0;
        self.detector = self.entries.get(self.current_index).map(|entry| {
            let mut detector = RepDetector::new(entry.rule().clone());
            if let Some(floor) = self.confidence_floor {
                detector.set_confidence_floor(floor);
            }
            detector
        });
    }

    fn complete_set(&mut self, now: f64) -> SequencerEvent {
        let entry = &mut self.entries[self.current_index];
        entry.complete_set();
        self.rest_remaining = f64::from(entry.rest_seconds());
        self.held_seconds = 0.0;
        self.phase = SessionPhase::Resting;
        self.last_tick = Some(now);
        if let Some(detector) = self.detector.as_mut() {
            detector.reset();
        }

        log::info!(
            "'{}' set done, {} left, resting {}s",
            entry.exercise_id(),
            entry.remaining_sets(),
            entry.rest_seconds()
        );
        SequencerEvent::SetCompleted {
            exercise_id: entry.exercise_id().to_string(),
            remaining_sets: entry.remaining_sets(),
            rest_seconds: entry.rest_seconds(),
        }
    }

    pub fn status(&self) -> WorkoutStatus {
        let entry = self.current_entry();
        let resting = self.phase == SessionPhase::Resting
            || (self.phase == SessionPhase::Paused && self.resume_phase == Some(SessionPhase::Resting));

        WorkoutStatus {
            phase: self.phase,
            current_index: entry.map(|_| self.current_index),
            current_exercise_id: entry.map(|e| e.exercise_id().to_string()),
            target_reps: entry.map(WorkoutEntry::target_reps),
            remaining_sets: entry.map(WorkoutEntry::remaining_sets),
            rep_count: self.detector.as_ref().map_or(0, RepDetector::rep_count),
            rest_remaining_seconds: if resting { self.rest_remaining } else { 0.0 },
            held_seconds: self.held_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::RepPhase;
    use crate::test_support::frame_with_angle;

    const ELBOW: (usize, usize, usize) = (5, 7, 9);

    fn catalog() -> ExerciseCatalog {
        ExerciseCatalog::builtin()
    }

    fn session(rows: &[(&str, u32, u32, u32)]) -> WorkoutSession {
        let catalog = catalog();
        let entries = rows
            .iter()
            .map(|&(id, reps, sets, rest)| WorkoutEntry::new(catalog.get(id).unwrap(), reps, sets, rest))
            .collect();
        WorkoutSession::from_entries(entries)
    }

    /// Feed `n` full push-up cycles captured at `now`; returns the sequencer events seen
    fn do_push_ups(session: &mut WorkoutSession, n: usize, now: f64) -> Vec<SequencerEvent> {
        let mut events = Vec::new();
        for _ in 0..n {
            for angle in [170.0, 80.0, 170.0] {
                if let Some(result) = session.observe(&frame_with_angle(ELBOW, angle), now).unwrap() {
                    events.extend(result.event);
                }
            }
        }
        events
    }

    #[test]
    fn test_empty_program_cannot_start() {
        let mut s = WorkoutSession::new();
        assert!(matches!(s.start(0.0), Err(ProgramError::EmptyProgram)));
        assert_eq!(s.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_start_binds_first_entry() {
        let mut s = session(&[("push_up", 10, 2, 5), ("squat", 8, 1, 0)]);
        s.start(100.0).unwrap();
        assert_eq!(s.phase(), SessionPhase::Exercising);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.detector().unwrap().rule().id(), "push_up");
        assert!(matches!(s.start(101.0), Err(ProgramError::InvalidCommand { command: "start", .. })));
    }

    #[test]
    fn test_sets_and_rest_progression() {
        let mut s = session(&[("push_up", 10, 2, 5), ("squat", 8, 1, 0)]);
        s.start(0.0).unwrap();

        // Nine reps: still exercising
        assert!(do_push_ups(&mut s, 9, 0.0).is_empty());
        assert_eq!(s.detector().unwrap().rep_count(), 9);

        // Tenth rep completes the set
        let events = do_push_ups(&mut s, 1, 0.0);
        assert_eq!(
            events,
            vec![SequencerEvent::SetCompleted {
                exercise_id: "push_up".into(),
                remaining_sets: 1,
                rest_seconds: 5,
            }]
        );
        assert_eq!(s.phase(), SessionPhase::Resting);
        assert_eq!(s.rest_remaining(), 5.0);
        assert_eq!(s.current_index(), 0);

        // Frames during rest are not scored
        assert!(s.observe(&frame_with_angle(ELBOW, 80.0), 0.0).unwrap().is_none());

        assert_eq!(s.tick(2.0).event, None);
        assert!((s.rest_remaining() - 3.0).abs() < 1e-9);
        let out = s.tick(5.0);
        assert_eq!(
            out.event,
            Some(SequencerEvent::SetStarted { index: 0, exercise_id: "push_up".into(), set_number: 2 })
        );
        assert_eq!(s.phase(), SessionPhase::Exercising);
        assert_eq!(s.entries()[0].remaining_sets(), 1);
        assert_eq!(s.detector().unwrap().rep_count(), 0);
        assert_eq!(s.detector().unwrap().phase(), RepPhase::Resting);

        // Second set, then rest, then advance to the next entry
        do_push_ups(&mut s, 10, 5.0);
        assert_eq!(s.phase(), SessionPhase::Resting);
        assert_eq!(s.entries()[0].remaining_sets(), 0);
        assert_eq!(s.current_index(), 0);

        s.tick(8.0);
        assert_eq!(s.phase(), SessionPhase::Resting);
        let out = s.tick(10.0);
        assert_eq!(
            out.event,
            Some(SequencerEvent::SetStarted { index: 1, exercise_id: "squat".into(), set_number: 1 })
        );
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.detector().unwrap().rule().id(), "squat");
        assert_eq!(out.status.current_exercise_id.as_deref(), Some("squat"));
    }

    #[test]
    fn test_rest_counts_from_set_completion() {
        let mut s = session(&[("push_up", 1, 2, 30)]);
        s.start(0.0).unwrap();

        // No ticks while exercising; the set ends a minute in
        do_push_ups(&mut s, 1, 60.0);
        assert_eq!(s.phase(), SessionPhase::Resting);

        let out = s.tick(61.0);
        assert_eq!(out.event, None);
        assert_eq!(s.phase(), SessionPhase::Resting);
        assert!((s.rest_remaining() - 29.0).abs() < 1e-9);

        let out = s.tick(90.0);
        assert!(matches!(out.event, Some(SequencerEvent::SetStarted { set_number: 2, .. })));
    }

    #[test]
    fn test_last_rest_completes_workout() {
        let mut s = session(&[("push_up", 1, 1, 3)]);
        s.start(0.0).unwrap();
        do_push_ups(&mut s, 1, 0.0);
        assert_eq!(s.phase(), SessionPhase::Resting);

        let out = s.tick(3.0);
        assert_eq!(out.event, Some(SequencerEvent::WorkoutCompleted));
        assert_eq!(s.phase(), SessionPhase::Complete);
        assert!(s.detector().is_none());
        assert_eq!(out.status.current_exercise_id, None);

        // Complete programs can be restarted with their sets restored
        s.start(10.0).unwrap();
        assert_eq!(s.phase(), SessionPhase::Exercising);
        assert_eq!(s.entries()[0].remaining_sets(), 1);
    }

    #[test]
    fn test_zero_rep_target_completes_on_first_tick() {
        let mut s = session(&[("squat", 0, 1, 0), ("push_up", 5, 1, 0)]);
        s.start(0.0).unwrap();

        let out = s.tick(0.0);
        assert!(matches!(out.event, Some(SequencerEvent::SetCompleted { .. })));
        assert_eq!(s.phase(), SessionPhase::Resting);

        let out = s.tick(0.1);
        assert!(matches!(out.event, Some(SequencerEvent::SetStarted { index: 1, .. })));
    }

    #[test]
    fn test_zero_rest_still_passes_through_resting() {
        let mut s = session(&[("push_up", 1, 2, 0)]);
        s.start(0.0).unwrap();
        do_push_ups(&mut s, 1, 0.0);
        assert_eq!(s.phase(), SessionPhase::Resting);
        s.tick(0.0);
        assert_eq!(s.phase(), SessionPhase::Exercising);
    }

    #[test]
    fn test_timed_hold_uses_elapsed_time() {
        let mut s = session(&[("plank", 30, 1, 10)]);
        s.start(0.0).unwrap();

        // Holding in band never completes on reps
        let plank = s.detector().unwrap().rule().joints();
        let result = s.observe(&frame_with_angle(plank, 175.0), 0.0).unwrap().unwrap();
        assert_eq!(result.outcome.feedback.as_deref(), Some("Good form!"));
        assert_eq!(result.event, None);

        assert_eq!(s.tick(20.0).event, None);
        assert!((s.status().held_seconds - 20.0).abs() < 1e-9);
        assert!(matches!(s.tick(30.0).event, Some(SequencerEvent::SetCompleted { .. })));
        assert_eq!(s.status().rest_remaining_seconds, 10.0);
    }

    #[test]
    fn test_pause_freezes_rest_timer() {
        let mut s = session(&[("push_up", 1, 2, 10)]);
        s.start(0.0).unwrap();
        do_push_ups(&mut s, 1, 0.0);
        s.tick(4.0);
        assert!((s.rest_remaining() - 6.0).abs() < 1e-9);

        s.pause().unwrap();
        assert_eq!(s.phase(), SessionPhase::Paused);
        assert!((s.status().rest_remaining_seconds - 6.0).abs() < 1e-9);

        // A long pause is not counted
        assert_eq!(s.tick(500.0).event, None);
        s.start(500.0).unwrap();
        assert_eq!(s.phase(), SessionPhase::Resting);
        s.tick(505.0);
        assert!((s.rest_remaining() - 1.0).abs() < 1e-9);
        assert_eq!(s.entries()[0].remaining_sets(), 1);
    }

    #[test]
    fn test_pause_keeps_reps() {
        let mut s = session(&[("push_up", 5, 1, 0)]);
        s.start(0.0).unwrap();
        do_push_ups(&mut s, 3, 0.0);
        s.pause().unwrap();
        assert!(s.observe(&frame_with_angle(ELBOW, 80.0), 0.0).unwrap().is_none());
        s.start(1.0).unwrap();
        assert_eq!(s.detector().unwrap().rep_count(), 3);
        s.pause().unwrap();
        assert!(matches!(s.pause(), Err(ProgramError::InvalidCommand { command: "pause", .. })));
    }

    #[test]
    fn test_reset_restores_program() {
        let mut s = session(&[("push_up", 1, 2, 30), ("squat", 5, 1, 0)]);
        s.start(0.0).unwrap();
        do_push_ups(&mut s, 1, 0.0);
        s.tick(1.0);

        s.reset();
        let once = s.status();
        s.reset();
        assert_eq!(once, s.status());
        assert_eq!(s.phase(), SessionPhase::Idle);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.entries()[0].remaining_sets(), 2);
        assert_eq!(once.rest_remaining_seconds, 0.0);
        assert!(s.detector().is_none());
    }

    #[test]
    fn test_authoring_only_while_idle() {
        let catalog = catalog();
        let mut s = WorkoutSession::new();
        let idx = s.add_entry(&ProgramEntry::new("squat", 10, 3, 60), &catalog).unwrap();
        assert_eq!(idx, 0);
        assert!(matches!(
            s.add_entry(&ProgramEntry::new("moonwalk", 10, 3, 60), &catalog),
            Err(ProgramError::UnknownExercise(_))
        ));
        s.edit_entry(0, &ProgramEntry::new("push_up", 12, 2, 30), &catalog).unwrap();
        assert_eq!(s.entries()[0].exercise_id(), "push_up");
        assert!(matches!(s.remove_entry(3), Err(ProgramError::EntryOutOfRange { index: 3, len: 1 })));

        s.start(0.0).unwrap();
        assert!(matches!(
            s.add_entry(&ProgramEntry::new("squat", 10, 3, 60), &catalog),
            Err(ProgramError::ProgramLocked { phase: "exercising" })
        ));
        assert!(s.remove_entry(0).is_err());
        assert_eq!(s.entries().len(), 1);

        s.reset();
        assert_eq!(s.remove_entry(0).unwrap().exercise_id(), "push_up");
        assert!(s.entries().is_empty());
    }

    #[test]
    fn test_backwards_clock_does_not_add_time() {
        let mut s = session(&[("push_up", 1, 1, 5)]);
        s.start(10.0).unwrap();
        do_push_ups(&mut s, 1, 10.0);
        s.tick(8.0);
        assert_eq!(s.rest_remaining(), 5.0);
    }
}
