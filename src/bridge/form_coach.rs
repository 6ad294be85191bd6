//! FormCoach - the browser-facing session class
//!
//! Wraps one [`Coach`] per JS instance. Frames arrive as the pose model's
//! flat output; results go back as plain JS objects.

use wasm_bindgen::prelude::*;

use crate::coach::{Coach, CoachConfig};
use crate::error::CoachError;
use crate::exercise::ExerciseCatalog;
use crate::pose::Frame;
use crate::workout::{DefaultClock, ProgramEntry, SessionClock};

impl From<CoachError> for JsValue {
    fn from(err: CoachError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

/// Rep counter and workout sequencer for one user
#[wasm_bindgen]
pub struct FormCoach {
    coach: Coach,
    clock: DefaultClock,
}

#[wasm_bindgen]
impl FormCoach {
    /// @param {string | undefined} config - JSON such as `{"confidence_floor": 0.4}`
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<FormCoach, JsValue> {
        let config = match config.as_deref() {
            Some(json) => serde_json::from_str::<CoachConfig>(json)
                .map_err(|e| js_sys::Error::new(&format!("invalid coach config: {}", e)))?,
            None => CoachConfig::default(),
        };
        Ok(FormCoach {
            coach: Coach::new(ExerciseCatalog::builtin(), config),
            clock: DefaultClock::new(),
        })
    }

    fn seconds(&self, now_ms: Option<f64>) -> f64 {
        now_ms.map_or_else(|| self.clock.now(), |ms| ms / 1000.0)
    }

    // ========================================================================
    // Exercises
    // ========================================================================

    /// Merge a JSON rule array over the built-in table
    #[wasm_bindgen(js_name = loadCatalog)]
    pub fn load_catalog(&mut self, json: &str) -> Result<usize, JsValue> {
        Ok(self.coach.load_catalog(json)?)
    }

    #[wasm_bindgen(js_name = exerciseIds)]
    pub fn exercise_ids(&self) -> Vec<String> {
        self.coach.catalog().ids().map(str::to_string).collect()
    }

    #[wasm_bindgen(js_name = selectExercise)]
    pub fn select_exercise(&mut self, id: &str) -> Result<(), JsValue> {
        Ok(self.coach.select_exercise(id)?)
    }

    // ========================================================================
    // Frames and time
    // ========================================================================

    /// Score one frame of 17 `[y, x, score]` triples
    ///
    /// @param {Float32Array} keypoints - 51 values from the pose model
    /// @param {number | undefined} now_ms - timestamp; defaults to `performance.now()`
    #[wasm_bindgen(js_name = processFrame)]
    pub fn process_frame(&mut self, keypoints: &[f32], now_ms: Option<f64>) -> Result<JsValue, JsValue> {
        let frame = Frame::from_flat(keypoints).map_err(CoachError::from)?;
        let now = self.seconds(now_ms);
        to_js(&self.coach.process_frame(&frame, now))
    }

    /// Advance rest and hold timers when no frame is available
    pub fn tick(&mut self, now_ms: Option<f64>) -> Result<JsValue, JsValue> {
        let now = self.seconds(now_ms);
        to_js(&self.coach.tick(now))
    }

    // ========================================================================
    // Program authoring
    // ========================================================================

    #[wasm_bindgen(js_name = addEntry)]
    pub fn add_entry(
        &mut self,
        exercise_id: &str,
        target_reps: u32,
        sets: u32,
        rest_seconds: u32,
    ) -> Result<usize, JsValue> {
        let entry = ProgramEntry::new(exercise_id, target_reps, sets, rest_seconds);
        Ok(self.coach.add_entry(&entry)?)
    }

    #[wasm_bindgen(js_name = editEntry)]
    pub fn edit_entry(
        &mut self,
        index: usize,
        exercise_id: &str,
        target_reps: u32,
        sets: u32,
        rest_seconds: u32,
    ) -> Result<(), JsValue> {
        let entry = ProgramEntry::new(exercise_id, target_reps, sets, rest_seconds);
        Ok(self.coach.edit_entry(index, &entry)?)
    }

    #[wasm_bindgen(js_name = removeEntry)]
    pub fn remove_entry(&mut self, index: usize) -> Result<(), JsValue> {
        Ok(self.coach.remove_entry(index)?)
    }

    pub fn entries(&self) -> Result<JsValue, JsValue> {
        to_js(&self.coach.entries())
    }

    #[wasm_bindgen(js_name = importProgram)]
    pub fn import_program(&mut self, json: &str) -> Result<usize, JsValue> {
        Ok(self.coach.import_program(json)?)
    }

    #[wasm_bindgen(js_name = exportProgram)]
    pub fn export_program(&self) -> Result<String, JsValue> {
        Ok(self.coach.export_program()?)
    }

    // ========================================================================
    // Workout commands
    // ========================================================================

    /// Start the program, or resume it when paused
    #[wasm_bindgen(js_name = startWorkout)]
    pub fn start_workout(&mut self, now_ms: Option<f64>) -> Result<(), JsValue> {
        let now = self.seconds(now_ms);
        Ok(self.coach.start_workout(now)?)
    }

    #[wasm_bindgen(js_name = pauseWorkout)]
    pub fn pause_workout(&mut self) -> Result<(), JsValue> {
        Ok(self.coach.pause_workout()?)
    }

    #[wasm_bindgen(js_name = resetWorkout)]
    pub fn reset_workout(&mut self) {
        self.coach.reset_workout();
    }

    /// Current program status, or `undefined` while idle
    pub fn status(&self) -> Result<JsValue, JsValue> {
        match self.coach.workout_status() {
            Some(status) => to_js(&status),
            None => Ok(JsValue::UNDEFINED),
        }
    }
}
