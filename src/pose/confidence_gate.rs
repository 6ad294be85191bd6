//! Confidence Gate - first check on every frame
//!
//! When any required joint's confidence is below the floor, the frame is
//! rejected and downstream state must not change.

use super::keypoints::{Frame, Keypoint};

/// Default minimum confidence to trust a joint
pub const DEFAULT_CONFIDENCE_FLOOR: f32 = 0.3;

/// Confidence gate for a joint triplet
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceGate {
    /// Minimum confidence to accept raw data
    threshold: f32,
}

impl ConfidenceGate {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Set confidence threshold
    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Apply confidence gating to three joints of a frame
    ///
    /// Returns the joints when all are at or above the threshold, `None`
    /// when any is below it or missing from the frame.
    pub fn apply<'a>(
        &self,
        frame: &'a Frame,
        joints: (usize, usize, usize),
    ) -> Option<(&'a Keypoint, &'a Keypoint, &'a Keypoint)> {
        let a = frame.keypoint(joints.0)?;
        let b = frame.keypoint(joints.1)?;
        let c = frame.keypoint(joints.2)?;

        if [a, b, c].iter().all(|kp| kp.confidence >= self.threshold) {
            Some((a, b, c))
        } else {
            None
        }
    }
}

impl Default for ConfidenceGate {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIDENCE_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::keypoints::JOINT_COUNT;

    fn frame_with_confidence(conf: [f32; 3]) -> Frame {
        let mut kps = [Keypoint::new(0.5, 0.5, 1.0); JOINT_COUNT];
        kps[11].confidence = conf[0];
        kps[13].confidence = conf[1];
        kps[15].confidence = conf[2];
        Frame::new(kps)
    }

    #[test]
    fn test_passes_at_floor() {
        let gate = ConfidenceGate::default();
        let frame = frame_with_confidence([0.3, 0.9, 0.5]);
        assert!(gate.apply(&frame, (11, 13, 15)).is_some());
    }

    #[test]
    fn test_rejects_single_weak_joint() {
        let gate = ConfidenceGate::default();
        let frame = frame_with_confidence([0.9, 0.29, 0.9]);
        assert!(gate.apply(&frame, (11, 13, 15)).is_none());
    }

    #[test]
    fn test_custom_threshold() {
        let mut gate = ConfidenceGate::default();
        gate.set_threshold(0.8);
        let frame = frame_with_confidence([0.9, 0.7, 0.9]);
        assert!(gate.apply(&frame, (11, 13, 15)).is_none());
        assert_eq!(gate.threshold(), 0.8);
    }
}
