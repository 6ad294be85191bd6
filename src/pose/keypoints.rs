//! Keypoint frame layout and decoding
//!
//! A frame is the pose model's output for one camera tick: 17 body joints,
//! each with a normalized position and a detection confidence.

use serde::{Deserialize, Serialize};

use crate::error::FrameError;

// ============================================================================
// JOINT INDICES (17-keypoint body layout)
// ============================================================================

pub const NOSE: usize = 0;
pub const LEFT_EYE: usize = 1;
pub const RIGHT_EYE: usize = 2;
pub const LEFT_EAR: usize = 3;
pub const RIGHT_EAR: usize = 4;
pub const LEFT_SHOULDER: usize = 5;
pub const RIGHT_SHOULDER: usize = 6;
pub const LEFT_ELBOW: usize = 7;
pub const RIGHT_ELBOW: usize = 8;
pub const LEFT_WRIST: usize = 9;
pub const RIGHT_WRIST: usize = 10;
pub const LEFT_HIP: usize = 11;
pub const RIGHT_HIP: usize = 12;
pub const LEFT_KNEE: usize = 13;
pub const RIGHT_KNEE: usize = 14;
pub const LEFT_ANKLE: usize = 15;
pub const RIGHT_ANKLE: usize = 16;

/// Number of joints in every frame
pub const JOINT_COUNT: usize = 17;

/// Values per joint in the flat model output: y, x, confidence
pub const VALUES_PER_JOINT: usize = 3;

/// Skeleton connections (pairs of joint indices) for overlay drawing
pub const SKELETON: [(usize, usize); 11] = [
    (LEFT_SHOULDER, LEFT_ELBOW),
    (LEFT_ELBOW, LEFT_WRIST),
    (RIGHT_SHOULDER, RIGHT_ELBOW),
    (RIGHT_ELBOW, RIGHT_WRIST),
    (LEFT_SHOULDER, RIGHT_SHOULDER),
    (LEFT_SHOULDER, LEFT_HIP),
    (RIGHT_SHOULDER, RIGHT_HIP),
    (LEFT_HIP, LEFT_KNEE),
    (LEFT_KNEE, LEFT_ANKLE),
    (RIGHT_HIP, RIGHT_KNEE),
    (RIGHT_KNEE, RIGHT_ANKLE),
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single tracked body joint
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub y: f32,          // 0-1 normalized to frame height
    pub x: f32,          // 0-1 normalized to frame width
    pub confidence: f32, // 0-1 detection score
}

impl Keypoint {
    pub const fn new(y: f32, x: f32, confidence: f32) -> Self {
        Self { y, x, confidence }
    }

    /// Position as an (x, y) pair
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// One pose-source tick: exactly 17 keypoints in the standard layout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    keypoints: [Keypoint; JOINT_COUNT],
}

impl Frame {
    pub fn new(keypoints: [Keypoint; JOINT_COUNT]) -> Self {
        Self { keypoints }
    }

    /// Decode the pose model's flat output: 51 values, `[y, x, score]` per joint
    pub fn from_flat(data: &[f32]) -> Result<Self, FrameError> {
        let expected = JOINT_COUNT * VALUES_PER_JOINT;
        if data.len() != expected {
            return Err(FrameError::WrongLength {
                expected,
                actual: data.len(),
            });
        }

        let mut keypoints = [Keypoint::default(); JOINT_COUNT];
        for (kp, chunk) in keypoints.iter_mut().zip(data.chunks_exact(VALUES_PER_JOINT)) {
            *kp = Keypoint::new(chunk[0], chunk[1], chunk[2]);
        }
        Ok(Self { keypoints })
    }

    /// Get a specific joint; `index` must be below [`JOINT_COUNT`]
    pub fn keypoint(&self, index: usize) -> Option<&Keypoint> {
        self.keypoints.get(index)
    }

    pub fn keypoints(&self) -> &[Keypoint; JOINT_COUNT] {
        &self.keypoints
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            keypoints: [Keypoint::default(); JOINT_COUNT],
        }
    }
}

/// Producer of keypoint frames (camera + pose model live outside this crate)
pub trait PoseSource {
    /// Next frame, or `None` when the source has nothing new
    fn next_keypoints(&mut self) -> Option<Frame>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_orders_y_x_score() {
        let mut data = vec![0.0; 51];
        data[LEFT_KNEE * 3] = 0.7;
        data[LEFT_KNEE * 3 + 1] = 0.4;
        data[LEFT_KNEE * 3 + 2] = 0.9;

        let frame = Frame::from_flat(&data).unwrap();
        let knee = frame.keypoint(LEFT_KNEE).unwrap();
        assert_eq!(knee.y, 0.7);
        assert_eq!(knee.x, 0.4);
        assert_eq!(knee.confidence, 0.9);
        assert_eq!(knee.position(), (0.4, 0.7));
    }

    #[test]
    fn test_from_flat_rejects_wrong_length() {
        let err = Frame::from_flat(&[0.0; 99]).unwrap_err();
        assert_eq!(err, FrameError::WrongLength { expected: 51, actual: 99 });
    }

    #[test]
    fn test_keypoint_out_of_layout() {
        assert!(Frame::default().keypoint(JOINT_COUNT).is_none());
    }
}
