//! Pose module - keypoint frames, joint geometry, confidence gating
//!
//! Re-exports only. All logic in submodules.

mod keypoints;
mod angles;
mod confidence_gate;

pub use keypoints::{
    Frame, Keypoint, PoseSource,
    JOINT_COUNT, VALUES_PER_JOINT, SKELETON,
    NOSE, LEFT_EYE, RIGHT_EYE, LEFT_EAR, RIGHT_EAR,
    LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST, LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE, LEFT_ANKLE, RIGHT_ANKLE,
};
pub use angles::{angle_at, MIN_RAY_LENGTH};
pub use confidence_gate::{ConfidenceGate, DEFAULT_CONFIDENCE_FLOOR};
