//! Synthetic frames for unit tests

use crate::pose::{Frame, Keypoint, JOINT_COUNT};

const VERTEX: (f32, f32) = (0.5, 0.5);
const RAY: f32 = 0.2;

/// A frame whose `joints` triplet forms `degrees` at the vertex joint
///
/// All joints are fully confident; the unused ones sit at the origin.
pub(crate) fn frame_with_angle(joints: (usize, usize, usize), degrees: f32) -> Frame {
    let mut kps = [Keypoint::new(0.0, 0.0, 1.0); JOINT_COUNT];
    let theta = degrees.to_radians();

    kps[joints.1] = Keypoint::new(VERTEX.1, VERTEX.0, 1.0);
    kps[joints.0] = Keypoint::new(VERTEX.1, VERTEX.0 + RAY, 1.0);
    kps[joints.2] = Keypoint::new(
        VERTEX.1 + RAY * theta.sin(),
        VERTEX.0 + RAY * theta.cos(),
        1.0,
    );
    Frame::new(kps)
}

/// A well-formed frame whose vertex joint sits just below the default floor
pub(crate) fn low_confidence_frame(joints: (usize, usize, usize)) -> Frame {
    let mut kps = *frame_with_angle(joints, 120.0).keypoints();
    kps[joints.1].confidence = 0.2;
    Frame::new(kps)
}
