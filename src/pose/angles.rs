//! Joint angle calculation using dot product
//!
//! Calculates the interior angle at a vertex joint from the rays
//! vertex→a and vertex→c, in the 2-D image plane.

use nalgebra::Vector2;

use super::keypoints::Keypoint;
use crate::error::GeometryError;

/// Rays shorter than this (in normalized units) are treated as zero-length
pub const MIN_RAY_LENGTH: f32 = 1e-6;

/// Calculate the angle at `b` in degrees, range [0°, 180°]
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Confidence is ignored; callers gate on it first.
pub fn angle_at(a: &Keypoint, b: &Keypoint, c: &Keypoint) -> Result<f32, GeometryError> {
    let vertex = Vector2::new(b.x, b.y);

    // Vector from vertex to first joint
    let v1 = Vector2::new(a.x, a.y) - vertex;

    // Vector from vertex to third joint
    let v2 = Vector2::new(c.x, c.y) - vertex;

    let mag1 = v1.norm();
    let mag2 = v2.norm();
    if mag1 < MIN_RAY_LENGTH || mag2 < MIN_RAY_LENGTH {
        return Err(GeometryError::Degenerate { x: b.x, y: b.y });
    }

    let cos_angle = (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    Ok(cos_angle.acos().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kp(x: f32, y: f32) -> Keypoint {
        Keypoint::new(y, x, 1.0)
    }

    #[test]
    fn test_collinear_is_straight() {
        let angle = angle_at(&kp(0.0, 0.0), &kp(0.5, 0.0), &kp(1.0, 0.0)).unwrap();
        assert!((angle - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_right_angle() {
        let angle = angle_at(&kp(0.0, 0.0), &kp(0.5, 0.0), &kp(0.5, 0.5)).unwrap();
        assert!((angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_folded_back_is_zero() {
        let angle = angle_at(&kp(0.2, 0.2), &kp(0.5, 0.5), &kp(0.1, 0.1)).unwrap();
        assert!(angle.abs() < 0.1);
    }

    #[test]
    fn test_confidence_is_ignored() {
        let a = Keypoint::new(0.0, 0.0, 0.0);
        let b = Keypoint::new(0.0, 0.5, 0.0);
        let c = Keypoint::new(0.5, 0.5, 0.0);
        assert!((angle_at(&a, &b, &c).unwrap() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_coincident_joints_are_degenerate() {
        let err = angle_at(&kp(0.3, 0.4), &kp(0.3, 0.4), &kp(0.9, 0.9)).unwrap_err();
        assert_eq!(err, GeometryError::Degenerate { x: 0.3, y: 0.4 });
        assert!(angle_at(&kp(0.0, 0.0), &kp(0.3, 0.4), &kp(0.3, 0.4)).is_err());
    }
}
