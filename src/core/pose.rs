use nalgebra::{UnitQuaternion, Vector3};

/// Position tolerance used for pose equality, in world units.
pub const POSITION_EPSILON: f64 = 1e-4;

/// Rotation tolerance used for pose equality, in radians.
pub const ROTATION_EPSILON: f64 = 1e-4;

/// A position plus an orientation, treated as a single interpolatable value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vector3<f64>,
    pub rotation: UnitQuaternion<f64>,
}

impl Pose {
    /// Creates a new pose from a position and an orientation
    pub fn new(position: Vector3<f64>, rotation: UnitQuaternion<f64>) -> Self {
        Self { position, rotation }
    }

    /// Creates a pose at the given position with identity orientation
    pub fn from_position(position: Vector3<f64>) -> Self {
        Self::new(position, UnitQuaternion::identity())
    }

    /// The identity pose: origin position, identity orientation
    pub fn identity() -> Self {
        Self::new(Vector3::zeros(), UnitQuaternion::identity())
    }

    /// Interpolate between two poses by factor `t` (0.0 to 1.0).
    ///
    /// The position interpolates linearly; the orientation interpolates along
    /// the shortest spherical arc.
    pub fn lerp(&self, other: &Pose, t: f64) -> Pose {
        let position = self.position.lerp(&other.position, t);

        // Flip the end quaternion when the dot product is negative so the
        // slerp stays on the short arc.
        let mut end = other.rotation;
        if self.rotation.coords.dot(&end.coords) < 0.0 {
            end = UnitQuaternion::new_unchecked(-end.into_inner());
        }

        // try_slerp fails only for near-antipodal orientations, where every
        // arc is equally short; snap to whichever endpoint is closer.
        let rotation = self
            .rotation
            .try_slerp(&end, t, 1.0e-9)
            .unwrap_or(if t < 0.5 { self.rotation } else { end });

        Pose { position, rotation }
    }

    /// Whether two poses match within [`POSITION_EPSILON`] and
    /// [`ROTATION_EPSILON`]. Used to detect no-op retargets.
    pub fn approx_eq(&self, other: &Pose) -> bool {
        (self.position - other.position).norm() <= POSITION_EPSILON
            && self.rotation.angle_to(&other.rotation) <= ROTATION_EPSILON
    }

    /// Whether every component of the pose is a finite number.
    ///
    /// Non-finite poses must be rejected before entering the blend chain: the
    /// running decay multiplier would propagate a NaN into every future output.
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|c| c.is_finite())
            && self.rotation.coords.iter().all(|c| c.is_finite())
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_position_lerp() {
        let a = Pose::from_position(Vector3::new(0.0, 0.0, 0.0));
        let b = Pose::from_position(Vector3::new(10.0, -4.0, 2.0));
        let mid = a.lerp(&b, 0.5);
        assert!((mid.position - Vector3::new(5.0, -2.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_rotation_slerp_shortest_path() {
        let a = Pose::new(
            Vector3::zeros(),
            UnitQuaternion::from_euler_angles(0.0, 0.0, 0.0),
        );
        let b = Pose::new(
            Vector3::zeros(),
            UnitQuaternion::from_euler_angles(0.0, 0.0, PI / 2.0),
        );
        let mid = a.lerp(&b, 0.5);
        let (_, _, yaw) = mid.rotation.euler_angles();
        assert!((yaw - PI / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_rotation_does_not_panic() {
        let a = Pose::new(Vector3::zeros(), UnitQuaternion::identity());
        let b = Pose::new(
            Vector3::zeros(),
            UnitQuaternion::from_euler_angles(0.0, 0.0, PI),
        );
        let mid = a.lerp(&b, 0.5);
        assert!(mid.is_finite());
    }

    #[test]
    fn test_approx_eq() {
        let a = Pose::from_position(Vector3::new(1.0, 2.0, 3.0));
        let b = Pose::from_position(Vector3::new(1.0 + 1e-6, 2.0, 3.0));
        let c = Pose::from_position(Vector3::new(1.1, 2.0, 3.0));
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&c));
    }

    #[test]
    fn test_is_finite() {
        assert!(Pose::identity().is_finite());
        let bad = Pose::from_position(Vector3::new(f64::NAN, 0.0, 0.0));
        assert!(!bad.is_finite());
    }
}
