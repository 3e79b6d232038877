/*!
Vector and Euler-angle helpers shared by every script.

The host's world is Z-up: `x`/`y` span the ground plane and `z` points up.
Angles follow the host's `QAngle` convention in degrees (pitch down is positive).
*/

use nalgebra as na;

/// Common math alias for world-space positions, directions and velocities.
pub type Vec3 = na::Vector3<f32>;

/// Euler angles in degrees, as reported by the host for eye orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct QAngle {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl QAngle {
    #[inline]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Unit forward vector for these angles. Roll does not affect the result.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        let pitch = self.pitch.to_radians();
        let yaw = self.yaw.to_radians();

        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let (sin_pitch, cos_pitch) = pitch.sin_cos();

        Vec3::new(cos_yaw * cos_pitch, sin_yaw * cos_pitch, -sin_pitch)
    }
}

/// Normalizes `v`, returning the zero vector for degenerate input instead of NaN.
#[inline]
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    v.try_normalize(0.0).unwrap_or_else(Vec3::zeros)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Vec3, b: &Vec3) -> f32 {
    (b - a).norm()
}

/// Drops the vertical component.
#[inline]
pub fn horizontal(v: &Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}

/// Length of the horizontal component.
#[inline]
pub fn horizontal_length(v: &Vec3) -> f32 {
    v.x.hypot(v.y)
}

/// Unit direction from `from` to `to` together with the distance between them.
///
/// Coincident points yield a zero direction.
#[inline]
pub fn direction_and_distance(from: &Vec3, to: &Vec3) -> (Vec3, f32) {
    let delta = to - from;
    let dist = delta.norm();
    if dist > 0.0 {
        (delta / dist, dist)
    } else {
        (Vec3::zeros(), 0.0)
    }
}
