//! Zipline curve model.
//!
//! A zipline is a quadratic Bézier between two anchors:
//! - `P0` = start anchor
//! - `P1` = midpoint of the anchors, dropped by `sag_amount`
//! - `P2` = end anchor
//!
//! Anchor positions are read once when the geometry is built and never refreshed.
//! Moving an anchor requires a new discovery pass.

use crate::{
    constants::{DEFAULT_SAG_CURVE, NEAREST_POINT_SAMPLES, SAG_MULTIPLIER, VERTICAL_THRESHOLD_Z},
    math::Vec3,
};

/// Identifier shared by a `{id}_zipline_s` / `{id}_zipline_e` anchor pair.
pub type ZiplineId = u32;

/// Result of [`ZiplineGeometry::nearest_point_and_parameter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestPoint {
    pub point: Vec3,
    pub t: f32,
    pub distance: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ZiplineGeometry {
    pub id: ZiplineId,
    start: Vec3,
    end: Vec3,
    length: f32,
    sag_amount: f32,
    is_vertical: bool,
}

impl ZiplineGeometry {
    /// Builds a line with the default sag curve.
    pub fn new(id: ZiplineId, start: Vec3, end: Vec3) -> Self {
        Self::with_sag_curve(id, start, end, DEFAULT_SAG_CURVE)
    }

    pub fn with_sag_curve(id: ZiplineId, start: Vec3, end: Vec3, sag_curve: f32) -> Self {
        let movedir = end - start;
        let length = movedir.norm();
        let normalized_z = if length > 0.0 {
            movedir.z.abs() / length
        } else {
            0.0
        };

        Self {
            id,
            start,
            end,
            length,
            sag_amount: sag_curve * SAG_MULTIPLIER,
            is_vertical: normalized_z > VERTICAL_THRESHOLD_Z,
        }
    }

    #[inline]
    pub fn start(&self) -> Vec3 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vec3 {
        self.end
    }

    /// Straight-line distance between the anchors.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn sag_amount(&self) -> f32 {
        self.sag_amount
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.is_vertical
    }

    /// Start-to-end direction (zero for coincident anchors).
    #[inline]
    pub fn axis(&self) -> Vec3 {
        crate::math::normalize_or_zero(self.end - self.start)
    }

    /// Sagged middle control point.
    #[inline]
    pub fn control_point(&self) -> Vec3 {
        let mut mid = (self.start + self.end) * 0.5;
        mid.z -= self.sag_amount;
        mid
    }

    /// Evaluates the curve at `t`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate the parabola.
    pub fn point_at(&self, t: f32) -> Vec3 {
        let p0 = self.start;
        let p1 = self.control_point();
        let p2 = self.end;

        let omt = 1.0 - t;
        let a = omt * omt;
        let b = 2.0 * omt * t;
        let c = t * t;

        Vec3::new(
            a * p0.x + b * p1.x + c * p2.x,
            a * p0.y + b * p1.y + c * p2.y,
            a * p0.z + b * p1.z + c * p2.z,
        )
    }

    /// Coarse closest point on the curve to `position`.
    ///
    /// Samples `NEAREST_POINT_SAMPLES + 1` uniform parameters over `[0, 1]`; the first
    /// sample with the smallest distance wins. Accuracy is about `length / NEAREST_POINT_SAMPLES`.
    pub fn nearest_point_and_parameter(&self, position: &Vec3) -> NearestPoint {
        let samples = NEAREST_POINT_SAMPLES as f32;

        let mut best = NearestPoint {
            point: self.start,
            t: 0.0,
            distance: f32::INFINITY,
        };
        let mut best_sq = f32::INFINITY;

        for i in 0..=NEAREST_POINT_SAMPLES {
            let t = i as f32 / samples;
            let point = self.point_at(t);
            let dist_sq = (position - point).norm_squared();
            if dist_sq < best_sq {
                best_sq = dist_sq;
                best = NearestPoint {
                    point,
                    t,
                    distance: 0.0,
                };
            }
        }

        best.distance = best_sq.sqrt();
        best
    }

    /// Evenly spaced points along the curve, both anchors included.
    pub fn sample_points(&self, segments: u32) -> impl Iterator<Item = Vec3> + '_ {
        let segments = segments.max(1);
        let n = segments as f32;
        (0..=segments).map(move |k| self.point_at(k as f32 / n))
    }
}
