//! Mount heuristics.
//!
//! Steps, in order:
//! 1. Riding already: dismount and stop. The exit velocity is only applied when dropping off
//!    is allowed.
//! 2. Nearest line to the eyes, strictly inside `max_activation_distance`.
//! 3. Line of sight (free-aim) or marker hit (press-to-use).
//! 4. Player roughly facing the line.
//! 5. Travel direction from the look direction, falling back to the farther end.
//! 6. Edge clamp near either anchor.
//! 7. Rider created in `Approaching`, pawn nudged up, sound played.
//!
//! Rejections are silent for the player; callers only log them.

use super::{
    line_of_sight::{has_clear_line, hits_marker},
    rider::{RidePhase, RiderState, TravelDirection},
    tick::DismountReason,
    ActivationMode, ZiplineManager, ZiplineSettings,
};
use crate::host::{play_sound_at, Color, Host, PlayerPawn, Teleport};
use shared::{
    constants::DEBUG_SPHERE_RADIUS, math::horizontal, normalize_or_zero, NearestPoint, Vec3,
    ZiplineGeometry, ZiplineId,
};
use std::fmt;

/// Successful outcome of [`ZiplineManager::activate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Activation {
    Mounted {
        zipline: ZiplineId,
        start_t: f32,
        direction: TravelDirection,
    },
    /// The player was riding and got taken off the line.
    Dropped,
}

/// Why a mount attempt did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The host could not report the pawn's position or view.
    PawnUnavailable,
    /// No line within the activation distance.
    OutOfRange,
    /// Something blocks the way to the line (or no marker was hit in press-to-use mode).
    Obstructed,
    /// The player is not looking at the line.
    NotFacing,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Rejection::PawnUnavailable => "pawn state unavailable",
            Rejection::OutOfRange => "no zipline in range",
            Rejection::Obstructed => "line of sight obstructed",
            Rejection::NotFacing => "not facing the zipline",
        };
        f.write_str(msg)
    }
}

/// Starting parameter and travel direction for a mount at `nearest_t`.
pub fn plan_mount(
    settings: &ZiplineSettings,
    geometry: &ZiplineGeometry,
    nearest_t: f32,
    forward: &Vec3,
) -> (f32, TravelDirection) {
    let axis = geometry.axis();

    // Vertical lines compare full 3D directions, everything else only the ground plane.
    let dot_start_to_end = if geometry.is_vertical() {
        forward.dot(&axis)
    } else {
        let look = normalize_or_zero(horizontal(forward));
        look.dot(&normalize_or_zero(horizontal(&axis)))
    };
    let dot_end_to_start = -dot_start_to_end;

    let mut direction = if dot_start_to_end > settings.facing_alignment_threshold {
        TravelDirection::Forward
    } else if dot_end_to_start > settings.facing_alignment_threshold {
        TravelDirection::Reverse
    } else if nearest_t > 0.5 {
        TravelDirection::Reverse
    } else {
        TravelDirection::Forward
    };

    let proximity = settings.proximity_override_threshold_percentage;
    let mut start_t = nearest_t;
    if nearest_t < proximity {
        direction = TravelDirection::Forward;
        start_t = settings.min_start_end_percentage;
    } else if nearest_t > 1.0 - proximity {
        direction = TravelDirection::Reverse;
        start_t = 1.0 - settings.min_start_end_percentage;
    }

    (start_t, direction)
}

impl ZiplineManager {
    /// Nearest line to `eye` strictly inside the activation distance (first line wins ties).
    fn nearest_line(&self, eye: &Vec3) -> Option<(usize, NearestPoint)> {
        let max = self.settings.max_activation_distance;
        let mut best: Option<(usize, NearestPoint)> = None;

        for (index, line) in self.lines.iter().enumerate() {
            let nearest = line.geometry.nearest_point_and_parameter(eye);
            let closer = best.map_or(true, |(_, b)| nearest.distance < b.distance);
            if nearest.distance < max && closer {
                best = Some((index, nearest));
            }
        }

        best
    }

    /// Attempts to mount `pawn` on the nearest eligible line, or takes it off if already riding.
    pub fn activate(
        &mut self,
        host: &mut dyn Host,
        pawn: PlayerPawn,
    ) -> Result<Activation, Rejection> {
        if self.riders.contains_key(&pawn.slot) {
            let apply_velocity = self.settings.can_drop_from_zipline;
            self.dismount(host, pawn.slot, DismountReason::Dropped, apply_velocity);
            return Ok(Activation::Dropped);
        }

        let (Some(feet), Some(eye), Some(angles)) = (
            host.abs_origin(pawn.entity),
            host.eye_position(pawn.entity),
            host.eye_angles(pawn.entity),
        ) else {
            return Err(Rejection::PawnUnavailable);
        };
        let forward = angles.forward();
        let ttl = self.settings.think_interval * 2.0;

        if self.settings.debug {
            host.debug_sphere(feet, DEBUG_SPHERE_RADIUS, ttl, Color::RED);
        }

        let (index, nearest) = self.nearest_line(&eye).ok_or(Rejection::OutOfRange)?;
        let line = &self.lines[index];

        let reachable = match self.settings.activation_mode {
            ActivationMode::FreeAim => has_clear_line(host, &pawn, &eye, &nearest.point),
            ActivationMode::PressToUse => {
                hits_marker(host, &pawn, &eye, &nearest.point, &line.markers)
            }
        };
        if !reachable {
            return Err(Rejection::Obstructed);
        }

        let to_line = normalize_or_zero(nearest.point - eye);
        if forward.dot(&to_line) < self.settings.min_facing_dot_product {
            return Err(Rejection::NotFacing);
        }

        let geometry = &line.geometry;
        let (start_t, direction) = plan_mount(&self.settings, geometry, nearest.t, &forward);
        let height_offset = self.settings.height_offset(geometry.is_vertical());
        let point_on_line = geometry.point_at(start_t);
        let snap_target = point_on_line - Vec3::new(0.0, 0.0, height_offset);
        let zipline = geometry.id;

        if self.settings.debug {
            host.debug_sphere(point_on_line, DEBUG_SPHERE_RADIUS, ttl, Color::GREEN);
            host.debug_sphere(snap_target, DEBUG_SPHERE_RADIUS, ttl, Color::ORANGE);
        }

        self.riders.insert(
            pawn.slot,
            RiderState {
                zipline: index,
                pawn,
                t: start_t,
                direction,
                phase: RidePhase::Approaching,
                snap_target,
                height_offset,
                mounted_at: host.game_time(),
            },
        );

        let push_up = Vec3::new(0.0, 0.0, self.settings.initial_player_push_up);
        host.teleport(pawn.entity, Teleport::position(feet + push_up));

        log::info!("Player {} activated zipline {}.", pawn.slot.0, zipline);
        play_sound_at(host, &self.settings.activate_sound, &feet);

        Ok(Activation::Mounted {
            zipline,
            start_t,
            direction,
        })
    }
}
