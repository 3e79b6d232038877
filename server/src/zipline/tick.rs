//! Per-think motion update.
//!
//! Notes:
//! - Motion is velocity-based: each think steers the pawn toward where it should be, so small
//!   per-tick position error is expected and corrects itself.
//! - `t` advances by the fixed think interval, not the real elapsed time.
//! - Riders are never removed while the map is being iterated; removals are collected and
//!   applied once the pass is over.

use super::{rider::RidePhase, ZiplineManager, ZiplineSettings};
use crate::host::{play_sound_at, Color, Host, PlayerPawn, PlayerSlot, Teleport};
use shared::{
    constants::DEBUG_SPHERE_RADIUS, direction_and_distance, math::horizontal_length, Vec3,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismountReason {
    /// Travel end reached.
    ReachedEnd,
    /// Crouch pressed while riding.
    Crouched,
    /// Activated again while riding.
    Dropped,
    /// Mounted for longer than `max_ride_time`.
    TimedOut,
    /// Pawn no longer valid (disconnect) or its line is gone. Removed without side effects.
    Invalidated,
}

/// Exit velocity for a rider leaving a line.
///
/// - Regular lines: flat forward boost plus a fixed upward kick.
/// - Vertical lines (with `vertical_look_dismount`): launched along the look direction, with the
///   horizontal part capped so climbing does not turn into a horizontal catapult.
pub fn dismount_velocity(settings: &ZiplineSettings, is_vertical: bool, forward: &Vec3) -> Vec3 {
    if is_vertical && settings.vertical_look_dismount {
        let mut velocity = forward * settings.dismount_upward_velocity;
        let max_horizontal =
            settings.riding_speed * settings.vertical_dismount_max_horizontal_fraction;
        let horizontal_speed = horizontal_length(&velocity);
        if horizontal_speed > max_horizontal {
            let scale = max_horizontal / horizontal_speed;
            velocity.x *= scale;
            velocity.y *= scale;
        }
        return velocity;
    }

    let boost = settings.dismount_forward_velocity_multiplier * (settings.riding_speed / 8.0);
    Vec3::new(
        forward.x * boost,
        forward.y * boost,
        settings.dismount_upward_velocity,
    )
}

fn is_crouching(host: &dyn Host, pawn: &PlayerPawn, origin: &Vec3, eye_height: f32) -> bool {
    match host.eye_position(pawn.entity) {
        Some(eye) => eye.z - origin.z < eye_height,
        None => false,
    }
}

impl ZiplineManager {
    /// One think: steer every rider, dismount the finished ones, and re-arm.
    pub fn tick(&mut self, host: &mut dyn Host) {
        let now = host.game_time();
        let dt = self.settings.think_interval;
        let settings = &self.settings;

        let mut finished: Vec<(PlayerSlot, DismountReason)> = Vec::new();

        for (&slot, rider) in self.riders.iter_mut() {
            let entity = rider.pawn.entity;
            let origin = host.abs_origin(entity).filter(|_| host.is_valid(entity));
            let (Some(origin), Some(line)) = (origin, self.lines.get(rider.zipline)) else {
                finished.push((slot, DismountReason::Invalidated));
                continue;
            };

            let ride_time = now - rider.mounted_at;
            if settings.max_ride_time.is_some_and(|max| ride_time > max) {
                finished.push((slot, DismountReason::TimedOut));
                continue;
            }

            match rider.phase {
                RidePhase::Approaching => {
                    let (direction, distance) = direction_and_distance(&origin, &rider.snap_target);
                    if distance < settings.approach_threshold {
                        rider.phase = RidePhase::Riding;
                        continue;
                    }
                    // Slower the closer we get, so the approach does not overshoot.
                    let falloff = distance * settings.approach_falloff;
                    let velocity = direction * settings.approach_speed * falloff;
                    host.teleport(entity, Teleport::velocity(velocity));
                }
                RidePhase::Riding => {
                    let geometry = &line.geometry;
                    if rider.advance(settings.riding_speed, geometry.length(), dt) {
                        finished.push((slot, DismountReason::ReachedEnd));
                        continue;
                    }
                    if is_crouching(host, &rider.pawn, &origin, settings.crouch_eye_height) {
                        finished.push((slot, DismountReason::Crouched));
                        continue;
                    }

                    let point_on_line = geometry.point_at(rider.t);
                    let target = point_on_line - Vec3::new(0.0, 0.0, rider.height_offset);
                    let (direction, distance) = direction_and_distance(&origin, &target);
                    if distance > 0.0 {
                        let velocity = direction * settings.riding_speed;
                        host.teleport(entity, Teleport::velocity(velocity));
                    }

                    if settings.debug {
                        host.debug_sphere(point_on_line, DEBUG_SPHERE_RADIUS, dt, Color::GREEN);
                        host.debug_sphere(target, DEBUG_SPHERE_RADIUS, dt, Color::RED);
                    }
                }
            }
        }

        for (slot, reason) in finished {
            self.dismount(host, slot, reason, true);
        }

        host.set_next_think(now + dt);
    }

    /// Removes a rider. Returns false (and does nothing else) if `slot` was not riding.
    ///
    /// Every reason except [`DismountReason::Invalidated`] plays the dismount sound at the
    /// player's feet. The exit velocity is only applied when `apply_velocity` is set.
    pub fn dismount(
        &mut self,
        host: &mut dyn Host,
        slot: PlayerSlot,
        reason: DismountReason,
        apply_velocity: bool,
    ) -> bool {
        let Some(rider) = self.riders.remove(&slot) else {
            return false;
        };

        let zipline = self.lines.get(rider.zipline).map(|line| &line.geometry);
        let zipline_id = zipline.map_or(0, |geometry| geometry.id);

        if reason == DismountReason::Invalidated {
            log::info!("Player {} removed from zipline {}.", slot.0, zipline_id);
            return true;
        }

        log::info!(
            "Player {} dismounting from zipline {} ({:?}).",
            slot.0,
            zipline_id,
            reason
        );

        let entity = rider.pawn.entity;
        if let Some(feet) = host.abs_origin(entity) {
            play_sound_at(host, &self.settings.dismount_sound, &feet);
        }

        if !apply_velocity {
            return true;
        }
        if let Some(angles) = host.eye_angles(entity) {
            let is_vertical = zipline.is_some_and(|geometry| geometry.is_vertical());
            let velocity = dismount_velocity(&self.settings, is_vertical, &angles.forward());
            host.teleport(entity, Teleport::velocity(velocity));
        }

        true
    }
}
