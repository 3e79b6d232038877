use crate::{
    constants::{
        JUMP_PAD_CENTER_RADIUS, JUMP_PAD_HIGH_VELOCITY_THRESHOLD, JUMP_PAD_HORIZONTAL_MULTIPLIER,
        JUMP_PAD_LOW_VELOCITY_THRESHOLD, JUMP_PAD_MIN_PUSH_OFFSET, JUMP_PAD_PUSH_VELOCITY,
        JUMP_PAD_VERTICAL_MULTIPLIER,
    },
    math::{Vec3, horizontal, horizontal_length},
};

/// Launch tuning for a jump pad.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JumpPadSettings {
    pub push_velocity: f32,
    pub horizontal_multiplier: f32,
    pub vertical_multiplier: f32,
    pub center_radius: f32,
    pub low_velocity_threshold: f32,
    pub high_velocity_threshold: f32,
}

impl Default for JumpPadSettings {
    fn default() -> Self {
        Self {
            push_velocity: JUMP_PAD_PUSH_VELOCITY,
            horizontal_multiplier: JUMP_PAD_HORIZONTAL_MULTIPLIER,
            vertical_multiplier: JUMP_PAD_VERTICAL_MULTIPLIER,
            center_radius: JUMP_PAD_CENTER_RADIUS,
            low_velocity_threshold: JUMP_PAD_LOW_VELOCITY_THRESHOLD,
            high_velocity_threshold: JUMP_PAD_HIGH_VELOCITY_THRESHOLD,
        }
    }
}

/// Planar push direction for a player touching a pad.
///
/// - Standing still near the centre: straight up (zero planar direction).
/// - Already moving fast: keep the player's own heading.
/// - Otherwise: push away from the pad centre.
pub fn launch_direction(
    settings: &JumpPadSettings,
    pad_origin: &Vec3,
    player_origin: &Vec3,
    current_velocity: &Vec3,
) -> Vec3 {
    let horizontal_speed = horizontal_length(current_velocity);
    let pad_to_player = horizontal(&(player_origin - pad_origin));
    let distance_from_center = horizontal_length(&pad_to_player);

    if distance_from_center <= settings.center_radius
        && horizontal_speed < settings.low_velocity_threshold
    {
        Vec3::zeros()
    } else if horizontal_speed > settings.high_velocity_threshold {
        horizontal(current_velocity) / horizontal_speed
    } else if distance_from_center > JUMP_PAD_MIN_PUSH_OFFSET {
        pad_to_player / distance_from_center
    } else {
        Vec3::zeros()
    }
}

/// Velocity after the pad fires: the launch is added on top of the current velocity,
/// and any downward speed is cancelled first.
pub fn launch_velocity(
    settings: &JumpPadSettings,
    pad_origin: &Vec3,
    player_origin: &Vec3,
    current_velocity: &Vec3,
) -> Vec3 {
    let direction = launch_direction(settings, pad_origin, player_origin, current_velocity);
    let planar = settings.push_velocity * settings.horizontal_multiplier;
    let vertical = settings.push_velocity * settings.vertical_multiplier;

    Vec3::new(
        current_velocity.x + direction.x * planar,
        current_velocity.y + direction.y * planar,
        current_velocity.z.max(0.0) + vertical,
    )
}
