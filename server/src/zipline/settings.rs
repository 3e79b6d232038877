//! Zipline tuning, seeded from `shared::constants`.
//!
//! Settings are fixed for the lifetime of a [`super::ZiplineManager`]; a script reload re-runs
//! discovery with the same values.

use shared::constants::*;

/// How players mount a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationMode {
    /// Any trigger mounts the nearest line the player is looking at.
    FreeAim,
    /// Discovery spawns `+use` markers along each line, and the line-of-sight trace must land on
    /// one of the candidate line's markers.
    PressToUse,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ZiplineSettings {
    pub activation_mode: ActivationMode,
    pub max_activation_distance: f32,
    pub use_weapons_to_interact: bool,
    pub usage_weapons: Vec<String>,
    pub can_drop_from_zipline: bool,
    pub dismount_forward_velocity_multiplier: f32,
    pub dismount_upward_velocity: f32,
    /// Vertical lines launch along the look direction instead of the flat forward boost.
    pub vertical_look_dismount: bool,
    pub vertical_dismount_max_horizontal_fraction: f32,
    pub sag_curve: f32,
    pub approach_speed: f32,
    pub approach_falloff: f32,
    pub riding_speed: f32,
    pub approach_threshold: f32,
    pub think_interval: f32,
    pub max_ziplines_to_search: u32,
    pub zip_height_normal: f32,
    pub zip_height_vertical: f32,
    pub initial_player_push_up: f32,
    pub min_start_end_percentage: f32,
    pub proximity_override_threshold_percentage: f32,
    pub facing_alignment_threshold: f32,
    pub min_facing_dot_product: f32,
    pub crouch_eye_height: f32,
    pub use_marker_segments: u32,
    /// Riders mounted longer than this are dropped. `None` disables the watchdog.
    pub max_ride_time: Option<f32>,
    pub activate_sound: String,
    pub dismount_sound: String,
    pub debug: bool,
}

impl Default for ZiplineSettings {
    fn default() -> Self {
        Self {
            activation_mode: ActivationMode::FreeAim,
            max_activation_distance: MAX_ACTIVATION_DISTANCE,
            use_weapons_to_interact: true,
            usage_weapons: USAGE_WEAPONS.iter().map(|w| w.to_string()).collect(),
            can_drop_from_zipline: CAN_DROP_FROM_ZIPLINE,
            dismount_forward_velocity_multiplier: DISMOUNT_FORWARD_VELOCITY_MULTIPLIER,
            dismount_upward_velocity: DISMOUNT_UPWARD_VELOCITY,
            vertical_look_dismount: true,
            vertical_dismount_max_horizontal_fraction: VERTICAL_DISMOUNT_MAX_HORIZONTAL_FRACTION,
            sag_curve: DEFAULT_SAG_CURVE,
            approach_speed: APPROACH_SPEED,
            approach_falloff: APPROACH_FALLOFF,
            riding_speed: RIDING_SPEED,
            approach_threshold: APPROACH_THRESHOLD,
            think_interval: THINK_INTERVAL,
            max_ziplines_to_search: MAX_ZIPLINES_TO_SEARCH,
            zip_height_normal: ZIP_HEIGHT_NORMAL,
            zip_height_vertical: ZIP_HEIGHT_VERTICAL,
            initial_player_push_up: INITIAL_PLAYER_PUSH_UP,
            min_start_end_percentage: MIN_START_END_PERCENTAGE,
            proximity_override_threshold_percentage: PROXIMITY_OVERRIDE_THRESHOLD_PERCENTAGE,
            facing_alignment_threshold: FACING_ALIGNMENT_THRESHOLD,
            min_facing_dot_product: MIN_FACING_DOT_PRODUCT,
            crouch_eye_height: CROUCH_EYE_HEIGHT,
            use_marker_segments: USE_MARKER_SEGMENTS,
            max_ride_time: None,
            activate_sound: ACTIVATE_SOUND.to_string(),
            dismount_sound: DISMOUNT_SOUND.to_string(),
            debug: false,
        }
    }
}

impl ZiplineSettings {
    /// Cable-to-origin drop for a line.
    #[inline]
    pub fn height_offset(&self, is_vertical: bool) -> f32 {
        if is_vertical {
            self.zip_height_vertical
        } else {
            self.zip_height_normal
        }
    }
}
