//! Tuning constants for the zipline and jump-pad scripts.
//!
//! Distances are in world units (the host's inches), speeds in units per second,
//! and time in seconds of game time.

/// Maximum eye-to-curve distance at which a player may mount a zipline.
pub const MAX_ACTIVATION_DISTANCE: f32 = 100.0;

/// Whether activating again while riding drops the player off the line.
pub const CAN_DROP_FROM_ZIPLINE: bool = true;

/// Weapon classnames (wildcards allowed) whose `weapon_fire` event triggers activation.
pub const USAGE_WEAPONS: [&str; 2] = ["weapon_knife*", "weapon_taser"];

/// Forward boost multiplier applied on dismount from a non-vertical line.
///
/// The horizontal exit speed is
/// `forward * DISMOUNT_FORWARD_VELOCITY_MULTIPLIER * RIDING_SPEED / 8`.
pub const DISMOUNT_FORWARD_VELOCITY_MULTIPLIER: f32 = 5.0;

/// Upward exit velocity on dismount.
pub const DISMOUNT_UPWARD_VELOCITY: f32 = 300.0;

/// Cap on horizontal exit speed when leaving a vertical line, as a fraction of `RIDING_SPEED`.
pub const VERTICAL_DISMOUNT_MAX_HORIZONTAL_FRACTION: f32 = 0.5;

/// Scales `DEFAULT_SAG_CURVE` into the control-point drop.
pub const SAG_MULTIPLIER: f32 = 0.4;

/// Base sag curve value for every discovered line.
pub const DEFAULT_SAG_CURVE: f32 = 100.0;

/// Base speed while closing in on the snap target.
pub const APPROACH_SPEED: f32 = 500.0;

/// Per-unit falloff of the approach speed.
///
/// Approach velocity is `APPROACH_SPEED * distance * APPROACH_FALLOFF`, so the
/// player slows down as the snap target gets closer.
pub const APPROACH_FALLOFF: f32 = 0.02;

/// Speed along the cable while riding.
pub const RIDING_SPEED: f32 = 550.0;

/// Distance to the snap target below which an approaching player starts riding.
pub const APPROACH_THRESHOLD: f32 = 80.0;

/// Think interval of the zipline manager (seconds).
pub const THINK_INTERVAL: f32 = 0.05;

/// Highest `{i}` searched for `{i}_zipline_s` / `{i}_zipline_e` anchor pairs.
pub const MAX_ZIPLINES_TO_SEARCH: u32 = 10;

/// Drop from the cable to the player origin on regular lines.
pub const ZIP_HEIGHT_NORMAL: f32 = 75.0;

/// Drop from the cable to the player origin on vertical lines.
pub const ZIP_HEIGHT_VERTICAL: f32 = 16.0;

/// `|normalize(end - start).z|` above which a line counts as vertical.
pub const VERTICAL_THRESHOLD_Z: f32 = 0.80;

/// Upward nudge applied on mount to clear ground collision.
pub const INITIAL_PLAYER_PUSH_UP: f32 = 16.0;

/// Safe inset from either end used when the mount point is close to an anchor.
pub const MIN_START_END_PERCENTAGE: f32 = 0.05;

/// Mount points within this fraction of an end force travel away from that end.
pub const PROXIMITY_OVERRIDE_THRESHOLD_PERCENTAGE: f32 = 0.10;

/// Dot product with the line axis above which the look direction picks the travel direction.
pub const FACING_ALIGNMENT_THRESHOLD: f32 = 0.5;

/// Minimum dot product between the look direction and the direction to the line.
pub const MIN_FACING_DOT_PRODUCT: f32 = 0.3;

/// Eye height above the origin under which the player counts as crouching.
pub const CROUCH_EYE_HEIGHT: f32 = 60.0;

/// Sphere radius of the line-of-sight trace.
pub const LINE_OF_SIGHT_TRACE_RADIUS: f32 = 3.0;

/// A trace hit this close to the target point still counts as reaching it.
pub const LINE_OF_SIGHT_TOLERANCE: f32 = 5.0;

/// Number of uniform steps used when searching the nearest point on a curve.
pub const NEAREST_POINT_SAMPLES: u32 = 50;

/// Number of segments between press-to-use markers along a line.
pub const USE_MARKER_SEGMENTS: u32 = 20;

/// Sound played at the player's feet when mounting.
pub const ACTIVATE_SOUND: &str = "UIPanorama.tab_mainmenu_loadout";

/// Sound played at the player's feet when dismounting.
pub const DISMOUNT_SOUND: &str = "UIPanorama.weapon_showSolo";

/// Radius of debug spheres.
pub const DEBUG_SPHERE_RADIUS: f32 = 10.0;

/// Base launch speed of a jump pad.
pub const JUMP_PAD_PUSH_VELOCITY: f32 = 500.0;

pub const JUMP_PAD_HORIZONTAL_MULTIPLIER: f32 = 0.8;

pub const JUMP_PAD_VERTICAL_MULTIPLIER: f32 = 1.0;

/// Players standing within this planar radius of the pad centre are launched straight up.
pub const JUMP_PAD_CENTER_RADIUS: f32 = 32.0;

/// Straight-up launches only happen below this horizontal speed.
pub const JUMP_PAD_LOW_VELOCITY_THRESHOLD: f32 = 150.0;

/// Above this horizontal speed the pad keeps the player's own heading.
pub const JUMP_PAD_HIGH_VELOCITY_THRESHOLD: f32 = 100.0;

/// Below this planar offset from the pad centre there is no outward direction to push along.
pub const JUMP_PAD_MIN_PUSH_OFFSET: f32 = 5.0;
