//! Host engine boundary.
//!
//! Everything the scripts can observe or change in the game goes through [`Host`]. The engine
//! binding implements it over the real scripting API; tests implement it over a small simulator.
//!
//! Conventions
//! - Getters return `None` for invalid or unknown entities. Callers treat that as
//!   "feature unavailable" and bail out of the current operation.
//! - Positions are world units, Z-up. Angles are degrees.

use shared::{QAngle, Vec3};

/// Opaque engine entity handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle(pub u32);

/// Player slot, stable for as long as the player stays connected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerSlot(pub u32);

/// A validated player pawn.
///
/// The host only hands these out for pawns that currently have a valid controller, so
/// downstream code never needs to check what kind of entity it is holding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayerPawn {
    pub entity: EntityHandle,
    pub slot: PlayerSlot,
}

/// Partial teleport: `None` components are left unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Teleport {
    pub position: Option<Vec3>,
    pub angles: Option<QAngle>,
    pub velocity: Option<Vec3>,
}

impl Teleport {
    pub fn position(position: Vec3) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn velocity(velocity: Vec3) -> Self {
        Self {
            velocity: Some(velocity),
            ..Self::default()
        }
    }
}

/// Sphere trace from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceQuery {
    pub start: Vec3,
    pub end: Vec3,
    pub radius: f32,
    pub ignore: Option<EntityHandle>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TraceResult {
    pub did_hit: bool,
    /// Where the trace stopped (`TraceQuery::end` when nothing was hit).
    pub end: Vec3,
    pub hit_entity: Option<EntityHandle>,
}

impl TraceResult {
    pub fn clear(end: Vec3) -> Self {
        Self {
            did_hit: false,
            end,
            hit_entity: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

pub trait Host {
    /// Entity with exactly this targetname.
    fn find_entity_by_name(&self, name: &str) -> Option<EntityHandle>;

    /// Every valid entity of `class_name`, in handle order.
    fn find_entities_by_class(&self, class_name: &str) -> Vec<EntityHandle>;

    fn is_valid(&self, entity: EntityHandle) -> bool;

    /// Typed view of `entity` if it is a player pawn with a valid controller.
    fn player_pawn(&self, entity: EntityHandle) -> Option<PlayerPawn>;

    /// Pawn of the player behind a game-event `userid`.
    fn pawn_for_user_id(&self, user_id: i32) -> Option<PlayerPawn>;

    fn abs_origin(&self, entity: EntityHandle) -> Option<Vec3>;

    fn abs_velocity(&self, entity: EntityHandle) -> Option<Vec3>;

    fn eye_position(&self, entity: EntityHandle) -> Option<Vec3>;

    fn eye_angles(&self, entity: EntityHandle) -> Option<QAngle>;

    fn health(&self, entity: EntityHandle) -> Option<i32>;

    fn teleport(&mut self, entity: EntityHandle, teleport: Teleport);

    fn trace(&self, query: &TraceQuery) -> TraceResult;

    /// Current game time in seconds.
    fn game_time(&self) -> f32;

    /// Schedules the next think callback.
    fn set_next_think(&mut self, time: f32);

    /// Installs (`true`) or clears (`false`) this script's think callback.
    fn set_think_enabled(&mut self, enabled: bool);

    /// Fire-and-forget server console command.
    fn server_command(&mut self, command: &str);

    /// Diagnostic only.
    fn debug_sphere(&mut self, _center: Vec3, _radius: f32, _duration: f32, _color: Color) {}

    /// Spawns an invisible `+use` target at `position` whose use output fires this script's
    /// `ActivateZipline` input. Hosts without spawning support return `None`.
    fn spawn_use_marker(&mut self, _name: &str, _position: Vec3) -> Option<EntityHandle> {
        None
    }

    /// Removes an entity this script spawned. Unknown or already removed handles are ignored.
    fn remove_entity(&mut self, _entity: EntityHandle) {}
}

/// Plays a positional sound event through the server console.
pub fn play_sound_at(host: &mut dyn Host, sound: &str, position: &Vec3) {
    host.server_command(&format!(
        "snd_sos_start_soundevent_at_pos {} {} {} {}",
        sound, position.x, position.y, position.z
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimHost;

    #[test]
    fn sounds_are_played_through_the_console() {
        let mut host = SimHost::new();
        let feet = Vec3::new(1.0, -2.5, 64.0);
        play_sound_at(&mut host, "UIPanorama.weapon_showSolo", &feet);
        let expected = "snd_sos_start_soundevent_at_pos UIPanorama.weapon_showSolo 1 -2.5 64";
        assert_eq!(host.commands, [expected]);
    }

    #[test]
    fn lookups_skip_invalid_entities() {
        let mut host = SimHost::new();
        let a = host.add_player(PlayerSlot(0), 1, Vec3::zeros());
        let b = host.add_player(PlayerSlot(1), 2, Vec3::zeros());
        let anchor = host.add_anchor("1_zipline_s", Vec3::zeros());

        let players = host.find_entities_by_class("player");
        assert_eq!(players, vec![a.entity, b.entity]);
        assert_eq!(host.find_entity_by_name("1_zipline_s"), Some(anchor));

        host.disconnect(a.entity);
        assert_eq!(host.find_entities_by_class("player"), vec![b.entity]);
        assert_eq!(host.player_pawn(a.entity), None);
        assert_eq!(host.player_pawn(b.entity), Some(b));
    }
}
