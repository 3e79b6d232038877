//! Zipline traversal.
//!
//! Layout:
//! - `settings.rs`: tuning values and activation mode
//! - `rider.rs`: per-player ride state machine
//! - `line_of_sight.rs`: trace helpers used when mounting
//! - `discovery.rs`: map scan for anchor pairs (round start / reload)
//! - `activation.rs`: mount heuristics
//! - `tick.rs`: per-think motion update and dismounts
//!
//! [`ZiplineManager`] owns every line and every rider. The host drives it through [`Script`].

mod activation;
mod discovery;
mod line_of_sight;
mod rider;
mod settings;
mod tick;

pub use activation::{plan_mount, Activation, Rejection};
pub use rider::{advance_parameter, RidePhase, RiderState, TravelDirection};
pub use settings::{ActivationMode, ZiplineSettings};
pub use tick::{dismount_velocity, DismountReason};

use crate::{
    host::{EntityHandle, Host, PlayerSlot},
    script::{GameEvent, InputContext, Script},
};
use shared::{matches_any, ZiplineGeometry};
use std::collections::HashMap;

/// Script input that mounts (or drops) the activator.
pub const ACTIVATE_INPUT: &str = "ActivateZipline";

/// One discovered line.
#[derive(Clone, Debug, PartialEq)]
pub struct ZiplineLine {
    pub geometry: ZiplineGeometry,
    /// Press-to-use markers spawned along the line (empty in free-aim mode).
    pub markers: Vec<EntityHandle>,
}

pub struct ZiplineManager {
    settings: ZiplineSettings,
    lines: Vec<ZiplineLine>,
    riders: HashMap<PlayerSlot, RiderState>,
}

impl Default for ZiplineManager {
    fn default() -> Self {
        Self::new(ZiplineSettings::default())
    }
}

impl ZiplineManager {
    pub fn new(settings: ZiplineSettings) -> Self {
        Self {
            settings,
            lines: Vec::new(),
            riders: HashMap::new(),
        }
    }

    pub fn lines(&self) -> &[ZiplineLine] {
        &self.lines
    }

    pub fn rider(&self, slot: PlayerSlot) -> Option<&RiderState> {
        self.riders.get(&slot)
    }

    pub fn is_riding(&self, slot: PlayerSlot) -> bool {
        self.riders.contains_key(&slot)
    }

    pub fn rider_count(&self) -> usize {
        self.riders.len()
    }
}

impl Script for ZiplineManager {
    fn on_activate(&mut self, host: &mut dyn Host) {
        self.discover(host);
    }

    fn on_reload(&mut self, host: &mut dyn Host) {
        self.discover(host);
    }

    fn on_script_input(&mut self, host: &mut dyn Host, input: &str, context: InputContext) {
        if input != ACTIVATE_INPUT {
            return;
        }
        let Some(pawn) = context.activator.and_then(|entity| host.player_pawn(entity)) else {
            return;
        };

        if let Err(rejection) = self.activate(host, pawn) {
            let slot = pawn.slot.0;
            log::debug!("Player {slot} zipline activation rejected: {rejection}");
        }
    }

    fn on_game_event(&mut self, host: &mut dyn Host, event: &GameEvent) {
        let GameEvent::WeaponFire { user_id, weapon } = event;

        if !self.settings.use_weapons_to_interact
            || !matches_any(&self.settings.usage_weapons, weapon)
        {
            return;
        }
        let Some(pawn) = host.pawn_for_user_id(*user_id) else {
            return;
        };
        if !host.is_valid(pawn.entity) {
            return;
        }

        if let Err(rejection) = self.activate(host, pawn) {
            let slot = pawn.slot.0;
            log::debug!("Player {slot} zipline activation rejected: {rejection}");
        }
    }

    fn think(&mut self, host: &mut dyn Host) {
        self.tick(host);
    }
}
