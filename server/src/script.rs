//! Callbacks the host drives on a `point_script` entity.
//!
//! The engine binding owns one value per script, registers the callbacks it needs, and forwards
//! every invocation with a `&mut dyn Host`. All callbacks run to completion on the simulation
//! thread; none of them may block.

use crate::host::{EntityHandle, Host};

/// Payload of a script input (`I/O` connection firing into the script).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputContext {
    pub activator: Option<EntityHandle>,
    pub caller: Option<EntityHandle>,
}

/// Game events the scripts subscribe to.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    WeaponFire { user_id: i32, weapon: String },
}

pub trait Script {
    /// Script entity activated (round start).
    fn on_activate(&mut self, _host: &mut dyn Host) {}

    /// Script source reloaded.
    fn on_reload(&mut self, _host: &mut dyn Host) {}

    /// Named script input fired.
    fn on_script_input(&mut self, _host: &mut dyn Host, _input: &str, _context: InputContext) {}

    fn on_game_event(&mut self, _host: &mut dyn Host, _event: &GameEvent) {}

    /// Scheduled think. Scripts that think re-arm themselves via [`Host::set_next_think`].
    fn think(&mut self, _host: &mut dyn Host) {}
}
