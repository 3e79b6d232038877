//! Server-side gameplay scripts: ziplines and jump pads.
//!
//! Scripts are plain values implementing [`Script`]. The engine binding creates them, forwards
//! callbacks, and exposes the game through a [`Host`] implementation.

pub mod host;
pub mod jump_pad;
pub mod script;
pub mod zipline;

#[cfg(test)]
mod sim;

pub use host::{EntityHandle, Host, PlayerPawn, PlayerSlot, Teleport, TraceQuery, TraceResult};
pub use jump_pad::{JumpPadScript, JUMP_PAD_INPUT};
pub use script::{GameEvent, InputContext, Script};
pub use zipline::{ZiplineManager, ZiplineSettings, ACTIVATE_INPUT};
