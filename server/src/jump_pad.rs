//! Jump pad script.
//!
//! A trigger on the map fires `onJumpPad` into the script with the touching player as activator
//! and the pad as caller. The player is launched away from the pad centre (or straight up when
//! standing on it), keeping whatever horizontal speed they already had.

use crate::{
    host::{Host, Teleport},
    script::{InputContext, Script},
};
use shared::{launch_velocity, JumpPadSettings};

pub const JUMP_PAD_INPUT: &str = "onJumpPad";

#[derive(Default)]
pub struct JumpPadScript {
    settings: JumpPadSettings,
}

impl JumpPadScript {
    pub fn new(settings: JumpPadSettings) -> Self {
        Self { settings }
    }
}

impl Script for JumpPadScript {
    fn on_script_input(&mut self, host: &mut dyn Host, input: &str, context: InputContext) {
        if input != JUMP_PAD_INPUT {
            return;
        }

        let Some(pawn) = context.activator.and_then(|entity| host.player_pawn(entity)) else {
            return;
        };
        if !host.health(pawn.entity).is_some_and(|health| health > 0) {
            return;
        }
        let Some(pad_origin) = context.caller.and_then(|pad| host.abs_origin(pad)) else {
            log::debug!("jump pad fired without a valid caller");
            return;
        };
        let origin = host.abs_origin(pawn.entity);
        let velocity = host.abs_velocity(pawn.entity);
        let (Some(origin), Some(velocity)) = (origin, velocity) else {
            return;
        };

        let launch = launch_velocity(&self.settings, &pad_origin, &origin, &velocity);
        host.teleport(pawn.entity, Teleport::velocity(launch));
    }
}
