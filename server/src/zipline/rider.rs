use crate::host::PlayerPawn;
use shared::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RidePhase {
    /// Being pulled toward the snap target.
    Approaching,
    /// Following the curve.
    Riding,
}

/// Travel direction along the curve parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TravelDirection {
    /// Toward the end anchor (`t` increasing).
    Forward,
    /// Toward the start anchor (`t` decreasing).
    Reverse,
}

impl TravelDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            TravelDirection::Forward => 1.0,
            TravelDirection::Reverse => -1.0,
        }
    }
}

/// Per-player ride state. Lives in the manager's rider map for as long as the player is mounted.
#[derive(Clone, Debug, PartialEq)]
pub struct RiderState {
    /// Index into the manager's line list.
    pub zipline: usize,
    pub pawn: PlayerPawn,
    pub t: f32,
    pub direction: TravelDirection,
    pub phase: RidePhase,
    /// Where the player origin should be when the approach ends.
    pub snap_target: Vec3,
    /// Cable-to-origin drop for this line.
    pub height_offset: f32,
    /// Game time of the mount.
    pub mounted_at: f32,
}

impl RiderState {
    /// Moves `t` one think along the line. Returns true once the travel end has been reached.
    pub fn advance(&mut self, riding_speed: f32, line_length: f32, dt: f32) -> bool {
        self.t = advance_parameter(self.t, riding_speed, line_length, dt, self.direction);
        self.reached_end()
    }

    #[inline]
    pub fn reached_end(&self) -> bool {
        match self.direction {
            TravelDirection::Forward => self.t >= 1.0,
            TravelDirection::Reverse => self.t <= 0.0,
        }
    }
}

/// `t + (speed / length) * dt * sign`. A degenerate line jumps straight to its travel end.
pub fn advance_parameter(
    t: f32,
    riding_speed: f32,
    line_length: f32,
    dt: f32,
    direction: TravelDirection,
) -> f32 {
    if line_length <= 0.0 {
        return match direction {
            TravelDirection::Forward => 1.0,
            TravelDirection::Reverse => 0.0,
        };
    }
    t + (riding_speed / line_length) * dt * direction.sign()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{EntityHandle, PlayerSlot};

    fn rider(t: f32, direction: TravelDirection) -> RiderState {
        RiderState {
            zipline: 0,
            pawn: PlayerPawn {
                entity: EntityHandle(1),
                slot: PlayerSlot(0),
            },
            t,
            direction,
            phase: RidePhase::Riding,
            snap_target: Vec3::zeros(),
            height_offset: 75.0,
            mounted_at: 0.0,
        }
    }

    #[test]
    fn one_think_at_riding_speed_over_equal_length_is_one_interval() {
        let dt = advance_parameter(0.0, 550.0, 550.0, 0.05, TravelDirection::Forward);
        assert_eq!(dt, 0.05);

        let back = advance_parameter(0.5, 550.0, 550.0, 0.05, TravelDirection::Reverse);
        assert!((back - 0.45).abs() < 1.0e-6);
    }

    #[test]
    fn reaching_an_end_depends_on_direction() {
        let mut forward = rider(0.97, TravelDirection::Forward);
        assert!(forward.advance(550.0, 550.0, 0.05));
        assert!(forward.t >= 1.0);

        let mut reverse = rider(0.97, TravelDirection::Reverse);
        assert!(!reverse.advance(550.0, 550.0, 0.05));

        let mut reverse = rider(0.03, TravelDirection::Reverse);
        assert!(reverse.advance(550.0, 550.0, 0.05));
        assert!(reverse.t <= 0.0);
    }

    #[test]
    fn degenerate_lines_finish_immediately() {
        let mut r = rider(0.5, TravelDirection::Reverse);
        assert!(r.advance(550.0, 0.0, 0.05));
        assert_eq!(r.t, 0.0);
    }
}
