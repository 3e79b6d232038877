//! Line-of-sight checks from a player's eyes to a point on a line.

use crate::host::{EntityHandle, Host, PlayerPawn, TraceQuery};
use shared::{
    constants::{LINE_OF_SIGHT_TOLERANCE, LINE_OF_SIGHT_TRACE_RADIUS},
    distance, Vec3,
};

/// Free-aim check: nothing blocks the way from `eye` to `target`.
///
/// A hit within `LINE_OF_SIGHT_TOLERANCE` of the target counts as reaching it (the trace
/// tends to clip the anchor or the cable itself). Anything stopping earlier is an obstruction.
pub fn has_clear_line(host: &dyn Host, pawn: &PlayerPawn, eye: &Vec3, target: &Vec3) -> bool {
    let trace = host.trace(&TraceQuery {
        start: *eye,
        end: *target,
        radius: LINE_OF_SIGHT_TRACE_RADIUS,
        ignore: Some(pawn.entity),
    });

    !trace.did_hit || distance(&trace.end, target) <= LINE_OF_SIGHT_TOLERANCE
}

/// Press-to-use check: the trace toward `target` must land on one of `markers`.
pub fn hits_marker(
    host: &dyn Host,
    pawn: &PlayerPawn,
    eye: &Vec3,
    target: &Vec3,
    markers: &[EntityHandle],
) -> bool {
    let trace = host.trace(&TraceQuery {
        start: *eye,
        end: *target,
        radius: LINE_OF_SIGHT_TRACE_RADIUS,
        ignore: Some(pawn.entity),
    });

    trace.did_hit
        && trace
            .hit_entity
            .is_some_and(|entity| markers.contains(&entity))
}
