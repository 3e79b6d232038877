//! Map scan for zipline anchor pairs.
//!
//! Anchors follow the `{i}_zipline_s` / `{i}_zipline_e` naming convention for
//! `i in 1..=max_ziplines_to_search`. A scan always starts from scratch: the line list and the
//! rider map are thrown away first, and use markers spawned by the previous scan are removed
//! from the map.

use super::{ActivationMode, ZiplineLine, ZiplineManager};
use crate::host::{EntityHandle, Host};
use shared::{Vec3, ZiplineGeometry};

pub(super) fn start_anchor_name(index: u32) -> String {
    format!("{index}_zipline_s")
}

pub(super) fn end_anchor_name(index: u32) -> String {
    format!("{index}_zipline_e")
}

fn marker_name(id: u32, k: usize) -> String {
    format!("{id}_zipline_use_{k}")
}

fn fmt_pos(p: &Vec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", p.x, p.y, p.z)
}

impl ZiplineManager {
    /// Rebuilds every line from the map and (re)arms or disables the think.
    ///
    /// Returns the number of lines found.
    pub fn discover(&mut self, host: &mut dyn Host) -> usize {
        log::info!("zipline init");

        for marker in self.lines.drain(..).flat_map(|line| line.markers) {
            host.remove_entity(marker);
        }
        self.riders.clear();

        for i in 1..=self.settings.max_ziplines_to_search {
            let start = host.find_entity_by_name(&start_anchor_name(i));
            let end = host.find_entity_by_name(&end_anchor_name(i));

            match (start, end) {
                (Some(start), Some(end)) => {
                    let start_pos = host.abs_origin(start);
                    let end_pos = host.abs_origin(end);
                    let (Some(start_pos), Some(end_pos)) = (start_pos, end_pos) else {
                        log::warn!("zipline {i}: anchor origin unavailable, skipping");
                        continue;
                    };

                    let sag = self.settings.sag_curve;
                    let geometry = ZiplineGeometry::with_sag_curve(i, start_pos, end_pos, sag);
                    log::info!(
                        "found zip {i}: S {}, E {}",
                        fmt_pos(&start_pos),
                        fmt_pos(&end_pos)
                    );

                    let segments = self.settings.use_marker_segments;
                    let markers = match self.settings.activation_mode {
                        ActivationMode::FreeAim => Vec::new(),
                        ActivationMode::PressToUse => spawn_markers(host, &geometry, segments),
                    };

                    self.lines.push(ZiplineLine { geometry, markers });
                }
                (None, None) if i != 1 => {}
                _ => log::info!("no zips found"),
            }
        }

        if self.lines.is_empty() {
            host.set_think_enabled(false);
        } else {
            let now = host.game_time();
            host.set_think_enabled(true);
            host.set_next_think(now + self.settings.think_interval);
        }

        self.lines.len()
    }
}

/// Spawns one `+use` marker per sample point along the line.
fn spawn_markers(
    host: &mut dyn Host,
    geometry: &ZiplineGeometry,
    segments: u32,
) -> Vec<EntityHandle> {
    geometry
        .sample_points(segments)
        .enumerate()
        .filter_map(|(k, point)| {
            let name = marker_name(geometry.id, k);
            host.spawn_use_marker(&name, point)
        })
        .collect()
}
