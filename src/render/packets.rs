//! Paket-Animation entlang der Links.

use super::links::LinkSegment;
use crate::core::{LinkId, Topology};
use glam::Vec2;
use std::collections::{HashMap, HashSet};

/// Referenz-Bildrate, auf die sich die Paketrate bezieht.
const REFERENCE_FPS: f32 = 60.0;

/// Hält den Fortschritt pro Link über Frames hinweg.
///
/// Neu auftauchende Links starten bei `index / link_count`, damit
/// die Pakete gleichmäßig versetzt laufen. Links, die aus der Topologie
/// verschwinden, verlieren ihren Fortschritt.
#[derive(Debug, Default)]
pub struct PacketAnimator {
    progress: HashMap<LinkId, f32>,
}

impl PacketAnimator {
    /// Erstellt einen leeren Animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gleicht die Fortschrittstabelle mit der aktuellen Link-Liste ab und
    /// schaltet alle zeichenbaren Pakete um `dt_seconds` weiter.
    ///
    /// Hängende Links (ohne Segment) behalten ihren Wert, laufen aber nicht weiter.
    pub fn update(
        &mut self,
        topology: &Topology,
        segments: &[LinkSegment],
        dt_seconds: f32,
        rate_per_frame: f32,
    ) {
        let live: HashSet<LinkId> = topology.links.iter().map(|link| link.id).collect();
        self.progress.retain(|id, _| live.contains(id));

        let link_count = topology.link_count().max(1) as f32;
        let step = dt_seconds.max(0.0) * REFERENCE_FPS * rate_per_frame;

        for segment in segments {
            let t = self
                .progress
                .entry(segment.link_id)
                .or_insert(segment.index as f32 / link_count);
            *t = (*t + step).rem_euclid(1.0);
        }
    }

    /// Aktueller Fortschritt eines Links in [0, 1).
    pub fn progress(&self, link_id: LinkId) -> Option<f32> {
        self.progress.get(&link_id).copied()
    }

    /// Paket-Positionen für alle Segmente mit bekanntem Fortschritt.
    pub fn packet_positions(&self, segments: &[LinkSegment]) -> Vec<Vec2> {
        segments
            .iter()
            .filter_map(|segment| {
                self.progress(segment.link_id)
                    .map(|t| segment.point_at(t))
            })
            .collect()
    }

    /// Anzahl verfolgter Links.
    pub fn len(&self) -> usize {
        self.progress.len()
    }

    /// Ob aktuell kein Link verfolgt wird.
    pub fn is_empty(&self) -> bool {
        self.progress.is_empty()
    }
}
