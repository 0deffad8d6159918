//! Ein platziertes Gerät im Topologie-Graphen.

use super::DeviceType;
use glam::Vec2;
use std::fmt;

/// Eindeutige, stabile Node-ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// Ein Gerät auf der Zeichenfläche
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyNode {
    /// Eindeutige ID (über die Lebensdauer stabil)
    pub id: NodeId,
    /// Anzeige-Label (bei Erstellung festgelegt)
    pub label: String,
    /// Geräte-Typ (bei Erstellung festgelegt)
    pub device_type: DeviceType,
    /// Position im Canvas-Raum (Pixel, lokal zur Zeichenfläche)
    pub position: Vec2,
}

impl TopologyNode {
    /// Erstellt einen neuen Node
    pub fn new(id: NodeId, label: impl Into<String>, device_type: DeviceType, position: Vec2) -> Self {
        Self {
            id,
            label: label.into(),
            device_type,
            position,
        }
    }

    /// Prüft, ob ein Punkt innerhalb der Kachel um den Node liegt.
    ///
    /// `tile_size` ist die volle Breite/Höhe der Kachel; der Node sitzt in deren Mitte.
    pub fn tile_contains(&self, point: Vec2, tile_size: Vec2) -> bool {
        let half = tile_size * 0.5;
        let d = (point - self.position).abs();
        d.x <= half.x && d.y <= half.y
    }
}
