//! Repräsentiert eine Verbindung (Kabel) zwischen zwei Geräten.

use super::NodeId;
use std::fmt;

/// Eindeutige Link-ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(pub u64);

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Eine ungerichtete Verbindung zwischen zwei Nodes.
///
/// Die Endpunkte werden nicht validiert: ein Link darf auf fehlende Nodes
/// zeigen und wird dann beim Rendern übersprungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyLink {
    /// Link-ID
    pub id: LinkId,
    /// Erster Endpunkt
    pub from: NodeId,
    /// Zweiter Endpunkt
    pub to: NodeId,
}

impl TopologyLink {
    /// Erstellt einen neuen Link
    pub fn new(id: LinkId, from: NodeId, to: NodeId) -> Self {
        Self { id, from, to }
    }

    /// Ob der Link den Node als Endpunkt hat.
    pub fn touches(&self, node_id: NodeId) -> bool {
        self.from == node_id || self.to == node_id
    }
}
