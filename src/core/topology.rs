//! Die zentrale Topology-Datenstruktur mit Nodes und Links.

use super::{DeviceType, LinkId, NodeId, TopologyLink, TopologyNode};
use glam::Vec2;
use indexmap::IndexMap;

/// Container für den gesamten Netzwerk-Graphen
///
/// Nodes und Links behalten ihre Einfüge-Reihenfolge; diese bestimmt auch die
/// Zeichenreihenfolge (später eingefügte Nodes liegen oben).
#[derive(Debug, Clone, Default)]
pub struct Topology {
    /// Alle Geräte, indexiert nach ID, in Einfüge-Reihenfolge
    pub nodes: IndexMap<NodeId, TopologyNode>,
    /// Alle Links in Einfüge-Reihenfolge
    pub links: Vec<TopologyLink>,
    next_node_id: u64,
    next_link_id: u64,
}

impl Topology {
    /// Erstellt eine leere Topologie
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            links: Vec::new(),
            next_node_id: 1,
            next_link_id: 1,
        }
    }

    /// Hängt einen neuen Node an und vergibt eine frische ID.
    pub fn add_node(
        &mut self,
        device_type: DeviceType,
        label: impl Into<String>,
        position: Vec2,
    ) -> NodeId {
        let id = self.allocate_node_id();
        self.nodes
            .insert(id, TopologyNode::new(id, label, device_type, position));
        id
    }

    /// Hängt einen neuen Link an und vergibt eine frische ID.
    ///
    /// Keine Prüfung auf Duplikate, Self-Links oder fehlende Endpunkte.
    pub fn add_link(&mut self, from: NodeId, to: NodeId) -> LinkId {
        let id = self.allocate_link_id();
        self.links.push(TopologyLink::new(id, from, to));
        id
    }

    /// Setzt die Position eines Nodes. Gibt `false` zurück, wenn die ID fehlt.
    pub fn move_node(&mut self, node_id: NodeId, position: Vec2) -> bool {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            return false;
        };
        node.position = position;
        true
    }

    /// Node nach ID
    pub fn node(&self, node_id: NodeId) -> Option<&TopologyNode> {
        self.nodes.get(&node_id)
    }

    /// Ob ein Node mit dieser ID existiert
    pub fn contains_node(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// Iterator über alle Nodes in Zeichenreihenfolge
    pub fn nodes_iter(&self) -> impl Iterator<Item = &TopologyNode> {
        self.nodes.values()
    }

    /// Anzahl Nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl Links
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Anzahl Nodes eines bestimmten Typs
    pub fn count_of_type(&self, device_type: DeviceType) -> usize {
        self.nodes
            .values()
            .filter(|n| n.device_type == device_type)
            .count()
    }

    /// Anzahl Links, die den Node als Endpunkt haben
    pub fn link_count_of(&self, node_id: NodeId) -> usize {
        self.links.iter().filter(|l| l.touches(node_id)).count()
    }

    /// Löst die Endpunkt-Positionen eines Links auf.
    ///
    /// `None`, wenn einer der beiden Endpunkte nicht (mehr) existiert.
    pub fn link_endpoints(&self, link: &TopologyLink) -> Option<(Vec2, Vec2)> {
        let from = self.nodes.get(&link.from)?;
        let to = self.nodes.get(&link.to)?;
        Some((from.position, to.position))
    }

    /// Findet den obersten Node, dessen Kachel den Punkt enthält.
    pub fn node_at(&self, point: Vec2, tile_size: Vec2) -> Option<NodeId> {
        self.nodes
            .values()
            .rev()
            .find(|n| n.tile_contains(point, tile_size))
            .map(|n| n.id)
    }

    /// Nächstes Label für einen Typ, z.B. `R3` wenn bereits zwei Router existieren.
    pub fn next_label_for(&self, device_type: DeviceType) -> String {
        format!(
            "{}{}",
            device_type.label_prefix(),
            self.count_of_type(device_type) + 1
        )
    }

    fn allocate_node_id(&mut self) -> NodeId {
        // Nodes können von außen eingefügt werden; kollidierende IDs überspringen
        let mut candidate = self.next_node_id.max(1);
        while self.nodes.contains_key(&NodeId(candidate)) {
            candidate += 1;
        }
        self.next_node_id = candidate + 1;
        NodeId(candidate)
    }

    fn allocate_link_id(&mut self) -> LinkId {
        let mut candidate = self.next_link_id.max(1);
        while self.links.iter().any(|l| l.id == LinkId(candidate)) {
            candidate += 1;
        }
        self.next_link_id = candidate + 1;
        LinkId(candidate)
    }
}

#[cfg(test)]
mod tests;
