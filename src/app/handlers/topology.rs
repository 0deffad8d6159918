//! Handler für die Store-Operationen auf Nodes und Links.
//!
//! Alle Operationen sind total: unbekannte IDs werden ignoriert, nichts schlägt fehl.

use crate::app::AppState;
use crate::core::{DeviceType, NodeId};

/// Hängt einen neuen Node an.
pub fn add_node(state: &mut AppState, device_type: DeviceType, label: String, position: glam::Vec2) {
    let id = state.topology_mut().add_node(device_type, label, position);
    log::info!(
        "Node {} ({}) an Position ({:.1}, {:.1}) hinzugefügt",
        id,
        device_type,
        position.x,
        position.y
    );
}

/// Hängt einen neuen Link an (ohne Validierung der Endpunkte).
pub fn add_link(state: &mut AppState, from: NodeId, to: NodeId) {
    let id = state.topology_mut().add_link(from, to);
    log::info!("Link {}: {} ↔ {}", id, from, to);
}

/// Setzt die Position eines Nodes. Unbekannte IDs sind ein No-op.
pub fn move_node(state: &mut AppState, node_id: NodeId, position: glam::Vec2) {
    if !state.topology.contains_node(node_id) {
        log::debug!("MoveNode ignoriert: {} existiert nicht", node_id);
        return;
    }
    state.topology_mut().move_node(node_id, position);
}
