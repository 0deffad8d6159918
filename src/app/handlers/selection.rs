//! Handler für Selektions-Operationen.

use crate::app::AppState;
use crate::core::NodeId;

/// Setzt die Selektion (None = aufheben). Topologie bleibt unberührt.
pub fn select_node(state: &mut AppState, node_id: Option<NodeId>) {
    if state.selection.selected_node_id == node_id {
        return;
    }
    state.selection.selected_node_id = node_id;
    match node_id {
        Some(id) => log::debug!("Selektiert: {}", id),
        None => log::debug!("Selektion aufgehoben"),
    }
}
