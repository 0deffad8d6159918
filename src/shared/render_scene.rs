//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{NodeId, Topology};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Unveränderlicher Snapshot des Graphen
    pub topology: Arc<Topology>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Aktuell selektierter Node
    pub selected_node_id: Option<NodeId>,
    /// Node-ID des Connect-Tool-Source (für spezielle Hervorhebung)
    pub connect_source_node: Option<NodeId>,
    /// Laufzeit-Optionen für Farben, Größen, Animation
    pub options: EditorOptions,
}

impl RenderScene {
    /// Ob der Node hervorgehoben (selektiert) gezeichnet wird.
    pub fn is_selected(&self, node_id: NodeId) -> bool {
        self.selected_node_id == Some(node_id)
    }
}
