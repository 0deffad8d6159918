use crate::app::CommandLog;
use crate::core::{NodeId, Topology, TopologyNode};
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{CanvasState, EditorToolState, SelectionState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Netzwerk-Graph (Arc für O(1)-Clone in die RenderScene)
    pub topology: Arc<Topology>,
    /// Canvas-State (Viewport, Drag)
    pub canvas: CanvasState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State (inkl. Platzierungsmodus)
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Animation)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            topology: Arc::new(Topology::new()),
            canvas: CanvasState::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            editor: EditorToolState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Mutabler Zugriff auf die Topologie (CoW: klont nur, wenn eine Szene sie noch hält).
    #[inline]
    pub fn topology_mut(&mut self) -> &mut Topology {
        Arc::make_mut(&mut self.topology)
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.topology.node_count()
    }

    /// Gibt die Anzahl der Links zurück (für UI-Anzeige)
    pub fn link_count(&self) -> usize {
        self.topology.link_count()
    }

    /// Der aktuell selektierte Node, falls er noch existiert.
    pub fn selected_node(&self) -> Option<&TopologyNode> {
        self.selection
            .selected_node_id
            .and_then(|id| self.topology.node(id))
    }

    /// Node unter einem Canvas-Punkt (oberster zuerst).
    pub fn node_at(&self, pos: glam::Vec2) -> Option<NodeId> {
        self.topology.node_at(pos, self.options.tile_size())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
