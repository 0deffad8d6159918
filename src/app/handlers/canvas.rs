//! Handler für Canvas-Interaktion: Drag, Platzierungsmodus, Werkzeuge, Viewport.

use crate::app::{AppState, EditorTool, NodeDrag};
use crate::core::{DeviceType, NodeId};

/// Beginnt den Drag eines Nodes mit festem Pointer-Offset.
pub fn begin_drag(state: &mut AppState, node_id: NodeId, offset: glam::Vec2) {
    state.canvas.drag = Some(NodeDrag { node_id, offset });
}

/// Beendet einen laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    if let Some(drag) = state.canvas.drag.take() {
        log::debug!("Drag von {} beendet", drag.node_id);
    }
}

/// Setzt oder löscht den Platzierungsmodus.
pub fn set_placement_type(state: &mut AppState, device_type: Option<DeviceType>) {
    state.editor.placement_type = device_type;
    match device_type {
        Some(t) => log::info!("Platzierungsmodus: {}", t),
        None => log::debug!("Platzierungsmodus beendet"),
    }
}

/// Setzt den Startknoten des Connect-Tools.
pub fn set_connect_source(state: &mut AppState, node_id: Option<NodeId>) {
    state.editor.connect_source_node = node_id;
}

/// Aktiviert ein Editor-Werkzeug und setzt tool-spezifische Zwischenzustände zurück.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    state.editor.active_tool = tool;
    state.editor.connect_source_node = None;
    if tool == EditorTool::Connect {
        state.editor.placement_type = None;
    }
    log::info!("Editor-Werkzeug: {:?}", tool);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.canvas.viewport_size = size;
}
