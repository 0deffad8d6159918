//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, EditorTool};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ViewportResized { size } => {
            // wird jeden Frame gemeldet; nur echte Änderungen landen im Command-Log
            if state.canvas.viewport_size == size {
                Vec::new()
            } else {
                vec![AppCommand::SetViewportSize { size }]
            }
        }

        AppIntent::CanvasPointerPressed { pos } => match state.editor.active_tool {
            EditorTool::Select => map_select_press(state, pos),
            EditorTool::Connect => map_connect_press(state, pos),
        },
        AppIntent::CanvasPointerMoved { pos } => match state.canvas.drag {
            Some(drag) => vec![AppCommand::MoveNode {
                node_id: drag.node_id,
                position: pos + drag.offset,
            }],
            None => Vec::new(),
        },
        AppIntent::CanvasPointerReleased => {
            if state.canvas.is_dragging() {
                vec![AppCommand::EndNodeDrag]
            } else {
                Vec::new()
            }
        }

        AppIntent::DeviceSelected { device_type } => {
            let mut commands = Vec::with_capacity(2);
            if state.editor.active_tool != EditorTool::Select {
                commands.push(AppCommand::SetEditorTool {
                    tool: EditorTool::Select,
                });
            }
            commands.push(AppCommand::SetPlacementType {
                device_type: Some(device_type),
            });
            commands
        }
        AppIntent::PlacementCancelled => vec![
            AppCommand::SetPlacementType { device_type: None },
            AppCommand::SetConnectSource { node_id: None },
        ],
        AppIntent::CatalogCategorySelected { category } => {
            vec![AppCommand::SetCatalogCategory { category }]
        }
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],

        AppIntent::SelectNodeRequested { node_id } => vec![AppCommand::SelectNode { node_id }],
        AppIntent::AddLinkRequested { from, to } => vec![AppCommand::AddLink { from, to }],

        AppIntent::InspectRequested => vec![AppCommand::OpenInspector],
        AppIntent::InspectorClosed => vec![AppCommand::CloseInspector],
        AppIntent::InspectorTabSelected { tab } => vec![AppCommand::SetInspectorTab { tab }],
        AppIntent::InspectorDesktopAppSelected { app } => {
            vec![AppCommand::SetInspectorDesktopApp { app }]
        }

        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
    }
}

/// Select-Tool: Node-Treffer startet Drag + Selektion, freie Fläche platziert (falls scharf).
fn map_select_press(state: &AppState, pos: glam::Vec2) -> Vec<AppCommand> {
    if let Some(node) = state.node_at(pos).and_then(|id| state.topology.node(id)) {
        return vec![
            AppCommand::BeginNodeDrag {
                node_id: node.id,
                offset: node.position - pos,
            },
            AppCommand::SelectNode {
                node_id: Some(node.id),
            },
        ];
    }

    match state.editor.placement_type {
        Some(device_type) => vec![
            AppCommand::AddNode {
                device_type,
                label: state.topology.next_label_for(device_type),
                position: pos,
            },
            AppCommand::SetPlacementType { device_type: None },
        ],
        None => Vec::new(),
    }
}

/// Connect-Tool: erster Treffer wählt die Quelle, zweiter Treffer legt den Link an.
fn map_connect_press(state: &AppState, pos: glam::Vec2) -> Vec<AppCommand> {
    let hit = state.node_at(pos);
    let source = state.editor.connect_source_node;

    match (source, hit) {
        (None, Some(node_id)) => vec![
            AppCommand::SetConnectSource {
                node_id: Some(node_id),
            },
            AppCommand::SelectNode {
                node_id: Some(node_id),
            },
        ],
        (Some(from), Some(to)) if from != to => vec![
            AppCommand::AddLink { from, to },
            AppCommand::SetConnectSource { node_id: None },
            AppCommand::SelectNode { node_id: Some(to) },
        ],
        (Some(_), _) => vec![AppCommand::SetConnectSource { node_id: None }],
        (None, None) => Vec::new(),
    }
}

#[cfg(test)]
mod tests;
