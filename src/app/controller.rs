//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Store-Mutationen auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Topology-Store ===
            AppCommand::AddNode {
                device_type,
                label,
                position,
            } => handlers::topology::add_node(state, device_type, label, position),
            AppCommand::AddLink { from, to } => handlers::topology::add_link(state, from, to),
            AppCommand::MoveNode { node_id, position } => {
                handlers::topology::move_node(state, node_id, position)
            }
            AppCommand::SelectNode { node_id } => handlers::selection::select_node(state, node_id),
            AppCommand::SetPlacementType { device_type } => {
                handlers::canvas::set_placement_type(state, device_type)
            }

            // === Canvas ===
            AppCommand::BeginNodeDrag { node_id, offset } => {
                handlers::canvas::begin_drag(state, node_id, offset)
            }
            AppCommand::EndNodeDrag => handlers::canvas::end_drag(state),
            AppCommand::SetConnectSource { node_id } => {
                handlers::canvas::set_connect_source(state, node_id)
            }
            AppCommand::SetEditorTool { tool } => handlers::canvas::set_editor_tool(state, tool),
            AppCommand::SetViewportSize { size } => {
                handlers::canvas::set_viewport_size(state, size)
            }

            // === Toolbar & Dialoge ===
            AppCommand::SetCatalogCategory { category } => {
                handlers::dialog::set_catalog_category(state, category)
            }
            AppCommand::OpenInspector => handlers::dialog::open_inspector(state),
            AppCommand::CloseInspector => handlers::dialog::close_inspector(state),
            AppCommand::SetInspectorTab { tab } => handlers::dialog::set_inspector_tab(state, tab),
            AppCommand::SetInspectorDesktopApp { app } => {
                handlers::dialog::set_inspector_desktop_app(state, app)
            }

            // === Anwendung ===
            AppCommand::SaveOptions => handlers::dialog::save_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
