//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, EditorTool};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Devices: {} | Links: {}",
                state.node_count(),
                state.link_count()
            ));

            ui.separator();

            match state.selected_node() {
                Some(node) => ui.label(format!(
                    "Selected: {} ({}, {} link(s))",
                    node.label,
                    node.device_type.display_name(),
                    state.topology.link_count_of(node.id)
                )),
                None => ui.label("Selected: none"),
            };

            ui.separator();

            let tool_name = match state.editor.active_tool {
                EditorTool::Select => "Select",
                EditorTool::Connect => "Connect",
            };
            ui.label(format!("Tool: {}", tool_name));

            if let Some(device_type) = state.editor.placement_type {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("Placing: {}", device_type.display_name()))
                        .color(egui::Color32::YELLOW),
                );
            }

            if let Some(command) = state.command_log.last() {
                ui.separator();
                ui.label(format!("Last: {}", command.name()));
            }

            if let Some(ref error) = state.ui.renderer_error {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", error)).color(egui::Color32::RED));
            }

            // FPS und Backend (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
                if let Some(backend) = state.ui.renderer_backend {
                    ui.separator();
                    ui.label(format!("Renderer: {}", backend));
                }
            });
        });
    });
}
