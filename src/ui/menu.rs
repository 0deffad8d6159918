//! Top-Menü (File, View, Help).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                let can_cancel = state.editor.placement_type.is_some()
                    || state.editor.connect_source_node.is_some();
                if ui
                    .add_enabled(can_cancel, egui::Button::new("Cancel Placement (Esc)"))
                    .clicked()
                {
                    events.push(AppIntent::PlacementCancelled);
                    ui.close();
                }

                ui.separator();

                if ui.button("Save Display Options").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("PacketFlow Studio v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
