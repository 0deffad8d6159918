//! Toolbar: Geräte-Katalog (Kategorie-Tabs + Geräte-Kacheln) und Werkzeugauswahl.

use crate::app::{AppIntent, AppState, EditorTool};
use crate::core::catalog::{categories, devices_in};
use crate::shared::device_icon;

const ICON_SIZE: egui::Vec2 = egui::Vec2::new(28.0, 28.0);

/// Erstellt ein `egui::Image` aus einer `ImageSource` in der gewünschten Größe.
fn svg_icon(source: egui::ImageSource<'_>, size: egui::Vec2) -> egui::Image<'_> {
    egui::Image::new(source).fit_to_exact_size(size)
}

/// Hinweistext unter dem Katalog, abhängig vom Werkzeug-Zustand.
pub fn placement_hint(state: &AppState) -> String {
    if let Some(device_type) = state.editor.placement_type {
        return format!(
            "Click on the canvas to place a {}.",
            device_type.display_name()
        );
    }

    match state.editor.active_tool {
        EditorTool::Connect => match state
            .editor
            .connect_source_node
            .and_then(|id| state.topology.node(id))
        {
            Some(source) => format!("Click a second device to link it with {}.", source.label),
            None => "Click a device to start a link.".to_string(),
        },
        EditorTool::Select => "Select a device, then click on the canvas to place it.".to_string(),
    }
}

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active_category = state.ui.active_category;

    egui::TopBottomPanel::top("device_bar").show(ctx, |ui| {
        // ── Kategorie-Tabs ──
        ui.horizontal(|ui| {
            for category in categories() {
                if ui
                    .selectable_label(category == active_category, category.title())
                    .clicked()
                {
                    events.push(AppIntent::CatalogCategorySelected { category });
                }
            }
        });

        ui.separator();

        ui.horizontal(|ui| {
            // ── Geräte-Kacheln der aktiven Kategorie ──
            for descriptor in devices_in(active_category) {
                let armed = state.editor.placement_type == Some(descriptor.device_type);
                let button = egui::Button::image_and_text(
                    svg_icon(device_icon(descriptor.device_type), ICON_SIZE),
                    descriptor.name,
                )
                .selected(armed);

                if ui.add(button).on_hover_text(descriptor.detail).clicked() {
                    events.push(AppIntent::DeviceSelected {
                        device_type: descriptor.device_type,
                    });
                }
            }

            ui.separator();

            // ── Werkzeuge ──
            let active = state.editor.active_tool;
            if ui
                .selectable_label(active == EditorTool::Select, "Select (1)")
                .clicked()
            {
                events.push(AppIntent::SetEditorToolRequested {
                    tool: EditorTool::Select,
                });
            }
            if ui
                .selectable_label(active == EditorTool::Connect, "Connect (2)")
                .clicked()
            {
                events.push(AppIntent::SetEditorToolRequested {
                    tool: EditorTool::Connect,
                });
            }
        });

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(placement_hint(state)).weak());

            let can_cancel =
                state.editor.placement_type.is_some() || state.editor.connect_source_node.is_some();
            if can_cancel && ui.small_button("Cancel").clicked() {
                events.push(AppIntent::PlacementCancelled);
            }
        });
    });

    events
}

#[cfg(test)]
mod tests {
    use super::placement_hint;
    use crate::app::{AppState, EditorTool};
    use crate::core::DeviceType;
    use glam::Vec2;

    #[test]
    fn hint_names_armed_device() {
        let mut state = AppState::new();
        state.editor.placement_type = Some(DeviceType::AccessPoint);

        assert_eq!(
            placement_hint(&state),
            "Click on the canvas to place a Wireless AP."
        );
    }

    #[test]
    fn hint_in_connect_tool_names_source() {
        let mut state = AppState::new();
        let id = state
            .topology_mut()
            .add_node(DeviceType::Router, "R1", Vec2::ZERO);
        state.editor.active_tool = EditorTool::Connect;
        assert_eq!(placement_hint(&state), "Click a device to start a link.");

        state.editor.connect_source_node = Some(id);
        assert_eq!(
            placement_hint(&state),
            "Click a second device to link it with R1."
        );
    }
}
