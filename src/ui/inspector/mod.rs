//! Geräte-Inspector (Modal für PCs und Laptops).
//!
//! Fünf Tabs mit statischen Panels und einem dialog-lokalen Formular-Entwurf.
//! Nichts davon wird in die Topologie zurückgeschrieben.

mod config;
mod desktop;
mod panels;

pub use desktop::{DESKTOP_APPS, IP_CONFIGURATION};
pub use panels::{ATTRIBUTES, PHYSICAL_MODULES};

use crate::app::{AppIntent, InspectorTab, UiState};

/// Zeigt den Inspector (falls sichtbar) und gibt erzeugte Events zurück.
pub fn show_inspector(ctx: &egui::Context, ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let inspector = &mut ui_state.inspector;

    if !inspector.visible {
        return events;
    }

    let mut open = true;
    let active_tab = inspector.active_tab;
    let desktop_app = inspector.desktop_app;
    let node_label = inspector.node_label.clone();

    egui::Window::new(node_label)
        .id(egui::Id::new("device_inspector"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([760.0, 540.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Tab-Leiste ──
            ui.horizontal(|ui| {
                for tab in InspectorTab::ALL {
                    if ui.selectable_label(tab == active_tab, tab.title()).clicked()
                        && tab != active_tab
                    {
                        events.push(AppIntent::InspectorTabSelected { tab });
                    }
                }
            });
            ui.separator();

            let Some(draft) = inspector.draft.as_mut() else {
                log::warn!("Inspector sichtbar ohne Formular-Entwurf");
                return;
            };

            egui::ScrollArea::vertical().show(ui, |ui| match active_tab {
                InspectorTab::Physical => panels::physical_tab(ui),
                InspectorTab::Config => config::config_tab(ui, draft),
                InspectorTab::Desktop => {
                    events.extend(desktop::desktop_tab(ui, draft, desktop_app))
                }
                InspectorTab::Programming => panels::programming_tab(ui),
                InspectorTab::Attributes => panels::attributes_tab(ui),
            });
        });

    if !open {
        events.push(AppIntent::InspectorClosed);
    }

    events
}

/// Beschriftete Formularzeile in einem `egui::Grid`.
pub(super) fn form_row(ui: &mut egui::Ui, label: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.label(label);
    add_contents(ui);
    ui.end_row();
}

/// Auswahlliste für String-Felder des Entwurfs.
pub(super) fn combo(ui: &mut egui::Ui, id: &str, value: &mut String, options: &[&str]) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, option.to_string(), *option);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::show_inspector;
    use crate::app::{AppIntent, InspectorTab, UiState};

    fn run_frame(ui_state: &mut UiState) -> Vec<AppIntent> {
        let ctx = egui::Context::default();
        let mut events = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            events = show_inspector(ctx, ui_state);
        });
        events
    }

    #[test]
    fn hidden_inspector_emits_nothing() {
        let mut ui_state = UiState::new();
        assert!(run_frame(&mut ui_state).is_empty());
    }

    #[test]
    fn every_tab_renders_without_events() {
        let mut ui_state = UiState::new();
        ui_state.inspector.open("PC1");

        for tab in InspectorTab::ALL {
            ui_state.inspector.active_tab = tab;
            assert!(run_frame(&mut ui_state).is_empty(), "Tab {:?}", tab);
        }
    }

    #[test]
    fn ip_configuration_form_renders() {
        let mut ui_state = UiState::new();
        ui_state.inspector.open("LT1");
        ui_state.inspector.active_tab = InspectorTab::Desktop;
        ui_state.inspector.desktop_app = Some(super::IP_CONFIGURATION);

        assert!(run_frame(&mut ui_state).is_empty());
        // Entwurf bleibt unverändert ohne Eingaben
        let draft = ui_state.inspector.draft.as_ref().expect("Entwurf erwartet");
        assert_eq!(draft.ip_gateway, "0.0.0.0");
    }
}
