//! Handler für Toolbar-, Dialog-State und Anwendungssteuerung.

use crate::app::{AppState, InspectorTab};
use crate::core::DeviceCategory;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Wechselt den Kategorie-Reiter der Geräte-Toolbar.
pub fn set_catalog_category(state: &mut AppState, category: DeviceCategory) {
    state.ui.active_category = category;
}

/// Öffnet den Inspector für den selektierten Node, sofern es ein PC/Laptop ist.
pub fn open_inspector(state: &mut AppState) {
    let Some(node) = state.selected_node() else {
        log::debug!("Inspector: kein Node selektiert");
        return;
    };
    if !node.device_type.is_inspectable() {
        log::debug!("Inspector: {} ({}) hat keine Konfiguration", node.id, node.device_type);
        return;
    }
    let label = node.label.clone();
    state.ui.inspector.open(&label);
    log::info!("Inspector geöffnet für {}", label);
}

/// Schließt den Inspector; Formulareingaben werden verworfen.
pub fn close_inspector(state: &mut AppState) {
    state.ui.inspector.close();
}

/// Wechselt den Inspector-Reiter.
pub fn set_inspector_tab(state: &mut AppState, tab: InspectorTab) {
    if state.ui.inspector.visible {
        state.ui.inspector.active_tab = tab;
    }
}

/// Öffnet eine Desktop-App im Inspector (None = zurück zur Übersicht).
pub fn set_inspector_desktop_app(state: &mut AppState, app: Option<&'static str>) {
    if state.ui.inspector.visible {
        state.ui.inspector.desktop_app = app;
    }
}

/// Schreibt die aktuellen Optionen in die TOML-Datei neben der Binary.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
