//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, EditorTool};

/// Relevanter Editor-Zustand für die Shortcut-Auswertung.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct KeyboardContext {
    pub inspector_visible: bool,
    pub placement_armed: bool,
    pub connect_source_set: bool,
    pub has_selection: bool,
    pub active_tool: EditorTool,
}

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, ctx: KeyboardContext) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (key_escape_pressed, key_1_pressed, key_2_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Num1),
            i.key_pressed(egui::Key::Num2),
        )
    });

    if key_escape_pressed {
        if ctx.inspector_visible {
            events.push(AppIntent::InspectorClosed);
        } else if ctx.placement_armed || ctx.connect_source_set {
            events.push(AppIntent::PlacementCancelled);
        } else if ctx.has_selection {
            events.push(AppIntent::SelectNodeRequested { node_id: None });
        }
    }

    // Tool-Wechsel nicht, solange ein Textfeld Eingaben erwartet
    if ctx.inspector_visible || ui.ctx().wants_keyboard_input() {
        return events;
    }

    if key_1_pressed && ctx.active_tool != EditorTool::Select {
        events.push(AppIntent::SetEditorToolRequested {
            tool: EditorTool::Select,
        });
    }

    if key_2_pressed && ctx.active_tool != EditorTool::Connect {
        events.push(AppIntent::SetEditorToolRequested {
            tool: EditorTool::Connect,
        });
    }

    events
}
