//! Canvas-Input-Handling: Maus-Events → AppIntent.
//!
//! Alle Positionen werden in lokale Canvas-Koordinaten umgerechnet
//! (`pointer - rect.min`), damit Topologie und Hit-Test unabhängig von
//! Panel-Layout und Fensterposition bleiben.

use super::keyboard::{self, KeyboardContext};
use crate::app::{AppIntent, AppState};
use crate::core::NodeId;
use glam::Vec2;

/// Ein Frame Zeiger-Zustand, bereits auf die Zeichenfläche bezogen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Zeigerposition lokal zur Zeichenfläche (falls bekannt)
    pub local_pos: Option<Vec2>,
    /// Primärtaste wurde in diesem Frame über der Zeichenfläche gedrückt
    pub pressed_inside: bool,
    /// Primärtaste wurde in diesem Frame losgelassen (egal wo)
    pub released: bool,
    /// Node unter einem Doppelklick auf der Zeichenfläche
    pub double_clicked_node: Option<NodeId>,
}

/// Verwaltet den Input-Zustand für die Zeichenfläche.
#[derive(Debug, Default)]
pub struct InputState {
    /// Letzte gemeldete Zeigerposition während eines Drags
    last_drag_pos: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus- und Tastatur-Interaktion auf
    /// der Zeichenfläche.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let mut events = vec![AppIntent::ViewportResized {
            size: [rect.width(), rect.height()],
        }];

        events.extend(keyboard::collect_keyboard_intents(
            ui,
            KeyboardContext {
                inspector_visible: state.ui.inspector.visible,
                placement_armed: state.editor.placement_type.is_some(),
                connect_source_set: state.editor.connect_source_node.is_some(),
                has_selection: state.selection.selected_node_id.is_some(),
                active_tool: state.editor.active_tool,
            },
        ));

        let (latest_pos, primary_pressed, primary_released) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
            )
        });

        let local_pos = latest_pos.map(|pos| {
            let local = pos - rect.min;
            Vec2::new(local.x, local.y)
        });

        let double_clicked_node = if response.double_clicked_by(egui::PointerButton::Primary) {
            local_pos.and_then(|pos| state.node_at(pos))
        } else {
            None
        };

        let sample = PointerSample {
            local_pos,
            pressed_inside: primary_pressed && response.hovered(),
            released: primary_released,
            double_clicked_node,
        };

        events.extend(self.pointer_intents(sample, state.canvas.is_dragging()));

        if response.hovered() {
            update_cursor(ui, state, local_pos);
        }

        events
    }

    /// Übersetzt einen Zeiger-Frame in Intents.
    ///
    /// Reihenfolge: Drücken, Bewegen, Loslassen, Doppelklick.
    /// `dragging` ist der Drag-Zustand vor diesem Frame.
    pub fn pointer_intents(&mut self, sample: PointerSample, dragging: bool) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let mut pressed = false;

        if sample.pressed_inside {
            if let Some(pos) = sample.local_pos {
                events.push(AppIntent::CanvasPointerPressed { pos });
                self.last_drag_pos = Some(pos);
                pressed = true;
            }
        }

        if dragging {
            if let Some(pos) = sample.local_pos {
                if self.last_drag_pos != Some(pos) {
                    events.push(AppIntent::CanvasPointerMoved { pos });
                    self.last_drag_pos = Some(pos);
                }
            }
        }

        // Drücken und Loslassen im selben Frame (kurzer Tap) muss den Drag schließen
        if sample.released {
            if dragging || pressed {
                events.push(AppIntent::CanvasPointerReleased);
            }
            self.last_drag_pos = None;
        }

        if let Some(node_id) = sample.double_clicked_node {
            events.push(AppIntent::SelectNodeRequested {
                node_id: Some(node_id),
            });
            events.push(AppIntent::InspectRequested);
        }

        events
    }
}

fn update_cursor(ui: &egui::Ui, state: &AppState, local_pos: Option<Vec2>) {
    let icon = if state.canvas.is_dragging() {
        egui::CursorIcon::Grabbing
    } else if local_pos.and_then(|pos| state.node_at(pos)).is_some() {
        egui::CursorIcon::Grab
    } else if state.editor.placement_type.is_some() {
        egui::CursorIcon::Crosshair
    } else {
        return;
    };
    ui.ctx().set_cursor_icon(icon);
}
