use crate::core::{DeviceType, NodeId};

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Geräte platzieren, selektieren und verschieben
    #[default]
    Select,
    /// Links zwischen zwei Geräten ziehen
    Connect,
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Geräte-Typ, der beim nächsten Klick auf freie Fläche platziert wird
    pub placement_type: Option<DeviceType>,
    /// Quell-Node für Connect-Tool (wartet auf Ziel)
    pub connect_source_node: Option<NodeId>,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool, keine Platzierung).
    pub fn new() -> Self {
        Self {
            active_tool: EditorTool::Select,
            placement_type: None,
            connect_source_node: None,
        }
    }
}
