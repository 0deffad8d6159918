use super::super::state::{EditorTool, InspectorTab};
use crate::core::{DeviceCategory, DeviceType, NodeId};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // ── Topology-Store ──────────────────────────────────────────
    /// Neuen Node anhängen (frische ID)
    AddNode {
        device_type: DeviceType,
        label: String,
        position: glam::Vec2,
    },
    /// Neuen Link anhängen (frische ID, keine Validierung)
    AddLink { from: NodeId, to: NodeId },
    /// Node neu positionieren (No-op bei unbekannter ID)
    MoveNode {
        node_id: NodeId,
        position: glam::Vec2,
    },
    /// Selektion setzen oder aufheben
    SelectNode { node_id: Option<NodeId> },
    /// Platzierungsmodus setzen oder aufheben
    SetPlacementType { device_type: Option<DeviceType> },

    // ── Canvas-Interaktion ──────────────────────────────────────
    /// Drag eines Nodes beginnen
    BeginNodeDrag {
        node_id: NodeId,
        offset: glam::Vec2,
    },
    /// Drag beenden
    EndNodeDrag,
    /// Startknoten des Connect-Tools setzen oder zurücksetzen
    SetConnectSource { node_id: Option<NodeId> },
    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },

    // ── Toolbar & Dialoge ───────────────────────────────────────
    /// Kategorie-Reiter setzen
    SetCatalogCategory { category: DeviceCategory },
    /// Inspector für den selektierten Node öffnen (nur PC/Laptop)
    OpenInspector,
    /// Inspector schließen und Dialog-Zustand verwerfen
    CloseInspector,
    /// Inspector-Reiter setzen
    SetInspectorTab { tab: InspectorTab },
    /// Desktop-App im Inspector setzen
    SetInspectorDesktopApp { app: Option<&'static str> },

    // ── Anwendung ───────────────────────────────────────────────
    /// Optionen speichern
    SaveOptions,
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Kurzname für die Status-Bar.
    pub fn name(&self) -> &'static str {
        match self {
            AppCommand::AddNode { .. } => "Add device",
            AppCommand::AddLink { .. } => "Add link",
            AppCommand::MoveNode { .. } => "Move device",
            AppCommand::SelectNode { node_id: Some(_) } => "Select",
            AppCommand::SelectNode { node_id: None } => "Deselect",
            AppCommand::SetPlacementType { device_type: Some(_) } => "Arm placement",
            AppCommand::SetPlacementType { device_type: None } => "Disarm placement",
            AppCommand::BeginNodeDrag { .. } => "Begin drag",
            AppCommand::EndNodeDrag => "End drag",
            AppCommand::SetConnectSource { .. } => "Connect source",
            AppCommand::SetEditorTool { .. } => "Switch tool",
            AppCommand::SetViewportSize { .. } => "Resize canvas",
            AppCommand::SetCatalogCategory { .. } => "Switch category",
            AppCommand::OpenInspector => "Open inspector",
            AppCommand::CloseInspector => "Close inspector",
            AppCommand::SetInspectorTab { .. } => "Inspector tab",
            AppCommand::SetInspectorDesktopApp { .. } => "Desktop app",
            AppCommand::SaveOptions => "Save options",
            AppCommand::RequestExit => "Exit",
        }
    }
}
