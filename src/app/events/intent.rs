use super::super::state::{EditorTool, InspectorTab};
use crate::core::{DeviceCategory, DeviceType, NodeId};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Zeichenfläche hat eine neue Größe
    ViewportResized { size: [f32; 2] },

    /// Pointer auf der Zeichenfläche gedrückt (Canvas-Koordinaten)
    CanvasPointerPressed { pos: glam::Vec2 },
    /// Pointer bewegt (Canvas-Koordinaten)
    CanvasPointerMoved { pos: glam::Vec2 },
    /// Pointer losgelassen (innerhalb oder außerhalb der Zeichenfläche)
    CanvasPointerReleased,

    /// Gerät im Katalog gewählt → Platzierungsmodus
    DeviceSelected { device_type: DeviceType },
    /// Platzierungsmodus abbrechen
    PlacementCancelled,
    /// Kategorie-Reiter der Toolbar gewechselt
    CatalogCategorySelected { category: DeviceCategory },
    /// Editor-Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },

    /// Node selektieren oder Selektion aufheben
    SelectNodeRequested { node_id: Option<NodeId> },
    /// Link zwischen zwei Nodes anlegen
    AddLinkRequested { from: NodeId, to: NodeId },

    /// Inspector für den selektierten Node anfordern (ohne Payload, z.B. nach Doppelklick)
    InspectRequested,
    /// Inspector schließen
    InspectorClosed,
    /// Inspector-Reiter wechseln
    InspectorTabSelected { tab: InspectorTab },
    /// Desktop-App im Inspector öffnen (None = zurück zur Übersicht)
    InspectorDesktopAppSelected { app: Option<&'static str> },

    /// Aktuelle Darstellungs-Optionen in die TOML-Datei schreiben
    SaveOptionsRequested,
}
