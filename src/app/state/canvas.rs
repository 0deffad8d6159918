use crate::core::NodeId;

/// Laufender Drag eines Nodes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeDrag {
    /// Gezogener Node
    pub node_id: NodeId,
    /// Offset Node-Mitte minus Pointer beim Drag-Start, damit der Node nicht springt
    pub offset: glam::Vec2,
}

/// Canvas-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct CanvasState {
    /// Aktuelle Größe der Zeichenfläche in Pixeln
    pub viewport_size: [f32; 2],
    /// Aktiver Node-Drag (None = kein Drag)
    pub drag: Option<NodeDrag>,
}

impl CanvasState {
    /// Erstellt den Standard-Canvas-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: [0.0, 0.0],
            drag: None,
        }
    }

    /// Ob gerade ein Node gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
