use crate::core::NodeId;

/// Auswahlbezogener Anwendungszustand
///
/// Es ist höchstens ein Node gleichzeitig selektiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Aktuell selektierter Node
    pub selected_node_id: Option<NodeId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_node_id: None,
        }
    }

    /// Ob genau dieser Node selektiert ist.
    #[inline]
    pub fn is_selected(&self, node_id: NodeId) -> bool {
        self.selected_node_id == Some(node_id)
    }
}
