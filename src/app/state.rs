//! Application State — zentrale Datenhaltung.

mod app_state;
mod canvas;
mod dialogs;
mod editor;
mod selection;

pub use app_state::AppState;
pub use canvas::{CanvasState, NodeDrag};
pub use dialogs::{InspectorDialogState, InspectorDraft, InspectorTab, UiState};
pub use editor::{EditorTool, EditorToolState};
pub use selection::SelectionState;
