//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Topologie, Selektion, Werkzeuge, Dialoge).
pub mod state;

pub use crate::core::{DeviceType, NodeId, Topology};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, CanvasState, EditorTool, EditorToolState, InspectorDialogState, InspectorDraft,
    InspectorTab, NodeDrag, SelectionState, UiState,
};
