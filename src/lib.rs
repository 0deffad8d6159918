//! PacketFlow Studio Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, UiState,
};
pub use core::{
    DeviceCategory, DeviceDescriptor, DeviceType, LinkId, NodeId, Topology, TopologyLink,
    TopologyNode, DEVICE_CATALOG,
};
pub use shared::{EditorOptions, RenderScene};
