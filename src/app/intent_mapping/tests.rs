use crate::app::{AppCommand, AppIntent, AppState, EditorTool, NodeDrag};
use crate::core::{DeviceType, NodeId};
use glam::Vec2;

use super::map_intent_to_commands;

fn state_with_router_at(pos: Vec2) -> (AppState, NodeId) {
    let mut state = AppState::new();
    let id = state.topology_mut().add_node(DeviceType::Router, "R1", pos);
    (state, id)
}

#[test]
fn press_on_empty_canvas_with_placement_adds_node_and_disarms() {
    let mut state = AppState::new();
    state.editor.placement_type = Some(DeviceType::Firewall);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasPointerPressed {
            pos: Vec2::new(40.0, 60.0),
        },
    );

    assert_eq!(
        commands,
        vec![
            AppCommand::AddNode {
                device_type: DeviceType::Firewall,
                label: "FW1".to_string(),
                position: Vec2::new(40.0, 60.0),
            },
            AppCommand::SetPlacementType { device_type: None },
        ]
    );
}

#[test]
fn press_on_empty_canvas_without_placement_does_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasPointerPressed {
            pos: Vec2::new(40.0, 60.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn press_on_node_begins_drag_with_offset_and_selects() {
    let (mut state, id) = state_with_router_at(Vec2::new(100.0, 100.0));
    // Platzierung ist scharf, aber ein Node-Treffer hat Vorrang
    state.editor.placement_type = Some(DeviceType::Pc);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasPointerPressed {
            pos: Vec2::new(110.0, 95.0),
        },
    );

    assert_eq!(
        commands,
        vec![
            AppCommand::BeginNodeDrag {
                node_id: id,
                offset: Vec2::new(-10.0, 5.0),
            },
            AppCommand::SelectNode { node_id: Some(id) },
        ]
    );
}

#[test]
fn move_while_dragging_applies_offset() {
    let (mut state, id) = state_with_router_at(Vec2::new(100.0, 100.0));
    state.canvas.drag = Some(NodeDrag {
        node_id: id,
        offset: Vec2::new(-10.0, 5.0),
    });

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasPointerMoved {
            pos: Vec2::new(200.0, 50.0),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::MoveNode {
            node_id: id,
            position: Vec2::new(190.0, 55.0),
        }]
    );
}

#[test]
fn move_and_release_without_drag_map_to_nothing() {
    let state = AppState::new();

    assert!(map_intent_to_commands(
        &state,
        AppIntent::CanvasPointerMoved {
            pos: Vec2::new(1.0, 1.0)
        }
    )
    .is_empty());
    assert!(map_intent_to_commands(&state, AppIntent::CanvasPointerReleased).is_empty());
}

#[test]
fn inspect_request_maps_to_open_inspector() {
    let (mut state, id) = state_with_router_at(Vec2::new(50.0, 50.0));
    state.selection.selected_node_id = Some(id);

    assert_eq!(
        map_intent_to_commands(&state, AppIntent::InspectRequested),
        vec![AppCommand::OpenInspector]
    );
}

#[test]
fn device_selected_in_connect_tool_switches_back_to_select() {
    let mut state = AppState::new();
    state.editor.active_tool = EditorTool::Connect;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DeviceSelected {
            device_type: DeviceType::Cloud,
        },
    );

    assert_eq!(
        commands,
        vec![
            AppCommand::SetEditorTool {
                tool: EditorTool::Select
            },
            AppCommand::SetPlacementType {
                device_type: Some(DeviceType::Cloud)
            },
        ]
    );
}

#[test]
fn connect_tool_second_hit_adds_link() {
    let (mut state, a) = state_with_router_at(Vec2::new(100.0, 100.0));
    let b = state
        .topology_mut()
        .add_node(DeviceType::SwitchL2, "SW1", Vec2::new(300.0, 100.0));
    state.editor.active_tool = EditorTool::Connect;
    state.editor.connect_source_node = Some(a);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasPointerPressed {
            pos: Vec2::new(300.0, 100.0),
        },
    );

    assert_eq!(commands[0], AppCommand::AddLink { from: a, to: b });
    assert_eq!(commands[1], AppCommand::SetConnectSource { node_id: None });
}

#[test]
fn connect_tool_click_on_source_or_empty_resets_source() {
    let (mut state, a) = state_with_router_at(Vec2::new(100.0, 100.0));
    state.editor.active_tool = EditorTool::Connect;
    state.editor.connect_source_node = Some(a);

    for pos in [Vec2::new(100.0, 100.0), Vec2::new(600.0, 600.0)] {
        let commands = map_intent_to_commands(&state, AppIntent::CanvasPointerPressed { pos });
        assert_eq!(commands, vec![AppCommand::SetConnectSource { node_id: None }]);
    }
}

#[test]
fn placement_cancel_also_resets_connect_source() {
    let (mut state, id) = state_with_router_at(Vec2::ZERO);
    state.editor.placement_type = Some(DeviceType::Pc);
    state.editor.connect_source_node = Some(id);

    let commands = map_intent_to_commands(&state, AppIntent::PlacementCancelled);

    assert_eq!(
        commands,
        vec![
            AppCommand::SetPlacementType { device_type: None },
            AppCommand::SetConnectSource { node_id: None },
        ]
    );
}

#[test]
fn unchanged_viewport_size_maps_to_nothing() {
    let mut state = AppState::new();
    let size = [1024.0, 640.0];

    assert_eq!(
        map_intent_to_commands(&state, AppIntent::ViewportResized { size }),
        vec![AppCommand::SetViewportSize { size }]
    );

    state.canvas.viewport_size = size;
    assert!(map_intent_to_commands(&state, AppIntent::ViewportResized { size }).is_empty());
}
