//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        topology: state.topology.clone(),
        viewport_size,
        selected_node_id: state.selection.selected_node_id,
        connect_source_node: state.editor.connect_source_node,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::DeviceType;
    use std::sync::Arc;

    #[test]
    fn build_shares_topology_without_copy() {
        let mut state = AppState::new();
        let id = state
            .topology_mut()
            .add_node(DeviceType::Hub, "HB1", glam::Vec2::new(1.0, 2.0));
        state.selection.selected_node_id = Some(id);

        let scene = build(&state, [800.0, 600.0]);

        assert!(Arc::ptr_eq(&scene.topology, &state.topology));
        assert_eq!(scene.selected_node_id, Some(id));
        assert!(scene.is_selected(id));
        assert_eq!(scene.connect_source_node, None);
    }

    #[test]
    fn scene_is_a_snapshot_of_the_build_time() {
        let mut state = AppState::new();
        let id = state
            .topology_mut()
            .add_node(DeviceType::Pc, "PC1", glam::Vec2::ZERO);
        let scene = build(&state, [800.0, 600.0]);

        state
            .topology_mut()
            .move_node(id, glam::Vec2::new(50.0, 50.0));

        let in_scene = scene.topology.node(id).expect("Node im Snapshot erwartet");
        assert_eq!(in_scene.position, glam::Vec2::ZERO);
        let in_state = state.topology.node(id).expect("Node im State erwartet");
        assert_eq!(in_state.position, glam::Vec2::new(50.0, 50.0));
    }
}
