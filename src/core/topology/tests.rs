use super::*;
use std::collections::HashSet;

const TILE: Vec2 = Vec2::new(60.0, 52.0);

fn two_routers() -> (Topology, NodeId, NodeId) {
    let mut topology = Topology::new();
    let a = topology.add_node(DeviceType::Router, "R1", Vec2::new(100.0, 100.0));
    let b = topology.add_node(DeviceType::Router, "R2", Vec2::new(300.0, 100.0));
    (topology, a, b)
}

#[test]
fn test_add_node_assigns_unique_ids() {
    let mut topology = Topology::new();
    let mut seen = HashSet::new();

    for i in 0..50 {
        let before = topology.node_count();
        let id = topology.add_node(DeviceType::Pc, format!("PC{i}"), Vec2::splat(i as f32));
        assert_eq!(topology.node_count(), before + 1);
        assert!(seen.insert(id), "ID {id} doppelt vergeben");
    }
}

#[test]
fn test_add_node_skips_ids_inserted_from_outside() {
    let mut topology = Topology::new();
    topology.nodes.insert(
        NodeId(1),
        TopologyNode::new(NodeId(1), "X", DeviceType::Hub, Vec2::ZERO),
    );

    let id = topology.add_node(DeviceType::Hub, "HB2", Vec2::ZERO);

    assert_ne!(id, NodeId(1));
    assert_eq!(topology.node_count(), 2);
}

#[test]
fn test_move_node_updates_only_position() {
    let (mut topology, a, _) = two_routers();
    let before = topology.node(a).cloned().expect("Node A erwartet");

    assert!(topology.move_node(a, Vec2::new(5.0, 7.0)));

    let after = topology.node(a).expect("Node A erwartet");
    assert_eq!(after.position, Vec2::new(5.0, 7.0));
    assert_eq!(after.id, before.id);
    assert_eq!(after.label, before.label);
    assert_eq!(after.device_type, before.device_type);
}

#[test]
fn test_move_missing_node_is_noop() {
    let (mut topology, _, _) = two_routers();
    let before = topology.nodes.clone();

    assert!(!topology.move_node(NodeId(999), Vec2::new(1.0, 1.0)));

    assert_eq!(topology.nodes, before);
}

#[test]
fn test_add_link_accepts_self_and_duplicate_links() {
    let (mut topology, a, b) = two_routers();

    let l1 = topology.add_link(a, b);
    let l2 = topology.add_link(a, b);
    let l3 = topology.add_link(a, a);

    assert_eq!(topology.link_count(), 3);
    assert_ne!(l1, l2);
    assert_ne!(l2, l3);
    assert_eq!(topology.link_count_of(a), 3);
    assert_eq!(topology.link_count_of(b), 2);
}

#[test]
fn test_link_endpoints_missing_node_returns_none() {
    let (mut topology, a, b) = two_routers();
    topology.add_link(a, b);

    let link = topology.links[0];
    assert_eq!(
        topology.link_endpoints(&link),
        Some((Vec2::new(100.0, 100.0), Vec2::new(300.0, 100.0)))
    );

    topology.nodes.shift_remove(&b);
    assert_eq!(topology.link_endpoints(&link), None);
}

#[test]
fn test_node_at_hits_tile_and_prefers_topmost() {
    let mut topology = Topology::new();
    let lower = topology.add_node(DeviceType::Server, "SV1", Vec2::new(100.0, 100.0));
    let upper = topology.add_node(DeviceType::Server, "SV2", Vec2::new(120.0, 100.0));

    // Überlappungsbereich → zuletzt gezeichneter Node gewinnt
    assert_eq!(topology.node_at(Vec2::new(110.0, 100.0), TILE), Some(upper));
    // Nur in der unteren Kachel
    assert_eq!(topology.node_at(Vec2::new(75.0, 80.0), TILE), Some(lower));
    // Knapp außerhalb (Kachel ist 52 hoch → ±26)
    assert_eq!(topology.node_at(Vec2::new(100.0, 127.0), TILE), None);
}

#[test]
fn test_next_label_counts_per_type() {
    let mut topology = Topology::new();
    assert_eq!(topology.next_label_for(DeviceType::SwitchL2), "SW1");

    topology.add_node(DeviceType::SwitchL2, "SW1", Vec2::ZERO);
    topology.add_node(DeviceType::Router, "R1", Vec2::ZERO);

    assert_eq!(topology.next_label_for(DeviceType::SwitchL2), "SW2");
    assert_eq!(topology.next_label_for(DeviceType::Isp), "ISP1");
    assert_eq!(topology.next_label_for(DeviceType::Router), "R2");
}

#[test]
fn test_ids_display_with_prefix() {
    assert_eq!(NodeId(4).to_string(), "N4");
    assert_eq!(LinkId(2).to_string(), "L2");
}
