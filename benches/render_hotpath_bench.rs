//! Benchmark für den Render-Hotpath.
//!
//! Misst die Datenaufbereitung pro Frame:
//! - Link-Auflösung (IndexMap-Lookups pro Endpunkt)
//! - Paket-Fortschritt inkl. Abgleich der Fortschrittstabelle
//! - Hit-Test (oberster Node zuerst)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use packetflow_studio::render::{resolve_link_segments, PacketAnimator};
use packetflow_studio::{DeviceType, Topology};
use std::hint::black_box;

fn build_topology(node_count: usize) -> Topology {
    let mut topology = Topology::new();
    let mut ids = Vec::with_capacity(node_count);

    for i in 0..node_count {
        let x = (i % 40) as f32 * 80.0;
        let y = (i / 40) as f32 * 70.0;
        let device_type = DeviceType::ALL[i % DeviceType::ALL.len()];
        let label = topology.next_label_for(device_type);
        ids.push(topology.add_node(device_type, label, Vec2::new(x, y)));
    }

    // Kette plus jede 7. Querverbindung
    for pair in ids.windows(2) {
        topology.add_link(pair[0], pair[1]);
    }
    for i in (0..ids.len()).step_by(7) {
        let j = (i * 13 + 5) % ids.len();
        topology.add_link(ids[i], ids[j]);
    }

    topology
}

fn bench_link_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("link_resolution");

    for &node_count in &[10usize, 100, 1000] {
        let topology = build_topology(node_count);
        group.bench_with_input(
            BenchmarkId::new("resolve_link_segments", node_count),
            &topology,
            |b, topology| b.iter(|| black_box(resolve_link_segments(black_box(topology)))),
        );
    }

    group.finish();
}

fn bench_packet_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("packet_animator");

    for &node_count in &[10usize, 100, 1000] {
        let topology = build_topology(node_count);
        let segments = resolve_link_segments(&topology);
        let mut animator = PacketAnimator::new();
        animator.update(&topology, &segments, 0.0, 0.0025);

        group.bench_function(BenchmarkId::new("update_and_positions", node_count), |b| {
            b.iter(|| {
                animator.update(&topology, &segments, black_box(1.0 / 60.0), 0.0025);
                black_box(animator.packet_positions(&segments))
            })
        });
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let topology = build_topology(1000);
    let tile = Vec2::new(60.0, 52.0);

    c.bench_function("node_at_1000", |b| {
        b.iter(|| black_box(topology.node_at(black_box(Vec2::new(1555.0, 1050.0)), tile)))
    });
}

criterion_group!(benches, bench_link_resolution, bench_packet_update, bench_hit_test);
criterion_main!(benches);
