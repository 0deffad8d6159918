//! Auflösung der Links zu zeichenbaren Segmenten.

use crate::core::{LinkId, Topology};
use glam::Vec2;

/// Ein zeichenbarer Link mit aufgelösten Endpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkSegment {
    /// ID des Links
    pub link_id: LinkId,
    /// Position des Links in der Link-Liste (für die Paket-Startphase)
    pub index: usize,
    /// Position des `from`-Nodes
    pub start: Vec2,
    /// Position des `to`-Nodes
    pub end: Vec2,
}

impl LinkSegment {
    /// Punkt auf dem Segment bei Fortschritt `t` (0 = start, 1 = end).
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.start.lerp(self.end, t)
    }
}

/// Löst alle Links in Listenreihenfolge auf.
///
/// Links mit fehlendem Endpunkt werden stillschweigend übersprungen.
pub fn resolve_link_segments(topology: &Topology) -> Vec<LinkSegment> {
    let mut segments = Vec::with_capacity(topology.link_count());
    let mut dangling = 0usize;

    for (index, link) in topology.links.iter().enumerate() {
        match topology.link_endpoints(link) {
            Some((start, end)) => segments.push(LinkSegment {
                link_id: link.id,
                index,
                start,
                end,
            }),
            None => dangling += 1,
        }
    }

    if dangling > 0 {
        log::trace!("{} Link(s) ohne Endpunkt übersprungen", dangling);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::resolve_link_segments;
    use crate::core::{DeviceType, Topology};
    use approx::assert_relative_eq;
    use glam::Vec2;

    #[test]
    fn resolves_endpoints_in_link_order() {
        let mut topology = Topology::new();
        let a = topology.add_node(DeviceType::Router, "R1", Vec2::new(0.0, 0.0));
        let b = topology.add_node(DeviceType::Pc, "PC1", Vec2::new(100.0, 50.0));
        let first = topology.add_link(a, b);
        let second = topology.add_link(b, a);

        let segments = resolve_link_segments(&topology);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].link_id, first);
        assert_eq!(segments[0].index, 0);
        assert_eq!(segments[0].end, Vec2::new(100.0, 50.0));
        assert_eq!(segments[1].link_id, second);
        assert_eq!(segments[1].start, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn skips_link_whose_endpoint_is_missing() {
        let mut topology = Topology::new();
        let a = topology.add_node(DeviceType::Router, "R1", Vec2::ZERO);
        let b = topology.add_node(DeviceType::Hub, "HB1", Vec2::new(10.0, 0.0));
        let c = topology.add_node(DeviceType::Pc, "PC1", Vec2::new(0.0, 10.0));
        topology.add_link(a, b);
        let kept = topology.add_link(a, c);
        topology.nodes.shift_remove(&b);

        let segments = resolve_link_segments(&topology);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].link_id, kept);
        // Index bleibt die Listenposition, nicht die Position unter den Gezeichneten
        assert_eq!(segments[0].index, 1);
    }

    #[test]
    fn self_link_is_a_degenerate_segment() {
        let mut topology = Topology::new();
        let a = topology.add_node(DeviceType::Cloud, "CL1", Vec2::new(5.0, 5.0));
        topology.add_link(a, a);

        let segments = resolve_link_segments(&topology);
        assert_eq!(segments.len(), 1);
        assert_relative_eq!(segments[0].point_at(0.7).x, 5.0);
    }

    #[test]
    fn point_at_interpolates_linearly() {
        let mut topology = Topology::new();
        let a = topology.add_node(DeviceType::Router, "R1", Vec2::new(0.0, 0.0));
        let b = topology.add_node(DeviceType::Router, "R2", Vec2::new(40.0, -20.0));
        topology.add_link(a, b);

        let segment = resolve_link_segments(&topology)[0];
        let mid = segment.point_at(0.25);
        assert_relative_eq!(mid.x, 10.0);
        assert_relative_eq!(mid.y, -5.0);
    }
}
