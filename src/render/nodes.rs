//! Layout der Node-Glyphen (Kachel, Icon, Label).

use super::types::{to_color32, to_screen};
use crate::core::TopologyNode;
use crate::shared::EditorOptions;

/// Darstellungszustand eines Nodes im aktuellen Frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphHighlight {
    /// Node ist selektiert
    pub selected: bool,
    /// Node ist Startpunkt des Connect-Tools
    pub connect_source: bool,
}

/// Fertig berechnete Bildschirmgeometrie eines Nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeGlyph {
    /// Abgerundete Kachel (zugleich Hitbox)
    pub tile: egui::Rect,
    /// Icon-Fläche, zentriert auf dem Node
    pub icon: egui::Rect,
    /// Mittelpunkt des Labels
    pub label_pos: egui::Pos2,
    /// Rahmen der Kachel
    pub stroke: egui::Stroke,
    /// Icon-Deckkraft
    pub icon_alpha: f32,
}

/// Berechnet die Glyph-Geometrie für einen Node.
///
/// `origin` ist die linke obere Ecke der Zeichenfläche in Bildschirmkoordinaten.
pub fn layout_node_glyph(
    node: &TopologyNode,
    origin: egui::Pos2,
    options: &EditorOptions,
    highlight: GlyphHighlight,
) -> NodeGlyph {
    let center = to_screen(origin, node.position);
    let [tile_w, tile_h] = options.node_tile_size;

    let stroke = if highlight.connect_source {
        egui::Stroke::new(
            options.node_selected_stroke_width,
            to_color32(options.node_connect_source_color),
        )
    } else if highlight.selected {
        egui::Stroke::new(
            options.node_selected_stroke_width,
            to_color32(options.node_selected_stroke_color),
        )
    } else {
        egui::Stroke::new(options.node_stroke_width, to_color32(options.node_stroke_color))
    };

    let icon_alpha = if highlight.selected {
        options.node_icon_alpha_selected
    } else {
        options.node_icon_alpha
    };

    NodeGlyph {
        tile: egui::Rect::from_center_size(center, egui::vec2(tile_w, tile_h)),
        icon: egui::Rect::from_center_size(
            center,
            egui::vec2(options.node_icon_size, options.node_icon_size),
        ),
        label_pos: center + egui::vec2(0.0, options.label_offset_y),
        stroke,
        icon_alpha,
    }
}

#[cfg(test)]
mod tests {
    use super::{layout_node_glyph, GlyphHighlight};
    use crate::core::{DeviceType, NodeId, TopologyNode};
    use crate::render::types::to_color32;
    use crate::shared::EditorOptions;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn router_at(x: f32, y: f32) -> TopologyNode {
        TopologyNode::new(NodeId(1), "R1", DeviceType::Router, Vec2::new(x, y))
    }

    #[test]
    fn tile_is_centered_on_node_in_screen_space() {
        let options = EditorOptions::default();
        let glyph = layout_node_glyph(
            &router_at(100.0, 100.0),
            egui::pos2(10.0, 20.0),
            &options,
            GlyphHighlight::default(),
        );

        assert_relative_eq!(glyph.tile.min.x, 80.0);
        assert_relative_eq!(glyph.tile.min.y, 94.0);
        assert_relative_eq!(glyph.tile.width(), 60.0);
        assert_relative_eq!(glyph.tile.height(), 52.0);
        assert_relative_eq!(glyph.icon.width(), 32.0);
        assert_eq!(glyph.icon.center(), glyph.tile.center());
        assert_relative_eq!(glyph.label_pos.y, 154.0);
    }

    #[test]
    fn selection_switches_stroke_and_icon_alpha() {
        let options = EditorOptions::default();
        let node = router_at(0.0, 0.0);

        let normal = layout_node_glyph(&node, egui::Pos2::ZERO, &options, GlyphHighlight::default());
        let selected = layout_node_glyph(
            &node,
            egui::Pos2::ZERO,
            &options,
            GlyphHighlight {
                selected: true,
                connect_source: false,
            },
        );

        assert_relative_eq!(normal.stroke.width, 2.0);
        assert_relative_eq!(normal.icon_alpha, 0.6);
        assert_relative_eq!(selected.stroke.width, 3.0);
        assert_relative_eq!(selected.icon_alpha, 1.0);
        assert_eq!(
            selected.stroke.color,
            to_color32(options.node_selected_stroke_color)
        );
    }

    #[test]
    fn connect_source_uses_its_own_color() {
        let options = EditorOptions::default();
        let glyph = layout_node_glyph(
            &router_at(0.0, 0.0),
            egui::Pos2::ZERO,
            &options,
            GlyphHighlight {
                selected: true,
                connect_source: true,
            },
        );

        assert_eq!(glyph.stroke.color, to_color32(options.node_connect_source_color));
    }
}
