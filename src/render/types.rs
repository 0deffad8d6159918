//! Hilfstypen und Konvertierungen für das Canvas-Rendering.

use glam::Vec2;

/// Wandelt eine RGBA-Farbe (0..1, sRGB, nicht vormultipliziert) in `Color32`.
pub fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Verschiebt einen lokalen Canvas-Punkt in Bildschirmkoordinaten.
pub fn to_screen(origin: egui::Pos2, local: Vec2) -> egui::Pos2 {
    origin + egui::vec2(local.x, local.y)
}

#[cfg(test)]
mod tests {
    use super::{to_color32, to_screen};
    use glam::Vec2;

    #[test]
    fn opaque_color_converts_exactly() {
        let color = to_color32([0.886, 0.910, 0.941, 1.0]);
        assert_eq!(color, egui::Color32::from_rgb(0xe2, 0xe8, 0xf0));
    }

    #[test]
    fn alpha_is_carried_over() {
        let color = to_color32([0.580, 0.639, 0.722, 0.8]);
        assert_eq!(color.a(), 204);
    }

    #[test]
    fn screen_position_is_offset_by_origin() {
        let pos = to_screen(egui::pos2(5.0, 7.0), Vec2::new(100.0, 100.0));
        assert_eq!(pos, egui::pos2(105.0, 107.0));
    }
}
