//! Hintergrund-Raster der Zeichenfläche.

use glam::Vec2;

/// Kleinster gezeichneter Rasterabstand in Pixeln.
pub const MIN_GRID_SPACING: f32 = crate::shared::options::MIN_GRID_SIZE;

/// Berechnet die Rasterlinien für einen Viewport (lokale Koordinaten).
///
/// Vertikale Linien bei `x = 0, spacing, 2*spacing, … <= width`,
/// danach horizontale Linien analog für die Höhe. Positive Abstände unter
/// `MIN_GRID_SPACING` werden darauf angehoben.
pub fn grid_lines(size: Vec2, spacing: f32) -> Vec<[Vec2; 2]> {
    if !spacing.is_finite() || spacing <= 0.0 || !size.is_finite() || size.x < 0.0 || size.y < 0.0 {
        return Vec::new();
    }
    let spacing = spacing.max(MIN_GRID_SPACING);

    let columns = (size.x / spacing).floor() as usize + 1;
    let rows = (size.y / spacing).floor() as usize + 1;
    let mut lines = Vec::with_capacity(columns + rows);

    for i in 0..columns {
        let x = i as f32 * spacing;
        lines.push([Vec2::new(x, 0.0), Vec2::new(x, size.y)]);
    }
    for i in 0..rows {
        let y = i as f32 * spacing;
        lines.push([Vec2::new(0.0, y), Vec2::new(size.x, y)]);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::{grid_lines, MIN_GRID_SPACING};
    use approx::assert_relative_eq;
    use glam::Vec2;

    #[test]
    fn covers_viewport_inclusive_of_origin() {
        let lines = grid_lines(Vec2::new(800.0, 600.0), 32.0);

        // 0..=768 → 25 Spalten, 0..=576 → 19 Zeilen
        assert_eq!(lines.len(), 25 + 19);
        assert_relative_eq!(lines[0][0].x, 0.0);
        assert_relative_eq!(lines[24][0].x, 768.0);
        assert_relative_eq!(lines[24][1].y, 600.0);
        assert_relative_eq!(lines[43][0].y, 576.0);
        assert_relative_eq!(lines[43][1].x, 800.0);
    }

    #[test]
    fn exact_multiple_includes_far_edge() {
        let lines = grid_lines(Vec2::new(64.0, 32.0), 32.0);
        assert_eq!(lines.len(), 3 + 2);
        assert_relative_eq!(lines[2][0].x, 64.0);
    }

    #[test]
    fn invalid_spacing_yields_no_lines() {
        assert!(grid_lines(Vec2::new(100.0, 100.0), 0.0).is_empty());
        assert!(grid_lines(Vec2::new(100.0, 100.0), -4.0).is_empty());
        assert!(grid_lines(Vec2::new(100.0, 100.0), f32::NAN).is_empty());
        assert!(grid_lines(Vec2::new(100.0, 100.0), f32::INFINITY).is_empty());
    }

    #[test]
    fn tiny_spacing_is_raised_to_minimum() {
        let lines = grid_lines(Vec2::new(800.0, 600.0), 1e-7);

        // 800 / 4 + 1 Spalten, 600 / 4 + 1 Zeilen
        assert_eq!(lines.len(), 201 + 151);
        assert_relative_eq!(lines[1][0].x, MIN_GRID_SPACING);
    }
}
