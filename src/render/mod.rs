//! Canvas-Rendering über den egui-Painter.
//!
//! Zeichnet jeden Frame komplett neu aus einem `RenderScene`-Snapshot:
//! Raster, Links, Pakete, Node-Glyphen (in dieser Reihenfolge).

mod grid;
mod links;
mod nodes;
mod packets;
mod types;

pub use crate::shared::RenderScene;
pub use grid::grid_lines;
pub use links::{resolve_link_segments, LinkSegment};
pub use nodes::{layout_node_glyph, GlyphHighlight, NodeGlyph};
pub use packets::PacketAnimator;
pub use types::to_color32;

use crate::shared::device_icon;
use anyhow::bail;
use glam::Vec2;
use types::to_screen;

/// Grafik-Backend, auf dem eframe die Zeichenfläche darstellt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderBackend {
    /// wgpu (Vulkan/Metal/DX12/GL)
    Wgpu,
    /// OpenGL über glow
    Glow,
}

impl RenderBackend {
    /// Kurzname für Status-Bar und Log.
    pub fn name(self) -> &'static str {
        match self {
            RenderBackend::Wgpu => "wgpu",
            RenderBackend::Glow => "glow",
        }
    }
}

/// Wählt das Backend anhand der verfügbaren Render-States.
///
/// Schlägt fehl, wenn weder wgpu noch glow initialisiert wurden.
pub fn select_backend(has_wgpu: bool, has_glow: bool) -> anyhow::Result<RenderBackend> {
    match (has_wgpu, has_glow) {
        (true, _) => Ok(RenderBackend::Wgpu),
        (false, true) => Ok(RenderBackend::Glow),
        (false, false) => bail!(
            "Zeichenfläche konnte nicht initialisiert werden: kein Grafik-Backend (wgpu/glow) verfügbar"
        ),
    }
}

/// Haupt-Renderer für die Topologie-Zeichenfläche.
///
/// Hält nur den Animationszustand; alle Topologie-Daten kommen pro Frame
/// aus der `RenderScene`.
pub struct CanvasRenderer {
    backend: RenderBackend,
    packets: PacketAnimator,
    segments: Vec<LinkSegment>,
}

impl CanvasRenderer {
    /// Erstellt den Renderer aus dem eframe-Kontext.
    pub fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        if let Some(render_state) = cc.wgpu_render_state.as_ref() {
            let info = render_state.adapter.get_info();
            log::info!("wgpu-Adapter: {} ({:?})", info.name, info.backend);
        }

        let backend = select_backend(cc.wgpu_render_state.is_some(), cc.gl.is_some())?;
        log::info!("Canvas-Renderer initialisiert ({:?})", backend);

        Ok(Self::with_backend(backend))
    }

    /// Erstellt einen Renderer für ein bereits bekanntes Backend.
    pub fn with_backend(backend: RenderBackend) -> Self {
        Self {
            backend,
            packets: PacketAnimator::new(),
            segments: Vec::new(),
        }
    }

    /// Aktives Backend.
    pub fn backend(&self) -> RenderBackend {
        self.backend
    }

    /// Ob Pakete laufen (dann braucht es kontinuierliche Repaints).
    pub fn is_animating(&self) -> bool {
        !self.segments.is_empty()
    }

    /// Schaltet die Animation weiter, ohne zu zeichnen.
    ///
    /// Liefert die aktuell zeichenbaren Link-Segmente.
    pub fn advance(&mut self, scene: &RenderScene, dt_seconds: f32) -> &[LinkSegment] {
        self.segments = resolve_link_segments(&scene.topology);
        self.packets.update(
            &scene.topology,
            &self.segments,
            dt_seconds,
            scene.options.packet_rate_per_frame,
        );
        &self.segments
    }

    /// Zeichnet die komplette Szene in `rect`.
    pub fn paint(&mut self, ui: &egui::Ui, rect: egui::Rect, scene: &RenderScene, dt_seconds: f32) {
        self.advance(scene, dt_seconds);

        let painter = ui.painter_at(rect);
        let options = &scene.options;
        let origin = rect.min;

        // 1. Raster
        let grid_stroke = egui::Stroke::new(1.0, to_color32(options.grid_color));
        for [a, b] in grid_lines(Vec2::from(scene.viewport_size), options.grid_size) {
            painter.line_segment([to_screen(origin, a), to_screen(origin, b)], grid_stroke);
        }

        // 2. Links
        let link_stroke = egui::Stroke::new(options.link_width, to_color32(options.link_color));
        for segment in &self.segments {
            painter.line_segment(
                [to_screen(origin, segment.start), to_screen(origin, segment.end)],
                link_stroke,
            );
        }

        // 3. Pakete
        let packet_color = to_color32(options.packet_color);
        for position in self.packets.packet_positions(&self.segments) {
            painter.circle_filled(to_screen(origin, position), options.packet_radius, packet_color);
        }

        // 4. Nodes (Listenreihenfolge → letzter liegt oben)
        let label_font = egui::FontId::proportional(options.label_font_size);
        let label_color = to_color32(options.label_color);
        for node in scene.topology.nodes_iter() {
            let highlight = GlyphHighlight {
                selected: scene.is_selected(node.id),
                connect_source: scene.connect_source_node == Some(node.id),
            };
            let glyph = layout_node_glyph(node, origin, options, highlight);

            let tint = egui::Color32::from_white_alpha((glyph.icon_alpha.clamp(0.0, 1.0) * 255.0) as u8);
            egui::Image::new(device_icon(node.device_type))
                .tint(tint)
                .paint_at(ui, glyph.icon);

            painter.rect_stroke(
                glyph.tile,
                options.node_corner_radius,
                glyph.stroke,
                egui::StrokeKind::Inside,
            );
            painter.text(
                glyph.label_pos,
                egui::Align2::CENTER_CENTER,
                &node.label,
                label_font.clone(),
                label_color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{select_backend, CanvasRenderer, RenderBackend};
    use crate::app::{build_render_scene, AppState};
    use crate::core::DeviceType;
    use glam::Vec2;

    #[test]
    fn backend_selection_prefers_wgpu() {
        assert_eq!(select_backend(true, true).unwrap(), RenderBackend::Wgpu);
        assert_eq!(select_backend(false, true).unwrap(), RenderBackend::Glow);
    }

    #[test]
    fn renderer_reports_its_backend() {
        let renderer = CanvasRenderer::with_backend(RenderBackend::Wgpu);
        assert_eq!(renderer.backend(), RenderBackend::Wgpu);
        assert_eq!(renderer.backend().name(), "wgpu");
        assert_eq!(RenderBackend::Glow.name(), "glow");
    }

    #[test]
    fn missing_backend_is_a_readable_error() {
        let err = select_backend(false, false).unwrap_err();
        assert!(err.to_string().contains("Grafik-Backend"));
    }

    #[test]
    fn animates_only_with_drawable_links() {
        let mut state = AppState::new();
        let a = state
            .topology_mut()
            .add_node(DeviceType::Router, "R1", Vec2::ZERO);
        let b = state
            .topology_mut()
            .add_node(DeviceType::Pc, "PC1", Vec2::new(80.0, 0.0));
        let mut renderer = CanvasRenderer::with_backend(RenderBackend::Glow);

        renderer.advance(&build_render_scene(&state, [800.0, 600.0]), 0.016);
        assert!(!renderer.is_animating());

        state.topology_mut().add_link(a, b);
        let segments = renderer
            .advance(&build_render_scene(&state, [800.0, 600.0]), 0.016)
            .len();
        assert_eq!(segments, 1);
        assert!(renderer.is_animating());

        // B direkt entfernen → Link hängt, wird übersprungen
        state.topology_mut().nodes.shift_remove(&b);
        let segments = renderer
            .advance(&build_render_scene(&state, [800.0, 600.0]), 0.016)
            .len();
        assert_eq!(segments, 0);
        assert!(!renderer.is_animating());
    }
}
