//! Zentrale Konfiguration für PacketFlow Studio.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Darstellungswerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Raster ──────────────────────────────────────────────────────────

/// Abstand der Hintergrund-Rasterlinien in Pixeln.
pub const GRID_SIZE: f32 = 32.0;
/// Kleinster zulässiger Rasterabstand aus der Optionen-Datei.
pub const MIN_GRID_SIZE: f32 = 4.0;
/// Rasterfarbe (RGBA: #1f2937, 25 %).
pub const GRID_COLOR: [f32; 4] = [0.122, 0.161, 0.216, 0.25];

// ── Links & Pakete ──────────────────────────────────────────────────

/// Linienstärke der Links in Pixeln.
pub const LINK_WIDTH: f32 = 2.0;
/// Link-Farbe (RGBA: #94a3b8, 80 %).
pub const LINK_COLOR: [f32; 4] = [0.580, 0.639, 0.722, 0.8];
/// Paket-Fortschritt pro 60-Hz-Frame.
pub const PACKET_RATE_PER_FRAME: f32 = 0.0025;
/// Radius des Paket-Punkts in Pixeln.
pub const PACKET_RADIUS: f32 = 4.5;
/// Paket-Farbe (RGBA: #f8fafc).
pub const PACKET_COLOR: [f32; 4] = [0.973, 0.980, 0.988, 1.0];

// ── Node-Kacheln ───────────────────────────────────────────────────

/// Kachelgröße [Breite, Höhe] in Pixeln (gleichzeitig Hitbox).
pub const NODE_TILE_SIZE: [f32; 2] = [60.0, 52.0];
/// Eckenradius der Kachel.
pub const NODE_CORNER_RADIUS: f32 = 14.0;
/// Rahmenstärke nicht selektierter Nodes.
pub const NODE_STROKE_WIDTH: f32 = 2.0;
/// Rahmenfarbe nicht selektierter Nodes (RGBA: #475569, 70 %).
pub const NODE_STROKE_COLOR: [f32; 4] = [0.278, 0.333, 0.412, 0.7];
/// Rahmenstärke selektierter Nodes.
pub const NODE_SELECTED_STROKE_WIDTH: f32 = 3.0;
/// Rahmenfarbe selektierter Nodes (RGBA: #f8fafc, 90 %).
pub const NODE_SELECTED_STROKE_COLOR: [f32; 4] = [0.973, 0.980, 0.988, 0.9];
/// Rahmenfarbe des Connect-Tool-Startknotens (RGBA: Amber).
pub const NODE_CONNECT_SOURCE_COLOR: [f32; 4] = [0.984, 0.749, 0.141, 0.9];
/// Kantenlänge des Geräte-Icons in Pixeln.
pub const NODE_ICON_SIZE: f32 = 32.0;
/// Icon-Deckkraft selektierter Nodes.
pub const NODE_ICON_ALPHA_SELECTED: f32 = 1.0;
/// Icon-Deckkraft nicht selektierter Nodes.
pub const NODE_ICON_ALPHA: f32 = 0.6;

// ── Labels ──────────────────────────────────────────────────────────

/// Schriftgröße der Node-Labels.
pub const LABEL_FONT_SIZE: f32 = 12.0;
/// Vertikaler Abstand Label ↔ Node-Mitte.
pub const LABEL_OFFSET_Y: f32 = 34.0;
/// Label-Farbe (RGBA: #e2e8f0).
pub const LABEL_COLOR: [f32; 4] = [0.886, 0.910, 0.941, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Darstellungs-Optionen.
/// Wird als `packetflow_studio.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Rasterabstand in Pixeln
    pub grid_size: f32,
    /// Rasterfarbe (RGBA)
    pub grid_color: [f32; 4],

    // ── Links ───────────────────────────────────────────────────
    /// Linienstärke der Links
    pub link_width: f32,
    /// Link-Farbe
    pub link_color: [f32; 4],

    // ── Pakete ──────────────────────────────────────────────────
    /// Fortschritt pro 60-Hz-Frame (0.0025 ≈ 6,7 s pro Durchlauf)
    pub packet_rate_per_frame: f32,
    /// Radius des Paket-Punkts
    pub packet_radius: f32,
    /// Paket-Farbe
    pub packet_color: [f32; 4],

    // ── Nodes ───────────────────────────────────────────────────
    /// Kachelgröße [Breite, Höhe] (auch Hitbox)
    pub node_tile_size: [f32; 2],
    /// Eckenradius der Kachel
    pub node_corner_radius: f32,
    /// Rahmenstärke normal
    pub node_stroke_width: f32,
    /// Rahmenfarbe normal
    pub node_stroke_color: [f32; 4],
    /// Rahmenstärke selektiert
    pub node_selected_stroke_width: f32,
    /// Rahmenfarbe selektiert
    pub node_selected_stroke_color: [f32; 4],
    /// Rahmenfarbe des Connect-Tool-Startknotens
    pub node_connect_source_color: [f32; 4],
    /// Icon-Kantenlänge
    pub node_icon_size: f32,
    /// Icon-Deckkraft selektiert
    pub node_icon_alpha_selected: f32,
    /// Icon-Deckkraft normal
    pub node_icon_alpha: f32,

    // ── Labels ──────────────────────────────────────────────────
    /// Schriftgröße
    pub label_font_size: f32,
    /// Abstand unter der Node-Mitte
    pub label_offset_y: f32,
    /// Label-Farbe
    pub label_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            grid_color: GRID_COLOR,

            link_width: LINK_WIDTH,
            link_color: LINK_COLOR,

            packet_rate_per_frame: PACKET_RATE_PER_FRAME,
            packet_radius: PACKET_RADIUS,
            packet_color: PACKET_COLOR,

            node_tile_size: NODE_TILE_SIZE,
            node_corner_radius: NODE_CORNER_RADIUS,
            node_stroke_width: NODE_STROKE_WIDTH,
            node_stroke_color: NODE_STROKE_COLOR,
            node_selected_stroke_width: NODE_SELECTED_STROKE_WIDTH,
            node_selected_stroke_color: NODE_SELECTED_STROKE_COLOR,
            node_connect_source_color: NODE_CONNECT_SOURCE_COLOR,
            node_icon_size: NODE_ICON_SIZE,
            node_icon_alpha_selected: NODE_ICON_ALPHA_SELECTED,
            node_icon_alpha: NODE_ICON_ALPHA,

            label_font_size: LABEL_FONT_SIZE,
            label_offset_y: LABEL_OFFSET_Y,
            label_color: LABEL_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt unbrauchbare Werte aus der Datei durch die Standardwerte.
    pub fn sanitized(mut self) -> Self {
        if !self.grid_size.is_finite() || self.grid_size < MIN_GRID_SIZE {
            log::warn!(
                "grid_size = {} ungültig (min. {}), verwende {}",
                self.grid_size,
                MIN_GRID_SIZE,
                GRID_SIZE
            );
            self.grid_size = GRID_SIZE;
        }
        if !self.packet_rate_per_frame.is_finite() {
            log::warn!("packet_rate_per_frame ungültig, verwende {}", PACKET_RATE_PER_FRAME);
            self.packet_rate_per_frame = PACKET_RATE_PER_FRAME;
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("packetflow_studio"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("packetflow_studio.toml")
    }

    /// Kachelgröße als Vektor (für Hit-Tests).
    pub fn tile_size(&self) -> glam::Vec2 {
        glam::Vec2::from(self.node_tile_size)
    }
}
