//! PacketFlow Studio.
//!
//! Offline-Editor für Netzwerk-Topologien: Geräte platzieren, verbinden,
//! verschieben und inspizieren, mit animierten Paketen auf den Links.

use eframe::egui;
use packetflow_studio::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("PacketFlow Studio v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("PacketFlow Studio"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "PacketFlow Studio",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(EditorApp::new(cc)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    /// Renderer oder lesbare Fehlermeldung, falls die Initialisierung scheiterte
    canvas: Result<render::CanvasRenderer, String>,
    input: ui::InputState,
}

impl EditorApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        let canvas = render::CanvasRenderer::new(cc).map_err(|e| {
            log::error!("Canvas-Renderer nicht verfügbar: {:#}", e);
            format!("{:#}", e)
        });
        match &canvas {
            Ok(renderer) => state.ui.renderer_backend = Some(renderer.backend().name()),
            Err(message) => state.ui.renderer_error = Some(message.clone()),
        }

        Self {
            state,
            controller: AppController::new(),
            canvas,
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_inspector(ctx, &mut self.state.ui));

        let dt_seconds = ctx.input(|i| i.stable_dt);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_rgb(0x0f, 0x17, 0x2a)))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let renderer = match self.canvas.as_mut() {
                    Ok(renderer) => renderer,
                    Err(message) => {
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            message.as_str(),
                            egui::FontId::proportional(16.0),
                            egui::Color32::from_rgb(0xf8, 0x71, 0x71),
                        );
                        return;
                    }
                };

                events.extend(
                    self.input
                        .collect_canvas_events(ui, &response, &self.state),
                );

                let scene = self
                    .controller
                    .build_render_scene(&self.state, [rect.width(), rect.height()]);
                renderer.paint(ui, rect, &scene, dt_seconds);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        let animating = self
            .canvas
            .as_ref()
            .is_ok_and(|renderer| renderer.is_animating());

        if has_meaningful_events
            || animating
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.inspector.visible
        {
            ctx.request_repaint();
        }
    }
}
