//! UI-Komponenten: Menü, Toolbar, Canvas-Input, Inspector, Status-Bar.

pub mod input;
pub mod inspector;
mod keyboard;
/// UI-Layer mit egui
///
/// Alle Komponenten lesen den `AppState` und liefern `AppIntent`s zurück;
/// mutiert wird ausschließlich über den Controller (Ausnahme: Formular-Entwurf
/// im Inspector, der dialog-lokal ist).
pub mod menu;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use inspector::show_inspector;
pub use menu::render_menu;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
