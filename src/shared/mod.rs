//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod icons;
pub mod options;
mod render_scene;

pub use icons::device_icon;
pub use options::EditorOptions;
pub use render_scene::RenderScene;
