//! Geräte-Icons (SVG, compile-time eingebettet).
//!
//! Wird von der Toolbar und vom Canvas-Renderer gleichermaßen genutzt.

use crate::core::DeviceType;

/// Liefert die SVG-Quelle für einen Geräte-Typ.
///
/// Gerastert wird über den SVG-Loader von `egui_extras`.
pub fn device_icon(device_type: DeviceType) -> egui::ImageSource<'static> {
    match device_type {
        DeviceType::Router => egui::include_image!("../../assets/devices/router.svg"),
        DeviceType::SwitchL2 => egui::include_image!("../../assets/devices/switch-l2.svg"),
        DeviceType::SwitchL3 => egui::include_image!("../../assets/devices/switch-l3.svg"),
        DeviceType::Firewall => egui::include_image!("../../assets/devices/firewall.svg"),
        DeviceType::Server => egui::include_image!("../../assets/devices/server.svg"),
        DeviceType::Pc => egui::include_image!("../../assets/devices/pc.svg"),
        DeviceType::Laptop => egui::include_image!("../../assets/devices/laptop.svg"),
        DeviceType::AccessPoint => egui::include_image!("../../assets/devices/ap.svg"),
        DeviceType::Cloud => egui::include_image!("../../assets/devices/cloud.svg"),
        DeviceType::Isp => egui::include_image!("../../assets/devices/isp.svg"),
        DeviceType::Hub => egui::include_image!("../../assets/devices/hub.svg"),
    }
}
