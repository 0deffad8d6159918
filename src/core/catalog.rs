//! Statischer Geräte-Katalog für die Toolbar.

use super::DeviceType;

/// Kategorie-Reiter der Toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceCategory {
    /// Router, Switches, Firewall, Hub
    #[default]
    NetworkDevices,
    /// PCs, Laptops, Server
    EndDevices,
    /// Access Points
    Wireless,
    /// Cloud und Provider
    WanCloud,
}

impl DeviceCategory {
    /// Beschriftung des Kategorie-Reiters.
    pub fn title(self) -> &'static str {
        match self {
            DeviceCategory::NetworkDevices => "Network Devices",
            DeviceCategory::EndDevices => "End Devices",
            DeviceCategory::Wireless => "Wireless",
            DeviceCategory::WanCloud => "WAN/Cloud",
        }
    }
}

/// Eintrag im Geräte-Katalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub device_type: DeviceType,
    pub name: &'static str,
    pub detail: &'static str,
    pub category: DeviceCategory,
}

const fn entry(
    device_type: DeviceType,
    name: &'static str,
    detail: &'static str,
    category: DeviceCategory,
) -> DeviceDescriptor {
    DeviceDescriptor {
        device_type,
        name,
        detail,
        category,
    }
}

/// Alle platzierbaren Geräte in Anzeige-Reihenfolge.
pub static DEVICE_CATALOG: [DeviceDescriptor; 11] = [
    entry(DeviceType::Router, "Router", "Routing, NAT, ACL", DeviceCategory::NetworkDevices),
    entry(DeviceType::SwitchL2, "L2 Switch", "VLANs, L2 forwarding", DeviceCategory::NetworkDevices),
    entry(DeviceType::SwitchL3, "L3 Switch", "Inter-VLAN routing", DeviceCategory::NetworkDevices),
    entry(DeviceType::Firewall, "Firewall", "Policy, NAT, filtering", DeviceCategory::NetworkDevices),
    entry(DeviceType::Hub, "Hub", "Legacy shared media", DeviceCategory::NetworkDevices),
    entry(DeviceType::Pc, "PC", "End host", DeviceCategory::EndDevices),
    entry(DeviceType::Laptop, "Laptop", "Portable host", DeviceCategory::EndDevices),
    entry(DeviceType::Server, "Server", "DHCP/DNS/Web", DeviceCategory::EndDevices),
    entry(DeviceType::AccessPoint, "Wireless AP", "Wi-Fi access", DeviceCategory::Wireless),
    entry(DeviceType::Cloud, "Cloud", "External network", DeviceCategory::WanCloud),
    entry(DeviceType::Isp, "ISP", "Upstream provider", DeviceCategory::WanCloud),
];

/// Kategorien in Reihenfolge ihres ersten Auftretens im Katalog.
pub fn categories() -> Vec<DeviceCategory> {
    let mut result = Vec::new();
    for descriptor in &DEVICE_CATALOG {
        if !result.contains(&descriptor.category) {
            result.push(descriptor.category);
        }
    }
    result
}

/// Geräte einer Kategorie.
pub fn devices_in(category: DeviceCategory) -> impl Iterator<Item = &'static DeviceDescriptor> {
    DEVICE_CATALOG
        .iter()
        .filter(move |descriptor| descriptor.category == category)
}
