//! Geräte-Typen der Topologie (geschlossene Menge mit elf Varianten).

use std::fmt;

/// Typ eines platzierbaren Netzwerkgeräts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// Router (Routing, NAT, ACL)
    Router,
    /// Layer-2-Switch
    SwitchL2,
    /// Layer-3-Switch
    SwitchL3,
    /// Firewall
    Firewall,
    /// Server
    Server,
    /// Arbeitsplatz-PC
    Pc,
    /// Laptop
    Laptop,
    /// Wireless Access Point
    AccessPoint,
    /// Externe Cloud
    Cloud,
    /// Upstream-Provider
    Isp,
    /// Hub (Shared Media)
    Hub,
}

impl DeviceType {
    /// Alle Geräte-Typen in Katalog-unabhängiger, fester Reihenfolge.
    pub const ALL: [DeviceType; 11] = [
        DeviceType::Router,
        DeviceType::SwitchL2,
        DeviceType::SwitchL3,
        DeviceType::Firewall,
        DeviceType::Server,
        DeviceType::Pc,
        DeviceType::Laptop,
        DeviceType::AccessPoint,
        DeviceType::Cloud,
        DeviceType::Isp,
        DeviceType::Hub,
    ];

    /// Stabiler Tag (z.B. `switch-l2`), wie er in Logs und Konfiguration auftaucht.
    pub fn tag(self) -> &'static str {
        match self {
            DeviceType::Router => "router",
            DeviceType::SwitchL2 => "switch-l2",
            DeviceType::SwitchL3 => "switch-l3",
            DeviceType::Firewall => "firewall",
            DeviceType::Server => "server",
            DeviceType::Pc => "pc",
            DeviceType::Laptop => "laptop",
            DeviceType::AccessPoint => "ap",
            DeviceType::Cloud => "cloud",
            DeviceType::Isp => "isp",
            DeviceType::Hub => "hub",
        }
    }

    /// Anzeigename für Toolbar und Hinweise.
    pub fn display_name(self) -> &'static str {
        match self {
            DeviceType::Router => "Router",
            DeviceType::SwitchL2 => "L2 Switch",
            DeviceType::SwitchL3 => "L3 Switch",
            DeviceType::Firewall => "Firewall",
            DeviceType::Server => "Server",
            DeviceType::Pc => "PC",
            DeviceType::Laptop => "Laptop",
            DeviceType::AccessPoint => "Wireless AP",
            DeviceType::Cloud => "Cloud",
            DeviceType::Isp => "ISP",
            DeviceType::Hub => "Hub",
        }
    }

    /// Präfix für automatisch vergebene Node-Labels (`R1`, `SW2`, …).
    pub fn label_prefix(self) -> &'static str {
        match self {
            DeviceType::Router => "R",
            DeviceType::SwitchL2 => "SW",
            DeviceType::SwitchL3 => "L3",
            DeviceType::Firewall => "FW",
            DeviceType::Server => "SV",
            DeviceType::Pc => "PC",
            DeviceType::Laptop => "LT",
            DeviceType::AccessPoint => "AP",
            DeviceType::Cloud => "CL",
            DeviceType::Isp => "ISP",
            DeviceType::Hub => "HB",
        }
    }

    /// Ob der Inspector-Dialog für diesen Typ geöffnet werden kann.
    pub fn is_inspectable(self) -> bool {
        matches!(self, DeviceType::Pc | DeviceType::Laptop)
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tags_are_unique() {
        let tags: HashSet<&str> = DeviceType::ALL.iter().map(|t| t.tag()).collect();
        assert_eq!(tags.len(), 11);
    }

    #[test]
    fn only_end_hosts_are_inspectable() {
        let inspectable: Vec<DeviceType> = DeviceType::ALL
            .into_iter()
            .filter(|t| t.is_inspectable())
            .collect();
        assert_eq!(inspectable, vec![DeviceType::Pc, DeviceType::Laptop]);
    }
}
