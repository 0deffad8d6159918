use crate::core::DeviceCategory;

/// Reiter des Inspector-Dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectorTab {
    #[default]
    Physical,
    Config,
    Desktop,
    Programming,
    Attributes,
}

impl InspectorTab {
    /// Alle Reiter in Anzeige-Reihenfolge.
    pub const ALL: [InspectorTab; 5] = [
        InspectorTab::Physical,
        InspectorTab::Config,
        InspectorTab::Desktop,
        InspectorTab::Programming,
        InspectorTab::Attributes,
    ];

    /// Reiter-Beschriftung
    pub fn title(self) -> &'static str {
        match self {
            InspectorTab::Physical => "Physical",
            InspectorTab::Config => "Config",
            InspectorTab::Desktop => "Desktop",
            InspectorTab::Programming => "Programming",
            InspectorTab::Attributes => "Attributes",
        }
    }
}

/// Arbeitskopie der Formularfelder im Inspector.
///
/// Wird beim Öffnen neu angelegt und beim Schließen verworfen; nichts davon
/// fließt zurück in die Topologie.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorDraft {
    // Config → Global Settings
    pub display_name: String,
    pub interface: String,
    pub ipv4_dhcp: bool,
    pub ipv4_gateway: String,
    pub ipv4_dns: String,
    pub ipv6_automatic: bool,
    pub ipv6_gateway: String,
    pub ipv6_dns: String,
    pub ntp_server: String,
    pub ntp_auth_enabled: bool,
    pub ntp_password: String,
    pub ptp_profile: String,
    pub ptp_enabled: bool,
    // Desktop → IP Configuration
    pub ip_interface: String,
    pub ip_dhcp: bool,
    pub ipv4_address: String,
    pub subnet_mask: String,
    pub ip_gateway: String,
    pub ip_dns: String,
    pub ip6_automatic: bool,
    pub ipv6_address: String,
    pub ipv6_prefix: String,
    pub link_local_address: String,
    pub ip6_gateway: String,
    pub ip6_dns: String,
    pub use_dot1x: bool,
    pub dot1x_method: String,
    pub dot1x_username: String,
    pub dot1x_password: String,
}

impl InspectorDraft {
    /// Standardwerte für ein Gerät mit dem gegebenen Label.
    pub fn for_label(label: &str) -> Self {
        Self {
            display_name: label.to_string(),
            interface: "FastEthernet0".to_string(),
            ipv4_dhcp: true,
            ipv4_gateway: String::new(),
            ipv4_dns: String::new(),
            ipv6_automatic: true,
            ipv6_gateway: String::new(),
            ipv6_dns: String::new(),
            ntp_server: String::new(),
            ntp_auth_enabled: true,
            ntp_password: String::new(),
            ptp_profile: "Power".to_string(),
            ptp_enabled: true,
            ip_interface: "FastEthernet0".to_string(),
            ip_dhcp: true,
            ipv4_address: String::new(),
            subnet_mask: String::new(),
            ip_gateway: "0.0.0.0".to_string(),
            ip_dns: "0.0.0.0".to_string(),
            ip6_automatic: true,
            ipv6_address: String::new(),
            ipv6_prefix: String::new(),
            link_local_address: "FE80::2D0:BAFF:FE59:8E51".to_string(),
            ip6_gateway: String::new(),
            ip6_dns: String::new(),
            use_dot1x: false,
            dot1x_method: "MD5".to_string(),
            dot1x_username: String::new(),
            dot1x_password: String::new(),
        }
    }
}

/// Zustand des Inspector-Dialogs (PC/Laptop)
#[derive(Debug, Clone, Default)]
pub struct InspectorDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Label des inspizierten Geräts (Fenstertitel)
    pub node_label: String,
    /// Aktiver Reiter
    pub active_tab: InspectorTab,
    /// Geöffnete Desktop-App (None = Kachelübersicht)
    pub desktop_app: Option<&'static str>,
    /// Formular-Arbeitskopie (None solange geschlossen)
    pub draft: Option<InspectorDraft>,
}

impl InspectorDialogState {
    /// Erstellt einen geschlossenen Dialog-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Öffnet den Dialog frisch für ein Gerät.
    pub fn open(&mut self, label: &str) {
        *self = Self {
            visible: true,
            node_label: label.to_string(),
            active_tab: InspectorTab::Physical,
            desktop_app: None,
            draft: Some(InspectorDraft::for_label(label)),
        };
    }

    /// Schließt den Dialog und verwirft jeglichen Dialog-Zustand.
    pub fn close(&mut self) {
        *self = Self::new();
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Aktiver Kategorie-Reiter der Geräte-Toolbar
    pub active_category: DeviceCategory,
    /// Inspector-Dialog
    pub inspector: InspectorDialogState,
    /// Fehlermeldung, falls der Renderer nicht initialisiert werden konnte
    pub renderer_error: Option<String>,
    /// Name des aktiven Grafik-Backends (für die Status-Bar)
    pub renderer_backend: Option<&'static str>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            active_category: DeviceCategory::NetworkDevices,
            inspector: InspectorDialogState::new(),
            renderer_error: None,
            renderer_backend: None,
        }
    }
}
