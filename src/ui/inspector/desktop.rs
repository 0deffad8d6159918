//! Desktop-Tab: App-Kacheln und das IP-Configuration-Formular.

use super::{combo, form_row};
use crate::app::{AppIntent, InspectorDraft};

/// Name der einzigen Desktop-App mit eigenem Formular.
pub const IP_CONFIGURATION: &str = "IP Configuration";

/// Alle Desktop-Kacheln in Anzeige-Reihenfolge.
pub const DESKTOP_APPS: [&str; 24] = [
    IP_CONFIGURATION,
    "Dial-up",
    "Terminal",
    "Command Prompt",
    "Web Browser",
    "PC Wireless",
    "VPN",
    "Traffic Generator",
    "MIB Browser",
    "IP Communicator",
    "Email",
    "PPPoE Dialer",
    "Text Editor",
    "Firewall",
    "IPv6 Firewall",
    "Netflow Collector",
    "IoT IDE",
    "TFTP Service",
    "Telnet / SSH Client",
    "Bluetooth",
    "IoT Monitor",
    "IoT IDE",
    "Supervisory Workstation",
    "User Apps Manager",
];

const TILE_COLUMNS: usize = 6;
const TILE_SIZE: egui::Vec2 = egui::Vec2::new(110.0, 56.0);
const INTERFACES: [&str; 2] = ["FastEthernet0", "Bluetooth"];
const DOT1X_METHODS: [&str; 3] = ["MD5", "PEAP", "TLS"];

pub(super) fn desktop_tab(
    ui: &mut egui::Ui,
    draft: &mut InspectorDraft,
    desktop_app: Option<&'static str>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    match desktop_app {
        None => {
            egui::Grid::new("desktop_tiles")
                .spacing([8.0, 8.0])
                .show(ui, |ui| {
                    for (index, app) in DESKTOP_APPS.iter().enumerate() {
                        if ui
                            .add_sized(TILE_SIZE, egui::Button::new(*app))
                            .clicked()
                        {
                            events.push(AppIntent::InspectorDesktopAppSelected { app: Some(*app) });
                        }
                        if (index + 1) % TILE_COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });
        }
        Some(app) => {
            ui.horizontal(|ui| {
                if ui.button("Back").clicked() {
                    events.push(AppIntent::InspectorDesktopAppSelected { app: None });
                }
                ui.heading(app);
            });
            ui.separator();

            if app == IP_CONFIGURATION {
                ip_configuration(ui, draft);
            } else {
                ui.label(
                    egui::RichText::new(format!("{app} is not available on this device."))
                        .weak(),
                );
            }
        }
    }

    events
}

fn ip_configuration(ui: &mut egui::Ui, draft: &mut InspectorDraft) {
    ui.group(|ui| {
        ui.strong("Interface");
        combo(ui, "ip_interface", &mut draft.ip_interface, &INTERFACES);
    });

    ui.group(|ui| {
        ui.strong("IP Configuration");
        ui.horizontal(|ui| {
            ui.radio_value(&mut draft.ip_dhcp, true, "DHCP");
            ui.radio_value(&mut draft.ip_dhcp, false, "Static");
        });
        egui::Grid::new("ip_v4").num_columns(2).show(ui, |ui| {
            form_row(ui, "IPv4 Address", |ui| {
                ui.text_edit_singleline(&mut draft.ipv4_address);
            });
            form_row(ui, "Subnet Mask", |ui| {
                ui.text_edit_singleline(&mut draft.subnet_mask);
            });
            form_row(ui, "Default Gateway", |ui| {
                ui.text_edit_singleline(&mut draft.ip_gateway);
            });
            form_row(ui, "DNS Server", |ui| {
                ui.text_edit_singleline(&mut draft.ip_dns);
            });
        });
    });

    ui.group(|ui| {
        ui.strong("IPv6 Configuration");
        ui.horizontal(|ui| {
            ui.radio_value(&mut draft.ip6_automatic, true, "Automatic");
            ui.radio_value(&mut draft.ip6_automatic, false, "Static");
        });
        egui::Grid::new("ip_v6").num_columns(2).show(ui, |ui| {
            form_row(ui, "IPv6 Address", |ui| {
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut draft.ipv6_address);
                    ui.label("/");
                    ui.add(egui::TextEdit::singleline(&mut draft.ipv6_prefix).desired_width(40.0));
                });
            });
            form_row(ui, "Link Local Address", |ui| {
                ui.text_edit_singleline(&mut draft.link_local_address);
            });
            form_row(ui, "Default Gateway", |ui| {
                ui.text_edit_singleline(&mut draft.ip6_gateway);
            });
            form_row(ui, "DNS Server", |ui| {
                ui.text_edit_singleline(&mut draft.ip6_dns);
            });
        });
    });

    ui.group(|ui| {
        ui.strong("802.1X");
        ui.checkbox(&mut draft.use_dot1x, "Use 802.1X Security");
        egui::Grid::new("ip_dot1x").num_columns(2).show(ui, |ui| {
            form_row(ui, "Authentication", |ui| {
                combo(ui, "dot1x_method", &mut draft.dot1x_method, &DOT1X_METHODS);
            });
            form_row(ui, "Username", |ui| {
                ui.text_edit_singleline(&mut draft.dot1x_username);
            });
            form_row(ui, "Password", |ui| {
                ui.add(egui::TextEdit::singleline(&mut draft.dot1x_password).password(true));
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::{DESKTOP_APPS, IP_CONFIGURATION};

    #[test]
    fn desktop_offers_24_tiles_starting_with_ip_configuration() {
        assert_eq!(DESKTOP_APPS.len(), 24);
        assert_eq!(DESKTOP_APPS[0], IP_CONFIGURATION);
        assert!(DESKTOP_APPS.contains(&"Telnet / SSH Client"));
    }
}
