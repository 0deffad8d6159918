//! Config-Tab: globale Einstellungen (Gateway/DNS, Uhr, NTP, PTP).

use super::{combo, form_row};
use crate::app::InspectorDraft;

const INTERFACES: [&str; 2] = ["FastEthernet0", "Bluetooth"];
const PTP_PROFILES: [&str; 3] = ["Power", "Default", "Telecom"];
const DEVICE_CLOCK: &str = "00:03:44 Mon Mar 1 1993 UTC";

pub(super) fn config_tab(ui: &mut egui::Ui, draft: &mut InspectorDraft) {
    ui.horizontal_top(|ui| {
        // ── Navigation (statisch) ──
        ui.vertical(|ui| {
            ui.set_width(140.0);
            ui.label(egui::RichText::new("GLOBAL").small().weak());
            let _ = ui.selectable_label(true, "Settings");
            ui.add_space(6.0);
            ui.label(egui::RichText::new("INTERFACE").small().weak());
            for interface in INTERFACES {
                let _ = ui.selectable_label(false, interface);
            }
        });

        ui.separator();

        ui.vertical(|ui| {
            ui.heading("Global Settings");
            egui::Grid::new("cfg_global")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    form_row(ui, "Display Name", |ui| {
                        ui.text_edit_singleline(&mut draft.display_name);
                    });
                    form_row(ui, "Interfaces", |ui| {
                        combo(ui, "cfg_interface", &mut draft.interface, &INTERFACES);
                    });
                });

            ui.add_space(8.0);
            gateway_section(
                ui,
                "Gateway/DNS IPv4",
                "cfg_ipv4",
                ("DHCP", &mut draft.ipv4_dhcp),
                &mut draft.ipv4_gateway,
                &mut draft.ipv4_dns,
            );

            ui.add_space(8.0);
            gateway_section(
                ui,
                "Gateway/DNS IPv6",
                "cfg_ipv6",
                ("Automatic", &mut draft.ipv6_automatic),
                &mut draft.ipv6_gateway,
                &mut draft.ipv6_dns,
            );

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("Device Clock:");
                ui.monospace(DEVICE_CLOCK);
            });

            ui.add_space(8.0);
            ui.group(|ui| {
                ui.strong("NTP");
                egui::Grid::new("cfg_ntp").num_columns(2).show(ui, |ui| {
                    form_row(ui, "Server IP", |ui| {
                        ui.text_edit_singleline(&mut draft.ntp_server);
                    });
                    form_row(ui, "Authentication", |ui| {
                        ui.horizontal(|ui| {
                            ui.radio_value(&mut draft.ntp_auth_enabled, true, "Enable");
                            ui.radio_value(&mut draft.ntp_auth_enabled, false, "Disable");
                        });
                    });
                    form_row(ui, "Password", |ui| {
                        ui.add(egui::TextEdit::singleline(&mut draft.ntp_password).password(true));
                    });
                });
            });

            ui.add_space(8.0);
            ui.group(|ui| {
                ui.strong("PTP");
                egui::Grid::new("cfg_ptp").num_columns(2).show(ui, |ui| {
                    form_row(ui, "Profile", |ui| {
                        combo(ui, "cfg_ptp_profile", &mut draft.ptp_profile, &PTP_PROFILES);
                    });
                    form_row(ui, "Enable", |ui| {
                        ui.horizontal(|ui| {
                            ui.radio_value(&mut draft.ptp_enabled, true, "Enable");
                            ui.radio_value(&mut draft.ptp_enabled, false, "Disable");
                        });
                    });
                });
            });
        });
    });
}

/// Gateway/DNS-Block mit Automatik/Static-Umschalter.
///
/// Die Textfelder sind nur im Static-Modus editierbar.
fn gateway_section(
    ui: &mut egui::Ui,
    title: &str,
    id: &str,
    (auto_label, automatic): (&str, &mut bool),
    gateway: &mut String,
    dns: &mut String,
) {
    ui.group(|ui| {
        ui.strong(title);
        ui.horizontal(|ui| {
            ui.radio_value(automatic, true, auto_label);
            ui.radio_value(automatic, false, "Static");
        });
        let editable = !*automatic;
        egui::Grid::new(id).num_columns(2).show(ui, |ui| {
            form_row(ui, "Default Gateway", |ui| {
                ui.add_enabled(editable, egui::TextEdit::singleline(gateway));
            });
            form_row(ui, "DNS Server", |ui| {
                ui.add_enabled(editable, egui::TextEdit::singleline(dns));
            });
        });
    });
}
