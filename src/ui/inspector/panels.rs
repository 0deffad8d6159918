//! Statische Tabs: Physical, Programming, Attributes.

use egui_extras::{Column, TableBuilder};

/// Module in der Physical-Ansicht.
pub const PHYSICAL_MODULES: [&str; 11] = [
    "WMP300N",
    "PT-HOST-NM-1AM",
    "PT-HOST-NM-1CFE",
    "PT-HOST-NM-1CFE",
    "PT-HOST-NM-1CGE",
    "PT-HOST-NM-1FFE",
    "PT-HOST-NM-1FFE-SM",
    "PT-HOST-NM-1FGE",
    "PT-HOST-NM-1W",
    "PT-HEADPHONE",
    "PT-MICROPHONE",
];

/// Hardware-Attribute (Name, Wert).
pub const ATTRIBUTES: [(&str, &str); 4] = [
    ("CPU", "Generic x86"),
    ("RAM", "512 MB"),
    ("NIC", "FastEthernet0"),
    ("Wireless", "WMP300N"),
];

const PROGRAM_FILE: &str = "main.txt";
const PROGRAM_SOURCE: &str = "# Write a script here\nprint(\"Hello from PC\")\n";

pub(super) fn physical_tab(ui: &mut egui::Ui) {
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(160.0);
            ui.strong("Modules");
            for module in PHYSICAL_MODULES {
                ui.monospace(module);
            }
        });

        ui.separator();

        ui.vertical(|ui| {
            ui.heading("Physical Device View");
            ui.horizontal(|ui| {
                let _ = ui.selectable_label(false, "Zoom In");
                let _ = ui.selectable_label(true, "Original Size");
                let _ = ui.selectable_label(false, "Zoom Out");
            });

            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(ui.available_width(), 240.0), egui::Sense::hover());
            let visuals = ui.visuals();
            ui.painter()
                .rect_filled(rect, 8.0, visuals.extreme_bg_color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Device View",
                egui::FontId::proportional(16.0),
                visuals.weak_text_color(),
            );

            ui.horizontal(|ui| {
                let _ = ui.button("Customize Icon in Physical View");
                let _ = ui.button("Customize Icon in Logical View");
            });
        });
    });
}

pub(super) fn programming_tab(ui: &mut egui::Ui) {
    ui.heading("Programming");
    ui.label(egui::RichText::new(PROGRAM_FILE).small().weak());
    let mut source = PROGRAM_SOURCE;
    ui.add(
        egui::TextEdit::multiline(&mut source)
            .code_editor()
            .desired_rows(8)
            .desired_width(f32::INFINITY),
    );
}

pub(super) fn attributes_tab(ui: &mut egui::Ui) {
    ui.heading("Attributes");
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Attribute");
            });
            header.col(|ui| {
                ui.strong("Value");
            });
        })
        .body(|mut body| {
            for (name, value) in ATTRIBUTES {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(name);
                    });
                    row.col(|ui| {
                        ui.label(value);
                    });
                });
            }
        });
}
