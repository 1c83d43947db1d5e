//! Control Panel Widget
//! Left side panel with the data source and chart controls.

use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

use crate::charts::ScaleMode;

/// User selections driving both charts.
#[derive(Default, Clone)]
pub struct ViewSettings {
    pub csv_path: Option<PathBuf>,
    pub selected_entity: String,
    pub scale_mode: ScaleMode,
}

/// Left side control panel with file selection and chart settings.
pub struct ControlPanel {
    pub settings: ViewSettings,
    pub entities: Vec<String>,
    pub status: String,
    pub is_error: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: ViewSettings::default(),
            entities: Vec::new(),
            status: "Ready".to_string(),
            is_error: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entity dropdown contents after a load.
    /// The default selection is the first entity in file order.
    pub fn update_entities(&mut self, entities: Vec<String>) {
        self.settings.selected_entity = entities.first().cloned().unwrap_or_default();
        self.entities = entities;
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
        self.is_error = false;
    }

    pub fn set_error(&mut self, status: &str) {
        self.status = status.to_string();
        self.is_error = true;
    }

    /// Draw the control panel.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("Military Expenditure")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(RichText::new("CSV Chart Viewer").size(11.0).color(Color32::GRAY));
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.settings.csv_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Bar Chart Section =====
        ui.label(RichText::new("Bar Chart").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([70.0, 20.0], egui::Label::new("Country:"));
            ComboBox::from_id_salt("entity")
                .width(170.0)
                .selected_text(&self.settings.selected_entity)
                .show_ui(ui, |ui| {
                    for entity in &self.entities {
                        if ui
                            .selectable_label(self.settings.selected_entity == *entity, entity)
                            .clicked()
                        {
                            self.settings.selected_entity = entity.clone();
                            action = ControlPanelAction::EntityChanged;
                        }
                    }
                });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Line Chart Section =====
        ui.label(RichText::new("Line Chart").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([70.0, 20.0], egui::Label::new("Scale:"));
            ComboBox::from_id_salt("scale_mode")
                .width(170.0)
                .selected_text(self.settings.scale_mode.label())
                .show_ui(ui, |ui| {
                    for mode in ScaleMode::ALL {
                        if ui
                            .selectable_label(self.settings.scale_mode == mode, mode.label())
                            .clicked()
                        {
                            self.settings.scale_mode = mode;
                            action = ControlPanelAction::ScaleChanged;
                        }
                    }
                });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = if self.is_error {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by the control panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    EntityChanged,
    ScaleChanged,
}
