//! Upload Panel Widget
//! Left side panel with file selection, analysis actions and status.

use egui::{Color32, RichText};

/// Left side panel with file selection and processing controls.
pub struct UploadPanel {
    pub file_name: Option<String>,
    pub status: String,
    pub is_error: bool,
    pub details_enabled: bool,
}

impl Default for UploadPanel {
    fn default() -> Self {
        Self {
            file_name: None,
            status: "Please upload a CSV or Excel file to proceed.".to_string(),
            is_error: false,
            details_enabled: false,
        }
    }
}

impl UploadPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the upload panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> UploadPanelAction {
        let mut action = UploadPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 AUTO EDA")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("EDA analysis, faster and easier")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== File Upload Section =====
        ui.label(RichText::new("📁 File Upload").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let name = self
                        .file_name
                        .clone()
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&name).size(12.0).color(
                        if self.file_name.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = UploadPanelAction::Browse;
                        }
                    });
                });
            });

        ui.add_space(4.0);
        ui.label(
            RichText::new("Choose a CSV or Excel file (.csv, .xlsx, .xls)")
                .size(11.0)
                .color(Color32::GRAY),
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.details_enabled, |ui| {
                let button = egui::Button::new(
                    RichText::new("🔍 Show Detailed Column Information").size(14.0),
                )
                .min_size(egui::vec2(240.0, 32.0));
                if ui.add(button).clicked() {
                    action = UploadPanelAction::ShowDetails;
                }
            });

            ui.add_space(8.0);

            ui.add_enabled_ui(self.details_enabled, |ui| {
                let export_button =
                    egui::Button::new(RichText::new("💾 Export Summary").size(14.0))
                        .min_size(egui::vec2(150.0, 30.0));
                if ui.add(export_button).clicked() {
                    action = UploadPanelAction::ExportSummary;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.label(RichText::new("ℹ Status").size(14.0).strong());
        ui.add_space(5.0);

        let status_color = if self.is_error {
            Color32::from_rgb(220, 53, 69)
        } else if self.details_enabled {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str, is_error: bool) {
        self.status = status.to_string();
        self.is_error = is_error;
    }
}

/// Actions triggered by the upload panel
#[derive(Debug, Clone, PartialEq)]
pub enum UploadPanelAction {
    None,
    Browse,
    ShowDetails,
    ExportSummary,
}
