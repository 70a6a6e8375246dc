//! AUTO EDA Main Application
//! Main window with upload panel and summary viewer.

use crate::config::LoaderConfig;
use crate::data::{UploadedFile, SUPPORTED_EXTENSIONS};
use crate::gui::{SummaryViewer, UploadPanel, UploadPanelAction};
use crate::service::EdaService;
use anyhow::{Context, Result};
use egui::SidePanel;
use std::path::Path;
use tracing::{error, info};

/// Main application window.
pub struct AutoEdaApp {
    service: EdaService,
    upload_panel: UploadPanel,
    summary_viewer: SummaryViewer,
}

impl AutoEdaApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: LoaderConfig) -> Self {
        Self {
            service: EdaService::new(config),
            upload_panel: UploadPanel::new(),
            summary_viewer: SummaryViewer::new(),
        }
    }

    /// Handle file selection. Loading runs synchronously on the UI thread.
    fn handle_browse(&mut self) {
        let extensions: Vec<&str> = SUPPORTED_EXTENSIONS
            .iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV or Excel", extensions.as_slice())
            .pick_file()
        else {
            return;
        };

        let file = match UploadedFile::from_path(&path) {
            Ok(file) => file,
            Err(e) => {
                error!(path = %path.display(), "failed to read upload: {}", e);
                self.upload_panel
                    .set_status(&format!("Error: failed to read file: {}", e), true);
                return;
            }
        };

        self.upload_panel.file_name = Some(file.name().to_string());
        let result = self.service.process_upload(&file);

        if result.success {
            self.upload_panel
                .set_status("File uploaded and processed successfully!", false);
        } else {
            let message = result.error.clone().unwrap_or_default();
            self.upload_panel
                .set_status(&format!("Error: {}", message), true);
        }
        // A rejected extension leaves the previous table and its summary in place.
        self.upload_panel.details_enabled = self.service.has_data();
        if result.success || !self.service.has_data() {
            self.summary_viewer
                .set_result(result, self.service.dtype_summary());
        }
    }

    /// Recompute per-column details from the current table.
    fn handle_show_details(&mut self) {
        self.summary_viewer
            .set_column_info(self.service.column_information());
    }

    /// Ask for an output location and write the latest summary as JSON.
    fn handle_export_summary(&mut self) {
        let Some(output_path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("auto_eda_summary.json")
            .save_file()
        else {
            return;
        };

        match self.export_summary(&output_path) {
            Ok(()) => {
                info!(path = %output_path.display(), "summary exported");
                self.upload_panel.set_status(
                    &format!("Summary exported to {}", display_name(&output_path)),
                    false,
                );
            }
            Err(e) => {
                error!("summary export failed: {:#}", e);
                self.upload_panel
                    .set_status(&format!("Error: {:#}", e), true);
            }
        }
    }

    fn export_summary(&self, output_path: &Path) -> Result<()> {
        let result = self
            .summary_viewer
            .result()
            .context("No summary to export")?;
        let json = result.to_json().context("Failed to serialize summary")?;
        std::fs::write(output_path, json)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

impl eframe::App for AutoEdaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Upload Panel
        SidePanel::left("upload_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.upload_panel.show(ui);

                    match action {
                        UploadPanelAction::Browse => self.handle_browse(),
                        UploadPanelAction::ShowDetails => self.handle_show_details(),
                        UploadPanelAction::ExportSummary => self.handle_export_summary(),
                        UploadPanelAction::None => {}
                    }
                });
            });

        // Central panel - Summary Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.summary_viewer.show(ui);
        });
    }
}
