//! Summary Viewer Widget
//! Central scrollable panel showing file info, columns, basic stats and
//! the detailed per-column analysis.

use crate::service::ProcessingResult;
use crate::stats::ColumnSummary;
use egui::{Color32, RichText, ScrollArea};
use std::collections::HashMap;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
const COLUMNS_PER_ROW: usize = 3;
const CARD_SPACING: f32 = 12.0;

/// Displays the latest processing result.
#[derive(Default)]
pub struct SummaryViewer {
    result: Option<ProcessingResult>,
    column_info: Option<Vec<ColumnSummary>>,
    dtype_summary: Vec<(String, usize)>,
}

impl SummaryViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed result. Detailed column info is cleared.
    pub fn set_result(&mut self, result: ProcessingResult, dtype_summary: HashMap<String, usize>) {
        let mut dtypes: Vec<(String, usize)> = dtype_summary.into_iter().collect();
        dtypes.sort();
        self.result = Some(result);
        self.dtype_summary = dtypes;
        self.column_info = None;
    }

    pub fn result(&self) -> Option<&ProcessingResult> {
        self.result.as_ref()
    }

    pub fn set_column_info(&mut self, column_info: Option<Vec<ColumnSummary>>) {
        self.column_info = column_info;
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(result) = &self.result else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if !result.success {
                    let error = result.error.as_deref().unwrap_or("Unknown error");
                    ui.label(
                        RichText::new(format!("❌ Error: {}", error))
                            .size(14.0)
                            .color(Color32::from_rgb(220, 53, 69)),
                    );
                    return;
                }

                ui.label(
                    RichText::new("✅ File uploaded and processed successfully!")
                        .size(14.0)
                        .color(Color32::from_rgb(40, 167, 69)),
                );
                ui.add_space(CARD_SPACING);

                if let Some(info) = &result.file_info {
                    section_title(ui, "📊 File Information");
                    ui.columns(3, |cols| {
                        metric(&mut cols[0], "Filename", &info.filename);
                        metric(&mut cols[1], "File Type", &info.extension);
                        metric(
                            &mut cols[2],
                            "File Size",
                            &format!("{:.2} MB", info.file_size as f64 / BYTES_PER_MB),
                        );
                    });
                    ui.add_space(CARD_SPACING);
                }

                if !result.column_names.is_empty() {
                    section_title(ui, "📋 Column Names");
                    ui.label(format!("Total Columns: {}", result.column_names.len()));
                    for chunk in result.column_names.chunks(COLUMNS_PER_ROW) {
                        ui.columns(COLUMNS_PER_ROW, |cols| {
                            for (col, name) in cols.iter_mut().zip(chunk) {
                                col.label(format!("• {}", name));
                            }
                        });
                    }
                    ui.add_space(CARD_SPACING);
                }

                if let Some(stats) = &result.basic_stats {
                    section_title(ui, "📈 Basic Statistics");
                    ui.columns(4, |cols| {
                        metric(&mut cols[0], "Total Rows", &stats.total_rows.to_string());
                        metric(&mut cols[1], "Total Columns", &stats.total_columns.to_string());
                        metric(
                            &mut cols[2],
                            "Memory Usage",
                            &format!("{:.2} MB", stats.memory_usage as f64 / BYTES_PER_MB),
                        );
                        metric(
                            &mut cols[3],
                            "Missing Values",
                            if stats.has_missing_values { "Yes" } else { "No" },
                        );
                    });
                    ui.add_space(CARD_SPACING);
                }

                ui.separator();
                section_title(ui, "🔍 Detailed Analysis");

                if let Some(column_info) = &self.column_info {
                    draw_column_table(ui, column_info);
                    ui.add_space(CARD_SPACING);
                }

                if !self.dtype_summary.is_empty() {
                    ui.label(RichText::new("Data Types Summary:").strong());
                    for (dtype, count) in &self.dtype_summary {
                        ui.label(format!("• {}: {} columns", dtype, count));
                    }
                }
            });
    }
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.label(RichText::new(title).size(16.0).strong());
    ui.add_space(5.0);
}

fn metric(ui: &mut egui::Ui, label: &str, value: &str) {
    egui::Frame::none()
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .rounding(5.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).size(11.0).color(Color32::GRAY));
            ui.label(RichText::new(value).size(18.0).strong());
        });
}

fn draw_column_table(ui: &mut egui::Ui, column_info: &[ColumnSummary]) {
    egui::Grid::new("column_info")
        .striped(true)
        .num_columns(4)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for header in ["Column Name", "Data Type", "Non-Null Count", "Unique Values"] {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();

            for summary in column_info {
                ui.label(summary.name.as_str());
                ui.label(summary.dtype.as_str());
                ui.label(summary.non_null_count.to_string());
                ui.label(summary.unique_count.to_string());
                ui.end_row();
            }
        });
}
