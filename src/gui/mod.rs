//! GUI module - User interface components

mod app;
mod summary_viewer;
mod upload_panel;

pub use app::AutoEdaApp;
pub use summary_viewer::SummaryViewer;
pub use upload_panel::{UploadPanel, UploadPanelAction};
