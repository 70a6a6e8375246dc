//! AUTO EDA - CSV & Excel Upload Profiler
//!
//! Upload a tabular file and get column names, types, null counts, unique
//! counts, memory usage and row/column totals.

pub mod config;
pub mod data;
pub mod gui;
pub mod logging;
pub mod service;
pub mod stats;

pub use config::{AppConfig, LoaderConfig, LoggingConfig};
pub use data::{ErrorKind, FileInfo, FileLoader, LoaderError, UploadedFile};
pub use service::{EdaService, ProcessingResult};
pub use stats::{BasicStats, ColumnSummary, Profiler};
