//! Processing result returned to the display layer for every upload.

use crate::data::{ErrorKind, FileInfo, LoaderError};
use crate::stats::BasicStats;
use serde::{Deserialize, Serialize};

/// Outcome of one upload. Statistics are either all present (`success`)
/// or all empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub success: bool,
    pub error: Option<String>,
    pub error_kind: Option<ErrorKind>,
    pub file_info: Option<FileInfo>,
    pub column_names: Vec<String>,
    pub basic_stats: Option<BasicStats>,
}

impl ProcessingResult {
    pub fn loaded(file_info: FileInfo, basic_stats: BasicStats) -> Self {
        Self {
            success: true,
            error: None,
            error_kind: None,
            file_info: Some(file_info),
            column_names: basic_stats.column_names.clone(),
            basic_stats: Some(basic_stats),
        }
    }

    pub fn failed(error: &LoaderError, file_info: Option<FileInfo>) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            error_kind: Some(error.kind()),
            file_info,
            column_names: Vec::new(),
            basic_stats: None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
