//! EDA Service
//! Sequences loading and profiling for each upload and owns the current table.

use crate::config::LoaderConfig;
use crate::data::{FileInfo, FileLoader, LoaderError, UploadedFile};
use crate::service::ProcessingResult;
use crate::stats::{ColumnSummary, Profiler};
use polars::prelude::*;
use std::collections::HashMap;
use tracing::{info, warn};

/// Orchestrates loader and profiler. Holds at most one table: the last
/// successful upload.
#[derive(Default)]
pub struct EdaService {
    loader: FileLoader,
    df: Option<DataFrame>,
    file_info: Option<FileInfo>,
}

impl EdaService {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            loader: FileLoader::new(config),
            df: None,
            file_info: None,
        }
    }

    /// Load and profile an upload. Never fails; errors are reported in the result.
    pub fn process_upload(&mut self, file: &UploadedFile) -> ProcessingResult {
        if !FileLoader::is_supported(file.name()) {
            let error = LoaderError::UnsupportedType {
                extension: file.extension(),
            };
            warn!(file = file.name(), "rejected upload: {}", error);
            return ProcessingResult::failed(&error, None);
        }

        let file_info = FileInfo::from(file);
        self.file_info = Some(file_info.clone());

        match self.loader.load(file) {
            Ok(df) => {
                info!(
                    file = file.name(),
                    rows = df.height(),
                    columns = df.width(),
                    "upload loaded"
                );
                let stats = Profiler::table_stats(&df);
                self.df = Some(df);
                ProcessingResult::loaded(file_info, stats)
            }
            Err(error) => {
                warn!(file = file.name(), kind = ?error.kind(), "upload failed: {}", error);
                self.df = None;
                ProcessingResult::failed(&error, Some(file_info))
            }
        }
    }

    /// Per-column summaries for the current table, recomputed on every call.
    pub fn column_information(&self) -> Option<Vec<ColumnSummary>> {
        self.df
            .as_ref()
            .map(|df| Profiler::column_info(Some(df)))
    }

    pub fn dtype_summary(&self) -> HashMap<String, usize> {
        Profiler::dtype_summary(self.df.as_ref())
    }

    pub fn has_data(&self) -> bool {
        self.df.is_some()
    }

    pub fn current_data(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Info for the most recent supported upload, successful or not.
    pub fn file_info(&self) -> Option<&FileInfo> {
        self.file_info.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ErrorKind;

    fn upload(name: &str, body: &str) -> UploadedFile {
        UploadedFile::from_bytes(name, body.as_bytes().to_vec())
    }

    #[test]
    fn test_starts_empty() {
        let service = EdaService::default();
        assert!(!service.has_data());
        assert!(service.column_information().is_none());
        assert!(service.dtype_summary().is_empty());
        assert!(service.file_info().is_none());
    }

    #[test]
    fn test_successful_upload() {
        let mut service = EdaService::default();
        let result = service.process_upload(&upload("t.csv", "a,b\n1,x\n2,\n3,z\n"));

        assert!(result.success);
        assert!(result.error.is_none());
        assert_eq!(result.column_names, vec!["a", "b"]);
        let stats = result.basic_stats.unwrap();
        assert_eq!(stats.total_rows, 3);
        assert_eq!(stats.total_columns, 2);
        assert!(stats.has_missing_values);
        assert_eq!(result.file_info.unwrap().extension, ".csv");
        assert!(service.has_data());
    }

    #[test]
    fn test_unsupported_keeps_previous_table() {
        let mut service = EdaService::default();
        service.process_upload(&upload("ok.csv", "a\n1\n"));

        let result = service.process_upload(&upload("report.pdf", "%PDF"));
        assert!(!result.success);
        assert_eq!(result.error_kind, Some(ErrorKind::UnsupportedType));
        assert!(result.file_info.is_none());
        assert!(result.basic_stats.is_none());
        assert!(service.has_data());
        assert!(service.column_information().is_some());
        assert_eq!(service.file_info().unwrap().filename, "ok.csv");
    }

    #[test]
    fn test_failed_reupload_discards_table() {
        let mut service = EdaService::default();
        service.process_upload(&upload("ok.csv", "a\n1\n"));
        assert!(service.has_data());

        let result = service.process_upload(&upload("empty.csv", ""));
        assert!(!result.success);
        assert_eq!(result.error_kind, Some(ErrorKind::Parse));
        assert_eq!(result.file_info.unwrap().filename, "empty.csv");
        assert!(result.column_names.is_empty());
        assert!(result.basic_stats.is_none());
        assert!(!service.has_data());
        assert!(service.column_information().is_none());
    }

    #[test]
    fn test_missing_codec_is_reported() {
        let mut service = EdaService::new(LoaderConfig {
            excel_enabled: false,
            ..LoaderConfig::default()
        });
        let result = service.process_upload(&UploadedFile::from_bytes("book.xlsx", vec![1, 2, 3]));

        assert!(!result.success);
        assert_eq!(result.error_kind, Some(ErrorKind::MissingCodec));
        assert!(result.error.unwrap().contains("calamine"));
        assert!(!service.has_data());
    }

    #[test]
    fn test_result_serializes() {
        let mut service = EdaService::default();
        let result = service.process_upload(&upload("t.csv", "a,b\n1,2\n"));
        let json = result.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["basic_stats"]["total_rows"], 1);
    }
}
