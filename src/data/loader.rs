//! File Loader Module
//! Validates uploads and parses CSV / Excel bytes into a Polars DataFrame.

use crate::config::LoaderConfig;
use crate::data::upload::{extension_of, UploadedFile};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Cursor;
use thiserror::Error;
use tracing::debug;

/// Extensions accepted for upload.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = [".csv", ".xlsx", ".xls"];

/// Name of the optional spreadsheet codec, as reported in `MissingCodec` errors.
pub const EXCEL_CODEC: &str = "calamine";

/// Candidate CSV separators, in tie-break order.
const CSV_SEPARATORS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Tag for each `LoaderError` variant so callers can branch without parsing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    UnsupportedType,
    MissingCodec,
    Parse,
    Load,
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Unsupported file type: {extension}. Please upload CSV or Excel files only.")]
    UnsupportedType { extension: String },
    #[error("Missing codec: {codec} is required for {extension} files. Build with the `excel` feature and enable loader.excel_enabled.")]
    MissingCodec {
        codec: &'static str,
        extension: String,
    },
    #[error("Failed to parse {format} file: {message}")]
    Parse { format: FileFormat, message: String },
    #[error("Error loading file: {0}")]
    Load(String),
}

impl LoaderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoaderError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            LoaderError::MissingCodec { .. } => ErrorKind::MissingCodec,
            LoaderError::Parse { .. } => ErrorKind::Parse,
            LoaderError::Load(_) => ErrorKind::Load,
        }
    }
}

/// Tabular formats the loader can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xlsx,
    Xls,
}

impl FileFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".csv" => Some(FileFormat::Csv),
            ".xlsx" => Some(FileFormat::Xlsx),
            ".xls" => Some(FileFormat::Xls),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Csv => ".csv",
            FileFormat::Xlsx => ".xlsx",
            FileFormat::Xls => ".xls",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileFormat::Csv => "CSV",
            FileFormat::Xlsx => "XLSX",
            FileFormat::Xls => "XLS",
        };
        f.write_str(name)
    }
}

/// Turns uploaded bytes into a DataFrame. Holds no table state.
#[derive(Debug, Clone, Default)]
pub struct FileLoader {
    config: LoaderConfig,
}

impl FileLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Check if the file extension is supported.
    pub fn is_supported(filename: &str) -> bool {
        let lower = filename.to_lowercase();
        SUPPORTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
    }

    /// Parse the upload according to its extension.
    pub fn load(&self, file: &UploadedFile) -> Result<DataFrame, LoaderError> {
        let extension = extension_of(file.name());
        let format = FileFormat::from_extension(&extension)
            .ok_or(LoaderError::UnsupportedType { extension })?;

        debug!(file = file.name(), %format, bytes = file.size(), "dispatching upload");

        match format {
            FileFormat::Csv => self.read_csv(file.content()),
            FileFormat::Xlsx | FileFormat::Xls => self.read_excel(file.content(), format),
        }
    }

    /// Whether the spreadsheet codec is compiled in and enabled.
    pub fn excel_available(&self) -> bool {
        cfg!(feature = "excel") && self.config.excel_enabled
    }

    fn read_csv(&self, content: &[u8]) -> Result<DataFrame, LoaderError> {
        let separator = sniff_separator(content);
        debug!(separator = ?(separator as char), "sniffed CSV dialect");

        let frame = match csv_frame(content, separator, Some(self.config.infer_schema_length)) {
            // A value past the sampled rows did not fit the inferred dtype.
            Err(PolarsError::ComputeError(_) | PolarsError::SchemaMismatch(_)) => {
                debug!(
                    infer_schema_length = self.config.infer_schema_length,
                    "sampled schema rejected a later row, rescanning whole file"
                );
                csv_frame(content, separator, None)
            }
            sampled => sampled,
        };

        frame.map_err(|err| match err {
            PolarsError::IO { .. } => LoaderError::Load(err.to_string()),
            other => LoaderError::Parse {
                format: FileFormat::Csv,
                message: other.to_string(),
            },
        })
    }

    #[cfg(feature = "excel")]
    fn read_excel(&self, content: &[u8], format: FileFormat) -> Result<DataFrame, LoaderError> {
        if !self.config.excel_enabled {
            return Err(missing_codec(format));
        }
        crate::data::excel::read_first_sheet(content, format)
    }

    #[cfg(not(feature = "excel"))]
    fn read_excel(&self, _content: &[u8], format: FileFormat) -> Result<DataFrame, LoaderError> {
        Err(missing_codec(format))
    }
}

/// `infer_schema_length = None` scans every row before fixing dtypes.
fn csv_frame(
    content: &[u8],
    separator: u8,
    infer_schema_length: Option<usize>,
) -> PolarsResult<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(infer_schema_length)
        .map_parse_options(|opts| opts.with_separator(separator))
        .into_reader_with_file_handle(Cursor::new(content.to_vec()))
        .finish()
}

fn missing_codec(format: FileFormat) -> LoaderError {
    LoaderError::MissingCodec {
        codec: EXCEL_CODEC,
        extension: format.extension().to_string(),
    }
}

/// Pick the separator that occurs most often (outside quotes) on the header line.
fn sniff_separator(content: &[u8]) -> u8 {
    let header = content
        .split(|&b| b == b'\n')
        .next()
        .unwrap_or_default();

    let mut counts = [0usize; CSV_SEPARATORS.len()];
    let mut in_quotes = false;
    for &byte in header {
        if byte == b'"' {
            in_quotes = !in_quotes;
            continue;
        }
        if in_quotes {
            continue;
        }
        if let Some(idx) = CSV_SEPARATORS.iter().position(|&sep| sep == byte) {
            counts[idx] += 1;
        }
    }

    // First maximum wins, so comma takes ties and the empty case.
    let mut best = 0;
    for idx in 1..counts.len() {
        if counts[idx] > counts[best] {
            best = idx;
        }
    }
    CSV_SEPARATORS[best]
}
