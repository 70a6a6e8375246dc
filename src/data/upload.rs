//! Uploaded File Module
//! The byte buffer handed over by the display layer, plus the metadata derived from it.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single user upload: name, declared MIME type, size and raw bytes.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    name: String,
    content_type: String,
    size: u64,
    content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size: content.len() as u64,
            content,
        }
    }

    /// Build an upload from an in-memory buffer, guessing the MIME type from the name.
    pub fn from_bytes(name: impl Into<String>, content: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = mime_for_name(&name).to_string();
        Self::new(name, content_type, content)
    }

    /// Read a file from disk into an upload.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self::from_bytes(name, content))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Lowercase extension including the leading dot.
    pub fn extension(&self) -> String {
        extension_of(&self.name)
    }
}

/// Basic information about an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub filename: String,
    pub file_type: String,
    pub file_size: u64,
    pub extension: String,
}

impl From<&UploadedFile> for FileInfo {
    fn from(file: &UploadedFile) -> Self {
        Self {
            filename: file.name().to_string(),
            file_type: file.content_type().to_string(),
            file_size: file.size(),
            extension: file.extension(),
        }
    }
}

/// `"Report.XLSX"` -> `".xlsx"`. A name without a dot is treated as all extension.
pub fn extension_of(filename: &str) -> String {
    let tail = filename.rsplit('.').next().unwrap_or(filename);
    format!(".{}", tail.to_lowercase())
}

fn mime_for_name(name: &str) -> &'static str {
    match extension_of(name).as_str() {
        ".csv" => "text/csv",
        ".xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ".xls" => "application/vnd.ms-excel",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(extension_of("Report.XLSX"), ".xlsx");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("README"), ".readme");
    }

    #[test]
    fn test_file_info_from_upload() {
        let file = UploadedFile::from_bytes("sales.csv", b"a,b\n1,2\n".to_vec());
        let info = FileInfo::from(&file);
        assert_eq!(info.filename, "sales.csv");
        assert_eq!(info.file_type, "text/csv");
        assert_eq!(info.file_size, 8);
        assert_eq!(info.extension, ".csv");
    }

    #[test]
    fn test_from_path_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.xls");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"not really excel").unwrap();

        let file = UploadedFile::from_path(&path).unwrap();
        assert_eq!(file.name(), "book.xls");
        assert_eq!(file.content_type(), "application/vnd.ms-excel");
        assert_eq!(file.content(), b"not really excel");
    }
}
