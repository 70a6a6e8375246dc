//! Data module - upload handling and file loading

#[cfg(feature = "excel")]
mod excel;
mod loader;
mod upload;

pub use loader::{
    ErrorKind, FileFormat, FileLoader, LoaderError, EXCEL_CODEC, SUPPORTED_EXTENSIONS,
};
pub use upload::{extension_of, FileInfo, UploadedFile};
