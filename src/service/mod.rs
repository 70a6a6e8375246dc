//! Service module - upload orchestration

mod eda_service;
mod result;

pub use eda_service::EdaService;
pub use result::ProcessingResult;
