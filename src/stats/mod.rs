//! Stats module - table profiling

mod profiler;

pub use profiler::{dtype_tag, BasicStats, ColumnSummary, Profiler};
