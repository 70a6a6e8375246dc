//! Profiler Module
//! Column-level and table-level descriptive statistics for a loaded DataFrame.

use polars::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Summary of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    pub non_null_count: usize,
    pub unique_count: usize,
}

/// Table-level statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicStats {
    pub total_rows: usize,
    pub total_columns: usize,
    pub column_names: Vec<String>,
    /// Estimated heap footprint in bytes.
    pub memory_usage: usize,
    pub has_missing_values: bool,
}

/// Stateless profiling over an optional table. Every method returns an
/// empty value instead of failing when no table is loaded.
pub struct Profiler;

impl Profiler {
    /// Get list of column names in frame order.
    pub fn column_names(df: Option<&DataFrame>) -> Vec<String> {
        df.map(|df| {
            df.get_column_names()
                .iter()
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
    }

    /// Compute one summary per column, in parallel.
    pub fn column_info(df: Option<&DataFrame>) -> Vec<ColumnSummary> {
        let Some(df) = df else {
            return Vec::new();
        };

        df.get_columns()
            .par_iter()
            .map(Self::summarize_column)
            .collect()
    }

    /// Row/column totals, memory estimate and missing-value flag.
    pub fn basic_stats(df: Option<&DataFrame>) -> Option<BasicStats> {
        df.map(Self::table_stats)
    }

    /// Same as `basic_stats` for a table known to be present.
    pub fn table_stats(df: &DataFrame) -> BasicStats {
        let total_rows = df.height();

        let memory_usage = df
            .get_columns()
            .iter()
            .map(|col| col.as_materialized_series().estimated_size())
            .sum();

        let has_missing_values = df
            .get_columns()
            .iter()
            .any(|col| col.len() - col.null_count() < total_rows);

        BasicStats {
            total_rows,
            total_columns: df.width(),
            column_names: Self::column_names(Some(df)),
            memory_usage,
            has_missing_values,
        }
    }

    /// Count columns per dtype tag.
    pub fn dtype_summary(df: Option<&DataFrame>) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        if let Some(df) = df {
            for col in df.get_columns() {
                *counts.entry(dtype_tag(col.dtype())).or_insert(0) += 1;
            }
        }
        counts
    }

    fn summarize_column(col: &Column) -> ColumnSummary {
        let series = col.as_materialized_series();
        // n_unique counts null as its own value, so drop nulls first.
        let unique_count = series.drop_nulls().n_unique().unwrap_or(0);

        ColumnSummary {
            name: col.name().to_string(),
            dtype: dtype_tag(col.dtype()),
            non_null_count: col.len() - col.null_count(),
            unique_count,
        }
    }
}

/// Short type tag shown to the user, e.g. `i64`, `f64`, `str`.
pub fn dtype_tag(dtype: &DataType) -> String {
    dtype.to_string()
}
