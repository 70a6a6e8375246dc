//! Excel Reader Module
//! Decodes the first worksheet of an .xlsx / .xls workbook with calamine.

use crate::data::loader::{FileFormat, LoaderError};
use calamine::{Data, DataType as _, Range, Reader, Xls, Xlsx};
use polars::prelude::*;
use std::collections::HashMap;
use std::fmt::Display;
use std::io::{Cursor, Read, Seek};

/// Column type chosen from the non-empty cells of a sheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellType {
    Int,
    Float,
    Bool,
    Datetime,
    Duration,
    Text,
}

/// Whole floats at or beyond this magnitude do not fit an i64.
const I64_FLOAT_LIMIT: f64 = 9.2e18;

/// Read the first worksheet into a DataFrame, using the first row as header.
pub fn read_first_sheet(content: &[u8], format: FileFormat) -> Result<DataFrame, LoaderError> {
    let cursor = Cursor::new(content.to_vec());
    let range = match format {
        FileFormat::Xls => first_range::<_, Xls<_>>(cursor, format)?,
        _ => first_range::<_, Xlsx<_>>(cursor, format)?,
    };
    range_to_dataframe(&range)
}

fn first_range<RS, R>(reader: RS, format: FileFormat) -> Result<Range<Data>, LoaderError>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: Display,
{
    let parse_error = |e: R::Error| LoaderError::Parse {
        format,
        message: e.to_string(),
    };

    let mut workbook = R::new(reader).map_err(parse_error)?;
    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoaderError::Load("Workbook has no worksheets".to_string()))?
        .map_err(parse_error)
}

fn range_to_dataframe(range: &Range<Data>) -> Result<DataFrame, LoaderError> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(DataFrame::empty());
    };
    let body: Vec<&[Data]> = rows.collect();

    let columns: Result<Vec<Column>, LoaderError> = header_names(header)
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let cells: Vec<Option<&Data>> = body.iter().map(|row| row.get(idx)).collect();
            build_column(name, &cells).map_err(|e| LoaderError::Load(e.to_string()))
        })
        .collect();

    DataFrame::new(columns?).map_err(|e| LoaderError::Load(e.to_string()))
}

/// Blank headers become `column_N`; repeats get a `_duplicated_K` suffix.
fn header_names(header: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    header
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let raw = match cell {
                Data::String(s) => s.trim().to_string(),
                Data::Empty => String::new(),
                other => other.to_string(),
            };
            let name = if raw.is_empty() {
                format!("column_{}", idx + 1)
            } else {
                raw
            };

            let count = seen.entry(name.clone()).or_insert(0);
            let unique = if *count == 0 {
                name
            } else {
                format!("{}_duplicated_{}", name, *count - 1)
            };
            *count += 1;
            unique
        })
        .collect()
}

fn is_blank(cell: &Data) -> bool {
    matches!(cell, Data::Empty | Data::Error(_))
}

fn cell_type(cell: &Data) -> CellType {
    match cell {
        Data::Int(_) => CellType::Int,
        Data::Float(f) if f.fract() == 0.0 && f.abs() < I64_FLOAT_LIMIT => CellType::Int,
        Data::Float(_) => CellType::Float,
        Data::Bool(_) => CellType::Bool,
        Data::DateTime(dt) if dt.is_duration() => CellType::Duration,
        Data::DateTime(_) => CellType::Datetime,
        Data::DateTimeIso(_) if cell.as_datetime().is_some() => CellType::Datetime,
        _ => CellType::Text,
    }
}

/// Ints and floats widen to Float; any other mix falls back to Text.
fn infer_cell_type(cells: &[Option<&Data>]) -> CellType {
    cells
        .iter()
        .flatten()
        .filter(|c| !is_blank(c))
        .map(|c| cell_type(c))
        .reduce(|acc, next| match (acc, next) {
            (a, b) if a == b => a,
            (CellType::Int, CellType::Float) | (CellType::Float, CellType::Int) => CellType::Float,
            _ => CellType::Text,
        })
        .unwrap_or(CellType::Text)
}

fn build_column(name: &str, cells: &[Option<&Data>]) -> PolarsResult<Column> {
    let name: PlSmallStr = name.into();
    let column = match infer_cell_type(cells) {
        CellType::Int => {
            let values: Vec<Option<i64>> = cells
                .iter()
                .map(|c| match c {
                    Some(Data::Int(i)) => Some(*i),
                    Some(Data::Float(f)) => Some(*f as i64),
                    _ => None,
                })
                .collect();
            Column::new(name, values)
        }
        CellType::Float => {
            let values: Vec<Option<f64>> = cells
                .iter()
                .map(|c| match c {
                    Some(Data::Int(i)) => Some(*i as f64),
                    Some(Data::Float(f)) => Some(*f),
                    _ => None,
                })
                .collect();
            Column::new(name, values)
        }
        CellType::Bool => {
            let values: Vec<Option<bool>> = cells
                .iter()
                .map(|c| match c {
                    Some(Data::Bool(b)) => Some(*b),
                    _ => None,
                })
                .collect();
            Column::new(name, values)
        }
        CellType::Datetime => {
            let millis: Vec<Option<i64>> = cells
                .iter()
                .map(|c| match c {
                    Some(cell @ (Data::DateTime(_) | Data::DateTimeIso(_))) => cell
                        .as_datetime()
                        .map(|dt| dt.and_utc().timestamp_millis()),
                    _ => None,
                })
                .collect();
            Column::new(name, millis).cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
        }
        CellType::Duration => {
            let millis: Vec<Option<i64>> = cells
                .iter()
                .map(|c| match c {
                    Some(Data::DateTime(dt)) => dt.as_duration().map(|d| d.num_milliseconds()),
                    _ => None,
                })
                .collect();
            Column::new(name, millis).cast(&DataType::Duration(TimeUnit::Milliseconds))?
        }
        CellType::Text => {
            let values: Vec<Option<String>> = cells
                .iter()
                .map(|c| match c {
                    Some(cell) if is_blank(cell) => None,
                    Some(Data::String(s)) => Some(s.clone()),
                    Some(cell) => Some(cell.to_string()),
                    None => None,
                })
                .collect();
            Column::new(name, values)
        }
    };
    Ok(column)
}
