//! CSV loading.
//!
//! Reads a headered CSV into a [`DataSet`]. Each column is typed as a whole
//! from its non-missing cells: int64 if all parse as integers, else float64 if
//! all parse as floats, else bool if all are `true`/`false` in any case, else
//! object with the raw strings.

use crate::{Column, DType, DataSet, DataSetError, DataValue};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Cells treated as missing values.
pub const NA_MARKERS: [&str; 10] = [
    "", "NA", "N/A", "NaN", "nan", "null", "NULL", "None", "n/a", "#N/A",
];

/// Reads a CSV file into a dataset.
///
/// # Errors
///
/// Fails on I/O errors, malformed CSV, rows whose length differs from the
/// header, or duplicate header names.
pub fn read_csv(path: impl AsRef<Path>) -> Result<DataSet, DataSetError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let dataset = read_csv_from_reader(file)?;

    info!(
        "Loaded {} row(s) and {} column(s) from {}",
        dataset.len(),
        dataset.width(),
        path.display()
    );

    Ok(dataset)
}

/// Reads CSV data from any reader into a dataset.
///
/// # Example
///
/// ```rust
/// use contracts_core::{ColumnView, TabularData};
/// use contracts_validator::read_csv_from_reader;
///
/// let data = "id,score,city\n1,2.5,Rome\n2,NA,Oslo\n";
/// let dataset = read_csv_from_reader(data.as_bytes()).unwrap();
///
/// assert_eq!(dataset.column("id").unwrap().dtype(), "int64");
/// assert_eq!(dataset.column("score").unwrap().missing_count(), 1);
/// assert_eq!(dataset.column("city").unwrap().dtype(), "object");
/// ```
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<DataSet, DataSetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (column, cell) in cells.iter_mut().zip(record.iter()) {
            column.push(if is_na(cell) {
                None
            } else {
                Some(cell.to_string())
            });
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| type_column(name, raw))
        .collect();

    DataSet::from_columns(columns)
}

fn is_na(cell: &str) -> bool {
    NA_MARKERS.contains(&cell)
}

fn type_column(name: String, raw: Vec<Option<String>>) -> Column {
    let present = || raw.iter().flatten().map(|cell| cell.trim());

    let dtype = if raw.is_empty() {
        DType::Object
    } else if present().all(|cell| cell.parse::<i64>().is_ok()) {
        // All-missing columns land here too and are read as floats below.
        if present().next().is_none() {
            DType::Float64
        } else {
            DType::Int64
        }
    } else if present().all(|cell| cell.parse::<f64>().is_ok()) {
        DType::Float64
    } else if present().all(|cell| parse_bool(cell).is_some()) {
        DType::Bool
    } else {
        DType::Object
    };

    debug!(column = %name, dtype = %dtype, rows = raw.len(), "Typed CSV column");

    let values: Vec<DataValue> = raw
        .into_iter()
        .map(|cell| match cell {
            None => DataValue::Null,
            Some(cell) => convert(cell, dtype),
        })
        .collect();

    Column::with_dtype(name, dtype, values)
}

fn convert(cell: String, dtype: DType) -> DataValue {
    let trimmed = cell.trim();
    let converted = match dtype {
        DType::Int64 => trimmed.parse::<i64>().ok().map(DataValue::Int),
        DType::Float64 => trimmed.parse::<f64>().ok().map(DataValue::Float),
        DType::Bool => parse_bool(trimmed).map(DataValue::Bool),
        _ => None,
    };
    converted.unwrap_or(DataValue::String(cell))
}

fn parse_bool(cell: &str) -> Option<bool> {
    if cell.eq_ignore_ascii_case("true") {
        Some(true)
    } else if cell.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts_core::{ColumnView, TabularData};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn load(data: &str) -> DataSet {
        read_csv_from_reader(data.as_bytes()).unwrap()
    }

    fn dtype_of<'a>(dataset: &'a DataSet, column: &str) -> &'a str {
        dataset.column(column).unwrap().dtype()
    }

    #[test]
    fn test_column_typing() {
        let dataset = load(
            "i,f,b,s,mixed\n\
             1,1.5,true,x,1\n\
             2,2,False,y,a\n\
             -3,1e3,TRUE,z,2.5\n",
        );

        assert_eq!(dtype_of(&dataset, "i"), "int64");
        assert_eq!(dtype_of(&dataset, "f"), "float64");
        assert_eq!(dtype_of(&dataset, "b"), "bool");
        assert_eq!(dtype_of(&dataset, "s"), "object");
        assert_eq!(dtype_of(&dataset, "mixed"), "object");
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_na_markers_are_missing() {
        let dataset = load("x,y\n1,a\nNA,b\n,c\nnull,d\nNone,e\n#N/A,f\n7,g\n");
        let column = dataset.column("x").unwrap();
        assert_eq!(column.dtype(), "int64");
        assert_eq!(column.len(), 7);
        assert_eq!(column.missing_count(), 5);
        assert_eq!(column.min(), Some(1.0));
        assert_eq!(column.max(), Some(7.0));
    }

    #[test]
    fn test_all_missing_column_is_float() {
        let dataset = load("x,y\n,1\nNA,2\n");
        assert_eq!(dtype_of(&dataset, "x"), "float64");
        assert_eq!(dataset.column("x").unwrap().missing_fraction(), 1.0);
    }

    #[test]
    fn test_header_only_yields_object_columns() {
        let dataset = load("a,b\n");
        assert_eq!(dataset.len(), 0);
        assert_eq!(dataset.column_names(), vec!["a", "b"]);
        assert_eq!(dtype_of(&dataset, "a"), "object");
    }

    #[test]
    fn test_object_column_keeps_raw_strings() {
        let dataset = load("city\nVancouver\n Toronto\n");
        let values = dataset.column("city").unwrap().distinct_values();
        assert!(values.contains(" Toronto"));
        assert!(values.contains("Vancouver"));
    }

    #[test]
    fn test_bool_values_render_capitalized() {
        let dataset = load("flag\ntrue\nFALSE\n");
        let values: Vec<_> = dataset
            .column("flag")
            .unwrap()
            .distinct_values()
            .into_iter()
            .collect();
        assert_eq!(values, vec!["False", "True"]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = read_csv_from_reader("a,b\n1,2\n3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DataSetError::Csv(_)));
    }

    #[test]
    fn test_duplicate_headers_rejected() {
        let err = read_csv_from_reader("a,a\n1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DataSetError::DuplicateColumn(ref name) if name == "a"));
    }

    #[test]
    fn test_read_csv_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "age,city").unwrap();
        writeln!(file, "34,Toronto").unwrap();
        writeln!(file, "28,Vancouver").unwrap();

        let dataset = read_csv(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dtype_of(&dataset, "age"), "int64");
    }

    #[test]
    fn test_missing_file() {
        let err = read_csv("/nonexistent/data.csv").unwrap_err();
        assert!(matches!(err, DataSetError::Io(_)));
    }
}
