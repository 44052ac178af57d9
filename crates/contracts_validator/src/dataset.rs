//! In-memory columnar dataset.
//!
//! [`DataSet`] is the reference implementation of the tabular adapter traits:
//! ordered, named, equal-length columns of [`DataValue`]s.

use crate::DataSetError;
use contracts_core::{ColumnView, TabularData};
use std::collections::BTreeSet;
use std::fmt;

/// A value in a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// Null/missing value
    Null,
    /// String value
    String(String),
    /// Integer value
    Int(i64),
    /// Floating point value; NaN counts as missing
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Timestamp value (ISO 8601 string)
    Timestamp(String),
}

impl DataValue {
    /// Returns true if this value is missing (null or NaN).
    pub fn is_missing(&self) -> bool {
        match self {
            DataValue::Null => true,
            DataValue::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Attempts to get this value as a float. Integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            DataValue::Float(f) if !f.is_nan() => Some(*f),
            DataValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }
}

/// Renders values the way they appear in allowed-value sets: booleans as
/// `True`/`False`, floats in shortest round-trip form (see [`write_float`]).
impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => f.write_str("None"),
            DataValue::String(s) | DataValue::Timestamp(s) => f.write_str(s),
            DataValue::Int(i) => write!(f, "{i}"),
            DataValue::Float(x) => write_float(f, *x),
            DataValue::Bool(true) => f.write_str("True"),
            DataValue::Bool(false) => f.write_str("False"),
        }
    }
}

/// Writes a float in shortest round-trip form. Decimal exponents below -4 or
/// at least 16 switch to scientific notation with a signed, two-digit
/// exponent (`1e+16`, `1.5e-05`); integral values otherwise keep a trailing
/// `.0`.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if !x.is_finite() {
        return write!(f, "{x}");
    }

    let scientific = format!("{x:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if x != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.abs())
    } else if x.fract() == 0.0 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int(i)
    }
}

impl From<f64> for DataValue {
    fn from(f: f64) -> Self {
        DataValue::Float(f)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DataValue::Null, Into::into)
    }
}

/// Column dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    /// 64-bit integers
    Int64,
    /// 64-bit floats
    Float64,
    /// Booleans
    Bool,
    /// Arbitrary values, usually strings
    Object,
    /// Strings only
    String,
    /// Categorical values
    Category,
    /// Timestamps
    Datetime,
}

impl DType {
    /// Returns the dtype name reported to contracts.
    pub fn name(&self) -> &'static str {
        match self {
            DType::Int64 => "int64",
            DType::Float64 => "float64",
            DType::Bool => "bool",
            DType::Object => "object",
            DType::String => "string",
            DType::Category => "category",
            DType::Datetime => "datetime64[ns]",
        }
    }

    /// Returns true for int64 and float64.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DType::Int64 | DType::Float64)
    }

    /// Infers a dtype from values, ignoring nulls.
    ///
    /// All ints -> int64, ints and floats -> float64, all bools -> bool, all
    /// timestamps -> datetime; anything else (including no values) -> object.
    pub fn infer<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a DataValue>,
    {
        let mut inferred: Option<DType> = None;
        for value in values {
            let current = match value {
                DataValue::Null => continue,
                DataValue::Int(_) => DType::Int64,
                DataValue::Float(_) => DType::Float64,
                DataValue::Bool(_) => DType::Bool,
                DataValue::Timestamp(_) => DType::Datetime,
                DataValue::String(_) => return DType::Object,
            };
            inferred = Some(match (inferred, current) {
                (None, dtype) => dtype,
                (Some(prev), dtype) if prev == dtype => dtype,
                (Some(DType::Int64), DType::Float64) | (Some(DType::Float64), DType::Int64) => {
                    DType::Float64
                }
                _ => return DType::Object,
            });
        }
        inferred.unwrap_or(DType::Object)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named column of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    dtype: DType,
    values: Vec<DataValue>,
}

impl Column {
    /// Creates a column whose dtype is inferred from its values.
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<DataValue>,
    {
        let values: Vec<DataValue> = values.into_iter().map(Into::into).collect();
        let dtype = DType::infer(&values);
        Self {
            name: name.into(),
            dtype,
            values,
        }
    }

    /// Creates a column with an explicit dtype.
    pub fn with_dtype<I, V>(name: impl Into<String>, dtype: DType, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<DataValue>,
    {
        Self {
            name: name.into(),
            dtype,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column dtype.
    pub fn data_type(&self) -> DType {
        self.dtype
    }

    /// Column values.
    pub fn values(&self) -> &[DataValue] {
        &self.values
    }

    fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(DataValue::as_float)
    }
}

impl ColumnView for Column {
    fn dtype(&self) -> &str {
        self.dtype.name()
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    fn is_numeric(&self) -> bool {
        self.dtype.is_numeric()
    }

    fn min(&self) -> Option<f64> {
        self.numbers().reduce(f64::min)
    }

    fn max(&self) -> Option<f64> {
        self.numbers().reduce(f64::max)
    }

    fn distinct_values(&self) -> BTreeSet<String> {
        self.values
            .iter()
            .filter(|v| !v.is_missing())
            .map(ToString::to_string)
            .collect()
    }
}

/// A dataset of equal-length named columns.
///
/// # Example
///
/// ```rust
/// use contracts_core::TabularData;
/// use contracts_validator::{Column, DataSet};
///
/// let dataset = DataSet::from_columns(vec![
///     Column::new("age", [Some(31_i64), None, Some(45)]),
///     Column::new("city", ["Rome", "Oslo", "Rome"]),
/// ])
/// .unwrap();
///
/// assert_eq!(dataset.len(), 3);
/// assert_eq!(dataset.column_names(), vec!["age", "city"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    columns: Vec<Column>,
}

impl DataSet {
    /// Creates a dataset without columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a dataset from columns.
    ///
    /// # Errors
    ///
    /// Fails on duplicate column names or columns of different lengths.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, DataSetError> {
        let mut dataset = Self::empty();
        for column in columns {
            dataset.push_column(column)?;
        }
        Ok(dataset)
    }

    /// Appends a column.
    ///
    /// # Errors
    ///
    /// Fails if the name is taken or the length differs from existing columns.
    pub fn push_column(&mut self, column: Column) -> Result<(), DataSetError> {
        if self.get(&column.name).is_some() {
            return Err(DataSetError::DuplicateColumn(column.name));
        }
        if let Some(first) = self.columns.first() {
            if first.values.len() != column.values.len() {
                return Err(DataSetError::LengthMismatch {
                    column: column.name,
                    expected: first.values.len(),
                    actual: column.values.len(),
                });
            }
        }
        self.columns.push(column);
        Ok(())
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns a column by name.
    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Iterates over columns in order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }
}

impl TabularData for DataSet {
    fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    fn column(&self, name: &str) -> Option<&dyn ColumnView> {
        self.get(name).map(|c| c as &dyn ColumnView)
    }
}
