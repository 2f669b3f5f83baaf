use crate::errors::MetricsError;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

/// Data trait used throughout the package
/// to control for floating point numbers.
pub trait FloatData<T>:
    Mul<Output = T>
    + Display
    + Add<Output = T>
    + Div<Output = T>
    + Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Sub<Output = T>
    + std::marker::Send
    + std::marker::Sync
{
    /// Not a Number value.
    const NAN: T;
    /// Convert from usize.
    fn from_usize(v: usize) -> T;
    /// Check if value is NaN.
    fn is_nan(self) -> bool;
}

impl FloatData<f64> for f64 {
    const NAN: f64 = f64::NAN;

    fn from_usize(v: usize) -> f64 {
        v as f64
    }
    fn is_nan(self) -> bool {
        self.is_nan()
    }
}

impl FloatData<f32> for f32 {
    const NAN: f32 = f32::NAN;

    fn from_usize(v: usize) -> f32 {
        v as f32
    }
    fn is_nan(self) -> bool {
        self.is_nan()
    }
}

/// A single table column.
///
/// Missing cells are `None`. A numeric `Some(NaN)` is treated as missing as well,
/// since NaN cannot be told apart from an absent value once serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values")]
pub enum Column {
    /// Numeric descriptor values.
    Numeric(Vec<Option<f64>>),
    /// Text values, such as sequence identifiers.
    Text(Vec<Option<String>>),
}

impl Column {
    /// Number of rows, missing included.
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of non-missing cells.
    pub fn count_present(&self) -> usize {
        match self {
            Column::Numeric(v) => v.iter().filter(|x| matches!(x, Some(x_) if !x_.is_nan())).count(),
            Column::Text(v) => v.iter().filter(|x| x.is_some()).count(),
        }
    }

    /// The non-missing numeric values, in row order.
    /// Returns `None` for a text column.
    pub fn present_values(&self) -> Option<Vec<f64>> {
        match self {
            Column::Numeric(v) => Some(v.iter().flatten().copied().filter(|x| !x.is_nan()).collect()),
            Column::Text(_) => None,
        }
    }
}

/// Column oriented table of per-sequence descriptors.
///
/// Used both for a batch of generated designs and for a reference population.
/// All columns share the same number of rows, including tables read back
/// through serde.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DescriptorTableFields")]
pub struct DescriptorTable {
    n_rows: usize,
    columns: HashMap<String, Column>,
}

#[derive(Deserialize)]
struct DescriptorTableFields {
    n_rows: usize,
    columns: HashMap<String, Column>,
}

impl TryFrom<DescriptorTableFields> for DescriptorTable {
    type Error = MetricsError;

    fn try_from(fields: DescriptorTableFields) -> Result<Self, Self::Error> {
        let mut table = DescriptorTable::new(fields.n_rows);
        for (name, column) in fields.columns {
            table.insert_column(name, column)?;
        }
        Ok(table)
    }
}

impl DescriptorTable {
    /// Create a table with no columns, expecting `n_rows` rows per column.
    pub fn new(n_rows: usize) -> Self {
        DescriptorTable {
            n_rows,
            columns: HashMap::new(),
        }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Insert or replace a column.
    ///
    /// * `name` - Column name.
    /// * `column` - Column values, must have exactly `n_rows` entries.
    pub fn insert_column(&mut self, name: impl Into<String>, column: Column) -> Result<(), MetricsError> {
        let name = name.into();
        if column.len() != self.n_rows {
            return Err(MetricsError::ColumnLength(name, self.n_rows, column.len()));
        }
        self.columns.insert(name, column);
        Ok(())
    }

    /// Builder style variant of `insert_column` for numeric columns.
    pub fn with_numeric(mut self, name: impl Into<String>, values: Vec<Option<f64>>) -> Result<Self, MetricsError> {
        self.insert_column(name, Column::Numeric(values))?;
        Ok(self)
    }

    /// Builder style variant of `insert_column` for text columns.
    pub fn with_text(mut self, name: impl Into<String>, values: Vec<Option<String>>) -> Result<Self, MetricsError> {
        self.insert_column(name, Column::Text(values))?;
        Ok(self)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Column names in sorted order.
    pub fn column_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.columns.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}
