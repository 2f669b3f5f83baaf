use crate::constants::{LARGE_MOL_FIGSHAPE, SAMPLE_COLUMN_SUFFIX};
use crate::data::{Column, DescriptorTable};
use crate::descriptors::{Descriptors, LargeMoleculeDescriptors};
use crate::errors::MetricsError;
use crate::utils::{items_to_strings, sorted_unique};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of input molecule chain. Selects the feature schema and the
/// reference population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainCategory {
    #[serde(rename = "fv_heavy")]
    FvHeavy,
    #[serde(rename = "fv_light")]
    FvLight,
}

impl ChainCategory {
    /// Column prefix used for this chain.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainCategory::FvHeavy => "fv_heavy",
            ChainCategory::FvLight => "fv_light",
        }
    }
}

impl fmt::Display for ChainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainCategory {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fv_heavy" => Ok(ChainCategory::FvHeavy),
            "fv_light" => Ok(ChainCategory::FvLight),
            _ => Err(MetricsError::UnknownCategory(
                s.to_string(),
                items_to_strings(vec!["fv_heavy", "fv_light"]),
            )),
        }
    }
}

#[derive(Deserialize)]
struct ColumnInfoFields {
    feature_columns: Vec<String>,
    sample_column: String,
    figshape: (usize, usize),
}

impl From<ColumnInfoFields> for ColumnInfo {
    fn from(fields: ColumnInfoFields) -> Self {
        ColumnInfo::new(fields.feature_columns, fields.sample_column, fields.figshape)
    }
}

/// Columns used to compare a batch of designs for one chain category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ColumnInfoFields")]
pub struct ColumnInfo {
    feature_columns: Vec<String>,
    sample_column: String,
    figshape: (usize, usize),
}

impl ColumnInfo {
    /// Feature columns are sorted and de-duplicated.
    pub fn new(feature_columns: Vec<String>, sample_column: impl Into<String>, figshape: (usize, usize)) -> Self {
        ColumnInfo {
            feature_columns: sorted_unique(feature_columns),
            sample_column: sample_column.into(),
            figshape,
        }
    }

    /// Sorted, unique feature column names.
    pub fn feature_columns(&self) -> &[String] {
        &self.feature_columns
    }

    /// Column whose missing values mark invalid designs.
    pub fn sample_column(&self) -> &str {
        &self.sample_column
    }

    /// Plot grid shape hint, (rows, columns).
    pub fn figshape(&self) -> (usize, usize) {
        self.figshape
    }
}

/// Name of the table column holding a descriptor for a chain.
pub fn feature_column(chain: ChainCategory, descriptor: &str) -> String {
    format!("{}_{}", chain, descriptor)
}

/// Name of the sample column for a chain.
pub fn sample_column(chain: ChainCategory) -> String {
    format!("{}{}", chain, SAMPLE_COLUMN_SUFFIX)
}

/// Value of a named descriptor, `None` when the set has no numeric value for it.
fn descriptor_value(values: &[(&'static str, f64)], name: &str) -> Option<f64> {
    values.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
}

fn large_molecule_column_info(chain: ChainCategory) -> ColumnInfo {
    let features = LargeMoleculeDescriptors::descriptor_names()
        .into_iter()
        .map(|name| feature_column(chain, name))
        .collect();
    ColumnInfo::new(features, sample_column(chain), LARGE_MOL_FIGSHAPE)
}

/// Resolve the column info of a chain category.
pub fn get_column_info(chain: ChainCategory) -> ColumnInfo {
    match chain {
        ChainCategory::FvHeavy => large_molecule_column_info(chain),
        ChainCategory::FvLight => large_molecule_column_info(chain),
    }
}

impl DescriptorTable {
    /// Build a batch table by computing the descriptors of each sequence.
    ///
    /// Feature columns are named `<chain>_<descriptor>`, and the sample column
    /// holds the sequence itself. Empty sequences produce a row where every
    /// value is missing.
    ///
    /// * `chain` - Chain category of the sequences.
    /// * `sequences` - One letter code sequences, one per row.
    pub fn from_sequences(chain: ChainCategory, sequences: &[&str]) -> Result<Self, MetricsError> {
        let rows: Vec<Option<Vec<(&'static str, f64)>>> = sequences
            .iter()
            .map(|s| LargeMoleculeDescriptors::from_sequence(s).map(|d| d.descriptor_values()))
            .collect();

        let mut table = DescriptorTable::new(sequences.len());
        for name in LargeMoleculeDescriptors::descriptor_names() {
            let values = rows
                .iter()
                .map(|r| descriptor_value(r.as_deref()?, name))
                .collect();
            table.insert_column(feature_column(chain, name), Column::Numeric(values))?;
        }
        let samples = sequences
            .iter()
            .map(|s| if s.is_empty() { None } else { Some(s.to_string()) })
            .collect();
        table.insert_column(sample_column(chain), Column::Text(samples))?;
        Ok(table)
    }
}
