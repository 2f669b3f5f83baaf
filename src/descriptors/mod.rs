//! Descriptors
//!
//! Named scalar features computed from a single sequence. Each descriptor type
//! declares a static schema listing all of its fields, and which of them are
//! reportable descriptors as opposed to auxiliary state such as the raw input.

pub mod large_molecule;
pub mod protein_analysis;
pub mod scales;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use large_molecule::LargeMoleculeDescriptors;
pub use protein_analysis::ProteinAnalysis;

/// A single field of a descriptor schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, as used in mappings and table columns.
    pub name: &'static str,
    /// Whether the field is a reportable descriptor.
    pub is_descriptor: bool,
}

impl FieldSpec {
    pub const fn descriptor(name: &'static str) -> Self {
        FieldSpec {
            name,
            is_descriptor: true,
        }
    }

    pub const fn auxiliary(name: &'static str) -> Self {
        FieldSpec {
            name,
            is_descriptor: false,
        }
    }
}

/// Value of a single descriptor set field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DescriptorValue {
    Integer(usize),
    Float(f64),
    Text(String),
    /// Residue composition.
    Counts(BTreeMap<char, usize>),
}

impl DescriptorValue {
    /// Numeric view of the value, `None` for text and composition values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DescriptorValue::Integer(v) => Some(*v as f64),
            DescriptorValue::Float(v) => Some(*v),
            DescriptorValue::Text(_) | DescriptorValue::Counts(_) => None,
        }
    }
}

/// A fixed schema of named features for one sequence.
pub trait Descriptors {
    /// Every field of the schema, in declaration order.
    const SCHEMA: &'static [FieldSpec];

    /// Names of the descriptor fields, in declaration order.
    ///
    /// Depends only on the schema, so it is the same for every instance.
    fn descriptor_names() -> Vec<&'static str> {
        Self::SCHEMA
            .iter()
            .filter(|f| f.is_descriptor)
            .map(|f| f.name)
            .collect()
    }

    /// Every field, descriptor and auxiliary, keyed by name.
    fn as_mapping(&self) -> HashMap<String, DescriptorValue>;

    /// Numeric values of the descriptor fields, in declaration order.
    fn descriptor_values(&self) -> Vec<(&'static str, f64)> {
        let mapping = self.as_mapping();
        Self::descriptor_names()
            .into_iter()
            .filter_map(|name| mapping.get(name).and_then(|v| v.as_f64()).map(|v| (name, v)))
            .collect()
    }
}
