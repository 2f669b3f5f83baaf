use crate::descriptors::protein_analysis::ProteinAnalysis;
use crate::descriptors::scales::{EMINI, HOPP_WOODS};
use crate::descriptors::{DescriptorValue, Descriptors, FieldSpec};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Physicochemical descriptors of a protein chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LargeMoleculeDescriptors {
    pub sequence: String,
    pub protein_analysis: ProteinAnalysis,
    pub length: usize,

    pub molecular_weight: f64,
    pub aromaticity: f64,
    pub instability_index: f64,
    pub isoelectric_point: f64,
    pub gravy: f64,
    pub charge_at_ph6: f64,
    pub charge_at_ph7: f64,

    pub helix_fraction: f64,
    pub turn_structure_fraction: f64,
    pub sheet_structure_fraction: f64,

    pub molar_extinction_coefficient_reduced: f64,
    pub molar_extinction_coefficient_oxidized: f64,

    pub avg_hydrophilicity: f64,
    pub avg_surface_accessibility: f64,
}

impl LargeMoleculeDescriptors {
    /// Compute the descriptors of a sequence.
    ///
    /// Returns `None` for an empty sequence, which has no descriptors.
    pub fn from_sequence(sequence: &str) -> Option<Self> {
        if sequence.is_empty() {
            return None;
        }
        let protein_analysis = ProteinAnalysis::new(sequence);
        let (helix_fraction, turn_structure_fraction, sheet_structure_fraction) =
            protein_analysis.secondary_structure_fraction();
        let (molar_extinction_coefficient_reduced, molar_extinction_coefficient_oxidized) =
            protein_analysis.molar_extinction_coefficient();

        Some(LargeMoleculeDescriptors {
            sequence: sequence.to_string(),
            length: protein_analysis.length(),
            molecular_weight: protein_analysis.molecular_weight(),
            aromaticity: protein_analysis.aromaticity(),
            instability_index: protein_analysis.instability_index(),
            isoelectric_point: protein_analysis.isoelectric_point(),
            gravy: protein_analysis.gravy(),
            charge_at_ph6: protein_analysis.charge_at_ph(6.0),
            charge_at_ph7: protein_analysis.charge_at_ph(7.0),
            helix_fraction,
            turn_structure_fraction,
            sheet_structure_fraction,
            molar_extinction_coefficient_reduced,
            molar_extinction_coefficient_oxidized,
            avg_hydrophilicity: protein_analysis.average_scale(&HOPP_WOODS),
            avg_surface_accessibility: protein_analysis.average_scale(&EMINI),
            protein_analysis,
        })
    }
}

impl Descriptors for LargeMoleculeDescriptors {
    const SCHEMA: &'static [FieldSpec] = &[
        FieldSpec::auxiliary("sequence"),
        FieldSpec::auxiliary("protein_analysis"),
        FieldSpec::descriptor("length"),
        FieldSpec::descriptor("molecular_weight"),
        FieldSpec::descriptor("aromaticity"),
        FieldSpec::descriptor("instability_index"),
        FieldSpec::descriptor("isoelectric_point"),
        FieldSpec::descriptor("gravy"),
        FieldSpec::descriptor("charge_at_pH6"),
        FieldSpec::descriptor("charge_at_pH7"),
        FieldSpec::descriptor("helix_fraction"),
        FieldSpec::descriptor("turn_structure_fraction"),
        FieldSpec::descriptor("sheet_structure_fraction"),
        FieldSpec::descriptor("molar_extinction_coefficient_reduced"),
        FieldSpec::descriptor("molar_extinction_coefficient_oxidized"),
        FieldSpec::descriptor("avg_hydrophilicity"),
        FieldSpec::descriptor("avg_surface_accessibility"),
    ];

    fn as_mapping(&self) -> HashMap<String, DescriptorValue> {
        let floats = [
            ("molecular_weight", self.molecular_weight),
            ("aromaticity", self.aromaticity),
            ("instability_index", self.instability_index),
            ("isoelectric_point", self.isoelectric_point),
            ("gravy", self.gravy),
            ("charge_at_pH6", self.charge_at_ph6),
            ("charge_at_pH7", self.charge_at_ph7),
            ("helix_fraction", self.helix_fraction),
            ("turn_structure_fraction", self.turn_structure_fraction),
            ("sheet_structure_fraction", self.sheet_structure_fraction),
            (
                "molar_extinction_coefficient_reduced",
                self.molar_extinction_coefficient_reduced,
            ),
            (
                "molar_extinction_coefficient_oxidized",
                self.molar_extinction_coefficient_oxidized,
            ),
            ("avg_hydrophilicity", self.avg_hydrophilicity),
            ("avg_surface_accessibility", self.avg_surface_accessibility),
        ];
        let mut mapping: HashMap<String, DescriptorValue> = floats
            .iter()
            .map(|(k, v)| (k.to_string(), DescriptorValue::Float(*v)))
            .collect();
        mapping.insert("sequence".to_string(), DescriptorValue::Text(self.sequence.clone()));
        mapping.insert(
            "protein_analysis".to_string(),
            DescriptorValue::Counts(self.protein_analysis.amino_acid_counts()),
        );
        mapping.insert("length".to_string(), DescriptorValue::Integer(self.length));
        mapping
    }
}
