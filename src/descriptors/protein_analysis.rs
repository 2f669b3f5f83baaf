//! Protein Analysis
//!
//! Physicochemical properties of a protein sequence, computed from its residue
//! composition.
//!
//! Input is accepted leniently: residues outside the 20 standard amino acids,
//! such as `X`, are not rejected. They count towards the sequence length but
//! contribute nothing else, so they add no weight to `molecular_weight` and no
//! peptide bond either.
use crate::descriptors::scales::{
    residue_index, scale_value, AMINO_ACIDS, AVERAGE_WEIGHTS, DIPEPTIDE_INSTABILITY, KYTE_DOOLITTLE, WATER_WEIGHT,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const N_TERM_PK: f64 = 7.5;
const C_TERM_PK: f64 = 3.55;
const POSITIVE_PKS: [(char, f64); 3] = [('K', 10.0), ('R', 12.0), ('H', 5.98)];
const NEGATIVE_PKS: [(char, f64); 4] = [('D', 4.05), ('E', 4.45), ('C', 9.0), ('Y', 10.0)];

// Bisection bounds for the isoelectric point search.
const PI_START: f64 = 7.775;
const PI_LOWER: f64 = 4.05;
const PI_UPPER: f64 = 12.0;
const PI_TOLERANCE: f64 = 0.0001;

const HELIX_RESIDUES: &str = "VIYFWL";
const TURN_RESIDUES: &str = "NPGS";
const SHEET_RESIDUES: &str = "EMAL";

const TRP_EXTINCTION: f64 = 5500.0;
const TYR_EXTINCTION: f64 = 1490.0;
const CYSTINE_EXTINCTION: f64 = 125.0;

fn n_terminal_pk(aa: Option<char>) -> f64 {
    match aa {
        Some('A') => 7.59,
        Some('M') => 7.0,
        Some('S') => 6.93,
        Some('P') => 8.36,
        Some('T') => 6.82,
        Some('V') => 7.44,
        Some('E') => 7.7,
        _ => N_TERM_PK,
    }
}

fn c_terminal_pk(aa: Option<char>) -> f64 {
    match aa {
        Some('D') => 4.55,
        Some('E') => 4.75,
        _ => C_TERM_PK,
    }
}

/// Composition based analysis of a single protein sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinAnalysis {
    sequence: String,
    counts: [usize; 20],
}

impl ProteinAnalysis {
    /// Analyse a one letter code sequence. Lower case letters are accepted.
    pub fn new(sequence: &str) -> Self {
        let sequence = sequence.to_ascii_uppercase();
        let mut counts = [0; 20];
        for i in sequence.chars().filter_map(residue_index) {
            counts[i] += 1;
        }
        ProteinAnalysis { sequence, counts }
    }

    /// Number of residues, non-standard residues included.
    pub fn length(&self) -> usize {
        self.sequence.chars().count()
    }

    /// Count of a single amino acid.
    pub fn count(&self, aa: char) -> usize {
        residue_index(aa).map_or(0, |i| self.counts[i])
    }

    fn count_of(&self, residues: &str) -> usize {
        residues.chars().map(|aa| self.count(aa)).sum()
    }

    fn fraction_of(&self, residues: &str) -> f64 {
        self.count_of(residues) as f64 / self.length() as f64
    }

    /// Counts of the standard amino acids, keyed by one letter code.
    pub fn amino_acid_counts(&self) -> BTreeMap<char, usize> {
        AMINO_ACIDS.iter().copied().zip(self.counts.iter().copied()).collect()
    }

    /// Average molecular weight in Daltons, one water removed per peptide bond.
    pub fn molecular_weight(&self) -> f64 {
        let n_residues: usize = self.counts.iter().sum();
        if n_residues == 0 {
            return 0.0;
        }
        let residues: f64 = self
            .counts
            .iter()
            .zip(AVERAGE_WEIGHTS.iter())
            .map(|(c, w)| *c as f64 * w)
            .sum();
        residues - (n_residues - 1) as f64 * WATER_WEIGHT
    }

    /// Relative frequency of Phe, Trp and Tyr.
    pub fn aromaticity(&self) -> f64 {
        self.fraction_of("YWF")
    }

    /// Instability index from dipeptide weights. Values above 40 suggest an
    /// unstable protein.
    pub fn instability_index(&self) -> f64 {
        let residues: Vec<Option<usize>> = self.sequence.chars().map(residue_index).collect();
        let score: f64 = residues
            .windows(2)
            .filter_map(|w| match (w[0], w[1]) {
                (Some(a), Some(b)) => Some(DIPEPTIDE_INSTABILITY[a][b]),
                _ => None,
            })
            .sum();
        (10.0 / self.length() as f64) * score
    }

    /// Grand average of hydropathy (Kyte-Doolittle).
    pub fn gravy(&self) -> f64 {
        self.average_scale(&KYTE_DOOLITTLE)
    }

    /// Mean of a residue scale over the full sequence length.
    pub fn average_scale(&self, scale: &[f64; 20]) -> f64 {
        let total: f64 = self.sequence.chars().map(|aa| scale_value(scale, aa)).sum();
        total / self.length() as f64
    }

    /// Net charge at the given pH, using terminal adjusted pK values.
    pub fn charge_at_ph(&self, ph: f64) -> f64 {
        let first = self.sequence.chars().next();
        let last = self.sequence.chars().last();

        let positive_partial = |pk: f64| 1.0 / (10f64.powf(ph - pk) + 1.0);
        let negative_partial = |pk: f64| 1.0 / (10f64.powf(pk - ph) + 1.0);

        let positive = positive_partial(n_terminal_pk(first))
            + POSITIVE_PKS
                .iter()
                .map(|(aa, pk)| self.count(*aa) as f64 * positive_partial(*pk))
                .sum::<f64>();
        let negative = negative_partial(c_terminal_pk(last))
            + NEGATIVE_PKS
                .iter()
                .map(|(aa, pk)| self.count(*aa) as f64 * negative_partial(*pk))
                .sum::<f64>();
        positive - negative
    }

    /// pH at which the net charge is zero, found by bisection.
    pub fn isoelectric_point(&self) -> f64 {
        let mut ph = PI_START;
        let mut lower = PI_LOWER;
        let mut upper = PI_UPPER;
        while upper - lower > PI_TOLERANCE {
            if self.charge_at_ph(ph) > 0.0 {
                lower = ph;
            } else {
                upper = ph;
            }
            ph = (lower + upper) / 2.0;
        }
        ph
    }

    /// Fractions of residues that tend to be in a helix, turn and sheet.
    pub fn secondary_structure_fraction(&self) -> (f64, f64, f64) {
        (
            self.fraction_of(HELIX_RESIDUES),
            self.fraction_of(TURN_RESIDUES),
            self.fraction_of(SHEET_RESIDUES),
        )
    }

    /// Molar extinction coefficients at 280nm, with reduced cysteines and with
    /// all cysteine pairs forming cystines.
    pub fn molar_extinction_coefficient(&self) -> (f64, f64) {
        let reduced = self.count('W') as f64 * TRP_EXTINCTION + self.count('Y') as f64 * TYR_EXTINCTION;
        let oxidized = reduced + (self.count('C') / 2) as f64 * CYSTINE_EXTINCTION;
        (reduced, oxidized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH_FRAGMENT: &str = "EVQLVESGGGLVQPGGSLRLSCAASGFTFSSYAMSWVRQAPGKGLEWVS";

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() < tol, "{} != {}", a, b);
    }

    #[test]
    fn test_molecular_weight() {
        let pa = ProteinAnalysis::new("MKKTAIAIAVALAGFATVAFA");
        assert_eq!(pa.length(), 21);
        assert_close(pa.molecular_weight(), 2065.5206, 1e-6);
        assert_close(ProteinAnalysis::new(VH_FRAGMENT).molecular_weight(), 5088.6858, 1e-6);
    }

    #[test]
    fn test_composition_descriptors() {
        let pa = ProteinAnalysis::new("MKKTAIAIAVALAGFATVAFA");
        assert_close(pa.aromaticity(), 2.0 / 21.0, 1e-12);
        assert_close(pa.gravy(), 1.595238, 1e-5);
        assert_close(pa.instability_index(), 9.523810, 1e-5);
        let (helix, turn, sheet) = pa.secondary_structure_fraction();
        assert_close(helix, 7.0 / 21.0, 1e-12);
        assert_close(turn, 1.0 / 21.0, 1e-12);
        assert_close(sheet, 10.0 / 21.0, 1e-12);
    }

    #[test]
    fn test_instability_index_all_residues() {
        let pa = ProteinAnalysis::new("ACDEFGHIKLMNPQRSTVWY");
        assert_close(pa.instability_index(), 84.74, 1e-9);
    }

    #[test]
    fn test_charge_and_isoelectric_point() {
        let pa = ProteinAnalysis::new("MKKTAIAIAVALAGFATVAFA");
        assert_close(pa.charge_at_ph(7.0), 1.498357, 1e-5);
        assert_close(pa.isoelectric_point(), 10.0009, 1e-3);
        assert!(pa.charge_at_ph(6.0) > pa.charge_at_ph(7.0));

        let vh = ProteinAnalysis::new(VH_FRAGMENT);
        assert_close(vh.isoelectric_point(), 6.3152, 1e-3);
        assert_close(vh.charge_at_ph(vh.isoelectric_point()), 0.0, 1e-3);
    }

    #[test]
    fn test_extinction_coefficient() {
        let (reduced, oxidized) = ProteinAnalysis::new(VH_FRAGMENT).molar_extinction_coefficient();
        assert_eq!(reduced, 12490.0);
        assert_eq!(oxidized, 12490.0);
        let (reduced, oxidized) = ProteinAnalysis::new("WCYC").molar_extinction_coefficient();
        assert_eq!(reduced, 6990.0);
        assert_eq!(oxidized, 7115.0);
    }

    #[test]
    fn test_non_standard_residues() {
        let pa = ProteinAnalysis::new("akxa");
        assert_eq!(pa.length(), 4);
        assert_eq!(pa.count('A'), 2);
        assert_eq!(pa.count('X'), 0);
        assert_eq!(pa.amino_acid_counts()[&'K'], 1);
        // The unknown residue breaks both dipeptides around it.
        assert_eq!(pa.instability_index(), 10.0 / 4.0 * 1.0);
        // And weighs nothing, so "AKXA" weighs the same as "AKA".
        assert_close(pa.molecular_weight(), ProteinAnalysis::new("AKA").molecular_weight(), 1e-9);
        assert_close(pa.molecular_weight(), 288.3434, 1e-6);
    }
}
