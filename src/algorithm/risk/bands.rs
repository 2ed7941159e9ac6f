//! Banding of continuous health measurements
//!
//! A band table partitions a variable's domain with `N + 1` ascending
//! boundaries into `N` labelled bands. Clinical bands are half-open
//! `[lower, upper)` except the last, which is closed so the maximum boundary
//! still maps to a band. Model bands close on the upper edge instead,
//! `(lower, upper]`, with the first band also holding its lower boundary.
//! Values outside `[first, last]` are handled by [`OutOfBandPolicy`].

use crate::config::OutOfBandPolicy;
use crate::error::{Error, Result};
use crate::models::features::{AgeBand, BloodPressureBand, BmiBand};

/// Which edge of each band holds its boundary value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BandEdges {
    /// `[lower, upper)`, last band closed
    #[default]
    LowerInclusive,
    /// `(lower, upper]`, first band closed
    UpperInclusive,
}

/// A declarative partition of a continuous variable into labelled bands
#[derive(Debug, Clone, Copy)]
pub struct BandTable<L: 'static> {
    /// Variable name used in error messages
    pub name: &'static str,
    /// Ascending boundaries, one more than there are labels
    pub boundaries: &'static [f64],
    pub labels: &'static [L],
    pub edges: BandEdges,
}

/// BMI categories
pub const BMI_BANDS: BandTable<BmiBand> = BandTable {
    name: "BMI",
    boundaries: &[0.0, 18.5, 24.9, 29.9, 100.0],
    labels: &[
        BmiBand::Underweight,
        BmiBand::Normal,
        BmiBand::Overweight,
        BmiBand::Obese,
    ],
    edges: BandEdges::LowerInclusive,
};

/// Systolic blood pressure categories
pub const BLOOD_PRESSURE_BANDS: BandTable<BloodPressureBand> = BandTable {
    name: "Blood_Pressure",
    boundaries: &[0.0, 120.0, 140.0, 160.0, 200.0],
    labels: &[
        BloodPressureBand::Normal,
        BloodPressureBand::Prehypertension,
        BloodPressureBand::Stage1,
        BloodPressureBand::Stage2,
    ],
    edges: BandEdges::LowerInclusive,
};

/// Age groups
pub const AGE_BANDS: BandTable<AgeBand> = BandTable {
    name: "Age",
    boundaries: &[0.0, 30.0, 45.0, 60.0, 75.0, 100.0],
    labels: &[
        AgeBand::YoungAdult,
        AgeBand::Adult,
        AgeBand::MiddleAge,
        AgeBand::Senior,
        AgeBand::Elderly,
    ],
    edges: BandEdges::LowerInclusive,
};

/// Ordinal BMI risk used as a model input
pub const MODEL_BMI_BANDS: BandTable<u8> = BandTable {
    name: "BMI_Risk",
    boundaries: &[0.0, 18.5, 25.0, 30.0, f64::INFINITY],
    labels: &[0, 1, 2, 3],
    edges: BandEdges::UpperInclusive,
};

/// Ordinal blood pressure risk used as a model input
pub const MODEL_BLOOD_PRESSURE_BANDS: BandTable<u8> = BandTable {
    name: "BP_Risk",
    boundaries: &[0.0, 120.0, 140.0, f64::INFINITY],
    labels: &[0, 1, 2],
    edges: BandEdges::UpperInclusive,
};

/// Ordinal glucose risk used as a model input
pub const MODEL_GLUCOSE_BANDS: BandTable<u8> = BandTable {
    name: "Glucose_Risk",
    boundaries: &[0.0, 100.0, 126.0, f64::INFINITY],
    labels: &[0, 1, 2],
    edges: BandEdges::UpperInclusive,
};

impl<L: Copy> BandTable<L> {
    /// Check the table's structural invariants
    pub fn validate(&self) -> Result<()> {
        validate_table(self.name, self.boundaries, self.labels.len())
    }

    /// Label of the band containing `value`
    pub fn classify(&self, value: f64, policy: OutOfBandPolicy) -> Result<L> {
        let idx = self.band_index(value, policy)?;
        Ok(self.labels[idx])
    }

    /// Index of the band containing `value`
    pub fn band_index(&self, value: f64, policy: OutOfBandPolicy) -> Result<usize> {
        band_index(
            self.name,
            value,
            self.boundaries,
            self.labels.len(),
            self.edges,
            policy,
        )
    }
}

/// Label of the band whose interval contains `value`, rejecting out-of-range values
///
/// `boundaries` must hold one more element than `labels`.
///
/// # Example
/// ```
/// use diabetes_risk::algorithm::risk::bands::classify;
///
/// let label = classify(18.5, &[0.0, 18.5, 24.9, 29.9, 100.0], &["Underweight", "Normal", "Overweight", "Obese"]).unwrap();
/// assert_eq!(*label, "Normal");
/// ```
pub fn classify<'a, L>(value: f64, boundaries: &[f64], labels: &'a [L]) -> Result<&'a L> {
    classify_with_policy(value, boundaries, labels, OutOfBandPolicy::Reject)
}

/// [`classify`] with an explicit out-of-band policy
pub fn classify_with_policy<'a, L>(
    value: f64,
    boundaries: &[f64],
    labels: &'a [L],
    policy: OutOfBandPolicy,
) -> Result<&'a L> {
    let idx = band_index(
        "value",
        value,
        boundaries,
        labels.len(),
        BandEdges::LowerInclusive,
        policy,
    )?;
    Ok(&labels[idx])
}

fn validate_table(name: &str, boundaries: &[f64], label_count: usize) -> Result<()> {
    let invalid = |reason: String| Error::InvalidBandTable {
        name: name.to_string(),
        reason,
    };

    if label_count == 0 {
        return Err(invalid("at least one band is required".to_string()));
    }
    if boundaries.len() != label_count + 1 {
        return Err(invalid(format!(
            "{} boundaries cannot delimit {} labels",
            boundaries.len(),
            label_count
        )));
    }
    if let Some(pos) = boundaries[..boundaries.len() - 1]
        .iter()
        .position(|b| !b.is_finite())
    {
        return Err(invalid(format!("boundary {pos} is not finite")));
    }
    if boundaries.last().is_some_and(|b| b.is_nan()) {
        return Err(invalid("last boundary is NaN".to_string()));
    }
    if let Some(pos) = boundaries.windows(2).position(|w| w[0] >= w[1]) {
        return Err(invalid(format!(
            "boundaries are not strictly increasing at position {}",
            pos + 1
        )));
    }
    Ok(())
}

fn band_index(
    name: &str,
    value: f64,
    boundaries: &[f64],
    label_count: usize,
    edges: BandEdges,
    policy: OutOfBandPolicy,
) -> Result<usize> {
    validate_table(name, boundaries, label_count)?;

    if !value.is_finite() {
        return Err(Error::validation(name, format!("{value} is not a finite number")));
    }

    let min = boundaries[0];
    let max = boundaries[label_count];
    let last = label_count - 1;

    if value < min || value > max {
        return match policy {
            OutOfBandPolicy::Reject => Err(Error::OutOfBand {
                variable: name.to_string(),
                value,
                min,
                max,
            }),
            OutOfBandPolicy::Clamp if value < min => Ok(0),
            OutOfBandPolicy::Clamp => Ok(last),
        };
    }

    let idx = match edges {
        // At least one boundary is at or below the value since value >= min.
        BandEdges::LowerInclusive => boundaries.partition_point(|&b| b <= value) - 1,
        // No boundary lies strictly below the minimum itself.
        BandEdges::UpperInclusive => boundaries
            .partition_point(|&b| b < value)
            .saturating_sub(1),
    };
    Ok(idx.min(last))
}
