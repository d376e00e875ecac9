//! Raw species records as delivered by a reference database, plus JSON/YAML readers.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ThermoError, ThermoResult};
use crate::species::{N_COEFFS, SpeciesRecord};

pub type SourceResult<T> = Result<T, SourceError>;

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A document holding many species records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeciesDocument {
    /// Free-form provenance note.
    #[serde(default)]
    pub source: Option<String>,
    pub species: Vec<RawSpeciesRecord>,
}

/// One species exactly as stored in the source, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSpeciesRecord {
    pub formula: String,
    /// [g/mol]
    pub molecular_weight: f64,
    #[serde(default)]
    pub hf298_div_r: f64,
    pub coefficients: RawCoefficients,
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCoefficients {
    /// Tmin to 1000 K
    pub low: Vec<f64>,
    /// 1000 K to Tmax
    pub high: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawElement {
    pub name: String,
    pub num_of_atoms: u32,
}

impl RawSpeciesRecord {
    /// Validate the raw data and build a species record (molar mass in kg/mol).
    pub fn to_species(&self) -> ThermoResult<SpeciesRecord> {
        let low = self.coefficient_array(&self.coefficients.low)?;
        let high = self.coefficient_array(&self.coefficients.high)?;
        let elements = self
            .elements
            .iter()
            .map(|e| (e.name.clone(), e.num_of_atoms))
            .collect();

        SpeciesRecord::new(
            self.formula.clone(),
            low,
            high,
            self.molecular_weight / 1000.0,
            self.hf298_div_r,
            elements,
        )
    }

    fn coefficient_array(&self, coeffs: &[f64]) -> ThermoResult<[f64; N_COEFFS]> {
        coeffs
            .try_into()
            .map_err(|_| ThermoError::InvalidRecord {
                formula: self.formula.clone(),
                what: "expected 7 coefficients per temperature range",
            })
    }
}

pub fn parse_json(content: &str) -> SourceResult<SpeciesDocument> {
    Ok(serde_json::from_str(content)?)
}

pub fn parse_yaml(content: &str) -> SourceResult<SpeciesDocument> {
    Ok(serde_yaml::from_str(content)?)
}

pub fn read_json(path: &Path) -> SourceResult<SpeciesDocument> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

pub fn read_yaml(path: &Path) -> SourceResult<SpeciesDocument> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}
