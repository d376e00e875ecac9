//! In-memory species database: search, lookup and mixture assembly.

use std::path::Path;

use tracing::{debug, trace};

use crate::error::{ThermoError, ThermoResult};
use crate::mixture::Mixture;
use crate::source::{self, RawSpeciesRecord, SourceResult, SpeciesDocument};
use crate::species::SpeciesRecord;

const BUILTIN_JSON: &str = include_str!("../data/burcat_common.json");

/// Read-only index of raw species records in source order.
///
/// Building a database is the expensive step; build it once and share it.
#[derive(Debug, Clone, Default)]
pub struct Database {
    records: Vec<RawSpeciesRecord>,
}

impl Database {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RawSpeciesRecord>,
    {
        let records: Vec<_> = records.into_iter().collect();
        debug!(count = records.len(), "species database built");
        Self { records }
    }

    /// Common atmospheric species bundled with the crate.
    pub fn builtin() -> SourceResult<Self> {
        Self::from_json_str(BUILTIN_JSON)
    }

    pub fn from_json_str(content: &str) -> SourceResult<Self> {
        Ok(Self::from_document(source::parse_json(content)?))
    }

    pub fn from_yaml_str(content: &str) -> SourceResult<Self> {
        Ok(Self::from_document(source::parse_yaml(content)?))
    }

    pub fn load_json(path: &Path) -> SourceResult<Self> {
        Ok(Self::from_document(source::read_json(path)?))
    }

    pub fn load_yaml(path: &Path) -> SourceResult<Self> {
        Ok(Self::from_document(source::read_yaml(path)?))
    }

    fn from_document(doc: SpeciesDocument) -> Self {
        if let Some(origin) = &doc.source {
            debug!(origin = origin.as_str(), "loading species document");
        }
        Self::from_records(doc.species)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All formulas in source order.
    pub fn formulas(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.formula.as_str())
    }

    /// Formulas containing `needle` (case-sensitive), in source order.
    pub fn search(&self, needle: &str) -> Vec<&str> {
        self.formulas().filter(|f| f.contains(needle)).collect()
    }

    /// Species whose formula is exactly `formula`; the first one wins on duplicates.
    pub fn lookup(&self, formula: &str) -> ThermoResult<SpeciesRecord> {
        let Some(raw) = self.records.iter().find(|r| r.formula == formula) else {
            trace!(formula, "formula not in database");
            return Err(ThermoError::NotFound {
                formula: formula.to_string(),
            });
        };
        raw.to_species()
    }

    /// Mixture from `(formula, quantity)` pairs, in input order.
    pub fn build_mixture<I, S>(&self, components: I) -> ThermoResult<Mixture>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut mixture = Mixture::new();
        for (formula, quantity) in components {
            mixture.add(self.lookup(formula.as_ref())?, quantity);
        }
        Ok(mixture)
    }
}
