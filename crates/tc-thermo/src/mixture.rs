//! Gas mixtures defined by volumetric (molar) quantities.

use std::fmt;
use std::slice;

use crate::error::{ThermoError, ThermoResult};
use crate::property::Property;
use crate::species::{SpeciesRecord, ideal_gas_density};
use tc_core::units::constants::t_ref;
use tc_core::units::{
    Density, MolarEnergy, MolarHeatCapacity, MolarMass, Pressure, SpecEnthalpy,
    SpecHeatCapacity, Temperature,
};

/// How mixture quantities are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Basis {
    /// Quantities are volume (mole) amounts.
    #[default]
    Volume,
    /// Quantities are masses. Reserved; aggregates fail with
    /// [`ThermoError::UnsupportedBasis`].
    Mass,
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Basis::Volume => write!(f, "volume"),
            Basis::Mass => write!(f, "mass"),
        }
    }
}

/// Ordered list of `(species, quantity)` entries.
///
/// Quantities are not normalized; every aggregate divides by their actual sum.
/// Adding the same formula twice keeps two entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mixture {
    entries: Vec<(SpeciesRecord, f64)>,
    basis: Basis,
}

impl Mixture {
    /// Empty mixture on a volume basis.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_basis(basis: Basis) -> Self {
        Self {
            entries: Vec::new(),
            basis,
        }
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Append a component.
    pub fn add(&mut self, species: SpeciesRecord, quantity: f64) {
        self.entries.push((species, quantity));
    }

    /// Remove every entry whose formula is `formula`.
    pub fn delete(&mut self, formula: &str) -> ThermoResult<()> {
        let before = self.entries.len();
        self.entries.retain(|(s, _)| s.formula() != formula);
        if self.entries.len() == before {
            return Err(ThermoError::NotFound {
                formula: formula.to_string(),
            });
        }
        Ok(())
    }

    /// Entry for `formula`, if any.
    ///
    /// When the formula was added more than once the last entry is returned,
    /// whereas [`Mixture::delete`] removes all of them.
    // TODO: decide whether duplicate formulas should be merged on `add` so both paths agree.
    pub fn get(&self, formula: &str) -> Option<(&SpeciesRecord, f64)> {
        self.entries
            .iter()
            .rev()
            .find(|(s, _)| s.formula() == formula)
            .map(|(s, q)| (s, *q))
    }

    /// Entry at `index` in insertion order.
    pub fn get_index(&self, index: usize) -> Option<(&SpeciesRecord, f64)> {
        self.entries.get(index).map(|(s, q)| (s, *q))
    }

    pub fn iter(&self) -> Entries<'_> {
        Entries {
            inner: self.entries.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> f64 {
        self.entries.iter().map(|(_, q)| q).sum()
    }

    /// Total quantity and mixture molar mass [kg/mol].
    fn totals(&self) -> ThermoResult<(f64, MolarMass)> {
        if self.basis != Basis::Volume {
            return Err(ThermoError::UnsupportedBasis { basis: self.basis });
        }
        let n = self.total_quantity();
        if self.entries.is_empty() || n == 0.0 {
            return Err(ThermoError::EmptyMixture);
        }
        let m: f64 = self
            .entries
            .iter()
            .map(|(s, q)| q * s.molar_mass())
            .sum();
        Ok((n, m / n))
    }

    /// Equivalent molar mass `Σ Nᵢ Mᵢ / Σ Nᵢ` [kg/mol].
    pub fn molar_mass(&self) -> ThermoResult<MolarMass> {
        Ok(self.totals()?.1)
    }

    /// Mass-fraction weighted average `Σ Nᵢ Mᵢ xᵢ(T) / (Σ Nᵢ · Mₘ)` of a species property.
    pub fn extensive(&self, property: Property, t: Temperature) -> ThermoResult<f64> {
        let (n, mm) = self.totals()?;
        let evaluate = property.evaluator();

        let mut ext = 0.0;
        for (species, q) in &self.entries {
            ext += q * species.molar_mass() * evaluate(species, t)?;
        }
        Ok(ext / n / mm)
    }

    /// Ideal-gas density [kg/m³] from the equivalent molar mass.
    pub fn density(&self, p: Pressure, t: Temperature) -> ThermoResult<Density> {
        ideal_gas_density(p, t, self.molar_mass()?)
    }

    /// Specific heat capacity [J/(kg·K)].
    pub fn cp_mass(&self, t: Temperature) -> ThermoResult<SpecHeatCapacity> {
        self.extensive(Property::CpMass, t)
    }

    /// Specific heat capacity at 298.15 K [J/(kg·K)].
    pub fn cp_mass_ref(&self) -> ThermoResult<SpecHeatCapacity> {
        self.cp_mass(t_ref())
    }

    /// Sensible enthalpy [J/mol].
    pub fn sensible_enthalpy_molar(&self, t: Temperature) -> ThermoResult<MolarEnergy> {
        self.extensive(Property::SensibleEnthalpyMolar, t)
    }

    /// Total enthalpy [J/kg], taken as `cp(T) * T`.
    pub fn enthalpy_mass(&self, t: Temperature) -> ThermoResult<SpecEnthalpy> {
        Ok(self.cp_mass(t)? * t.value)
    }

    /// Entropy [J/(mol·K)].
    pub fn entropy_molar(&self, t: Temperature) -> ThermoResult<MolarHeatCapacity> {
        self.extensive(Property::EntropyMolar, t)
    }

    /// Gibbs free energy [J/mol].
    pub fn gibbs_molar(&self, t: Temperature) -> ThermoResult<MolarEnergy> {
        self.extensive(Property::GibbsMolar, t)
    }
}

impl fmt::Display for Mixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Mixture>:")?;
        for (species, q) in self {
            write!(f, "\n    {} at {}", species.formula(), q)?;
        }
        Ok(())
    }
}

/// Borrowed iterator over mixture entries in insertion order.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: slice::Iter<'a, (SpeciesRecord, f64)>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a SpeciesRecord, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(s, q)| (s, *q))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(s, q)| (s, *q))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl<'a> IntoIterator for &'a Mixture {
    type Item = (&'a SpeciesRecord, f64);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
