//! Per-species properties that mixtures can aggregate.

use std::fmt;

use crate::error::ThermoResult;
use crate::species::SpeciesRecord;
use tc_core::units::Temperature;

/// A species evaluator usable by [`crate::Mixture::extensive`].
pub type Evaluator = fn(&SpeciesRecord, Temperature) -> ThermoResult<f64>;

/// Species properties that average by mass fraction over a mixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Specific heat capacity [J/(kg·K)].
    CpMass,
    /// Sensible enthalpy [J/mol].
    SensibleEnthalpyMolar,
    /// Entropy [J/(mol·K)].
    EntropyMolar,
    /// Gibbs free energy [J/mol].
    GibbsMolar,
}

impl Property {
    pub const ALL: [Property; 4] = [
        Property::CpMass,
        Property::SensibleEnthalpyMolar,
        Property::EntropyMolar,
        Property::GibbsMolar,
    ];

    /// The species method computing this property.
    pub fn evaluator(self) -> Evaluator {
        match self {
            Property::CpMass => SpeciesRecord::cp_mass,
            Property::SensibleEnthalpyMolar => SpeciesRecord::sensible_enthalpy_molar,
            Property::EntropyMolar => SpeciesRecord::entropy_molar,
            Property::GibbsMolar => SpeciesRecord::gibbs_molar,
        }
    }

    pub fn evaluate(self, species: &SpeciesRecord, t: Temperature) -> ThermoResult<f64> {
        (self.evaluator())(species, t)
    }

    pub fn unit(self) -> &'static str {
        match self {
            Property::CpMass => "J/(kg·K)",
            Property::SensibleEnthalpyMolar | Property::GibbsMolar => "J/mol",
            Property::EntropyMolar => "J/(mol·K)",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Property::CpMass => "cp",
            Property::SensibleEnthalpyMolar => "sensible enthalpy",
            Property::EntropyMolar => "entropy",
            Property::GibbsMolar => "gibbs free energy",
        };
        write!(f, "{name} [{}]", self.unit())
    }
}
