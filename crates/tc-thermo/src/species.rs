//! Species records and their NASA 7-coefficient property evaluators.
//!
//! Each record carries two coefficient sets `a0..a6`:
//! - `cp/R   = a0 + a1 T + a2 T² + a3 T³ + a4 T⁴`
//! - `H/(RT) = a0 + a1 T/2 + a2 T²/3 + a3 T³/4 + a4 T⁴/5 + a5/T`
//! - `S/R    = a0 ln T + a1 T + a2 T²/2 + a3 T³/3 + a4 T⁴/4 + a6`
//!
//! The low set covers `200 K < T <= 1000 K`, the high set `1000 K < T < 6000 K`.
//! Nothing is extrapolated outside those ranges.

use std::fmt;

use crate::error::{ThermoError, ThermoResult};
use tc_core::units::constants::R_UNIVERSAL;
use tc_core::units::{
    Density, MolarEnergy, MolarHeatCapacity, MolarMass, Pressure, SpecEnthalpy,
    SpecHeatCapacity, Temperature, k, kg_m3,
};

/// Lower bound of the polynomial fits (exclusive) [K].
pub const T_MIN_K: f64 = 200.0;
/// Split between the low and high coefficient sets [K]; belongs to the low set.
pub const T_MID_K: f64 = 1000.0;
/// Upper bound of the polynomial fits (exclusive) [K].
pub const T_MAX_K: f64 = 6000.0;
/// Reference temperature used by [`SpeciesRecord::cp_mass_ref`] [K].
pub const T_CP_REF_K: f64 = 298.0;

/// Number of coefficients per temperature range.
pub const N_COEFFS: usize = 7;

/// Immutable thermochemical data for one species.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesRecord {
    formula: String,
    low: [f64; N_COEFFS],
    high: [f64; N_COEFFS],
    /// [kg/mol]
    molar_mass: MolarMass,
    hf298_div_r: f64,
    elements: Vec<(String, u32)>,
}

impl SpeciesRecord {
    /// Create a species record.
    ///
    /// `molar_mass` is in kg/mol and must be positive and finite; element counts
    /// must be positive.
    pub fn new(
        formula: impl Into<String>,
        low: [f64; N_COEFFS],
        high: [f64; N_COEFFS],
        molar_mass: MolarMass,
        hf298_div_r: f64,
        elements: Vec<(String, u32)>,
    ) -> ThermoResult<Self> {
        let formula = formula.into();

        if !molar_mass.is_finite() || molar_mass <= 0.0 {
            return Err(ThermoError::InvalidRecord {
                formula,
                what: "molar mass must be positive and finite",
            });
        }
        if low.iter().chain(high.iter()).any(|c| !c.is_finite()) {
            return Err(ThermoError::InvalidRecord {
                formula,
                what: "non-finite polynomial coefficient",
            });
        }
        if elements.iter().any(|(_, n)| *n == 0) {
            return Err(ThermoError::InvalidRecord {
                formula,
                what: "atom count must be positive",
            });
        }

        Ok(Self {
            formula,
            low,
            high,
            molar_mass,
            hf298_div_r,
            elements,
        })
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Coefficients valid for 200 K - 1000 K.
    pub fn low_coefficients(&self) -> &[f64; N_COEFFS] {
        &self.low
    }

    /// Coefficients valid for 1000 K - 6000 K.
    pub fn high_coefficients(&self) -> &[f64; N_COEFFS] {
        &self.high
    }

    /// Molar mass [kg/mol].
    pub fn molar_mass(&self) -> MolarMass {
        self.molar_mass
    }

    /// Formation enthalpy at 298.15 K divided by R [K].
    pub fn hf298_div_r(&self) -> f64 {
        self.hf298_div_r
    }

    /// Formation enthalpy at 298.15 K [J/mol].
    pub fn formation_enthalpy_molar(&self) -> MolarEnergy {
        self.hf298_div_r * R_UNIVERSAL
    }

    /// Elemental composition in source order.
    pub fn elements(&self) -> &[(String, u32)] {
        &self.elements
    }

    /// Number of atoms of `symbol` in one molecule (0 if absent).
    pub fn atom_count(&self, symbol: &str) -> u32 {
        self.elements
            .iter()
            .filter(|(name, _)| name == symbol)
            .map(|(_, n)| *n)
            .sum()
    }

    fn coefficients(&self, t_k: f64) -> ThermoResult<&[f64; N_COEFFS]> {
        if t_k > T_MIN_K && t_k <= T_MID_K {
            Ok(&self.low)
        } else if t_k > T_MID_K && t_k < T_MAX_K {
            Ok(&self.high)
        } else {
            Err(out_of_range(t_k))
        }
    }

    /// Ideal-gas density [kg/m³].
    pub fn density(&self, p: Pressure, t: Temperature) -> ThermoResult<Density> {
        ideal_gas_density(p, t, self.molar_mass)
    }

    /// Specific heat capacity [J/(mol·K)].
    pub fn cp_molar(&self, t: Temperature) -> ThermoResult<MolarHeatCapacity> {
        let t = t.value;
        let a = self.coefficients(t)?;
        Ok((a[0] + a[1] * t + a[2] * t.powi(2) + a[3] * t.powi(3) + a[4] * t.powi(4))
            * R_UNIVERSAL)
    }

    /// Specific heat capacity [J/(kg·K)].
    pub fn cp_mass(&self, t: Temperature) -> ThermoResult<SpecHeatCapacity> {
        Ok(self.cp_molar(t)? / self.molar_mass)
    }

    /// Specific heat capacity at 298 K [J/(kg·K)].
    pub fn cp_mass_ref(&self) -> ThermoResult<SpecHeatCapacity> {
        self.cp_mass(k(T_CP_REF_K))
    }

    /// Sensible enthalpy [J/mol].
    pub fn sensible_enthalpy_molar(&self, t: Temperature) -> ThermoResult<MolarEnergy> {
        let t = t.value;
        let a = self.coefficients(t)?;
        Ok((a[0]
            + a[1] * t / 2.0
            + a[2] * t.powi(2) / 3.0
            + a[3] * t.powi(3) / 4.0
            + a[4] * t.powi(4) / 5.0
            + a[5] / t)
            * R_UNIVERSAL
            * t)
    }

    /// Total enthalpy [J/kg], taken as `cp(T) * T`.
    pub fn enthalpy_mass(&self, t: Temperature) -> ThermoResult<SpecEnthalpy> {
        Ok(self.cp_mass(t)? * t.value)
    }

    /// Entropy [J/(mol·K)].
    pub fn entropy_molar(&self, t: Temperature) -> ThermoResult<MolarHeatCapacity> {
        let t = t.value;
        let a = self.coefficients(t)?;
        Ok((a[0] * t.ln()
            + a[1] * t
            + a[2] * t.powi(2) / 2.0
            + a[3] * t.powi(3) / 3.0
            + a[4] * t.powi(4) / 4.0
            + a[6])
            * R_UNIVERSAL)
    }

    /// Gibbs free energy from the sensible enthalpy [J/mol].
    pub fn gibbs_molar(&self, t: Temperature) -> ThermoResult<MolarEnergy> {
        let t_k = t.value;
        if !(t_k > T_MIN_K && t_k < T_MAX_K) {
            return Err(out_of_range(t_k));
        }
        Ok(self.sensible_enthalpy_molar(t)? - self.entropy_molar(t)? * t_k)
    }
}

impl fmt::Display for SpeciesRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<species> {}", self.formula)
    }
}

fn out_of_range(t_k: f64) -> ThermoError {
    ThermoError::TemperatureOutOfRange {
        t_k,
        min_k: T_MIN_K,
        max_k: T_MAX_K,
    }
}

/// `p M / (R T)`, shared by species and mixtures.
pub(crate) fn ideal_gas_density(
    p: Pressure,
    t: Temperature,
    molar_mass: MolarMass,
) -> ThermoResult<Density> {
    if t.value == 0.0 {
        return Err(ThermoError::InvalidArg {
            what: "temperature must be non-zero",
        });
    }
    Ok(kg_m3(p.value * molar_mass / R_UNIVERSAL / t.value))
}
