//! Complete combustion of C/H/N/O fuels in air.
//!
//! Carbon burns to CO2 and hydrogen to H2O; no CO, radicals or dissociation are
//! formed. Air is O2 carrying [`N2_PER_O2`] moles of N2 per mole of O2. Atoms other
//! than C, H, N and O in a fuel are ignored by the balance.

use std::ops::AddAssign;

use tracing::debug;

use crate::database::Database;
use crate::error::{ThermoError, ThermoResult};
use crate::mixture::{Basis, Mixture};
use crate::psychrometry::WATER_FORMULA;
use crate::species::SpeciesRecord;
use tc_core::units::{SpecEnthalpy, Temperature, k};

/// Moles of atmospheric N2 per mole of O2.
pub const N2_PER_O2: f64 = 3.76;

/// Temperature at which the lower heating value is evaluated [K].
pub const LHV_TEMPERATURE_K: f64 = 423.15;

pub const OXYGEN_FORMULA: &str = "O2 REF ELEMENT";
pub const NITROGEN_FORMULA: &str = "N2  REF ELEMENT";
pub const CARBON_DIOXIDE_FORMULA: &str = "CO2";

/// Amounts on both sides of a complete combustion, in the fuel's quantity units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stoichiometry {
    pub fuel: f64,
    pub air_o2: f64,
    pub air_n2: f64,
    pub products_n2: f64,
    pub products_co2: f64,
    pub products_h2o: f64,
    /// Oxygen left over. Negative for rich mixtures, where it is the oxygen the
    /// fuel would still need to burn completely.
    pub products_o2: f64,
}

impl AddAssign for Stoichiometry {
    fn add_assign(&mut self, rhs: Self) {
        self.fuel += rhs.fuel;
        self.air_o2 += rhs.air_o2;
        self.air_n2 += rhs.air_n2;
        self.products_n2 += rhs.products_n2;
        self.products_co2 += rhs.products_co2;
        self.products_h2o += rhs.products_h2o;
        self.products_o2 += rhs.products_o2;
    }
}

/// Air excess `1 / phi` for an equivalence ratio `phi`.
fn excess_air(phi: f64) -> ThermoResult<f64> {
    if !phi.is_finite() || phi <= 0.0 {
        return Err(ThermoError::InvalidArg {
            what: "equivalence ratio must be positive and finite",
        });
    }
    Ok(1.0 / phi)
}

/// Balance `amount` of `fuel` burnt with air at equivalence ratio `phi`.
pub fn balance(fuel: &SpeciesRecord, amount: f64, phi: f64) -> ThermoResult<Stoichiometry> {
    let lambda = excess_air(phi)?;
    let [c, h, n, o] = ["C", "H", "N", "O"].map(|symbol| f64::from(fuel.atom_count(symbol)));

    // O2 needed per mole of fuel at phi = 1
    let demand = c + h / 4.0 - o / 2.0;
    let o2 = lambda * demand;

    Ok(Stoichiometry {
        fuel: amount,
        air_o2: amount * o2,
        air_n2: amount * N2_PER_O2 * o2,
        products_n2: amount * (n / 2.0 + N2_PER_O2 * o2),
        products_co2: amount * c,
        products_h2o: amount * h / 2.0,
        products_o2: amount * (o2 - demand),
    })
}

/// Balance every entry of a volume-basis fuel mixture and add them up.
pub fn balance_mix(fuels: &Mixture, phi: f64) -> ThermoResult<Stoichiometry> {
    if fuels.basis() != Basis::Volume {
        return Err(ThermoError::UnsupportedBasis {
            basis: fuels.basis(),
        });
    }
    if fuels.is_empty() {
        return Err(ThermoError::EmptyMixture);
    }

    let mut total = Stoichiometry::default();
    for (fuel, amount) in fuels {
        total += balance(fuel, amount, phi)?;
    }
    Ok(total)
}

/// Fuel burnt with air: reactant and product mixtures of a complete combustion.
///
/// Reactants are the fuel entries followed by O2 and N2; products are N2, CO2,
/// H2O and O2, in that order. Combustion species come from the database given
/// at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Combustor {
    fuel: Mixture,
    reactants: Mixture,
    products: Mixture,
    stoichiometry: Stoichiometry,
    phi: f64,
}

impl Combustor {
    /// One mole of a single fuel.
    pub fn new(db: &Database, fuel: SpeciesRecord, phi: f64) -> ThermoResult<Self> {
        let mut fuels = Mixture::new();
        fuels.add(fuel, 1.0);
        Self::with_fuels(db, fuels, phi)
    }

    pub fn with_fuels(db: &Database, fuel: Mixture, phi: f64) -> ThermoResult<Self> {
        let s = balance_mix(&fuel, phi)?;

        let oxygen = db.lookup(OXYGEN_FORMULA)?;
        let nitrogen = db.lookup(NITROGEN_FORMULA)?;
        let carbon_dioxide = db.lookup(CARBON_DIOXIDE_FORMULA)?;
        let water = db.lookup(WATER_FORMULA)?;

        let mut reactants = fuel.clone();
        reactants.add(oxygen.clone(), s.air_o2);
        reactants.add(nitrogen.clone(), s.air_n2);

        let mut products = Mixture::new();
        products.add(nitrogen, s.products_n2);
        products.add(carbon_dioxide, s.products_co2);
        products.add(water, s.products_h2o);
        products.add(oxygen, s.products_o2);

        debug!(
            phi,
            fuels = fuel.len(),
            air_o2 = s.air_o2,
            products_o2 = s.products_o2,
            "combustion balanced"
        );

        Ok(Self {
            fuel,
            reactants,
            products,
            stoichiometry: s,
            phi,
        })
    }

    pub fn fuel(&self) -> &Mixture {
        &self.fuel
    }

    pub fn reactants(&self) -> &Mixture {
        &self.reactants
    }

    pub fn products(&self) -> &Mixture {
        &self.products
    }

    pub fn stoichiometry(&self) -> &Stoichiometry {
        &self.stoichiometry
    }

    /// Equivalence ratio the combustor was balanced at.
    pub fn equivalence_ratio(&self) -> f64 {
        self.phi
    }

    /// Heat released per kilogram of fuel [J/kg], reactants and products both at `t`.
    pub fn heat_of_combustion(&self, t: Temperature) -> ThermoResult<SpecEnthalpy> {
        let released = total_enthalpy(&self.reactants, t)? - total_enthalpy(&self.products, t)?;
        let fuel_mass = self.fuel.molar_mass()? * self.fuel.total_quantity();
        Ok(released / fuel_mass)
    }

    /// Heat of combustion at 423.15 K, with the water leaving as vapour.
    pub fn lower_heating_value(&self) -> ThermoResult<SpecEnthalpy> {
        self.heat_of_combustion(k(LHV_TEMPERATURE_K))
    }
}

/// `Σ Nᵢ hᵢ(T)` [J] over the entries of `mix`.
fn total_enthalpy(mix: &Mixture, t: Temperature) -> ThermoResult<f64> {
    mix.iter().try_fold(0.0, |acc, (species, q)| {
        Ok(acc + q * species.sensible_enthalpy_molar(t)?)
    })
}
