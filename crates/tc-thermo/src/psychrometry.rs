//! Moist gas: a dry mixture carrying water vapour.
//!
//! Polynomial enthalpies for steam drift badly away from atmospheric pressure,
//! so water is described by a steam-table model instead of its species record.
//! The two sources disagree on the enthalpy reference: the species tables are
//! referenced to absolute zero, steam tables to the triple point of water.
//! Until that is reconciled [`MoistAir::enthalpy`] refuses to answer.

use std::fmt;

use tracing::debug;

use crate::error::{ThermoError, ThermoResult};
use crate::mixture::Mixture;
use crate::species::SpeciesRecord;
use tc_core::units::{Pressure, SpecEnthalpy, Temperature};
use tc_water::SaturationProperties;

/// Formula identifying the water entry of a mixture.
pub const WATER_FORMULA: &str = "H2O";

/// Dry gas mixture plus one water entry, with water handled by a steam model `W`.
pub struct MoistAir<W> {
    gas: Mixture,
    water: SpeciesRecord,
    q_water: f64,
    q_gas: f64,
    w: f64,
    steam: W,
}

impl<W: SaturationProperties> MoistAir<W> {
    /// Split `gas` into its dry part and its single water entry.
    pub fn new(mut gas: Mixture, steam: W) -> ThermoResult<Self> {
        let water_entries = gas
            .iter()
            .filter(|(s, _)| s.formula() == WATER_FORMULA)
            .count();
        if water_entries > 1 {
            return Err(ThermoError::Domain {
                what: "more than one water entry in this gas",
            });
        }
        let (water, q_water) = gas
            .get(WATER_FORMULA)
            .map(|(s, q)| (s.clone(), q))
            .ok_or(ThermoError::Domain {
                what: "no water in this gas",
            })?;
        gas.delete(WATER_FORMULA)?;

        // amount of gas, in case it is not 100 - q_water
        let q_gas = gas.total_quantity();
        if gas.is_empty() || q_gas == 0.0 {
            return Err(ThermoError::Domain {
                what: "no dry gas besides water",
            });
        }

        let w = water.molar_mass() / gas.molar_mass()? * q_water / q_gas;
        debug!(
            q_water,
            q_gas,
            w,
            steam = steam.name(),
            "moist gas assembled"
        );

        Ok(Self {
            gas,
            water,
            q_water,
            q_gas,
            w,
            steam,
        })
    }

    /// Dry part of the mixture.
    pub fn dry_gas(&self) -> &Mixture {
        &self.gas
    }

    pub fn water(&self) -> &SpeciesRecord {
        &self.water
    }

    pub fn water_quantity(&self) -> f64 {
        self.q_water
    }

    pub fn dry_gas_quantity(&self) -> f64 {
        self.q_gas
    }

    /// Mass of water per mass of dry gas.
    pub fn humidity_ratio(&self) -> f64 {
        self.w
    }

    pub fn steam_model(&self) -> &W {
        &self.steam
    }

    /// Relative moisture at pressure `p` and temperature `t`.
    pub fn relative_humidity(&self, p: Pressure, t: Temperature) -> ThermoResult<f64> {
        let ya = self.q_gas / (self.q_gas + self.q_water);
        let psat = self.steam.saturation_pressure(t)?;
        Ok(self.gas.molar_mass()? * ya * p.value * self.w
            / (self.water.molar_mass() * psat.value))
    }

    /// Saturation temperature at the water partial pressure.
    pub fn wet_bulb_temperature(&self, p: Pressure) -> ThermoResult<Temperature> {
        let yw = self.q_water / (self.q_gas + self.q_water);
        Ok(self.steam.saturation_temperature(p * yw)?)
    }

    /// Enthalpy of the moist gas; unavailable until the reference states agree.
    pub fn enthalpy(&self, _p: Pressure, _t: Temperature) -> ThermoResult<SpecEnthalpy> {
        Err(ThermoError::NotImplemented {
            what: "moist gas enthalpy (gas and steam enthalpy references differ)",
        })
    }
}

impl<W> fmt::Display for MoistAir<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Moist Gas>:\n  Gas:\n{}", self.gas)
    }
}

impl<W: SaturationProperties> fmt::Debug for MoistAir<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoistAir")
            .field("gas", &self.gas)
            .field("water", &self.water.formula())
            .field("q_water", &self.q_water)
            .field("q_gas", &self.q_gas)
            .field("w", &self.w)
            .field("steam", &self.steam.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::test_support::{flat_species, oxygen};
    use tc_core::numeric::{Tolerances, nearly_equal};
    use tc_core::units::{k, pa};
    use tc_water::{WaterError, WaterResult};

    /// Saturation line with psat = 1000 Pa everywhere and tsat = p / 10.
    struct FlatSteam;

    impl SaturationProperties for FlatSteam {
        fn name(&self) -> &str {
            "flat"
        }

        fn saturation_pressure(&self, _t: Temperature) -> WaterResult<Pressure> {
            Ok(pa(1000.0))
        }

        fn saturation_temperature(&self, p: Pressure) -> WaterResult<Temperature> {
            if p.value <= 0.0 {
                return Err(WaterError::OutOfRange {
                    what: "temperature",
                    value: p.value,
                    min: 0.0,
                    max: f64::INFINITY,
                });
            }
            Ok(k(p.value / 10.0))
        }
    }

    fn water() -> SpeciesRecord {
        flat_species(WATER_FORMULA, 0.018, 4.0, 4.0)
    }

    fn moist() -> Mixture {
        let mut mix = Mixture::new();
        mix.add(flat_species("DRY", 0.029, 3.5, 3.5), 96.0);
        mix.add(water(), 4.0);
        mix
    }

    #[test]
    fn construction_splits_water_from_gas() {
        let air = MoistAir::new(moist(), FlatSteam).unwrap();
        assert_eq!(air.water().formula(), WATER_FORMULA);
        assert_eq!(air.water_quantity(), 4.0);
        assert_eq!(air.dry_gas_quantity(), 96.0);
        assert_eq!(air.dry_gas().len(), 1);
        assert!(air.dry_gas().get(WATER_FORMULA).is_none());

        let expected_w = 0.018 / 0.029 * 4.0 / 96.0;
        assert!(nearly_equal(air.humidity_ratio(), expected_w, Tolerances::relative(1e-12)));
    }

    #[test]
    fn construction_without_water_fails() {
        let mut mix = Mixture::new();
        mix.add(oxygen(), 1.0);
        let err = MoistAir::new(mix, FlatSteam).unwrap_err();
        assert_eq!(
            err,
            ThermoError::Domain {
                what: "no water in this gas"
            }
        );
    }

    #[test]
    fn construction_with_duplicate_water_fails() {
        let mut mix = moist();
        mix.add(water(), 1.0);
        assert!(matches!(
            MoistAir::new(mix, FlatSteam),
            Err(ThermoError::Domain { .. })
        ));
    }

    #[test]
    fn construction_with_only_water_fails() {
        let mut mix = Mixture::new();
        mix.add(water(), 1.0);
        assert!(matches!(
            MoistAir::new(mix, FlatSteam),
            Err(ThermoError::Domain { .. })
        ));
    }

    #[test]
    fn relative_humidity_uses_saturation_pressure() {
        let air = MoistAir::new(moist(), FlatSteam).unwrap();
        // M_gas * y_a * w / M_w reduces to the water mole fraction
        let phi = air.relative_humidity(pa(100_000.0), k(300.0)).unwrap();
        assert!(nearly_equal(phi, 0.04 * 100_000.0 / 1000.0, Tolerances::relative(1e-12)));
    }

    #[test]
    fn wet_bulb_uses_water_partial_pressure() {
        let air = MoistAir::new(moist(), FlatSteam).unwrap();
        let t = air.wet_bulb_temperature(pa(100_000.0)).unwrap();
        assert!(nearly_equal(t.value, 400.0, Tolerances::relative(1e-12)));

        assert!(matches!(
            air.wet_bulb_temperature(pa(0.0)),
            Err(ThermoError::Water(WaterError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn enthalpy_is_not_implemented() {
        let air = MoistAir::new(moist(), FlatSteam).unwrap();
        assert!(matches!(
            air.enthalpy(pa(101_325.0), k(300.0)),
            Err(ThermoError::NotImplemented { .. })
        ));
    }

    #[test]
    fn display_and_debug() {
        let air = MoistAir::new(moist(), FlatSteam).unwrap();
        assert_eq!(air.to_string(), "<Moist Gas>:\n  Gas:\n<Mixture>:\n    DRY at 96");
        assert!(format!("{air:?}").contains("flat"));
        assert_eq!(air.steam_model().name(), "flat");
    }
}
