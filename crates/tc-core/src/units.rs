// tc-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

/// Molar heat capacity or molar entropy [J/(mol·K)].
pub type MolarHeatCapacity = f64;

/// Molar energy (enthalpy, Gibbs free energy) [J/mol].
pub type MolarEnergy = f64;

/// Specific heat capacity [J/(kg·K)].
pub type SpecHeatCapacity = f64;

/// Specific enthalpy [J/kg].
pub type SpecEnthalpy = f64;

/// Molar mass [kg/mol].
pub type MolarMass = f64;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kg_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

pub mod constants {
    use super::*;

    /// Universal gas constant [J/(mol·K)], as used by the Burcat tables.
    pub const R_UNIVERSAL: f64 = 8.314_472;

    /// Standard reference temperature for formation enthalpies [K].
    pub const T_REF_K: f64 = 298.15;

    /// Triple point of water [K].
    pub const T_TRIPLE_WATER_K: f64 = 273.16;

    /// Triple point of water [Pa].
    pub const P_TRIPLE_WATER_PA: f64 = 611.657;

    #[inline]
    pub fn t_ref() -> Temperature {
        k(T_REF_K)
    }

    #[inline]
    pub fn water_triple_point() -> (Temperature, Pressure) {
        (k(T_TRIPLE_WATER_K), pa(P_TRIPLE_WATER_PA))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _rho = kg_m3(1.2);
        let _tref = constants::t_ref();
    }

    #[test]
    fn values_are_stored_in_si_base_units() {
        assert_eq!(k(298.15).value, 298.15);
        assert_eq!(pa(101_325.0).value, 101_325.0);
        assert!((mpa(0.1).value - 100_000.0).abs() < 1e-9);
        assert_eq!(kg_m3(1.184519).value, 1.184519);
    }

    #[test]
    fn triple_point_anchor() {
        let (t, p) = constants::water_triple_point();
        assert_eq!(t.value, 273.16);
        assert!(p.value > 611.0 && p.value < 612.0);
    }
}
