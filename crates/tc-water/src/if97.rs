//! IAPWS-IF97 region 4: the saturation line between the triple point and the
//! critical point.

use crate::error::{WaterError, WaterResult};
use crate::model::SaturationProperties;
use tc_core::units::{Pressure, Temperature, k, mpa};

/// Lowest temperature covered by the saturation-pressure equation [K].
pub const T_MIN_K: f64 = 273.15;
/// Critical temperature [K].
pub const T_CRIT_K: f64 = 647.096;
/// Saturation pressure at 273.15 K [MPa].
pub const P_MIN_MPA: f64 = 0.000_611_213;
/// Critical pressure [MPa].
pub const P_CRIT_MPA: f64 = 22.064;

const N: [f64; 10] = [
    0.116_705_214_527_67e4,
    -0.724_213_167_032_06e6,
    -0.170_738_469_400_92e2,
    0.120_208_247_024_70e5,
    -0.323_255_503_223_33e7,
    0.149_151_086_135_30e2,
    -0.482_326_573_615_91e4,
    0.405_113_405_420_57e6,
    -0.238_555_575_678_49,
    0.650_175_348_447_98e3,
];

/// Saturation pressure [MPa] from temperature [K].
pub fn psat_mpa(t_k: f64) -> WaterResult<f64> {
    if !t_k.is_finite() {
        return Err(WaterError::NonFinite {
            what: "temperature",
        });
    }
    if !(T_MIN_K..=T_CRIT_K).contains(&t_k) {
        return Err(WaterError::OutOfRange {
            what: "pressure",
            value: t_k,
            min: T_MIN_K,
            max: T_CRIT_K,
        });
    }

    let v = t_k + N[8] / (t_k - N[9]);
    let a = v * v + N[0] * v + N[1];
    let b = N[2] * v * v + N[3] * v + N[4];
    let c = N[5] * v * v + N[6] * v + N[7];

    Ok((2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4))
}

/// Saturation temperature [K] from pressure [MPa].
pub fn tsat_k(p_mpa: f64) -> WaterResult<f64> {
    if !p_mpa.is_finite() {
        return Err(WaterError::NonFinite { what: "pressure" });
    }
    if !(P_MIN_MPA..=P_CRIT_MPA).contains(&p_mpa) {
        return Err(WaterError::OutOfRange {
            what: "temperature",
            value: p_mpa,
            min: P_MIN_MPA,
            max: P_CRIT_MPA,
        });
    }

    let beta = p_mpa.powf(0.25);
    let e = beta * beta + N[2] * beta + N[5];
    let f = N[0] * beta * beta + N[3] * beta + N[6];
    let g = N[1] * beta * beta + N[4] * beta + N[7];
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());

    Ok(0.5 * (N[9] + d - ((N[9] + d).powi(2) - 4.0 * (N[8] + N[9] * d)).sqrt()))
}

/// IAPWS-IF97 saturation line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iapws97;

impl Iapws97 {
    pub fn new() -> Self {
        Self
    }
}

impl SaturationProperties for Iapws97 {
    fn name(&self) -> &str {
        "IAPWS-IF97"
    }

    fn saturation_pressure(&self, t: Temperature) -> WaterResult<Pressure> {
        psat_mpa(t.value).map(mpa)
    }

    fn saturation_temperature(&self, p: Pressure) -> WaterResult<Temperature> {
        tsat_k(p.value * 1e-6).map(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::numeric::{Tolerances, nearly_equal};
    use tc_core::units::pa;

    fn tol() -> Tolerances {
        Tolerances::relative(1e-9)
    }

    #[test]
    fn saturation_pressure_reference_points() {
        let water = Iapws97::new();
        let p = water.saturation_pressure(k(300.0)).unwrap();
        assert!(nearly_equal(p.value, 3536.589_413_013_010_5, tol()));

        // IF97 verification table 35
        assert!(nearly_equal(psat_mpa(500.0).unwrap(), 0.263_889_776e1, Tolerances::relative(1e-8)));
        assert!(nearly_equal(psat_mpa(600.0).unwrap(), 0.123_443_146e2, Tolerances::relative(1e-8)));
    }

    #[test]
    fn saturation_temperature_reference_points() {
        let water = Iapws97::new();
        let t = water.saturation_temperature(pa(100_000.0)).unwrap();
        assert!(nearly_equal(t.value, 372.755_918_611_337_6, tol()));

        let t = water.saturation_temperature(pa(101_325.0)).unwrap();
        assert!(nearly_equal(t.value, 373.124_300_000_480_56, tol()));

        // IF97 verification table 36
        assert!(nearly_equal(tsat_k(1.0).unwrap(), 0.453_035_632e3, Tolerances::relative(1e-8)));
        assert!(nearly_equal(tsat_k(10.0).unwrap(), 0.584_149_488e3, Tolerances::relative(1e-8)));
    }

    #[test]
    fn temperature_outside_saturation_line_is_rejected() {
        let water = Iapws97::new();
        for t in [130.0, 273.0, 700.0] {
            let err = water.saturation_pressure(k(t)).unwrap_err();
            assert!(matches!(err, WaterError::OutOfRange { what: "pressure", .. }));
        }
        assert!(water.saturation_pressure(k(T_MIN_K)).is_ok());
        assert!(water.saturation_pressure(k(T_CRIT_K)).is_ok());
    }

    #[test]
    fn pressure_outside_saturation_line_is_rejected() {
        let water = Iapws97::new();
        for p in [100.0, 611.0, 23.0e6] {
            let err = water.saturation_temperature(pa(p)).unwrap_err();
            assert!(matches!(err, WaterError::OutOfRange { what: "temperature", .. }));
        }
    }

    #[test]
    fn non_finite_inputs() {
        assert!(matches!(
            psat_mpa(f64::NAN),
            Err(WaterError::NonFinite { .. })
        ));
        assert!(matches!(
            tsat_k(f64::INFINITY),
            Err(WaterError::NonFinite { .. })
        ));
    }

    #[test]
    fn saturation_line_starts_at_triple_point() {
        let water = Iapws97::new();
        let (t, p) = water.triple_point();
        let psat = water.saturation_pressure(t).unwrap();
        assert!(nearly_equal(psat.value, p.value, Tolerances::relative(1e-8)));
    }

    #[test]
    fn model_name() {
        assert_eq!(Iapws97::new().name(), "IAPWS-IF97");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn saturation_pressure_increases_with_temperature(t in T_MIN_K..(T_CRIT_K - 1.0), dt in 0.01_f64..1.0) {
            let lo = psat_mpa(t).unwrap();
            let hi = psat_mpa(t + dt).unwrap();
            prop_assert!(hi > lo);
        }

        #[test]
        fn saturation_temperature_inverts_pressure(t in 275.0_f64..640.0) {
            let p = psat_mpa(t).unwrap();
            let back = tsat_k(p).unwrap();
            prop_assert!((back - t).abs() < 1e-6);
        }
    }
}
