//! Reference values from the Burcat tables, checked through the bundled database.

use tc_core::numeric::{Tolerances, nearly_equal};
use tc_core::units::{k, pa};
use tc_thermo::{Database, Mixture, Property, ThermoError};

fn tol() -> Tolerances {
    Tolerances::relative(1e-5)
}

fn db() -> Database {
    Database::builtin().unwrap()
}

#[test]
fn oxygen_reference_element() {
    let oxygen = db().lookup("O2 REF ELEMENT").unwrap();
    assert_eq!(oxygen.to_string(), "<species> O2 REF ELEMENT");
    assert_eq!(oxygen.molar_mass(), 0.0319988);
    assert!(nearly_equal(oxygen.cp_mass_ref().unwrap(), 918.078952, tol()));
    assert!(nearly_equal(oxygen.entropy_molar(k(298.0)).unwrap(), 205.133746, tol()));
    assert!(nearly_equal(oxygen.gibbs_molar(k(298.0)).unwrap(), -61134.262901, tol()));
    assert_eq!(oxygen.atom_count("O"), 2);
}

#[test]
fn air_pseudo_species() {
    let db = db();
    assert_eq!(db.search("AIR"), ["AIR"]);

    let air = db.lookup("AIR").unwrap();
    assert_eq!(air.molar_mass(), 0.02896518);
    assert!(nearly_equal(air.cp_mass_ref().unwrap(), 1004.776251, tol()));

    let rho = air.density(pa(101_325.0), k(298.0)).unwrap();
    assert!(nearly_equal(rho.value, 1.184519, tol()));
}

#[test]
fn standard_dry_air_mixture() {
    let mix = db()
        .build_mixture([
            ("O2 REF ELEMENT", 20.9476),
            ("N2  REF ELEMENT", 78.084),
            ("CO2", 0.0319),
            ("AR REF ELEMENT", 0.9365),
        ])
        .unwrap();

    assert_eq!(
        mix.to_string(),
        "<Mixture>:\n    O2 REF ELEMENT at 20.9476\n    N2  REF ELEMENT at 78.084\n    CO2 at 0.0319\n    AR REF ELEMENT at 0.9365"
    );
    assert!(nearly_equal(mix.molar_mass().unwrap(), 0.028965, tol()));
    assert!(nearly_equal(mix.cp_mass(k(298.15)).unwrap(), 1004.722171, tol()));
    assert!(nearly_equal(mix.cp_mass_ref().unwrap(), 1004.722171, tol()));

    let (co2, q) = mix.get("CO2").unwrap();
    assert_eq!(co2.formula(), "CO2");
    assert_eq!(q, 0.0319);
}

#[test]
fn mixture_extensive_values_at_500_k() {
    let mix = db()
        .build_mixture([
            ("O2 REF ELEMENT", 20.9476),
            ("N2  REF ELEMENT", 78.084),
            ("CO2", 0.0319),
            ("AR REF ELEMENT", 0.9365),
        ])
        .unwrap();
    let t = k(500.0);

    assert!(nearly_equal(mix.sensible_enthalpy_molar(t).unwrap(), 5742.504397, tol()));
    assert!(nearly_equal(mix.entropy_molar(t).unwrap(), 209.458613, tol()));
    assert!(nearly_equal(mix.gibbs_molar(t).unwrap(), -98986.802310, tol()));
    assert_eq!(
        mix.enthalpy_mass(t).unwrap(),
        mix.cp_mass(t).unwrap() * 500.0
    );
    assert_eq!(
        mix.extensive(Property::EntropyMolar, t).unwrap(),
        mix.entropy_molar(t).unwrap()
    );
}

#[test]
fn single_species_mixture_matches_species() {
    let db = db();
    let co2 = db.lookup("CO2").unwrap();
    let mix = db.build_mixture([("CO2", 3.0)]).unwrap();

    assert!(nearly_equal(mix.molar_mass().unwrap(), co2.molar_mass(), tol()));
    for t in [300.0, 1000.0, 1800.0] {
        assert!(nearly_equal(
            mix.cp_mass(k(t)).unwrap(),
            co2.cp_mass(k(t)).unwrap(),
            tol()
        ));
    }
}

#[test]
fn delete_after_prior_delete() {
    let db = db();
    let mut mix: Mixture = db
        .build_mixture([("AIR", 1.0), ("CO2", 0.5), ("AIR", 2.0)])
        .unwrap();

    mix.delete("CO2").unwrap();
    assert!(matches!(
        mix.delete("H2O"),
        Err(ThermoError::NotFound { .. })
    ));
    mix.delete("AIR").unwrap();
    assert!(mix.is_empty());
}

#[test]
fn unknown_formula() {
    let db = db();
    assert!(matches!(
        db.lookup("O2"),
        Err(ThermoError::NotFound { .. })
    ));
    assert!(db.build_mixture([("AIR", 1.0), ("XE", 1.0)]).is_err());
}

#[test]
fn temperature_range_errors() {
    let water = db().lookup("H2O").unwrap();
    assert!(matches!(
        water.cp_molar(k(200.0)),
        Err(ThermoError::TemperatureOutOfRange { .. })
    ));
    assert!(water.cp_molar(k(6000.0)).is_err());
    assert!(water.gibbs_molar(k(6000.0)).is_err());
    assert!(water.cp_molar(k(1000.0)).is_ok());
}
