//! tc-thermo: ideal-gas thermochemistry from NASA 7-coefficient polynomials.
//!
//! Provides:
//! - Species records and their property evaluators (cp, h, s, g, density)
//! - A species database with formula search and exact lookup
//! - Gas mixtures on a volumetric basis with mass-weighted aggregation
//! - Moist gas (psychrometry) on top of a water/steam saturation model
//! - Complete combustion of C/H/N/O fuels in air (balance, heat of combustion)
//!
//! # Architecture
//!
//! The database holds raw records from a reference source (Burcat-style JSON or
//! YAML documents) and only validates a record when it is looked up. Mixtures own
//! copies of their species records, so they outlive the database they came from.
//! Water properties come from any [`tc_water::SaturationProperties`] implementation,
//! `tc_water::Iapws97` being the stock one.
//!
//! # Example
//!
//! ```
//! use tc_core::units::{k, pa};
//! use tc_thermo::Database;
//!
//! let db = Database::builtin().unwrap();
//! let air = db
//!     .build_mixture([
//!         ("O2 REF ELEMENT", 20.9476),
//!         ("N2  REF ELEMENT", 78.084),
//!         ("CO2", 0.0319),
//!         ("AR REF ELEMENT", 0.9365),
//!     ])
//!     .unwrap();
//!
//! let cp = air.cp_mass(k(298.15)).unwrap();
//! assert!((cp - 1004.722).abs() < 1e-2);
//!
//! let rho = air.density(pa(101_325.0), k(298.15)).unwrap();
//! println!("Density: {} kg/m³", rho.value);
//! ```

pub mod combustion;
pub mod database;
pub mod error;
pub mod mixture;
pub mod property;
pub mod psychrometry;
pub mod source;
pub mod species;

// Re-exports for ergonomics
pub use combustion::{Combustor, Stoichiometry, balance, balance_mix};
pub use database::Database;
pub use error::{ThermoError, ThermoResult};
pub use mixture::{Basis, Entries, Mixture};
pub use property::{Evaluator, Property};
pub use psychrometry::{MoistAir, WATER_FORMULA};
pub use source::{
    RawCoefficients, RawElement, RawSpeciesRecord, SourceError, SourceResult, SpeciesDocument,
};
pub use species::SpeciesRecord;
