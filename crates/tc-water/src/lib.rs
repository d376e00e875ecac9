//! tc-water: water/steam saturation properties for thermochem.
//!
//! Provides:
//! - `SaturationProperties` trait, the capability psychrometric models depend on
//! - `Iapws97`, the IAPWS-IF97 region 4 saturation line
//!
//! Temperatures and enthalpies in this crate follow the steam-table convention
//! anchored at the triple point of water, not absolute zero.
//!
//! # Example
//!
//! ```
//! use tc_core::units::{k, pa};
//! use tc_water::{Iapws97, SaturationProperties};
//!
//! let water = Iapws97::new();
//! let p = water.saturation_pressure(k(300.0)).unwrap();
//! assert!((p.value - 3536.589).abs() < 1e-3);
//!
//! let t = water.saturation_temperature(pa(101_325.0)).unwrap();
//! assert!((t.value - 373.1243).abs() < 1e-4);
//! ```

pub mod error;
pub mod if97;
pub mod model;

pub use error::{WaterError, WaterResult};
pub use if97::Iapws97;
pub use model::SaturationProperties;
