//! Water/steam saturation capability.

use crate::error::WaterResult;
use tc_core::units::constants::water_triple_point;
use tc_core::units::{Pressure, Temperature};

/// Saturation line of water.
///
/// Implementations must be thread-safe (Send + Sync) so a single model can back
/// several psychrometric calculations at once.
pub trait SaturationProperties: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Equilibrium vapour pressure of water at temperature `t`.
    fn saturation_pressure(&self, t: Temperature) -> WaterResult<Pressure>;

    /// Boiling temperature of water at pressure `p`.
    fn saturation_temperature(&self, p: Pressure) -> WaterResult<Temperature>;

    /// Reference state of the model's enthalpies and entropies.
    fn triple_point(&self) -> (Temperature, Pressure) {
        water_triple_point()
    }
}
