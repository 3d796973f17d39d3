//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (volume, temperature,
//! pressure, amount of substance). This module fills the gaps that gas
//! modeling needs but [`uom`] doesn't provide.
//!
//! ## Universal gas constant
//!
//! [`UNIVERSAL_GAS_CONSTANT`] is the molar gas constant `R` in J/(mol·K),
//! shared by every gas model. [`universal_gas_constant`] returns it as a
//! typed [`MolarHeatCapacity`].
//!
//! ## Van der Waals attraction
//!
//! The attraction constant `a` has units of Pa·m⁶/mol², which has no named
//! quantity in [`uom`]. [`VanDerWaalsAttraction`] names it, and
//! [`attraction`] builds one from a value in SI units:
//!
//! ```
//! use twine_gas::support::units::attraction;
//!
//! let a = attraction(0.1408);
//! assert_eq!(a.value, 0.1408);
//! ```

mod quantities;

use uom::si::{
    f64::{MolarHeatCapacity, MolarVolume, Pressure},
    molar_heat_capacity::joule_per_kelvin_mole,
    molar_volume::cubic_meter_per_mole,
    pressure::pascal,
};

pub use quantities::VanDerWaalsAttraction;

/// Universal gas constant `R`, J/(mol·K).
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.314;

/// Returns the universal gas constant as a typed quantity.
#[must_use]
pub fn universal_gas_constant() -> MolarHeatCapacity {
    MolarHeatCapacity::new::<joule_per_kelvin_mole>(UNIVERSAL_GAS_CONSTANT)
}

/// Creates a Van der Waals attraction constant from a value in Pa·m⁶/mol².
#[must_use]
pub fn attraction(value: f64) -> VanDerWaalsAttraction {
    let unit_molar_volume = MolarVolume::new::<cubic_meter_per_mole>(1.0);
    Pressure::new::<pascal>(value) * unit_molar_volume * unit_molar_volume
}
