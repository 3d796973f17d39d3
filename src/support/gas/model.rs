//! Gas equation of state models.

pub mod ideal_gas;
pub mod van_der_waals;

use uom::si::f64::{AmountOfSubstance, Pressure, ThermodynamicTemperature, Volume};

use super::PressureError;

pub use ideal_gas::IdealGas;
pub use van_der_waals::VanDerWaals;

/// A model that computes the pressure of a fixed amount of gas.
///
/// Implementors hold the amount of substance `n` and share the universal gas
/// constant from [`crate::support::units::UNIVERSAL_GAS_CONSTANT`].
pub trait GasModel {
    /// Returns the amount of gas described by this model.
    fn moles(&self) -> AmountOfSubstance;

    /// Returns a short human-readable name for this model.
    fn label(&self) -> &str;

    /// Returns the pressure of the gas at the given volume and temperature.
    ///
    /// Callers are expected to supply a positive volume and temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PressureError`] if the volume lies outside the model's valid domain.
    fn pressure(
        &self,
        volume: Volume,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PressureError>;
}

impl<G: GasModel + ?Sized> GasModel for &G {
    fn moles(&self) -> AmountOfSubstance {
        (**self).moles()
    }

    fn label(&self) -> &str {
        (**self).label()
    }

    fn pressure(
        &self,
        volume: Volume,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PressureError> {
        (**self).pressure(volume, temperature)
    }
}
