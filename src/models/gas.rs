//! Gas pressure models.
//!
//! This module provides [`twine_core::Model`] adapters for any
//! [`GasModel`], along with two tools built on them:
//!
//! - [`given_pressure`]: finds the volume at which a gas reaches a target pressure.
//! - [`comparison`]: evaluates two gas models side by side across a volume sweep.

pub mod comparison;
mod given_pressure;

pub use given_pressure::{GivenPressureConfig, GivenPressureError, given_pressure};

use twine_core::Model;
use uom::si::f64::{Pressure, ThermodynamicTemperature, Volume};

use crate::support::gas::{GasModel, PressureError};

/// Volume and temperature at which a gas is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    pub volume: Volume,
    pub temperature: ThermodynamicTemperature,
}

impl Conditions {
    #[must_use]
    pub fn new(volume: Volume, temperature: ThermodynamicTemperature) -> Self {
        Self {
            volume,
            temperature,
        }
    }
}

/// Model adapter that evaluates the pressure of a [`GasModel`].
#[derive(Debug, Clone)]
pub struct PressureModel<G> {
    gas: G,
}

impl<G: GasModel> PressureModel<G> {
    /// Wraps a gas model.
    #[must_use]
    pub fn new(gas: G) -> Self {
        Self { gas }
    }

    /// Returns the wrapped gas model.
    #[must_use]
    pub fn gas(&self) -> &G {
        &self.gas
    }
}

impl<G: GasModel> Model for PressureModel<G> {
    type Input = Conditions;
    type Output = Pressure;
    type Error = PressureError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.gas.pressure(input.volume, input.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        amount_of_substance::mole, f64::AmountOfSubstance, pressure::pascal,
        thermodynamic_temperature::kelvin, volume::liter,
    };

    use crate::support::gas::{IdealGas, VanDerWaals, fluid::Nitrogen};

    #[test]
    fn delegates_to_gas_model() {
        let n = AmountOfSubstance::new::<mole>(100.0);
        let model = PressureModel::new(IdealGas::new(n).unwrap());

        let input = Conditions::new(
            Volume::new::<liter>(50.0),
            ThermodynamicTemperature::new::<kelvin>(300.0),
        );
        let p = model.call(&input).unwrap();

        assert_relative_eq!(p.get::<pascal>(), 4_988_400.0, max_relative = 1e-12);
    }

    #[test]
    fn passes_through_domain_errors() {
        let n = AmountOfSubstance::new::<mole>(100.0);
        let model = PressureModel::new(VanDerWaals::for_fluid::<Nitrogen>(n).unwrap());

        let input = Conditions::new(
            Volume::new::<liter>(2.0),
            ThermodynamicTemperature::new::<kelvin>(300.0),
        );

        assert!(matches!(
            model.call(&input),
            Err(PressureError::ExcludedVolume { .. })
        ));
        assert_eq!(model.gas().label(), "Nitrogen");
    }
}
