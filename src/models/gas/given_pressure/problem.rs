//! Problem formulation for target pressure solving.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature, Volume},
    pressure::pascal,
    volume::cubic_meter,
};

use crate::support::gas::{GasModel, PressureError};

/// Model adapter that holds temperature fixed and exposes volume as the sole input.
pub(super) struct IsothermModel<'a, G> {
    gas: &'a G,
    temperature: ThermodynamicTemperature,
}

impl<'a, G> IsothermModel<'a, G> {
    pub(super) fn new(gas: &'a G, temperature: ThermodynamicTemperature) -> Self {
        Self { gas, temperature }
    }
}

impl<G: GasModel> Model for IsothermModel<'_, G> {
    type Input = Volume;
    type Output = Pressure;
    type Error = PressureError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.gas.pressure(*input, self.temperature)
    }
}

/// Equation problem definition for target pressure matching.
///
/// Computes the residual as `achieved_pressure - target_pressure`.
pub(super) struct GivenPressureProblem {
    target: Pressure,
}

impl GivenPressureProblem {
    pub(super) fn new(target: Pressure) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for GivenPressureProblem {
    type Input = Volume;
    type Output = Pressure;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Volume::new::<cubic_meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let p = output.get::<pascal>();
        let target = self.target.get::<pascal>();
        Ok([p - target])
    }
}
