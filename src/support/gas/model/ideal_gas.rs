//! Ideal gas model.
//!
//! `IdealGas` treats molecules as non-interacting point particles, which gives
//! the ideal gas law `p·V = n·R·T`.
//!
//! # When To Use
//!
//! Use this model at low pressure and high temperature relative to the gas's
//! critical point. As the gas is compressed, molecular size and attraction
//! start to matter; use [`super::VanDerWaals`] to account for them.

use std::fmt;

use uom::si::{
    amount_of_substance::mole,
    f64::{AmountOfSubstance, Pressure, ThermodynamicTemperature, Volume},
};

use crate::support::{
    constraint::{Constrained, Constraint, StrictlyPositive},
    gas::{GasModel, GasParametersError, PressureError},
    units::universal_gas_constant,
};

/// Ideal gas model for a fixed amount of substance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGas {
    moles: AmountOfSubstance,
}

impl IdealGas {
    /// Creates an ideal gas model for `moles` of gas.
    ///
    /// # Errors
    ///
    /// Returns [`GasParametersError::Moles`] if `moles` is not strictly positive.
    pub fn new(moles: AmountOfSubstance) -> Result<Self, GasParametersError> {
        let moles =
            StrictlyPositive::new(moles).map_err(|_| GasParametersError::Moles { moles })?;
        Ok(Self::from_constrained(moles))
    }

    /// Creates an ideal gas model from an amount already known to be positive.
    #[must_use]
    pub fn from_constrained(moles: Constrained<AmountOfSubstance, StrictlyPositive>) -> Self {
        Self {
            moles: moles.into_inner(),
        }
    }
}

impl GasModel for IdealGas {
    fn moles(&self) -> AmountOfSubstance {
        self.moles
    }

    fn label(&self) -> &str {
        "Ideal Gas"
    }

    /// Computes pressure with `p = n·R·T / V`.
    fn pressure(
        &self,
        volume: Volume,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PressureError> {
        if StrictlyPositive::check(&volume).is_err() {
            return Err(PressureError::NonPositiveVolume { volume });
        }

        let n = self.moles;
        let r = universal_gas_constant();

        Ok(n * r * temperature / volume)
    }
}

impl fmt::Display for IdealGas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (n = {} mol)", self.label(), self.moles.get::<mole>())
    }
}
