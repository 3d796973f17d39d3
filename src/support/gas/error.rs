use thiserror::Error;
use uom::si::f64::{AmountOfSubstance, MolarVolume, Volume};

use crate::support::units::VanDerWaalsAttraction;

/// Errors that may occur when evaluating pressure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PressureError {
    /// The volume is zero or negative.
    #[error("volume must be positive: V={volume:?}")]
    NonPositiveVolume { volume: Volume },

    /// The volume occupied by the molecules (`n·b`) meets or exceeds the
    /// volume available to the gas.
    #[error("excluded volume meets or exceeds available volume: V={volume:?}, n·b={excluded:?}")]
    ExcludedVolume { volume: Volume, excluded: Volume },
}

/// Errors returned when constructing a gas model from invalid parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GasParametersError {
    #[error("invalid amount of substance: {moles:?}")]
    Moles { moles: AmountOfSubstance },
    #[error("invalid attraction constant a: {a:?}")]
    Attraction { a: VanDerWaalsAttraction },
    #[error("invalid excluded volume constant b: {b:?}")]
    ExcludedVolume { b: MolarVolume },
}
