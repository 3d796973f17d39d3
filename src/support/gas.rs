//! Gas pressure models.
//!
//! Every model implements [`GasModel`], which computes pressure from volume
//! and temperature for a fixed amount of gas:
//!
//! - [`IdealGas`]: `p = n·R·T / V`
//! - [`VanDerWaals`]: `p = n·R·T / (V − n·b) − a·(n/V)²`
//!
//! Models are immutable once constructed and `pressure` is a pure function of
//! its inputs, so a single model may be shared freely across threads.

mod error;

pub mod fluid;
pub mod model;

pub use error::{GasParametersError, PressureError};
pub use model::{GasModel, IdealGas, VanDerWaals};
