//! # Twine Gas
//!
//! Ideal and real (Van der Waals) gas pressure models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] adapters and model-level tools, such as
//!   solving for the volume that produces a target pressure and comparing two
//!   gas models across a volume sweep.
//! - [`support`]: The gas models themselves, the fluids they describe, and the
//!   supporting constraint and unit types.
//!
//! ## Quick start
//!
//! ```
//! use twine_gas::support::gas::{GasModel, IdealGas, VanDerWaals, fluid::Nitrogen};
//! use uom::si::{
//!     amount_of_substance::mole,
//!     f64::{AmountOfSubstance, ThermodynamicTemperature, Volume},
//!     thermodynamic_temperature::kelvin,
//!     volume::liter,
//! };
//!
//! let moles = AmountOfSubstance::new::<mole>(100.0);
//! let ideal = IdealGas::new(moles).unwrap();
//! let nitrogen = VanDerWaals::for_fluid::<Nitrogen>(moles).unwrap();
//!
//! let v = Volume::new::<liter>(100.0);
//! let t = ThermodynamicTemperature::new::<kelvin>(300.0);
//!
//! assert!(ideal.pressure(v, t).is_ok());
//! assert!(nitrogen.pressure(v, t).is_ok());
//!
//! // One liter is smaller than the volume excluded by 100 mol of nitrogen.
//! assert!(nitrogen.pressure(Volume::new::<liter>(1.0), t).is_err());
//! ```

pub mod models;
pub mod support;
