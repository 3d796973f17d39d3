//! Side-by-side evaluation of two gas models.
//!
//! A comparison evaluates a *reference* model and a *candidate* model at the
//! same volume and temperature and reports how far apart they are:
//!
//! ```text
//! deviation = |p_reference − p_candidate| / p_candidate
//! ```
//!
//! Sweeps never abort. A volume where either model is undefined keeps its
//! error in the resulting [`Comparison`] so reports can show a placeholder and
//! move on to the next point.
//!
//! # Example
//!
//! ```
//! use twine_gas::models::gas::comparison::sweep;
//! use twine_gas::support::gas::{IdealGas, VanDerWaals, fluid::Nitrogen};
//! use uom::si::{
//!     amount_of_substance::mole,
//!     f64::{AmountOfSubstance, ThermodynamicTemperature, Volume},
//!     ratio::percent,
//!     thermodynamic_temperature::kelvin,
//!     volume::liter,
//! };
//!
//! let n = AmountOfSubstance::new::<mole>(100.0);
//! let ideal = IdealGas::new(n).unwrap();
//! let nitrogen = VanDerWaals::for_fluid::<Nitrogen>(n).unwrap();
//!
//! let volumes = [100.0, 10.0, 1.0].map(Volume::new::<liter>);
//! let t = ThermodynamicTemperature::new::<kelvin>(300.0);
//!
//! let rows = sweep(&ideal, &nitrogen, volumes, t);
//! assert_eq!(rows.len(), 3);
//! assert!(rows[0].deviation().unwrap().get::<percent>() < 2.0);
//! assert!(rows[2].deviation().is_none());
//! ```

use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature, Volume};

use crate::support::gas::{GasModel, PressureError};

/// Pressures from a reference and a candidate model at a single volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub volume: Volume,
    pub reference: Result<Pressure, PressureError>,
    pub candidate: Result<Pressure, PressureError>,
}

impl Comparison {
    /// Returns `|p_reference − p_candidate| / p_candidate`, if both pressures are defined.
    #[must_use]
    pub fn deviation(&self) -> Option<Ratio> {
        match (&self.reference, &self.candidate) {
            (Ok(reference), Ok(candidate)) => Some((*reference - *candidate).abs() / *candidate),
            _ => None,
        }
    }
}

/// Evaluates both models at a single volume and temperature.
pub fn compare<R: GasModel, C: GasModel>(
    reference: &R,
    candidate: &C,
    volume: Volume,
    temperature: ThermodynamicTemperature,
) -> Comparison {
    let comparison = Comparison {
        volume,
        reference: reference.pressure(volume, temperature),
        candidate: candidate.pressure(volume, temperature),
    };

    if let Err(err) = &comparison.reference {
        log::debug!("{} undefined at V={volume:?}: {err}", reference.label());
    }
    if let Err(err) = &comparison.candidate {
        log::debug!("{} undefined at V={volume:?}: {err}", candidate.label());
    }

    comparison
}

/// Evaluates both models across a series of volumes at a fixed temperature.
///
/// Returns one [`Comparison`] per volume, in input order.
pub fn sweep<R, C, I>(
    reference: &R,
    candidate: &C,
    volumes: I,
    temperature: ThermodynamicTemperature,
) -> Vec<Comparison>
where
    R: GasModel,
    C: GasModel,
    I: IntoIterator<Item = Volume>,
{
    volumes
        .into_iter()
        .map(|volume| compare(reference, candidate, volume, temperature))
        .collect()
}
