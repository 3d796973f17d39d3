//! Iterative solver for the volume at a target pressure.
//!
//! Holds temperature fixed and bisects on volume until the gas model's
//! pressure matches the target.

mod config;
mod error;
mod problem;

pub use config::GivenPressureConfig;
pub use error::GivenPressureError;

use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature, Volume},
    pressure::pascal,
    volume::cubic_meter,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    gas::GasModel,
};

use problem::{GivenPressureProblem, IsothermModel};

/// Finds the volume within `bracket` at which `gas` reaches `target` pressure.
///
/// Volumes inside the gas model's invalid domain (for example, at or below the
/// excluded volume of a Van der Waals gas) are treated as lying on the
/// high-pressure side of the target, so the bracket may start there.
///
/// On a sub-critical Van der Waals isotherm more than one volume can produce
/// the same pressure; the solver returns one of them from within the bracket.
///
/// # Errors
///
/// Returns [`GivenPressureError`] if the bracket does not contain a sign
/// change, if no evaluation succeeds, or if the solver fails to converge.
pub fn given_pressure<G: GasModel>(
    gas: &G,
    target: Constrained<Pressure, StrictlyPositive>,
    temperature: ThermodynamicTemperature,
    bracket: [Volume; 2],
    config: GivenPressureConfig,
) -> Result<Volume, GivenPressureError> {
    let target = target.into_inner();

    let model = IsothermModel::new(gas, temperature);
    let problem = GivenPressureProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [
            bracket[0].get::<cubic_meter>(),
            bracket[1].get::<cubic_meter>(),
        ],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A failed evaluation means the volume is too small for the gas,
            // which is where pressure diverges toward +∞.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenPressureError::MaxIters {
            residual: Pressure::new::<pascal>(solution.residual),
            iters: solution.iters,
        });
    }

    log::debug!(
        "{}: converged to V={:?} in {} iterations",
        gas.label(),
        solution.snapshot.input,
        solution.iters
    );

    Ok(solution.snapshot.input)
}
