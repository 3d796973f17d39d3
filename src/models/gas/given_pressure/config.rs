use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, Volume},
    pressure::pascal,
    volume::cubic_meter,
};

/// Solver configuration for finding the volume at a target pressure.
#[derive(Debug, Clone, Copy)]
pub struct GivenPressureConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the volume search variable.
    pub volume_tol: Volume,

    /// Absolute tolerance for the pressure residual (achieved - target).
    pub pressure_tol: Pressure,
}

impl Default for GivenPressureConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            volume_tol: Volume::new::<cubic_meter>(1e-15),
            pressure_tol: Pressure::new::<pascal>(1e-6),
        }
    }
}

impl GivenPressureConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.volume_tol.get::<cubic_meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.pressure_tol.get::<pascal>(),
        }
    }
}
