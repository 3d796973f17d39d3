//! Van der Waals real gas model.
//!
//! `VanDerWaals` corrects the ideal gas law for two molecular effects:
//!
//! - Molecules occupy space. Each mole excludes a volume `b`, so the volume
//!   available for motion is `V − n·b`.
//! - Molecules attract each other, which lowers the pressure on the walls by
//!   `a·(n/V)²`.
//!
//! Together these give `p = n·R·T / (V − n·b) − a·(n/V)²`.
//!
//! # Valid Domain
//!
//! Pressure is only defined while `V > n·b`. At or below that volume the
//! molecules would fill the container, and [`GasModel::pressure`] returns
//! [`PressureError::ExcludedVolume`] without evaluating the equation.
//! Approaching `n·b` from above, pressure grows without bound.
//!
//! Setting `a = 0` leaves only the repulsion correction, and `a = b = 0`
//! reduces exactly to the ideal gas law.

use std::fmt;

use uom::si::{
    amount_of_substance::mole,
    f64::{AmountOfSubstance, MolarVolume, Pressure, ThermodynamicTemperature, Volume},
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    gas::{GasModel, GasParametersError, PressureError},
    units::{VanDerWaalsAttraction, universal_gas_constant},
};

/// Label given to models that are not tied to a named fluid.
pub const DEFAULT_LABEL: &str = "Real Gas";

/// Substance-specific constants for the [`VanDerWaals`] model.
///
/// These values are typically provided by a fluid's [`VanDerWaalsFluid`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanDerWaalsParameters {
    /// Attraction constant `a`.
    pub attraction: VanDerWaalsAttraction,
    /// Excluded volume per mole `b`.
    pub excluded_volume: MolarVolume,
}

impl VanDerWaalsParameters {
    /// Creates parameters from the attraction constant `a` and excluded volume `b`.
    #[must_use]
    pub fn new(attraction: VanDerWaalsAttraction, excluded_volume: MolarVolume) -> Self {
        Self {
            attraction,
            excluded_volume,
        }
    }
}

/// Fluid constants required by the [`VanDerWaals`] model.
pub trait VanDerWaalsFluid {
    /// Returns the fluid's display name.
    fn name() -> &'static str;

    /// Returns the constant parameters for use with [`VanDerWaals`].
    fn parameters() -> VanDerWaalsParameters;
}

/// Van der Waals model for a fixed amount of a real gas.
#[derive(Debug, Clone, PartialEq)]
pub struct VanDerWaals {
    moles: AmountOfSubstance,
    a: VanDerWaalsAttraction,
    b: MolarVolume,
    label: String,
}

impl VanDerWaals {
    /// Creates a Van der Waals model labelled [`DEFAULT_LABEL`].
    ///
    /// # Errors
    ///
    /// Returns [`GasParametersError`] if `moles` is not strictly positive or
    /// if either constant is negative or `NaN`.
    pub fn new(
        moles: AmountOfSubstance,
        attraction: VanDerWaalsAttraction,
        excluded_volume: MolarVolume,
    ) -> Result<Self, GasParametersError> {
        if StrictlyPositive::check(&moles).is_err() {
            return Err(GasParametersError::Moles { moles });
        }

        if NonNegative::check(&attraction).is_err() {
            return Err(GasParametersError::Attraction { a: attraction });
        }

        if NonNegative::check(&excluded_volume).is_err() {
            return Err(GasParametersError::ExcludedVolume { b: excluded_volume });
        }

        Ok(Self {
            moles,
            a: attraction,
            b: excluded_volume,
            label: DEFAULT_LABEL.to_owned(),
        })
    }

    /// Creates a Van der Waals model using constants defined by `Fluid`,
    /// labelled with the fluid's name.
    ///
    /// # Errors
    ///
    /// Returns [`GasParametersError`] if `moles` is not strictly positive or
    /// if the fluid's constants are invalid.
    pub fn for_fluid<Fluid: VanDerWaalsFluid>(
        moles: AmountOfSubstance,
    ) -> Result<Self, GasParametersError> {
        let parameters = Fluid::parameters();
        Ok(Self::new(moles, parameters.attraction, parameters.excluded_volume)?
            .with_label(Fluid::name()))
    }

    /// Returns this model with the given label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Returns the attraction constant `a`.
    #[must_use]
    pub fn attraction(&self) -> VanDerWaalsAttraction {
        self.a
    }

    /// Returns the excluded volume per mole `b`.
    #[must_use]
    pub fn excluded_volume(&self) -> MolarVolume {
        self.b
    }

    /// Returns the volume occupied by the molecules themselves, `n·b`.
    ///
    /// Pressure is only defined for volumes strictly greater than this.
    #[must_use]
    pub fn occupied_volume(&self) -> Volume {
        self.moles * self.b
    }
}

impl GasModel for VanDerWaals {
    fn moles(&self) -> AmountOfSubstance {
        self.moles
    }

    fn label(&self) -> &str {
        &self.label
    }

    /// Computes pressure with `p = n·R·T / (V − n·b) − a·(n/V)²`.
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

        let excluded = self.occupied_volume();
        let available = volume - excluded;
        if StrictlyPositive::check(&available).is_err() {
            return Err(PressureError::ExcludedVolume { volume, excluded });
        }

        let repulsion: Pressure = n * r * temperature / available;

        let concentration = n / volume;
        let attraction: Pressure = self.a * concentration * concentration;

        Ok(repulsion - attraction)
    }
}

impl fmt::Display for VanDerWaals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Van der Waals, n = {} mol)",
            self.label,
            self.moles.get::<mole>()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        molar_volume::cubic_meter_per_mole,
        pressure::pascal,
        thermodynamic_temperature::kelvin,
        volume::{cubic_meter, liter},
    };

    use crate::support::gas::{IdealGas, fluid::Nitrogen};
    use crate::support::units::attraction;

    fn moles(n: f64) -> AmountOfSubstance {
        AmountOfSubstance::new::<mole>(n)
    }

    fn temp(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    fn cubic_meters(v: f64) -> Volume {
        Volume::new::<cubic_meter>(v)
    }

    fn model(n: f64, a: f64, b: f64) -> VanDerWaals {
        VanDerWaals::new(
            moles(n),
            attraction(a),
            MolarVolume::new::<cubic_meter_per_mole>(b),
        )
        .expect("test parameters must be valid")
    }

    fn nitrogen() -> VanDerWaals {
        VanDerWaals::for_fluid::<Nitrogen>(moles(100.0)).unwrap()
    }

    #[test]
    fn matches_two_term_formula() {
        let (n, a, b, t) = (100.0, 0.1408, 3.913e-5, 300.0);
        let gas = model(n, a, b);

        for v in [0.005, 0.01, 0.02, 0.05, 0.1] {
            let term1 = n * 8.314 * t / (v - n * b);
            let term2 = a * (n / v) * (n / v);

            let p = gas.pressure(cubic_meters(v), temp(t)).unwrap();
            assert_relative_eq!(p.get::<pascal>(), term1 - term2, max_relative = 1e-9);
        }
    }

    #[test]
    fn nitrogen_at_hundred_liters_is_close_to_ideal() {
        let v = Volume::new::<liter>(100.0);
        let t = temp(300.0);

        let real = nitrogen().pressure(v, t).unwrap().get::<pascal>();
        let ideal = IdealGas::new(moles(100.0))
            .unwrap()
            .pressure(v, t)
            .unwrap()
            .get::<pascal>();

        assert_relative_eq!(ideal, 2_494_200.0, max_relative = 1e-9);
        assert_relative_eq!(real, 2_454_972.58, max_relative = 1e-8);

        let deviation = (ideal - real).abs() / real * 100.0;
        assert!(deviation > 1.0 && deviation < 2.0, "deviation = {deviation}%");
    }

    #[test]
    fn nitrogen_at_one_liter_is_out_of_domain() {
        let gas = nitrogen();
        let err = gas
            .pressure(Volume::new::<liter>(1.0), temp(300.0))
            .unwrap_err();

        match err {
            PressureError::ExcludedVolume { volume, excluded } => {
                assert_relative_eq!(volume.get::<cubic_meter>(), 0.001, max_relative = 1e-12);
                assert_relative_eq!(
                    excluded.get::<cubic_meter>(),
                    0.003_913,
                    max_relative = 1e-12
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn boundary_at_occupied_volume() {
        let gas = nitrogen();
        let t = temp(300.0);
        let boundary = gas.occupied_volume();

        assert!(matches!(
            gas.pressure(boundary, t),
            Err(PressureError::ExcludedVolume { .. })
        ));
        assert!(matches!(
            gas.pressure(boundary * 0.5, t),
            Err(PressureError::ExcludedVolume { .. })
        ));
        assert!(gas.pressure(boundary * 1.001, t).is_ok());
    }

    #[test]
    fn diverges_approaching_occupied_volume() {
        let gas = nitrogen();
        let t = temp(300.0);
        let boundary = gas.occupied_volume();

        let mut previous = Pressure::new::<pascal>(0.0);
        for k in 1..=8 {
            let v = boundary * (1.0 + 10f64.powi(-k));
            let p = gas.pressure(v, t).unwrap();
            assert!(p > previous);
            previous = p;
        }
        assert!(previous.get::<pascal>() > 1e15);
    }

    #[test]
    fn without_corrections_matches_ideal_gas() {
        let real = model(7.5, 0.0, 0.0);
        let ideal = IdealGas::new(moles(7.5)).unwrap();

        for (v, t) in [(0.001, 200.0), (0.02, 300.0), (1.5, 900.0)] {
            let p_real = real.pressure(cubic_meters(v), temp(t)).unwrap();
            let p_ideal = ideal.pressure(cubic_meters(v), temp(t)).unwrap();
            assert_relative_eq!(
                p_real.get::<pascal>(),
                p_ideal.get::<pascal>(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn zero_attraction_is_repulsion_only() {
        let (n, b, t, v) = (10.0, 4.0e-5, 350.0, 0.002);
        let gas = model(n, 0.0, b);

        let p = gas.pressure(cubic_meters(v), temp(t)).unwrap();
        assert_relative_eq!(
            p.get::<pascal>(),
            n * 8.314 * t / (v - n * b),
            max_relative = 1e-12
        );
    }

    #[test]
    fn zero_excluded_volume_has_no_volume_correction() {
        let (n, a, t, v) = (10.0, 0.364, 350.0, 0.002);
        let gas = model(n, a, 0.0);

        let p = gas.pressure(cubic_meters(v), temp(t)).unwrap();
        assert_relative_eq!(
            p.get::<pascal>(),
            n * 8.314 * t / v - a * (n / v) * (n / v),
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_non_positive_volume() {
        let gas = model(1.0, 0.0, 0.0);
        assert!(matches!(
            gas.pressure(cubic_meters(0.0), temp(300.0)),
            Err(PressureError::NonPositiveVolume { .. })
        ));
    }

    #[test]
    fn rejects_invalid_parameters() {
        let b = MolarVolume::new::<cubic_meter_per_mole>(3.913e-5);

        assert!(matches!(
            VanDerWaals::new(moles(0.0), attraction(0.1), b),
            Err(GasParametersError::Moles { .. })
        ));
        assert!(matches!(
            VanDerWaals::new(moles(1.0), attraction(-0.1), b),
            Err(GasParametersError::Attraction { .. })
        ));
        assert!(matches!(
            VanDerWaals::new(moles(1.0), attraction(0.1), -b),
            Err(GasParametersError::ExcludedVolume { .. })
        ));
        assert!(matches!(
            VanDerWaals::new(moles(1.0), attraction(f64::NAN), b),
            Err(GasParametersError::Attraction { .. })
        ));
    }

    #[test]
    fn labels() {
        let gas = model(1.0, 0.1, 1e-5);
        assert_eq!(gas.label(), DEFAULT_LABEL);

        let gas = gas.with_label("Argon");
        assert_eq!(gas.label(), "Argon");

        assert_eq!(nitrogen().label(), "Nitrogen");
        assert_eq!(
            nitrogen().to_string(),
            "Nitrogen (Van der Waals, n = 100 mol)"
        );
    }
}
