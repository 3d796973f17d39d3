use uom::si::{f64::MolarVolume, molar_volume::cubic_meter_per_mole};

use crate::support::gas::model::van_der_waals::{VanDerWaalsFluid, VanDerWaalsParameters};
use crate::support::units::attraction;

/// Canonical identifier for carbon dioxide (CO₂).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarbonDioxide;

impl VanDerWaalsFluid for CarbonDioxide {
    fn name() -> &'static str {
        "Carbon Dioxide"
    }

    fn parameters() -> VanDerWaalsParameters {
        VanDerWaalsParameters::new(
            attraction(0.3640),
            MolarVolume::new::<cubic_meter_per_mole>(4.267e-5),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        amount_of_substance::mole,
        f64::{AmountOfSubstance, ThermodynamicTemperature, Volume},
        pressure::pascal,
        thermodynamic_temperature::kelvin,
        volume::liter,
    };

    use crate::support::gas::{GasModel, IdealGas, VanDerWaals};

    #[test]
    fn attracts_more_strongly_than_nitrogen() {
        use crate::support::gas::fluid::Nitrogen;

        let n = AmountOfSubstance::new::<mole>(10.0);
        let v = Volume::new::<liter>(5.0);
        let t = ThermodynamicTemperature::new::<kelvin>(320.0);

        let co2 = VanDerWaals::for_fluid::<CarbonDioxide>(n).unwrap();
        let n2 = VanDerWaals::for_fluid::<Nitrogen>(n).unwrap();
        let ideal = IdealGas::new(n).unwrap();

        let p_co2 = co2.pressure(v, t).unwrap();
        let p_n2 = n2.pressure(v, t).unwrap();
        let p_ideal = ideal.pressure(v, t).unwrap();

        assert!(p_co2 < p_n2);
        assert!(p_co2 < p_ideal);
        assert_relative_eq!(
            p_co2.get::<pascal>(),
            10.0 * 8.314 * 320.0 / (0.005 - 10.0 * 4.267e-5) - 0.364 * 2000.0 * 2000.0,
            max_relative = 1e-9
        );
    }
}
