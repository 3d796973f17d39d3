use uom::si::{f64::MolarVolume, molar_volume::cubic_meter_per_mole};

use crate::support::gas::model::van_der_waals::{VanDerWaalsFluid, VanDerWaalsParameters};
use crate::support::units::attraction;

/// Canonical identifier for nitrogen (N₂).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nitrogen;

impl VanDerWaalsFluid for Nitrogen {
    fn name() -> &'static str {
        "Nitrogen"
    }

    fn parameters() -> VanDerWaalsParameters {
        VanDerWaalsParameters::new(
            attraction(0.1408),
            MolarVolume::new::<cubic_meter_per_mole>(3.913e-5),
        )
    }
}
