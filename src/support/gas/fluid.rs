//! Canonical fluid identifiers.
//!
//! A fluid type names a substance and supplies the constants a model needs to
//! describe it, e.g. the Van der Waals `a` and `b` through
//! [`VanDerWaalsFluid`](crate::support::gas::model::van_der_waals::VanDerWaalsFluid).

mod carbon_dioxide;
mod nitrogen;

pub use carbon_dioxide::CarbonDioxide;
pub use nitrogen::Nitrogen;
