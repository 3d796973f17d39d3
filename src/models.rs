//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! The physics lives in [`crate::support::gas`], where each gas model
//! implements [`GasModel`](crate::support::gas::GasModel). The
//! [`twine_core::Model`] implementations here are thin adapters that delegate
//! to those models, plus model-level tools built on top of them.

pub mod gas;
