//! Domain models for the JOY Zoo.
//!
//! - [`Animal`]: one resident, with identity, biometrics and a fixed diet.
//! - [`Species`]: the closed set of animal kinds. Each fixes its default
//!   [`DietInfo`] and the [`Capability`] markers it carries.
//! - [`FoodType`]: food categories used for diet matching.

mod animal;
mod diet;
mod species;

pub use animal::*;
pub use diet::*;
pub use species::*;
