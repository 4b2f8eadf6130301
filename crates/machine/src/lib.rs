//! Coffee machine domain module.
//!
//! This crate contains the business rules of the machine (recipes, supply
//! levels, brewing, refilling and withdrawing revenue), implemented purely as
//! deterministic domain logic (no IO, no terminal, no storage).

pub mod machine;
pub mod recipe;
pub mod shared;
pub mod supplies;

pub use machine::{
    BrewOutcome, BrewRejection, CoffeeMachine, CoffeeMachineBuilder, MachineCommand, MachineEvent,
};
pub use recipe::{Recipe, RecipeTable};
pub use shared::SharedMachine;
pub use supplies::{RefillDelta, SupplyLevels, SupplyOverrides};
