use serde::{Deserialize, Serialize};
use thiserror::Error;

use brewery_core::{Aggregate, AggregateRoot};

use crate::recipe::{Recipe, RecipeTable};
use crate::supplies::{RefillDelta, SupplyLevels, SupplyOverrides};

/// Why a brew was refused. `Display` is the user-facing reason.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrewRejection {
    /// The requested drink is not in the recipe table.
    #[error("Unknown drink")]
    UnknownDrink,

    /// At least one resource is below what the recipe needs.
    #[error("Not enough ingredients")]
    InsufficientSupplies,
}

impl BrewRejection {
    pub fn reason(&self) -> &'static str {
        match self {
            BrewRejection::UnknownDrink => "Unknown drink",
            BrewRejection::InsufficientSupplies => "Not enough ingredients",
        }
    }
}

/// Result of [`CoffeeMachine::brew`].
///
/// `#[must_use]` so callers cannot ignore a rejection.
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrewOutcome {
    Brewed,
    Rejected(BrewRejection),
}

impl BrewOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BrewOutcome::Brewed)
    }

    pub fn reason(&self) -> Option<&'static str> {
        match self {
            BrewOutcome::Brewed => None,
            BrewOutcome::Rejected(r) => Some(r.reason()),
        }
    }
}

impl From<Result<(), BrewRejection>> for BrewOutcome {
    fn from(value: Result<(), BrewRejection>) -> Self {
        match value {
            Ok(()) => BrewOutcome::Brewed,
            Err(r) => BrewOutcome::Rejected(r),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineCommand {
    Brew { drink: String },
    Refill(RefillDelta),
    TakeMoney,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineEvent {
    /// All four deductions and the price credit of one drink.
    DrinkBrewed { drink: String, recipe: Recipe },
    SuppliesRefilled(RefillDelta),
    MoneyTaken { amount: i64 },
}

impl MachineEvent {
    /// Stable event name used in structured logs.
    pub fn event_type(&self) -> &'static str {
        match self {
            MachineEvent::DrinkBrewed { .. } => "machine.drink.brewed",
            MachineEvent::SuppliesRefilled(_) => "machine.supplies.refilled",
            MachineEvent::MoneyTaken { .. } => "machine.money.taken",
        }
    }
}

/// Aggregate root: the coffee machine.
///
/// Owns its supply levels exclusively; two machines never share state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoffeeMachine {
    recipes: RecipeTable,
    supplies: SupplyLevels,
    version: u64,
}

impl CoffeeMachine {
    /// A machine with the standard menu and default supplies.
    pub fn new() -> Self {
        Self::with_parts(RecipeTable::standard(), SupplyLevels::DEFAULT)
    }

    pub fn with_parts(recipes: RecipeTable, supplies: SupplyLevels) -> Self {
        Self {
            recipes,
            supplies,
            version: 0,
        }
    }

    pub fn builder() -> CoffeeMachineBuilder {
        CoffeeMachineBuilder::default()
    }

    pub fn recipes(&self) -> &RecipeTable {
        &self.recipes
    }

    /// Whether current supplies cover `recipe`. Pure.
    pub fn can_brew(&self, recipe: &Recipe) -> bool {
        self.supplies.covers(recipe)
    }

    /// Brew `drink` (exact-case id). State only changes when the brew succeeds.
    pub fn brew(&mut self, drink: &str) -> BrewOutcome {
        let command = MachineCommand::Brew {
            drink: drink.to_string(),
        };
        let result = self.execute(&command).map(|events| {
            for event in &events {
                self.trace(event);
            }
        });
        if let Err(rejection) = &result {
            tracing::debug!(drink, reason = %rejection, "brew rejected");
        }
        result.into()
    }

    /// Add `delta` to the resources. Money is untouched.
    pub fn refill(&mut self, delta: RefillDelta) {
        let event = self.decide_refill(delta);
        self.apply(&event);
        self.trace(&event);
    }

    /// Withdraw all revenue, returning the amount taken.
    pub fn take_money(&mut self) -> i64 {
        let amount = self.supplies.money;
        let event = self.decide_take_money();
        self.apply(&event);
        self.trace(&event);
        amount
    }

    /// Snapshot of the current supplies.
    pub fn state(&self) -> SupplyLevels {
        self.supplies
    }

    fn decide_brew(&self, drink: &str) -> Result<MachineEvent, BrewRejection> {
        let recipe = self
            .recipes
            .get(drink)
            .ok_or(BrewRejection::UnknownDrink)?;
        if !self.can_brew(recipe) {
            return Err(BrewRejection::InsufficientSupplies);
        }
        Ok(MachineEvent::DrinkBrewed {
            drink: drink.to_string(),
            recipe: *recipe,
        })
    }

    fn decide_refill(&self, delta: RefillDelta) -> MachineEvent {
        MachineEvent::SuppliesRefilled(delta)
    }

    fn decide_take_money(&self) -> MachineEvent {
        MachineEvent::MoneyTaken {
            amount: self.supplies.money,
        }
    }

    fn trace(&self, event: &MachineEvent) {
        match event {
            MachineEvent::DrinkBrewed { drink, recipe } => tracing::debug!(
                event_type = event.event_type(),
                version = self.version,
                drink = %drink,
                price = recipe.money(),
                "drink brewed"
            ),
            MachineEvent::SuppliesRefilled(delta) => tracing::debug!(
                event_type = event.event_type(),
                version = self.version,
                water = delta.water,
                milk = delta.milk,
                beans = delta.beans,
                cups = delta.cups,
                "supplies refilled"
            ),
            MachineEvent::MoneyTaken { amount } => tracing::info!(
                event_type = event.event_type(),
                version = self.version,
                amount,
                "money taken"
            ),
        }
    }
}

impl Default for CoffeeMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateRoot for CoffeeMachine {
    fn version(&self) -> u64 {
        self.version
    }
}

impl Aggregate for CoffeeMachine {
    type Command = MachineCommand;
    type Event = MachineEvent;
    type Error = BrewRejection;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            MachineEvent::DrinkBrewed { recipe, .. } => self.supplies.consume(recipe),
            MachineEvent::SuppliesRefilled(delta) => self.supplies.restock(delta),
            MachineEvent::MoneyTaken { amount } => self.supplies.money -= amount,
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            MachineCommand::Brew { drink } => Ok(vec![self.decide_brew(drink)?]),
            MachineCommand::Refill(delta) => Ok(vec![self.decide_refill(*delta)]),
            MachineCommand::TakeMoney => Ok(vec![self.decide_take_money()]),
        }
    }
}

/// Builder for machines with custom recipes and/or partial supply overrides.
#[derive(Debug, Clone, Default)]
pub struct CoffeeMachineBuilder {
    recipes: Option<RecipeTable>,
    supplies: SupplyOverrides,
}

impl CoffeeMachineBuilder {
    pub fn recipes(mut self, recipes: RecipeTable) -> Self {
        self.recipes = Some(recipes);
        self
    }

    /// Overrides merged onto the default supply levels.
    pub fn supplies(mut self, supplies: SupplyOverrides) -> Self {
        self.supplies = supplies;
        self
    }

    pub fn build(self) -> CoffeeMachine {
        CoffeeMachine::with_parts(
            self.recipes.unwrap_or_default(),
            self.supplies.resolve(),
        )
    }
}
