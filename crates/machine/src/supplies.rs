use serde::{Deserialize, Serialize};

use brewery_core::ValueObject;

use crate::recipe::Recipe;

/// Current resource quantities plus uncollected revenue.
///
/// Handed out by copy: a snapshot never aliases the state owned by a machine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplyLevels {
    pub water: i64,
    pub milk: i64,
    pub beans: i64,
    pub cups: i64,
    pub money: i64,
}

impl ValueObject for SupplyLevels {}

impl SupplyLevels {
    /// Starting inventory of a freshly installed machine.
    pub const DEFAULT: SupplyLevels = SupplyLevels {
        water: 1000,
        milk: 1000,
        beans: 1000,
        cups: 100,
        money: 500,
    };

    /// Whether every resource covers the recipe. Money is never a constraint.
    pub fn covers(&self, recipe: &Recipe) -> bool {
        self.water >= recipe.water()
            && self.milk >= recipe.milk()
            && self.beans >= recipe.beans()
            && self.cups >= recipe.cups()
    }

    pub(crate) fn consume(&mut self, recipe: &Recipe) {
        self.water -= recipe.water();
        self.milk -= recipe.milk();
        self.beans -= recipe.beans();
        self.cups -= recipe.cups();
        self.money = self.money.saturating_add(recipe.money());
    }

    pub(crate) fn restock(&mut self, delta: &RefillDelta) {
        self.water = self.water.saturating_add(delta.water);
        self.milk = self.milk.saturating_add(delta.milk);
        self.beans = self.beans.saturating_add(delta.beans);
        self.cups = self.cups.saturating_add(delta.cups);
    }
}

impl Default for SupplyLevels {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Partial supply levels; omitted fields fall back to [`SupplyLevels::DEFAULT`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplyOverrides {
    pub water: Option<i64>,
    pub milk: Option<i64>,
    pub beans: Option<i64>,
    pub cups: Option<i64>,
    pub money: Option<i64>,
}

impl SupplyOverrides {
    /// Merge onto the defaults.
    pub fn resolve(&self) -> SupplyLevels {
        let base = SupplyLevels::DEFAULT;
        SupplyLevels {
            water: self.water.unwrap_or(base.water),
            milk: self.milk.unwrap_or(base.milk),
            beans: self.beans.unwrap_or(base.beans),
            cups: self.cups.unwrap_or(base.cups),
            money: self.money.unwrap_or(base.money),
        }
    }
}

/// Amounts added to the machine by a refill. Money cannot be refilled.
///
/// Omitted fields are zero. Negative amounts are applied as given.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefillDelta {
    pub water: i64,
    pub milk: i64,
    pub beans: i64,
    pub cups: i64,
}

impl ValueObject for RefillDelta {}

impl RefillDelta {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_levels() {
        assert_eq!(
            SupplyLevels::default(),
            SupplyLevels {
                water: 1000,
                milk: 1000,
                beans: 1000,
                cups: 100,
                money: 500
            }
        );
    }

    #[test]
    fn empty_overrides_resolve_to_defaults() {
        assert_eq!(SupplyOverrides::default().resolve(), SupplyLevels::DEFAULT);
    }

    #[test]
    fn partial_overrides_keep_defaults_for_missing_fields() {
        let levels = SupplyOverrides {
            water: Some(50),
            money: Some(0),
            ..Default::default()
        }
        .resolve();

        assert_eq!(
            levels,
            SupplyLevels {
                water: 50,
                milk: 1000,
                beans: 1000,
                cups: 100,
                money: 0
            }
        );
    }

    #[test]
    fn overrides_deserialize_from_partial_json() {
        let overrides: SupplyOverrides = serde_json::from_str(r#"{ "cups": 3 }"#).unwrap();
        assert_eq!(overrides.resolve().cups, 3);
        assert_eq!(overrides.resolve().water, 1000);
    }

    #[test]
    fn covers_ignores_money() {
        let broke = SupplyLevels {
            money: 0,
            ..SupplyLevels::DEFAULT
        };
        assert!(broke.covers(&Recipe::LATTE));

        let no_cups = SupplyLevels {
            cups: 0,
            ..SupplyLevels::DEFAULT
        };
        assert!(!no_cups.covers(&Recipe::ESPRESSO));
    }

    #[test]
    fn covers_accepts_exact_amounts() {
        let exact = SupplyLevels {
            water: 250,
            milk: 0,
            beans: 16,
            cups: 1,
            money: 0,
        };
        assert!(exact.covers(&Recipe::ESPRESSO));
        assert!(!exact.covers(&Recipe::LATTE));
    }

    #[test]
    fn restock_never_touches_money() {
        let mut levels = SupplyLevels::DEFAULT;
        levels.restock(&RefillDelta {
            water: 10,
            milk: 20,
            beans: 30,
            cups: 4,
        });
        assert_eq!(
            levels,
            SupplyLevels {
                water: 1010,
                milk: 1020,
                beans: 1030,
                cups: 104,
                money: 500
            }
        );
    }

    #[test]
    fn refill_delta_is_empty() {
        assert!(RefillDelta::default().is_empty());
        assert!(
            !RefillDelta {
                cups: 1,
                ..Default::default()
            }
            .is_empty()
        );
    }
}
