use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use brewery_core::{DomainError, DomainResult, ValueObject};

/// Resource cost of one drink plus the price credited when it is brewed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RecipeFields")]
pub struct Recipe {
    water: i64,
    milk: i64,
    beans: i64,
    cups: i64,
    money: i64,
}

impl ValueObject for Recipe {}

impl Recipe {
    pub const ESPRESSO: Recipe = Recipe::from_parts(250, 0, 16, 1, 4);
    pub const LATTE: Recipe = Recipe::from_parts(350, 75, 20, 1, 7);
    pub const CAPPUCCINO: Recipe = Recipe::from_parts(200, 100, 12, 1, 6);

    /// Build a recipe, rejecting negative quantities or a negative price.
    pub fn new(water: i64, milk: i64, beans: i64, cups: i64, money: i64) -> DomainResult<Self> {
        let fields = [
            ("water", water),
            ("milk", milk),
            ("beans", beans),
            ("cups", cups),
            ("money", money),
        ];
        for (name, value) in fields {
            if value < 0 {
                return Err(DomainError::validation(format!(
                    "{name} cannot be negative (got {value})"
                )));
            }
        }
        Ok(Self::from_parts(water, milk, beans, cups, money))
    }

    const fn from_parts(water: i64, milk: i64, beans: i64, cups: i64, money: i64) -> Self {
        Self {
            water,
            milk,
            beans,
            cups,
            money,
        }
    }

    pub fn water(&self) -> i64 {
        self.water
    }

    pub fn milk(&self) -> i64 {
        self.milk
    }

    pub fn beans(&self) -> i64 {
        self.beans
    }

    pub fn cups(&self) -> i64 {
        self.cups
    }

    /// Price credited to the machine on a successful brew.
    pub fn money(&self) -> i64 {
        self.money
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RecipeFields {
    #[serde(default)]
    water: i64,
    #[serde(default)]
    milk: i64,
    #[serde(default)]
    beans: i64,
    #[serde(default)]
    cups: i64,
    #[serde(default)]
    money: i64,
}

impl TryFrom<RecipeFields> for Recipe {
    type Error = DomainError;

    fn try_from(f: RecipeFields) -> Result<Self, Self::Error> {
        Recipe::new(f.water, f.milk, f.beans, f.cups, f.money)
    }
}

/// Immutable mapping from drink identifier to recipe.
///
/// Lookups are exact-case: `"Espresso"` does not match `"espresso"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeTable {
    recipes: BTreeMap<String, Recipe>,
}

impl RecipeTable {
    /// An empty table; populate with [`RecipeTable::insert`].
    pub fn empty() -> Self {
        Self {
            recipes: BTreeMap::new(),
        }
    }

    /// The built-in espresso / latte / cappuccino menu.
    pub fn standard() -> Self {
        Self::empty()
            .insert("espresso", Recipe::ESPRESSO)
            .insert("latte", Recipe::LATTE)
            .insert("cappuccino", Recipe::CAPPUCCINO)
    }

    /// Parse a table from a JSON object of `drink -> { water, milk, beans, cups, money }`.
    ///
    /// Omitted quantities default to zero. Every recipe is validated and the
    /// table must name at least one drink.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let table: RecipeTable =
            serde_json::from_str(json).map_err(|e| DomainError::malformed(e.to_string()))?;
        if table.is_empty() {
            return Err(DomainError::validation("recipe table has no drinks"));
        }
        Ok(table)
    }

    pub fn insert(mut self, drink: impl Into<String>, recipe: Recipe) -> Self {
        self.recipes.insert(drink.into(), recipe);
        self
    }

    pub fn get(&self, drink: &str) -> Option<&Recipe> {
        self.recipes.get(drink)
    }

    /// Drink identifiers in sorted order.
    pub fn drinks(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_matches_the_menu() {
        let table = RecipeTable::standard();
        assert_eq!(table.len(), 3);

        let espresso = table.get("espresso").unwrap();
        assert_eq!(
            (espresso.water(), espresso.milk(), espresso.beans(), espresso.cups(), espresso.money()),
            (250, 0, 16, 1, 4)
        );

        let latte = table.get("latte").unwrap();
        assert_eq!(
            (latte.water(), latte.milk(), latte.beans(), latte.cups(), latte.money()),
            (350, 75, 20, 1, 7)
        );

        let cappuccino = table.get("cappuccino").unwrap();
        assert_eq!(
            (
                cappuccino.water(),
                cappuccino.milk(),
                cappuccino.beans(),
                cappuccino.cups(),
                cappuccino.money()
            ),
            (200, 100, 12, 1, 6)
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = RecipeTable::standard();
        assert!(table.get("espresso").is_some());
        assert!(table.get("Espresso").is_none());
        assert!(table.get("ESPRESSO").is_none());
        assert!(table.get("mocha").is_none());
    }

    #[test]
    fn drinks_are_listed_in_sorted_order() {
        let table = RecipeTable::standard();
        let drinks: Vec<&str> = table.drinks().collect();
        assert_eq!(drinks, vec!["cappuccino", "espresso", "latte"]);
    }

    #[test]
    fn new_rejects_negative_quantities() {
        let err = Recipe::new(100, -1, 10, 1, 3).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("milk") => {}
            other => panic!("expected milk validation error, got {other:?}"),
        }
        assert!(Recipe::new(0, 0, 0, 0, 0).is_ok());
    }

    #[test]
    fn from_json_parses_and_defaults_missing_fields() {
        let table = RecipeTable::from_json(
            r#"{ "americano": { "water": 400, "beans": 16, "cups": 1, "money": 5 } }"#,
        )
        .unwrap();
        let americano = table.get("americano").unwrap();
        assert_eq!(*americano, Recipe::new(400, 0, 16, 1, 5).unwrap());
        assert!(table.get("espresso").is_none());
    }

    #[test]
    fn from_json_rejects_invalid_tables() {
        assert!(matches!(
            RecipeTable::from_json("{}"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            RecipeTable::from_json(r#"{ "bad": { "water": -5 } }"#),
            Err(DomainError::Malformed(_))
        ));
        assert!(matches!(
            RecipeTable::from_json(r#"{ "bad": { "sugar": 5 } }"#),
            Err(DomainError::Malformed(_))
        ));
        assert!(matches!(
            RecipeTable::from_json("not json"),
            Err(DomainError::Malformed(_))
        ));
    }

    #[test]
    fn standard_table_serializes_back_to_json() {
        let json = serde_json::to_string(&RecipeTable::standard()).unwrap();
        let parsed = RecipeTable::from_json(&json).unwrap();
        assert_eq!(parsed, RecipeTable::standard());
    }
}
