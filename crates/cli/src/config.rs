//! Environment-driven configuration.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use brewery_machine::{CoffeeMachine, RecipeTable, SupplyOverrides};

pub const RECIPES_VAR: &str = "BREWERY_RECIPES";
pub const WATER_VAR: &str = "BREWERY_WATER";
pub const MILK_VAR: &str = "BREWERY_MILK";
pub const BEANS_VAR: &str = "BREWERY_BEANS";
pub const CUPS_VAR: &str = "BREWERY_CUPS";
pub const MONEY_VAR: &str = "BREWERY_MONEY";

/// Startup configuration for the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// JSON recipe table replacing the built-in menu.
    pub recipes_path: Option<PathBuf>,
    /// Initial supply overrides merged onto the defaults.
    pub supplies: SupplyOverrides,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let supplies = SupplyOverrides {
            water: parse_level(WATER_VAR, get(WATER_VAR))?,
            milk: parse_level(MILK_VAR, get(MILK_VAR))?,
            beans: parse_level(BEANS_VAR, get(BEANS_VAR))?,
            cups: parse_level(CUPS_VAR, get(CUPS_VAR))?,
            money: parse_level(MONEY_VAR, get(MONEY_VAR))?,
        };

        Ok(Self {
            recipes_path: get(RECIPES_VAR).map(PathBuf::from),
            supplies,
        })
    }

    /// Load the recipe table: the configured file, or the built-in menu.
    pub fn recipes(&self) -> Result<RecipeTable> {
        let Some(path) = &self.recipes_path else {
            return Ok(RecipeTable::standard());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read recipe file {}", path.display()))?;
        RecipeTable::from_json(&json)
            .with_context(|| format!("invalid recipe file {}", path.display()))
    }

    pub fn build_machine(&self) -> Result<CoffeeMachine> {
        Ok(CoffeeMachine::builder()
            .recipes(self.recipes()?)
            .supplies(self.supplies)
            .build())
    }
}

fn parse_level(key: &str, value: Option<String>) -> Result<Option<i64>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let level: i64 = value
        .trim()
        .parse()
        .with_context(|| format!("{key} must be an integer, got {value:?}"))?;
    if level < 0 {
        bail!("{key} cannot be negative, got {level}");
    }
    Ok(Some(level))
}
