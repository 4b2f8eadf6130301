use anyhow::Result;
use colored::Colorize;

use brewery_cli::{Config, InquirePrompter, Shell};

fn main() {
    // Keep the terminal quiet unless RUST_LOG asks for more.
    brewery_observability::init_with_default("warn");

    if let Err(err) = run() {
        eprintln!("{}", format!("{err:#}").red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;
    let machine = config.build_machine()?;

    tracing::info!(
        drinks = machine.recipes().len(),
        custom_recipes = config.recipes_path.is_some(),
        "coffee machine ready"
    );

    let mut shell = Shell::new(machine, InquirePrompter, std::io::stdout());
    shell.run()?;

    tracing::info!(state = ?shell.machine().state(), "session ended");
    Ok(())
}
