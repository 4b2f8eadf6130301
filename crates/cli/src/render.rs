//! Terminal rendering of machine state and messages.

use std::io::{self, Write};

use colored::Colorize;

use brewery_machine::SupplyLevels;

pub fn show_state(out: &mut impl Write, state: &SupplyLevels) -> io::Result<()> {
    writeln!(out, "{}", "\nThe coffee machine has:".yellow())?;
    writeln!(out, "{} ml water", state.water)?;
    writeln!(out, "{} ml milk", state.milk)?;
    writeln!(out, "{} g beans", state.beans)?;
    writeln!(out, "{} cups", state.cups)?;
    writeln!(out, "${}\n", state.money)
}

pub fn show_message(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.green())
}

pub fn show_error(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.red())
}
