//! The interactive buy / fill / take loop.

use std::io::Write;

use anyhow::Result;

use brewery_machine::{BrewOutcome, CoffeeMachine};

use crate::prompt::{Action, Prompter};
use crate::render;

/// One interactive session over an injected machine.
pub struct Shell<P, W> {
    machine: CoffeeMachine,
    prompter: P,
    out: W,
}

impl<P: Prompter, W: Write> Shell<P, W> {
    pub fn new(machine: CoffeeMachine, prompter: P, out: W) -> Self {
        Self {
            machine,
            prompter,
            out,
        }
    }

    pub fn machine(&self) -> &CoffeeMachine {
        &self.machine
    }

    pub fn into_machine(self) -> CoffeeMachine {
        self.machine
    }

    /// Run until the user exits or cancels the action menu.
    pub fn run(&mut self) -> Result<()> {
        while let Some(action) = self.prompter.action()? {
            tracing::debug!(%action, "action selected");
            match action {
                Action::Buy => self.handle_buy()?,
                Action::Fill => self.handle_fill()?,
                Action::Take => self.handle_take()?,
                Action::Exit => break,
            }
            render::show_state(&mut self.out, &self.machine.state())?;
        }
        Ok(())
    }

    pub fn handle_buy(&mut self) -> Result<()> {
        let drinks: Vec<&str> = self.machine.recipes().drinks().collect();
        let Some(drink) = self.prompter.drink(&drinks)? else {
            return Ok(());
        };

        match self.machine.brew(&drink) {
            BrewOutcome::Brewed => render::show_message(&mut self.out, "☕ Brewing your coffee...")?,
            BrewOutcome::Rejected(rejection) => {
                render::show_error(&mut self.out, rejection.reason())?
            }
        }
        Ok(())
    }

    pub fn handle_fill(&mut self) -> Result<()> {
        if let Some(delta) = self.prompter.refill()? {
            self.machine.refill(delta);
        }
        Ok(())
    }

    pub fn handle_take(&mut self) -> Result<()> {
        let money = self.machine.take_money();
        render::show_message(&mut self.out, &format!("💰 You took ${money}"))?;
        Ok(())
    }
}
