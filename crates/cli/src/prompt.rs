//! Collecting choices from the user.

use anyhow::{Result, anyhow};
use inquire::{CustomType, InquireError, Select};

use brewery_machine::RefillDelta;

/// Top-level menu entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Buy,
    Fill,
    Take,
    Exit,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Buy, Action::Fill, Action::Take, Action::Exit];
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Action::Buy => "buy",
            Action::Fill => "fill",
            Action::Take => "take",
            Action::Exit => "exit",
        })
    }
}

/// Source of user choices. `Ok(None)` means the user cancelled the prompt.
pub trait Prompter {
    fn action(&mut self) -> Result<Option<Action>>;

    /// Pick one of `drinks`. The returned id is passed to the machine as-is.
    fn drink(&mut self, drinks: &[&str]) -> Result<Option<String>>;

    fn refill(&mut self) -> Result<Option<RefillDelta>>;
}

/// Terminal prompter backed by `inquire`.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn action(&mut self) -> Result<Option<Action>> {
        let prompt = Select::new(
            "Choose an action (buy, fill, take, exit):",
            Action::ALL.to_vec(),
        )
        .prompt();
        cancellable(prompt)
    }

    fn drink(&mut self, drinks: &[&str]) -> Result<Option<String>> {
        let message = format!("Choose your drink ({}):", drinks.join(", "));
        let prompt = Select::new(&message, drinks.to_vec()).prompt();
        Ok(cancellable(prompt)?.map(str::to_string))
    }

    fn refill(&mut self) -> Result<Option<RefillDelta>> {
        let fields = [
            "Water (ml):",
            "Milk (ml):",
            "Beans (g):",
            "Cups:",
        ];
        let mut amounts = [0i64; 4];
        for (message, amount) in fields.into_iter().zip(amounts.iter_mut()) {
            let prompt = CustomType::<i64>::new(message)
                .with_default(0)
                .with_error_message("Please type a whole number")
                .prompt();
            match cancellable(prompt)? {
                Some(value) => *amount = value,
                None => return Ok(None),
            }
        }

        let [water, milk, beans, cups] = amounts;
        Ok(Some(RefillDelta {
            water,
            milk,
            beans,
            cups,
        }))
    }
}

fn cancellable<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(anyhow!("Prompt failed: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_display_as_menu_labels() {
        let labels: Vec<String> = Action::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["buy", "fill", "take", "exit"]);
    }

    #[test]
    fn cancelled_prompts_are_not_errors() {
        assert_eq!(
            cancellable::<i64>(Err(InquireError::OperationCanceled)).unwrap(),
            None
        );
        assert_eq!(
            cancellable::<i64>(Err(InquireError::OperationInterrupted)).unwrap(),
            None
        );
        assert_eq!(cancellable(Ok(7)).unwrap(), Some(7));
        assert!(cancellable::<i64>(Err(InquireError::NotTTY)).is_err());
    }
}
