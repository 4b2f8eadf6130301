//! Interactive shell around the coffee machine.
//!
//! The shell owns no domain logic: it collects a choice through a
//! [`prompt::Prompter`], calls the injected machine, and renders the result.

pub mod config;
pub mod prompt;
pub mod render;
pub mod shell;

pub use config::Config;
pub use prompt::{Action, InquirePrompter, Prompter};
pub use shell::Shell;
