//! Console host shell: argument parsing, rendering and command execution.

pub mod cli;
pub mod console;
pub mod run;

pub use cli::{Cli, Command};
pub use console::ConsoleRenderer;
pub use run::run_command;
