use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Creator Cards - lazy, flip-revealing creator cards in the terminal
#[derive(Debug, Parser)]
#[command(name = "creator-cards")]
#[command(version)]
#[command(about = "Creator Cards - lazy, flip-revealing creator cards in the terminal")]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "creator-cards.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Print the front face of every card
    List,

    /// Flip cards to their back face and print it once loaded
    Reveal {
        /// Card positions (1-based)
        #[arg(required = true)]
        indices: Vec<usize>,
    },

    /// Flip one card back and forth, printing the back face each time
    Cycle {
        /// Card position (1-based)
        index: usize,

        /// Number of front-to-back flips
        #[arg(short, long, default_value_t = 2)]
        times: usize,
    },
}
