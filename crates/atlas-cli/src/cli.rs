use clap::{Parser, Subcommand};

use crate::support::DEFAULT_PROGRESS_PATH;

#[derive(Parser)]
#[command(
    name = "atlas",
    about = "Atlas: open the gate, align the sigils, and arrange the tiles",
    version
)]
pub struct Cli {
    /// Path to the progress JSON file
    #[arg(long, global = true, env = "ATLAS_PROGRESS", default_value = DEFAULT_PROGRESS_PATH)]
    pub progress: String,

    /// Optional puzzle config (TOML) overriding the built-in content
    #[arg(long, global = true, env = "ATLAS_CONFIG")]
    pub config: Option<String>,

    /// Seed for reproducible tile shuffles
    #[arg(long, global = true, env = "ATLAS_SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show gate, sigil, tile and combination progress
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Speak the key phrase at the gate
    Gate {
        /// The phrase to offer
        phrase: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Type the next sigil
    Sigil {
        /// The sigil word
        guess: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Arrange the word tiles
    Tiles {
        /// Operation to apply, in order (repeatable):
        /// `stage WORD [SLOT]`, `source WORD`, `promote SLOT`, `demote SLOT`,
        /// `complete`, `reset`
        #[arg(long = "op")]
        ops: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reorder the value words and try the combination
    Order {
        /// Move one entry, `FROM:TO` (repeatable)
        #[arg(long = "move")]
        moves: Vec<String>,

        /// Comma-separated combination to submit
        #[arg(long)]
        submit: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the encoded value of each word
    Value {
        /// Words to encode
        #[arg(required = true)]
        words: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Forget all progress
    Reset {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
