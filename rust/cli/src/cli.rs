//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use lostcities_engine::cards::{ExpeditionCard, Suit};

#[derive(Parser, Debug)]
#[command(
    name = "lostcities",
    version,
    about = "Lost Cities score calculator",
    long_about = "Keeps score for a two-player, three-round game of Lost Cities. \
                  Every change is saved to a snapshot file so the game can be \
                  picked up again later."
)]
pub struct LostCitiesCli {
    /// Snapshot file to read and update (overrides LOSTCITIES_STATE and the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub state: Option<String>,

    #[command(subcommand)]
    pub cmd: Commands,
}

/// Which player's round a command looks at. Omitted values come from configuration.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct SelectionArgs {
    /// Player number (1 or 2)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub player: Option<u8>,

    /// Round number (1-3)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub round: Option<u8>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the selected round, suit by suit
    Show {
        /// Print the suit breakdown as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Show both players' game totals and round scores
    Score {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark an expedition card as played, or unmark it
    Toggle {
        /// Card as suit-rank, e.g. red-7
        #[arg(long, value_name = "SUIT-RANK")]
        card: ExpeditionCard,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Advance a suit's wager: none, x2, x3, x4, then back to none
    Wager {
        /// yellow, blue, white, green, red, or purple
        #[arg(long)]
        suit: Suit,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Clear every round for both players
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
