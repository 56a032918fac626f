//! Command-line interface for ledtoe.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// LED tic-tac-toe - board simulator and engine self-play
#[derive(Parser, Debug)]
#[command(name = "ledtoe")]
#[command(about = "3x3 LED tic-tac-toe board with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the board in the terminal
    Play {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fixed RNG seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Log file (overrides the config file)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Play engine games headlessly and print the results
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Let O move at random instead of searching
        #[arg(long)]
        random_o: bool,

        /// Fixed RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selfplay() {
        let cli = Cli::parse_from(["ledtoe", "selfplay", "--games", "3", "--random-o"]);
        assert!(matches!(
            cli.command,
            Command::Selfplay { games: 3, random_o: true, seed: None }
        ));
    }

    #[test]
    fn test_parse_play() {
        let cli = Cli::parse_from(["ledtoe", "play", "--seed", "7"]);
        let Command::Play { config, seed, log_file } = cli.command else {
            panic!("expected play");
        };
        assert_eq!(config, None);
        assert_eq!(seed, Some(7));
        assert_eq!(log_file, None);
    }
}
