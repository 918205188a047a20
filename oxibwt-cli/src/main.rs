//! OxiBWT CLI - Burrows-Wheeler Transform toolkit
//!
//! Runs the forward and inverse transforms, byte-size and round-trip
//! measurements on sequences given on the command line, picked from the
//! predefined list, or read from a file.

mod commands;
mod utils;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use commands::{
    cmd_batch, cmd_forward, cmd_interactive, cmd_inverse, cmd_measure, cmd_presets, cmd_size,
    resolve_sequence,
};
use oxibwt_transform::{Alphabet, Bwt, BwtConfig, Construction, MissingSentinel};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxibwt")]
#[command(author, version, about = "Burrows-Wheeler Transform toolkit")]
#[command(long_about = "
OxiBWT runs the Burrows-Wheeler Transform and its inverse on short symbol
sequences. The sentinel ('$' by default) is appended by the forward
transform and always sorts before every other symbol.

Examples:
  oxibwt forward GATTACA
  oxibwt forward --table GATTACA
  oxibwt forward --preset 3
  oxibwt inverse 'ACTGA$TA'
  oxibwt inverse --strict --table 'ACTGA$TA'
  oxibwt size GATTACA
  oxibwt measure --json ATATATATATA
  oxibwt --alphabet dna batch sequences.txt
  oxibwt interactive
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    engine: EngineArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Options shared by every command that runs the engine.
#[derive(Args)]
struct EngineArgs {
    /// Sentinel symbol (a single ASCII character)
    #[arg(long, global = true, default_value = "$", value_parser = utils::parse_sentinel)]
    sentinel: u8,

    /// Alphabet that sequences must be drawn from
    #[arg(long, global = true, value_enum, default_value = "bytes")]
    alphabet: AlphabetArg,

    /// Forward construction strategy
    #[arg(long, global = true, value_enum, default_value = "doubling")]
    construction: ConstructionArg,
}

impl EngineArgs {
    fn config(&self) -> BwtConfig {
        BwtConfig::new()
            .with_sentinel(self.sentinel)
            .with_alphabet(self.alphabet.into())
            .with_construction(self.construction.into())
    }
}

/// Input alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlphabetArg {
    /// Any byte
    Bytes,
    /// A, C, G, T
    Dna,
    /// A, C, G, T, N
    DnaN,
}

impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Bytes => Alphabet::Bytes,
            AlphabetArg::Dna => Alphabet::Dna,
            AlphabetArg::DnaN => Alphabet::DnaWithN,
        }
    }
}

/// Forward construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ConstructionArg {
    /// Sort rotations by direct comparison
    Naive,
    /// Suffix array by prefix doubling
    Doubling,
}

impl From<ConstructionArg> for Construction {
    fn from(arg: ConstructionArg) -> Self {
        match arg {
            ConstructionArg::Naive => Construction::Naive,
            ConstructionArg::Doubling => Construction::PrefixDoubling,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the forward transform
    #[command(alias = "f")]
    Forward {
        /// Sequence to transform
        #[arg(required_unless_present = "preset")]
        sequence: Option<String>,

        /// Use a predefined sequence (1-based, see `presets`)
        #[arg(short, long, conflicts_with = "sequence")]
        preset: Option<usize>,

        /// Show all rotations next to their sorted order
        #[arg(short, long)]
        table: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Reconstruct a sequence from its transform
    #[command(alias = "i")]
    Inverse {
        /// Transformed sequence
        sequence: String,

        /// Require the sentinel instead of appending a missing one
        #[arg(short, long)]
        strict: bool,

        /// Show the recovered first and last columns
        #[arg(short, long)]
        table: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Print the UTF-8 size of a sequence in bytes
    #[command(alias = "s")]
    Size {
        /// Sequence to measure
        #[arg(required_unless_present = "preset")]
        sequence: Option<String>,

        /// Use a predefined sequence (1-based, see `presets`)
        #[arg(short, long, conflicts_with = "sequence")]
        preset: Option<usize>,
    },

    /// Run a round trip and report lengths, ratio and timings
    #[command(alias = "m")]
    Measure {
        /// Sequence to measure
        #[arg(required_unless_present = "preset")]
        sequence: Option<String>,

        /// Use a predefined sequence (1-based, see `presets`)
        #[arg(short, long, conflicts_with = "sequence")]
        preset: Option<usize>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// List the predefined sequences
    Presets,

    /// Measure every line of a file
    Batch {
        /// File with one sequence per line
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Menu-driven session
    Interactive,

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    utils::init_logger(cli.verbose);

    let bwt = Bwt::new(cli.engine.config());

    let result = match cli.command {
        Commands::Forward {
            sequence,
            preset,
            table,
            json,
        } => resolve_sequence(sequence, preset)
            .and_then(|sequence| cmd_forward(&bwt, &sequence, table, json)),
        Commands::Inverse {
            sequence,
            strict,
            table,
            json,
        } => {
            let bwt = if strict {
                Bwt::new(bwt.config().with_missing_sentinel(MissingSentinel::Reject))
            } else {
                bwt
            };
            cmd_inverse(&bwt, &sequence, table, json)
        }
        Commands::Size { sequence, preset } => {
            resolve_sequence(sequence, preset).and_then(|sequence| cmd_size(&sequence))
        }
        Commands::Measure {
            sequence,
            preset,
            json,
        } => resolve_sequence(sequence, preset)
            .and_then(|sequence| cmd_measure(&bwt, &sequence, json)),
        Commands::Presets => cmd_presets(),
        Commands::Batch {
            file,
            json,
            no_progress,
        } => cmd_batch(&bwt, &file, json, !no_progress),
        Commands::Interactive => cmd_interactive(&bwt),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "oxibwt", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
