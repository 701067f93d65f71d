//! karibu CLI
//!
//! Run without arguments for the interactive greeting screen, or replay
//! a scripted sequence of presses with `karibu play`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use karibu::logging::init_tracing;
use karibu::report::{format_blessings, format_state};
use karibu::script::{parse_steps, replay};
use karibu::types::OutputFormat;

#[derive(Parser)]
#[command(name = "karibu")]
#[command(about = "Type a name, get a greeting and a blessing")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay steps on a fresh screen and print the final state
    Play {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Steps, in order: name=<text>, greet, toggle
        #[arg(allow_hyphen_values = true)]
        steps: Vec<String>,
    },

    /// List the blessings in rotation order
    Blessings,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        None => cmd_tui(),
        Some(Commands::Play { format, steps }) => cmd_play(format.into(), &steps),
        Some(Commands::Blessings) => cmd_blessings(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui() -> Result<(), String> {
    karibu::tui::run().map_err(|e| format!("terminal error: {}", e))
}

fn cmd_play(format: OutputFormat, steps: &[String]) -> Result<(), String> {
    let commands = parse_steps(steps).map_err(|e| e.to_string())?;
    tracing::info!(steps = commands.len(), "replaying script");

    let state = replay(commands);
    print!("{}", format_state(&state, format));

    Ok(())
}

fn cmd_blessings() -> Result<(), String> {
    print!("{}", format_blessings());
    Ok(())
}
