// bitmask-cli: evaluate flag register operations from the shell, with flag
// names resolved through enums declared in bitmask.toml.

mod commands;
mod config;
mod error;
mod flag_set;
mod operand;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use commands::{Op, Output};
use config::BitmaskConfig;
use error::CliError;

#[derive(Parser)]
#[command(name = "bitmask", about = "Bitmask CLI: add, remove, flip and test flags in a 32-bit register")]
struct Cli {
    /// Path to bitmask.toml (default: ./bitmask.toml if it exists).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Enum from the config used to resolve flag names.
    #[arg(long = "enum", global = true, value_name = "NAME")]
    enum_name: Option<String>,
    /// Print JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Register and mask operands: integers (`5`, `-1`, `0x0c`, `0b101`) or
/// `|`-separated flag names (`Fire|Lightning`).
#[derive(Args)]
struct Operands {
    #[arg(allow_hyphen_values = true)]
    flags: String,
    #[arg(allow_hyphen_values = true)]
    mask: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Set every flag of MASK in FLAGS.
    Add(Operands),
    /// Clear every flag of MASK in FLAGS.
    Remove(Operands),
    /// Toggle every flag of MASK in FLAGS.
    Flip(Operands),
    /// Print whether any flag of MASK is set in FLAGS.
    HasAny(Operands),
    /// Print whether every flag of MASK is set in FLAGS.
    HasAll(Operands),
    /// Split a register into flag names (requires --enum).
    Describe {
        #[arg(allow_hyphen_values = true)]
        flags: String,
    },
    /// Validate every enum in the config.
    Check,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = BitmaskConfig::load(cli.config.as_deref())?;
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    let mut output = Output { json: cli.json, out: &mut lock };

    let (op, operands) = match cli.command {
        Commands::Check => return commands::run_check(&config, &mut output),
        Commands::Describe { flags } => {
            let set = commands::select_enum(&config, cli.enum_name.as_deref())?;
            return commands::run_describe(&flags, set.as_ref(), &mut output);
        }
        Commands::Add(operands) => (Op::Add, operands),
        Commands::Remove(operands) => (Op::Remove, operands),
        Commands::Flip(operands) => (Op::Flip, operands),
        Commands::HasAny(operands) => (Op::HasAny, operands),
        Commands::HasAll(operands) => (Op::HasAll, operands),
    };

    let set = commands::select_enum(&config, cli.enum_name.as_deref())?;
    commands::run_op(op, &operands.flags, &operands.mask, set.as_ref(), &mut output)?;
    Ok(())
}
