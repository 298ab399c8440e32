use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealwise::cli::categorize::categorize_command;
use mealwise::cli::list::{list_command, plan_command};
use mealwise::config::OutputFormat;
use mealwise::{AppError, Config};

/// mealwise - Shopping lists from meal plans
#[derive(Parser)]
#[command(name = "mealwise")]
#[command(about = "Aggregate a meal plan into a categorized shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a JSON array of per-day shopping lists
    List {
        /// Input file, `-` for stdin
        #[arg(long, short)]
        input: PathBuf,

        /// Output format (overrides config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Keep tap water on the list
        #[arg(long)]
        keep_water: bool,
    },
    /// Aggregate the ingredients of a generated meal plan
    Plan {
        /// Input file, `-` for stdin
        #[arg(long, short)]
        input: PathBuf,

        /// Output format (overrides config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Keep tap water on the list
        #[arg(long)]
        keep_water: bool,
    },
    /// Print the aisle of each ingredient name
    Categorize {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(AppError::Validation)?;

    mealwise::observability::init_observability(
        "mealwise",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    let output = match cli.command {
        Commands::List {
            input,
            format,
            keep_water,
        } => list_command(&config, &input, format, keep_water)?,
        Commands::Plan {
            input,
            format,
            keep_water,
        } => plan_command(&config, &input, format, keep_water)?,
        Commands::Categorize { names } => categorize_command(&config, &names),
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
