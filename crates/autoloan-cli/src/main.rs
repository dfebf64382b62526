mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::manage::{ApproveArgs, DeleteArgs, ListArgs, SaveArgs, ShowArgs};
use commands::schedule::ScheduleArgs;
use commands::tax::TaxArgs;

/// Vehicle financing calculations
#[derive(Parser)]
#[command(
    name = "alc",
    version,
    about = "Vehicle financing schedules and Korean auto taxes",
    long_about = "A CLI for vehicle loan amortization with decimal precision. Builds \
                  equal-payment repayment schedules with auto tax and environmental \
                  charge columns, and manages saved loan applications through a \
                  draft/approve workflow."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an equal-payment repayment schedule
    Schedule(ScheduleArgs),
    /// Annual and monthly auto tax for an engine displacement
    Tax(TaxArgs),
    /// Save a loan application as a draft, or update an existing one
    Save(SaveArgs),
    /// List saved loan applications, newest first
    List(ListArgs),
    /// Show one saved loan application in full
    Show(ShowArgs),
    /// Approve a saved loan application
    Approve(ApproveArgs),
    /// Delete a saved loan application
    Delete(DeleteArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Tax(args) => commands::tax::run_tax(args),
        Commands::Save(args) => commands::manage::run_save(args),
        Commands::List(args) => commands::manage::run_list(args),
        Commands::Show(args) => commands::manage::run_show(args),
        Commands::Approve(args) => commands::manage::run_approve(args),
        Commands::Delete(args) => commands::manage::run_delete(args),
        Commands::Version => {
            println!("alc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
