mod check;
mod run;
mod store_cmd;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "drillbit")]
#[command(about = "Test harness for coding drill solutions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every problem against its solution, or a single one by id
    Run {
        /// Problem id to run; omit to run the whole store
        id: Option<String>,
        /// Print the machine-checkable report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify every problem has a registered solution and visible test cases
    Check,
    /// Show or set the problem store directory
    Store {
        /// New store directory; omit to show the current one
        dir: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) {
    match cli.command {
        None => run::run_problems(None, false),
        Some(Commands::Run { id, json }) => run::run_problems(id, json),
        Some(Commands::Check) => check::check_store(),
        Some(Commands::Store { dir }) => store_cmd::handle_store(dir),
    }
}
