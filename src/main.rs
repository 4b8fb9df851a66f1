use clap::Parser;

use drillbit::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();
    cli::run(cli);
}
