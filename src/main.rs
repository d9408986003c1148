use clap::Parser;

use tagfill::cli::{self, FillCli};

fn main() {
    let cli = FillCli::parse();
    cli::init_logging(cli.verbose, cli.quiet);

    if let Err(e) = cli::run_fill(cli) {
        eprintln!("오류: {:#}", e);
        std::process::exit(1);
    }
}
