use clap::Parser;

use tagfill::cli::{self, ClearCli};

fn main() {
    let cli = ClearCli::parse();
    cli::init_logging(cli.verbose, false);

    if let Err(e) = cli::run_clear(cli) {
        eprintln!("오류: {:#}", e);
        std::process::exit(1);
    }
}
