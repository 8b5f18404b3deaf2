mod handlers;

use anyhow::Result;
use clap::{Arg, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "covstats";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Report mean and median read depth from a per-base genome coverage file (chrom<TAB>position<TAB>count).")
        .arg(
            Arg::new("input")
                .help("Path to the coverage file (optionally gzip'd)")
                .required(true),
        )
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    handlers::run_covstats(&matches)
}
