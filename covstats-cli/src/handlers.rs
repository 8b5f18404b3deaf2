use anyhow::Result;
use clap::ArgMatches;

use covstats_core::stats::summarize_coverage_file;

pub fn run_covstats(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to a coverage file is required.");

    let summary = summarize_coverage_file(input)?;
    println!("{}", summary);

    Ok(())
}
