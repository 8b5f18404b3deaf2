use std::fmt;
use std::path::Path;

use crate::errors::CoverageStatsError;
use crate::reader::read_coverage_counts;

/// One-line summary of a coverage file: the path exactly as supplied, the
/// arithmetic mean of the depth counts, and their median.
///
/// `Display` renders the output line (`source\tmean\tmedian`) using Rust's
/// default float formatting, so whole-number results print without a
/// trailing `.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageSummary {
    pub source: String,
    pub mean: f64,
    pub median: f64,
}

impl fmt::Display for CoverageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.source, self.mean, self.median)
    }
}

/// Arithmetic mean. `counts` must be non-empty.
pub fn mean(counts: &[f64]) -> f64 {
    counts.iter().sum::<f64>() / counts.len() as f64
}

/// Full-sample median: middle element of the sorted counts, or the mean of
/// the two middle elements when the sample size is even. `counts` must be
/// non-empty.
pub fn median(counts: &[f64]) -> f64 {
    let mut sorted = counts.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

///
/// Computes mean and median depth for one coverage file.
///
/// The source string is echoed into the summary untouched so the output
/// line reports the path the caller actually passed. An input with zero
/// records is an error, since both statistics are undefined on an empty
/// sample.
///
/// # Arguments
///
/// - source: path to a coverage file, as given on the command line
///
pub fn summarize_coverage_file(source: &str) -> Result<CoverageSummary, CoverageStatsError> {
    let path = Path::new(source);
    let counts = read_coverage_counts(path)?;

    if counts.is_empty() {
        return Err(CoverageStatsError::EmptyInput(path.to_path_buf()));
    }

    Ok(CoverageSummary {
        source: source.to_string(),
        mean: mean(&counts),
        median: median(&counts),
    })
}
