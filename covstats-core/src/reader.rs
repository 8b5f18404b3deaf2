use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::consts::{COMMENT_CHAR, COUNT_COL_INDEX, DELIMITER, EXPECTED_COL_COUNT, GZ_FILE_EXTENSION};
use crate::errors::CoverageStatsError;

///
/// Get a reader for either a gzip'd or non-gzip'd coverage file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, CoverageStatsError> {
    let is_gzipped = path.extension() == Some(OsStr::new(GZ_FILE_EXTENSION));
    let file = File::open(path).map_err(|source| CoverageStatsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// True for lines that carry no coverage record: empty lines, lines whose
/// first character is whitespace, and `#` comments. The first character is
/// tested before any trimming.
pub fn is_skippable_line(line: &str) -> bool {
    match line.chars().next() {
        None => true,
        Some(c) => c.is_whitespace() || c == COMMENT_CHAR,
    }
}

/// Extracts the depth count from the third tab-separated column of a
/// retained line. Trailing whitespace on the field is tolerated so lines
/// with a stray carriage return still parse.
pub fn parse_count_field(
    line: &str,
    path: &Path,
    line_number: usize,
) -> Result<f64, CoverageStatsError> {
    let field = line.split(DELIMITER).nth(COUNT_COL_INDEX).ok_or_else(|| {
        CoverageStatsError::MalformedLine {
            path: path.to_path_buf(),
            line_number,
            reason: format!(
                "expected {} tab-separated columns (chrom, position, count)",
                EXPECTED_COL_COUNT
            ),
        }
    })?;

    let field = field.trim_end();
    let count: f64 = field
        .parse()
        .map_err(|_| CoverageStatsError::MalformedLine {
            path: path.to_path_buf(),
            line_number,
            reason: format!("count column is not numeric: {:?}", field),
        })?;

    // "nan"/"inf" parse as f64 but can't be a sequencing depth, and a single
    // NaN would corrupt both statistics
    if !count.is_finite() {
        return Err(CoverageStatsError::MalformedLine {
            path: path.to_path_buf(),
            line_number,
            reason: format!("count column is not a finite number: {:?}", field),
        });
    }

    Ok(count)
}

///
/// Reads every coverage count from a per-base coverage file, in file order.
///
/// Blank lines, whitespace-leading lines, and `#` comments contribute
/// nothing. Any retained line that doesn't carry a numeric third column
/// fails the whole read. Line numbers in errors are 1-based.
///
/// # Arguments
///
/// - path: path to a coverage file, optionally gzip'd
///
pub fn read_coverage_counts(path: &Path) -> Result<Vec<f64>, CoverageStatsError> {
    let reader = get_dynamic_reader(path)?;

    let mut counts: Vec<f64> = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if is_skippable_line(&line) {
            continue;
        }
        counts.push(parse_count_field(&line, path, index + 1)?);
    }

    Ok(counts)
}
