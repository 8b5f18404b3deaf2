pub const DELIMITER: char = '\t';
pub const COMMENT_CHAR: char = '#';

// genomeCoverageBed -d emits chrom, 1-based position, depth
pub const COUNT_COL_INDEX: usize = 2;
pub const EXPECTED_COL_COUNT: usize = 3;

pub const GZ_FILE_EXTENSION: &str = "gz";
