//! Readers for the comma-separated SAT tables.
//!
//! The tables contain headers, notes and blank lines mixed with the data, so
//! every row is parsed on its own. Rows that do not parse are skipped and
//! counted instead of aborting the read.

use crate::error::{Error, Result, RowError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const SCALE_FILE: &str = "sat_scale.csv";
pub const RANKS_FILE: &str = "sat_ranks.csv";
pub const SCORES_FILE: &str = "SATPercentileRanks2009.csv";

/// The rows that parsed, and how many did not.
#[derive(Debug, Clone)]
pub struct Table<T> {
    pub rows: Vec<T>,
    pub skipped: usize,
}

/// The test sections of the scale table. Each section occupies two columns:
/// the raw score and the range of scaled scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Reading,
    Math,
    Writing,
}

impl Section {
    /// Returns the index of the raw score column.
    pub fn column(self) -> usize {
        match self {
            Section::Reading => 0,
            Section::Math => 2,
            Section::Writing => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Section::Reading => "reading",
            Section::Math => "math",
            Section::Writing => "writing",
        }
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "reading" => Ok(Section::Reading),
            "math" => Ok(Section::Math),
            "writing" => Ok(Section::Writing),
            _ => Err(format!("unknown section {s:?}")),
        }
    }
}

/// Split a line into fields. Fields may be wrapped in double quotes, and a
/// doubled quote inside a quoted field stands for one quote character.
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

fn parse_int(field: &str) -> std::result::Result<i64, RowError> {
    field
        .trim()
        .parse::<i64>()
        .map_err(|_| RowError::BadInteger(field.to_string()))
}

fn column(fields: &[String], idx: usize) -> std::result::Result<&str, RowError> {
    fields
        .get(idx)
        .map(|s| s.as_str())
        .ok_or(RowError::MissingColumn(idx))
}

/// Parse a range of integers such as "790-800" and return its midpoint. A
/// single number is its own midpoint.
pub fn parse_range(s: &str) -> std::result::Result<f64, RowError> {
    let parts = s
        .split('-')
        .map(parse_int)
        .collect::<std::result::Result<Vec<i64>, RowError>>()?;
    Ok(parts.iter().map(|&p| p as f64).sum::<f64>() / parts.len() as f64)
}

/// Parse one row of the scale table: a raw score followed by a range of
/// scaled scores, starting at column 'col'.
pub fn parse_scale_row(
    fields: &[String],
    col: usize,
) -> std::result::Result<(i64, f64), RowError> {
    let raw = parse_int(column(fields, col)?)?;
    let score = parse_range(column(fields, col + 1)?)?;
    Ok((raw, score))
}

/// Parse one row of the rank table: (scaled score, count). Extra columns
/// are ignored.
pub fn parse_rank_row(
    fields: &[String],
) -> std::result::Result<(i64, u64), RowError> {
    let score = parse_int(column(fields, 0)?)?;
    let count = parse_count(column(fields, 1)?)?;
    Ok((score, count))
}

/// Parse one row of the percentile table, which must have exactly two
/// fields: (score, count).
pub fn parse_score_row(
    fields: &[String],
) -> std::result::Result<(i64, u64), RowError> {
    if fields.len() != 2 {
        return Err(RowError::FieldCount(fields.len()));
    }
    parse_rank_row(fields)
}

fn parse_count(field: &str) -> std::result::Result<u64, RowError> {
    field
        .trim()
        .parse::<u64>()
        .map_err(|_| RowError::BadInteger(field.to_string()))
}

/// Read the file at 'path' and parse each line with 'parse_row'.
fn read_table<T, F>(path: &Path, parse_row: F) -> Result<Table<T>>
where
    F: Fn(&[String]) -> std::result::Result<T, RowError>,
{
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(io_err)?);

    let mut rows = Vec::new();
    let mut skipped = 0;
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(io_err)?;
        match parse_row(&split_record(&line)) {
            Ok(row) => rows.push(row),
            Err(err) => {
                log::trace!("{}:{}: {}", path.display(), line_no + 1, err);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {} malformed rows in {}.", skipped, path.display());
    }
    log::info!("Read {} rows from {}.", rows.len(), path.display());
    Ok(Table { rows, skipped })
}

/// Read the (raw score, scaled score) pairs of one section.
pub fn read_scale(path: &Path, section: Section) -> Result<Table<(i64, f64)>> {
    let col = section.column();
    read_table(path, |fields| parse_scale_row(fields, col))
}

/// Read the (scaled score, number of test takers) pairs.
pub fn read_ranks(path: &Path) -> Result<Table<(i64, u64)>> {
    read_table(path, parse_rank_row)
}

/// Read the (score, number of test takers) pairs of the percentile table.
pub fn read_scores(path: &Path) -> Result<Table<(i64, u64)>> {
    read_table(path, parse_score_row)
}
