//! Line-oriented parser for element catalogs
//!
//! A catalog is a flat sequence of lines where every three consecutive lines
//! form one record: name, line 1, line 2. Blank lines are lines too, they are
//! not skipped as separators.

use elements::prelude::*;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till},
    character::complete::line_ending,
    multi::separated_list0,
};
use tracing::{debug, warn};

pub type Result<I, O, E = nom::error::Error<I>> = std::result::Result<(I, O), nom::Err<E>>;

/// Number of lines making up one record
pub const LINES_PER_RECORD: usize = 3;

/// Split `text` into lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A line break at the very end
/// doesn't start another line, so empty input has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = match lines(text) {
        Ok((_, lines)) => lines,
        // Neither the line nor the line break parser can fail
        Err(e) => {
            warn!(error = %e, "Element catalog line splitting failed");
            return Vec::new();
        }
    };
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Parse the full text of one category.
///
/// Lines are grouped in threes. The one or two lines of an incomplete
/// trailing group are dropped, they never form a record and are never merged
/// with anything else. Empty input yields no records.
pub fn parse_catalog(text: &str) -> Vec<ElementRecord> {
    let lines = split_lines(text);
    let groups = lines.chunks_exact(LINES_PER_RECORD);

    let discarded = groups.remainder();
    if !discarded.is_empty() {
        debug!(
            records = lines.len() / LINES_PER_RECORD,
            discarded_lines = discarded.len(),
            "Discarding incomplete trailing element record"
        );
    }

    groups
        .map(|g| ElementRecord::new(g[0], g[1], g[2]))
        .collect()
}

fn lines(s: &str) -> Result<&str, Vec<&str>> {
    separated_list0(line_break, take_till(|c: char| c == '\n' || c == '\r'))(s)
}

fn line_break(s: &str) -> Result<&str, &str> {
    alt((line_ending, tag("\r")))(s)
}
