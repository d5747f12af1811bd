//! Plot geometry derived from line 2 of each element record
//!
//! The derived point is a visualization heuristic only. The "latitude" is the
//! inclination folded about 90 degrees and the "longitude" is the right
//! ascension of the ascending node, no propagation or epoch is involved.

use elements::prelude::*;
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::one_of,
    combinator::{all_consuming, map_res, opt, recognize},
    number::complete::double,
    sequence::pair,
};
use tracing::debug;

/// Zero-indexed token positions in line 2
pub const INCLINATION_TOKEN: usize = 2;
pub const ASCENDING_NODE_TOKEN: usize = 3;
const MIN_LINE2_TOKENS: usize = ASCENDING_NODE_TOKEN + 1;

/// Why a record produced no point
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, thiserror::Error)]
pub enum SkipReason {
    #[error("Line 2 has {0} tokens, at least 4 are required")]
    TooFewTokens(usize),
    #[error("Invalid inclination")]
    InvalidInclination,
    #[error("Invalid right ascension of the ascending node")]
    InvalidAscendingNode,
}

/// Derive the point for a single record
pub fn derive_point(record: &ElementRecord) -> Result<GeoPoint, SkipReason> {
    let tokens: Vec<&str> = record.line2_tokens().take(MIN_LINE2_TOKENS).collect();
    if tokens.len() < MIN_LINE2_TOKENS {
        return Err(SkipReason::TooFewTokens(tokens.len()));
    }
    let inclination = real(tokens[INCLINATION_TOKEN]).ok_or(SkipReason::InvalidInclination)?;
    let ascending_node =
        real(tokens[ASCENDING_NODE_TOKEN]).ok_or(SkipReason::InvalidAscendingNode)?;
    Ok(GeoPoint::new(fold_inclination(inclination), ascending_node))
}

/// Derive points for every usable record, in order.
///
/// Records that don't yield a point are dropped without a placeholder.
pub fn derive_points<'a, I>(records: I) -> impl Iterator<Item = GeoPoint> + 'a
where
    I: IntoIterator<Item = &'a ElementRecord>,
    I::IntoIter: 'a,
{
    records
        .into_iter()
        .filter_map(|record| match derive_point(record) {
            Ok(p) => Some(p),
            Err(reason) => {
                debug!(name = %record.name, %reason, "Skipping element record");
                None
            }
        })
}

/// Fold an inclination [deg] into the 0..=90 "latitude" range.
///
/// 90 - i below 90 degrees, i - 90 otherwise.
pub fn fold_inclination(inclination: f64) -> f64 {
    if inclination < 90.0 {
        90.0 - inclination
    } else {
        inclination - 90.0
    }
}

fn real(token: &str) -> Option<f64> {
    all_consuming(alt((non_finite, double)))(token)
        .ok()
        .map(|(_, v)| v)
}

/// Optionally signed `inf`, `infinity` or `nan`, in any case
fn non_finite(s: &str) -> nom::IResult<&str, f64> {
    map_res(
        recognize(pair(
            opt(one_of("+-")),
            alt((
                tag_no_case("infinity"),
                tag_no_case("inf"),
                tag_no_case("nan"),
            )),
        )),
        str::parse::<f64>,
    )(s)
}
