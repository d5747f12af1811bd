use crate::sink::{PointSink, SinkError};
use catalog::{derive_points, filter_by_name};
use elements::prelude::*;
use std::io::{self, Write};
use tracing::debug;

pub const NO_MATCHES_MSG: &str = "No objects found with the given criteria.";

/// Print every object name, then the names matching `criterion` when one is given.
///
/// Returns the number of matching objects, all of them without a criterion.
pub fn write_listing<W: Write>(
    out: &mut W,
    records: &[ElementRecord],
    criterion: Option<&str>,
) -> io::Result<usize> {
    writeln!(out, "List of tracked objects:")?;
    for r in records.iter() {
        writeln!(out, "{r}")?;
    }

    let Some(criterion) = criterion else {
        return Ok(records.len());
    };

    let filtered = filter_by_name(records, criterion);
    if filtered.is_empty() {
        writeln!(out, "\n{NO_MATCHES_MSG}")?;
    } else {
        writeln!(out, "\nFiltered objects:")?;
        for r in filtered.iter() {
            writeln!(out, "{r}")?;
        }
    }
    Ok(filtered.len())
}

/// Derive the points of `records` and hand them to `sink`, returns the number of points
pub fn plot_records<S: PointSink + ?Sized>(
    sink: &mut S,
    records: &[ElementRecord],
) -> Result<usize, SinkError> {
    let points: Vec<GeoPoint> = derive_points(records).collect();
    debug!(
        records = records.len(),
        points = points.len(),
        "Derived plot points"
    );
    sink.plot(&points)?;
    Ok(points.len())
}
