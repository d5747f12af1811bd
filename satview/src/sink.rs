//! Plot point outputs
//!
//! Points are written as (longitude, latitude) pairs, presentation is left to
//! whatever consumes the file.

use crate::config::PlotFormat;
use elements::prelude::*;
use std::io::{self, Write};

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to write plot points. {0}")]
    Io(#[from] io::Error),
    #[error("Failed to serialize plot points. {0}")]
    Json(#[from] serde_json::Error),
}

pub trait PointSink {
    fn plot(&mut self, points: &[GeoPoint]) -> Result<(), SinkError>;
}

/// gnuplot-friendly columns
pub struct TextSink<W> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PointSink for TextSink<W> {
    fn plot(&mut self, points: &[GeoPoint]) -> Result<(), SinkError> {
        writeln!(self.writer, "# longitude latitude")?;
        for (lon, lat) in points.iter().map(|p| p.lon_lat()) {
            writeln!(self.writer, "{lon} {lat}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonSink<W> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PointSink for JsonSink<W> {
    fn plot(&mut self, points: &[GeoPoint]) -> Result<(), SinkError> {
        serde_json::to_writer_pretty(&mut self.writer, points)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl PlotFormat {
    pub fn sink<'a, W: Write + 'a>(self, writer: W) -> Box<dyn PointSink + 'a> {
        match self {
            PlotFormat::Text => Box::new(TextSink::new(writer)),
            PlotFormat::Json => Box::new(JsonSink::new(writer)),
        }
    }
}
