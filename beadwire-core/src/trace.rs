//! Frame trace output
//!
//! The trace is CSV with header `f,t,x,y,r`: one row per body (`t = 0`) in
//! body order, then one row for the wire (`t = 1`), for every snapshot.
//!
//! State is `f64` throughout, so traces agree with a single-precision
//! implementation only to within `f32` rounding, not digit for digit.

use crate::runtime::Snapshot;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to write trace: {0}")]
    Io(#[from] std::io::Error),
}

pub const TRACE_HEADER: &str = "f,t,x,y,r";

const BODY_TYPE: u8 = 0;
const WIRE_TYPE: u8 = 1;

/// Receives snapshots from [`crate::Simulation::run`]
pub trait TraceSink {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), TraceError>;
}

impl TraceSink for Vec<Snapshot> {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), TraceError> {
        self.push(snapshot.clone());
        Ok(())
    }
}

/// Streams snapshots as CSV rows to any writer
pub struct TraceWriter<W: Write> {
    out: W,
    wrote_header: bool,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            wrote_header: false,
        }
    }

    /// Flush and hand back the writer
    pub fn finish(mut self) -> Result<W, TraceError> {
        if !self.wrote_header {
            writeln!(self.out, "{}", TRACE_HEADER)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> TraceSink for TraceWriter<W> {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), TraceError> {
        if !self.wrote_header {
            writeln!(self.out, "{}", TRACE_HEADER)?;
            self.wrote_header = true;
        }
        let f = snapshot.frame;
        for body in &snapshot.bodies {
            writeln!(
                self.out,
                "{},{},{:.6},{:.6},{:.6}",
                f, BODY_TYPE, body.x, body.y, body.radius
            )?;
        }
        let wire = &snapshot.wire;
        writeln!(
            self.out,
            "{},{},{:.6},{:.6},{:.6}",
            f, WIRE_TYPE, wire.x, wire.y, wire.radius
        )?;
        Ok(())
    }
}
