//! Non-fatal findings reported during evaluation.
//!
//! The evaluator never prints. Whatever it cannot cost exactly is handed to a
//! caller-supplied [`DiagnosticSink`]: collect into a `Vec`, forward to
//! `tracing` with [`TracingSink`], or drop with [`IgnoreSink`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Something the evaluator could not cost exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A Z rotation whose angle is not a multiple of π/4. Counted as free.
    UnknownAngle {
        gate: String,
        qubit: u32,
        angle: f64,
    },
    /// An instruction outside the Clifford+T vocabulary. Counted as free.
    UnknownInstruction { name: String, index: usize },
    /// A Toffoli was found. Its T cost is not included; lower it first.
    ResidualToffoli { index: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownAngle { gate, qubit, angle } => {
                write!(f, "{gate}({angle}) on q[{qubit}] is not a Clifford+T angle")
            }
            Diagnostic::UnknownInstruction { name, index } => {
                write!(f, "unknown instruction '{name}' at #{index} treated as free")
            }
            Diagnostic::ResidualToffoli { index } => write!(
                f,
                "ccx at #{index} is not decomposed; its T cost is not counted"
            ),
        }
    }
}

/// Receiver for [`Diagnostic`]s.
pub trait DiagnosticSink {
    /// Record one finding.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Logs every diagnostic at `warn` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
    }
}

/// Discards diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreSink;

impl DiagnosticSink for IgnoreSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}
