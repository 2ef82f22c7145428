//! Resource reports and side-by-side comparisons.

use std::fmt;

use qrom_ir::Program;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::EvalResult;
use crate::evaluator::{TCost, evaluate};

/// T resources of one program together with everything reported on the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceReport {
    /// Qubits declared by the program.
    pub num_qubits: u32,
    /// T-count.
    pub t_count: u64,
    /// T-depth.
    pub t_depth: u64,
    /// Toffolis left undecomposed (not included in the totals).
    pub residual_toffolis: usize,
    /// Non-fatal findings in program order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl ResourceReport {
    /// Evaluate `program`, collecting diagnostics into the report.
    pub fn from_program(program: &Program) -> EvalResult<Self> {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let cost = evaluate(program, &mut diagnostics)?;
        Ok(Self::new(program.num_qubits, cost, diagnostics))
    }

    /// Assemble a report from an evaluation result.
    pub fn new(num_qubits: u32, cost: TCost, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            num_qubits,
            t_count: cost.t_count,
            t_depth: cost.t_depth,
            residual_toffolis: cost.residual_toffolis,
            diagnostics,
        }
    }

    /// Whether the totals are exact (no Toffolis or unknown gates skipped).
    pub fn is_exact(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Replay the collected diagnostics into another sink.
    pub fn forward_diagnostics(&self, sink: &mut impl DiagnosticSink) {
        for diagnostic in &self.diagnostics {
            sink.report(diagnostic.clone());
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> EvalResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ResourceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t-count: {}, t-depth: {}", self.t_count, self.t_depth)
    }
}

/// One metric before and after.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    /// Baseline value.
    pub baseline: u64,
    /// Candidate value.
    pub candidate: u64,
    /// `candidate / baseline * 100`, absent when the baseline is zero.
    pub percent: Option<f64>,
}

impl Delta {
    /// Compare two values.
    pub fn new(baseline: u64, candidate: u64) -> Self {
        let percent = (baseline != 0).then(|| candidate as f64 / baseline as f64 * 100.0);
        Self {
            baseline,
            candidate,
            percent,
        }
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.baseline, self.candidate)?;
        match self.percent {
            Some(p) => write!(f, " ({p:.1}%)"),
            None => write!(f, " (n/a)"),
        }
    }
}

/// T resources of a candidate circuit relative to a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// T-count change.
    pub t_count: Delta,
    /// T-depth change.
    pub t_depth: Delta,
}

impl Comparison {
    /// Compare `candidate` against `baseline`.
    pub fn between(baseline: &ResourceReport, candidate: &ResourceReport) -> Self {
        Self {
            t_count: Delta::new(baseline.t_count, candidate.t_count),
            t_depth: Delta::new(baseline.t_depth, candidate.t_depth),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t-count {}, t-depth {}", self.t_count, self.t_depth)
    }
}
