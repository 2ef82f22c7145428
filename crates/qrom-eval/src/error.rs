//! Evaluator error types.

use thiserror::Error;

/// Result type for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;

/// Malformed input that stops an evaluation.
///
/// Recoverable findings (unknown angles or instructions, residual Toffolis)
/// are not errors; they go to a [`DiagnosticSink`](crate::DiagnosticSink).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvalError {
    /// An instruction has the wrong number of qubit operands.
    #[error("'{gate}' expects {expected} qubit(s), got {got}")]
    QubitArity {
        gate: String,
        expected: usize,
        got: usize,
    },

    /// An instruction has the wrong number of parameters.
    #[error("'{gate}' expects {expected} parameter(s), got {got}")]
    ParamArity {
        gate: String,
        expected: usize,
        got: usize,
    },

    /// A qubit index is outside the declared register.
    #[error("'{gate}' references q[{qubit}] but only {num_qubits} qubits are declared")]
    QubitOutOfRange {
        gate: String,
        qubit: u32,
        num_qubits: u32,
    },

    /// An angle does not reduce into `[0, 2π]`.
    #[error("Angle {angle} cannot be reduced modulo 2π")]
    AngleOutOfRange { angle: f64 },

    /// Input parsing failed.
    #[error("Parse error: {0}")]
    Parse(#[from] qrom_qasm::ParseError),

    /// Report serialization failed.
    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),
}
