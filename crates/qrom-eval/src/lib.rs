//! Clifford+T Resource Evaluation
//!
//! Computes the T-count and T-depth of a flat gate list. T-depth is tracked
//! with one counter per qubit: a T gate advances its qubit's counter and a
//! multi-qubit gate raises every operand to the largest counter among them.
//!
//! | Instruction | Cost |
//! |-------------|------|
//! | `t`, `tdg` | one T |
//! | `rz`, `p`, `u1` | one T when the angle is an odd multiple of π/4 |
//! | `h s sdg x y z reset barrier` | free |
//! | `cx`, `cz` | free, synchronizes two counters |
//! | `ccx` | free, synchronizes three counters, reported as a diagnostic |
//!
//! Anything else is free and reported. Lower Toffolis before evaluating
//! to see their cost.
//!
//! # Example
//!
//! ```rust
//! let report = qrom_eval::count_t_gates(
//!     "OPENQASM 2.0;\nqreg q[2];\nt q[0];\ncx q[0],q[1];\ntdg q[1];\n",
//! )?;
//! assert_eq!(report.t_count, 2);
//! assert_eq!(report.t_depth, 2);
//! # Ok::<(), qrom_eval::EvalError>(())
//! ```

pub mod angle;
pub mod diagnostics;
pub mod error;
pub mod evaluator;
pub mod report;

pub use angle::{ANGLE_EPSILON, AngleClass, classify};
pub use diagnostics::{Diagnostic, DiagnosticSink, IgnoreSink, TracingSink};
pub use error::{EvalError, EvalResult};
pub use evaluator::{Evaluator, TCost, evaluate};
pub use report::{Comparison, Delta, ResourceReport};

use qrom_ir::{Circuit, Program};

/// Assemble OpenQASM 2.0 text and evaluate it.
pub fn count_t_gates(qasm: &str) -> EvalResult<ResourceReport> {
    let program = qrom_qasm::parse(qasm)?;
    ResourceReport::from_program(&program)
}

/// Evaluate a circuit without going through text.
pub fn evaluate_circuit(circuit: &Circuit) -> EvalResult<ResourceReport> {
    ResourceReport::from_program(&Program::from(circuit))
}
