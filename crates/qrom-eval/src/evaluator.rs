//! T-count and T-depth evaluation over a flat instruction list.

use qrom_ir::{GateRecord, Program};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::angle::{AngleClass, classify};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{EvalError, EvalResult};

/// Z-axis rotations costed by angle.
const Z_ROTATIONS: &[&str] = &["rz", "p", "u1"];

/// Single-qubit gates with no T cost and no effect on depth.
const FREE_GATES: &[&str] = &["h", "s", "sdg", "x", "y", "z", "reset"];

/// Totals produced by one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TCost {
    /// T and T-dagger gates, including T-class rotations.
    pub t_count: u64,
    /// Longest chain of T gates along any qubit, with multi-qubit gates
    /// synchronizing the chains they touch.
    pub t_depth: u64,
    /// Toffolis seen. None of their T cost is included.
    pub residual_toffolis: usize,
}

/// Walks instructions in order, keeping one T-depth counter per qubit.
///
/// Every call to [`Evaluator::new`] starts a fresh evaluation, so the
/// residual-Toffoli diagnostic fires at most once per evaluator.
#[derive(Debug)]
pub struct Evaluator {
    num_qubits: u32,
    depth: Vec<u64>,
    t_count: u64,
    residual_toffolis: usize,
    index: usize,
}

impl Evaluator {
    /// Start an evaluation over `num_qubits` qubits.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            depth: vec![0; num_qubits as usize],
            t_count: 0,
            residual_toffolis: 0,
            index: 0,
        }
    }

    /// Account for the next instruction.
    pub fn step(&mut self, record: &GateRecord, sink: &mut impl DiagnosticSink) -> EvalResult<()> {
        self.check_range(record)?;
        let name = record.name.as_str();

        match name {
            _ if Z_ROTATIONS.contains(&name) => {
                expect_qubits(record, 1)?;
                expect_params(record, 1)?;
                let qubit = record.qubits[0];
                let angle = record.params[0];
                match classify(angle)? {
                    AngleClass::T => self.add_t(qubit),
                    AngleClass::Unknown => sink.report(Diagnostic::UnknownAngle {
                        gate: record.name.clone(),
                        qubit,
                        angle,
                    }),
                    AngleClass::Clifford | AngleClass::Pauli | AngleClass::Identity => {}
                }
            }
            "t" | "tdg" => {
                expect_qubits(record, 1)?;
                self.add_t(record.qubits[0]);
            }
            "cx" | "cz" => {
                expect_qubits(record, 2)?;
                self.synchronize(&record.qubits);
            }
            "ccx" => {
                expect_qubits(record, 3)?;
                self.synchronize(&record.qubits);
                if self.residual_toffolis == 0 {
                    sink.report(Diagnostic::ResidualToffoli { index: self.index });
                }
                self.residual_toffolis += 1;
            }
            "barrier" => {}
            _ if FREE_GATES.contains(&name) => {}
            _ => sink.report(Diagnostic::UnknownInstruction {
                name: record.name.clone(),
                index: self.index,
            }),
        }

        self.index += 1;
        Ok(())
    }

    /// Totals so far.
    pub fn finish(&self) -> TCost {
        TCost {
            t_count: self.t_count,
            t_depth: self.depth.iter().copied().max().unwrap_or(0),
            residual_toffolis: self.residual_toffolis,
        }
    }

    fn add_t(&mut self, qubit: u32) {
        self.t_count += 1;
        self.depth[qubit as usize] += 1;
    }

    fn synchronize(&mut self, qubits: &[u32]) {
        let level = qubits
            .iter()
            .map(|&q| self.depth[q as usize])
            .max()
            .unwrap_or(0);
        for &q in qubits {
            self.depth[q as usize] = level;
        }
    }

    fn check_range(&self, record: &GateRecord) -> EvalResult<()> {
        match record.qubits.iter().find(|&&q| q >= self.num_qubits) {
            Some(&qubit) => Err(EvalError::QubitOutOfRange {
                gate: record.name.clone(),
                qubit,
                num_qubits: self.num_qubits,
            }),
            None => Ok(()),
        }
    }
}

fn expect_qubits(record: &GateRecord, expected: usize) -> EvalResult<()> {
    if record.qubits.len() != expected {
        return Err(EvalError::QubitArity {
            gate: record.name.clone(),
            expected,
            got: record.qubits.len(),
        });
    }
    Ok(())
}

fn expect_params(record: &GateRecord, expected: usize) -> EvalResult<()> {
    if record.params.len() != expected {
        return Err(EvalError::ParamArity {
            gate: record.name.clone(),
            expected,
            got: record.params.len(),
        });
    }
    Ok(())
}

/// Evaluate a whole program.
pub fn evaluate(program: &Program, mut sink: impl DiagnosticSink) -> EvalResult<TCost> {
    let mut evaluator = Evaluator::new(program.num_qubits);
    for record in &program.instructions {
        evaluator.step(record, &mut sink)?;
    }
    let cost = evaluator.finish();
    info!(
        num_qubits = program.num_qubits,
        instructions = program.len(),
        t_count = cost.t_count,
        t_depth = cost.t_depth,
        "evaluated program"
    );
    Ok(cost)
}
