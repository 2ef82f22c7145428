//! QROM Circuit Representation
//!
//! This crate provides the circuit backend used by the QROM synthesizers and
//! the resource evaluator. A circuit is an append-only sequence of
//! instructions over a qubit/classical-bit count that is fixed when the
//! circuit is allocated.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] are dense indices
//!   into the circuit's registers
//! - **Gates**: [`StandardGate`] covers the Clifford+T primitive set the
//!   synthesizers emit (plus `rz` for arbitrary Z-axis rotations)
//! - **Instructions**: [`Instruction`] combining a gate (or reset, barrier,
//!   measurement) with its operands
//! - **Circuit**: [`Circuit`] builder API with arity and bounds validation
//! - **Flat records**: [`Program`] and [`GateRecord`], the `{name, qubits,
//!   params}` form consumed by the resource evaluator
//!
//! # Example
//!
//! ```rust
//! use qrom_ir::{Circuit, Program, QubitId};
//!
//! let mut circuit = Circuit::with_size("and", 3, 0);
//! circuit
//!     .h(QubitId(2))?
//!     .ccx(QubitId(0), QubitId(1), QubitId(2))?
//!     .h(QubitId(2))?;
//!
//! let program = Program::from(&circuit);
//! assert_eq!(program.num_qubits, 3);
//! assert_eq!(program.instructions[1].name, "ccx");
//! # Ok::<(), qrom_ir::IrError>(())
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `x` | 1 | Pauli-X (NOT) |
//! | `h` | 1 | Hadamard gate |
//! | `s`, `sdg` | 1 | S and S-dagger gates |
//! | `t`, `tdg` | 1 | T and T-dagger gates |
//! | `rz` | 1 | Z-axis rotation |
//! | `cx`, `cz` | 2 | Controlled-NOT and controlled-Z |
//! | `ccx` | 3 | Toffoli (CCNOT) gate |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod program;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use program::{GateRecord, Program};
pub use qubit::{ClbitId, QubitId};
