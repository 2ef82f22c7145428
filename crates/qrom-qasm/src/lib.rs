//! `OpenQASM` 2.0 Emitter and Assembler
//!
//! This crate serializes QROM circuits to `OpenQASM` 2.0 text and assembles
//! such text back into the flat [`Program`](qrom_ir::Program) form that the
//! resource evaluator consumes.
//!
//! # Supported Features
//!
//! | Feature | Status | Example |
//! |---------|--------|---------|
//! | Version declaration | ✅ | `OPENQASM 2.0;` |
//! | Includes | ✅ (ignored) | `include "qelib1.inc";` |
//! | Registers | ✅ | `qreg q[5];`, `creg c[1];` |
//! | Gate calls | ✅ | `h q[0];`, `ccx q[0],q[1],q[2];` |
//! | Parameters | ✅ | `rz(-3*pi/4) q[0];` |
//! | Broadcast | ✅ | `h q;`, `cx a, b;` |
//! | Measurements | ✅ | `measure q[0] -> c[0];` |
//! | Barriers | ✅ | `barrier;`, `barrier q;` |
//! | Reset | ✅ | `reset q[0];` |
//! | Gate definitions | skipped | `gate maj a,b,c { ... }` |
//! | Classical control | ❌ | `if (c==1) x q[0];` |
//!
//! # Example: Round-Trip
//!
//! ```rust
//! use qrom_ir::{Circuit, Program, QubitId};
//! use qrom_qasm::{emit, parse};
//!
//! let mut circuit = Circuit::with_size("and", 3, 0);
//! circuit.ccx(QubitId(0), QubitId(1), QubitId(2))?;
//!
//! let qasm = emit(&circuit)?;
//! assert!(qasm.contains("ccx q[0],q[1],q[2];"));
//!
//! let program = parse(&qasm)?;
//! assert_eq!(program, Program::from(&circuit));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod emitter;
mod error;
mod lexer;
mod parser;

pub use emitter::{emit, emit_program, format_angle};
pub use error::{ParseError, ParseResult};
pub use parser::parse;
