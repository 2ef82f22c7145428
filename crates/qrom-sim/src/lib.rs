//! Reference statevector simulator.
//!
//! A dense, single-threaded simulator used to check that synthesized QROM
//! circuits load the right data. Qubit 0 is the least significant bit of a
//! basis index. Measurement and barriers leave the state untouched; reset
//! projects onto `|0⟩`.
//!
//! ```rust
//! use qrom_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell", 2, 0);
//! circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
//!
//! let state = qrom_sim::run(&circuit)?;
//! assert!((state.probability_of_one(1) - 0.5).abs() < 1e-12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod statevector;

pub use error::{SimError, SimResult};
pub use statevector::{MAX_QUBITS, Statevector, run};
