//! Error types for statevector simulation.

use thiserror::Error;

/// Errors raised while allocating or running a statevector.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Cannot simulate {requested} qubits (limit is {max})")]
    TooManyQubits { requested: u32, max: u32 },

    #[error("Basis state {index} does not exist on {num_qubits} qubits")]
    BasisOutOfRange { index: usize, num_qubits: u32 },

    #[error("Circuit declares {circuit} qubits but the state has {state}")]
    SizeMismatch { circuit: u32, state: usize },
}

/// Result type for simulation.
pub type SimResult<T> = Result<T, SimError>;
