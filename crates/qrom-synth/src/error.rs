//! Synthesis error types.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while building a QROM circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Data string length does not match the address space.
    #[error("Data string has {got} bits, expected 2^{control} = {expected}")]
    InvalidDataLength {
        control: u32,
        expected: usize,
        got: usize,
    },

    /// Data string contains something other than '0' or '1'.
    #[error("Invalid data bit {found:?} at position {position}")]
    InvalidDataBit { position: usize, found: char },

    /// Address width cannot be enumerated.
    #[error("Control width {0} is too large (maximum 31)")]
    ControlTooLarge(u32),

    /// The dual-ended layout has no root level to mirror without control bits.
    #[error("Dual-ended QROM requires at least one control bit")]
    DualRequiresControl,

    /// Distributed select needs at least `spread` address bits to split on.
    #[error("Spread {spread} exceeds the {control}-bit address")]
    SpreadTooLarge { spread: u32, control: u32 },

    /// The requested layout needs more qubits than a `u32` register index holds.
    #[error("Layout needs {0} qubits")]
    RegisterTooLarge(u64),

    /// A cursor was moved outside the qubit register.
    #[error("Cursor moved to {position}, outside the {num_qubits}-qubit register")]
    CursorOutOfRange { position: i64, num_qubits: u32 },

    /// The underlying circuit rejected an instruction.
    #[error("Circuit error: {0}")]
    Ir(#[from] qrom_ir::IrError),
}
