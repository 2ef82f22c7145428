//! Ancilla-chain cursors.
//!
//! A cursor points at the most recently opened live ancilla of one branch of
//! the address tree. Opening a level uses the cursor and the address bit next
//! to it as controls and the next ancilla as target, then steps two qubits
//! along the chain. Closing is the exact reverse.
//!
//! A [`Direction::Forward`] cursor walks up the register (`cur, cur+1,
//! cur+2`); a [`Direction::Backward`] cursor walks down it (`cur, cur-1,
//! cur-2`), which is how the mirrored half of the dual-ended layout is laid
//! out. Every move is bounds-checked against the register.

use qrom_ir::QubitId;

use crate::error::{SynthError, SynthResult};

/// Which way a cursor walks along the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher qubit indices.
    Forward,
    /// Toward lower qubit indices.
    Backward,
}

impl Direction {
    #[inline]
    fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Position of one branch's live ancilla.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: u32,
    direction: Direction,
    num_qubits: u32,
    depth: u32,
}

impl Cursor {
    /// Place a cursor at `position` in an `num_qubits`-qubit register.
    pub fn new(position: u32, direction: Direction, num_qubits: u32) -> SynthResult<Self> {
        let cursor = Self {
            position,
            direction,
            num_qubits,
            depth: 0,
        };
        cursor.qubit_at(0)?;
        Ok(cursor)
    }

    /// Current live ancilla.
    #[inline]
    pub fn current(&self) -> QubitId {
        QubitId(self.position)
    }

    /// Levels opened through this cursor and not yet closed.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Walking direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Qubit at `offset` steps along the walking direction.
    fn qubit_at(&self, offset: i64) -> SynthResult<QubitId> {
        let position = i64::from(self.position) + offset * self.direction.sign();
        if position < 0 || position >= i64::from(self.num_qubits) {
            return Err(SynthError::CursorOutOfRange {
                position,
                num_qubits: self.num_qubits,
            });
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(QubitId(position as u32))
    }

    /// Operands of the gadget that opens the next level.
    pub fn open_operands(&self) -> SynthResult<[QubitId; 3]> {
        Ok([self.qubit_at(0)?, self.qubit_at(1)?, self.qubit_at(2)?])
    }

    /// Operands of the gadget that closes the current level.
    pub fn close_operands(&self) -> SynthResult<[QubitId; 3]> {
        Ok([self.qubit_at(-2)?, self.qubit_at(-1)?, self.qubit_at(0)?])
    }

    /// Operands `(control, target)` of the CNOT that moves the current
    /// level from the `0` branch to the `1` branch of its parent.
    pub fn flip_operands(&self) -> SynthResult<(QubitId, QubitId)> {
        Ok((self.qubit_at(-2)?, self.qubit_at(0)?))
    }

    /// Step past a freshly opened level.
    pub fn advance(&mut self) -> SynthResult<()> {
        self.position = self.qubit_at(2)?.0;
        self.depth += 1;
        Ok(())
    }

    /// Step back over a freshly closed level.
    pub fn retreat(&mut self) -> SynthResult<()> {
        self.position = self.qubit_at(-2)?.0;
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }
}

/// Number of levels to close after leaf `step`: its count of trailing ones.
///
/// Incrementing a binary counter from `step` clears exactly these bits, so
/// summed over all steps the open/close work telescopes to `O(2^control)`.
#[inline]
pub fn levels_to_close(step: usize) -> u32 {
    step.trailing_ones()
}
