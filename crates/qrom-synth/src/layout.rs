//! Positional qubit layouts.
//!
//! Single-ended, `n = 2*control + target + 1`:
//!
//! ```text
//! q0      root (set to |1⟩)
//! q1 q3 … q(2c-1)   address bits, LSB first
//! q2 q4 … q(2c)     ancilla chain
//! q(2c+1) … q(2c+t) target register
//! ```
//!
//! Dual-ended, `n = target + 4*control`: the same forward region and target
//! register, followed by a mirrored chain that grows downward from `q(n-1)`.
//! The mirrored address bits `q(n-2-2i)` are copies of the forward bits
//! `q(3+2i)`, which lets the two halves of the address space be walked at
//! the same time.

use qrom_ir::QubitId;

/// Layout of a single-ended QROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleLayout {
    /// Address width.
    pub control: u32,
    /// Target register width.
    pub target: u32,
}

impl SingleLayout {
    /// Create the layout.
    pub fn new(control: u32, target: u32) -> Self {
        Self { control, target }
    }

    /// Total qubit count.
    pub fn num_qubits(&self) -> u32 {
        2 * self.control + self.target + 1
    }

    /// Always-on root of the ancilla chain.
    pub fn root(&self) -> QubitId {
        QubitId(0)
    }

    /// Address bit `i`, LSB first.
    pub fn address(&self, i: u32) -> QubitId {
        QubitId(2 * i + 1)
    }

    /// Target register qubit `i`.
    pub fn target(&self, i: u32) -> QubitId {
        QubitId(2 * self.control + 1 + i)
    }

    /// All target qubits.
    pub fn targets(&self) -> impl Iterator<Item = QubitId> + '_ {
        (0..self.target).map(|i| self.target(i))
    }
}

/// Layout of a dual-ended QROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualLayout {
    /// Address width.
    pub control: u32,
    /// Target register width.
    pub target: u32,
}

impl DualLayout {
    /// Create the layout.
    pub fn new(control: u32, target: u32) -> Self {
        Self { control, target }
    }

    /// Total qubit count.
    pub fn num_qubits(&self) -> u32 {
        self.target + 4 * self.control
    }

    /// Forward-region view, which shares indices with the single-ended layout.
    pub fn forward(&self) -> SingleLayout {
        SingleLayout::new(self.control, self.target)
    }

    /// Ancilla at the top of the mirrored chain.
    pub fn mirror_root(&self) -> QubitId {
        QubitId(self.num_qubits() - 1)
    }

    /// Mirrored copy of forward address bit `i + 1`, for `i < control - 1`.
    pub fn mirror_address(&self, i: u32) -> QubitId {
        QubitId(self.num_qubits() - 2 - 2 * i)
    }
}

/// Layout of a layered (recursive) QROM, `n = 2*control + target + 1`:
///
/// ```text
/// q0 … q(c-1)        address bits, LSB first
/// q(c) … q(2c-1)     one ancilla per tree level
/// q(2c) … q(2c+t-1)  target register
/// q(2c+t)            root (set to |1⟩)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayeredLayout {
    pub control: u32,
    pub target: u32,
}

impl LayeredLayout {
    pub fn new(control: u32, target: u32) -> Self {
        Self { control, target }
    }

    pub fn num_qubits(&self) -> u32 {
        2 * self.control + self.target + 1
    }

    pub fn root(&self) -> QubitId {
        QubitId(2 * self.control + self.target)
    }

    pub fn address(&self, i: u32) -> QubitId {
        QubitId(i)
    }

    /// Ancilla that holds the AND of the path down to level `level`.
    pub fn ancilla(&self, level: u32) -> QubitId {
        QubitId(self.control + level)
    }

    pub fn targets(&self) -> impl Iterator<Item = QubitId> + '_ {
        (0..self.target).map(|i| QubitId(2 * self.control + i))
    }
}

/// Layout of a distributed-select QROM with `2^spread` address blocks.
///
/// ```text
/// q0                               root (set to |1⟩)
/// 1 + k*c + i                      address bit i of block k (block 0 is the input)
/// 1 + 2^s*c + k*c + j              ancilla j of block k
/// 1 + 2^(s+1)*c … + target - 1     target register
/// ```
///
/// Each block holds a full CNOT copy of the address; its first `spread`
/// ancillas select the block and the rest run the layered walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributedLayout {
    pub control: u32,
    pub spread: u32,
    pub target: u32,
}

impl DistributedLayout {
    pub fn new(control: u32, spread: u32, target: u32) -> Self {
        Self {
            control,
            spread,
            target,
        }
    }

    /// Number of address blocks, `2^spread`.
    pub fn blocks(&self) -> u32 {
        1 << self.spread
    }

    pub fn num_qubits(&self) -> u32 {
        1 + 2 * self.blocks() * self.control + self.target
    }

    pub fn root(&self) -> QubitId {
        QubitId(0)
    }

    pub fn address(&self, block: u32, i: u32) -> QubitId {
        QubitId(1 + block * self.control + i)
    }

    pub fn ancilla(&self, block: u32, j: u32) -> QubitId {
        QubitId(1 + (self.blocks() + block) * self.control + j)
    }

    pub fn targets(&self) -> impl Iterator<Item = QubitId> + '_ {
        let first = 1 + 2 * self.blocks() * self.control;
        (0..self.target).map(move |i| QubitId(first + i))
    }
}
