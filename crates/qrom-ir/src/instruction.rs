//! Instructions: a gate or a non-unitary operation plus its operands.

use serde::{Deserialize, Serialize};

use crate::gate::StandardGate;
use crate::qubit::{ClbitId, QubitId};

/// What an instruction does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// A unitary from the primitive gate set.
    Gate(StandardGate),
    /// Computational-basis measurement into a classical bit.
    Measure,
    /// Reset to |0⟩.
    Reset,
    /// Scheduling fence; no effect on the state or on resource counts.
    Barrier,
}

/// One appended operation. Operand order is significant: for `cx` the
/// control comes first, for `ccx` both controls precede the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub qubits: Vec<QubitId>,
    /// Only measurements carry classical operands.
    pub clbits: Vec<ClbitId>,
}

impl Instruction {
    pub fn gate(gate: StandardGate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self::on(InstructionKind::Gate(gate), qubits)
    }

    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: vec![qubit],
            clbits: vec![clbit],
        }
    }

    pub fn reset(qubit: QubitId) -> Self {
        Self::on(InstructionKind::Reset, [qubit])
    }

    pub fn barrier(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self::on(InstructionKind::Barrier, qubits)
    }

    fn on(kind: InstructionKind, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind,
            qubits: qubits.into_iter().collect(),
            clbits: vec![],
        }
    }

    pub fn is_barrier(&self) -> bool {
        self.kind == InstructionKind::Barrier
    }

    /// Operands `[c1, c2, target]` if this is a Toffoli.
    pub fn toffoli_operands(&self) -> Option<[QubitId; 3]> {
        match (&self.kind, self.qubits.as_slice()) {
            (InstructionKind::Gate(StandardGate::CCX), &[c1, c2, target]) => Some([c1, c2, target]),
            _ => None,
        }
    }

    /// Lower-case name as it appears in QASM and in flat programs.
    pub fn name(&self) -> &'static str {
        match &self.kind {
            InstructionKind::Gate(g) => g.name(),
            InstructionKind::Measure => "measure",
            InstructionKind::Reset => "reset",
            InstructionKind::Barrier => "barrier",
        }
    }

    /// Rotation angles in radians; empty for fixed gates.
    pub fn params(&self) -> Vec<f64> {
        match &self.kind {
            InstructionKind::Gate(g) => g.parameters(),
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toffoli_operands() {
        let ccx = Instruction::gate(StandardGate::CCX, [QubitId(4), QubitId(1), QubitId(2)]);
        assert_eq!(ccx.toffoli_operands(), Some([QubitId(4), QubitId(1), QubitId(2)]));
        assert_eq!(ccx.name(), "ccx");

        let cx = Instruction::gate(StandardGate::CX, [QubitId(0), QubitId(1)]);
        assert_eq!(cx.toffoli_operands(), None);
        assert_eq!(Instruction::reset(QubitId(0)).toffoli_operands(), None);
    }

    #[test]
    fn test_measure_carries_clbit() {
        let inst = Instruction::measure(QubitId(3), ClbitId(0));
        assert_eq!(inst.name(), "measure");
        assert_eq!(inst.clbits, vec![ClbitId(0)]);
        assert!(!inst.is_barrier());
    }

    #[test]
    fn test_barrier_has_no_params() {
        let inst = Instruction::barrier([QubitId(0), QubitId(1), QubitId(2)]);
        assert!(inst.is_barrier());
        assert_eq!(inst.qubits.len(), 3);
        assert!(inst.params().is_empty());
    }

    #[test]
    fn test_rotation_params() {
        let inst = Instruction::gate(StandardGate::Rz(0.5), [QubitId(1)]);
        assert_eq!(inst.name(), "rz");
        assert_eq!(inst.params(), vec![0.5]);
    }
}
