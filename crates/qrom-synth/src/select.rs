//! Layered QROM: the address tree as an explicit recursion.
//!
//! Each internal node opens its ancilla on the `0` branch of its address bit,
//! descends, flips the ancilla onto the `1` branch with a CNOT from the
//! parent, descends again and closes. The gadget sequence is the one the
//! single-ended walk produces, but every subtree is a self-contained block,
//! which is what the distributed select builds on.

use qrom_ir::{Circuit, QubitId};
use rand::Rng;
use tracing::debug;

use crate::data::{DataString, address_space, copies};
use crate::error::SynthResult;
use crate::gadget::{GadgetPolicy, Sign};
use crate::layout::LayeredLayout;
use crate::qrom::{check_data, copy_to_targets};

/// Build a layered QROM over `control` address bits.
///
/// Address bit 0 is the top level of the tree, so leaf `k` is reached for
/// the address whose bits, read from bit 0 down, spell `k` in binary. That
/// is the same leaf order as [`synthesize_single`](crate::synthesize_single).
pub fn synthesize_layered(
    control: u32,
    target: u32,
    policy: GadgetPolicy,
    address: u64,
    data: Option<&DataString>,
) -> SynthResult<Circuit> {
    let leaves = address_space(control)?;
    check_data(data, control, leaves)?;

    let layout = LayeredLayout::new(control, target);
    let num_qubits = layout.num_qubits();
    let mut circuit = Circuit::with_size("qrom_layered", num_qubits, policy.num_clbits());

    circuit.x(layout.root())?;
    for i in 0..control {
        if (address >> i) & 1 == 1 {
            circuit.x(layout.address(i))?;
        }
    }
    circuit.barrier_all()?;

    let address_bits: Vec<_> = (0..control).map(|i| layout.address(i)).collect();
    let ancillas: Vec<_> = (0..control).map(|i| layout.ancilla(i)).collect();
    let targets: Vec<_> = layout.targets().collect();
    let mut tree = SubTree {
        circuit: &mut circuit,
        policy,
        address: &address_bits,
        ancillas: &ancillas,
        targets: &targets,
        data,
    };
    tree.walk(0, layout.root(), 0)?;

    debug!(
        control,
        target,
        %policy,
        num_qubits,
        instructions = circuit.len(),
        "synthesized layered QROM"
    );
    Ok(circuit)
}

/// `count` layered QROMs with `control` address bits, `control` target
/// qubits and independently drawn random data, address register left at 0.
pub fn uniform_layered<R: Rng + ?Sized>(
    control: u32,
    count: usize,
    policy: GadgetPolicy,
    rng: &mut R,
) -> SynthResult<Vec<Circuit>> {
    (0..count)
        .map(|_| {
            let data = DataString::random(control, &mut *rng)?;
            synthesize_layered(control, control, policy, 0, Some(&data))
        })
        .collect()
}

/// One recursive walk over a slice of address bits.
///
/// `address[level]` decides level `level` and `ancillas[level]` carries the
/// AND of the path so far. Leaf indices are extended MSB first from the
/// `leaf` passed to [`walk`](Self::walk), so a caller that has already
/// decided some high bits passes them in as the starting prefix.
pub(crate) struct SubTree<'a> {
    pub circuit: &'a mut Circuit,
    pub policy: GadgetPolicy,
    pub address: &'a [QubitId],
    pub ancillas: &'a [QubitId],
    pub targets: &'a [QubitId],
    pub data: Option<&'a DataString>,
}

impl SubTree<'_> {
    pub fn walk(&mut self, level: usize, parent: QubitId, leaf: usize) -> SynthResult<()> {
        let (Some(&bit), Some(&ancilla)) = (self.address.get(level), self.ancillas.get(level))
        else {
            if copies(self.data, leaf) {
                copy_to_targets(self.circuit, parent, self.targets.iter().copied())?;
            }
            return Ok(());
        };

        self.policy
            .open(self.circuit, [parent, bit, ancilla], Sign::NEGATE_SECOND)?;
        self.walk(level + 1, ancilla, leaf << 1)?;
        self.circuit.cx(parent, ancilla)?;
        self.walk(level + 1, ancilla, (leaf << 1) | 1)?;
        self.policy
            .close(self.circuit, [parent, bit, ancilla], Sign::POSITIVE)?;
        Ok(())
    }
}
