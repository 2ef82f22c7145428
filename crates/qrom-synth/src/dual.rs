//! Dual-ended QROM synthesis.
//!
//! The lowest address bit splits the tree at its root. A forward chain walks
//! data indices `0 .. 2^(control-1)` while a mirrored chain walks
//! `2^(control-1) .. 2^control` in lockstep, halving the number of sequential
//! steps.

use qrom_ir::Circuit;
use tracing::debug;

use crate::cursor::{Cursor, Direction, levels_to_close};
use crate::data::{DataString, address_space, copies};
use crate::error::{SynthError, SynthResult};
use crate::gadget::{GadgetPolicy, Sign};
use crate::layout::DualLayout;
use crate::qrom::{check_data, close_level, copy_to_targets, initialize, open_level};

/// Build a dual-ended QROM over `control` address bits.
///
/// Leaf `step` of the forward chain copies `data[step]` and the mirrored
/// chain copies `data[step + 2^(control-1)]`, both into the shared target
/// register. `control = 0` has nothing to mirror and is rejected.
pub fn synthesize_dual(
    control: u32,
    target: u32,
    policy: GadgetPolicy,
    address: u64,
    data: Option<&DataString>,
) -> SynthResult<Circuit> {
    if control == 0 {
        return Err(SynthError::DualRequiresControl);
    }
    let leaves = address_space(control)?;
    check_data(data, control, leaves)?;

    let layout = DualLayout::new(control, target);
    let forward_layout = layout.forward();
    let num_qubits = layout.num_qubits();
    let mut circuit = Circuit::with_size("qrom_dual", num_qubits, policy.num_clbits());
    initialize(&mut circuit, control, address)?;

    let mut forward = Cursor::new(forward_layout.root().0, Direction::Forward, num_qubits)?;
    let mut mirror = Cursor::new(layout.mirror_root().0, Direction::Backward, num_qubits)?;

    // Root level: the forward chain takes the 0 branch of the lowest
    // address bit, the mirrored chain the 1 branch.
    let mirror_root = [
        forward_layout.root(),
        forward_layout.address(0),
        layout.mirror_root(),
    ];
    policy.open(&mut circuit, forward.open_operands()?, Sign::NEGATE_SECOND)?;
    policy.open(&mut circuit, mirror_root, Sign::POSITIVE)?;
    forward.advance()?;
    mirror_address_bits(&mut circuit, &layout)?;
    circuit.barrier_all()?;

    for _ in 1..control {
        open_level(&mut circuit, policy, &mut forward)?;
    }
    for _ in 1..control {
        open_level(&mut circuit, policy, &mut mirror)?;
    }
    circuit.barrier_all()?;

    let half = leaves / 2;
    for step in 0..half {
        if copies(data, step) {
            copy_to_targets(&mut circuit, forward.current(), forward_layout.targets())?;
        }
        if copies(data, step + half) {
            copy_to_targets(&mut circuit, mirror.current(), forward_layout.targets())?;
        }

        let levels = levels_to_close(step);
        for _ in 0..levels {
            close_level(&mut circuit, policy, &mut forward)?;
            close_level(&mut circuit, policy, &mut mirror)?;
        }

        if step + 1 == half {
            break;
        }

        let (parent, child) = forward.flip_operands()?;
        circuit.cx(parent, child)?;
        let (parent, child) = mirror.flip_operands()?;
        circuit.cx(parent, child)?;

        for _ in 0..levels {
            open_level(&mut circuit, policy, &mut forward)?;
            open_level(&mut circuit, policy, &mut mirror)?;
        }
        circuit.barrier_all()?;
    }
    circuit.barrier_all()?;

    // Re-emit the root gadgets in reverse order. Under the succinct policy
    // both are start gadgets: the roots are reset and recomputed, not
    // unwound, so the tail is the mirror image of the opening prelude.
    policy.open(&mut circuit, mirror_root, Sign::POSITIVE)?;
    policy.open(&mut circuit, forward.close_operands()?, Sign::NEGATE_SECOND)?;
    forward.retreat()?;
    mirror_address_bits(&mut circuit, &layout)?;

    debug!(
        control,
        target,
        %policy,
        num_qubits,
        instructions = circuit.len(),
        "synthesized dual-ended QROM"
    );
    Ok(circuit)
}

/// Toggle the mirrored address bits with the forward bits above bit 0.
fn mirror_address_bits(circuit: &mut Circuit, layout: &DualLayout) -> SynthResult<()> {
    let forward = layout.forward();
    for i in 0..layout.control.saturating_sub(1) {
        circuit.cx(forward.address(i + 1), layout.mirror_address(i))?;
    }
    Ok(())
}
