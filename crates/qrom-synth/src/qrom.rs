//! Single-ended QROM synthesis.

use qrom_ir::{Circuit, QubitId};
use tracing::debug;

use crate::cursor::{Cursor, Direction, levels_to_close};
use crate::data::{DataString, address_space, copies};
use crate::error::{SynthError, SynthResult};
use crate::gadget::{GadgetPolicy, Sign};
use crate::layout::SingleLayout;

/// Build a single-ended QROM over `control` address bits.
///
/// The circuit walks all `2^control` leaves in counting order. At leaf
/// `step` the live ancilla is copied into every target qubit when
/// `data[step]` is set (or always, without data). Moving to the next leaf
/// closes the levels a binary increment would clear, flips the next address
/// level with one CNOT and reopens the cleared levels.
///
/// `address` preloads the address register (LSB first) so the circuit can
/// be checked on a basis input.
pub fn synthesize_single(
    control: u32,
    target: u32,
    policy: GadgetPolicy,
    address: u64,
    data: Option<&DataString>,
) -> SynthResult<Circuit> {
    let leaves = address_space(control)?;
    check_data(data, control, leaves)?;

    let layout = SingleLayout::new(control, target);
    let num_qubits = layout.num_qubits();
    let mut circuit = Circuit::with_size("qrom", num_qubits, policy.num_clbits());
    initialize(&mut circuit, control, address)?;

    let mut cursor = Cursor::new(layout.root().0, Direction::Forward, num_qubits)?;
    for _ in 0..control {
        open_level(&mut circuit, policy, &mut cursor)?;
    }

    for step in 0..leaves {
        if copies(data, step) {
            copy_to_targets(&mut circuit, cursor.current(), layout.targets())?;
        }

        let levels = levels_to_close(step);
        for _ in 0..levels {
            close_level(&mut circuit, policy, &mut cursor)?;
        }

        if step + 1 == leaves {
            break;
        }

        let (parent, child) = cursor.flip_operands()?;
        circuit.cx(parent, child)?;

        for _ in 0..levels {
            open_level(&mut circuit, policy, &mut cursor)?;
        }
    }

    debug!(
        control,
        target,
        %policy,
        num_qubits,
        instructions = circuit.len(),
        "synthesized single-ended QROM"
    );
    Ok(circuit)
}

/// Reject data whose length does not match the address space.
pub(crate) fn check_data(
    data: Option<&DataString>,
    control: u32,
    leaves: usize,
) -> SynthResult<()> {
    match data {
        Some(d) if d.len() != leaves => Err(SynthError::InvalidDataLength {
            control,
            expected: leaves,
            got: d.len(),
        }),
        _ => Ok(()),
    }
}

/// Set the root, load `address` into the address bits, then barrier.
pub(crate) fn initialize(circuit: &mut Circuit, control: u32, address: u64) -> SynthResult<()> {
    let layout = SingleLayout::new(control, 0);
    circuit.x(layout.root())?;
    for i in 0..control {
        if (address >> i) & 1 == 1 {
            circuit.x(layout.address(i))?;
        }
    }
    circuit.barrier_all()?;
    Ok(())
}

/// Open one level below the cursor on its `0` branch and step past it.
pub(crate) fn open_level(
    circuit: &mut Circuit,
    policy: GadgetPolicy,
    cursor: &mut Cursor,
) -> SynthResult<()> {
    policy.open(circuit, cursor.open_operands()?, Sign::NEGATE_SECOND)?;
    cursor.advance()
}

/// Uncompute the cursor's level (now on its `1` branch) and step back.
pub(crate) fn close_level(
    circuit: &mut Circuit,
    policy: GadgetPolicy,
    cursor: &mut Cursor,
) -> SynthResult<()> {
    policy.close(circuit, cursor.close_operands()?, Sign::POSITIVE)?;
    cursor.retreat()
}

/// CNOT `source` into every target qubit.
pub(crate) fn copy_to_targets(
    circuit: &mut Circuit,
    source: QubitId,
    targets: impl Iterator<Item = QubitId>,
) -> SynthResult<()> {
    for t in targets {
        circuit.cx(source, t)?;
    }
    Ok(())
}
