//! Clifford+T lowering of residual Toffolis.

use qrom_ir::{Circuit, QubitId};
use tracing::debug;

use crate::error::SynthResult;

/// Rewrite every `ccx` into its exact 7-T, 6-CNOT Clifford+T network.
///
/// This is the standard `qelib1.inc` definition, so the result is equal to
/// the input as a unitary (not merely up to phase). All other instructions
/// are copied unchanged.
pub fn lower_toffolis(circuit: &Circuit) -> SynthResult<Circuit> {
    let mut lowered = Circuit::with_size(
        circuit.name(),
        circuit.num_qubits(),
        circuit.num_clbits(),
    );

    let mut rewritten = 0usize;
    for inst in circuit.instructions() {
        match inst.toffoli_operands() {
            Some([a, b, c]) => {
                toffoli_network(&mut lowered, a, b, c)?;
                rewritten += 1;
            }
            None => {
                lowered.apply(inst.clone())?;
            }
        }
    }

    debug!(
        rewritten,
        before = circuit.len(),
        after = lowered.len(),
        "lowered Toffolis"
    );
    Ok(lowered)
}

/// Append the Clifford+T network for `ccx a, b, c`.
pub fn toffoli_network(
    circuit: &mut Circuit,
    a: QubitId,
    b: QubitId,
    c: QubitId,
) -> SynthResult<()> {
    circuit
        .h(c)?
        .cx(b, c)?
        .tdg(c)?
        .cx(a, c)?
        .t(c)?
        .cx(b, c)?
        .tdg(c)?
        .cx(a, c)?
        .t(b)?
        .t(c)?
        .h(c)?
        .cx(a, b)?
        .t(a)?
        .tdg(b)?
        .cx(a, b)?;
    Ok(())
}

/// Whether any instruction is still a Toffoli.
pub fn has_toffolis(circuit: &Circuit) -> bool {
    circuit
        .instructions()
        .iter()
        .any(|i| i.toffoli_operands().is_some())
}
