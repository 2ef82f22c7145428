//! Distributed-select QROM.
//!
//! The address is fanned out into `2^spread` blocks with a log-depth CNOT
//! tree. Block `b` checks its copy of the top `spread` address bits against
//! `b` with an equality ladder, runs the layered walk over the remaining
//! bits under the ladder's carry, then unwinds the ladder. The copies are
//! folded back at the end, leaving the address register as it was.

use qrom_ir::{Circuit, QubitId};
use tracing::debug;

use crate::data::{DataString, address_space};
use crate::error::{SynthError, SynthResult};
use crate::gadget::{GadgetPolicy, Sign};
use crate::layout::DistributedLayout;
use crate::qrom::check_data;
use crate::select::SubTree;

/// Build a distributed-select QROM over `control` address bits.
///
/// `spread` of the address bits (the top ones, starting at bit 0) pick one of
/// `2^spread` blocks; `spread = 0` degenerates to a single layered walk. Leaf
/// order matches [`synthesize_layered`](crate::synthesize_layered).
pub fn synthesize_distributed(
    control: u32,
    spread: u32,
    target: u32,
    policy: GadgetPolicy,
    address: u64,
    data: Option<&DataString>,
) -> SynthResult<Circuit> {
    let leaves = address_space(control)?;
    check_data(data, control, leaves)?;
    if spread > control {
        return Err(SynthError::SpreadTooLarge { spread, control });
    }
    let total = 1 + 2 * (1u64 << spread) * u64::from(control) + u64::from(target);
    if total > u64::from(u32::MAX) {
        return Err(SynthError::RegisterTooLarge(total));
    }

    let layout = DistributedLayout::new(control, spread, target);
    let num_qubits = layout.num_qubits();
    let mut circuit = Circuit::with_size("qrom_distributed", num_qubits, policy.num_clbits());

    circuit.x(layout.root())?;
    for i in 0..control {
        if (address >> i) & 1 == 1 {
            circuit.x(layout.address(0, i))?;
        }
    }
    circuit.barrier_all()?;

    fan_out(&mut circuit, &layout)?;
    circuit.barrier_all()?;

    let targets: Vec<_> = layout.targets().collect();
    for block in 0..layout.blocks() {
        let selectors = selectors(&layout, block);
        let mut carry = layout.root();
        for &(bit, ancilla, sign) in &selectors {
            policy.open(&mut circuit, [carry, bit, ancilla], sign)?;
            carry = ancilla;
        }

        let address_bits: Vec<_> = (spread..control).map(|i| layout.address(block, i)).collect();
        let ancillas: Vec<_> = (spread..control).map(|j| layout.ancilla(block, j)).collect();
        SubTree {
            circuit: &mut circuit,
            policy,
            address: &address_bits,
            ancillas: &ancillas,
            targets: &targets,
            data,
        }
        .walk(0, carry, block as usize)?;

        for (j, &(bit, ancilla, sign)) in selectors.iter().enumerate().rev() {
            let parent = if j == 0 { layout.root() } else { selectors[j - 1].1 };
            policy.close(&mut circuit, [parent, bit, ancilla], sign)?;
        }
        circuit.barrier_all()?;
    }

    fan_in(&mut circuit, &layout)?;

    debug!(
        control,
        spread,
        target,
        %policy,
        num_qubits,
        instructions = circuit.len(),
        "synthesized distributed-select QROM"
    );
    Ok(circuit)
}

/// `(address bit, ancilla, sign)` for each rung of block `block`'s
/// equality ladder. Rung `j` compares bit `j` against bit `spread-1-j` of
/// the block index, negating the address control where that bit is 0.
fn selectors(layout: &DistributedLayout, block: u32) -> Vec<(QubitId, QubitId, Sign)> {
    (0..layout.spread)
        .map(|j| {
            let wanted = (block >> (layout.spread - 1 - j)) & 1 == 1;
            let sign = if wanted {
                Sign::POSITIVE
            } else {
                Sign::NEGATE_SECOND
            };
            (layout.address(block, j), layout.ancilla(block, j), sign)
        })
        .collect()
}

/// Double the populated address blocks `spread` times.
fn fan_out(circuit: &mut Circuit, layout: &DistributedLayout) -> SynthResult<()> {
    for layer in 0..layout.spread {
        copy_layer(circuit, layout, layer)?;
    }
    Ok(())
}

/// Undo [`fan_out`], last layer first.
fn fan_in(circuit: &mut Circuit, layout: &DistributedLayout) -> SynthResult<()> {
    for layer in (0..layout.spread).rev() {
        copy_layer(circuit, layout, layer)?;
    }
    Ok(())
}

fn copy_layer(circuit: &mut Circuit, layout: &DistributedLayout, layer: u32) -> SynthResult<()> {
    let width = 1 << layer;
    for block in 0..width {
        for i in 0..layout.control {
            circuit.cx(layout.address(block, i), layout.address(block + width, i))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::synthesize_layered;

    #[test]
    fn test_spread_bounds() {
        assert!(matches!(
            synthesize_distributed(2, 3, 1, GadgetPolicy::Plain, 0, None),
            Err(SynthError::SpreadTooLarge {
                spread: 3,
                control: 2
            })
        ));
        assert!(synthesize_distributed(2, 2, 1, GadgetPolicy::Plain, 0, None).is_ok());
    }

    #[test]
    fn test_qubit_count() {
        let circuit = synthesize_distributed(3, 1, 1, GadgetPolicy::Plain, 0, None).unwrap();
        assert_eq!(circuit.num_qubits(), 14);
        assert_eq!(circuit.name(), "qrom_distributed");
    }

    #[test]
    fn test_fan_out_is_undone() {
        let circuit = synthesize_distributed(2, 2, 1, GadgetPolicy::Plain, 0, None).unwrap();
        let layout = DistributedLayout::new(2, 2, 1);
        let copies: Vec<_> = circuit
            .instructions()
            .iter()
            .filter(|i| i.name() == "cx" && i.qubits[1].0 < layout.ancilla(0, 0).0)
            .map(|i| (i.qubits[0].0, i.qubits[1].0))
            .collect();
        let fan_out: [(u32, u32); 6] = [(1, 3), (2, 4), (1, 5), (2, 6), (3, 7), (4, 8)];
        let fan_in: [(u32, u32); 6] = [(1, 5), (2, 6), (3, 7), (4, 8), (1, 3), (2, 4)];
        assert_eq!(copies, [fan_out, fan_in].concat());
    }

    #[test]
    fn test_equality_ladder_signs() {
        let layout = DistributedLayout::new(3, 2, 1);
        let signs: Vec<_> = (0..4)
            .map(|b| selectors(&layout, b).iter().map(|s| s.2).collect::<Vec<_>>())
            .collect();
        let (p, n) = (Sign::POSITIVE, Sign::NEGATE_SECOND);
        assert_eq!(signs, vec![vec![n, n], vec![n, p], vec![p, n], vec![p, p]]);
    }

    #[test]
    fn test_zero_spread_matches_layered_gadgets() {
        for policy in [GadgetPolicy::Plain, GadgetPolicy::Succinct] {
            let distributed = synthesize_distributed(3, 0, 1, policy, 0, None).unwrap();
            let layered = synthesize_layered(3, 1, policy, 0, None).unwrap();
            assert_eq!(distributed.num_qubits(), layered.num_qubits());
            for name in ["ccx", "reset", "t", "tdg", "cx"] {
                assert_eq!(distributed.count(name), layered.count(name), "{name}");
            }
        }
    }

    #[test]
    fn test_gadgets_balance() {
        for spread in 0..=3 {
            let circuit = synthesize_distributed(3, spread, 1, GadgetPolicy::Succinct, 0, None).unwrap();
            assert_eq!(circuit.count("reset"), circuit.count("ccx"), "spread={spread}");
        }
    }
}
