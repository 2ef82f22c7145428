//! Unitary gates and resets keep the state normalized.

use proptest::prelude::*;
use qrom_ir::{Circuit, QubitId};

const NUM_QUBITS: u32 = 4;

#[derive(Debug, Clone)]
enum Op {
    H(u32),
    T(u32),
    Sdg(u32),
    Rz(f64, u32),
    Cx(u32, u32),
    Ccx(u32, u32, u32),
    Reset(u32),
}

fn qubit() -> impl Strategy<Value = u32> {
    0..NUM_QUBITS
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        qubit().prop_map(Op::H),
        qubit().prop_map(Op::T),
        qubit().prop_map(Op::Sdg),
        (-10.0f64..10.0, qubit()).prop_map(|(theta, q)| Op::Rz(theta, q)),
        (qubit(), qubit())
            .prop_filter("distinct", |(a, b)| a != b)
            .prop_map(|(a, b)| Op::Cx(a, b)),
        (qubit(), qubit(), qubit())
            .prop_filter("distinct", |(a, b, c)| a != b && b != c && a != c)
            .prop_map(|(a, b, c)| Op::Ccx(a, b, c)),
        qubit().prop_map(Op::Reset),
    ]
}

fn build(ops: &[Op]) -> Circuit {
    let mut circuit = Circuit::with_size("random", NUM_QUBITS, 0);
    for op in ops {
        match *op {
            Op::H(q) => circuit.h(QubitId(q)),
            Op::T(q) => circuit.t(QubitId(q)),
            Op::Sdg(q) => circuit.sdg(QubitId(q)),
            Op::Rz(theta, q) => circuit.rz(theta, QubitId(q)),
            Op::Cx(a, b) => circuit.cx(QubitId(a), QubitId(b)),
            Op::Ccx(a, b, c) => circuit.ccx(QubitId(a), QubitId(b), QubitId(c)),
            Op::Reset(q) => circuit.reset(QubitId(q)),
        }
        .unwrap();
    }
    circuit
}

proptest! {
    #[test]
    fn norm_is_preserved(ops in prop::collection::vec(op(), 0..40)) {
        let state = qrom_sim::run(&build(&ops)).unwrap();
        let total: f64 = state.probabilities().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn reset_clears_qubit(ops in prop::collection::vec(op(), 0..20), q in qubit()) {
        let mut ops = ops;
        ops.push(Op::Reset(q));
        let state = qrom_sim::run(&build(&ops)).unwrap();
        prop_assert!(state.probability_of_one(q as usize) < 1e-9);
    }
}
