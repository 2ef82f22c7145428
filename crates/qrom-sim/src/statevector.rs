//! Statevector simulation engine.

use num_complex::Complex64;
use std::f64::consts::PI;

use qrom_ir::{Circuit, Instruction, InstructionKind, StandardGate};
use tracing::trace;

use crate::error::{SimError, SimResult};

/// Largest register the simulator will allocate (2^24 amplitudes, 256 MiB).
pub const MAX_QUBITS: u32 = 24;

/// A statevector representing a quantum state.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers), qubit 0 least significant.
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: u32) -> SimResult<Self> {
        Self::basis(num_qubits, 0)
    }

    /// Create the computational basis state `|index⟩`.
    pub fn basis(num_qubits: u32, index: usize) -> SimResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let size = 1usize << num_qubits;
        if index >= size {
            return Err(SimError::BasisOutOfRange { index, num_qubits });
        }
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[index] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits: num_qubits as usize,
        })
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Raw amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Run every instruction of `circuit` on this state.
    pub fn run(&mut self, circuit: &Circuit) -> SimResult<()> {
        if circuit.num_qubits() as usize != self.num_qubits {
            return Err(SimError::SizeMismatch {
                circuit: circuit.num_qubits(),
                state: self.num_qubits,
            });
        }
        for instruction in circuit.instructions() {
            self.apply(instruction);
        }
        trace!(
            num_qubits = self.num_qubits,
            instructions = circuit.len(),
            "simulated circuit"
        );
        Ok(())
    }

    /// Apply an instruction to the statevector.
    pub fn apply(&mut self, instruction: &Instruction) {
        let qubits: Vec<_> = instruction.qubits.iter().map(|q| q.index()).collect();
        match &instruction.kind {
            InstructionKind::Gate(gate) => self.apply_gate(gate, &qubits),
            InstructionKind::Reset => self.reset(qubits[0]),
            InstructionKind::Measure | InstructionKind::Barrier => {
                // No effect on the statevector
            }
        }
    }

    fn apply_gate(&mut self, gate: &StandardGate, qubits: &[usize]) {
        match gate {
            StandardGate::X => self.apply_x(qubits[0]),
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::S => self.apply_phase(qubits[0], PI / 2.0),
            StandardGate::Sdg => self.apply_phase(qubits[0], -PI / 2.0),
            StandardGate::T => self.apply_phase(qubits[0], PI / 4.0),
            StandardGate::Tdg => self.apply_phase(qubits[0], -PI / 4.0),
            StandardGate::Rz(theta) => self.apply_rz(qubits[0], *theta),
            StandardGate::CX => self.apply_cx(qubits[0], qubits[1]),
            StandardGate::CZ => self.apply_cz(qubits[0], qubits[1]),
            StandardGate::CCX => self.apply_ccx(qubits[0], qubits[1], qubits[2]),
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp *= phase;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            *amp *= if i & mask == 0 { phase_0 } else { phase_1 };
        }
    }

    // =========================================================================
    // Multi-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let both = (1 << control) | (1 << target);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & both == both {
                *amp = -*amp;
            }
        }
    }

    fn apply_ccx(&mut self, c1: usize, c2: usize, target: usize) {
        let ctrl_mask = (1 << c1) | (1 << c2);
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask == ctrl_mask) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    // =========================================================================
    // Non-unitary operations
    // =========================================================================

    /// Reset a qubit to |0⟩.
    ///
    /// Projects onto the `|0⟩` branch and renormalizes. When that branch has
    /// no support the `|1⟩` branch is kept and moved to `|0⟩` instead. For a
    /// qubit not entangled with the rest of the register both choices leave
    /// the same state.
    fn reset(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let p0: f64 = self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask == 0)
            .map(|(_, a)| a.norm_sqr())
            .sum();

        if p0 < 1e-12 {
            for i in 0..self.amplitudes.len() {
                if i & mask == 0 {
                    self.amplitudes.swap(i, i | mask);
                }
            }
        } else {
            for (i, amp) in self.amplitudes.iter_mut().enumerate() {
                if i & mask != 0 {
                    *amp = Complex64::new(0.0, 0.0);
                }
            }
        }

        let norm = self
            .amplitudes
            .iter()
            .map(Complex64::norm_sqr)
            .sum::<f64>()
            .sqrt();
        if norm > 0.0 {
            for amp in &mut self.amplitudes {
                *amp /= norm;
            }
        }
    }

    // =========================================================================
    // Readout
    // =========================================================================

    /// Measurement probabilities of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Index of the basis state with the largest amplitude.
    pub fn most_likely_state(&self) -> usize {
        self.amplitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.norm_sqr().total_cmp(&b.norm_sqr()))
            .map_or(0, |(i, _)| i)
    }

    /// Probability that measuring `qubit` yields 1.
    pub fn probability_of_one(&self, qubit: usize) -> f64 {
        let mask = 1 << qubit;
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    /// Convert a basis index to a bitstring, qubit 0 first.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        format!("{:0width$b}", outcome, width = self.num_qubits)
            .chars()
            .rev()
            .collect()
    }
}

/// Simulate `circuit` from `|0...0⟩`.
pub fn run(circuit: &Circuit) -> SimResult<Statevector> {
    let mut state = Statevector::new(circuit.num_qubits())?;
    state.run(circuit)?;
    Ok(state)
}
