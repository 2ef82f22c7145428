//! Flat instruction records.
//!
//! A [`Program`] is the serialization-neutral view of a circuit: qubit counts
//! plus an ordered list of `{name, qubits, params}` records. It is what the
//! OpenQASM assembler produces and what the resource evaluator consumes, so
//! gate names here are plain strings and unknown names are representable.

use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::instruction::Instruction;

/// One instruction in flat form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateRecord {
    /// Lower-case instruction name (`"cx"`, `"rz"`, `"barrier"`, ...).
    pub name: String,
    /// Global qubit indices in operand order.
    pub qubits: Vec<u32>,
    /// Numeric parameters in radians.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<f64>,
    /// Classical targets (measurement only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clbits: Vec<u32>,
}

impl GateRecord {
    /// Create a record without classical operands.
    pub fn new(name: impl Into<String>, qubits: Vec<u32>, params: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            qubits,
            params,
            clbits: vec![],
        }
    }
}

impl From<&Instruction> for GateRecord {
    fn from(inst: &Instruction) -> Self {
        Self {
            name: inst.name().to_string(),
            qubits: inst.qubits.iter().map(|q| q.0).collect(),
            params: inst.params(),
            clbits: inst.clbits.iter().map(|c| c.0).collect(),
        }
    }
}

/// A flattened circuit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Total number of qubits across all registers.
    pub num_qubits: u32,
    /// Total number of classical bits across all registers.
    pub num_clbits: u32,
    /// Instructions in program order.
    pub instructions: Vec<GateRecord>,
}

impl Program {
    /// Create an empty program.
    pub fn new(num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            num_qubits,
            num_clbits,
            instructions: vec![],
        }
    }

    /// Append a record.
    pub fn push(&mut self, record: GateRecord) {
        self.instructions.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no records.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<&Circuit> for Program {
    fn from(circuit: &Circuit) -> Self {
        Self {
            num_qubits: circuit.num_qubits(),
            num_clbits: circuit.num_clbits(),
            instructions: circuit.instructions().iter().map(GateRecord::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::{ClbitId, QubitId};

    #[test]
    fn test_from_circuit_preserves_order() {
        let mut circuit = Circuit::with_size("test", 3, 1);
        circuit
            .x(QubitId(0))
            .unwrap()
            .rz(0.25, QubitId(1))
            .unwrap()
            .ccx(QubitId(0), QubitId(1), QubitId(2))
            .unwrap()
            .measure(QubitId(2), ClbitId(0))
            .unwrap();

        let program = Program::from(&circuit);
        assert_eq!(program.num_qubits, 3);
        assert_eq!(program.num_clbits, 1);

        let names: Vec<_> = program.instructions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["x", "rz", "ccx", "measure"]);
        assert_eq!(program.instructions[1].params, vec![0.25]);
        assert_eq!(program.instructions[2].qubits, vec![0, 1, 2]);
        assert_eq!(program.instructions[3].clbits, vec![0]);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut program = Program::new(2, 0);
        program.push(GateRecord::new("cx", vec![0, 1], vec![]));
        program.push(GateRecord::new("rz", vec![1], vec![0.5]));

        let json = program.to_json().unwrap();
        assert!(!json.contains("clbits"));
        let restored = Program::from_json(&json).unwrap();
        assert_eq!(restored, program);
    }

    #[test]
    fn test_record_without_params_field() {
        let json = r#"{"num_qubits":1,"num_clbits":0,"instructions":[{"name":"t","qubits":[0]}]}"#;
        let program = Program::from_json(json).unwrap();
        assert_eq!(program.len(), 1);
        assert!(program.instructions[0].params.is_empty());
    }
}
