//! QASM 2.0 emitter for serializing circuits.

use std::f64::consts::PI;

use qrom_ir::{Circuit, GateRecord, Program};

use crate::error::{ParseError, ParseResult};

/// Emit a circuit as QASM 2.0 source code.
///
/// Register declarations use the QASM2 style (`qreg q[n];` / `creg c[n];`)
/// and measurements use `measure q[i] -> c[i];`. Every gate the synthesizers
/// produce is defined in `qelib1.inc`, so no inline definitions are needed.
///
/// Fails on a NaN or infinite rotation angle, which has no QASM spelling.
pub fn emit(circuit: &Circuit) -> ParseResult<String> {
    emit_program(&Program::from(circuit))
}

/// Emit flat records as QASM 2.0 source code.
pub fn emit_program(program: &Program) -> ParseResult<String> {
    let mut emitter = Emitter::new();
    emitter.emit_program(program)
}

struct Emitter {
    output: String,
}

impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_program(&mut self, program: &Program) -> ParseResult<String> {
        self.writeln("OPENQASM 2.0;");
        self.writeln("include \"qelib1.inc\";");

        if program.num_qubits > 0 {
            self.writeln(&format!("qreg q[{}];", program.num_qubits));
        }
        if program.num_clbits > 0 {
            self.writeln(&format!("creg c[{}];", program.num_clbits));
        }

        for record in &program.instructions {
            self.emit_record(record)?;
        }

        Ok(std::mem::take(&mut self.output))
    }

    fn emit_record(&mut self, record: &GateRecord) -> ParseResult<()> {
        let qubits = record
            .qubits
            .iter()
            .map(|q| format!("q[{q}]"))
            .collect::<Vec<_>>()
            .join(",");

        match record.name.as_str() {
            "measure" => {
                for (q, c) in record.qubits.iter().zip(&record.clbits) {
                    self.writeln(&format!("measure q[{q}] -> c[{c}];"));
                }
            }
            "barrier" if record.qubits.is_empty() => self.writeln("barrier;"),
            name if record.params.is_empty() => self.writeln(&format!("{name} {qubits};")),
            name => {
                if let Some(&value) = record.params.iter().find(|p| !p.is_finite()) {
                    return Err(ParseError::NonFiniteParameter {
                        gate: name.to_string(),
                        value,
                    });
                }
                let params = record
                    .params
                    .iter()
                    .map(|p| format_angle(*p))
                    .collect::<Vec<_>>()
                    .join(",");
                self.writeln(&format!("{name}({params}) {qubits};"));
            }
        }
        Ok(())
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

/// Format an angle, preferring exact multiples of `pi/4`.
///
/// Other finite values use Rust's shortest round-trip representation so
/// that re-assembling the text yields the identical `f64`.
pub fn format_angle(value: f64) -> String {
    const EPS: f64 = 1e-12;

    if value.abs() < EPS {
        return "0".into();
    }

    let quarters = value / (PI / 4.0);
    let rounded = quarters.round();
    if (quarters - rounded).abs() < EPS && rounded.abs() <= 64.0 {
        #[allow(clippy::cast_possible_truncation)]
        let k = rounded as i64;
        let sign = if k < 0 { "-" } else { "" };
        let k = k.abs();
        let (num, den) = reduce(k, 4);
        return match (num, den) {
            (1, 1) => format!("{sign}pi"),
            (n, 1) => format!("{sign}{n}*pi"),
            (1, d) => format!("{sign}pi/{d}"),
            (n, d) => format!("{sign}{n}*pi/{d}"),
        };
    }

    format!("{value:?}")
}

fn reduce(num: i64, den: i64) -> (i64, i64) {
    let mut a = num;
    let mut b = den;
    while b != 0 {
        (a, b) = (b, a % b);
    }
    (num / a, den / a)
}
