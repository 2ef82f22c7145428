//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - QROM synthesis and Clifford+T resource counting",
        style("qrom").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qrom-ir     Circuit representation and flat programs");
    println!("  qrom-qasm   OpenQASM 2.0 emitter and assembler");
    println!("  qrom-synth  Single- and dual-ended QROM synthesis");
    println!("  qrom-eval   T-count and T-depth evaluation");
    println!("  qrom-sim    Reference statevector simulator");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
