//! Count command implementation.

use anyhow::Result;
use console::style;

use qrom_eval::{ResourceReport, TracingSink};

use super::common::load_program;

/// Execute the count command.
pub fn execute(input: &str, json: bool) -> Result<()> {
    let program = load_program(input)?;
    let report = ResourceReport::from_program(&program)?;

    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    report.forward_diagnostics(&mut TracingSink);
    print_report(input, &report);
    Ok(())
}

fn print_report(input: &str, report: &ResourceReport) {
    println!(
        "{} {} ({} qubits)",
        style("→").cyan().bold(),
        style(input).green(),
        report.num_qubits
    );
    println!("  t-count: {}", style(report.t_count).yellow());
    println!("  t-depth: {}", style(report.t_depth).yellow());

    if report.residual_toffolis > 0 {
        println!(
            "  {} {} ccx not decomposed; run `qrom synth --lower` for exact counts",
            style("!").yellow().bold(),
            report.residual_toffolis
        );
    }
}
