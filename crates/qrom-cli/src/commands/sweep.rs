//! Sweep command implementation.
//!
//! For each address width, synthesizes the single- and dual-ended circuits
//! with the same gadgets and reports the dual-ended cost relative to the
//! single-ended one.

use anyhow::Result;
use console::style;
use serde::Serialize;

use qrom_eval::{Comparison, ResourceReport, evaluate_circuit};
use qrom_synth::{GadgetPolicy, QromConfig, Variant, lower_toffolis};

/// One address width of a sweep.
#[derive(Debug, Serialize)]
pub struct SweepRow {
    pub control: u32,
    pub single: ResourceReport,
    pub dual: ResourceReport,
    pub comparison: Comparison,
}

/// Execute the sweep command.
pub fn execute(
    start: u32,
    end: u32,
    target: u32,
    policy: GadgetPolicy,
    lower: bool,
    json: bool,
) -> Result<()> {
    let rows = sweep(start, end, target, policy, lower)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{} single- vs dual-ended, {} gadgets, target {}{}",
        style("→").cyan().bold(),
        style(policy).yellow(),
        target,
        if lower { ", Toffolis lowered" } else { "" }
    );
    for row in &rows {
        println!("size {}: {}", row.control, row.comparison);
    }
    Ok(())
}

/// Evaluate both variants for every width in `start..=end`.
pub fn sweep(
    start: u32,
    end: u32,
    target: u32,
    policy: GadgetPolicy,
    lower: bool,
) -> Result<Vec<SweepRow>> {
    if start == 0 {
        anyhow::bail!("Sweep must start at 1: the dual-ended variant needs an address bit");
    }
    if end < start {
        anyhow::bail!("Empty range: --end {end} is below --start {start}");
    }

    (start..=end)
        .map(|control| {
            let single = measure(control, target, policy, Variant::Single, lower)?;
            let dual = measure(control, target, policy, Variant::Dual, lower)?;
            let comparison = Comparison::between(&single, &dual);
            Ok(SweepRow {
                control,
                single,
                dual,
                comparison,
            })
        })
        .collect()
}

fn measure(
    control: u32,
    target: u32,
    policy: GadgetPolicy,
    variant: Variant,
    lower: bool,
) -> Result<ResourceReport> {
    let mut circuit = QromConfig::new(control, target)
        .with_policy(policy)
        .with_variant(variant)
        .synthesize()?;
    if lower {
        circuit = lower_toffolis(&circuit)?;
    }
    Ok(evaluate_circuit(&circuit)?)
}
