//! Synth command implementation.

use anyhow::Result;
use console::style;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use qrom_synth::{DataString, QromConfig, lower_toffolis};

use super::common::write_output;

/// Execute the synth command.
///
/// With a `random_seed`, the data string is drawn uniformly from that seed
/// and replaces any data already in `config`.
pub fn execute(
    mut config: QromConfig,
    random_seed: Option<u64>,
    lower: bool,
    output: Option<&str>,
) -> Result<()> {
    if let Some(seed) = random_seed {
        info!(seed, "seeding data generator");
        let data = DataString::random(config.control, &mut StdRng::seed_from_u64(seed))?;
        config = config.with_data(data.to_string());
    }

    eprintln!(
        "{} Synthesizing {} QROM ({} gadgets), control {}, target {}",
        style("→").cyan().bold(),
        config.variant,
        style(config.policy).yellow(),
        config.control,
        config.target
    );

    let mut circuit = config.synthesize()?;
    if lower {
        circuit = lower_toffolis(&circuit)?;
    }

    eprintln!(
        "  Result: {} qubits, {} instructions",
        circuit.num_qubits(),
        circuit.len()
    );

    write_output(&qrom_qasm::emit(&circuit)?, output)?;
    if let Some(path) = output {
        eprintln!("{} Written to {}", style("✓").green().bold(), style(path).green());
    }

    Ok(())
}
