//! Verify command implementation.
//!
//! Loads random data strings, simulates every synthesizer variant on every
//! basis address and checks that each loads `data[reverse(address)]` into
//! the first target qubit. The distributed variant splits on half of the
//! address bits.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use qrom_sim::Statevector;
use qrom_synth::{DataString, GadgetPolicy, QromConfig, Variant};

const TOLERANCE: f64 = 1e-9;

/// Execute the verify command.
pub fn execute(sizes: &[u32], trials: u32, seed: Option<u64>, policy: GadgetPolicy) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, "seeding data generator");
    let mut rng = StdRng::seed_from_u64(seed);

    let total: u64 = sizes
        .iter()
        .map(|&c| u64::from(trials) << c)
        .sum();
    let progress = ProgressBar::new(total);
    progress.set_style(
        ProgressStyle::default_bar().template("{spinner:.cyan} [{bar:30}] {pos}/{len} {msg}")?,
    );

    let mut failures = 0usize;
    for &control in sizes {
        if control == 0 {
            anyhow::bail!("Address width 0 has no dual-ended circuit");
        }
        progress.set_message(format!("size {control}"));
        for _ in 0..trials {
            let data = DataString::random(control, &mut rng)?.to_string();
            for address in 0..1u64 << control {
                if !check(control, address, &data, policy)? {
                    failures += 1;
                    progress.suspend(|| {
                        eprintln!(
                            "{} size {control}, address {address}, data {data}",
                            style("✗").red().bold()
                        );
                    });
                }
                progress.inc(1);
            }
        }
    }
    progress.finish_and_clear();

    if failures > 0 {
        anyhow::bail!("{failures} of {total} checks failed (seed {seed})");
    }
    println!(
        "{} {total} checks passed ({policy} gadgets, seed {seed})",
        style("✓").green().bold()
    );
    Ok(())
}

const VARIANTS: [Variant; 4] = [
    Variant::Single,
    Variant::Dual,
    Variant::Layered,
    Variant::Distributed,
];

/// Whether every synthesizer loads the addressed bit for one input.
pub fn check(control: u32, address: u64, data: &str, policy: GadgetPolicy) -> Result<bool> {
    let expected = data
        .as_bytes()
        .get(reverse_bits(address, control))
        .is_some_and(|&b| b == b'1');

    let mut agree = true;
    for variant in VARIANTS {
        let config = QromConfig::new(control, 1)
            .with_policy(policy)
            .with_variant(variant)
            .with_spread(control / 2)
            .with_address(address)
            .with_data(data);
        let circuit = config.synthesize()?;
        let target = config.targets()?[0].0 as usize;
        let state = qrom_sim::run(&circuit)?;
        let loaded = loaded_bit(&state, target, policy);
        debug!(%variant, control, address, ?loaded, expected, "simulated");
        agree &= loaded == Some(expected);
    }
    Ok(agree)
}

/// Value of `target`, or `None` if it is not in a definite state.
fn loaded_bit(state: &Statevector, target: usize, policy: GadgetPolicy) -> Option<bool> {
    match policy {
        // Plain circuits end in a basis state.
        GadgetPolicy::Plain => Some((state.most_likely_state() >> target) & 1 == 1),
        // Released ancillas stay in |+⟩, so only the marginal is definite.
        GadgetPolicy::Succinct => {
            let p = state.probability_of_one(target);
            if p < TOLERANCE {
                Some(false)
            } else if p > 1.0 - TOLERANCE {
                Some(true)
            } else {
                None
            }
        }
    }
}

/// Reverse the low `width` bits of `value`.
fn reverse_bits(value: u64, width: u32) -> usize {
    (0..width).fold(0usize, |acc, i| (acc << 1) | ((value >> i) & 1) as usize)
}
