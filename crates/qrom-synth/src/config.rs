//! QROM synthesis configuration.

use std::fmt;
use std::str::FromStr;

use qrom_ir::{Circuit, QubitId};
use serde::{Deserialize, Serialize};

use crate::data::DataString;
use crate::distributed::synthesize_distributed;
use crate::dual::synthesize_dual;
use crate::error::{SynthError, SynthResult};
use crate::gadget::GadgetPolicy;
use crate::layout::{DistributedLayout, LayeredLayout, SingleLayout};
use crate::qrom::synthesize_single;
use crate::select::synthesize_layered;

/// Which synthesizer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// One ancilla chain walks every leaf.
    #[default]
    Single,
    /// Two mirrored chains walk half the leaves each.
    Dual,
    /// Recursive walk with one ancilla per tree level.
    Layered,
    /// Address fanned out into `2^spread` blocks, one layered walk each.
    Distributed,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Single => write!(f, "single"),
            Variant::Dual => write!(f, "dual"),
            Variant::Layered => write!(f, "layered"),
            Variant::Distributed => write!(f, "distributed"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(Variant::Single),
            "dual" => Ok(Variant::Dual),
            "layered" => Ok(Variant::Layered),
            "distributed" | "dist" => Ok(Variant::Distributed),
            other => Err(format!(
                "unknown variant '{other}' (expected single, dual, layered or distributed)"
            )),
        }
    }
}

/// Everything needed to synthesize one QROM circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QromConfig {
    /// Address width.
    pub control: u32,
    /// Target register width.
    pub target: u32,
    /// Gadget family.
    #[serde(default)]
    pub policy: GadgetPolicy,
    /// Synthesizer variant.
    #[serde(default)]
    pub variant: Variant,
    /// Address bits split across blocks; only the distributed variant reads it.
    #[serde(default)]
    pub spread: u32,
    /// Address preloaded into the address register.
    #[serde(default)]
    pub address: u64,
    /// Per-leaf copy mask as a `'0'`/`'1'` string; absent copies at every leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl QromConfig {
    /// A plain single-ended configuration with no data.
    pub fn new(control: u32, target: u32) -> Self {
        Self {
            control,
            target,
            policy: GadgetPolicy::Plain,
            variant: Variant::Single,
            spread: 0,
            address: 0,
            data: None,
        }
    }

    /// Set the gadget policy.
    #[must_use]
    pub fn with_policy(mut self, policy: GadgetPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the synthesizer variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the number of address bits the distributed variant splits on.
    #[must_use]
    pub fn with_spread(mut self, spread: u32) -> Self {
        self.spread = spread;
        self
    }

    /// Set the preloaded address.
    #[must_use]
    pub fn with_address(mut self, address: u64) -> Self {
        self.address = address;
        self
    }

    /// Set the per-leaf copy mask.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Parse and validate the data string, if any.
    pub fn data_string(&self) -> SynthResult<Option<DataString>> {
        self.data
            .as_deref()
            .map(|text| DataString::parse(text, self.control))
            .transpose()
    }

    /// Qubits the configured circuit will declare.
    pub fn num_qubits(&self) -> u32 {
        match self.variant {
            Variant::Single | Variant::Layered => 2 * self.control + self.target + 1,
            Variant::Dual => self.target + 4 * self.control,
            Variant::Distributed => {
                let blocks = 1u64.checked_shl(self.spread).unwrap_or(u64::MAX);
                let total = blocks
                    .saturating_mul(2 * u64::from(self.control))
                    .saturating_add(1 + u64::from(self.target));
                u32::try_from(total).unwrap_or(u32::MAX)
            }
        }
    }

    /// Target register qubits of the configured layout.
    pub fn targets(&self) -> SynthResult<Vec<QubitId>> {
        let targets = match self.variant {
            Variant::Single | Variant::Dual => {
                SingleLayout::new(self.control, self.target).targets().collect()
            }
            Variant::Layered => LayeredLayout::new(self.control, self.target)
                .targets()
                .collect(),
            Variant::Distributed => {
                if self.spread > self.control || self.control >= 32 {
                    return Err(SynthError::SpreadTooLarge {
                        spread: self.spread,
                        control: self.control,
                    });
                }
                DistributedLayout::new(self.control, self.spread, self.target)
                    .targets()
                    .collect()
            }
        };
        Ok(targets)
    }

    /// Run the configured synthesizer.
    pub fn synthesize(&self) -> SynthResult<Circuit> {
        let data = self.data_string()?;
        match self.variant {
            Variant::Single => synthesize_single(
                self.control,
                self.target,
                self.policy,
                self.address,
                data.as_ref(),
            ),
            Variant::Dual => synthesize_dual(
                self.control,
                self.target,
                self.policy,
                self.address,
                data.as_ref(),
            ),
            Variant::Layered => synthesize_layered(
                self.control,
                self.target,
                self.policy,
                self.address,
                data.as_ref(),
            ),
            Variant::Distributed => synthesize_distributed(
                self.control,
                self.spread,
                self.target,
                self.policy,
                self.address,
                data.as_ref(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = QromConfig::new(3, 2)
            .with_policy(GadgetPolicy::Succinct)
            .with_variant(Variant::Dual)
            .with_address(5)
            .with_data("01010101");

        assert_eq!(config.policy, GadgetPolicy::Succinct);
        assert_eq!(config.variant, Variant::Dual);
        assert_eq!(config.address, 5);
        assert_eq!(config.num_qubits(), 14);
        assert_eq!(config.data_string().unwrap().unwrap().len(), 8);
    }

    #[test]
    fn test_synthesize_dispatch() {
        let single = QromConfig::new(2, 1).synthesize().unwrap();
        assert_eq!(single.num_qubits(), 6);
        assert_eq!(single.name(), "qrom");

        let dual = QromConfig::new(2, 1)
            .with_variant(Variant::Dual)
            .synthesize()
            .unwrap();
        assert_eq!(dual.num_qubits(), 9);
        assert_eq!(dual.name(), "qrom_dual");

        let layered = QromConfig::new(2, 1)
            .with_variant(Variant::Layered)
            .synthesize()
            .unwrap();
        assert_eq!(layered.name(), "qrom_layered");

        let config = QromConfig::new(3, 1)
            .with_variant(Variant::Distributed)
            .with_spread(1);
        let distributed = config.synthesize().unwrap();
        assert_eq!(distributed.name(), "qrom_distributed");
        assert_eq!(distributed.num_qubits(), config.num_qubits());
    }

    #[test]
    fn test_targets_follow_layout() {
        let first = |variant| {
            QromConfig::new(3, 2)
                .with_variant(variant)
                .with_spread(1)
                .targets()
                .unwrap()[0]
        };
        assert_eq!(first(Variant::Single), QubitId(7));
        assert_eq!(first(Variant::Dual), QubitId(7));
        assert_eq!(first(Variant::Layered), QubitId(6));
        assert_eq!(first(Variant::Distributed), QubitId(13));

        let err = QromConfig::new(1, 1)
            .with_variant(Variant::Distributed)
            .with_spread(2)
            .targets()
            .unwrap_err();
        assert!(matches!(err, SynthError::SpreadTooLarge { .. }));
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("Dual".parse::<Variant>().unwrap(), Variant::Dual);
        assert_eq!("dist".parse::<Variant>().unwrap(), Variant::Distributed);
        for variant in [Variant::Single, Variant::Dual, Variant::Layered, Variant::Distributed] {
            assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
        }
        assert!("ring".parse::<Variant>().is_err());
    }

    #[test]
    fn test_invalid_data_rejected() {
        let err = QromConfig::new(2, 1).with_data("012").synthesize().unwrap_err();
        assert!(matches!(err, SynthError::InvalidDataLength { .. }));

        let err = QromConfig::new(1, 1).with_data("0a").synthesize().unwrap_err();
        assert!(matches!(err, SynthError::InvalidDataBit { found: 'a', .. }));
    }

    #[test]
    fn test_serde_defaults() {
        let config: QromConfig = serde_json::from_str(r#"{"control": 2, "target": 1}"#).unwrap();
        assert_eq!(config, QromConfig::new(2, 1));

        let json = serde_json::to_string(&QromConfig::new(1, 1).with_policy(GadgetPolicy::Succinct))
            .unwrap();
        assert!(json.contains(r#""policy":"succinct""#));
        assert!(!json.contains("data"));
    }
}
