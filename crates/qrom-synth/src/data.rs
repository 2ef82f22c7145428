//! Classical data loaded by a QROM.

use std::fmt;

use rand::Rng;

use crate::error::{SynthError, SynthResult};

/// One output bit per address, indexed by Gray-code step.
///
/// The bit at `step` gates the copy into the target register when the
/// traversal reaches leaf `step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataString {
    bits: Vec<bool>,
}

impl DataString {
    /// Parse a `'0'`/`'1'` string for a `control`-bit address space.
    pub fn parse(text: &str, control: u32) -> SynthResult<Self> {
        let expected = address_space(control)?;
        let got = text.chars().count();
        if got != expected {
            return Err(SynthError::InvalidDataLength {
                control,
                expected,
                got,
            });
        }

        let bits = text
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(SynthError::InvalidDataBit { position, found }),
            })
            .collect::<SynthResult<Vec<_>>>()?;

        Ok(Self { bits })
    }

    /// Build from raw bits without a length check.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Uniformly random data for a `control`-bit address space.
    pub fn random<R: Rng + ?Sized>(control: u32, rng: &mut R) -> SynthResult<Self> {
        let leaves = address_space(control)?;
        Ok(Self {
            bits: (0..leaves).map(|_| rng.gen_bool(0.5)).collect(),
        })
    }

    /// Whether leaf `step` copies into the target register.
    #[inline]
    pub fn bit(&self, step: usize) -> bool {
        self.bits.get(step).copied().unwrap_or(false)
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the string is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Raw bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

impl fmt::Display for DataString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Number of leaves for a `control`-bit address.
pub fn address_space(control: u32) -> SynthResult<usize> {
    if control >= 32 {
        return Err(SynthError::ControlTooLarge(control));
    }
    Ok(1usize << control)
}

/// Whether `step` copies, treating absent data as all ones.
#[inline]
pub(crate) fn copies(data: Option<&DataString>, step: usize) -> bool {
    data.is_none_or(|d| d.bit(step))
}
