//! Rotation angle classification.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, EvalResult};

/// Absolute tolerance used when matching a reduced angle.
pub const ANGLE_EPSILON: f64 = 1e-10;

/// Clifford+T cost class of a Z-axis rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleClass {
    /// Odd multiple of π/4: one T gate plus Cliffords.
    T,
    /// Odd multiple of π/2.
    Clifford,
    /// π.
    Pauli,
    /// 0 or 2π.
    Identity,
    /// Not a multiple of π/4.
    Unknown,
}

impl AngleClass {
    /// T gates a rotation of this class costs, when known.
    pub fn t_cost(self) -> Option<u64> {
        match self {
            AngleClass::T => Some(1),
            AngleClass::Clifford | AngleClass::Pauli | AngleClass::Identity => Some(0),
            AngleClass::Unknown => None,
        }
    }
}

/// Reduce `angle` into `[0, 2π)`.
///
/// Non-finite angles have no reduction and are rejected.
pub fn reduce(angle: f64) -> EvalResult<f64> {
    let reduced = angle.rem_euclid(TAU);
    if !(0.0..=TAU).contains(&reduced) {
        return Err(EvalError::AngleOutOfRange { angle });
    }
    Ok(reduced)
}

/// Classify a Z-axis rotation angle (radians, any sign or magnitude).
pub fn classify(angle: f64) -> EvalResult<AngleClass> {
    let reduced = reduce(angle)?;
    let near = |target: f64| (reduced - target).abs() < ANGLE_EPSILON;

    let class = if [1.0, 3.0, 5.0, 7.0].iter().any(|k| near(k * FRAC_PI_4)) {
        AngleClass::T
    } else if near(FRAC_PI_2) || near(3.0 * FRAC_PI_2) {
        AngleClass::Clifford
    } else if near(PI) {
        AngleClass::Pauli
    } else if near(0.0) || near(TAU) {
        AngleClass::Identity
    } else {
        AngleClass::Unknown
    };
    Ok(class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_angles() {
        assert_eq!(classify(FRAC_PI_4).unwrap(), AngleClass::T);
        assert_eq!(classify(FRAC_PI_2).unwrap(), AngleClass::Clifford);
        assert_eq!(classify(PI).unwrap(), AngleClass::Pauli);
        assert_eq!(classify(0.0).unwrap(), AngleClass::Identity);
        assert_eq!(classify(TAU).unwrap(), AngleClass::Identity);
        assert_eq!(classify(0.12345).unwrap(), AngleClass::Unknown);
    }

    #[test]
    fn test_negative_angles() {
        assert_eq!(classify(-FRAC_PI_4).unwrap(), AngleClass::T);
        assert_eq!(classify(-FRAC_PI_2).unwrap(), AngleClass::Clifford);
        assert_eq!(classify(-PI).unwrap(), AngleClass::Pauli);
    }

    #[test]
    fn test_odd_quarter_turns() {
        for k in [3.0, 5.0, 7.0] {
            assert_eq!(classify(k * FRAC_PI_4).unwrap(), AngleClass::T);
        }
        assert_eq!(classify(3.0 * FRAC_PI_2).unwrap(), AngleClass::Clifford);
    }

    #[test]
    fn test_tolerance() {
        assert_eq!(classify(FRAC_PI_4 + 1e-12).unwrap(), AngleClass::T);
        assert_eq!(classify(FRAC_PI_4 + 1e-6).unwrap(), AngleClass::Unknown);
        assert_eq!(classify(TAU - 1e-12).unwrap(), AngleClass::Identity);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            classify(f64::NAN),
            Err(EvalError::AngleOutOfRange { .. })
        ));
        assert!(matches!(
            classify(f64::INFINITY),
            Err(EvalError::AngleOutOfRange { .. })
        ));
    }

    #[test]
    fn test_t_cost() {
        assert_eq!(AngleClass::T.t_cost(), Some(1));
        assert_eq!(AngleClass::Pauli.t_cost(), Some(0));
        assert_eq!(AngleClass::Unknown.t_cost(), None);
    }
}
