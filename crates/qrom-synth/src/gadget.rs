//! Toffoli gadget library.
//!
//! Every gadget acts on `(t1, t2, t3)` with `t1`, `t2` as controls and `t3` as
//! the target, and takes a [`Sign`] marking which controls are negated. The
//! plain gadget is a bare Toffoli. The start/end pair is the T-count-optimized
//! replacement: a start gadget prepares a fresh ancilla with 4 T gates and
//! the matching end gadget uncomputes it with a Hadamard-basis Toffoli.
//!
//! Start and end gadgets must be paired on the same ancilla in LIFO order.
//! The synthesizers uphold this; nothing here checks it.

use std::fmt;

use qrom_ir::{Circuit, ClbitId, IrResult, QubitId};
use serde::{Deserialize, Serialize};

/// Negated-control flags for a gadget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sign {
    /// Treat `t1` as a negative control.
    pub c1: bool,
    /// Treat `t2` as a negative control.
    pub c2: bool,
}

impl Sign {
    /// Both controls positive.
    pub const POSITIVE: Sign = Sign {
        c1: false,
        c2: false,
    };

    /// Second control negated: used when descending into the `0` branch.
    pub const NEGATE_SECOND: Sign = Sign {
        c1: false,
        c2: true,
    };
}

/// Emit `body` between X gates on every negated control.
pub fn with_sign_flips<F>(
    circuit: &mut Circuit,
    t1: QubitId,
    t2: QubitId,
    sign: Sign,
    body: F,
) -> IrResult<()>
where
    F: FnOnce(&mut Circuit) -> IrResult<()>,
{
    flip(circuit, t1, t2, sign)?;
    body(circuit)?;
    flip(circuit, t1, t2, sign)
}

fn flip(circuit: &mut Circuit, t1: QubitId, t2: QubitId, sign: Sign) -> IrResult<()> {
    if sign.c1 {
        circuit.x(t1)?;
    }
    if sign.c2 {
        circuit.x(t2)?;
    }
    Ok(())
}

/// Plain gadget: a single Toffoli.
pub fn plain_toffoli(
    circuit: &mut Circuit,
    t1: QubitId,
    t2: QubitId,
    t3: QubitId,
    sign: Sign,
) -> IrResult<()> {
    with_sign_flips(circuit, t1, t2, sign, |c| {
        c.ccx(t1, t2, t3)?;
        Ok(())
    })
}

/// Start gadget: reset `t3` and load it with the AND of the controls.
///
/// Leaves `t3` holding the AND up to a relative phase that the matching
/// [`end_toffoli`] absorbs. Costs 4 T gates.
pub fn start_toffoli(
    circuit: &mut Circuit,
    t1: QubitId,
    t2: QubitId,
    t3: QubitId,
    sign: Sign,
) -> IrResult<()> {
    with_sign_flips(circuit, t1, t2, sign, |c| {
        c.reset(t3)?
            .h(t3)?
            .t(t3)?
            .cx(t2, t3)?
            .tdg(t3)?
            .cx(t1, t3)?
            .t(t3)?
            .cx(t2, t3)?
            .tdg(t3)?
            .h(t3)?
            .sdg(t3)?;
        Ok(())
    })
}

/// End gadget: uncompute an ancilla prepared by [`start_toffoli`].
///
/// `t3` is the ancilla being released; it is left in the `|+⟩` state rather
/// than reset. `_meas` is reserved for a measure-and-correct uncompute and
/// is not used.
pub fn end_toffoli(
    circuit: &mut Circuit,
    t1: QubitId,
    t2: QubitId,
    t3: QubitId,
    sign: Sign,
    _meas: ClbitId,
) -> IrResult<()> {
    with_sign_flips(circuit, t1, t2, sign, |c| {
        c.h(t3)?.h(t2)?.ccx(t3, t1, t2)?.h(t2)?;
        Ok(())
    })
}

/// Which gadget family a synthesizer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GadgetPolicy {
    /// Plain Toffolis for both opening and closing levels.
    #[default]
    Plain,
    /// Start gadgets to open and end gadgets to close.
    Succinct,
}

impl GadgetPolicy {
    /// Policy for a `succinct` flag.
    pub fn from_succinct(succinct: bool) -> Self {
        if succinct {
            GadgetPolicy::Succinct
        } else {
            GadgetPolicy::Plain
        }
    }

    /// Classical bits the policy needs allocated.
    pub fn num_clbits(self) -> u32 {
        match self {
            GadgetPolicy::Plain => 0,
            GadgetPolicy::Succinct => 1,
        }
    }

    /// Emit the gadget that opens a level (computes `t3`).
    pub fn open(
        self,
        circuit: &mut Circuit,
        [t1, t2, t3]: [QubitId; 3],
        sign: Sign,
    ) -> IrResult<()> {
        match self {
            GadgetPolicy::Plain => plain_toffoli(circuit, t1, t2, t3, sign),
            GadgetPolicy::Succinct => start_toffoli(circuit, t1, t2, t3, sign),
        }
    }

    /// Emit the gadget that closes a level (uncomputes `t3`).
    pub fn close(
        self,
        circuit: &mut Circuit,
        [t1, t2, t3]: [QubitId; 3],
        sign: Sign,
    ) -> IrResult<()> {
        match self {
            GadgetPolicy::Plain => plain_toffoli(circuit, t1, t2, t3, sign),
            GadgetPolicy::Succinct => end_toffoli(circuit, t1, t2, t3, sign, ClbitId(0)),
        }
    }
}

impl fmt::Display for GadgetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GadgetPolicy::Plain => write!(f, "plain"),
            GadgetPolicy::Succinct => write!(f, "succinct"),
        }
    }
}
