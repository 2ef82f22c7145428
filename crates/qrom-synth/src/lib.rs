//! QROM Synthesis
//!
//! Builds quantum read-only memory circuits that, for an address held in an
//! address register, XOR the classical data stored at that address into a
//! target register.
//!
//! The synthesizers walk a binary address tree in counting order. An ancilla
//! chain holds the AND of the root and the address bits decided so far, one
//! ancilla per level. Moving from leaf `step` to `step + 1` closes exactly the
//! levels a binary increment clears (`step.trailing_ones()`), flips one level
//! with a CNOT and reopens the cleared levels, so total gadget work is linear
//! in the number of leaves.
//!
//! # Variants
//!
//! | Variant | Qubits | Sequential steps |
//! |---------|--------|------------------|
//! | [`synthesize_single`] | `2*control + target + 1` | `2^control` |
//! | [`synthesize_dual`] | `target + 4*control` | `2^(control-1)` |
//! | [`synthesize_layered`] | `2*control + target + 1` | `2^control` |
//! | [`synthesize_distributed`] | `1 + 2^(spread+1)*control + target` | `2^control` |
//!
//! The layered variant recurses over the address tree instead of iterating
//! it, and the distributed variant fans the address out into `2^spread`
//! blocks that each run a layered walk under an equality check on the top
//! `spread` bits.
//!
//! Each variant takes a [`GadgetPolicy`]: `Plain` emits a Toffoli per level
//! change, while `Succinct` pairs a 4-T start gadget with a measurement-free
//! end gadget, lowering T-count.
//!
//! # Example
//!
//! ```rust
//! use qrom_synth::{GadgetPolicy, QromConfig, Variant, lower_toffolis};
//!
//! let circuit = QromConfig::new(2, 1)
//!     .with_policy(GadgetPolicy::Succinct)
//!     .with_variant(Variant::Dual)
//!     .with_data("0110")
//!     .synthesize()?;
//! assert_eq!(circuit.num_qubits(), 9);
//!
//! let lowered = lower_toffolis(&circuit)?;
//! assert_eq!(lowered.count("ccx"), 0);
//! # Ok::<(), qrom_synth::SynthError>(())
//! ```

pub mod config;
pub mod cursor;
pub mod data;
pub mod distributed;
pub mod dual;
pub mod error;
pub mod gadget;
pub mod layout;
pub mod lowering;
pub mod qrom;
pub mod select;

pub use config::{QromConfig, Variant};
pub use cursor::{Cursor, Direction, levels_to_close};
pub use data::DataString;
pub use distributed::synthesize_distributed;
pub use dual::synthesize_dual;
pub use error::{SynthError, SynthResult};
pub use gadget::{GadgetPolicy, Sign, end_toffoli, plain_toffoli, start_toffoli, with_sign_flips};
pub use layout::{DistributedLayout, DualLayout, LayeredLayout, SingleLayout};
pub use lowering::{has_toffolis, lower_toffolis, toffoli_network};
pub use qrom::synthesize_single;
pub use select::{synthesize_layered, uniform_layered};
