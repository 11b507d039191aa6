//! zf-pseudocritical: pseudo-critical and pseudo-reduced gas properties.
//!
//! Provides:
//! - `Sutton`: specific-gravity correlation with the Wichert–Aziz acid-gas
//!   correction (H2S, CO2)
//! - `Piper`: Piper–McCain–Corredor mixing rule (H2S, CO2, N2)
//! - `GasInputs`: the argument bag every derivation reads from, holding raw
//!   composition/state inputs and optional overrides for any quantity
//! - `PseudoCriticalProps`: the ordered map of every quantity resolved
//!   during one call
//!
//! # Overrides and conflicts
//!
//! Every quantity is resolved as "override if supplied, else derive, else
//! fail with `MissingArgument`". Supplying an override together with an
//! input it would otherwise be derived from is a `ConflictingArguments`
//! error unless `ConflictPolicy::PreferOverrides` is chosen. The argument
//! set checked is always that of the operation the caller invoked, not of
//! the nested helper that happens to be running.
//!
//! # Example
//!
//! ```
//! use zf_pseudocritical::{ConflictPolicy, GasInputs, PseudoCritical, Sutton};
//!
//! let inputs = GasInputs::new().sg(0.7).t(75.0).p(2010.0).h2s(0.07).co2(0.1);
//! let reduced = Sutton.reduced_properties(&inputs, ConflictPolicy::Reject).unwrap();
//! assert!((reduced.pr - 3.1995).abs() < 1e-3);
//! assert!((reduced.tr - 1.5006).abs() < 1e-3);
//! ```

pub mod args;
pub mod inputs;
pub mod method;
pub mod piper;
pub mod props;
mod resolve;
pub mod sutton;

pub use args::{Arg, Operation};
pub use inputs::GasInputs;
pub use method::{ConflictPolicy, PseudoCritical, PseudoCriticalMethod};
pub use piper::{CriticalProperties, Piper};
pub use props::{Derivation, PseudoCriticalProps, ReducedProperties};
pub use sutton::Sutton;
