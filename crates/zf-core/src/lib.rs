//! zf-core: stable foundation for the z-factor workspace.
//!
//! Contains:
//! - error (shared error taxonomy)
//! - numeric (Real + tolerances + float helpers)
//! - units (°F/°R and psig/psia conversions, uom interop)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FailedAttempt, ZfError, ZfResult};
pub use numeric::*;
pub use units::*;
