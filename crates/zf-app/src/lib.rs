//! Application layer for z-factor calculations.
//!
//! This crate composes the pseudo-critical engines and the Z solver into
//! the entry points used by the CLI and by library callers:
//! - `calc_z` / `calc` / `calc_report` for a single `ZRequest`
//! - `calc_z_batch` for many independent requests in parallel
//! - `compute_chart` for Standing–Katz style Z(Pr) curves
//! - `load_request` for YAML request files

pub mod batch;
pub mod chart;
pub mod error;
pub mod facade;
pub mod request;

pub use batch::{calc_report_batch, calc_z_batch};
pub use chart::{ZChartDefinition, ZCurve, compute_chart};
pub use error::{AppError, AppResult};
pub use facade::{ZOutput, ZReport, calc, calc_report, calc_z};
pub use request::{ZRequest, load_request, parse_request};

pub use zf_core::{PressureBasis, ZfError, ZfResult};
pub use zf_eos::ZModel;
pub use zf_pseudocritical::{CriticalProperties, GasInputs, PseudoCriticalMethod};
pub use zf_solver::{GuessPolicy, NewtonConfig};
