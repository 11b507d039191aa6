//! zf-eos: z-factor correlations for natural gas.
//!
//! Provides:
//! - Three implicit correlations in residual form `f(z, Pr, Tr) = 0`
//!   (Dranchuk–Abou-Kassem, Hall–Yarborough, Londono)
//! - One explicit correlation returning Z directly (Kareem)
//! - `ZModel`, the registry mapping model names to functions and to the
//!   (Tr, Pr) window each correlation was fitted over
//!
//! # Example
//!
//! ```
//! use zf_eos::{ZCorrelation, ZModel};
//!
//! let model: ZModel = "DAK".parse().unwrap();
//! let ZCorrelation::Implicit(residual) = model.correlation() else {
//!     unreachable!()
//! };
//! assert!(residual(0.8593, 1.5, 1.5).abs() < 1e-3);
//! ```

pub mod dak;
pub mod hall_yarborough;
pub mod kareem;
pub mod londono;
pub mod model;

pub use dak::dak;
pub use hall_yarborough::hall_yarborough;
pub use kareem::kareem;
pub use londono::londono;
pub use model::{ValidRange, ZCorrelation, ZModel, get_z_model};
