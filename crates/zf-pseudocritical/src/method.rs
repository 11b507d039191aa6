//! The pseudo-critical method capability and the name registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zf_core::{ZfError, ZfResult};

use crate::args::Arg;
use crate::inputs::GasInputs;
use crate::piper::{CriticalProperties, Piper};
use crate::props::{Derivation, ReducedProperties};
use crate::sutton::Sutton;

/// What to do when an override is supplied together with an input it would
/// otherwise be derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Fail with `ConflictingArguments`.
    #[default]
    Reject,
    /// Take the override and ignore the redundant inputs.
    PreferOverrides,
}

impl ConflictPolicy {
    pub fn from_ignore_conflict(ignore_conflict: bool) -> Self {
        if ignore_conflict {
            Self::PreferOverrides
        } else {
            Self::Reject
        }
    }
}

/// Common capability of both pseudo-critical methods.
pub trait PseudoCritical: Send + Sync {
    fn method(&self) -> PseudoCriticalMethod;

    /// Arguments this method does not accept at all.
    fn unsupported_args(&self) -> &'static [Arg];

    fn calc_tpc(&self, inputs: &GasInputs, policy: ConflictPolicy) -> ZfResult<Derivation>;

    fn calc_ppc(&self, inputs: &GasInputs, policy: ConflictPolicy) -> ZfResult<Derivation>;

    fn calc_tr(&self, inputs: &GasInputs, policy: ConflictPolicy) -> ZfResult<Derivation>;

    fn calc_pr(&self, inputs: &GasInputs, policy: ConflictPolicy) -> ZfResult<Derivation>;

    /// Resolves Tr then Pr in one pass, attributing conflicts to `calc_z`.
    fn reduced_properties(
        &self,
        inputs: &GasInputs,
        policy: ConflictPolicy,
    ) -> ZfResult<ReducedProperties>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PseudoCriticalMethod {
    Sutton,
    #[default]
    Piper,
}

impl PseudoCriticalMethod {
    pub const ALL: [PseudoCriticalMethod; 2] = [Self::Sutton, Self::Piper];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sutton => "sutton",
            Self::Piper => "piper",
        }
    }

    pub fn valid_names() -> String {
        let names: Vec<String> = Self::ALL.iter().map(|m| format!("\"{}\"", m.name())).collect();
        format!("[{}]", names.join(", "))
    }

    /// Builds the engine for this method. `critical` only affects Piper.
    pub fn engine(self, critical: CriticalProperties) -> Box<dyn PseudoCritical> {
        match self {
            Self::Sutton => Box::new(Sutton),
            Self::Piper => Box::new(Piper::with_critical_properties(critical)),
        }
    }
}

impl FromStr for PseudoCriticalMethod {
    type Err = ZfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| ZfError::UnknownModel {
                kind: "pseudo-critical method",
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

impl TryFrom<String> for PseudoCriticalMethod {
    type Error = ZfError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PseudoCriticalMethod> for &'static str {
    fn from(method: PseudoCriticalMethod) -> Self {
        method.name()
    }
}

impl fmt::Display for PseudoCriticalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!("sutton".parse::<PseudoCriticalMethod>().unwrap(), PseudoCriticalMethod::Sutton);
        assert_eq!("piper".parse::<PseudoCriticalMethod>().unwrap(), PseudoCriticalMethod::Piper);
        assert_eq!(PseudoCriticalMethod::default(), PseudoCriticalMethod::Piper);
    }

    #[test]
    fn unknown_name_lists_choices() {
        let err = "standing".parse::<PseudoCriticalMethod>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("standing"), "{msg}");
        assert!(msg.contains("\"sutton\""), "{msg}");
        assert!(msg.contains("\"piper\""), "{msg}");
    }

    #[test]
    fn engine_reports_its_method() {
        for method in PseudoCriticalMethod::ALL {
            assert_eq!(method.engine(CriticalProperties::default()).method(), method);
        }
    }

    #[test]
    fn conflict_policy_from_flag() {
        assert_eq!(ConflictPolicy::from_ignore_conflict(false), ConflictPolicy::Reject);
        assert_eq!(ConflictPolicy::from_ignore_conflict(true), ConflictPolicy::PreferOverrides);
    }
}
