//! A complete z-factor request: gas inputs plus method, model and solver
//! options.

use std::path::Path;

use serde::{Deserialize, Serialize};
use zf_core::{ZfError, ZfResult};
use zf_eos::ZModel;
use zf_pseudocritical::{ConflictPolicy, CriticalProperties, GasInputs, PseudoCriticalMethod};
use zf_solver::{GuessPolicy, NewtonConfig, ZSolveOptions};

use crate::error::{AppError, AppResult};

/// Everything `calc_z` needs for one evaluation.
///
/// Solver options (`guess`, `newton`, `smart_guess`, `guess_policy`) only
/// apply to implicit models and are rejected for explicit ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZRequest {
    pub gas: GasInputs,
    pub method: PseudoCriticalMethod,
    pub model: ZModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newton: Option<NewtonConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_guess: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess_policy: Option<GuessPolicy>,
    pub return_all_properties: bool,
    pub ignore_conflict: bool,
    pub critical_properties: CriticalProperties,
}

impl ZRequest {
    pub fn new(gas: GasInputs) -> Self {
        Self {
            gas,
            ..Self::default()
        }
    }

    /// Request for known reduced properties; no pseudo-critical derivation
    /// takes place.
    pub fn reduced(pr: f64, tr: f64) -> Self {
        Self::new(GasInputs::new().pr(pr).tr(tr))
    }

    pub fn with_method(mut self, method: PseudoCriticalMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_model(mut self, model: ZModel) -> Self {
        self.model = model;
        self
    }

    pub fn with_guess(mut self, guess: f64) -> Self {
        self.guess = Some(guess);
        self
    }

    pub fn with_newton(mut self, newton: NewtonConfig) -> Self {
        self.newton = Some(newton);
        self
    }

    pub fn with_smart_guess(mut self, enabled: bool) -> Self {
        self.smart_guess = Some(enabled);
        self
    }

    pub fn with_guess_policy(mut self, policy: GuessPolicy) -> Self {
        self.guess_policy = Some(policy);
        self
    }

    pub fn with_critical_properties(mut self, critical: CriticalProperties) -> Self {
        self.critical_properties = critical;
        self
    }

    pub fn return_all_properties(mut self, yes: bool) -> Self {
        self.return_all_properties = yes;
        self
    }

    pub fn ignore_conflict(mut self, yes: bool) -> Self {
        self.ignore_conflict = yes;
        self
    }

    pub fn conflict_policy(&self) -> ConflictPolicy {
        ConflictPolicy::from_ignore_conflict(self.ignore_conflict)
    }

    /// Rejects solver options on explicit models.
    pub fn validate(&self) -> ZfResult<()> {
        if !self.model.is_explicit() {
            return Ok(());
        }
        let reserved = [
            ("guess", self.guess.is_some()),
            ("newton", self.newton.is_some()),
            ("smart_guess", self.smart_guess.is_some()),
            ("guess_policy", self.guess_policy.is_some()),
        ];
        match reserved.into_iter().find(|(_, supplied)| *supplied) {
            Some((argument, _)) => Err(ZfError::UnsupportedArgument {
                argument,
                context: format!(
                    "model \"{}\" is explicit and takes no solver options",
                    self.model
                ),
            }),
            None => Ok(()),
        }
    }

    pub fn solve_options(&self) -> ZSolveOptions {
        ZSolveOptions {
            guess: self.guess,
            newton: self.newton.unwrap_or_default(),
            smart_guess: self.smart_guess.unwrap_or(true),
            policy: self.guess_policy.unwrap_or_default(),
        }
    }
}

pub fn parse_request(yaml: &str) -> AppResult<ZRequest> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Loads a `ZRequest` from a YAML file.
pub fn load_request(path: &Path) -> AppResult<ZRequest> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::RequestFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_request(&content)
}
