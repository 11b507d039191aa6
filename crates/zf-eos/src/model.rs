//! Z-factor model registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zf_core::{ZfError, ZfResult};

/// Implicit residual `f(z, Pr, Tr)`.
pub type ResidualFn = fn(f64, f64, f64) -> f64;

/// Explicit closed form `Z(Pr, Tr)`.
pub type ExplicitFn = fn(f64, f64) -> f64;

/// How a model produces Z.
#[derive(Debug, Clone, Copy)]
pub enum ZCorrelation {
    /// Must be solved iteratively for the root of the residual.
    Implicit(ResidualFn),
    /// Evaluated directly.
    Explicit(ExplicitFn),
}

/// Rectangular (Tr, Pr) window a correlation was fitted over.
///
/// Used only to decide whether the explicit model is a trustworthy seed for
/// an implicit solve; nothing is rejected for lying outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidRange {
    pub tr: (f64, f64),
    pub pr: (f64, f64),
}

impl ValidRange {
    pub fn contains(&self, pr: f64, tr: f64) -> bool {
        (self.tr.0..=self.tr.1).contains(&tr) && (self.pr.0..=self.pr.1).contains(&pr)
    }
}

/// Available z-factor correlations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ZModel {
    /// Dranchuk–Abou-Kassem (implicit)
    #[default]
    Dak,
    /// Hall–Yarborough (implicit)
    HallYarborough,
    /// Londono (implicit)
    Londono,
    /// Kareem (explicit)
    Kareem,
}

impl ZModel {
    pub const ALL: [ZModel; 4] = [
        ZModel::Dak,
        ZModel::HallYarborough,
        ZModel::Londono,
        ZModel::Kareem,
    ];

    /// Registry name, as accepted by [`get_z_model`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Dak => "DAK",
            Self::HallYarborough => "hall_yarborough",
            Self::Londono => "londono",
            Self::Kareem => "kareem",
        }
    }

    pub fn correlation(self) -> ZCorrelation {
        match self {
            Self::Dak => ZCorrelation::Implicit(crate::dak),
            Self::HallYarborough => ZCorrelation::Implicit(crate::hall_yarborough),
            Self::Londono => ZCorrelation::Implicit(crate::londono),
            Self::Kareem => ZCorrelation::Explicit(crate::kareem),
        }
    }

    pub fn is_explicit(self) -> bool {
        matches!(self.correlation(), ZCorrelation::Explicit(_))
    }

    pub fn valid_range(self) -> ValidRange {
        match self {
            Self::Dak => ValidRange {
                tr: (1.0, 3.0),
                pr: (0.2, 30.0),
            },
            Self::HallYarborough => ValidRange {
                tr: (1.2, 3.0),
                pr: (0.1, 24.0),
            },
            Self::Londono => ValidRange {
                tr: (1.0, 3.0),
                pr: (0.2, 30.0),
            },
            Self::Kareem => ValidRange {
                tr: (1.15, 3.0),
                pr: (0.2, 15.0),
            },
        }
    }

    /// Registry names formatted for error messages.
    pub fn valid_names() -> String {
        let names: Vec<String> = Self::ALL
            .iter()
            .map(|m| format!("\"{}\"", m.name()))
            .collect();
        format!("[{}]", names.join(", "))
    }
}

/// Look a model up by registry name.
pub fn get_z_model(name: &str) -> ZfResult<ZModel> {
    ZModel::ALL
        .into_iter()
        .find(|m| m.name() == name)
        .ok_or_else(|| ZfError::UnknownModel {
            kind: "z-factor model",
            name: name.to_string(),
            valid: ZModel::valid_names(),
        })
}

impl FromStr for ZModel {
    type Err = ZfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        get_z_model(s)
    }
}

impl TryFrom<String> for ZModel {
    type Error = ZfError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        get_z_model(&value)
    }
}

impl From<ZModel> for &'static str {
    fn from(model: ZModel) -> Self {
        model.name()
    }
}

impl fmt::Display for ZModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
