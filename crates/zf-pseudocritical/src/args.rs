//! Names of every argument and derived quantity, and of the operations
//! that derive them.

use std::fmt;

use serde::{Serialize, Serializer};

/// An input argument or a derivable quantity.
///
/// Every derived quantity is also an argument, since callers may supply it
/// directly as an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Arg {
    Sg,
    T,
    P,
    H2S,
    CO2,
    N2,
    Tpc,
    Ppc,
    ECorrection,
    TpcCorrected,
    PpcCorrected,
    J,
    K,
    Tr,
    Pr,
}

impl Arg {
    pub const ALL: [Arg; 15] = [
        Arg::Sg,
        Arg::T,
        Arg::P,
        Arg::H2S,
        Arg::CO2,
        Arg::N2,
        Arg::Tpc,
        Arg::Ppc,
        Arg::ECorrection,
        Arg::TpcCorrected,
        Arg::PpcCorrected,
        Arg::J,
        Arg::K,
        Arg::Tr,
        Arg::Pr,
    ];

    /// Keyword name used in messages and serialized maps.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sg => "sg",
            Self::T => "T",
            Self::P => "P",
            Self::H2S => "H2S",
            Self::CO2 => "CO2",
            Self::N2 => "N2",
            Self::Tpc => "Tpc",
            Self::Ppc => "Ppc",
            Self::ECorrection => "e_correction",
            Self::TpcCorrected => "Tpc_corrected",
            Self::PpcCorrected => "Ppc_corrected",
            Self::J => "J",
            Self::K => "K",
            Self::Tr => "Tr",
            Self::Pr => "Pr",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Sg => "specific gravity, dimensionless",
            Self::T => "gas temperature, °F",
            Self::P => "gas pressure, psia",
            Self::H2S => "mole fraction of H2S, dimensionless",
            Self::CO2 => "mole fraction of CO2, dimensionless",
            Self::N2 => "mole fraction of N2, dimensionless",
            Self::Tpc => "pseudo-critical temperature, °R",
            Self::Ppc => "pseudo-critical pressure, psia",
            Self::ECorrection => "temperature-correction factor for acid gases, °R",
            Self::TpcCorrected => "corrected pseudo-critical temperature, °R",
            Self::PpcCorrected => "corrected pseudo-critical pressure, psia",
            Self::J => "Stewart-Burkhardt-Voo parameter J, °R/psia",
            Self::K => "Stewart-Burkhardt-Voo parameter K, °R/psia^0.5",
            Self::Tr => "pseudo-reduced temperature, dimensionless",
            Self::Pr => "pseudo-reduced pressure, dimensionless",
        }
    }

    /// Mole-fraction arguments default to zero when absent.
    pub fn is_fraction(self) -> bool {
        matches!(self, Self::H2S | Self::CO2 | Self::N2)
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Arg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// The operation a caller invoked. Conflict and missing-argument messages
/// always name the outermost operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CalcTpc,
    CalcPpc,
    CalcECorrection,
    CalcTpcCorrected,
    CalcPpcCorrected,
    CalcJ,
    CalcK,
    CalcTr,
    CalcPr,
    CalcZ,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Self::CalcTpc => "calc_Tpc",
            Self::CalcPpc => "calc_Ppc",
            Self::CalcECorrection => "calc_e_correction",
            Self::CalcTpcCorrected => "calc_Tpc_corrected",
            Self::CalcPpcCorrected => "calc_Ppc_corrected",
            Self::CalcJ => "calc_J",
            Self::CalcK => "calc_K",
            Self::CalcTr => "calc_Tr",
            Self::CalcPr => "calc_Pr",
            Self::CalcZ => "calc_z",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
