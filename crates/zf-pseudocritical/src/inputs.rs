//! The argument bag shared by every pseudo-critical derivation.

use serde::{Deserialize, Serialize};
use zf_core::{
    Pressure, PressureBasis, Temperature, ZfResult, ensure_finite, ensure_fraction, ensure_positive,
    fahrenheit_to_rankine, to_fahrenheit, to_psia,
};

use crate::args::Arg;

/// Raw inputs and optional overrides for one calculation.
///
/// Every field is optional; which ones are required depends on the
/// operation and on which overrides are present. Temperature is in °F and
/// pressure in psi on the basis given by `pressure_basis` (psia unless
/// stated otherwise).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GasInputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sg: Option<f64>,
    #[serde(rename = "T", skip_serializing_if = "Option::is_none")]
    pub t: Option<f64>,
    #[serde(rename = "P", skip_serializing_if = "Option::is_none")]
    pub p: Option<f64>,
    pub pressure_basis: PressureBasis,
    #[serde(rename = "H2S", skip_serializing_if = "Option::is_none")]
    pub h2s: Option<f64>,
    #[serde(rename = "CO2", skip_serializing_if = "Option::is_none")]
    pub co2: Option<f64>,
    #[serde(rename = "N2", skip_serializing_if = "Option::is_none")]
    pub n2: Option<f64>,
    #[serde(rename = "Tpc", skip_serializing_if = "Option::is_none")]
    pub tpc: Option<f64>,
    #[serde(rename = "Ppc", skip_serializing_if = "Option::is_none")]
    pub ppc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e_correction: Option<f64>,
    #[serde(rename = "Tpc_corrected", skip_serializing_if = "Option::is_none")]
    pub tpc_corrected: Option<f64>,
    #[serde(rename = "Ppc_corrected", skip_serializing_if = "Option::is_none")]
    pub ppc_corrected: Option<f64>,
    #[serde(rename = "J", skip_serializing_if = "Option::is_none")]
    pub j: Option<f64>,
    #[serde(rename = "K", skip_serializing_if = "Option::is_none")]
    pub k: Option<f64>,
    #[serde(rename = "Tr", skip_serializing_if = "Option::is_none")]
    pub tr: Option<f64>,
    #[serde(rename = "Pr", skip_serializing_if = "Option::is_none")]
    pub pr: Option<f64>,
}

macro_rules! setter {
    ($($field:ident),* $(,)?) => {
        $(
            pub fn $field(mut self, value: f64) -> Self {
                self.$field = Some(value);
                self
            }
        )*
    };
}

impl GasInputs {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(
        sg,
        t,
        p,
        h2s,
        co2,
        n2,
        tpc,
        ppc,
        e_correction,
        tpc_corrected,
        ppc_corrected,
        j,
        k,
        tr,
        pr,
    );

    pub fn pressure_basis(mut self, basis: PressureBasis) -> Self {
        self.pressure_basis = basis;
        self
    }

    /// Sets `T` from a unit-carrying temperature.
    pub fn temperature(self, t: Temperature) -> Self {
        self.t(to_fahrenheit(t))
    }

    /// Sets `P` from a unit-carrying pressure. These are always absolute.
    pub fn pressure(self, p: Pressure) -> Self {
        self.p(to_psia(p)).pressure_basis(PressureBasis::Absolute)
    }

    pub fn get(&self, arg: Arg) -> Option<f64> {
        match arg {
            Arg::Sg => self.sg,
            Arg::T => self.t,
            Arg::P => self.p,
            Arg::H2S => self.h2s,
            Arg::CO2 => self.co2,
            Arg::N2 => self.n2,
            Arg::Tpc => self.tpc,
            Arg::Ppc => self.ppc,
            Arg::ECorrection => self.e_correction,
            Arg::TpcCorrected => self.tpc_corrected,
            Arg::PpcCorrected => self.ppc_corrected,
            Arg::J => self.j,
            Arg::K => self.k,
            Arg::Tr => self.tr,
            Arg::Pr => self.pr,
        }
    }

    pub fn set(&mut self, arg: Arg, value: Option<f64>) {
        let slot = match arg {
            Arg::Sg => &mut self.sg,
            Arg::T => &mut self.t,
            Arg::P => &mut self.p,
            Arg::H2S => &mut self.h2s,
            Arg::CO2 => &mut self.co2,
            Arg::N2 => &mut self.n2,
            Arg::Tpc => &mut self.tpc,
            Arg::Ppc => &mut self.ppc,
            Arg::ECorrection => &mut self.e_correction,
            Arg::TpcCorrected => &mut self.tpc_corrected,
            Arg::PpcCorrected => &mut self.ppc_corrected,
            Arg::J => &mut self.j,
            Arg::K => &mut self.k,
            Arg::Tr => &mut self.tr,
            Arg::Pr => &mut self.pr,
        };
        *slot = value;
    }

    pub fn is_supplied(&self, arg: Arg) -> bool {
        self.get(arg).is_some()
    }

    /// Supplied arguments in canonical order.
    pub fn supplied(&self) -> impl Iterator<Item = Arg> + '_ {
        Arg::ALL.into_iter().filter(|&arg| self.is_supplied(arg))
    }

    /// Rejects non-finite values, non-positive specific gravity, mole
    /// fractions outside [0, 1] and temperatures at or below absolute zero.
    pub fn validate(&self) -> ZfResult<()> {
        for arg in self.supplied() {
            let Some(value) = self.get(arg) else {
                continue;
            };
            ensure_finite(value, arg.name())?;
            if arg.is_fraction() {
                ensure_fraction(value, arg.name())?;
            }
        }
        if let Some(sg) = self.sg {
            ensure_positive(sg, Arg::Sg.name())?;
        }
        if let Some(t) = self.t {
            ensure_positive(fahrenheit_to_rankine(t), "absolute temperature")?;
        }
        Ok(())
    }
}
