//! Sutton (1985) pseudo-critical correlation with the Wichert–Aziz (1972)
//! acid-gas correction.

use zf_core::ZfResult;

use crate::args::{Arg, Operation};
use crate::inputs::GasInputs;
use crate::method::{ConflictPolicy, PseudoCritical, PseudoCriticalMethod};
use crate::props::{Derivation, ReducedProperties};
use crate::resolve::Resolution;

// Inputs each quantity is derived from. An override of the quantity
// conflicts with any of these.
const TPC_FROM: &[Arg] = &[Arg::Sg];
const PPC_FROM: &[Arg] = &[Arg::Sg];
const E_CORRECTION_FROM: &[Arg] = &[Arg::H2S, Arg::CO2];
const TPC_CORRECTED_FROM: &[Arg] = &[Arg::Sg, Arg::Tpc, Arg::ECorrection, Arg::H2S, Arg::CO2];
// Pressure-side overrides never conflict with Tpc or Tpc_corrected, which
// the temperature side needs regardless.
const PPC_CORRECTED_FROM: &[Arg] = &[Arg::Sg, Arg::Ppc, Arg::ECorrection, Arg::H2S, Arg::CO2];
const TR_FROM: &[Arg] = &[
    Arg::T,
    Arg::TpcCorrected,
    Arg::Sg,
    Arg::Tpc,
    Arg::ECorrection,
    Arg::H2S,
    Arg::CO2,
];
const PR_FROM: &[Arg] = &[
    Arg::P,
    Arg::PpcCorrected,
    Arg::Sg,
    Arg::Ppc,
    Arg::ECorrection,
    Arg::H2S,
    Arg::CO2,
];

// Inputs whose presence means the acid-gas correction must be applied.
const TPC_CORRECTION_TRIGGERS: &[Arg] = &[Arg::ECorrection, Arg::H2S, Arg::CO2];
const PPC_CORRECTION_TRIGGERS: &[Arg] = &[
    Arg::ECorrection,
    Arg::H2S,
    Arg::CO2,
    Arg::Tpc,
    Arg::TpcCorrected,
];

const UNSUPPORTED: &[Arg] = &[Arg::N2, Arg::J, Arg::K];

/// Method A: pseudo-critical properties from specific gravity, corrected
/// for H2S and CO2. Nitrogen is not modelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sutton;

impl Sutton {
    fn begin<'a>(
        &self,
        origin: Operation,
        inputs: &'a GasInputs,
        policy: ConflictPolicy,
    ) -> ZfResult<Resolution<'a>> {
        Resolution::begin(origin, inputs, policy, self.method().name(), UNSUPPORTED)
    }

    fn run(
        &self,
        origin: Operation,
        inputs: &GasInputs,
        policy: ConflictPolicy,
        quantity: fn(&mut Resolution<'_>) -> ZfResult<f64>,
    ) -> ZfResult<Derivation> {
        let mut r = self.begin(origin, inputs, policy)?;
        let value = quantity(&mut r)?;
        Ok(r.finish(value))
    }

    /// Wichert–Aziz temperature correction ε (°R).
    pub fn calc_e_correction(&self, inputs: &GasInputs) -> ZfResult<Derivation> {
        self.run(Operation::CalcECorrection, inputs, ConflictPolicy::Reject, e_correction)
    }

    /// Corrected pseudo-critical temperature T'pc (°R).
    pub fn calc_tpc_corrected(
        &self,
        inputs: &GasInputs,
        policy: ConflictPolicy,
    ) -> ZfResult<Derivation> {
        self.run(Operation::CalcTpcCorrected, inputs, policy, tpc_corrected)
    }

    /// Corrected pseudo-critical pressure P'pc (psia).
    pub fn calc_ppc_corrected(
        &self,
        inputs: &GasInputs,
        policy: ConflictPolicy,
    ) -> ZfResult<Derivation> {
        self.run(Operation::CalcPpcCorrected, inputs, policy, ppc_corrected)
    }
}

impl PseudoCritical for Sutton {
    fn method(&self) -> PseudoCriticalMethod {
        PseudoCriticalMethod::Sutton
    }

    fn unsupported_args(&self) -> &'static [Arg] {
        UNSUPPORTED
    }

    fn calc_tpc(&self, inputs: &GasInputs, policy: ConflictPolicy) -> ZfResult<Derivation> {
        self.run(Operation::CalcTpc, inputs, policy, tpc)
    }

    fn calc_ppc(&self, inputs: &GasInputs, policy: ConflictPolicy) -> ZfResult<Derivation> {
        self.run(Operation::CalcPpc, inputs, policy, ppc)
    }

    fn calc_tr(&self, inputs: &GasInputs, policy: ConflictPolicy) -> ZfResult<Derivation> {
        self.run(Operation::CalcTr, inputs, policy, tr)
    }

    fn calc_pr(&self, inputs: &GasInputs, policy: ConflictPolicy) -> ZfResult<Derivation> {
        self.run(Operation::CalcPr, inputs, policy, pr)
    }

    fn reduced_properties(
        &self,
        inputs: &GasInputs,
        policy: ConflictPolicy,
    ) -> ZfResult<ReducedProperties> {
        let mut r = self.begin(Operation::CalcZ, inputs, policy)?;
        let tr = tr(&mut r)?;
        let pr = pr(&mut r)?;
        Ok(ReducedProperties {
            tr,
            pr,
            props: r.into_props(),
        })
    }
}

fn sg(r: &Resolution<'_>) -> ZfResult<f64> {
    let alternatives = match r.origin() {
        Operation::CalcTpc | Operation::CalcPpc => "'sg'",
        _ => "'sg', or both 'Tpc' and 'Ppc' (or their corrected forms) as overrides",
    };
    r.require(Arg::Sg, alternatives)
}

fn tpc(r: &mut Resolution<'_>) -> ZfResult<f64> {
    r.resolve(Arg::Tpc, TPC_FROM, |r| {
        let sg = sg(r)?;
        Ok(169.2 + 349.5 * sg - 74.0 * sg * sg)
    })
}

fn ppc(r: &mut Resolution<'_>) -> ZfResult<f64> {
    r.resolve(Arg::Ppc, PPC_FROM, |r| {
        let sg = sg(r)?;
        Ok(756.8 - 131.07 * sg - 3.6 * sg * sg)
    })
}

fn e_correction(r: &mut Resolution<'_>) -> ZfResult<f64> {
    r.resolve(Arg::ECorrection, E_CORRECTION_FROM, |r| {
        let h2s = r.fraction(Arg::H2S);
        let a = h2s + r.fraction(Arg::CO2);
        let b = h2s;
        Ok(120.0 * (a.powf(0.9) - a.powf(1.6)) + 15.0 * (b.sqrt() - b.powi(4)))
    })
}

fn tpc_corrected(r: &mut Resolution<'_>) -> ZfResult<f64> {
    r.resolve(Arg::TpcCorrected, TPC_CORRECTED_FROM, |r| {
        let tpc = tpc(r)?;
        if !r.supplied_any(TPC_CORRECTION_TRIGGERS) {
            return Ok(tpc);
        }
        Ok(tpc - e_correction(r)?)
    })
}

fn ppc_corrected(r: &mut Resolution<'_>) -> ZfResult<f64> {
    r.resolve(Arg::PpcCorrected, PPC_CORRECTED_FROM, |r| {
        let ppc = ppc(r)?;
        if !r.supplied_any(PPC_CORRECTION_TRIGGERS) {
            return Ok(ppc);
        }
        let tpc = tpc(r)?;
        let b = r.fraction(Arg::H2S);
        let e = e_correction(r)?;
        let tpc_corrected = tpc_corrected(r)?;
        Ok(ppc * tpc_corrected / (tpc - b * (1.0 - b) * e))
    })
}

fn tr(r: &mut Resolution<'_>) -> ZfResult<f64> {
    r.resolve(Arg::Tr, TR_FROM, |r| {
        let t = r.temperature_rankine()?;
        Ok(t / tpc_corrected(r)?)
    })
}

fn pr(r: &mut Resolution<'_>) -> ZfResult<f64> {
    r.resolve(Arg::Pr, PR_FROM, |r| {
        let p = r.pressure_psia()?;
        Ok(p / ppc_corrected(r)?)
    })
}
