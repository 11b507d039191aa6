//! Piper, McCain & Corredor (1993) mixing rule built on the
//! Stewart–Burkhardt–Voo J and K parameters.

use serde::{Deserialize, Serialize};
use zf_core::{ZfError, ZfResult};

use crate::args::{Arg, Operation};
use crate::inputs::GasInputs;
use crate::method::{ConflictPolicy, PseudoCritical, PseudoCriticalMethod};
use crate::props::{Derivation, ReducedProperties};
use crate::resolve::Resolution;

const J_FROM: &[Arg] = &[Arg::Sg, Arg::H2S, Arg::CO2, Arg::N2];
const K_FROM: &[Arg] = J_FROM;
const TPC_FROM: &[Arg] = &[Arg::Sg, Arg::H2S, Arg::CO2, Arg::N2, Arg::J, Arg::K];
const PPC_FROM: &[Arg] = TPC_FROM;
const TR_FROM: &[Arg] = &[
    Arg::T,
    Arg::Sg,
    Arg::Tpc,
    Arg::H2S,
    Arg::CO2,
    Arg::N2,
    Arg::J,
    Arg::K,
];
const PR_FROM: &[Arg] = &[
    Arg::P,
    Arg::Sg,
    Arg::Ppc,
    Arg::H2S,
    Arg::CO2,
    Arg::N2,
    Arg::J,
    Arg::K,
];

const UNSUPPORTED: &[Arg] = &[Arg::ECorrection, Arg::TpcCorrected, Arg::PpcCorrected];

/// Critical temperatures (°R) and pressures (psia) of the non-hydrocarbon
/// components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CriticalProperties {
    pub tc_h2s: f64,
    pub pc_h2s: f64,
    pub tc_co2: f64,
    pub pc_co2: f64,
    pub tc_n2: f64,
    pub pc_n2: f64,
}

impl Default for CriticalProperties {
    fn default() -> Self {
        Self {
            tc_h2s: 672.3,
            pc_h2s: 1306.0,
            tc_co2: 547.5,
            pc_co2: 1071.0,
            tc_n2: 227.16,
            pc_n2: 492.4,
        }
    }
}

impl CriticalProperties {
    pub fn validate(&self) -> ZfResult<()> {
        let fields = [
            ("tc_h2s", self.tc_h2s),
            ("pc_h2s", self.pc_h2s),
            ("tc_co2", self.tc_co2),
            ("pc_co2", self.pc_co2),
            ("tc_n2", self.tc_n2),
            ("pc_n2", self.pc_n2),
        ];
        for (what, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ZfError::InvalidArg {
                    what,
                    reason: format!("critical property must be positive and finite, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Method B: pseudo-critical properties for gases containing H2S, CO2 and
/// N2.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Piper {
    critical: CriticalProperties,
}

impl Piper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_critical_properties(critical: CriticalProperties) -> Self {
        Self { critical }
    }

    pub fn critical_properties(&self) -> &CriticalProperties {
        &self.critical
    }

    fn begin<'a>(
        &self,
        origin: Operation,
        inputs: &'a GasInputs,
        policy: ConflictPolicy,
    ) -> ZfResult<Resolution<'a>> {
        self.critical.validate()?;
        Resolution::begin(origin, inputs, policy, self.method().name(), UNSUPPORTED)
    }

    fn run(
        &self,
        origin: Operation,
        inputs: &GasInputs,
        policy: ConflictPolicy,
        quantity: fn(&Self, &mut Resolution<'_>) -> ZfResult<f64>,
    ) -> ZfResult<Derivation> {
        let mut r = self.begin(origin, inputs, policy)?;
        let value = quantity(self, &mut r)?;
        Ok(r.finish(value))
    }

    /// Stewart–Burkhardt–Voo J (°R/psia).
    pub fn calc_j(&self, inputs: &GasInputs, policy: ConflictPolicy) -> ZfResult<Derivation> {
        self.run(Operation::CalcJ, inputs, policy, Self::j)
    }

    /// Stewart–Burkhardt–Voo K (°R/psia^0.5).
    pub fn calc_k(&self, inputs: &GasInputs, policy: ConflictPolicy) -> ZfResult<Derivation> {
        self.run(Operation::CalcK, inputs, policy, Self::k)
    }

    fn sg(r: &Resolution<'_>) -> ZfResult<f64> {
        let alternatives = match r.origin() {
            Operation::CalcJ | Operation::CalcK => "'sg'",
            _ => "'sg', or both 'J' and 'K', or both 'Tpc' and 'Ppc' as overrides",
        };
        r.require(Arg::Sg, alternatives)
    }

    fn j(&self, r: &mut Resolution<'_>) -> ZfResult<f64> {
        let c = self.critical;
        r.resolve(Arg::J, J_FROM, |r| {
            let sg = Self::sg(r)?;
            let h2s = r.fraction(Arg::H2S);
            let co2 = r.fraction(Arg::CO2);
            let n2 = r.fraction(Arg::N2);
            Ok(0.11582 - 0.45820 * h2s * (c.tc_h2s / c.pc_h2s)
                - 0.90348 * co2 * (c.tc_co2 / c.pc_co2)
                - 0.66026 * n2 * (c.tc_n2 / c.pc_n2)
                + 0.70729 * sg
                - 0.099397 * sg * sg)
        })
    }

    fn k(&self, r: &mut Resolution<'_>) -> ZfResult<f64> {
        let c = self.critical;
        r.resolve(Arg::K, K_FROM, |r| {
            let sg = Self::sg(r)?;
            let h2s = r.fraction(Arg::H2S);
            let co2 = r.fraction(Arg::CO2);
            let n2 = r.fraction(Arg::N2);
            Ok(3.8216 - 0.06534 * h2s * (c.tc_h2s / c.pc_h2s.sqrt())
                - 0.42113 * co2 * (c.tc_co2 / c.pc_co2.sqrt())
                - 0.91249 * n2 * (c.tc_n2 / c.pc_n2.sqrt())
                + 17.438 * sg
                - 3.2191 * sg * sg)
        })
    }

    fn tpc(&self, r: &mut Resolution<'_>) -> ZfResult<f64> {
        r.resolve(Arg::Tpc, TPC_FROM, |r| {
            let j = self.j(r)?;
            let k = self.k(r)?;
            Ok(k * k / j)
        })
    }

    fn ppc(&self, r: &mut Resolution<'_>) -> ZfResult<f64> {
        r.resolve(Arg::Ppc, PPC_FROM, |r| {
            // A supplied Tpc stands in for K, so only J is derived here.
            let tpc = match r.override_value(Arg::Tpc) {
                Some(tpc) => {
                    r.check_conflicts(Arg::Tpc, &[Arg::K])?;
                    r.record(Arg::Tpc, tpc)
                }
                None => self.tpc(r)?,
            };
            let j = self.j(r)?;
            Ok(tpc / j)
        })
    }

    fn tr(&self, r: &mut Resolution<'_>) -> ZfResult<f64> {
        r.resolve(Arg::Tr, TR_FROM, |r| {
            let t = r.temperature_rankine()?;
            Ok(t / self.tpc(r)?)
        })
    }

    fn pr(&self, r: &mut Resolution<'_>) -> ZfResult<f64> {
        r.resolve(Arg::Pr, PR_FROM, |r| {
            let p = r.pressure_psia()?;
            Ok(p / self.ppc(r)?)
        })
    }
}

impl PseudoCritical for Piper {
    fn method(&self) -> PseudoCriticalMethod {
        PseudoCriticalMethod::Piper
    }

    fn unsupported_args(&self) -> &'static [Arg] {
        UNSUPPORTED
    }

    fn calc_tpc(&self, inputs: &GasInputs, policy: ConflictPolicy) -> ZfResult<Derivation> {
        self.run(Operation::CalcTpc, inputs, policy, Self::tpc)
    }

    fn calc_ppc(&self, inputs: &GasInputs, policy: ConflictPolicy) -> ZfResult<Derivation> {
        self.run(Operation::CalcPpc, inputs, policy, Self::ppc)
    }

    fn calc_tr(&self, inputs: &GasInputs, policy: ConflictPolicy) -> ZfResult<Derivation> {
        self.run(Operation::CalcTr, inputs, policy, Self::tr)
    }

    fn calc_pr(&self, inputs: &GasInputs, policy: ConflictPolicy) -> ZfResult<Derivation> {
        self.run(Operation::CalcPr, inputs, policy, Self::pr)
    }

    fn reduced_properties(
        &self,
        inputs: &GasInputs,
        policy: ConflictPolicy,
    ) -> ZfResult<ReducedProperties> {
        let mut r = self.begin(Operation::CalcZ, inputs, policy)?;
        let tr = self.tr(&mut r)?;
        let pr = self.pr(&mut r)?;
        Ok(ReducedProperties {
            tr,
            pr,
            props: r.into_props(),
        })
    }
}
