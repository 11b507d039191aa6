//! Single-request entry points.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;
use zf_core::ZfResult;
use zf_pseudocritical::{Arg, PseudoCriticalProps};
use zf_solver::{ZSolution, solve_z};

use crate::request::ZRequest;

/// Full outcome of one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZReport {
    pub z: f64,
    pub tr: f64,
    pub pr: f64,
    /// Pseudo-critical quantities in the order they were resolved,
    /// including `Tr` and `Pr`.
    pub properties: PseudoCriticalProps,
    pub solution: ZSolution,
}

impl ZReport {
    /// Pseudo-critical fields, then `Tr`, `Pr` and `z`.
    pub fn all_properties(&self) -> IndexMap<&'static str, f64> {
        let mut map: IndexMap<&'static str, f64> = self
            .properties
            .iter()
            .filter(|(arg, _)| !matches!(arg, Arg::Tr | Arg::Pr))
            .map(|(arg, value)| (arg.name(), value))
            .collect();
        map.insert(Arg::Tr.name(), self.tr);
        map.insert(Arg::Pr.name(), self.pr);
        map.insert("z", self.z);
        map
    }
}

/// What `calc` returns, depending on `return_all_properties`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ZOutput {
    Z(f64),
    Properties(IndexMap<&'static str, f64>),
}

impl ZOutput {
    pub fn z(&self) -> Option<f64> {
        match self {
            Self::Z(z) => Some(*z),
            Self::Properties(map) => map.get("z").copied(),
        }
    }
}

/// Resolves Tr and Pr with the requested method and solves for Z.
///
/// When the request already carries both `Tr` and `Pr`, nothing is derived;
/// the method only checks that no conflicting inputs were supplied with
/// them.
pub fn calc_report(request: &ZRequest) -> ZfResult<ZReport> {
    request.validate()?;

    let engine = request.method.engine(request.critical_properties);
    let reduced = engine.reduced_properties(&request.gas, request.conflict_policy())?;
    let solution = solve_z(reduced.pr, reduced.tr, request.model, &request.solve_options())?;

    debug!(
        method = request.method.name(),
        model = request.model.name(),
        tr = reduced.tr,
        pr = reduced.pr,
        z = solution.z,
        "calc_z"
    );

    Ok(ZReport {
        z: solution.z,
        tr: reduced.tr,
        pr: reduced.pr,
        properties: reduced.props,
        solution,
    })
}

pub fn calc(request: &ZRequest) -> ZfResult<ZOutput> {
    let report = calc_report(request)?;
    Ok(if request.return_all_properties {
        ZOutput::Properties(report.all_properties())
    } else {
        ZOutput::Z(report.z)
    })
}

/// Z for one request. `return_all_properties` is ignored; use [`calc`] or
/// [`calc_report`] for the intermediate values.
pub fn calc_z(request: &ZRequest) -> ZfResult<f64> {
    calc_report(request).map(|report| report.z)
}
