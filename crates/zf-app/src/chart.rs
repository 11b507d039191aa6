//! Z-factor chart data: one Z(Pr) curve per reduced temperature.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zf_core::{ZfError, ZfResult};
use zf_eos::ZModel;
use zf_solver::{ZSolveOptions, solve_z};

/// Grid of a Standing–Katz style chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZChartDefinition {
    pub model: ZModel,
    pub tr_values: Vec<f64>,
    pub pr_start: f64,
    pub pr_end: f64,
    pub pr_points: usize,
}

impl Default for ZChartDefinition {
    fn default() -> Self {
        let mut tr_values = vec![1.05];
        tr_values.extend((0..20).map(|i| 1.1 + 0.1 * i as f64));
        Self {
            model: ZModel::default(),
            tr_values,
            pr_start: 0.0,
            pr_end: 8.0,
            pr_points: 81,
        }
    }
}

impl ZChartDefinition {
    pub fn pr_values(&self) -> Vec<f64> {
        match self.pr_points {
            0 => Vec::new(),
            1 => vec![self.pr_start],
            n => {
                let step = (self.pr_end - self.pr_start) / (n - 1) as f64;
                (0..n).map(|i| self.pr_start + step * i as f64).collect()
            }
        }
    }

    pub fn validate(&self) -> ZfResult<()> {
        if !(self.pr_start.is_finite() && self.pr_end.is_finite()) {
            return Err(ZfError::InvalidArg {
                what: "pr range",
                reason: "bounds must be finite".into(),
            });
        }
        if self.pr_start < 0.0 || self.pr_end < self.pr_start {
            return Err(ZfError::InvalidArg {
                what: "pr range",
                reason: format!(
                    "expected 0 <= pr_start <= pr_end, got {}..{}",
                    self.pr_start, self.pr_end
                ),
            });
        }
        if let Some(tr) = self.tr_values.iter().find(|tr| !(tr.is_finite() && **tr > 0.0)) {
            return Err(ZfError::InvalidArg {
                what: "tr_values",
                reason: format!("reduced temperature must be positive, got {tr}"),
            });
        }
        Ok(())
    }
}

/// Z along one isotherm. Points that failed to converge are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZCurve {
    pub tr: f64,
    pub pr: Vec<f64>,
    pub z: Vec<Option<f64>>,
}

impl ZCurve {
    pub fn failed_points(&self) -> usize {
        self.z.iter().filter(|z| z.is_none()).count()
    }
}

/// Computes every curve of `definition`, isotherms in parallel.
pub fn compute_chart(definition: &ZChartDefinition) -> ZfResult<Vec<ZCurve>> {
    definition.validate()?;
    let pr_values = definition.pr_values();
    let options = ZSolveOptions::default();

    let curves: Vec<ZCurve> = definition
        .tr_values
        .par_iter()
        .map(|&tr| {
            let z = pr_values
                .iter()
                .map(|&pr| solve_z(pr, tr, definition.model, &options).ok().map(|s| s.z))
                .collect();
            ZCurve {
                tr,
                pr: pr_values.clone(),
                z,
            }
        })
        .collect();

    debug!(
        model = definition.model.name(),
        curves = curves.len(),
        failed = curves.iter().map(ZCurve::failed_points).sum::<usize>(),
        "computed z-factor chart"
    );
    Ok(curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zf_core::{Tolerances, nearly_equal};

    #[test]
    fn default_grid() {
        let def = ZChartDefinition::default();
        assert_eq!(def.tr_values.len(), 21);
        assert_eq!(def.tr_values[0], 1.05);
        assert!(nearly_equal(def.tr_values[20], 3.0, Tolerances::default()));
        let pr = def.pr_values();
        assert_eq!(pr.len(), 81);
        assert!(nearly_equal(pr[1], 0.1, Tolerances::default()));
        assert!(nearly_equal(pr[80], 8.0, Tolerances::default()));
    }

    #[test]
    fn curves_start_at_ideal_gas() {
        let def = ZChartDefinition {
            tr_values: vec![1.3, 2.0],
            pr_end: 4.0,
            pr_points: 9,
            ..ZChartDefinition::default()
        };
        let curves = compute_chart(&def).unwrap();
        assert_eq!(curves.len(), 2);
        for curve in &curves {
            assert_eq!(curve.z[0], Some(1.0));
            assert_eq!(curve.failed_points(), 0);
            assert_eq!(curve.pr.len(), 9);
        }
        // Z drops faster on the colder isotherm.
        assert!(curves[0].z[4].unwrap() < curves[1].z[4].unwrap());
    }

    #[test]
    fn invalid_range_is_rejected() {
        let def = ZChartDefinition {
            pr_start: 5.0,
            pr_end: 1.0,
            ..ZChartDefinition::default()
        };
        assert!(matches!(compute_chart(&def), Err(ZfError::InvalidArg { .. })));
    }
}
