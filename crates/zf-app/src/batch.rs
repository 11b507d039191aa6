//! Parallel evaluation of independent requests.

use rayon::prelude::*;
use tracing::debug;
use zf_core::ZfResult;

use crate::facade::{ZReport, calc_report, calc_z};
use crate::request::ZRequest;

/// Z for every request, in input order. One failure does not affect the
/// others.
pub fn calc_z_batch(requests: &[ZRequest]) -> Vec<ZfResult<f64>> {
    debug!(count = requests.len(), "calc_z_batch");
    requests.par_iter().map(calc_z).collect()
}

pub fn calc_report_batch(requests: &[ZRequest]) -> Vec<ZfResult<ZReport>> {
    requests.par_iter().map(calc_report).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use zf_core::ZfError;
    use zf_eos::ZModel;

    #[test]
    fn batch_matches_sequential_in_order() {
        let requests: Vec<ZRequest> = (1..=40)
            .map(|i| ZRequest::reduced(0.25 * i as f64, 1.2 + 0.02 * i as f64))
            .collect();
        let batch = calc_z_batch(&requests);
        assert_eq!(batch.len(), requests.len());
        for (request, result) in requests.iter().zip(&batch) {
            let expected = calc_z(request).unwrap();
            assert_eq!(result.as_ref().unwrap().to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn failures_stay_in_place() {
        let requests = vec![
            ZRequest::reduced(1.5, 1.5),
            ZRequest::reduced(1.5, 1.5)
                .with_model(ZModel::Kareem)
                .with_guess(0.9),
            ZRequest::reduced(2.0, 1.8),
        ];
        let results = calc_report_batch(&requests);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(ZfError::UnsupportedArgument { .. })));
        assert!(results[2].is_ok());
    }
}
