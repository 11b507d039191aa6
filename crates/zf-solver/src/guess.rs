//! Initial-guess selection for implicit Z correlations.

use serde::{Deserialize, Serialize};

/// Fallback guesses tried after the primary guess.
pub const LADDER: [f64; 10] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

/// Chooses the primary guess when the caller does not supply one.
///
/// Above `pr_threshold` the Z surface moves well away from unity, so the
/// high-pressure guess is used instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuessPolicy {
    pub low_pressure_guess: f64,
    pub high_pressure_guess: f64,
    pub pr_threshold: f64,
}

impl Default for GuessPolicy {
    fn default() -> Self {
        Self {
            low_pressure_guess: 0.9,
            high_pressure_guess: 2.0,
            pr_threshold: 15.0,
        }
    }
}

impl GuessPolicy {
    pub fn primary_guess(&self, pr: f64) -> f64 {
        if pr < self.pr_threshold {
            self.low_pressure_guess
        } else {
            self.high_pressure_guess
        }
    }
}

/// Ordered, duplicate-free list of initial guesses: `smart` (if any), then
/// `primary`, then `LADDER` sorted by distance from `primary`. Ties keep
/// ladder order.
pub fn guess_ladder(primary: f64, smart: Option<f64>) -> Vec<f64> {
    let mut fallback = LADDER;
    fallback.sort_by(|a, b| (a - primary).abs().total_cmp(&(b - primary).abs()));

    let mut guesses: Vec<f64> = Vec::with_capacity(LADDER.len() + 2);
    for g in smart.into_iter().chain([primary]).chain(fallback) {
        if !guesses.contains(&g) {
            guesses.push(g);
        }
    }
    guesses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_primary_guess_depends_on_pressure() {
        let policy = GuessPolicy::default();
        assert_eq!(policy.primary_guess(3.0), 0.9);
        assert_eq!(policy.primary_guess(14.999), 0.9);
        assert_eq!(policy.primary_guess(15.0), 2.0);
        assert_eq!(policy.primary_guess(25.0), 2.0);
    }

    #[test]
    fn ladder_for_default_guess() {
        assert_eq!(
            guess_ladder(0.9, None),
            vec![0.9, 0.8, 1.0, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1]
        );
    }

    #[test]
    fn ladder_for_high_pressure_guess() {
        assert_eq!(
            guess_ladder(2.0, None),
            vec![2.0, 1.0, 0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.1]
        );
    }

    #[test]
    fn smart_seed_comes_first() {
        let guesses = guess_ladder(0.9, Some(0.861));
        assert_eq!(guesses[0], 0.861);
        assert_eq!(guesses[1], 0.9);
        assert_eq!(guesses.len(), 11);
    }

    #[test]
    fn smart_seed_equal_to_primary_is_deduplicated() {
        let guesses = guess_ladder(0.5, Some(0.5));
        assert_eq!(guesses.len(), 10);
        assert_eq!(guesses[0], 0.5);
    }

    #[test]
    fn ties_keep_ladder_order() {
        // 0.2 and 0.3 are (nearly) equidistant from 0.25.
        let guesses = guess_ladder(0.25, None);
        assert_eq!(guesses[0], 0.25);
        assert!(guesses[1] == 0.2 || guesses[1] == 0.3);
        assert_eq!(guesses.len(), 11);
    }
}
