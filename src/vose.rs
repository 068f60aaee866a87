//! Vose's alias method for O(1) sampling from a discrete distribution.

use crate::error::VoseError;
use rand::Rng;

/// Absolute tolerance for the sum-to-1 check on input probabilities.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Index-level alias table: `prob[i]` is the chance of landing on slot `i`
/// directly, `alias[i]` the slot returned otherwise.
#[derive(Debug, Clone)]
pub struct AliasTable {
    prob: Vec<f64>,
    alias: Vec<usize>,
}

impl AliasTable {
    /// Construct an alias table from probabilities summing to 1. O(n).
    ///
    /// The sum is checked against 1 with an absolute tolerance of
    /// [`SUM_TOLERANCE`]; anything outside it (including a non-finite sum)
    /// is rejected as not normalized.
    pub fn from_probabilities(probabilities: &[f64]) -> Result<Self, VoseError> {
        let n = probabilities.len();
        if n == 0 {
            return Err(VoseError::Empty);
        }

        let mut sum = 0.0f64;
        for (i, &p) in probabilities.iter().enumerate() {
            if p < 0.0 {
                return Err(VoseError::Negative { index: i, value: p });
            }
            sum += p;
        }
        if !sum.is_finite() || (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(VoseError::NotNormalized { sum });
        }

        // Scale by n so the weights average 1.
        let mut weights: Vec<f64> = probabilities.iter().map(|&p| p * n as f64).collect();

        let mut prob = vec![0.0f64; n];
        let mut alias = (0..n).collect::<Vec<_>>();

        let mut small = Vec::with_capacity(n);
        let mut large = Vec::with_capacity(n);

        for (i, &w) in weights.iter().enumerate() {
            if w < 1.0 {
                small.push(i);
            } else {
                large.push(i);
            }
        }

        // Pair each underfull slot with an overfull donor. Pop only while
        // both lists are non-empty: a lone pop would drop its index before
        // the drain below could fill the slot.
        while !small.is_empty() && !large.is_empty() {
            let s = small.pop().unwrap();
            let l = large.pop().unwrap();
            prob[s] = weights[s]; // in [0,1)
            alias[s] = l;

            weights[l] -= 1.0 - weights[s];

            if weights[l] < 1.0 - 1e-15 {
                small.push(l);
            } else {
                large.push(l);
            }
        }

        // Leftovers hold exactly 1 each; never trust the accumulated
        // subtraction for them.
        for i in small.into_iter().chain(large.into_iter()) {
            prob[i] = 1.0;
            alias[i] = i;
        }

        Ok(Self { prob, alias })
    }

    /// Draw a single slot index in O(1): one die roll, one coin flip.
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let n = self.prob.len();
        let i = rng.random_range(0..n);
        let u: f64 = rng.random();
        if u < self.prob[i] { i } else { self.alias[i] }
    }

    /// Draw `draws` samples, returning counts per index (useful for checks).
    #[cfg(test)]
    pub fn sample_counts<R: Rng + ?Sized>(&self, rng: &mut R, draws: usize) -> Vec<usize> {
        let mut counts = vec![0usize; self.prob.len()];
        for _ in 0..draws {
            counts[self.sample_index(rng)] += 1;
        }
        counts
    }

    /// Reconstruct the per-slot probabilities the table implies.
    #[cfg(test)]
    pub fn implied(&self) -> Vec<f64> {
        let n = self.prob.len() as f64;
        let mut implied = vec![0.0f64; self.prob.len()];
        for (i, &p) in self.prob.iter().enumerate() {
            implied[i] += p / n;
            if p < 1.0 {
                implied[self.alias[i]] += (1.0 - p) / n;
            }
        }
        implied
    }

    pub fn len(&self) -> usize {
        self.prob.len()
    }
    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use rand_pcg::Pcg32;

    #[test]
    fn rejects_bad_inputs() {
        assert!(matches!(
            AliasTable::from_probabilities(&[]),
            Err(VoseError::Empty)
        ));
        assert!(matches!(
            AliasTable::from_probabilities(&[-0.1, 1.1]),
            Err(VoseError::Negative { index: 0, .. })
        ));
        // Sums to 0.9, not 1.
        assert!(matches!(
            AliasTable::from_probabilities(&[0.4, 0.5]),
            Err(VoseError::NotNormalized { .. })
        ));
        assert!(matches!(
            AliasTable::from_probabilities(&[f64::NAN, 0.5]),
            Err(VoseError::NotNormalized { .. })
        ));
    }

    #[test]
    fn slot_invariants_hold() {
        let mut rng = Pcg32::seed_from_u64(7);
        for n in [1usize, 2, 3, 17, 200] {
            let raw: Vec<f64> = (0..n).map(|_| rng.random::<f64>() + 0.01).collect();
            let total: f64 = raw.iter().sum();
            let probs: Vec<f64> = raw.iter().map(|w| w / total).collect();

            let table = AliasTable::from_probabilities(&probs).unwrap();
            assert_eq!(table.len(), n);
            for i in 0..n {
                let p = table.prob[i];
                assert!((0.0..=1.0).contains(&p), "prob[{i}]={p} out of range");
                if p < 1.0 {
                    assert!(table.alias[i] < n);
                    assert_ne!(table.alias[i], i, "low slot {i} aliases itself");
                }
            }
        }
    }

    #[test]
    fn lone_worklist_drains_to_one() {
        // Sum is 1 - 5e-10 (inside tolerance), so every scaled weight is
        // just under 1 and the pairing loop has nothing to pair: the drain
        // must still fill every slot.
        let shy = 0.5 - 2.5e-10;
        let table = AliasTable::from_probabilities(&[shy, shy]).unwrap();
        assert_eq!(table.prob, vec![1.0, 1.0]);

        // Exact uniform puts every index on the other worklist instead.
        let table = AliasTable::from_probabilities(&[0.25; 4]).unwrap();
        assert_eq!(table.prob, vec![1.0; 4]);
        let mut rng = Pcg32::seed_from_u64(11);
        let counts = table.sample_counts(&mut rng, 4_000);
        for (i, &c) in counts.iter().enumerate() {
            assert!(c > 0, "slot {i} is unreachable");
        }
    }

    #[test]
    fn implied_matches_input() {
        let probs = [0.05, 0.15, 0.3, 0.5];
        let table = AliasTable::from_probabilities(&probs).unwrap();
        for (i, p) in table.implied().into_iter().enumerate() {
            assert!((p - probs[i]).abs() < 1e-9, "slot {i}: {p} vs {}", probs[i]);
        }
    }

    #[test]
    fn singleton_is_exact() {
        let table = AliasTable::from_probabilities(&[1.0]).unwrap();
        assert_eq!(table.prob, vec![1.0]);
        assert_eq!(table.implied(), vec![1.0]);
        let mut rng = rand::rng();
        for _ in 0..1000 {
            assert_eq!(table.sample_index(&mut rng), 0);
        }
    }

    #[test]
    fn roughly_matches_distribution() {
        let probs = [0.1, 0.2, 0.3, 0.4];
        let table = AliasTable::from_probabilities(&probs).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let draws = 40_000usize;
        let counts = table.sample_counts(&mut rng, draws);

        for (i, &c) in counts.iter().enumerate() {
            let emp = c as f64 / draws as f64;
            assert!(
                (emp - probs[i]).abs() < 0.02,
                "i={i} emp={emp} p={}",
                probs[i]
            );
        }
    }
}
