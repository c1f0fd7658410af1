//! Incremental per-feature moments over observations leaving the window.
//!
//! Uses a Welford-style single-pass update anchored on the window mean at
//! eviction time. Count and sum of squared deviations advance immediately;
//! mean and dispersion are returned as a tentative [`MomentUpdate`] that the
//! caller either commits or abandons with [`MomentEstimator::rollback`].

use crate::core::Observation;

/// Mean and dispersion computed by one [`MomentEstimator::update`], not yet
/// applied.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentUpdate {
    pub mean: Vec<f64>,
    pub dispersion: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct MomentEstimator {
    /// Evicted observations incorporated so far.
    count: u64,
    /// Committed running mean.
    mean: Vec<f64>,
    /// Sum of squared deviations (M2).
    sum_sq_dev: Vec<f64>,
    /// Committed dispersion, `sqrt(M2 / n)` as of the last commit.
    dispersion: Vec<f64>,
}

impl MomentEstimator {
    pub fn new(features: usize) -> Self {
        Self {
            count: 0,
            mean: vec![0.0; features],
            sum_sq_dev: vec![0.0; features],
            dispersion: vec![0.0; features],
        }
    }

    /// Folds `evicted` into the count and M2 using `mean_snapshot` as the
    /// reference mean, and returns the resulting mean and dispersion.
    pub fn update(&mut self, evicted: &Observation, mean_snapshot: &[f64]) -> MomentUpdate {
        self.count += 1;
        let n = self.count as f64;

        let mut mean = Vec::with_capacity(mean_snapshot.len());
        let mut dispersion = Vec::with_capacity(mean_snapshot.len());

        for ((&x, &m), s) in evicted
            .values()
            .iter()
            .zip(mean_snapshot)
            .zip(self.sum_sq_dev.iter_mut())
        {
            let delta = x - m;
            let mean_new = m + delta / n;
            let delta2 = x - mean_new;
            // delta and delta2 share a sign, so M2 never decreases
            *s += delta * delta2;
            mean.push(mean_new);
            dispersion.push((*s / n).sqrt());
        }

        MomentUpdate { mean, dispersion }
    }

    /// Makes a tentative update the current mean and dispersion.
    pub fn commit(&mut self, update: MomentUpdate) {
        self.mean = update.mean;
        self.dispersion = update.dispersion;
    }

    /// Undoes the count increment of the last [`update`](Self::update).
    ///
    /// M2, mean and dispersion are left as they are, so this is only
    /// meaningful right after the update it cancels.
    pub fn rollback(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    #[inline]
    pub fn dispersion(&self) -> &[f64] {
        &self.dispersion
    }

    #[inline]
    pub fn sum_sq_dev(&self) -> &[f64] {
        &self.sum_sq_dev
    }

    /// Committed dispersion squared.
    pub fn variance(&self) -> Vec<f64> {
        self.dispersion.iter().map(|d| d * d).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn obs(v: &[f64]) -> Observation {
        Observation::new(v.to_vec())
    }

    #[test]
    fn starts_at_zero() {
        let m = MomentEstimator::new(2);
        assert_eq!(m.count(), 0);
        assert_eq!(m.mean(), &[0.0, 0.0]);
        assert_eq!(m.dispersion(), &[0.0, 0.0]);
        assert_eq!(m.sum_sq_dev(), &[0.0, 0.0]);
    }

    #[test]
    fn first_update_has_zero_spread() {
        let mut m = MomentEstimator::new(1);
        let u = m.update(&obs(&[4.0]), &[2.0]);
        // n = 1: mean_new collapses onto the evicted value
        assert_eq!(m.count(), 1);
        assert!((u.mean[0] - 4.0).abs() < EPS);
        assert_eq!(u.dispersion[0], 0.0);
        assert_eq!(m.sum_sq_dev()[0], 0.0);
    }

    #[test]
    fn update_follows_welford_step() {
        let mut m = MomentEstimator::new(1);
        m.update(&obs(&[1.0]), &[1.0]);
        let u = m.update(&obs(&[3.0]), &[1.0]);

        // n = 2, delta = 2, mean_new = 2, M2 += 2 * 1
        assert!((u.mean[0] - 2.0).abs() < EPS);
        assert!((m.sum_sq_dev()[0] - 2.0).abs() < EPS);
        assert!((u.dispersion[0] - 1.0).abs() < EPS);
    }

    #[test]
    fn update_is_tentative_until_commit() {
        let mut m = MomentEstimator::new(1);
        m.update(&obs(&[1.0]), &[1.0]);
        let u = m.update(&obs(&[3.0]), &[1.0]);
        assert_eq!(m.mean(), &[0.0]);
        assert_eq!(m.dispersion(), &[0.0]);

        m.commit(u);
        assert!((m.mean()[0] - 2.0).abs() < EPS);
        assert!((m.dispersion()[0] - 1.0).abs() < EPS);
        assert!((m.variance()[0] - 1.0).abs() < EPS);
    }

    #[test]
    fn rollback_only_touches_count() {
        let mut m = MomentEstimator::new(1);
        m.update(&obs(&[1.0]), &[1.0]);
        m.update(&obs(&[5.0]), &[1.0]);
        let s_before = m.sum_sq_dev()[0];

        m.rollback();
        assert_eq!(m.count(), 1);
        assert_eq!(m.sum_sq_dev()[0], s_before);
        assert_eq!(m.mean(), &[0.0]);
    }

    #[test]
    fn rollback_saturates_at_zero() {
        let mut m = MomentEstimator::new(1);
        m.rollback();
        assert_eq!(m.count(), 0);
    }

    #[test]
    fn features_are_independent() {
        let mut m = MomentEstimator::new(2);
        m.update(&obs(&[1.0, 100.0]), &[1.0, 100.0]);
        let u = m.update(&obs(&[3.0, 100.0]), &[1.0, 100.0]);
        assert!((u.dispersion[0] - 1.0).abs() < EPS);
        assert_eq!(u.dispersion[1], 0.0);
    }

    #[test]
    fn sum_sq_dev_stays_non_negative() {
        let mut m = MomentEstimator::new(1);
        let points = [3.0, -7.0, 0.5, 12.0, -1.0, 4.0];
        for (i, &x) in points.iter().enumerate() {
            let snapshot = [points[..=i].iter().sum::<f64>() / (i + 1) as f64];
            m.update(&obs(&[x]), &snapshot);
            assert!(m.sum_sq_dev()[0] >= 0.0);
        }
    }
}
