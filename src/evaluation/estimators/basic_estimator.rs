use crate::evaluation::estimators::Estimator;

/// Streaming mean estimator: `mean = sum / len`.
///
/// NaN inputs are ignored. The estimate is NaN until the first value.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    len: u64,
    sum: f64,
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0 {
            self.sum / self.len as f64
        } else {
            f64::NAN
        }
    }

    #[inline]
    fn len(&self) -> u64 {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_nan() {
        let e = BasicEstimator::default();
        assert!(e.is_empty());
        assert!(e.estimation().is_nan());
    }

    #[test]
    fn averages_and_skips_nan() {
        let mut e = BasicEstimator::default();
        e.add(1.0);
        e.add(f64::NAN);
        e.add(0.0);
        e.add(1.0);
        assert_eq!(e.len(), 3);
        assert!((e.estimation() - 2.0 / 3.0).abs() < 1e-12);
    }
}
