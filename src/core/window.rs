use crate::core::Observation;
use std::collections::VecDeque;

/// Fixed-capacity FIFO of the most recent observations, oldest first.
///
/// Once `capacity` observations have been pushed the window stays full for
/// good: every further push evicts exactly one observation.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    buffer: VecDeque<Observation>,
    capacity: usize,
    features: usize,
}

impl SlidingWindow {
    /// `capacity` and `features` are validated by [`FilterConfig`](crate::core::FilterConfig);
    /// a zero capacity is bumped to one.
    pub fn new(capacity: usize, features: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
            features,
        }
    }

    /// Stores `obs`, returning the evicted oldest observation when full.
    pub fn push(&mut self, obs: Observation) -> Option<Observation> {
        let evicted = if self.buffer.len() == self.capacity {
            self.buffer.pop_front()
        } else {
            None
        };
        self.buffer.push_back(obs);
        evicted
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Per-feature arithmetic mean of the buffered observations.
    ///
    /// Recomputed on every call in O(W·F). Returns zeros when empty.
    pub fn snapshot_mean(&self) -> Vec<f64> {
        let mut mean = vec![0.0; self.features];
        if self.buffer.is_empty() {
            return mean;
        }
        for obs in &self.buffer {
            for (m, v) in mean.iter_mut().zip(obs.values()) {
                *m += v;
            }
        }
        let n = self.buffer.len() as f64;
        mean.iter_mut().for_each(|m| *m /= n);
        mean
    }

    /// Per feature, whether every buffered observation holds the same value.
    ///
    /// All `true` when empty.
    pub fn flat_features(&self) -> Vec<bool> {
        let mut flat = vec![true; self.features];
        let Some(first) = self.buffer.front() else {
            return flat;
        };
        for obs in self.buffer.iter().skip(1) {
            for ((f, a), b) in flat.iter_mut().zip(first.values()).zip(obs.values()) {
                *f &= a == b;
            }
        }
        flat
    }

    /// Overwrites the most recently pushed observation in place.
    ///
    /// Position in the FIFO is unchanged, so the slot is still evicted
    /// `capacity` pushes after it was filled.
    pub fn replace_newest(&mut self, obs: Observation) {
        if let Some(slot) = self.buffer.back_mut() {
            *slot = obs;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.buffer.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(v: f64) -> Observation {
        Observation::new(vec![v])
    }

    #[test]
    fn fills_without_eviction() {
        let mut w = SlidingWindow::new(3, 1);
        assert!(w.push(obs(1.0)).is_none());
        assert!(w.push(obs(2.0)).is_none());
        assert!(!w.is_full());
        assert!(w.push(obs(3.0)).is_none());
        assert!(w.is_full());
        assert_eq!(w.len(), 3);
    }

    #[test]
    fn evicts_oldest_once_full() {
        let mut w = SlidingWindow::new(2, 1);
        w.push(obs(1.0));
        w.push(obs(2.0));
        assert_eq!(w.push(obs(3.0)), Some(obs(1.0)));
        assert_eq!(w.push(obs(4.0)), Some(obs(2.0)));
        assert_eq!(w.len(), 2);
        assert!(w.is_full());
        let held: Vec<f64> = w.iter().map(|o| o[0]).collect();
        assert_eq!(held, vec![3.0, 4.0]);
    }

    #[test]
    fn flat_features_are_per_feature() {
        let mut w = SlidingWindow::new(3, 2);
        assert_eq!(w.flat_features(), vec![true, true]);
        w.push(Observation::new(vec![1.0, 4.0]));
        w.push(Observation::new(vec![1.0, 5.0]));
        w.push(Observation::new(vec![1.0, 4.0]));
        assert_eq!(w.flat_features(), vec![true, false]);
    }

    #[test]
    fn snapshot_mean_is_per_feature() {
        let mut w = SlidingWindow::new(4, 2);
        w.push(Observation::new(vec![1.0, 10.0]));
        w.push(Observation::new(vec![3.0, 20.0]));
        assert_eq!(w.snapshot_mean(), vec![2.0, 15.0]);
    }

    #[test]
    fn snapshot_mean_of_empty_window_is_zero() {
        let w = SlidingWindow::new(4, 3);
        assert_eq!(w.snapshot_mean(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn replace_newest_keeps_fifo_position() {
        let mut w = SlidingWindow::new(2, 1);
        w.push(obs(1.0));
        w.push(obs(50.0));
        w.replace_newest(obs(1.0));
        assert_eq!(w.push(obs(2.0)), Some(obs(1.0)));
        assert_eq!(w.push(obs(3.0)), Some(obs(1.0)));
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut w = SlidingWindow::new(0, 1);
        assert_eq!(w.capacity(), 1);
        w.push(obs(1.0));
        assert_eq!(w.push(obs(2.0)), Some(obs(1.0)));
    }
}
