//! Inclusive sampling of a closed interval on a fixed step.
//!
//! Grid values are computed as `min + i * step` for a sample count fixed
//! up front, rather than by repeatedly adding `step`, so that the same
//! range always yields the same samples and the endpoint is included
//! whenever it lies on the grid.
use crate::error::{DomainError, Result};
use streaming_iterator::*;

/// Slack on `(max - min) / step` so an endpoint that lies on the grid up
/// to representation error is still sampled.
const GRID_EPSILON: f64 = 1e-9;

/// Largest number of samples a range may produce.
pub const MAX_SAMPLES: usize = 1_000_000;

/// A closed interval `[min, max]` sampled every `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    min: f64,
    max: f64,
    step: f64,
}

impl SampleRange {
    /// Bounds and step must be finite, `step > 0`, `max >= min`, and the
    /// range must hold at most `MAX_SAMPLES` samples.
    pub fn new(min: f64, max: f64, step: f64) -> Result<SampleRange> {
        let finite = min.is_finite() && max.is_finite() && step.is_finite();
        if !finite || step <= 0. || max < min {
            return Err(DomainError::InvalidRange { min, max, step });
        }
        let intervals = (max - min) / step;
        if !intervals.is_finite() || intervals + GRID_EPSILON >= MAX_SAMPLES as f64 {
            return Err(DomainError::InvalidRange { min, max, step });
        }
        Ok(SampleRange { min, max, step })
    }

    /// For ranges known to be valid at compile time.
    pub(crate) const fn unchecked(min: f64, max: f64, step: f64) -> SampleRange {
        SampleRange { min, max, step }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples: `floor((max - min) / step) + 1`.
    pub fn count(&self) -> usize {
        ((self.max - self.min) / self.step + GRID_EPSILON).floor() as usize + 1
    }

    /// The `i`-th grid value.
    pub fn value(&self, i: usize) -> f64 {
        self.min + i as f64 * self.step
    }

    pub fn grid(&self) -> SampleGrid {
        SampleGrid {
            range: *self,
            count: self.count(),
            index: None,
            current: self.min,
        }
    }

    pub fn values(&self) -> Vec<f64> {
        sample(self, |x| x)
    }
}

/// StreamingIterator over the values of a `SampleRange`, in ascending order.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    range: SampleRange,
    count: usize,
    index: Option<usize>,
    current: f64,
}

impl StreamingIterator for SampleGrid {
    type Item = f64;

    fn advance(&mut self) {
        let next = match self.index {
            None => 0,
            Some(i) if i < self.count => i + 1,
            Some(i) => i,
        };
        self.index = Some(next);
        if next < self.count {
            self.current = self.range.value(next);
        }
    }

    fn get(&self) -> Option<&Self::Item> {
        match self.index {
            Some(i) if i < self.count => Some(&self.current),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let consumed = match self.index {
            None => 0,
            Some(i) => i + 1,
        };
        let remaining = self.count.saturating_sub(consumed);
        (remaining, Some(remaining))
    }
}

/// Evaluate `f` at every grid value of `range`.
pub fn sample<T, F>(range: &SampleRange, mut f: F) -> Vec<T>
where
    F: FnMut(f64) -> T,
{
    let mut out = Vec::with_capacity(range.count());
    let mut grid = range.grid();
    while let Some(&x) = grid.next() {
        out.push(f(x));
    }
    out
}
