//! # numeric-explorers
//! The numeric core of two small teaching explorers: a linear
//! regression cost-function explorer and a derivative explorer
//! comparing a secant approximation to the tangent line.
//!
//! Every operation is a pure function of its inputs; a display layer
//! holds the current parameters and calls back in whenever one changes.
//! Sampled ranges are exposed as StreamingIterators.
#[cfg(test)]
extern crate quickcheck;

use streaming_iterator::*;

pub mod config;
pub mod derivative;
pub mod error;
pub mod explorer;
pub mod export;
pub mod grid;
pub mod regression;
pub mod utils;

pub use error::{DomainError, Result};
pub use grid::{SampleGrid, SampleRange};

/// One sample of a function's graph or of a line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    pub fn new(x: f64, y: f64) -> CurvePoint {
        CurvePoint { x, y }
    }
}

/// Annotate the underlying items with a cost (non-negative f64) as
/// given by a function.
pub struct CostIterable<I, F, T>
where
    I: StreamingIterator<Item = T>,
{
    it: I,
    f: F,
    last: Option<CostResult<T>>,
}

/// Store the cost of a state. Lower costs are better.
#[derive(Debug, Clone, PartialEq)]
pub struct CostResult<T> {
    pub result: T,
    pub cost: f64,
}

pub fn assess<I, F, T>(it: I, f: F) -> CostIterable<I, F, T>
where
    I: StreamingIterator<Item = T>,
    F: FnMut(&I::Item) -> f64,
{
    CostIterable { it, f, last: None }
}

impl<I, F, T> StreamingIterator for CostIterable<I, F, T>
where
    I: StreamingIterator<Item = T>,
    T: Sized + Clone,
    F: FnMut(&T) -> f64,
{
    type Item = CostResult<T>;

    fn advance(&mut self) {
        self.it.advance();
        self.last = match self.it.get() {
            Some(n) => {
                let cost = (self.f)(n);
                Some(CostResult {
                    cost,
                    result: n.clone(),
                })
            }
            None => None,
        }
    }

    fn get(&self) -> Option<&Self::Item> {
        self.last.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

/// Unit Tests Module
#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_assess_annotates_every_item() {
        let range = SampleRange::new(0., 3., 1.).unwrap();
        let mut it = assess(range.grid(), |x| x * x);
        let mut seen = Vec::new();
        while let Some(CostResult { result, cost }) = it.next() {
            seen.push((*result, *cost));
        }
        assert_eq!(seen, vec![(0., 0.), (1., 1.), (2., 4.), (3., 9.)]);
    }

    #[test]
    fn test_assess_empty_after_exhaustion() {
        let range = SampleRange::new(0., 0., 1.).unwrap();
        let mut it = assess(range.grid(), |_| 1.);
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.get().is_none());
    }
}
