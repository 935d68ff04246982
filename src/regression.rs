//! Squared-error cost of a one-variable linear model `w * x + b`.
//!
//! The cost is `J(w, b) = (1 / 2m) * sum_i (w * x_i + b - y_i)^2` over the
//! `m` points of a `Dataset`.

use crate::error::{DomainError, Result};
use crate::grid::{sample, SampleRange};
use crate::{assess, CostResult, CurvePoint};
use log::debug;
use ndarray::Array1;
use streaming_iterator::*;

/// Ordered (x, y) pairs, stored as two columns of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    xs: Array1<f64>,
    ys: Array1<f64>,
}

impl Dataset {
    pub fn new(pairs: &[(f64, f64)]) -> Dataset {
        let xs: Vec<f64> = pairs.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = pairs.iter().map(|p| p.1).collect();
        Dataset {
            xs: Array1::from(xs),
            ys: Array1::from(ys),
        }
    }

    pub fn from_columns(xs: Vec<f64>, ys: Vec<f64>) -> Result<Dataset> {
        if xs.len() != ys.len() {
            return Err(DomainError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        Ok(Dataset {
            xs: Array1::from(xs),
            ys: Array1::from(ys),
        })
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &Array1<f64> {
        &self.xs
    }

    pub fn ys(&self) -> &Array1<f64> {
        &self.ys
    }

    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().cloned().zip(self.ys.iter().cloned())
    }

    /// The actual data, as a scatter of points.
    pub fn points(&self) -> Vec<CurvePoint> {
        self.pairs().map(|(x, y)| CurvePoint::new(x, y)).collect()
    }

    fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(DomainError::EmptyDataset)
        } else {
            Ok(())
        }
    }

    fn predict(&self, params: &RegressionParams) -> Array1<f64> {
        self.xs.mapv(|x| params.predict(x))
    }

    fn residuals(&self, params: &RegressionParams) -> Array1<f64> {
        self.predict(params) - &self.ys
    }

    /// Requires a non-empty dataset.
    fn mean_squared_cost(&self, params: &RegressionParams) -> f64 {
        let r = self.residuals(params);
        r.dot(&r) / (2. * self.len() as f64)
    }
}

/// Coefficients of the model `w * x + b`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegressionParams {
    pub w: f64,
    pub b: f64,
}

impl RegressionParams {
    pub fn new(w: f64, b: f64) -> RegressionParams {
        RegressionParams { w, b }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.w * x + self.b
    }
}

/// Prediction and residual for one point of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionRow {
    pub x: f64,
    pub actual: f64,
    pub prediction: f64,
    /// `prediction - actual`
    pub error: f64,
    pub squared_error: f64,
}

/// One point of the cost-vs-weight curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostSample {
    pub w: f64,
    pub cost: f64,
}

impl From<CostResult<f64>> for CostSample {
    fn from(c: CostResult<f64>) -> CostSample {
        CostSample {
            w: c.result,
            cost: c.cost,
        }
    }
}

/// Coarse verdict on a cost value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitQuality {
    Excellent,
    Decent,
    Poor,
}

impl FitQuality {
    pub fn classify(cost: f64) -> FitQuality {
        if cost < 1. {
            FitQuality::Excellent
        } else if cost < 100. {
            FitQuality::Decent
        } else {
            FitQuality::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitQuality::Excellent => "excellent",
            FitQuality::Decent => "decent",
            FitQuality::Poor => "poor",
        }
    }
}

/// Prediction, error and squared error for every point, in dataset order.
pub fn compute_predictions(
    dataset: &Dataset,
    params: &RegressionParams,
) -> Result<Vec<PredictionRow>> {
    dataset.ensure_not_empty()?;
    let predictions = dataset.predict(params);
    let rows = dataset
        .pairs()
        .zip(predictions.iter())
        .map(|((x, actual), &prediction)| {
            let error = prediction - actual;
            PredictionRow {
                x,
                actual,
                prediction,
                error,
                squared_error: error * error,
            }
        })
        .collect();
    Ok(rows)
}

pub fn sum_squared_errors(dataset: &Dataset, params: &RegressionParams) -> Result<f64> {
    dataset.ensure_not_empty()?;
    let r = dataset.residuals(params);
    Ok(r.dot(&r))
}

/// `J(w, b)`: the sum of squared errors over `2 * dataset.len()`.
pub fn compute_cost(dataset: &Dataset, params: &RegressionParams) -> Result<f64> {
    dataset.ensure_not_empty()?;
    Ok(dataset.mean_squared_cost(params))
}

/// Cost at each weight of `w_range`, bias held at `b`, ascending in `w`.
pub fn compute_cost_curve(
    dataset: &Dataset,
    b: f64,
    w_range: &SampleRange,
) -> Result<Vec<CostSample>> {
    dataset.ensure_not_empty()?;
    debug!(
        "sampling cost curve: b={} w in [{}, {}] step {}",
        b,
        w_range.min(),
        w_range.max(),
        w_range.step()
    );
    let mut costs = assess(w_range.grid(), |&w| {
        dataset.mean_squared_cost(&RegressionParams { w, b })
    });
    let mut curve = Vec::with_capacity(w_range.count());
    while let Some(c) = costs.next() {
        curve.push(CostSample::from(c.clone()));
    }
    Ok(curve)
}

/// The model line `y = w * x + b` sampled over `x_range`.
pub fn generate_model_line(
    params: &RegressionParams,
    x_range: &SampleRange,
) -> Vec<CurvePoint> {
    sample(x_range, |x| CurvePoint::new(x, params.predict(x)))
}
