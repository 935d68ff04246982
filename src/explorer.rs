//! Everything a display shows for one set of parameters, recomputed from
//! scratch on every call. Nothing is cached between calls.

use crate::config::{DerivativeConfig, RegressionConfig};
use crate::derivative::{
    approximate_derivative, exact_derivative, sample_function, secant_segment_with_extension,
    tangent_segment, ApproximationQuality, FunctionKind,
};
use crate::error::Result;
use crate::regression::{
    compute_cost, compute_cost_curve, compute_predictions, generate_model_line,
    sum_squared_errors, CostSample, FitQuality, PredictionRow, RegressionParams,
};
use crate::CurvePoint;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct RegressionSnapshot {
    pub params: RegressionParams,
    pub predictions: Vec<PredictionRow>,
    pub sum_squared_errors: f64,
    pub examples: usize,
    pub cost: f64,
    pub fit: FitQuality,
    pub actual_points: Vec<CurvePoint>,
    pub model_line: Vec<CurvePoint>,
    pub cost_curve: Vec<CostSample>,
    /// The current weight's position on `cost_curve`.
    pub current: CostSample,
}

pub fn regression_snapshot(config: &RegressionConfig) -> Result<RegressionSnapshot> {
    let dataset = &config.dataset;
    let params = config.params;
    let cost = compute_cost(dataset, &params)?;
    debug!(
        "regression snapshot: w={} b={} cost={}",
        params.w, params.b, cost
    );
    Ok(RegressionSnapshot {
        params,
        predictions: compute_predictions(dataset, &params)?,
        sum_squared_errors: sum_squared_errors(dataset, &params)?,
        examples: dataset.len(),
        cost,
        fit: FitQuality::classify(cost),
        actual_points: dataset.points(),
        model_line: generate_model_line(&params, &config.x_range),
        cost_curve: compute_cost_curve(dataset, params.b, &config.w_range)?,
        current: CostSample { w: params.w, cost },
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeSnapshot {
    pub function: FunctionKind,
    pub name: &'static str,
    pub derivative_formula: &'static str,
    pub x: f64,
    pub h: f64,
    /// `f(x)`
    pub y1: f64,
    /// `f(x + h)`
    pub y2: f64,
    pub approximate: f64,
    pub exact: f64,
    /// `|approximate - exact|`
    pub difference: f64,
    pub quality: ApproximationQuality,
    pub curve: Vec<CurvePoint>,
    pub tangent: Vec<CurvePoint>,
    pub secant: Vec<CurvePoint>,
}

pub fn derivative_snapshot(config: &DerivativeConfig) -> Result<DerivativeSnapshot> {
    let spec = config.function.spec();
    let (x, h) = (config.x, config.h);
    let approximate = approximate_derivative(spec, x, h)?;
    let exact = exact_derivative(spec, x);
    let difference = (approximate - exact).abs();
    debug!(
        "derivative snapshot: {} x={} h={} secant={} exact={}",
        config.function, x, h, approximate, exact
    );
    Ok(DerivativeSnapshot {
        function: config.function,
        name: spec.name,
        derivative_formula: spec.derivative_formula,
        x,
        h,
        y1: spec.value(x),
        y2: spec.value(x + h),
        approximate,
        exact,
        difference,
        quality: ApproximationQuality::classify(difference),
        curve: sample_function(spec, &config.x_range),
        tangent: tangent_segment(spec, x, config.tangent_half_width, config.tangent_step)?,
        secant: secant_segment_with_extension(spec, x, h, config.secant_extension)?,
    })
}
