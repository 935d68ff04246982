//! Secant approximation versus exact slope for a small, closed catalog
//! of functions.

use crate::error::{DomainError, Result};
use crate::grid::{sample, SampleRange};
use crate::CurvePoint;
use log::debug;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Distance beyond each sampled point that `secant_segment` draws.
pub const DEFAULT_SECANT_EXTENSION: f64 = 1.0;

/// Below this gap between secant and exact slope the approximation is
/// considered close.
pub const CLOSE_APPROXIMATION: f64 = 0.01;

/// Selection key into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Quadratic = 0,
    Linear = 1,
    Cubic = 2,
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 3] = [
        FunctionKind::Quadratic,
        FunctionKind::Linear,
        FunctionKind::Cubic,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FunctionKind::Quadratic => "quadratic",
            FunctionKind::Linear => "linear",
            FunctionKind::Cubic => "cubic",
        }
    }

    pub fn spec(&self) -> &'static FunctionSpec {
        catalog().get(*self)
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown function `{0}`, expected one of quadratic, linear, cubic")]
pub struct UnknownFunction(pub String);

impl FromStr for FunctionKind {
    type Err = UnknownFunction;

    fn from_str(s: &str) -> std::result::Result<FunctionKind, UnknownFunction> {
        FunctionKind::ALL
            .iter()
            .find(|k| k.key() == s)
            .copied()
            .ok_or_else(|| UnknownFunction(s.to_string()))
    }
}

/// A function together with its closed-form derivative.
#[derive(Debug, Clone, Copy)]
pub struct FunctionSpec {
    pub kind: FunctionKind,
    /// Display form, e.g. `f(x) = x²`.
    pub name: &'static str,
    pub derivative_formula: &'static str,
    pub evaluate: fn(f64) -> f64,
    pub derivative: fn(f64) -> f64,
}

impl FunctionSpec {
    pub fn value(&self, x: f64) -> f64 {
        (self.evaluate)(x)
    }

    pub fn slope(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }
}

/// The fixed set of functions, indexed by `FunctionKind`.
#[derive(Debug)]
pub struct Catalog {
    specs: [FunctionSpec; 3],
}

fn quadratic(x: f64) -> f64 {
    x * x
}

fn quadratic_slope(x: f64) -> f64 {
    2. * x
}

fn linear(x: f64) -> f64 {
    2. * x + 1.
}

fn linear_slope(_x: f64) -> f64 {
    2.
}

fn cubic(x: f64) -> f64 {
    x * x * x
}

fn cubic_slope(x: f64) -> f64 {
    3. * x * x
}

static CATALOG: Catalog = Catalog {
    specs: [
        FunctionSpec {
            kind: FunctionKind::Quadratic,
            name: "f(x) = x²",
            derivative_formula: "f'(x) = 2x",
            evaluate: quadratic,
            derivative: quadratic_slope,
        },
        FunctionSpec {
            kind: FunctionKind::Linear,
            name: "f(x) = 2x + 1",
            derivative_formula: "f'(x) = 2",
            evaluate: linear,
            derivative: linear_slope,
        },
        FunctionSpec {
            kind: FunctionKind::Cubic,
            name: "f(x) = x³",
            derivative_formula: "f'(x) = 3x²",
            evaluate: cubic,
            derivative: cubic_slope,
        },
    ],
};

pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    pub fn get(&self, kind: FunctionKind) -> &FunctionSpec {
        &self.specs[kind as usize]
    }

    pub fn lookup(&self, key: &str) -> Option<&FunctionSpec> {
        key.parse::<FunctionKind>().ok().map(|k| self.get(k))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|s| s.kind.key())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FunctionSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// How far the secant slope is from the exact one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproximationQuality {
    Close,
    Rough,
}

impl ApproximationQuality {
    pub fn classify(difference: f64) -> ApproximationQuality {
        if difference.abs() < CLOSE_APPROXIMATION {
            ApproximationQuality::Close
        } else {
            ApproximationQuality::Rough
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApproximationQuality::Close => "close",
            ApproximationQuality::Rough => "rough",
        }
    }
}

/// The graph of `spec` over `x_range`.
pub fn sample_function(spec: &FunctionSpec, x_range: &SampleRange) -> Vec<CurvePoint> {
    sample(x_range, |x| CurvePoint::new(x, spec.value(x)))
}

/// Forward-difference slope `(f(x + h) - f(x)) / h`.
pub fn approximate_derivative(spec: &FunctionSpec, x: f64, h: f64) -> Result<f64> {
    if h == 0. {
        return Err(DomainError::ZeroStep);
    }
    Ok((spec.value(x + h) - spec.value(x)) / h)
}

pub fn exact_derivative(spec: &FunctionSpec, x: f64) -> f64 {
    spec.slope(x)
}

/// The tangent at `x`, sampled symmetrically about `x` every `step` out
/// to at most `half_width` on either side. The middle sample is always
/// `(x, f(x))`.
pub fn tangent_segment(
    spec: &FunctionSpec,
    x: f64,
    half_width: f64,
    step: f64,
) -> Result<Vec<CurvePoint>> {
    let offsets = SampleRange::new(0., half_width, step)?;
    let y0 = spec.value(x);
    let slope = exact_derivative(spec, x);
    let n = offsets.count() - 1;
    let mut points = Vec::with_capacity(2 * n + 1);
    for i in (1..=n).rev() {
        let dx = -offsets.value(i);
        points.push(CurvePoint::new(x + dx, y0 + slope * dx));
    }
    points.push(CurvePoint::new(x, y0));
    for i in 1..=n {
        let dx = offsets.value(i);
        points.push(CurvePoint::new(x + dx, y0 + slope * dx));
    }
    Ok(points)
}

/// The secant through `x` and `x + h`, drawn one unit past each end.
pub fn secant_segment(spec: &FunctionSpec, x: f64, h: f64) -> Result<Vec<CurvePoint>> {
    secant_segment_with_extension(spec, x, h, DEFAULT_SECANT_EXTENSION)
}

/// Four points: `x - extension`, `x`, `x + h` and `x + h + extension`,
/// the outer two extrapolated along the secant slope.
pub fn secant_segment_with_extension(
    spec: &FunctionSpec,
    x: f64,
    h: f64,
    extension: f64,
) -> Result<Vec<CurvePoint>> {
    let slope = approximate_derivative(spec, x, h)?;
    let (x1, x2) = (x, x + h);
    let (y1, y2) = (spec.value(x1), spec.value(x2));
    debug!(
        "secant of {} at x={} h={}: slope={}",
        spec.kind, x, h, slope
    );
    Ok(vec![
        CurvePoint::new(x1 - extension, y1 - slope * extension),
        CurvePoint::new(x1, y1),
        CurvePoint::new(x2, y2),
        CurvePoint::new(x2 + extension, y2 + slope * extension),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    fn quad() -> &'static FunctionSpec {
        FunctionKind::Quadratic.spec()
    }

    #[test]
    fn test_catalog_is_stable() {
        let keys: Vec<&str> = catalog().keys().collect();
        assert_eq!(keys, vec!["quadratic", "linear", "cubic"]);
        assert_eq!(catalog().len(), 3);
        assert!(std::ptr::eq(catalog(), catalog()));
        for kind in FunctionKind::ALL.iter() {
            assert_eq!(catalog().get(*kind).kind, *kind);
            let a = catalog().lookup(kind.key()).unwrap();
            let b = catalog().lookup(kind.key()).unwrap();
            assert_eq!(a.value(1.7), b.value(1.7));
            assert_eq!(a.slope(-0.3), b.slope(-0.3));
        }
        assert!(catalog().lookup("sine").is_none());
    }

    #[test]
    fn test_catalog_definitions() {
        let linear = FunctionKind::Linear.spec();
        let cubic = FunctionKind::Cubic.spec();
        assert_eq!(quad().value(3.), 9.);
        assert_eq!(quad().slope(3.), 6.);
        assert_eq!(linear.value(3.), 7.);
        assert_eq!(linear.slope(-100.), 2.);
        assert_eq!(cubic.value(-2.), -8.);
        assert_eq!(cubic.slope(-2.), 12.);
        assert_eq!(quad().name, "f(x) = x²");
        assert_eq!(cubic.derivative_formula, "f'(x) = 3x²");
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("cubic".parse::<FunctionKind>(), Ok(FunctionKind::Cubic));
        assert_eq!(
            "Cubic".parse::<FunctionKind>(),
            Err(UnknownFunction("Cubic".to_string()))
        );
        assert_eq!(FunctionKind::Linear.to_string(), "linear");
    }

    #[test]
    fn test_secant_on_quadratic() {
        let approx = approximate_derivative(quad(), 2., 0.5).unwrap();
        let exact = exact_derivative(quad(), 2.);
        assert_eq!(approx, 4.5);
        assert_eq!(exact, 4.);
        assert_eq!(approx - exact, 0.5);
        assert_eq!(
            ApproximationQuality::classify(approx - exact),
            ApproximationQuality::Rough
        );
    }

    #[test]
    fn test_secant_converges_to_exact() {
        assert_eq!(approximate_derivative(quad(), 2., 1.).unwrap(), 5.);
        let fine = approximate_derivative(quad(), 2., 1e-4).unwrap();
        assert!((fine - 4.0001).abs() < 1e-8);
        assert_eq!(
            ApproximationQuality::classify(fine - 4.),
            ApproximationQuality::Close
        );
        let mut previous = f64::INFINITY;
        for &h in [1., 0.1, 0.01, 0.001].iter() {
            let gap = (approximate_derivative(quad(), 2., h).unwrap() - 4.).abs();
            assert!(gap < previous);
            previous = gap;
        }
    }

    #[test]
    fn test_non_finite_inputs_propagate() {
        assert!(approximate_derivative(quad(), f64::NAN, 0.1)
            .unwrap()
            .is_nan());
        assert!(approximate_derivative(quad(), 1., f64::NAN)
            .unwrap()
            .is_nan());
    }

    #[test]
    fn test_sample_function() {
        let x_range = SampleRange::new(-3., 5., 0.1).unwrap();
        let curve = sample_function(quad(), &x_range);
        assert_eq!(curve.len(), 81);
        assert_eq!(curve[0], CurvePoint::new(-3., 9.));
        assert!((curve[80].x - 5.).abs() < 1e-9);
        assert!((curve[80].y - 25.).abs() < 1e-9);
    }

    #[test]
    fn test_tangent_segment() {
        let tangent = tangent_segment(quad(), 2., 2., 0.1).unwrap();
        assert_eq!(tangent.len(), 41);
        assert_eq!(tangent[20], CurvePoint::new(2., 4.));
        assert!((tangent[0].x - 0.).abs() < 1e-9);
        assert!((tangent[0].y - -4.).abs() < 1e-9);
        assert!((tangent[40].x - 4.).abs() < 1e-9);
        assert!((tangent[40].y - 12.).abs() < 1e-9);
        assert!(tangent.windows(2).all(|p| p[0].x < p[1].x));
        assert!(tangent_segment(quad(), 2., 2., 0.).is_err());
        assert!(tangent_segment(quad(), 2., -1., 0.1).is_err());
        assert!(tangent_segment(quad(), 2., 1e300, 1e-10).is_err());
        assert_eq!(
            tangent_segment(quad(), 3., 0., 0.1).unwrap(),
            vec![CurvePoint::new(3., 9.)]
        );
    }

    #[test]
    fn test_secant_segment_shape() {
        let secant = secant_segment(quad(), 2., 0.5).unwrap();
        assert_eq!(
            secant,
            vec![
                CurvePoint::new(1., -0.5),
                CurvePoint::new(2., 4.),
                CurvePoint::new(2.5, 6.25),
                CurvePoint::new(3.5, 10.75),
            ]
        );
        let wide = secant_segment_with_extension(quad(), 2., 0.5, 2.).unwrap();
        assert_eq!(wide[0], CurvePoint::new(0., -5.));
        assert_eq!(wide[3], CurvePoint::new(4.5, 15.25));
        assert_eq!(secant_segment(quad(), 2., 0.), Err(DomainError::ZeroStep));
    }

    quickcheck! {
        /// A zero step is rejected whatever the function and point.
        fn prop_zero_step_fails(x: f64, which: u8) -> TestResult {
            let kind = FunctionKind::ALL[which as usize % 3];
            TestResult::from_bool(
                approximate_derivative(kind.spec(), x, 0.) == Err(DomainError::ZeroStep)
                    && approximate_derivative(kind.spec(), x, -0.) == Err(DomainError::ZeroStep),
            )
        }

        /// Middle sample of a tangent segment is the point of tangency.
        fn prop_tangent_midpoint(x: i8, half_width: u8, which: u8) -> TestResult {
            let kind = FunctionKind::ALL[which as usize % 3];
            let x = x as f64 / 8.;
            let half_width = half_width as f64 / 32.;
            let tangent = tangent_segment(kind.spec(), x, half_width, 0.1).unwrap();
            if tangent.len() % 2 != 1 {
                return TestResult::failed();
            }
            let mid = tangent[tangent.len() / 2];
            TestResult::from_bool(mid.x == x && mid.y == kind.spec().value(x))
        }
    }
}
