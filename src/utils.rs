use crate::error::{DomainError, Result};
use crate::grid::SampleRange;
use crate::regression::{Dataset, RegressionParams};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg64;

/// Four houses: square feet against price.
pub fn house_prices() -> Dataset {
    Dataset::new(&[(100., 1.), (200., 2.), (300., 3.), (400., 4.)])
}

/// Points on the line `params` at every grid value of `x_range`, with
/// Gaussian noise of standard deviation `sigma` added to each y. The
/// same seed always produces the same dataset.
pub fn generate_linear_dataset(
    x_range: &SampleRange,
    params: &RegressionParams,
    sigma: f64,
    seed: u64,
) -> Result<Dataset> {
    if !(sigma.is_finite() && sigma >= 0.) {
        return Err(DomainError::InvalidNoise { sigma });
    }
    let noise = Normal::new(0., sigma).map_err(|_| DomainError::InvalidNoise { sigma })?;
    let mut rng = Pcg64::seed_from_u64(seed);
    let xs = x_range.values();
    let ys = xs
        .iter()
        .map(|&x| params.predict(x) + noise.sample(&mut rng))
        .collect();
    Dataset::from_columns(xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regression::{compute_cost, compute_cost_curve};

    #[test]
    fn test_seeded_dataset_is_reproducible() {
        let x_range = SampleRange::new(0., 10., 0.5).unwrap();
        let params = RegressionParams::new(3., -1.);
        let a = generate_linear_dataset(&x_range, &params, 0.5, 7).unwrap();
        let b = generate_linear_dataset(&x_range, &params, 0.5, 7).unwrap();
        let c = generate_linear_dataset(&x_range, &params, 0.5, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 21);
    }

    #[test]
    fn test_noiseless_dataset_lies_on_line() {
        let x_range = SampleRange::new(-5., 5., 1.).unwrap();
        let params = RegressionParams::new(0.5, 2.);
        let d = generate_linear_dataset(&x_range, &params, 0., 1).unwrap();
        assert_eq!(compute_cost(&d, &params).unwrap(), 0.);
    }

    #[test]
    fn test_cost_curve_bottoms_out_near_true_weight() {
        let x_range = SampleRange::new(0., 20., 0.25).unwrap();
        let params = RegressionParams::new(1.5, 0.);
        let d = generate_linear_dataset(&x_range, &params, 0.2, 42).unwrap();
        let w_range = SampleRange::new(0., 3., 0.01).unwrap();
        let curve = compute_cost_curve(&d, 0., &w_range).unwrap();
        let best = curve
            .iter()
            .cloned()
            .fold(curve[0], |a, c| if c.cost < a.cost { c } else { a });
        assert!((best.w - 1.5).abs() < 0.05, "best w was {}", best.w);
    }

    #[test]
    fn test_rejects_negative_sigma() {
        let x_range = SampleRange::new(0., 1., 0.5).unwrap();
        let params = RegressionParams::default();
        assert_eq!(
            generate_linear_dataset(&x_range, &params, -1., 0),
            Err(DomainError::InvalidNoise { sigma: -1. })
        );
    }
}
