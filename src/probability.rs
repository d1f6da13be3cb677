//! Probability-estimate payloads and the Laplace noise model
//!
//! Classification models report one label→probability map per predicted
//! sample. Regression models report a single scale parameter σ: the
//! prediction noise `z` is modeled as a Laplace distribution
//! `p(z) = exp(-|z|/σ) / (2σ)`, so `target = prediction + z` and a
//! confidence interval around the prediction follows from the CDF. The
//! distribution functions are plain standalone utilities; they do not
//! depend on any model.

use crate::core::{Result, SVMError};
use std::collections::BTreeMap;

/// Probability payload of a batch prediction.
#[derive(Clone, Debug, PartialEq)]
pub enum ProbabilityEstimates {
    /// One label→probability map per sample, index-aligned with the
    /// prediction array
    Classification(Vec<BTreeMap<i32, f64>>),
    /// Laplace scale of the noise distribution around the regression
    /// predictions, estimated once per model
    Regression { sigma: f64 },
}

impl ProbabilityEstimates {
    /// Per-sample class probabilities, if this is a classification payload
    pub fn class_probabilities(&self) -> Option<&[BTreeMap<i32, f64>]> {
        match self {
            Self::Classification(maps) => Some(maps),
            Self::Regression { .. } => None,
        }
    }

    /// Noise scale σ, if this is a regression payload
    pub fn sigma(&self) -> Option<f64> {
        match self {
            Self::Regression { sigma } => Some(*sigma),
            Self::Classification(_) => None,
        }
    }
}

/// Laplace density `p(z) = exp(-|z|/σ) / (2σ)` for scale σ > 0.
pub fn laplace_density(z: f64, sigma: f64) -> f64 {
    (-z.abs() / sigma).exp() / (2.0 * sigma)
}

/// Laplace CDF `P(z) = 0.5·(1 + sgn(z)·(1 - exp(-|z|/σ)))` for σ > 0.
pub fn laplace_cumulative(z: f64, sigma: f64) -> f64 {
    // signum(0) differs between conventions, but the factor it scales
    // is 0 at z = 0, so P(0) = 0.5 either way
    0.5 * (1.0 + z.signum() * (1.0 - (-z.abs() / sigma).exp()))
}

/// Probability mass of the noise falling in `[a, b]`: `P(b) − P(a)`.
pub fn laplace_cumulative_between(sigma: f64, a: f64, b: f64) -> f64 {
    laplace_cumulative(b, sigma) - laplace_cumulative(a, sigma)
}

/// Inverse of the Laplace CDF.
///
/// `nonnegative` tells which branch the noise is on: for z ≥ 0 the
/// result is `−σ·ln(2 − 2·pz)`, otherwise `σ·ln(2·pz)`.
pub fn laplace_inverse_cumulative(sigma: f64, pz: f64, nonnegative: bool) -> f64 {
    if nonnegative {
        -sigma * (2.0 - 2.0 * pz).ln()
    } else {
        sigma * (2.0 * pz).ln()
    }
}

/// Radius of the two-sided confidence region: with probability
/// `accuracy`, the noise lies in `[−radius, +radius]`, so the true
/// target lies within ±radius of the prediction.
///
/// The radius is the `1 − (1−accuracy)/2` quantile, leaving mass
/// `(1−accuracy)/2` in each tail. `accuracy` must be in the open
/// interval (0,1).
pub fn laplace_radius(sigma: f64, accuracy: f64) -> Result<f64> {
    if accuracy <= 0.0 || accuracy >= 1.0 {
        return Err(SVMError::InvalidParameter(format!(
            "accuracy must be in (0,1), got: {accuracy}"
        )));
    }
    let pz = 1.0 - (1.0 - accuracy) / 2.0;
    Ok(laplace_inverse_cumulative(sigma, pz, true))
}
