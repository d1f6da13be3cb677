//! Kernel configuration
//!
//! Describes which kernel function the solver should use and its numeric
//! parameters. This is configuration only: the kernel arithmetic itself
//! lives in the solver.

use crate::config::SolverParams;
use crate::core::{Result, SVMError};
use serde::{Deserialize, Serialize};

/// Kernel function tag, matching the classical LIBSVM numbering
/// (`LINEAR=0, POLY=1, RBF=2, SIGMOID=3, PRECOMPUTED=4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KernelType {
    /// `K(x,y) = x·y`
    Linear,
    /// `K(x,y) = (γ·x·y + coef0)^degree`
    Polynomial,
    /// `K(x,y) = exp(-γ·‖x-y‖²)`
    Rbf,
    /// `K(x,y) = tanh(γ·x·y + coef0)`
    Sigmoid,
    /// Kernel values supplied by the caller as a precomputed matrix
    Precomputed,
}

/// Validated kernel configuration.
///
/// Construction fails fast: an out-of-domain parameter is rejected here,
/// never at train time. For the kernels that take γ, a value of 0 tells
/// the solver to use its default of `1/feature_count`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    kind: Kind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
enum Kind {
    Linear,
    Polynomial { gamma: f64, coef0: f64, degree: u32 },
    Rbf { gamma: f64 },
    Sigmoid { gamma: f64, coef0: f64 },
    Precomputed,
}

impl KernelConfig {
    /// Linear kernel, no parameters
    pub fn linear() -> Self {
        Self { kind: Kind::Linear }
    }

    /// RBF (Gaussian) kernel.
    ///
    /// `gamma` must be nonnegative; 0 selects the solver default.
    pub fn rbf(gamma: f64) -> Result<Self> {
        check_gamma(gamma)?;
        Ok(Self {
            kind: Kind::Rbf { gamma },
        })
    }

    /// Sigmoid kernel with coefficient `gamma` and offset `coef0`.
    pub fn sigmoid(gamma: f64, coef0: f64) -> Result<Self> {
        check_gamma(gamma)?;
        Ok(Self {
            kind: Kind::Sigmoid { gamma, coef0 },
        })
    }

    /// Polynomial kernel with coefficient `gamma`, offset `coef0` and
    /// power `degree`. `degree` is unsigned, so d ≥ 0 holds by type.
    pub fn polynomial(gamma: f64, coef0: f64, degree: u32) -> Result<Self> {
        check_gamma(gamma)?;
        Ok(Self {
            kind: Kind::Polynomial {
                gamma,
                coef0,
                degree,
            },
        })
    }

    /// Precomputed kernel: values come with the training data
    pub fn precomputed() -> Self {
        Self {
            kind: Kind::Precomputed,
        }
    }

    /// Which kernel function this configuration selects
    pub fn kernel_type(&self) -> KernelType {
        match self.kind {
            Kind::Linear => KernelType::Linear,
            Kind::Polynomial { .. } => KernelType::Polynomial,
            Kind::Rbf { .. } => KernelType::Rbf,
            Kind::Sigmoid { .. } => KernelType::Sigmoid,
            Kind::Precomputed => KernelType::Precomputed,
        }
    }

    /// γ, for the kernels that have one
    pub fn gamma(&self) -> Option<f64> {
        match self.kind {
            Kind::Polynomial { gamma, .. } | Kind::Rbf { gamma } | Kind::Sigmoid { gamma, .. } => {
                Some(gamma)
            }
            Kind::Linear | Kind::Precomputed => None,
        }
    }

    /// Copy kernel fields into solver-ready parameters. Fields foreign
    /// to the active kernel stay at their neutral values.
    pub(crate) fn configure(&self, params: &mut SolverParams) {
        params.kernel_type = self.kernel_type();
        match self.kind {
            Kind::Linear | Kind::Precomputed => {}
            Kind::Rbf { gamma } => {
                params.gamma = gamma;
            }
            Kind::Sigmoid { gamma, coef0 } => {
                params.gamma = gamma;
                params.coef0 = coef0;
            }
            Kind::Polynomial {
                gamma,
                coef0,
                degree,
            } => {
                params.gamma = gamma;
                params.coef0 = coef0;
                params.degree = degree;
            }
        }
    }
}

impl Default for KernelConfig {
    /// RBF with γ = 0 (solver picks `1/feature_count`)
    fn default() -> Self {
        Self {
            kind: Kind::Rbf { gamma: 0.0 },
        }
    }
}

fn check_gamma(gamma: f64) -> Result<()> {
    if gamma < 0.0 {
        return Err(SVMError::InvalidParameter(format!(
            "gamma must be nonnegative, got: {gamma}"
        )));
    }
    Ok(())
}
