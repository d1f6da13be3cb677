//! Typed configuration and orchestration front-end for SVM solvers
//!
//! Callers describe what to train through validated configuration types
//! (five SVM formulations, five kernels), hand labeled samples to the
//! [`SVM`] façade, and get back predictions, probability estimates and
//! cross-validation metrics. The numeric optimizer is pluggable: anything
//! implementing [`SvmSolver`] will do.

pub mod api;
pub mod config;
pub mod core;
pub mod probability;
pub mod validation;

// Re-export main types for convenience
pub use crate::api::{Prediction, SVM};
pub use crate::config::{KernelConfig, KernelType, ModelParameters, SolverParams, SvmType};
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::core::{Result, SVMError};
pub use crate::probability::{
    laplace_cumulative, laplace_cumulative_between, laplace_density, laplace_inverse_cumulative,
    laplace_radius, ProbabilityEstimates,
};
pub use crate::validation::Validation;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
