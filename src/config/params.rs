//! SVM variant configuration and solver-ready parameter derivation
//!
//! `ModelParameters` is the validated, user-facing configuration for the
//! five SVM formulations. `SolverParams` is the flat structure handed to
//! the solver, derived from a `ModelParameters` by a pure transform.

use crate::config::{KernelConfig, KernelType};
use crate::core::{Result, SVMError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// SVM formulation tag, matching the classical LIBSVM numbering
/// (`C_SVC=0, NU_SVC=1, ONE_CLASS=2, EPSILON_SVR=3, NU_SVR=4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SvmType {
    /// C-Support Vector Classification
    CSvc,
    /// ν-Support Vector Classification
    NuSvc,
    /// One-class SVM (distribution estimation)
    OneClass,
    /// ε-Support Vector Regression
    EpsilonSvr,
    /// ν-Support Vector Regression
    NuSvr,
}

impl SvmType {
    /// Whether this formulation predicts a regression target
    pub fn is_regression(self) -> bool {
        matches!(self, SvmType::EpsilonSvr | SvmType::NuSvr)
    }
}

/// Validated SVM configuration: one formulation variant, a kernel, and
/// the shared training knobs.
///
/// The variant is fixed at construction; the variant-specific knobs
/// (cost, ν, ε, class weights) are supplied to the matching constructor
/// and validated there. Shared knobs have builder-style setters that
/// validate immediately and report the offending value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    variant: Variant,
    kernel: KernelConfig,
    cache_size_mb: f64,
    tolerance: f64,
    shrinking: bool,
    probability_estimates: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
enum Variant {
    CSvc {
        cost: f64,
        weights: BTreeMap<i32, f64>,
    },
    NuSvc {
        cost: f64,
        nu: f64,
    },
    OneClass {
        nu: f64,
    },
    EpsilonSvr {
        epsilon: f64,
    },
    NuSvr {
        cost: f64,
        nu: f64,
    },
}

impl ModelParameters {
    fn with_variant(variant: Variant) -> Self {
        Self {
            variant,
            kernel: KernelConfig::default(),
            cache_size_mb: 100.0,
            tolerance: 0.001,
            shrinking: true,
            probability_estimates: false,
        }
    }

    /// C-SVC with cost parameter `C` ∈ (0,+∞)
    pub fn c_svc(cost: f64) -> Result<Self> {
        check_cost(cost)?;
        Ok(Self::with_variant(Variant::CSvc {
            cost,
            weights: BTreeMap::new(),
        }))
    }

    /// C-SVC with per-class cost weights: class `i` trains with
    /// `weight × C`. An empty map means all classes weigh 1.
    pub fn c_svc_weighted(cost: f64, weights: BTreeMap<i32, f64>) -> Result<Self> {
        check_cost(cost)?;
        Ok(Self::with_variant(Variant::CSvc { cost, weights }))
    }

    /// ν-SVC with cost `C` ∈ (0,+∞) and ν ∈ (0,1]
    pub fn nu_svc(cost: f64, nu: f64) -> Result<Self> {
        check_cost(cost)?;
        check_nu(nu)?;
        Ok(Self::with_variant(Variant::NuSvc { cost, nu }))
    }

    /// One-class SVM with ν ∈ (0,1]
    pub fn one_class(nu: f64) -> Result<Self> {
        check_nu(nu)?;
        Ok(Self::with_variant(Variant::OneClass { nu }))
    }

    /// ε-SVR with ε ∈ [0,+∞)
    pub fn epsilon_svr(epsilon: f64) -> Result<Self> {
        if epsilon < 0.0 {
            return Err(SVMError::InvalidParameter(format!(
                "epsilon must be nonnegative, got: {epsilon}"
            )));
        }
        Ok(Self::with_variant(Variant::EpsilonSvr { epsilon }))
    }

    /// ν-SVR with cost `C` ∈ (0,+∞) and ν ∈ (0,1]
    pub fn nu_svr(cost: f64, nu: f64) -> Result<Self> {
        check_cost(cost)?;
        check_nu(nu)?;
        Ok(Self::with_variant(Variant::NuSvr { cost, nu }))
    }

    /// Replace the kernel configuration
    pub fn with_kernel(mut self, kernel: KernelConfig) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set the solver cache size in MB (default 100)
    pub fn with_cache_size(mut self, cache_size_mb: f64) -> Result<Self> {
        if cache_size_mb <= 0.0 {
            return Err(SVMError::InvalidParameter(format!(
                "cache size must be positive, got: {cache_size_mb}"
            )));
        }
        self.cache_size_mb = cache_size_mb;
        Ok(self)
    }

    /// Set the termination tolerance (default 0.001)
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self> {
        if tolerance <= 0.0 {
            return Err(SVMError::InvalidParameter(format!(
                "tolerance must be positive, got: {tolerance}"
            )));
        }
        self.tolerance = tolerance;
        Ok(self)
    }

    /// Enable or disable the shrinking heuristic (default enabled)
    pub fn with_shrinking(mut self, shrinking: bool) -> Self {
        self.shrinking = shrinking;
        self
    }

    /// Enable or disable probability estimation (default disabled).
    ///
    /// One-class SVMs cannot produce probability estimates; enabling the
    /// flag on a one-class configuration fails here, at toggle time.
    pub fn with_probability_estimates(mut self, enabled: bool) -> Result<Self> {
        if enabled && self.svm_type() == SvmType::OneClass {
            return Err(SVMError::InvalidParameter(
                "one-class SVM does not support probability estimates".to_string(),
            ));
        }
        self.probability_estimates = enabled;
        Ok(self)
    }

    /// The SVM formulation this configuration was built for
    pub fn svm_type(&self) -> SvmType {
        match self.variant {
            Variant::CSvc { .. } => SvmType::CSvc,
            Variant::NuSvc { .. } => SvmType::NuSvc,
            Variant::OneClass { .. } => SvmType::OneClass,
            Variant::EpsilonSvr { .. } => SvmType::EpsilonSvr,
            Variant::NuSvr { .. } => SvmType::NuSvr,
        }
    }

    /// The active kernel configuration
    pub fn kernel(&self) -> &KernelConfig {
        &self.kernel
    }

    /// Solver cache size in MB
    pub fn cache_size_mb(&self) -> f64 {
        self.cache_size_mb
    }

    /// Termination tolerance
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Whether the shrinking heuristic is enabled
    pub fn shrinking(&self) -> bool {
        self.shrinking
    }

    /// Whether probability estimation is enabled
    pub fn probability_estimates(&self) -> bool {
        self.probability_estimates
    }

    /// Derive the flat solver-ready parameters.
    ///
    /// Pure transform: shared fields copied verbatim, kernel fields from
    /// the active kernel, variant fields from the active variant. Fields
    /// foreign to the variant stay at their neutral zero values. Class
    /// weights serialize into two parallel arrays in map iteration order
    /// (ascending label); no weights means zero-length arrays, read by
    /// the solver as "all classes weigh 1".
    pub fn solver_params(&self) -> SolverParams {
        let mut params = SolverParams {
            svm_type: self.svm_type(),
            kernel_type: KernelType::Linear,
            degree: 0,
            gamma: 0.0,
            coef0: 0.0,
            cache_size_mb: self.cache_size_mb,
            tolerance: self.tolerance,
            cost: 0.0,
            nu: 0.0,
            epsilon: 0.0,
            shrinking: self.shrinking,
            probability: self.probability_estimates,
            weight_labels: Vec::new(),
            weights: Vec::new(),
        };
        self.kernel.configure(&mut params);
        match &self.variant {
            Variant::CSvc { cost, weights } => {
                params.cost = *cost;
                for (&label, &weight) in weights {
                    params.weight_labels.push(label);
                    params.weights.push(weight);
                }
            }
            Variant::NuSvc { cost, nu } => {
                params.cost = *cost;
                params.nu = *nu;
            }
            Variant::OneClass { nu } => {
                params.nu = *nu;
            }
            Variant::EpsilonSvr { epsilon } => {
                params.epsilon = *epsilon;
            }
            Variant::NuSvr { cost, nu } => {
                params.cost = *cost;
                params.nu = *nu;
            }
        }
        params
    }
}

impl Default for ModelParameters {
    /// C-SVC with cost 1.0 and the default RBF kernel
    fn default() -> Self {
        Self::with_variant(Variant::CSvc {
            cost: 1.0,
            weights: BTreeMap::new(),
        })
    }
}

/// Flat solver-ready parameters, mirroring the classical `svm_parameter`
/// structure. Produced by [`ModelParameters::solver_params`]; solvers
/// read it, the façade never does after derivation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverParams {
    pub svm_type: SvmType,
    pub kernel_type: KernelType,
    /// Degree for the polynomial kernel
    pub degree: u32,
    /// γ for RBF, polynomial and sigmoid kernels; 0 means `1/feature_count`
    pub gamma: f64,
    /// Offset term for polynomial and sigmoid kernels
    pub coef0: f64,
    /// Kernel cache size in MB
    pub cache_size_mb: f64,
    /// Termination tolerance
    pub tolerance: f64,
    /// Cost `C` (C-SVC, ν-SVC, ν-SVR)
    pub cost: f64,
    /// ν (ν-SVC, one-class, ν-SVR)
    pub nu: f64,
    /// ε of the ε-insensitive loss (ε-SVR)
    pub epsilon: f64,
    pub shrinking: bool,
    pub probability: bool,
    /// Class labels with a cost-weight override, aligned with `weights`
    pub weight_labels: Vec<i32>,
    /// Cost multipliers, aligned with `weight_labels`
    pub weights: Vec<f64>,
}

fn check_cost(cost: f64) -> Result<()> {
    if cost <= 0.0 {
        return Err(SVMError::InvalidParameter(format!(
            "cost must be positive, got: {cost}"
        )));
    }
    Ok(())
}

fn check_nu(nu: f64) -> Result<()> {
    if nu <= 0.0 || nu > 1.0 {
        return Err(SVMError::InvalidParameter(format!(
            "nu must be in (0,1], got: {nu}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ModelParameters::default();
        assert_eq!(params.svm_type(), SvmType::CSvc);
        assert_eq!(params.cache_size_mb(), 100.0);
        assert_eq!(params.tolerance(), 0.001);
        assert!(params.shrinking());
        assert!(!params.probability_estimates());
        assert_eq!(params.kernel().kernel_type(), KernelType::Rbf);
    }

    #[test]
    fn test_out_of_domain_values_rejected() {
        assert!(ModelParameters::c_svc(0.0).is_err());
        assert!(ModelParameters::c_svc(-1.0).is_err());
        assert!(ModelParameters::nu_svc(1.0, 0.0).is_err());
        assert!(ModelParameters::nu_svc(1.0, 1.1).is_err());
        assert!(ModelParameters::one_class(-0.5).is_err());
        assert!(ModelParameters::epsilon_svr(-0.1).is_err());
        assert!(ModelParameters::nu_svr(0.0, 0.5).is_err());

        let params = ModelParameters::default();
        assert!(params.clone().with_cache_size(0.0).is_err());
        assert!(params.clone().with_tolerance(-0.001).is_err());
    }

    #[test]
    fn test_boundary_values_accepted() {
        assert!(ModelParameters::nu_svc(1.0, 1.0).is_ok());
        assert!(ModelParameters::epsilon_svr(0.0).is_ok());
        assert!(ModelParameters::one_class(1.0).is_ok());
    }

    #[test]
    fn test_error_message_carries_offending_value() {
        let err = ModelParameters::c_svc(-2.5).unwrap_err();
        assert!(err.to_string().contains("-2.5"));

        let err = ModelParameters::nu_svc(1.0, 1.5).unwrap_err();
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_one_class_rejects_probability_estimates() {
        let params = ModelParameters::one_class(0.5).unwrap();
        assert!(params.with_probability_estimates(true).is_err());
    }

    #[test]
    fn test_other_variants_accept_probability_estimates() {
        for params in [
            ModelParameters::c_svc(1.0).unwrap(),
            ModelParameters::nu_svc(1.0, 0.5).unwrap(),
            ModelParameters::epsilon_svr(0.1).unwrap(),
            ModelParameters::nu_svr(1.0, 0.5).unwrap(),
        ] {
            let params = params.with_probability_estimates(true).unwrap();
            assert!(params.probability_estimates());
        }
    }

    #[test]
    fn test_disabling_probability_on_one_class_is_fine() {
        let params = ModelParameters::one_class(0.5).unwrap();
        assert!(params.with_probability_estimates(false).is_ok());
    }

    #[test]
    fn test_solver_params_for_c_svc() {
        let params = ModelParameters::c_svc(2.0)
            .unwrap()
            .with_kernel(KernelConfig::polynomial(0.5, 1.0, 4).unwrap())
            .with_tolerance(0.01)
            .unwrap();

        let solver = params.solver_params();
        assert_eq!(solver.svm_type, SvmType::CSvc);
        assert_eq!(solver.kernel_type, KernelType::Polynomial);
        assert_eq!(solver.cost, 2.0);
        assert_eq!(solver.gamma, 0.5);
        assert_eq!(solver.coef0, 1.0);
        assert_eq!(solver.degree, 4);
        assert_eq!(solver.tolerance, 0.01);
        assert_eq!(solver.nu, 0.0);
        assert_eq!(solver.epsilon, 0.0);
        assert!(solver.weight_labels.is_empty());
        assert!(solver.weights.is_empty());
    }

    #[test]
    fn test_solver_params_weights_in_label_order() {
        let mut weights = BTreeMap::new();
        weights.insert(3, 0.5);
        weights.insert(-1, 2.0);
        weights.insert(1, 1.5);

        let solver = ModelParameters::c_svc_weighted(1.0, weights)
            .unwrap()
            .solver_params();
        assert_eq!(solver.weight_labels, vec![-1, 1, 3]);
        assert_eq!(solver.weights, vec![2.0, 1.5, 0.5]);
    }

    #[test]
    fn test_solver_params_for_regression_variants() {
        let solver = ModelParameters::epsilon_svr(0.2).unwrap().solver_params();
        assert_eq!(solver.svm_type, SvmType::EpsilonSvr);
        assert_eq!(solver.epsilon, 0.2);
        assert_eq!(solver.cost, 0.0);

        let solver = ModelParameters::nu_svr(3.0, 0.25).unwrap().solver_params();
        assert_eq!(solver.svm_type, SvmType::NuSvr);
        assert_eq!(solver.cost, 3.0);
        assert_eq!(solver.nu, 0.25);
        assert_eq!(solver.epsilon, 0.0);
    }

    #[test]
    fn test_svm_type_regression_split() {
        assert!(SvmType::EpsilonSvr.is_regression());
        assert!(SvmType::NuSvr.is_regression());
        assert!(!SvmType::CSvc.is_regression());
        assert!(!SvmType::NuSvc.is_regression());
        assert!(!SvmType::OneClass.is_regression());
    }
}
