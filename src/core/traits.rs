//! The external-solver boundary and the solver output sink

use crate::config::SolverParams;
use crate::core::{Problem, Result, SparseVector};

/// Sink for the solver's diagnostic output.
///
/// Solvers print convergence traces; where that goes is the caller's
/// decision, injected per façade rather than set process-wide.
pub trait LogSink: Send + Sync {
    /// Receive one line of solver output
    fn print(&self, message: &str);
}

/// The default sink: discards everything (quiet mode).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLog;

impl LogSink for NullLog {
    fn print(&self, _message: &str) {}
}

/// Sink that forwards solver output to the `log` crate at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugLog;

impl LogSink for DebugLog {
    fn print(&self, message: &str) {
        log::debug!(target: "svm_solver", "{message}");
    }
}

/// The external SVM solver.
///
/// The façade treats the optimizer as opaque: it trains models, predicts
/// from them, and partitions cross-validation folds, and nothing else is
/// assumed about it. Models are immutable once trained; prediction is a
/// read-only operation, so a `Model` may be shared across threads.
pub trait SvmSolver {
    /// Trained model produced by this solver, opaque to the façade
    type Model: Send + Sync;

    /// Train a model. Solver errors are propagated unchanged.
    fn train(
        &self,
        problem: &Problem,
        params: &SolverParams,
        log: &dyn LogSink,
    ) -> Result<Self::Model>;

    /// Point prediction for one feature vector
    fn predict(&self, model: &Self::Model, features: &SparseVector) -> f64;

    /// Point prediction plus per-class probability scores (classification
    /// models only). The score array has one entry per class, ordered as
    /// `class_labels`.
    fn predict_with_probability(
        &self,
        model: &Self::Model,
        features: &SparseVector,
    ) -> (f64, Vec<f64>);

    /// Class labels of a classification model, index-aligned with the
    /// score array of `predict_with_probability`
    fn class_labels(&self, model: &Self::Model) -> Vec<i32>;

    /// Laplace scale σ of the noise model of a regression model trained
    /// with probability estimates
    fn svr_probability(&self, model: &Self::Model) -> f64;

    /// Leave-fold-out prediction: one predicted target per sample, in
    /// problem order
    fn cross_validate(
        &self,
        problem: &Problem,
        params: &SolverParams,
        folds: usize,
        log: &dyn LogSink,
    ) -> Result<Vec<f64>>;
}
