//! High-level façade over an external SVM solver
//!
//! [`SVM`] ties a validated [`ModelParameters`] configuration to a
//! solver implementing [`SvmSolver`] and orchestrates the three core
//! flows: training, (batch) prediction with optional probability
//! estimates, and k-fold cross-validation. The façade is synchronous and
//! stateless across calls; a trained model is an immutable value owned
//! by the caller and may be shared between threads for prediction.

use crate::config::ModelParameters;
use crate::core::{LogSink, NullLog, Problem, Result, SVMError, Sample, SvmSolver};
use crate::probability::ProbabilityEstimates;
use crate::validation::Validation;

/// The SVM façade: configuration plus solver.
pub struct SVM<S: SvmSolver> {
    solver: S,
    params: ModelParameters,
    log: Box<dyn LogSink>,
}

impl<S: SvmSolver> SVM<S> {
    /// Create a façade with default parameters (a C-SVC inside).
    pub fn new(solver: S) -> Self {
        Self::with_parameters(solver, ModelParameters::default())
    }

    /// Create a façade with the given configuration.
    pub fn with_parameters(solver: S, params: ModelParameters) -> Self {
        Self {
            solver,
            params,
            log: Box::new(NullLog),
        }
    }

    /// Route the solver's diagnostic output to `sink` instead of
    /// discarding it.
    pub fn with_log_sink(mut self, sink: Box<dyn LogSink>) -> Self {
        self.log = sink;
        self
    }

    /// The active configuration
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Train a model on the given samples.
    ///
    /// Packs the samples into a problem, derives solver parameters and
    /// delegates. Solver errors are propagated unchanged.
    pub fn train(&self, samples: &[Sample]) -> Result<S::Model> {
        if samples.is_empty() {
            return Err(SVMError::EmptyDataset);
        }
        log::debug!("training {:?} model on {} samples", self.params.svm_type(), samples.len());
        let problem = Problem::pack(samples);
        let solver_params = self.params.solver_params();
        self.solver.train(&problem, &solver_params, self.log.as_ref())
    }

    /// Point prediction for a single sample.
    pub fn predict_one(&self, model: &S::Model, sample: &Sample) -> f64 {
        self.solver.predict(model, &sample.features)
    }

    /// Predict a batch of samples, optionally with probability estimates.
    ///
    /// The returned prediction array always has the same length and
    /// order as `samples`. Requesting probability estimates on a
    /// configuration that did not enable them is an error; no solver
    /// call is made in that case.
    pub fn predict_batch(
        &self,
        model: &S::Model,
        samples: &[Sample],
        want_probability: bool,
    ) -> Result<Prediction> {
        if want_probability {
            if !self.params.probability_estimates() {
                return Err(SVMError::UnsupportedOperation(
                    "this configuration does not support probability estimates".to_string(),
                ));
            }
            if self.params.svm_type().is_regression() {
                // the probability flag does not change the point
                // predictions for regression; sigma is model-level
                let sigma = self.solver.svr_probability(model);
                let values = self.point_predictions(model, samples);
                return Ok(Prediction {
                    values,
                    estimates: Some(ProbabilityEstimates::Regression { sigma }),
                });
            }
            let labels = self.solver.class_labels(model);
            let mut values = Vec::with_capacity(samples.len());
            let mut maps = Vec::with_capacity(samples.len());
            for sample in samples {
                let (value, scores) = self
                    .solver
                    .predict_with_probability(model, &sample.features);
                values.push(value);
                maps.push(labels.iter().copied().zip(scores).collect());
            }
            return Ok(Prediction {
                values,
                estimates: Some(ProbabilityEstimates::Classification(maps)),
            });
        }
        Ok(Prediction {
            values: self.point_predictions(model, samples),
            estimates: None,
        })
    }

    /// Train on one sample set and immediately predict another.
    pub fn train_and_predict(
        &self,
        training: &[Sample],
        prediction: &[Sample],
        want_probability: bool,
    ) -> Result<Prediction> {
        let model = self.train(training)?;
        self.predict_batch(&model, prediction, want_probability)
    }

    /// Run k-fold cross-validation and compute task-appropriate metrics.
    ///
    /// Fold partitioning and per-fold retraining are the solver's job;
    /// this turns its leave-fold-out predictions into a [`Validation`].
    /// `folds` must be at least 2.
    pub fn cross_validate(&self, samples: &[Sample], folds: usize) -> Result<Validation> {
        if folds < 2 {
            return Err(SVMError::InvalidParameter(format!(
                "the fold amount must be greater than 1, got: {folds}"
            )));
        }
        if samples.is_empty() {
            return Err(SVMError::EmptyDataset);
        }
        log::debug!("{folds}-fold cross validation over {} samples", samples.len());
        let problem = Problem::pack(samples);
        let solver_params = self.params.solver_params();
        let target =
            self.solver
                .cross_validate(&problem, &solver_params, folds, self.log.as_ref())?;
        let validation = if self.params.svm_type().is_regression() {
            Validation::regression_over(&target, problem.targets(), folds)
        } else {
            Validation::classification_over(&target, problem.targets(), folds)
        };
        Ok(validation)
    }

    fn point_predictions(&self, model: &S::Model, samples: &[Sample]) -> Vec<f64> {
        samples
            .iter()
            .map(|sample| self.solver.predict(model, &sample.features))
            .collect()
    }
}

/// Outcome of a batch prediction: point predictions in input order, plus
/// the probability payload when one was requested and computed.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    values: Vec<f64>,
    estimates: Option<ProbabilityEstimates>,
}

impl Prediction {
    /// Point predictions, index-aligned with the input samples
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the prediction, keeping only the point predictions
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Whether a probability payload was computed
    pub fn has_probability_estimates(&self) -> bool {
        self.estimates.is_some()
    }

    /// The probability payload.
    ///
    /// Asking for a payload that was never computed is an error, not a
    /// silent default.
    pub fn probability_estimates(&self) -> Result<&ProbabilityEstimates> {
        self.estimates.as_ref().ok_or_else(|| {
            SVMError::UnsupportedOperation(
                "no probability estimates were computed for this prediction".to_string(),
            )
        })
    }
}
