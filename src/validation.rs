//! Cross-validation outcomes and their metrics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregated outcome of a k-fold cross-validation run.
///
/// Classification (including one-class) reports accuracy; regression
/// reports mean squared error and the squared correlation coefficient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Validation {
    Classification {
        /// Fraction of samples whose leave-fold-out prediction equals the
        /// true target, in [0,1]
        accuracy: f64,
        folds: usize,
    },
    Regression {
        /// Mean of the squared residuals
        mean_squared_error: f64,
        /// Pearson correlation between predictions and targets, squared.
        /// NaN when either side has zero variance.
        squared_correlation: f64,
        folds: usize,
    },
}

impl Validation {
    /// Accuracy over leave-fold-out predictions, by exact equality on
    /// the target encoding.
    pub fn classification_over(predicted: &[f64], actual: &[f64], folds: usize) -> Self {
        let correct = predicted
            .iter()
            .zip(actual.iter())
            .filter(|(v, y)| v == y)
            .count();
        Self::Classification {
            accuracy: correct as f64 / actual.len() as f64,
            folds,
        }
    }

    /// MSE and squared correlation over leave-fold-out predictions.
    ///
    /// The correlation is undefined when predictions or targets are
    /// constant; the zero variance then propagates as NaN rather than
    /// being masked as 0.
    pub fn regression_over(predicted: &[f64], actual: &[f64], folds: usize) -> Self {
        let l = actual.len() as f64;
        let mut total_error = 0.0;
        let mut sum_v = 0.0;
        let mut sum_y = 0.0;
        let mut sum_vv = 0.0;
        let mut sum_yy = 0.0;
        let mut sum_vy = 0.0;
        for (&v, &y) in predicted.iter().zip(actual.iter()) {
            total_error += (v - y) * (v - y);
            sum_v += v;
            sum_y += y;
            sum_vv += v * v;
            sum_yy += y * y;
            sum_vy += v * y;
        }
        let covariance = l * sum_vy - sum_v * sum_y;
        let squared_correlation =
            covariance * covariance / ((l * sum_vv - sum_v * sum_v) * (l * sum_yy - sum_y * sum_y));
        Self::Regression {
            mean_squared_error: total_error / l,
            squared_correlation,
            folds,
        }
    }

    /// Number of folds the validation ran with
    pub fn folds(&self) -> usize {
        match *self {
            Self::Classification { folds, .. } | Self::Regression { folds, .. } => folds,
        }
    }

    /// Accuracy, for classification outcomes
    pub fn accuracy(&self) -> Option<f64> {
        match *self {
            Self::Classification { accuracy, .. } => Some(accuracy),
            Self::Regression { .. } => None,
        }
    }

    /// Mean squared error, for regression outcomes
    pub fn mean_squared_error(&self) -> Option<f64> {
        match *self {
            Self::Regression {
                mean_squared_error, ..
            } => Some(mean_squared_error),
            Self::Classification { .. } => None,
        }
    }

    /// Squared correlation coefficient, for regression outcomes
    pub fn squared_correlation(&self) -> Option<f64> {
        match *self {
            Self::Regression {
                squared_correlation,
                ..
            } => Some(squared_correlation),
            Self::Classification { .. } => None,
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Classification { accuracy, folds } => {
                write!(
                    f,
                    "{folds}-fold cross validation: accuracy = {:.4}%",
                    accuracy * 100.0
                )
            }
            Self::Regression {
                mean_squared_error,
                squared_correlation,
                folds,
            } => {
                write!(
                    f,
                    "{folds}-fold cross validation: mean squared error = {mean_squared_error}, \
                     squared correlation coefficient = {squared_correlation}"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_predictions_give_accuracy_one() {
        let targets = [1.0, -1.0, 1.0, 1.0, -1.0];
        let validation = Validation::classification_over(&targets, &targets, 5);
        assert_eq!(validation.accuracy(), Some(1.0));
        assert_eq!(validation.folds(), 5);
    }

    #[test]
    fn test_partial_accuracy() {
        let predicted = [1.0, 1.0, -1.0, -1.0];
        let actual = [1.0, -1.0, -1.0, -1.0];
        let validation = Validation::classification_over(&predicted, &actual, 2);
        assert_eq!(validation.accuracy(), Some(0.75));
    }

    #[test]
    fn test_regression_metrics_on_exact_fit() {
        let targets = [1.0, 2.0, 3.0, 4.0];
        let validation = Validation::regression_over(&targets, &targets, 4);
        assert_eq!(validation.mean_squared_error(), Some(0.0));
        assert_relative_eq!(validation.squared_correlation().unwrap(), 1.0);
    }

    #[test]
    fn test_regression_metrics_on_noisy_fit() {
        let predicted = [1.1, 1.9, 3.2, 3.8];
        let actual = [1.0, 2.0, 3.0, 4.0];
        let validation = Validation::regression_over(&predicted, &actual, 2);

        let mse = validation.mean_squared_error().unwrap();
        let expected_mse = (0.01 + 0.01 + 0.04 + 0.04) / 4.0;
        assert_relative_eq!(mse, expected_mse, epsilon = 1e-12);

        let scc = validation.squared_correlation().unwrap();
        assert!(scc > 0.9 && scc <= 1.0);
    }

    #[test]
    fn test_zero_variance_correlation_is_nan() {
        // constant predictions: the correlation is undefined
        let predicted = [2.0, 2.0, 2.0];
        let actual = [1.0, 2.0, 3.0];
        let validation = Validation::regression_over(&predicted, &actual, 3);
        assert!(validation.squared_correlation().unwrap().is_nan());
        // the MSE is still well defined
        assert_relative_eq!(validation.mean_squared_error().unwrap(), 2.0 / 3.0);
    }

    #[test]
    fn test_accessor_mismatch_returns_none() {
        let classification = Validation::classification_over(&[1.0], &[1.0], 2);
        assert!(classification.mean_squared_error().is_none());
        assert!(classification.squared_correlation().is_none());

        let regression = Validation::regression_over(&[1.0, 2.0], &[1.0, 2.5], 2);
        assert!(regression.accuracy().is_none());
    }

    #[test]
    fn test_display_reports() {
        let classification = Validation::classification_over(&[1.0, -1.0], &[1.0, 1.0], 2);
        let text = classification.to_string();
        assert!(text.contains("2-fold"));
        assert!(text.contains("50.0000%"));

        let regression = Validation::regression_over(&[1.0, 2.0], &[1.0, 2.0], 3);
        assert!(regression.to_string().contains("mean squared error"));
    }
}
