//! Multinomial logistic regression.
//!
//! Minimises the averaged softmax cross-entropy plus an L2 penalty on the
//! weights (the intercepts are not penalised):
//!
//! ```text
//! J(W, b) = 1/n * Σ -ln softmax(W·x_i + b)[y_i]  +  1/(2·C·n) * ||W||²
//! ```
//!
//! using full-batch gradient descent. Training data is small (one row per
//! catalog pattern) and rows are sparse, so each iteration only touches the
//! non-zero features.

use std::collections::BTreeSet;
use std::time::Instant;

use ahash::AHashMap;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{LingobotError, Result};

/// Hyperparameters for [`LogisticRegression::train`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegressionConfig {
    /// Inverse regularisation strength. Smaller values regularise more.
    pub c: f64,
    /// Gradient descent step size.
    pub learning_rate: f64,
    /// Upper bound on gradient descent iterations.
    pub max_iter: usize,
    /// Stop once every gradient component is below this magnitude.
    pub tolerance: f64,
    /// Seed for weight initialisation.
    pub seed: u64,
}

impl Default for LogisticRegressionConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            learning_rate: 1.0,
            max_iter: 1000,
            tolerance: 1e-4,
            seed: 0,
        }
    }
}

/// Training statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Number of gradient descent iterations completed.
    pub iterations: usize,
    /// Objective value after the last iteration.
    pub final_loss: f64,
    /// Whether the gradient tolerance was reached before `max_iter`.
    pub converged: bool,
    /// Training time in milliseconds.
    pub training_time_ms: u64,
}

/// A trained multinomial logistic regression model.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    /// Class labels in sorted order; row `k` of `weights` belongs to `classes[k]`.
    classes: Vec<String>,
    /// Row-major `classes.len() x n_features`.
    weights: Vec<f64>,
    intercepts: Vec<f64>,
    n_features: usize,
    stats: TrainingStats,
}

type SparseRow = Vec<(usize, f64)>;

impl LogisticRegression {
    /// Train a model on dense feature rows and their labels.
    pub fn train(
        features: &[Vec<f64>],
        labels: &[String],
        config: &LogisticRegressionConfig,
    ) -> Result<Self> {
        if features.is_empty() {
            return Err(LingobotError::training("Training samples cannot be empty"));
        }
        if features.len() != labels.len() {
            return Err(LingobotError::training(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        if config.c <= 0.0 || config.learning_rate <= 0.0 || config.max_iter == 0 {
            return Err(LingobotError::training(format!(
                "invalid hyperparameters: {config:?}"
            )));
        }

        let n_features = features[0].len();
        if features.iter().any(|row| row.len() != n_features) {
            return Err(LingobotError::training("feature rows differ in length"));
        }

        let classes: Vec<String> = labels
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let class_index: AHashMap<&str, usize> = classes
            .iter()
            .enumerate()
            .map(|(idx, class)| (class.as_str(), idx))
            .collect();
        let targets: Vec<usize> = labels
            .iter()
            .map(|label| {
                class_index.get(label.as_str()).copied().ok_or_else(|| {
                    LingobotError::training(format!("label '{label}' has no class index"))
                })
            })
            .collect::<Result<_>>()?;

        let rows: Vec<SparseRow> = features
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, value)| **value != 0.0)
                    .map(|(idx, value)| (idx, *value))
                    .collect()
            })
            .collect();

        let n_classes = classes.len();
        let n_samples = rows.len() as f64;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut weights: Vec<f64> = (0..n_classes * n_features)
            .map(|_| rng.random_range(-1e-3..1e-3))
            .collect();
        let mut intercepts = vec![0.0; n_classes];

        let start = Instant::now();
        let mut grad_w = vec![0.0; weights.len()];
        let mut grad_b = vec![0.0; n_classes];
        let mut scores = vec![0.0; n_classes];
        let mut iterations = 0;
        let mut converged = false;
        let mut loss = f64::INFINITY;

        while iterations < config.max_iter {
            grad_w.iter_mut().for_each(|g| *g = 0.0);
            grad_b.iter_mut().for_each(|g| *g = 0.0);
            let mut data_loss = 0.0;

            for (row, &target) in rows.iter().zip(&targets) {
                sparse_scores(row, &weights, &intercepts, n_features, &mut scores);
                softmax_in_place(&mut scores);
                data_loss -= scores[target].max(f64::MIN_POSITIVE).ln();

                for (k, &p) in scores.iter().enumerate() {
                    let g = if k == target { p - 1.0 } else { p };
                    grad_b[k] += g;
                    let offset = k * n_features;
                    for &(j, x) in row {
                        grad_w[offset + j] += g * x;
                    }
                }
            }

            let penalty = 1.0 / (config.c * n_samples);
            let mut max_grad: f64 = 0.0;
            for (g, w) in grad_w.iter_mut().zip(&weights) {
                *g = *g / n_samples + penalty * w;
                max_grad = max_grad.max(g.abs());
            }
            for g in grad_b.iter_mut() {
                *g /= n_samples;
                max_grad = max_grad.max(g.abs());
            }

            loss = data_loss / n_samples
                + 0.5 * penalty * weights.iter().map(|w| w * w).sum::<f64>();

            if max_grad < config.tolerance {
                converged = true;
                break;
            }

            for (w, g) in weights.iter_mut().zip(&grad_w) {
                *w -= config.learning_rate * g;
            }
            for (b, g) in intercepts.iter_mut().zip(&grad_b) {
                *b -= config.learning_rate * g;
            }
            iterations += 1;
        }

        let stats = TrainingStats {
            iterations,
            final_loss: loss,
            converged,
            training_time_ms: start.elapsed().as_millis() as u64,
        };
        debug!(
            "Trained logistic regression: {} classes, {} features, {:?}",
            n_classes, n_features, stats
        );

        Ok(Self {
            classes,
            weights,
            intercepts,
            n_features,
            stats,
        })
    }

    /// Raw class scores `W·x + b`, one per class.
    pub fn decision_function(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.n_features {
            return Err(LingobotError::internal(format!(
                "expected {} features, got {}",
                self.n_features,
                features.len()
            )));
        }

        Ok(self
            .intercepts
            .iter()
            .enumerate()
            .map(|(k, b)| {
                let row = &self.weights[k * self.n_features..(k + 1) * self.n_features];
                b + row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>()
            })
            .collect())
    }

    /// Class probabilities, in [`classes`](Self::classes) order.
    pub fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>> {
        let mut scores = self.decision_function(features)?;
        softmax_in_place(&mut scores);
        Ok(scores)
    }

    /// The best-scoring class. Ties go to the class that sorts first.
    pub fn predict(&self, features: &[f64]) -> Result<&str> {
        let scores = self.decision_function(features)?;
        Ok(&self.classes[argmax(&scores)])
    }

    /// The best-scoring class and its probability.
    pub fn predict_with_confidence(&self, features: &[f64]) -> Result<(&str, f64)> {
        let probabilities = self.predict_proba(features)?;
        let best = argmax(&probabilities);
        Ok((&self.classes[best], probabilities[best]))
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn training_stats(&self) -> &TrainingStats {
        &self.stats
    }
}

fn sparse_scores(
    row: &[(usize, f64)],
    weights: &[f64],
    intercepts: &[f64],
    n_features: usize,
    out: &mut [f64],
) {
    for (k, score) in out.iter_mut().enumerate() {
        let offset = k * n_features;
        *score = intercepts[k] + row.iter().map(|&(j, x)| weights[offset + j] * x).sum::<f64>();
    }
}

fn softmax_in_place(scores: &mut [f64]) {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut total = 0.0;
    for score in scores.iter_mut() {
        *score = (*score - max).exp();
        total += *score;
    }
    for score in scores.iter_mut() {
        *score /= total;
    }
}

fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (idx, value) in values.iter().enumerate().skip(1) {
        if *value > values[best] {
            best = idx;
        }
    }
    best
}
