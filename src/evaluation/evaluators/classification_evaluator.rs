use crate::evaluation::{Estimator, Measurement, PerformanceEvaluator};
use std::collections::HashMap;

/// Batch/online evaluator for single-label predictions over string labels.
///
/// Labels are indexed on first sight (truth or prediction) and a square
/// confusion matrix grows with them. Reports:
/// - `accuracy`;
/// - Cohen's `kappa` from the confusion marginals;
/// - `kappa_m`, kappa against the "predict the majority so far" baseline;
/// - macro `precision`, `recall` and `f1` over classes where each is defined;
/// - optionally `precision[<label>]` / `recall[<label>]` per class.
pub struct ClassificationEvaluator<E: Estimator + Default> {
    labels: Vec<String>,
    label_index: HashMap<String, usize>,
    /// `confusion[truth][predicted]`
    confusion: Vec<Vec<f64>>,
    weight_correct: E,
    weight_majority: E,
    total: f64,
    show_per_class: bool,
}

impl<E: Estimator + Default> ClassificationEvaluator<E> {
    pub fn new(show_per_class: bool) -> Self {
        Self {
            labels: Vec::new(),
            label_index: HashMap::new(),
            confusion: Vec::new(),
            weight_correct: E::default(),
            weight_majority: E::default(),
            total: 0.0,
            show_per_class,
        }
    }

    pub fn new_with_default_flags() -> Self {
        Self::new(false)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    #[inline]
    fn ensure_label(&mut self, label: &str) -> usize {
        if let Some(&i) = self.label_index.get(label) {
            return i;
        }
        let i = self.labels.len();
        self.labels.push(label.to_string());
        self.label_index.insert(label.to_string(), i);
        for row in self.confusion.iter_mut() {
            row.push(0.0);
        }
        self.confusion.push(vec![0.0; i + 1]);
        i
    }

    #[inline]
    fn true_count(&self, c: usize) -> f64 {
        self.confusion[c].iter().sum()
    }

    #[inline]
    fn predicted_count(&self, c: usize) -> f64 {
        self.confusion.iter().map(|row| row[c]).sum()
    }

    /// Most frequent true label so far; ties go to the lower index.
    #[inline]
    fn majority_class(&self) -> Option<usize> {
        let mut best = None;
        let mut best_value = f64::NEG_INFINITY;
        for c in 0..self.labels.len() {
            let n = self.true_count(c);
            if n > 0.0 && n > best_value {
                best = Some(c);
                best_value = n;
            }
        }
        best
    }

    fn precision(&self, c: usize) -> f64 {
        let predicted = self.predicted_count(c);
        if predicted > 0.0 {
            self.confusion[c][c] / predicted
        } else {
            f64::NAN
        }
    }

    fn recall(&self, c: usize) -> f64 {
        let actual = self.true_count(c);
        if actual > 0.0 {
            self.confusion[c][c] / actual
        } else {
            f64::NAN
        }
    }

    fn macro_average(values: impl Iterator<Item = f64>) -> f64 {
        let (sum, count) = values
            .filter(|v| v.is_finite())
            .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
        if count > 0 {
            sum / count as f64
        } else {
            f64::NAN
        }
    }
}

impl<E: Estimator + Default> Default for ClassificationEvaluator<E> {
    fn default() -> Self {
        Self::new_with_default_flags()
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for ClassificationEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new(self.show_per_class);
    }

    fn add_result(&mut self, truth: &str, predicted: &str) {
        let majority = self.majority_class();

        let y = self.ensure_label(truth);
        let yhat = self.ensure_label(predicted);

        self.total += 1.0;
        self.confusion[y][yhat] += 1.0;
        self.weight_correct.add(if y == yhat { 1.0 } else { 0.0 });

        if let Some(maj) = majority {
            self.weight_majority.add(if maj == y { 1.0 } else { 0.0 });
        }
    }

    fn performance(&self) -> Vec<Measurement> {
        let mut m = vec![Measurement::new(
            "accuracy",
            self.weight_correct.estimation(),
        )];

        if self.total <= 0.0 {
            m.extend([Measurement::new("kappa", 0.0), Measurement::new("kappa_m", 0.0)]);
            return m;
        }

        let p_o = self.weight_correct.estimation();
        let p_e: f64 = (0..self.labels.len())
            .map(|c| (self.true_count(c) / self.total) * (self.predicted_count(c) / self.total))
            .sum();
        let kappa = {
            let d = 1.0 - p_e;
            if d.abs() > f64::EPSILON {
                (p_o - p_e) / d
            } else {
                f64::NAN
            }
        };

        let acc_maj = self.weight_majority.estimation();
        let kappa_m = {
            let d = 1.0 - acc_maj;
            if acc_maj.is_finite() && d.abs() > f64::EPSILON {
                (p_o - acc_maj) / d
            } else {
                f64::NAN
            }
        };

        m.push(Measurement::new("kappa", kappa));
        m.push(Measurement::new("kappa_m", kappa_m));

        let classes = 0..self.labels.len();
        let macro_precision = Self::macro_average(classes.clone().map(|c| self.precision(c)));
        let macro_recall = Self::macro_average(classes.map(|c| self.recall(c)));
        let macro_f1 = {
            let s = macro_precision + macro_recall;
            if macro_precision.is_finite() && macro_recall.is_finite() && s > f64::EPSILON {
                2.0 * (macro_precision * macro_recall) / s
            } else {
                f64::NAN
            }
        };

        m.push(Measurement::new("precision", macro_precision));
        m.push(Measurement::new("recall", macro_recall));
        m.push(Measurement::new("f1", macro_f1));

        if self.show_per_class {
            for (c, label) in self.labels.iter().enumerate() {
                m.push(Measurement::new(format!("precision[{label}]"), self.precision(c)));
                m.push(Measurement::new(format!("recall[{label}]"), self.recall(c)));
            }
        }
        m
    }
}
