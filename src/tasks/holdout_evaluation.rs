use crate::classifiers::Classifier;
use crate::core::instances::Instance;
use crate::evaluation::{BasicEstimator, ClassificationEvaluator, Measurement, PerformanceEvaluator};
use crate::tasks::TaskError;
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Train on a seeded random split of a labeled corpus, then score the
/// held-out part.
#[derive(Debug, Clone)]
pub struct HoldoutEvaluation {
    test_fraction: f64,
    seed: u64,
    show_per_class: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HoldoutReport {
    pub started_at: DateTime<Utc>,
    pub seconds: f64,
    pub train_size: usize,
    pub test_size: usize,
    pub measurements: Vec<Measurement>,
}

impl HoldoutReport {
    pub fn measurement(&self, name: &str) -> Option<f64> {
        self.measurements
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.value)
    }
}

impl Display for HoldoutReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "train={}, test={}, t={:.3}s",
            self.train_size, self.test_size, self.seconds
        )?;
        for m in &self.measurements {
            write!(f, ", {m}")?;
        }
        Ok(())
    }
}

impl HoldoutEvaluation {
    pub fn new(test_fraction: f64, seed: u64) -> Result<Self, TaskError> {
        if !(test_fraction > 0.0 && test_fraction < 1.0) {
            return Err(TaskError::InvalidInput(format!(
                "test_fraction must be in (0, 1), got {test_fraction}"
            )));
        }
        Ok(Self {
            test_fraction,
            seed,
            show_per_class: false,
        })
    }

    pub fn with_per_class_metrics(mut self, show: bool) -> Self {
        self.show_per_class = show;
        self
    }

    /// Splits `corpus` into `(train, test)`. Unlabeled instances are dropped.
    pub fn split<'a>(
        &self,
        corpus: &'a [Instance],
    ) -> Result<(Vec<&'a Instance>, Vec<&'a Instance>), TaskError> {
        let mut labeled: Vec<&Instance> =
            corpus.iter().filter(|i| !i.is_category_missing()).collect();

        let skipped = corpus.len() - labeled.len();
        if skipped > 0 {
            tracing::warn!(skipped, "dropping unlabeled instances from holdout corpus");
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        labeled.shuffle(&mut rng);

        let test_size = (labeled.len() as f64 * self.test_fraction).round() as usize;
        if test_size == 0 || test_size >= labeled.len() {
            return Err(TaskError::InvalidInput(format!(
                "cannot split {} labeled instances with test_fraction {}",
                labeled.len(),
                self.test_fraction
            )));
        }

        let train = labeled.split_off(test_size);
        Ok((train, labeled))
    }

    pub fn run<C: Classifier + ?Sized>(
        &self,
        classifier: &mut C,
        corpus: &[Instance],
    ) -> Result<HoldoutReport, TaskError> {
        let started_at = Utc::now();
        let start = Instant::now();

        let (train, test) = self.split(corpus)?;
        let train_owned: Vec<Instance> = train.into_iter().cloned().collect();
        classifier.train(&train_owned)?;

        let mut evaluator = ClassificationEvaluator::<BasicEstimator>::new(self.show_per_class);
        for instance in &test {
            let predicted = classifier.classify(instance)?;
            if let Some(truth) = instance.category() {
                evaluator.add_result(truth, &predicted);
            }
        }

        let report = HoldoutReport {
            started_at,
            seconds: start.elapsed().as_secs_f64(),
            train_size: train_owned.len(),
            test_size: test.len(),
            measurements: evaluator.performance(),
        };
        tracing::info!(%report, "holdout evaluation finished");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::MultinomialNaiveBayes;
    use crate::testing::dummies::{spam_corpus, textbook_corpus};
    use crate::testing::{ConstantClassifier, TrainSpyClassifier};

    #[test]
    fn ctor_guards() {
        for bad in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(matches!(
                HoldoutEvaluation::new(bad, 1),
                Err(TaskError::InvalidInput(_))
            ));
        }
        assert!(HoldoutEvaluation::new(0.25, 1).is_ok());
    }

    #[test]
    fn split_is_deterministic_and_disjoint() {
        let corpus = spam_corpus();
        let task = HoldoutEvaluation::new(0.3, 42).unwrap();

        let (train_a, test_a) = task.split(&corpus).unwrap();
        let (train_b, test_b) = task.split(&corpus).unwrap();

        let ids = |v: &[&Instance]| v.iter().map(|i| i.id).collect::<Vec<_>>();
        assert_eq!(ids(&train_a), ids(&train_b));
        assert_eq!(ids(&test_a), ids(&test_b));
        assert_eq!(test_a.len(), 6);
        assert_eq!(train_a.len(), 14);
        assert!(ids(&test_a).iter().all(|id| !ids(&train_a).contains(id)));
    }

    #[test]
    fn split_drops_unlabeled() {
        let mut corpus = spam_corpus();
        corpus.push(Instance::unlabeled(99, ["free"]));
        let task = HoldoutEvaluation::new(0.5, 7).unwrap();

        let (train, test) = task.split(&corpus).unwrap();
        assert_eq!(train.len() + test.len(), 20);
        assert!(train.iter().chain(test.iter()).all(|i| i.id != 99));
    }

    #[test]
    fn split_rejects_degenerate_sizes() {
        let corpus = vec![Instance::labeled(1, ["a"], "x")];
        let task = HoldoutEvaluation::new(0.5, 0).unwrap();
        assert!(matches!(task.split(&corpus), Err(TaskError::InvalidInput(_))));

        let tiny = HoldoutEvaluation::new(0.01, 0).unwrap();
        assert!(matches!(
            tiny.split(&textbook_corpus()),
            Err(TaskError::InvalidInput(_))
        ));
    }

    #[test]
    fn trains_once_on_training_part() {
        let corpus = spam_corpus();
        let task = HoldoutEvaluation::new(0.25, 3).unwrap();
        let (mut spy, handle) = TrainSpyClassifier::with_handle();

        let report = task.run(&mut spy, &corpus).unwrap();

        assert_eq!(handle.count(), 1);
        assert_eq!(handle.trained_ids()[0].len(), report.train_size);
        assert_eq!(report.train_size + report.test_size, 20);
        // the spy echoes the true label
        assert_eq!(report.measurement("accuracy"), Some(1.0));
    }

    #[test]
    fn constant_classifier_scores_at_chance() {
        let corpus = spam_corpus();
        let task = HoldoutEvaluation::new(0.5, 11).unwrap();
        let mut c = ConstantClassifier::new("spam");

        let report = task.run(&mut c, &corpus).unwrap();
        let kappa = report.measurement("kappa").unwrap();
        assert!(kappa.abs() < 1e-12);
    }

    #[test]
    fn naive_bayes_separates_spam_corpus() {
        let corpus = spam_corpus();
        let task = HoldoutEvaluation::new(0.3, 42).unwrap();
        let mut nb = MultinomialNaiveBayes::new();

        let report = task.run(&mut nb, &corpus).unwrap();
        assert!(nb.is_trained());
        assert!(report.measurement("accuracy").unwrap() >= 0.8);
        assert!(report.seconds >= 0.0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["test_size"], 6);
        assert!(json["started_at"].is_string());
    }
}
