use crate::classifiers::bayes::{CategoryScore, ModelBuilder, TrainedModel};
use crate::classifiers::{Classifier, ClassifierError};
use crate::core::instances::{Instance, TrainingSet};
use std::sync::Arc;

/// Multinomial Naive Bayes over token counts, with add-one smoothing and
/// base-2 log-space scoring.
///
/// Training builds a fresh [`TrainedModel`] and publishes it in one step, so
/// a failed call never disturbs the previous model. Callers that need a
/// fixed snapshot while retraining can clone the `Arc` from [`model`].
///
/// [`model`]: MultinomialNaiveBayes::model
#[derive(Debug, Default, Clone)]
pub struct MultinomialNaiveBayes {
    model: Option<Arc<TrainedModel>>,
}

impl MultinomialNaiveBayes {
    pub fn new() -> Self {
        Self { model: None }
    }

    pub fn model(&self) -> Option<&Arc<TrainedModel>> {
        self.model.as_ref()
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// Per-category log2 scores for `instance`, in category order.
    pub fn scores(&self, instance: &Instance) -> Result<Vec<CategoryScore>, ClassifierError> {
        let model = self.model.as_ref().ok_or(ClassifierError::UntrainedModel)?;
        if model.categories().is_empty() {
            return Err(ClassifierError::EmptyCategorySet);
        }
        Ok(model.scores(&instance.tokens))
    }
}

impl Classifier for MultinomialNaiveBayes {
    fn train(&mut self, instances: &[Instance]) -> Result<(), ClassifierError> {
        let training_set = TrainingSet::new(instances)?;

        let mut builder = ModelBuilder::new();
        for (category, tokens) in training_set.labeled() {
            builder.observe(category, tokens)?;
        }
        let model = builder.build();

        tracing::debug!(
            instances = training_set.len(),
            categories = model.categories().len(),
            vocabulary = model.vocabulary().len(),
            "trained multinomial naive bayes"
        );

        self.model = Some(Arc::new(model));
        Ok(())
    }

    fn classify(&self, instance: &Instance) -> Result<String, ClassifierError> {
        let scores = self.scores(instance)?;
        let best = TrainedModel::best_category(&scores).ok_or(ClassifierError::EmptyCategorySet)?;

        tracing::trace!(
            instance = instance.id,
            category = %best.category,
            score = best.score,
            "classified instance"
        );
        Ok(best.category.clone())
    }
}
