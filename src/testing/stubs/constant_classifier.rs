use crate::classifiers::{Classifier, ClassifierError};
use crate::core::instances::Instance;

/// Always predicts the same label, once trained.
pub struct ConstantClassifier {
    label: String,
    trained: bool,
}

impl ConstantClassifier {
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            trained: false,
        }
    }
}

impl Classifier for ConstantClassifier {
    fn train(&mut self, instances: &[Instance]) -> Result<(), ClassifierError> {
        if instances.is_empty() {
            return Err(ClassifierError::InvalidInput("empty".into()));
        }
        self.trained = true;
        Ok(())
    }

    fn classify(&self, _instance: &Instance) -> Result<String, ClassifierError> {
        if !self.trained {
            return Err(ClassifierError::UntrainedModel);
        }
        Ok(self.label.clone())
    }
}
