use crate::classifiers::ClassifierError;
use crate::core::instances::Instance;

pub trait Classifier {
    /// Replaces any trained state with a model built from `instances`.
    ///
    /// On error the previous state is left untouched.
    fn train(&mut self, instances: &[Instance]) -> Result<(), ClassifierError>;

    /// Predicts a category for `instance`. Its own category is ignored.
    fn classify(&self, instance: &Instance) -> Result<String, ClassifierError>;
}
