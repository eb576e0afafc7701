use crate::classifiers::ClassifierError;
use crate::core::instances::Instance;

/// A validated, borrowed view over labeled training instances.
///
/// Construction guarantees the set is non-empty and that every instance
/// carries a non-empty category label.
#[derive(Debug, Clone, Copy)]
pub struct TrainingSet<'a> {
    instances: &'a [Instance],
}

impl<'a> TrainingSet<'a> {
    pub fn new(instances: &'a [Instance]) -> Result<Self, ClassifierError> {
        if instances.is_empty() {
            return Err(ClassifierError::InvalidInput(
                "training set must not be empty".into(),
            ));
        }
        if let Some(unlabeled) = instances.iter().find(|i| i.is_category_missing()) {
            return Err(ClassifierError::InvalidInput(format!(
                "training instance {} has no category",
                unlabeled.id
            )));
        }
        Ok(Self { instances })
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Iterates `(category, tokens)` pairs. Labels are guaranteed present.
    pub fn labeled(&self) -> impl Iterator<Item = (&'a str, &'a [String])> + 'a {
        self.instances
            .iter()
            .filter_map(|i| i.category().map(|c| (c, i.tokens.as_slice())))
    }
}
