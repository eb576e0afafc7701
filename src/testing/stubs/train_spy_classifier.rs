use crate::classifiers::{Classifier, ClassifierError};
use crate::core::instances::Instance;
use std::sync::{Arc, Mutex};

/// Records the ids seen by each `train` call and echoes the input label back
/// from `classify`.
pub struct TrainSpyClassifier {
    calls: Arc<Mutex<Vec<Vec<u64>>>>,
}

#[derive(Clone)]
pub struct TrainSpyHandle {
    calls: Arc<Mutex<Vec<Vec<u64>>>>,
}

impl TrainSpyClassifier {
    pub fn with_handle() -> (Self, TrainSpyHandle) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                calls: Arc::clone(&calls),
            },
            TrainSpyHandle { calls },
        )
    }
}

impl TrainSpyHandle {
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn trained_ids(&self) -> Vec<Vec<u64>> {
        self.calls.lock().unwrap().clone()
    }
}

impl Classifier for TrainSpyClassifier {
    fn train(&mut self, instances: &[Instance]) -> Result<(), ClassifierError> {
        let ids = instances.iter().map(|i| i.id).collect();
        self.calls.lock().unwrap().push(ids);
        Ok(())
    }

    fn classify(&self, instance: &Instance) -> Result<String, ClassifierError> {
        instance
            .category()
            .map(str::to_string)
            .ok_or(ClassifierError::UntrainedModel)
    }
}
