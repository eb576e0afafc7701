use crate::classifiers::ClassifierError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
