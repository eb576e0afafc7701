use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("classifier has not been trained")]
    UntrainedModel,

    #[error("trained model has no categories")]
    EmptyCategorySet,
}
