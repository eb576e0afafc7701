mod error;
mod holdout_evaluation;

pub use error::TaskError;
pub use holdout_evaluation::{HoldoutEvaluation, HoldoutReport};
