mod estimators;
mod evaluators;
mod measurement;

pub use estimators::{BasicEstimator, Estimator};
pub use evaluators::{ClassificationEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt};
pub use measurement::Measurement;
