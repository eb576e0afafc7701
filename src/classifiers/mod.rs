pub mod bayes;
pub mod classifier;
mod error;

pub use bayes::MultinomialNaiveBayes;
pub use classifier::Classifier;
pub use error::ClassifierError;
