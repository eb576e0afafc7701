mod model;
mod model_builder;
mod multinomial_naive_bayes;
mod probability_table;

pub use model::{CategoryScore, TrainedModel};
pub(crate) use model_builder::ModelBuilder;
pub use multinomial_naive_bayes::MultinomialNaiveBayes;
pub use probability_table::{CategoryId, ProbabilityTable, TermId};
