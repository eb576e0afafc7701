mod instance;
mod training_set;

pub use instance::Instance;
pub use training_set::TrainingSet;
