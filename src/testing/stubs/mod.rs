pub mod constant_classifier;
pub mod scripted_driver;
pub mod train_spy_classifier;

pub use constant_classifier::ConstantClassifier;
pub use scripted_driver::{Answer, ScriptedDriver};
pub use train_spy_classifier::{TrainSpyClassifier, TrainSpyHandle};
