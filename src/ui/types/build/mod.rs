mod corpus;
mod error;
mod holdout;

pub use corpus::build_corpus;
pub use error::BuildError;
pub use holdout::build_holdout;
