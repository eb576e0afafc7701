mod delimited;
mod demo;
mod error;
mod json_lines;
mod tokenizer;

pub use delimited::read_delimited;
pub use demo::textbook_demo;
pub use error::CorpusError;
pub use json_lines::read_json_lines;
pub use tokenizer::tokenize;
