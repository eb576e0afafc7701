mod corpus;

pub use corpus::{spam_corpus, textbook_corpus, textbook_query};
