use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}
