use crate::core::corpus::CorpusError;
use crate::core::instances::Instance;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads one JSON-encoded [`Instance`] per non-blank line.
pub fn read_json_lines<P: AsRef<Path>>(path: P) -> Result<Vec<Instance>, CorpusError> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut out = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let instance: Instance =
            serde_json::from_str(trimmed).map_err(|e| CorpusError::Parse {
                line: idx + 1,
                message: e.to_string(),
            })?;
        out.push(instance);
    }

    tracing::debug!(
        path = %path.as_ref().display(),
        instances = out.len(),
        "read json-lines corpus"
    );
    Ok(out)
}
