use crate::core::corpus::{CorpusError, tokenize};
use crate::core::instances::Instance;
use crate::utils::file_parsing::{split_preserving_quotes, strip_surrounding_quotes};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads `id<d>category<d>text` records.
///
/// Blank lines and lines starting with `#` are skipped. Fields may be quoted
/// to contain the delimiter. An empty category field yields an unlabeled
/// instance; a missing text field yields an empty token sequence.
pub fn read_delimited<P: AsRef<Path>>(
    path: P,
    delimiter: char,
) -> Result<Vec<Instance>, CorpusError> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut out = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        out.push(parse_record(trimmed, delimiter, idx + 1)?);
    }

    tracing::debug!(
        path = %path.as_ref().display(),
        instances = out.len(),
        "read delimited corpus"
    );
    Ok(out)
}

fn parse_record(line: &str, delimiter: char, line_no: usize) -> Result<Instance, CorpusError> {
    let fields = split_preserving_quotes(line, delimiter);
    if fields.len() < 2 || fields.len() > 3 {
        return Err(CorpusError::Parse {
            line: line_no,
            message: format!("expected 2 or 3 fields, found {}", fields.len()),
        });
    }

    let id = strip_surrounding_quotes(&fields[0])
        .parse::<u64>()
        .map_err(|e| CorpusError::Parse {
            line: line_no,
            message: format!("invalid id '{}': {e}", fields[0]),
        })?;

    let category = strip_surrounding_quotes(&fields[1]).trim();
    let category = (!category.is_empty()).then(|| category.to_string());

    let tokens = fields
        .get(2)
        .map(|t| tokenize(strip_surrounding_quotes(t)))
        .unwrap_or_default();

    Ok(Instance {
        id,
        tokens,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_csv_with_quotes_and_comments() {
        let mut tf = NamedTempFile::new().unwrap();
        writeln!(tf, "# id,category,text").unwrap();
        writeln!(tf, "1,yes,Chinese Beijing Chinese").unwrap();
        writeln!(tf, "2,'yes',\"Chinese, Macao\"").unwrap();
        writeln!(tf).unwrap();
        writeln!(tf, "5,,Chinese Tokyo").unwrap();

        let got = read_delimited(tf.path(), ',').unwrap();
        assert_eq!(got.len(), 3);
        assert_eq!(got[0].tokens, vec!["Chinese", "Beijing", "Chinese"]);
        assert_eq!(got[1].category(), Some("yes"));
        assert_eq!(got[1].tokens, vec!["Chinese,", "Macao"]);
        assert_eq!(got[2].id, 5);
        assert!(got[2].is_category_missing());
    }

    #[test]
    fn reads_tsv() {
        let mut tf = NamedTempFile::new().unwrap();
        writeln!(tf, "4\tno\tChinese Tokyo Japan").unwrap();

        let got = read_delimited(tf.path(), '\t').unwrap();
        assert_eq!(got[0].category(), Some("no"));
        assert_eq!(got[0].number_of_tokens(), 3);
    }

    #[test]
    fn bad_id_reports_line() {
        let mut tf = NamedTempFile::new().unwrap();
        writeln!(tf, "1,yes,a").unwrap();
        writeln!(tf, "x,yes,b").unwrap();

        match read_delimited(tf.path(), ',') {
            Err(CorpusError::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("invalid id"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn too_many_fields_is_rejected() {
        let mut tf = NamedTempFile::new().unwrap();
        writeln!(tf, "1,yes,a,b").unwrap();
        assert!(matches!(
            read_delimited(tf.path(), ','),
            Err(CorpusError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn apostrophes_in_text_are_plain_characters() {
        let mut tf = NamedTempFile::new().unwrap();
        writeln!(tf, "1,ham,don't stop").unwrap();
        writeln!(tf, "2,ham,do not, stop").unwrap();

        match read_delimited(tf.path(), ',') {
            Err(CorpusError::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("found 4"));
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let mut ok = NamedTempFile::new().unwrap();
        writeln!(ok, "1,ham,don't stop").unwrap();
        let got = read_delimited(ok.path(), ',').unwrap();
        assert_eq!(got[0].tokens, vec!["don't", "stop"]);
    }
}
