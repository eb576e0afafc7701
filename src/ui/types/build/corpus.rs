use crate::core::corpus::{read_delimited, read_json_lines, textbook_demo};
use crate::core::instances::Instance;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::CorpusChoice;

pub fn build_corpus(choice: CorpusChoice) -> Result<Vec<Instance>, BuildError> {
    match choice {
        CorpusChoice::TextbookDemo(_) => Ok(textbook_demo()),
        CorpusChoice::JsonLines(p) => Ok(read_json_lines(&p.path)?),
        CorpusChoice::Delimited(p) => {
            let delimiter = parse_delimiter(&p.delimiter)?;
            Ok(read_delimited(&p.path, delimiter)?)
        }
    }
}

/// Accepts a single character, or `\t` / `tab` for a tab.
fn parse_delimiter(raw: &str) -> Result<char, BuildError> {
    match raw {
        "\\t" | "tab" | "\t" => return Ok('\t'),
        _ => {}
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '"' && c != '\'' => Ok(c),
        _ => Err(BuildError::InvalidParameter(format!(
            "delimiter must be a single non-quote character, got {raw:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{DelimitedParameters, NoParams};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn delimiter_parsing() {
        assert_eq!(parse_delimiter(",").unwrap(), ',');
        assert_eq!(parse_delimiter("tab").unwrap(), '\t');
        assert_eq!(parse_delimiter("\\t").unwrap(), '\t');
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("'").is_err());
    }

    #[test]
    fn demo_has_one_unlabeled_query() {
        let corpus = build_corpus(CorpusChoice::TextbookDemo(NoParams {})).unwrap();
        assert_eq!(corpus.len(), 5);
        assert_eq!(corpus.iter().filter(|i| i.is_category_missing()).count(), 1);
    }

    #[test]
    fn builds_tsv_corpus() {
        let mut tf = NamedTempFile::new().unwrap();
        writeln!(tf, "1\tspam\twin cash").unwrap();
        writeln!(tf, "2\tham\tsee you").unwrap();

        let corpus = build_corpus(CorpusChoice::Delimited(DelimitedParameters {
            path: tf.path().to_path_buf(),
            delimiter: "tab".into(),
        }))
        .unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[1].category(), Some("ham"));
    }

    #[test]
    fn missing_file_surfaces_corpus_error() {
        let err = build_corpus(CorpusChoice::Delimited(DelimitedParameters {
            path: "/no/such/corpus.csv".into(),
            delimiter: ",".into(),
        }))
        .unwrap_err();
        assert!(matches!(err, BuildError::Corpus(_)));
    }
}
