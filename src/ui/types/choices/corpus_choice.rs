use crate::ui::types::choices::UIChoice;
use anyhow::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_delimiter() -> String {
    ",".to_string()
}

/// Empty parameter object so the wizard can still look under "params"
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoParams {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct JsonLinesParameters {
    #[schemars(
        with = "String",
        title = "Corpus Path",
        description = "Path to a JSON-lines file, one instance per line",
        extend("x-file" = true, "x-extensions" = ["jsonl", "json"])
    )]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DelimitedParameters {
    #[schemars(
        with = "String",
        title = "Corpus Path",
        description = "Path to an id,category,text file",
        extend("x-file" = true, "x-extensions" = ["csv", "tsv", "txt"])
    )]
    pub path: PathBuf,

    #[serde(default = "default_delimiter")]
    #[schemars(
        title = "Delimiter",
        description = "Single-character field separator (\\t or 'tab' for tabs)",
        default = "default_delimiter"
    )]
    pub delimiter: String,
}

impl Default for DelimitedParameters {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            delimiter: default_delimiter(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(CorpusKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum CorpusChoice {
    #[strum_discriminants(strum(
        message = "Textbook Demo",
        detailed_message = "Four China/Japan documents plus one unlabeled query."
    ))]
    TextbookDemo(NoParams),

    #[strum_discriminants(strum(
        message = "JSON Lines File",
        detailed_message = "One {\"id\", \"tokens\", \"category\"} object per line."
    ))]
    JsonLines(JsonLinesParameters),

    #[strum_discriminants(strum(
        message = "Delimited File",
        detailed_message = "CSV/TSV records of id, category and whitespace-separated text."
    ))]
    Delimited(DelimitedParameters),
}

impl UIChoice for CorpusChoice {
    type Kind = CorpusKind;

    fn schema() -> Schema {
        schema_for!(CorpusChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a corpus:"
    }

    fn default_params(kind: Self::Kind) -> Result<Value> {
        Ok(match kind {
            CorpusKind::TextbookDemo => serde_json::to_value(NoParams::default())?,
            CorpusKind::JsonLines => serde_json::to_value(JsonLinesParameters::default())?,
            CorpusKind::Delimited => serde_json::to_value(DelimitedParameters::default())?,
        })
    }
}
