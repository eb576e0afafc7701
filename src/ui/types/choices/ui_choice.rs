use anyhow::Result;
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use strum::{EnumMessage, IntoEnumIterator};

/// An adjacently tagged (`{"type": .., "params": ..}`) enum the wizard can
/// prompt for: one variant per `Kind`, one prompt per field of its params.
pub trait UIChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    fn schema() -> Schema;

    fn prompt_label() -> &'static str {
        "Choose a type:"
    }

    fn prompt_help() -> Option<&'static str> {
        Some("↑/↓ to navigate, ↵ to select")
    }

    /// Default `params` object for `kind`, used to seed prompts.
    fn default_params(kind: Self::Kind) -> Result<Value>;

    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        Ok(serde_json::from_value(json!({ "type": key, "params": params }))?)
    }
}
