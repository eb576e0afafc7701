use crate::ui::types::choices::{NoParams, UIChoice};
use anyhow::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_test_fraction() -> f64 {
    0.25
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct ClassifyParameters {
    #[schemars(
        title = "Document",
        description = "Whitespace-separated tokens to classify"
    )]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HoldoutParameters {
    #[serde(default = "default_test_fraction")]
    #[schemars(
        title = "Test Fraction",
        description = "Share of labeled instances held out for testing (exclusive 0–1)",
        extend("exclusiveMinimum" = 0.0, "exclusiveMaximum" = 1.0),
        default = "default_test_fraction"
    )]
    pub test_fraction: f64,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed for the split", default = "default_seed")]
    pub seed: u64,

    #[serde(default)]
    #[schemars(title = "Per-Class Metrics", description = "Report precision/recall per category?")]
    pub per_class: bool,
}

impl Default for HoldoutParameters {
    fn default() -> Self {
        Self {
            test_fraction: default_test_fraction(),
            seed: default_seed(),
            per_class: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Classify",
        detailed_message = "Predict the category of a typed document."
    ))]
    Classify(ClassifyParameters),

    #[strum_discriminants(strum(
        message = "Evaluate Hold-out",
        detailed_message = "Train on a random split and score the rest."
    ))]
    EvaluateHoldout(HoldoutParameters),

    #[strum_discriminants(strum(message = "Quit"))]
    Quit(NoParams),
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn default_params(kind: Self::Kind) -> Result<Value> {
        Ok(match kind {
            TaskKind::Classify => serde_json::to_value(ClassifyParameters::default())?,
            TaskKind::EvaluateHoldout => serde_json::to_value(HoldoutParameters::default())?,
            TaskKind::Quit => serde_json::to_value(NoParams::default())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{FieldKind, field_specs};
    use serde_json::json;

    #[test]
    fn holdout_fields_carry_ranges() {
        let specs = field_specs(&TaskChoice::schema(), "evaluate-holdout").unwrap();
        let fraction = specs.iter().find(|s| s.name == "test_fraction").unwrap();
        assert_eq!(fraction.kind, FieldKind::Number);
        assert_eq!(fraction.title, "Test Fraction");
        assert_eq!(fraction.min, Some(0.0));
        assert_eq!(fraction.max, Some(1.0));
        assert!(fraction.min_exclusive && fraction.max_exclusive);

        let seed = specs.iter().find(|s| s.name == "seed").unwrap();
        assert_eq!(seed.kind, FieldKind::Integer);
    }

    #[test]
    fn holdout_defaults_fill_missing_params() {
        let t = TaskChoice::from_parts(TaskKind::EvaluateHoldout, json!({})).unwrap();
        assert_eq!(t, TaskChoice::EvaluateHoldout(HoldoutParameters::default()));
    }

    #[test]
    fn quit_has_no_params() {
        assert_eq!(
            TaskChoice::from_parts(TaskKind::Quit, json!({})).unwrap(),
            TaskChoice::Quit(NoParams {})
        );
    }
}
