use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::{Bounds, PromptDriver};
use crate::ui::types::choices::{FieldKind, FieldSpec, UIChoice, field_specs};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_label<K>(kind: K) -> String
where
    K: Copy + Into<&'static str> + EnumMessage,
{
    let label = kind.get_message().unwrap_or_else(|| kind.into());
    match kind.get_detailed_message() {
        Some(desc) if !desc.is_empty() => format!("{label}  {DIM_ITALIC}{desc}{RESET}"),
        _ => label.to_string(),
    }
}

/// Asks for a variant of `C`, then for each field of its params.
///
/// Field titles, help, bounds and defaults come from `C`'s JSON schema,
/// falling back to `C::default_params`.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let kinds: Vec<C::Kind> = C::Kind::iter().collect();
    let labels: Vec<String> = kinds.iter().map(|k| kind_label(*k)).collect();

    let picked = driver.select(C::prompt_label(), C::prompt_help(), &labels)?;
    let kind = *kinds
        .get(picked)
        .with_context(|| format!("selection {picked} out of range"))?;

    let key: &'static str = kind.into();
    let specs = field_specs(&C::schema(), key)?;
    let defaults = C::default_params(kind)?;

    let mut params = Map::new();
    for spec in specs {
        let init = spec
            .default
            .clone()
            .or_else(|| defaults.get(&spec.name).cloned());
        let value = prompt_field(driver, &spec, init)?;
        params.insert(spec.name, value);
    }

    C::from_parts(kind, Value::Object(params))
}

fn prompt_field<D: PromptDriver>(driver: &D, spec: &FieldSpec, init: Option<Value>) -> Result<Value> {
    let help = spec.description.as_deref().unwrap_or("");
    Ok(match spec.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&spec.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            match &spec.file_extensions {
                Some(exts) => {
                    let path = prompt_path_until_ok(driver, &spec.title, help, &def, exts)?;
                    Value::String(path.to_string_lossy().into_owned())
                }
                None => Value::String(driver.ask_string(&spec.title, help, &def)?),
            }
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            let bounds = Bounds {
                min: spec.min.map(|x| x as u64),
                max: spec.max.map(|x| x as u64),
                min_exclusive: spec.min_exclusive,
                max_exclusive: spec.max_exclusive,
            };
            Value::from(driver.ask_u64(&spec.title, help, def, bounds)?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            let bounds = Bounds {
                min: spec.min,
                max: spec.max,
                min_exclusive: spec.min_exclusive,
                max_exclusive: spec.max_exclusive,
            };
            Value::from(driver.ask_f64(&spec.title, help, def, bounds)?)
        }
    })
}

fn validate_file_path(input: &str, allowed_exts: &[String]) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    if !allowed_exts.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if allowed_exts.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => return Err(format!("Expected a .{} file", allowed_exts.join(" / ."))),
        }
    }
    Ok(())
}

fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    allowed_exts: &[String],
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_file_path(&answer, allowed_exts) {
            Ok(()) => return Ok(PathBuf::from(answer.trim())),
            Err(msg) => driver.notify(&msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stubs::{Answer, ScriptedDriver};
    use crate::ui::types::choices::{CorpusChoice, HoldoutParameters, TaskChoice};
    use tempfile::Builder;

    #[test]
    fn labels_include_detailed_message() {
        use crate::ui::types::choices::TaskKind;
        let label = kind_label(TaskKind::Classify);
        assert!(label.starts_with("Classify"));
        assert!(label.contains("typed document"));
        assert_eq!(kind_label(TaskKind::Quit), "Quit");
    }

    #[test]
    fn prompts_every_holdout_field() {
        let driver = ScriptedDriver::new([
            Answer::Select(1),
            Answer::F64(0.4),
            Answer::U64(7),
            Answer::Bool(true),
        ]);

        let choice = prompt_choice::<TaskChoice, _>(&driver).unwrap();
        assert_eq!(
            choice,
            TaskChoice::EvaluateHoldout(HoldoutParameters {
                test_fraction: 0.4,
                seed: 7,
                per_class: true,
            })
        );
        assert!(driver.is_exhausted());
    }

    #[test]
    fn test_fraction_limits_are_reasked() {
        let driver = ScriptedDriver::new([
            Answer::Select(1),
            Answer::F64(1.0),
            Answer::F64(0.0),
            Answer::F64(0.3),
            Answer::U64(1),
            Answer::Bool(false),
        ]);

        match prompt_choice::<TaskChoice, _>(&driver).unwrap() {
            TaskChoice::EvaluateHoldout(p) => assert_eq!(p.test_fraction, 0.3),
            other => panic!("unexpected choice: {other:?}"),
        }
        assert_eq!(driver.notices(), vec!["Must be > 0 and < 1"; 2]);
        assert!(driver.is_exhausted());
    }

    #[test]
    fn reasks_until_path_is_valid() {
        let file = Builder::new().suffix(".jsonl").tempfile().unwrap();
        let good = file.path().to_string_lossy().into_owned();

        let driver = ScriptedDriver::new([
            Answer::Select(1),
            Answer::Str("/no/such/file.jsonl".into()),
            Answer::Str(good.clone()),
        ]);

        let choice = prompt_choice::<CorpusChoice, _>(&driver).unwrap();
        match choice {
            CorpusChoice::JsonLines(p) => assert_eq!(p.path, PathBuf::from(good)),
            other => panic!("unexpected choice: {other:?}"),
        }
        assert_eq!(driver.notices().len(), 1);
        assert!(driver.notices()[0].contains("does not exist"));
    }

    #[test]
    fn rejects_wrong_extension() {
        let file = Builder::new().suffix(".arff").tempfile().unwrap();
        let msg = validate_file_path(
            &file.path().to_string_lossy(),
            &["jsonl".to_string(), "json".to_string()],
        )
        .unwrap_err();
        assert_eq!(msg, "Expected a .jsonl / .json file");
    }

    #[test]
    fn out_of_range_selection_is_an_error() {
        let driver = ScriptedDriver::new([Answer::Select(9)]);
        assert!(prompt_choice::<TaskChoice, _>(&driver).is_err());
    }
}
