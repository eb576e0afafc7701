use anyhow::{Context, Result, anyhow};
use schemars::Schema;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
}

/// One promptable field of a choice's `params` object.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// `min` came from `exclusiveMinimum`.
    pub min_exclusive: bool,
    /// `max` came from `exclusiveMaximum`.
    pub max_exclusive: bool,
    /// Set for string fields tagged `"x-file": true`; lists accepted
    /// extensions (empty accepts any).
    pub file_extensions: Option<Vec<String>>,
}

impl FieldSpec {
    pub fn is_file(&self) -> bool {
        self.file_extensions.is_some()
    }
}

/// Lists the `params` fields of the branch whose `type` tag is `kind_key`,
/// in schema property order.
pub fn field_specs(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root = root.as_object().context("root schema is not an object")?;

    let branches = root
        .get("oneOf")
        .or_else(|| root.get("anyOf"))
        .and_then(Value::as_array)
        .context("schema has no oneOf/anyOf branches")?;

    let branch = branches
        .iter()
        .filter_map(Value::as_object)
        .find(|b| branch_tag(b) == Some(kind_key))
        .ok_or_else(|| anyhow!("no schema branch for type={kind_key}"))?;

    let Some(params) = branch
        .get("properties")
        .and_then(|p| p.get("params"))
        .and_then(Value::as_object)
    else {
        return Ok(vec![]);
    };
    let params = resolve_ref(root, params)
        .with_context(|| format!("unresolvable params $ref for type={kind_key}"))?;

    let Some(props) = params.get("properties").and_then(Value::as_object) else {
        return Ok(vec![]);
    };

    let mut out = Vec::with_capacity(props.len());
    for (name, field) in props {
        let field = field
            .as_object()
            .and_then(|f| resolve_ref(root, f))
            .with_context(|| format!("field schema for '{name}' is not an object"))?;

        let Some(kind) = field_kind(field.get("type")) else {
            continue;
        };

        let str_of = |key: &str| field.get(key).and_then(Value::as_str).map(str::to_string);
        let (min, min_exclusive) = bound_of(field, "minimum", "exclusiveMinimum");
        let (max, max_exclusive) = bound_of(field, "maximum", "exclusiveMaximum");

        let file_extensions = (field.get("x-file").and_then(Value::as_bool) == Some(true)).then(|| {
            field
                .get("x-extensions")
                .and_then(Value::as_array)
                .map(|a| {
                    a.iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        });

        out.push(FieldSpec {
            name: name.clone(),
            title: str_of("title").unwrap_or_else(|| name.clone()),
            description: str_of("description"),
            kind,
            default: field.get("default").cloned(),
            min,
            max,
            min_exclusive,
            max_exclusive,
            file_extensions,
        });
    }
    Ok(out)
}

/// An inclusive limit wins over an exclusive one when both are present.
fn bound_of(field: &Map<String, Value>, inclusive: &str, exclusive: &str) -> (Option<f64>, bool) {
    if let Some(x) = field.get(inclusive).and_then(Value::as_f64) {
        return (Some(x), false);
    }
    match field.get(exclusive).and_then(Value::as_f64) {
        Some(x) => (Some(x), true),
        None => (None, false),
    }
}

/// The `type` discriminant of a branch, from `const` or a one-element `enum`.
fn branch_tag(branch: &Map<String, Value>) -> Option<&str> {
    let tag = branch.get("properties")?.get("type")?.as_object()?;
    if let Some(c) = tag.get("const").and_then(Value::as_str) {
        return Some(c);
    }
    match tag.get("enum").and_then(Value::as_array)?.as_slice() {
        [only] => only.as_str(),
        _ => None,
    }
}

/// Follows a local `#/...` `$ref`; objects without one are returned as is.
fn resolve_ref<'a>(
    root: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    let Some(reference) = obj.get("$ref") else {
        return Some(obj);
    };
    let path = reference.as_str()?.strip_prefix("#/")?;
    path.split('/').try_fold(root, |cur, seg| {
        let seg = seg.replace("~1", "/").replace("~0", "~");
        cur.get(&seg)?.as_object()
    })
}

fn field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    let from_name = |s: &str| match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    };
    match ty? {
        Value::String(s) => from_name(s),
        // `Option<T>` shows up as ["T", "null"]
        Value::Array(types) => types.iter().filter_map(Value::as_str).find_map(from_name),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(v: Value) -> Schema {
        Schema::try_from(v).unwrap()
    }

    fn sample() -> Schema {
        schema(json!({
            "oneOf": [
                {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string", "const": "empty" }
                    }
                },
                {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string", "enum": ["file"] },
                        "params": { "$ref": "#/$defs/FileParams" }
                    }
                }
            ],
            "$defs": {
                "FileParams": {
                    "type": "object",
                    "properties": {
                        "path": {
                            "type": "string",
                            "title": "Path",
                            "x-file": true,
                            "x-extensions": ["csv", "tsv"]
                        },
                        "ratio": {
                            "type": "number",
                            "minimum": 0.0,
                            "maximum": 1.0,
                            "default": 0.5
                        },
                        "limit": { "type": ["integer", "null"], "exclusiveMaximum": 10 },
                        "nested": { "type": "object" }
                    }
                }
            }
        }))
    }

    #[test]
    fn branch_without_params_has_no_fields() {
        assert!(field_specs(&sample(), "empty").unwrap().is_empty());
    }

    #[test]
    fn resolves_ref_and_reads_field_metadata() {
        let specs = field_specs(&sample(), "file").unwrap();
        let names: Vec<_> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["path", "ratio", "limit"]);

        assert_eq!(specs[0].title, "Path");
        assert_eq!(
            specs[0].file_extensions.as_deref(),
            Some(&["csv".to_string(), "tsv".to_string()][..])
        );
        assert_eq!(specs[1].kind, FieldKind::Number);
        assert_eq!(specs[1].title, "ratio");
        assert_eq!(specs[1].max, Some(1.0));
        assert_eq!(specs[1].default, Some(json!(0.5)));
        assert!(!specs[1].max_exclusive);
        assert_eq!(specs[2].kind, FieldKind::Integer);
        assert_eq!(specs[2].max, Some(10.0));
        assert!(specs[2].max_exclusive);
        assert!(!specs[2].min_exclusive);
        assert!(!specs[2].is_file());
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!(field_specs(&sample(), "nope").is_err());
    }
}
