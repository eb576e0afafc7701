use serde::{Deserialize, Serialize};

/// A document represented as an ordered token sequence.
///
/// `category` is `None` for documents awaiting classification. Token
/// multiplicity is meaningful: a term repeated three times counts three
/// times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    #[serde(default)]
    pub id: u64,
    pub tokens: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Instance {
    pub fn new<T, S>(id: u64, tokens: T, category: Option<String>) -> Instance
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Instance {
            id,
            tokens: tokens.into_iter().map(Into::into).collect(),
            category,
        }
    }

    pub fn labeled<T, S, C>(id: u64, tokens: T, category: C) -> Instance
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
        C: Into<String>,
    {
        Self::new(id, tokens, Some(category.into()))
    }

    pub fn unlabeled<T, S>(id: u64, tokens: T) -> Instance
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(id, tokens, None)
    }

    /// Returns the category label, treating an empty string as missing.
    pub fn category(&self) -> Option<&str> {
        match self.category.as_deref() {
            Some("") | None => None,
            Some(label) => Some(label),
        }
    }

    pub fn is_category_missing(&self) -> bool {
        self.category().is_none()
    }

    pub fn number_of_tokens(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_label_counts_as_missing() {
        let a = Instance::new(1, ["x"], Some(String::new()));
        let b = Instance::unlabeled(2, ["x"]);
        let c = Instance::labeled(3, ["x", "x"], "yes");

        assert!(a.is_category_missing());
        assert!(b.is_category_missing());
        assert_eq!(c.category(), Some("yes"));
        assert_eq!(c.number_of_tokens(), 2);
    }

    #[test]
    fn deserializes_without_id_or_category() {
        let inst: Instance = serde_json::from_str(r#"{"tokens":["a","b"]}"#).unwrap();
        assert_eq!(inst.id, 0);
        assert_eq!(inst.tokens, vec!["a", "b"]);
        assert!(inst.category.is_none());
    }
}
