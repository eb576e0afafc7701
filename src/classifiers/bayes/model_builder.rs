use crate::classifiers::ClassifierError;
use crate::classifiers::bayes::{CategoryId, ProbabilityTable, TermId, TrainedModel};
use std::collections::HashMap;

/// Accumulates document and term counts, then produces a [`TrainedModel`].
///
/// Categories and terms are indexed in first-seen order.
#[derive(Debug, Default)]
pub(crate) struct ModelBuilder {
    categories: Vec<String>,
    category_index: HashMap<String, usize>,
    vocabulary: Vec<String>,
    term_index: HashMap<String, usize>,
    documents_per_category: Vec<u64>,
    tokens_per_category: Vec<u64>,
    term_counts_per_category: Vec<HashMap<usize, u64>>,
    documents_seen: u64,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one labeled document. Empty labels are rejected.
    pub fn observe(&mut self, category: &str, tokens: &[String]) -> Result<(), ClassifierError> {
        if category.is_empty() {
            return Err(ClassifierError::InvalidInput(
                "category label must not be empty".to_string(),
            ));
        }
        let c = self.ensure_category(category);
        self.documents_seen += 1;
        self.documents_per_category[c] += 1;
        self.tokens_per_category[c] += tokens.len() as u64;

        for token in tokens {
            let t = self.ensure_term(token);
            *self.term_counts_per_category[c].entry(t).or_insert(0) += 1;
        }
        Ok(())
    }

    pub fn documents_seen(&self) -> u64 {
        self.documents_seen
    }

    #[inline]
    fn ensure_category(&mut self, category: &str) -> usize {
        if let Some(&c) = self.category_index.get(category) {
            return c;
        }
        let c = self.categories.len();
        self.categories.push(category.to_string());
        self.category_index.insert(category.to_string(), c);
        self.documents_per_category.push(0);
        self.tokens_per_category.push(0);
        self.term_counts_per_category.push(HashMap::new());
        c
    }

    #[inline]
    fn ensure_term(&mut self, term: &str) -> usize {
        if let Some(&t) = self.term_index.get(term) {
            return t;
        }
        let t = self.vocabulary.len();
        self.vocabulary.push(term.to_string());
        self.term_index.insert(term.to_string(), t);
        t
    }

    /// Computes priors and Laplace-smoothed conditionals:
    /// `P(t|c) = (count(t, c) + 1) / (tokens(c) + |V|)`.
    pub fn build(self) -> TrainedModel {
        let vocabulary_size = self.vocabulary.len();
        let total_documents = self.documents_seen as f64;

        let priors = self
            .documents_per_category
            .iter()
            .map(|&n| n as f64 / total_documents)
            .collect();

        let mut conditionals = ProbabilityTable::new(self.categories.len(), vocabulary_size);
        for (c, counts) in self.term_counts_per_category.iter().enumerate() {
            let denominator = (self.tokens_per_category[c] + vocabulary_size as u64) as f64;
            for t in 0..vocabulary_size {
                let count = counts.get(&t).copied().unwrap_or(0);
                let stored = conditionals.set(CategoryId(c), TermId(t), (count + 1) as f64 / denominator);
                debug_assert!(stored, "({c}, {t}) outside a {vocabulary_size}-term table");
            }
        }

        TrainedModel::new(
            self.categories,
            self.category_index,
            self.vocabulary,
            self.term_index,
            priors,
            conditionals,
        )
    }
}
