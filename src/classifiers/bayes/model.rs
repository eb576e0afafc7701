use crate::classifiers::bayes::{CategoryId, ProbabilityTable, TermId};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub category: String,
    /// `log2(P(c)) + Σ log2(P(t|c))` over in-vocabulary tokens.
    pub score: f64,
}

/// Immutable result of a training run.
///
/// Built by the crate's model builder during `train` and
/// shared behind an `Arc` once published.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainedModel {
    categories: Vec<String>,
    category_index: HashMap<String, usize>,
    vocabulary: Vec<String>,
    term_index: HashMap<String, usize>,
    priors: Vec<f64>,
    conditionals: ProbabilityTable,
}

impl TrainedModel {
    pub(crate) fn new(
        categories: Vec<String>,
        category_index: HashMap<String, usize>,
        vocabulary: Vec<String>,
        term_index: HashMap<String, usize>,
        priors: Vec<f64>,
        conditionals: ProbabilityTable,
    ) -> Self {
        Self {
            categories,
            category_index,
            vocabulary,
            term_index,
            priors,
            conditionals,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn category_id(&self, category: &str) -> Option<CategoryId> {
        self.category_index.get(category).copied().map(CategoryId)
    }

    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.term_index.get(term).copied().map(TermId)
    }

    pub fn prior(&self, category: &str) -> Option<f64> {
        self.category_id(category).map(|c| self.priors[c.0])
    }

    pub fn conditional(&self, category: &str, term: &str) -> Option<f64> {
        self.conditionals
            .get(self.category_id(category)?, self.term_id(term)?)
    }

    pub fn conditionals(&self) -> &ProbabilityTable {
        &self.conditionals
    }

    /// Scores every category for `tokens`, in category order.
    ///
    /// Tokens outside the vocabulary are skipped.
    pub fn scores(&self, tokens: &[String]) -> Vec<CategoryScore> {
        let known: Vec<TermId> = tokens.iter().filter_map(|t| self.term_id(t)).collect();

        self.categories
            .iter()
            .enumerate()
            .map(|(c, category)| {
                let mut score = self.priors[c].log2();
                if let Some(row) = self.conditionals.row(CategoryId(c)) {
                    for term in &known {
                        score += row[term.0].log2();
                    }
                }
                CategoryScore {
                    category: category.clone(),
                    score,
                }
            })
            .collect()
    }

    /// First category holding the maximum score, if any.
    pub fn best_category<'a>(scores: &'a [CategoryScore]) -> Option<&'a CategoryScore> {
        let mut best: Option<&CategoryScore> = None;
        for s in scores {
            match best {
                Some(b) if s.score <= b.score => {}
                _ => best = Some(s),
            }
        }
        best
    }
}
