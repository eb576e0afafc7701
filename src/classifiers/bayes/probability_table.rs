#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId(pub usize);

/// Dense `categories × terms` table of conditional probabilities.
///
/// Every `(CategoryId, TermId)` pair inside the table's dimensions has an
/// entry; rows are stored contiguously per category.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    number_of_categories: usize,
    number_of_terms: usize,
    values: Vec<f64>,
}

impl ProbabilityTable {
    pub fn new(number_of_categories: usize, number_of_terms: usize) -> Self {
        Self {
            number_of_categories,
            number_of_terms,
            values: vec![0.0; number_of_categories * number_of_terms],
        }
    }

    #[inline]
    fn offset(&self, category: CategoryId, term: TermId) -> Option<usize> {
        if category.0 >= self.number_of_categories || term.0 >= self.number_of_terms {
            return None;
        }
        Some(category.0 * self.number_of_terms + term.0)
    }

    #[inline]
    pub fn get(&self, category: CategoryId, term: TermId) -> Option<f64> {
        self.offset(category, term).map(|i| self.values[i])
    }

    /// Returns `false` when the key is outside the table.
    #[must_use]
    pub fn set(&mut self, category: CategoryId, term: TermId, value: f64) -> bool {
        match self.offset(category, term) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// All term probabilities of one category, indexed by `TermId`.
    pub fn row(&self, category: CategoryId) -> Option<&[f64]> {
        if category.0 >= self.number_of_categories {
            return None;
        }
        let start = category.0 * self.number_of_terms;
        self.values.get(start..start + self.number_of_terms)
    }

    pub fn number_of_terms(&self) -> usize {
        self.number_of_terms
    }

    pub fn number_of_categories(&self) -> usize {
        self.number_of_categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_by_pair() {
        let mut t = ProbabilityTable::new(2, 3);
        assert!(t.set(CategoryId(1), TermId(2), 0.5));
        assert_eq!(t.get(CategoryId(1), TermId(2)), Some(0.5));
        assert_eq!(t.get(CategoryId(0), TermId(2)), Some(0.0));
        assert_eq!(t.number_of_categories(), 2);
    }

    #[test]
    fn out_of_range_keys_are_rejected() {
        let mut t = ProbabilityTable::new(2, 3);
        assert!(!t.set(CategoryId(2), TermId(0), 1.0));
        assert!(!t.set(CategoryId(0), TermId(3), 1.0));
        assert_eq!(t.get(CategoryId(0), TermId(3)), None);
        assert!(t.row(CategoryId(2)).is_none());
    }

    #[test]
    fn rows_do_not_overlap() {
        let mut t = ProbabilityTable::new(2, 2);
        assert!(t.set(CategoryId(0), TermId(1), 0.25));
        assert!(t.set(CategoryId(1), TermId(0), 0.75));
        assert_eq!(t.row(CategoryId(0)).unwrap(), &[0.0, 0.25]);
        assert_eq!(t.row(CategoryId(1)).unwrap(), &[0.75, 0.0]);
    }

    #[test]
    fn categories_without_terms_are_still_counted() {
        let t = ProbabilityTable::new(3, 0);
        assert_eq!(t.number_of_categories(), 3);
        assert_eq!(t.number_of_terms(), 0);
        assert_eq!(t.row(CategoryId(2)), Some(&[][..]));
        assert!(t.row(CategoryId(3)).is_none());
    }
}
