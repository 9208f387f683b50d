//! The association rule value type.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::itemset::{Item, Itemset};

/// An implication `antecedent -> consequent` derived from a frequent
/// itemset, with the confidence it was computed at.
///
/// Identity is the (antecedent, consequent) split alone: two rules with
/// the same split but different confidence values compare equal and hash
/// identically, so a `HashSet` deduplicates splits reachable via
/// different expansion paths.
#[derive(Debug, Clone)]
pub struct AssociationRule<I: Item> {
    antecedent: Itemset<I>,
    consequent: Itemset<I>,
    confidence: f64,
}

impl<I: Item> AssociationRule<I> {
    /// Create a rule. The antecedent and consequent must be disjoint;
    /// that invariant is upheld by the generator, which only ever moves
    /// items between the two sides.
    pub fn new(antecedent: Itemset<I>, consequent: Itemset<I>, confidence: f64) -> Self {
        debug_assert!(antecedent.is_disjoint(&consequent));
        Self {
            antecedent,
            consequent,
            confidence,
        }
    }

    /// The rule's antecedent ("if" side).
    pub fn antecedent(&self) -> &Itemset<I> {
        &self.antecedent
    }

    /// The rule's consequent ("then" side).
    pub fn consequent(&self) -> &Itemset<I> {
        &self.consequent
    }

    /// Confidence: `support(antecedent ∪ consequent) / support(antecedent)`.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

impl<I: Item> PartialEq for AssociationRule<I> {
    fn eq(&self, other: &Self) -> bool {
        // Confidence is deliberately excluded.
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

impl<I: Item> Eq for AssociationRule<I> {}

impl<I: Item> Hash for AssociationRule<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl<I: Item + fmt::Display> fmt::Display for AssociationRule<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {}",
            self.antecedent, self.consequent, self.confidence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(items: &[&str]) -> Itemset<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn equality_ignores_confidence() {
        let a = AssociationRule::new(set(&["a"]), set(&["b"]), 0.5);
        let b = AssociationRule::new(set(&["a"]), set(&["b"]), 0.9);
        assert_eq!(a, b);

        let c = AssociationRule::new(set(&["b"]), set(&["a"]), 0.5);
        assert_ne!(a, c);
    }

    #[test]
    fn hashset_dedups_by_split() {
        let mut rules = HashSet::new();
        rules.insert(AssociationRule::new(set(&["a"]), set(&["b"]), 0.5));
        rules.insert(AssociationRule::new(set(&["a"]), set(&["b"]), 0.7));
        rules.insert(AssociationRule::new(set(&["a", "c"]), set(&["b"]), 0.7));
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn display_renders_split_and_confidence() {
        let rule = AssociationRule::new(set(&["a", "b"]), set(&["c"]), 0.75);
        assert_eq!(rule.to_string(), "[a, b] -> [c]: 0.75");
    }
}
