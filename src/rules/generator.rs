//! Lattice-traversal association rule mining.
//!
//! For every frequent itemset of size >= 2, the generator first forms
//! the basic rules (single-item consequents), then repeatedly grows the
//! consequent one item at a time. Rules failing the confidence threshold
//! are dropped and never expanded further: the Apriori pruning idea
//! applied to confidence.
//!
//! The expansion is an explicit frontier loop rather than recursion, so
//! stack usage stays flat for large itemsets.

use std::collections::HashSet;

use crate::itemset::{Item, Itemset, SupportCounts};
use crate::mining::{FrequentItemsetData, MiningLogger, Verbosity};

use super::rule::AssociationRule;

// ============================================================================
// Errors
// ============================================================================

/// Rule generation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuleError {
    #[error("minimum confidence must be a number within [0, 1], got {value}")]
    InvalidConfidence { value: f64 },

    /// A support count expected from mining bookkeeping was absent.
    /// Signals a bug in candidate generation, never a data condition.
    #[error("missing support count for itemset {itemset}")]
    MissingSupportCount { itemset: String },
}

// ============================================================================
// RuleGenerator
// ============================================================================

/// Association rule generator over mined frequent itemsets.
#[derive(Debug, Clone, Default)]
pub struct RuleGenerator {
    verbosity: Verbosity,
}

impl RuleGenerator {
    /// Create a generator with the given logging verbosity.
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Mine association rules from `data` at `min_confidence`.
    ///
    /// Fails with [`RuleError::InvalidConfidence`] before any
    /// computation if the threshold is NaN or outside `[0, 1]`.
    ///
    /// The result is deduplicated by (antecedent, consequent) and sorted
    /// by descending confidence; ties break on ascending
    /// (antecedent, consequent) canonical order so output is
    /// deterministic.
    pub fn mine_rules<I: Item>(
        &self,
        data: &FrequentItemsetData<I>,
        min_confidence: f64,
    ) -> Result<Vec<AssociationRule<I>>, RuleError> {
        check_min_confidence(min_confidence)?;

        let logger = MiningLogger::new(self.verbosity);
        let mut collector: HashSet<AssociationRule<I>> = HashSet::new();

        for itemset in data.frequent_itemsets() {
            if itemset.len() < 2 {
                // A rule needs at least one item on each side.
                continue;
            }
            expand_itemset(itemset, data, min_confidence, &mut collector)?;
        }

        let mut rules: Vec<AssociationRule<I>> = collector.into_iter().collect();
        rules.sort_by(|a, b| {
            b.confidence()
                .total_cmp(&a.confidence())
                .then_with(|| a.antecedent().cmp(b.antecedent()))
                .then_with(|| a.consequent().cmp(b.consequent()))
        });

        logger.info(&format!(
            "generated {} association rules from {} frequent itemsets",
            rules.len(),
            data.frequent_itemsets().len()
        ));

        Ok(rules)
    }
}

/// Generate and collect all confident rules for one frequent itemset.
///
/// Basic rules seed the frontier; each pass moves one antecedent item to
/// the consequent of every frontier rule. Only rules meeting the
/// threshold are collected, and only those continue to the next pass.
fn expand_itemset<I: Item>(
    itemset: &Itemset<I>,
    data: &FrequentItemsetData<I>,
    min_confidence: f64,
    collector: &mut HashSet<AssociationRule<I>>,
) -> Result<(), RuleError> {
    let counts = data.support_counts();
    let itemset_count = count_of(counts, itemset)? as f64;

    // Basic rules: consequent is a single item.
    let mut frontier: Vec<AssociationRule<I>> = Vec::with_capacity(itemset.len());
    for item in itemset {
        let antecedent = itemset.without_item(item);
        let confidence = itemset_count / count_of(counts, &antecedent)? as f64;

        if confidence >= min_confidence {
            let rule = AssociationRule::new(antecedent, Itemset::singleton(item.clone()), confidence);
            collector.insert(rule.clone());
            frontier.push(rule);
        }
    }

    // Grow consequents until the antecedent would empty out.
    let mut consequent_len = 1;
    while itemset.len() > consequent_len + 1 && !frontier.is_empty() {
        let mut next: HashSet<AssociationRule<I>> = HashSet::new();

        for rule in &frontier {
            for item in rule.antecedent() {
                let antecedent = rule.antecedent().without_item(item);
                let consequent = rule.consequent().with_item(item);
                let confidence = itemset_count / count_of(counts, &antecedent)? as f64;

                if confidence >= min_confidence {
                    let moved = AssociationRule::new(antecedent, consequent, confidence);
                    collector.insert(moved.clone());
                    next.insert(moved);
                }
            }
        }

        frontier = next.into_iter().collect();
        consequent_len += 1;
    }

    Ok(())
}

/// Fallible support-count lookup for itemsets mining must have counted.
fn count_of<I: Item>(counts: &SupportCounts<I>, itemset: &Itemset<I>) -> Result<u64, RuleError> {
    counts
        .get(itemset)
        .ok_or_else(|| RuleError::MissingSupportCount {
            itemset: format!("{:?}", itemset.as_slice()),
        })
}

fn check_min_confidence(min_confidence: f64) -> Result<(), RuleError> {
    if min_confidence.is_nan() || !(0.0..=1.0).contains(&min_confidence) {
        return Err(RuleError::InvalidConfidence {
            value: min_confidence,
        });
    }
    Ok(())
}
