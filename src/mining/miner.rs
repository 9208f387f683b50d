//! The level-wise Apriori mining loop.
//!
//! [`FrequentItemsetMiner`] coordinates the full run:
//! 1. Count single items and keep the frequent ones (level 1)
//! 2. For each level k >= 2: prefix-join candidates from the previous
//!    level, count their support over all transactions, keep survivors
//! 3. Stop when a level yields no frequent itemsets
//!
//! The result is a [`FrequentItemsetData`] bundling every frequent
//! itemset across all levels with the full support-count map.

use std::collections::HashMap;

use crate::itemset::{Item, Itemset, SupportCounts};

use super::candidates::generate_candidates;
use super::logger::{MiningLogger, Verbosity};
use super::support::count_candidates;

// ============================================================================
// Errors
// ============================================================================

/// Mining argument errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MiningError {
    #[error("minimum support must be a number within [0, 1], got {value}")]
    InvalidSupport { value: f64 },
}

// ============================================================================
// MinerParams
// ============================================================================

/// Parameters for the frequent itemset miner.
#[derive(Debug, Clone, Default)]
pub struct MinerParams {
    /// Verbosity level for progress logging.
    pub verbosity: Verbosity,
}

impl MinerParams {
    /// Params with no progress output.
    pub fn silent() -> Self {
        Self {
            verbosity: Verbosity::Silent,
        }
    }
}

// ============================================================================
// FrequentItemsetData
// ============================================================================

/// Immutable result bundle of one mining run.
///
/// Holds every frequent itemset (all sizes >= 1, lower levels first),
/// the support-count map covering everything counted along the way, and
/// the run parameters. For every listed itemset,
/// `count / transaction_count >= min_support`.
#[derive(Debug, Clone)]
pub struct FrequentItemsetData<I: Item> {
    frequent_itemsets: Vec<Itemset<I>>,
    support_counts: SupportCounts<I>,
    min_support: f64,
    transaction_count: usize,
}

impl<I: Item> FrequentItemsetData<I> {
    /// All frequent itemsets, smaller sizes first.
    pub fn frequent_itemsets(&self) -> &[Itemset<I>] {
        &self.frequent_itemsets
    }

    /// The support-count map filled during mining.
    pub fn support_counts(&self) -> &SupportCounts<I> {
        &self.support_counts
    }

    /// Minimum-support threshold the run used.
    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    /// Number of transactions mined.
    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Support fraction for `itemset`, if it was counted.
    pub fn support(&self, itemset: &Itemset<I>) -> Option<f64> {
        self.support_counts.support(itemset, self.transaction_count)
    }
}

// ============================================================================
// FrequentItemsetMiner
// ============================================================================

/// Level-wise Apriori frequent itemset miner.
///
/// Pure batch computation: consumes a transaction slice and a threshold,
/// produces a fresh [`FrequentItemsetData`]. No state is shared between
/// runs.
#[derive(Debug, Clone, Default)]
pub struct FrequentItemsetMiner {
    params: MinerParams,
}

impl FrequentItemsetMiner {
    /// Create a miner with the given parameters.
    pub fn new(params: MinerParams) -> Self {
        Self { params }
    }

    /// Mine all frequent itemsets from `transactions`.
    ///
    /// Fails with [`MiningError::InvalidSupport`] before any computation
    /// if `min_support` is NaN or outside `[0, 1]`.
    ///
    /// An empty transaction slice yields `Ok(None)`: the documented
    /// no-result sentinel, not an error. Callers must check for it.
    pub fn mine<I: Item + Sync>(
        &self,
        transactions: &[Itemset<I>],
        min_support: f64,
    ) -> Result<Option<FrequentItemsetData<I>>, MiningError> {
        check_min_support(min_support)?;

        if transactions.is_empty() {
            return Ok(None);
        }

        let logger = MiningLogger::new(self.params.verbosity);
        let transaction_count = transactions.len();
        let mut support_counts = SupportCounts::new();

        // Level 1: per-item transaction counts. Every 1-itemset count is
        // recorded, frequent or not; later antecedent lookups need them.
        let frequent_items =
            find_frequent_items(transactions, &mut support_counts, min_support);
        logger.log_level(1, support_counts.len(), frequent_items.len());

        let mut frequent_itemsets: Vec<Itemset<I>> = Vec::new();
        let mut current = frequent_items;
        let mut level = 1;

        while !current.is_empty() {
            let candidates = generate_candidates(&current);
            let candidate_count = candidates.len();
            let counts = count_candidates(&candidates, transactions);

            let mut next = Vec::new();
            for (candidate, count) in candidates.into_iter().zip(counts) {
                if count == 0 {
                    // Never seen in any transaction; keep it out of the
                    // support map, matching the per-transaction counting
                    // of the sequential reference.
                    continue;
                }
                support_counts.add(candidate.clone(), count);
                if count as f64 / transaction_count as f64 >= min_support {
                    next.push(candidate);
                }
            }
            next.sort();

            level += 1;
            logger.log_level(level, candidate_count, next.len());

            frequent_itemsets.append(&mut current);
            current = next;
        }
        logger.info(&format!(
            "mined {} frequent itemsets from {} transactions",
            frequent_itemsets.len(),
            transaction_count
        ));

        Ok(Some(FrequentItemsetData {
            frequent_itemsets,
            support_counts,
            min_support,
            transaction_count,
        }))
    }
}

/// Level 1: count each distinct item and keep the frequent singletons.
///
/// Records every 1-itemset count into `support_counts`, then filters by
/// `count / transaction_count >= min_support`. The returned list is in
/// canonical item order.
fn find_frequent_items<I: Item>(
    transactions: &[Itemset<I>],
    support_counts: &mut SupportCounts<I>,
    min_support: f64,
) -> Vec<Itemset<I>> {
    let transaction_count = transactions.len();
    let mut item_counts: HashMap<I, u64> = HashMap::new();

    for transaction in transactions {
        for item in transaction {
            *item_counts.entry(item.clone()).or_insert(0) += 1;
        }
    }

    let mut frequent = Vec::new();
    for (item, count) in item_counts {
        let singleton = Itemset::singleton(item);
        if count as f64 / transaction_count as f64 >= min_support {
            frequent.push(singleton.clone());
        }
        support_counts.add(singleton, count);
    }

    frequent.sort();
    frequent
}

fn check_min_support(min_support: f64) -> Result<(), MiningError> {
    if min_support.is_nan() || !(0.0..=1.0).contains(&min_support) {
        return Err(MiningError::InvalidSupport { value: min_support });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> Itemset<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn miner() -> FrequentItemsetMiner {
        FrequentItemsetMiner::new(MinerParams::silent())
    }

    fn scenario_transactions() -> Vec<Itemset<String>> {
        vec![
            set(&["a", "b", "c"]),
            set(&["a", "b"]),
            set(&["a", "c"]),
            set(&["a", "d"]),
            set(&["b", "c"]),
        ]
    }

    #[test]
    fn rejects_nan_support() {
        let err = miner().mine(&scenario_transactions(), f64::NAN);
        assert!(matches!(err, Err(MiningError::InvalidSupport { .. })));
    }

    #[test]
    fn rejects_out_of_range_support() {
        let transactions = scenario_transactions();
        assert!(miner().mine(&transactions, -0.1).is_err());
        assert!(miner().mine(&transactions, 1.1).is_err());
    }

    #[test]
    fn empty_input_yields_sentinel() {
        let result = miner().mine::<String>(&[], 0.5).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn scenario_frequent_itemsets() {
        let data = miner()
            .mine(&scenario_transactions(), 0.4)
            .unwrap()
            .unwrap();

        let frequent = data.frequent_itemsets();
        assert_eq!(frequent.len(), 6);
        assert_eq!(
            frequent,
            &[
                set(&["a"]),
                set(&["b"]),
                set(&["c"]),
                set(&["a", "b"]),
                set(&["a", "c"]),
                set(&["b", "c"]),
            ]
        );

        assert_eq!(data.support(&set(&["a"])), Some(0.8));
        assert_eq!(data.support(&set(&["b"])), Some(0.6));
        assert_eq!(data.support(&set(&["c"])), Some(0.6));
        assert_eq!(data.support(&set(&["a", "b"])), Some(0.4));
        assert_eq!(data.support(&set(&["a", "c"])), Some(0.4));
        assert_eq!(data.support(&set(&["b", "c"])), Some(0.4));
    }

    #[test]
    fn infrequent_counts_are_retained() {
        let data = miner()
            .mine(&scenario_transactions(), 0.4)
            .unwrap()
            .unwrap();

        // {d} appears once: below threshold but still counted.
        assert_eq!(data.support_counts().get(&set(&["d"])), Some(1));
        // {a,b,c} was generated as a candidate and counted once.
        assert_eq!(data.support_counts().get(&set(&["a", "b", "c"])), Some(1));
    }

    #[test]
    fn zero_support_admits_everything_observed() {
        let data = miner()
            .mine(&scenario_transactions(), 0.0)
            .unwrap()
            .unwrap();

        // All four singletons qualify at threshold zero.
        for item in ["a", "b", "c", "d"] {
            assert!(data.frequent_itemsets().contains(&set(&[item])));
        }
    }

    #[test]
    fn full_support_admits_universal_itemsets_only() {
        let transactions = vec![
            set(&["a", "b"]),
            set(&["a", "b", "c"]),
            set(&["a", "b", "d"]),
        ];
        let data = miner().mine(&transactions, 1.0).unwrap().unwrap();

        assert_eq!(
            data.frequent_itemsets(),
            &[set(&["a"]), set(&["b"]), set(&["a", "b"])]
        );
    }

    #[test]
    fn single_transaction_mines_its_power_set_levels() {
        let transactions = vec![set(&["x", "y"])];
        let data = miner().mine(&transactions, 1.0).unwrap().unwrap();

        assert_eq!(
            data.frequent_itemsets(),
            &[set(&["x"]), set(&["y"]), set(&["x", "y"])]
        );
    }

    #[test]
    fn anti_monotonicity_holds() {
        let data = miner()
            .mine(&scenario_transactions(), 0.4)
            .unwrap()
            .unwrap();

        for itemset in data.frequent_itemsets() {
            let superset_support = data.support(itemset).unwrap();
            for item in itemset {
                let subset = itemset.without_item(item);
                if subset.is_empty() {
                    continue;
                }
                let subset_support = data.support(&subset).unwrap();
                assert!(
                    subset_support >= superset_support,
                    "support({subset:?}) < support({itemset:?})"
                );
            }
        }
    }
}
