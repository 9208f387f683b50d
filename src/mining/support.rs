//! Per-level support counting.
//!
//! For one level's candidate list, counts how many transactions contain
//! each candidate as a subset. Counting is additive per transaction, so
//! the work folds across a rayon thread pool and reduces to exactly the
//! counts a sequential pass would produce.

use rayon::prelude::*;

use crate::itemset::{Item, Itemset};

/// Count, for each candidate, the number of transactions containing it.
///
/// Returns counts indexed like `candidates`. Candidates never contained
/// by any transaction stay at zero; the caller decides whether a zero
/// count is recorded.
pub fn count_candidates<I: Item + Sync>(
    candidates: &[Itemset<I>],
    transactions: &[Itemset<I>],
) -> Vec<u64> {
    if candidates.is_empty() {
        return Vec::new();
    }

    transactions
        .par_iter()
        .fold(
            || vec![0u64; candidates.len()],
            |mut counts, transaction| {
                for (slot, candidate) in counts.iter_mut().zip(candidates) {
                    if candidate.is_subset_of(transaction) {
                        *slot += 1;
                    }
                }
                counts
            },
        )
        .reduce(
            || vec![0u64; candidates.len()],
            |mut left, right| {
                for (l, r) in left.iter_mut().zip(right) {
                    *l += r;
                }
                left
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> Itemset<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_match_direct_subset_scan() {
        let transactions = vec![
            set(&["a", "b", "c"]),
            set(&["a", "b"]),
            set(&["a", "c"]),
            set(&["b", "c"]),
        ];
        let candidates = vec![set(&["a", "b"]), set(&["a", "c"]), set(&["b", "c"])];

        let counts = count_candidates(&candidates, &transactions);
        assert_eq!(counts, vec![2, 2, 2]);
    }

    #[test]
    fn uncontained_candidate_counts_zero() {
        let transactions = vec![set(&["a"]), set(&["b"])];
        let candidates = vec![set(&["a", "b"])];

        let counts = count_candidates(&candidates, &transactions);
        assert_eq!(counts, vec![0]);
    }

    #[test]
    fn empty_candidate_list() {
        let transactions = vec![set(&["a"])];
        let counts = count_candidates::<String>(&[], &transactions);
        assert!(counts.is_empty());
    }
}
