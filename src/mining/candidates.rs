//! Prefix-join candidate generation.
//!
//! Level k candidates are built from the frequent (k-1)-itemsets: every
//! pair whose canonical item lists agree on the first k-2 elements and
//! differ in the last joins into a k-itemset.
//!
//! This is the baseline join only. It does not additionally check that
//! every (k-1)-subset of a candidate is frequent, so it emits a superset
//! of the canonical Apriori-gen candidate set; the support-count filter
//! prunes both down to the same frequent itemsets.

use crate::itemset::{Item, Itemset};

/// Generate level-k candidates from the frequent (k-1)-itemsets.
///
/// Itemsets are already stored in canonical sorted order, so the join
/// compares prefixes directly. Every unordered pair is considered once.
pub fn generate_candidates<I: Item>(frequent: &[Itemset<I>]) -> Vec<Itemset<I>> {
    let mut candidates = Vec::new();

    for i in 0..frequent.len() {
        for j in (i + 1)..frequent.len() {
            if let Some(candidate) = try_merge(&frequent[i], &frequent[j]) {
                candidates.push(candidate);
            }
        }
    }

    candidates
}

/// Join two sorted (k-1)-itemsets sharing a (k-2)-prefix.
///
/// Returns `None` when the prefixes differ or the last elements match
/// (the pair does not extend a shared prefix).
fn try_merge<I: Item>(a: &Itemset<I>, b: &Itemset<I>) -> Option<Itemset<I>> {
    let (a, b) = (a.as_slice(), b.as_slice());
    debug_assert_eq!(a.len(), b.len());
    let len = a.len();

    if a[..len - 1] != b[..len - 1] || a[len - 1] == b[len - 1] {
        return None;
    }

    let mut items: Vec<I> = a.to_vec();
    items.push(b[len - 1].clone());
    Some(items.into_iter().collect())
}
