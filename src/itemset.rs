//! Itemset value types and support counting.
//!
//! The core abstraction is [`Itemset`], a finite set of distinct items
//! stored in canonical sorted order. Canonical storage buys three things
//! at once: structural `Eq`/`Hash` from the derives, a lexicographic
//! `Ord` usable as a deterministic tie-breaker, and a prefix layout the
//! candidate join can walk directly.
//!
//! [`SupportCounts`] maps itemsets to the number of transactions that
//! contain them (as a superset). The miner fills it level by level; the
//! rule generator reads it back for confidence computation.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Bound for item types: opaque tokens from a totally ordered,
/// hashable, equality-comparable domain.
///
/// The total order drives canonical sorting in candidate joins; equality
/// and hashing drive set membership and map keys. `Debug` lets internal
/// consistency failures name the offending itemset. Blanket-implemented
/// for every qualifying type.
pub trait Item: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> Item for T {}

// ============================================================================
// Itemset
// ============================================================================

/// A finite set of distinct items in canonical sorted order.
///
/// Two itemsets are equal iff their member sets are equal; the canonical
/// representation makes the derived `Eq` and `Hash` implement exactly
/// that. Construction from any iterator sorts and deduplicates, so a
/// transaction with repeated items collapses on entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Itemset<I: Item> {
    items: Vec<I>,
}

impl<I: Item> Itemset<I> {
    /// Create an empty itemset.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a one-item itemset.
    pub fn singleton(item: I) -> Self {
        Self { items: vec![item] }
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the itemset has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Membership test via binary search on the canonical order.
    #[inline]
    pub fn contains(&self, item: &I) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// Returns true if every item of `self` occurs in `other`.
    ///
    /// Both sides are sorted, so each lookup binary-searches only the
    /// suffix past the previous match. This is the hot path of support
    /// counting.
    pub fn is_subset_of(&self, other: &Itemset<I>) -> bool {
        if self.items.len() > other.items.len() {
            return false;
        }
        let mut rest = other.items.as_slice();
        for item in &self.items {
            match rest.binary_search(item) {
                Ok(pos) => rest = &rest[pos + 1..],
                Err(_) => return false,
            }
        }
        true
    }

    /// Iterate items in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.items.iter()
    }

    /// Items as a sorted slice.
    #[inline]
    pub fn as_slice(&self) -> &[I] {
        &self.items
    }

    /// A fresh itemset with `item` added.
    ///
    /// Returns an independent value; callers storing results never share
    /// scratch state with the source set.
    pub fn with_item(&self, item: &I) -> Itemset<I> {
        match self.items.binary_search(item) {
            Ok(_) => self.clone(),
            Err(pos) => {
                let mut items = Vec::with_capacity(self.items.len() + 1);
                items.extend_from_slice(&self.items[..pos]);
                items.push(item.clone());
                items.extend_from_slice(&self.items[pos..]);
                Itemset { items }
            }
        }
    }

    /// A fresh itemset with `item` removed (unchanged copy if absent).
    pub fn without_item(&self, item: &I) -> Itemset<I> {
        match self.items.binary_search(item) {
            Ok(pos) => {
                let mut items = Vec::with_capacity(self.items.len() - 1);
                items.extend_from_slice(&self.items[..pos]);
                items.extend_from_slice(&self.items[pos + 1..]);
                Itemset { items }
            }
            Err(_) => self.clone(),
        }
    }

    /// Union of two itemsets as a fresh value.
    ///
    /// Linear merge of the two canonical orderings.
    pub fn union(&self, other: &Itemset<I>) -> Itemset<I> {
        let mut items = Vec::with_capacity(self.items.len() + other.items.len());
        let (mut a, mut b) = (self.items.as_slice(), other.items.as_slice());

        while let (Some(x), Some(y)) = (a.first(), b.first()) {
            match x.cmp(y) {
                std::cmp::Ordering::Less => {
                    items.push(x.clone());
                    a = &a[1..];
                }
                std::cmp::Ordering::Greater => {
                    items.push(y.clone());
                    b = &b[1..];
                }
                std::cmp::Ordering::Equal => {
                    items.push(x.clone());
                    a = &a[1..];
                    b = &b[1..];
                }
            }
        }
        items.extend_from_slice(a);
        items.extend_from_slice(b);

        Itemset { items }
    }

    /// Returns true if the two itemsets share no items.
    pub fn is_disjoint(&self, other: &Itemset<I>) -> bool {
        self.items.iter().all(|item| !other.contains(item))
    }
}

impl<I: Item> FromIterator<I> for Itemset<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut items: Vec<I> = iter.into_iter().collect();
        items.sort();
        items.dedup();
        Self { items }
    }
}

impl<'a, I: Item> IntoIterator for &'a Itemset<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<I: Item + fmt::Display> fmt::Display for Itemset<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

// ============================================================================
// SupportCounts
// ============================================================================

/// Mapping from itemset to the number of transactions containing it.
///
/// Filled by the miner as levels are processed; retains every count
/// computed along the way, including itemsets that turned out not to be
/// frequent (1-itemset counts stay useful for antecedent lookups during
/// rule generation).
#[derive(Debug, Clone, Default)]
pub struct SupportCounts<I: Item> {
    counts: HashMap<Itemset<I>, u64>,
}

impl<I: Item> SupportCounts<I> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Add `delta` to the count for `itemset`, inserting at zero first.
    pub fn add(&mut self, itemset: Itemset<I>, delta: u64) {
        *self.counts.entry(itemset).or_insert(0) += delta;
    }

    /// Count for `itemset`, if one was ever recorded.
    pub fn get(&self, itemset: &Itemset<I>) -> Option<u64> {
        self.counts.get(itemset).copied()
    }

    /// Support fraction for `itemset` over `transaction_count`
    /// transactions, if a count was recorded.
    pub fn support(&self, itemset: &Itemset<I>, transaction_count: usize) -> Option<f64> {
        self.get(itemset)
            .map(|count| count as f64 / transaction_count as f64)
    }

    /// Number of distinct itemsets with a recorded count.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no counts were recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
