//! apriori-rs: frequent itemset mining and association rule generation.
//!
//! This crate implements the classic Apriori algorithm: a level-wise
//! candidate-generation / support-counting loop that finds all frequent
//! itemsets in a transaction collection, and a lattice-traversal rule
//! generator that derives association rules from them with
//! confidence-based pruning.
//!
//! # Example
//!
//! ```
//! use apriori_rs::{FrequentItemsetMiner, Itemset, RuleGenerator};
//!
//! let transactions: Vec<Itemset<&str>> = vec![
//!     ["bread", "milk"].into_iter().collect(),
//!     ["bread", "butter"].into_iter().collect(),
//!     ["bread", "milk", "butter"].into_iter().collect(),
//! ];
//!
//! let miner = FrequentItemsetMiner::default();
//! let data = miner.mine(&transactions, 0.5).unwrap().unwrap();
//!
//! let generator = RuleGenerator::default();
//! let rules = generator.mine_rules(&data, 0.6).unwrap();
//! assert!(rules.iter().all(|r| r.confidence() >= 0.6));
//! ```

pub mod io;
pub mod itemset;
pub mod mining;
pub mod rules;

pub use itemset::{Item, Itemset, SupportCounts};
pub use mining::{FrequentItemsetData, FrequentItemsetMiner, MinerParams, MiningError, Verbosity};
pub use rules::{AssociationRule, RuleError, RuleGenerator};
