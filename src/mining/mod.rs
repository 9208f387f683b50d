//! Frequent itemset mining.
//!
//! This module contains the level-wise Apriori loop and its parts:
//!
//! - [`miner`] - The mining loop, parameters, and result bundle
//! - [`candidates`] - Prefix-join candidate generation
//! - [`support`] - Per-level support counting
//! - [`logger`] - Progress logging with verbosity levels

pub mod candidates;
pub mod logger;
pub mod miner;
pub mod support;

pub use logger::{MiningLogger, Verbosity};
pub use miner::{FrequentItemsetData, FrequentItemsetMiner, MinerParams, MiningError};
