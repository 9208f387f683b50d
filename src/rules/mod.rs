//! Association rule generation.
//!
//! - [`rule`] - The [`AssociationRule`] value type
//! - [`generator`] - Lattice-traversal rule mining with confidence pruning

pub mod generator;
pub mod rule;

pub use generator::{RuleError, RuleGenerator};
pub use rule::AssociationRule;
