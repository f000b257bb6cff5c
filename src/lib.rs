//! Arbor ingests a CSV export of the New York City street tree census and
//! answers interactive substring queries about tree species: how many
//! matching trees stand citywide and in each borough. Records live in an
//! unbalanced binary search tree ordered by (species name, id); the
//! collection layers per-borough counters and a distinct-species index on
//! top of it, and the counting queries combine a substring scan over that
//! index with full in-order traversals of the tree. The tree is populated
//! once while the dataset loads and is read-only for the rest of the
//! process.

pub mod bst;
pub mod collection;
pub mod csv;
pub mod error;
pub mod node;
pub mod record;
pub mod report;
