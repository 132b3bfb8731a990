//! Core types for the tree catalog.

/// NodeId: Identifier assigned to a tree node by the pre-order traversal.
pub type NodeId = u64;
