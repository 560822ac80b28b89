//! Domain layer: claim parsing and forest construction
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading). Everything operates on in-memory strings and the arena.

pub mod arena;
pub mod builder;
pub mod claim;
pub mod error;
pub mod render;

pub use arena::{ClaimForest, ClaimNode, Preorder};
pub use builder::{DanglingPolicy, ForestBuilder};
pub use claim::{find_references, segment_claims, Claim};
pub use error::{DomainError, DomainResult, ReferenceFault};
pub use render::{render_outline, to_tree_string};
