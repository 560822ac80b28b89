//! claimtree: reconstruct the dependency forest of a patent's numbered claims.
//!
//! Independent claims are roots; every dependent claim is attached as a
//! child of each claim it references ("The device of claim 1..."). The core
//! lives in [`domain`] and operates purely on in-memory strings; [`cli`] is
//! the thin shell that reads claim files and prints forests.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{Claim, ClaimForest, DanglingPolicy, DomainError, ForestBuilder};
