//! Forest builder: wires parsed claims into their dependency forest.

use generational_arena::Index;
use itertools::Itertools;
use tracing::{debug, warn};

use crate::domain::arena::ClaimForest;
use crate::domain::claim::{find_references, Claim};
use crate::domain::error::{DomainError, DomainResult, ReferenceFault};

/// What to do with a reference to a claim number that was never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DanglingPolicy {
    /// Fail the whole build with `DomainError::DanglingReference`.
    #[default]
    Fail,
    /// Record a fault on the forest and keep wiring. A claim whose
    /// references all dangle is kept as a root-like orphan.
    Record,
}

/// Builds a [`ClaimForest`] from an ordered sequence of raw claim strings.
///
/// Stateless between builds; every call starts from a fresh forest.
#[derive(Debug, Clone, Default)]
pub struct ForestBuilder {
    dangling_policy: DanglingPolicy,
    dedup_references: bool,
}

impl ForestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dangling_policy(mut self, policy: DanglingPolicy) -> Self {
        self.dangling_policy = policy;
        self
    }

    /// Collapse duplicate references within one claim into a single child
    /// edge. Off by default: "claim 1 ... claim 1" yields two edges.
    pub fn with_dedup_references(mut self, dedup: bool) -> Self {
        self.dedup_references = dedup;
        self
    }

    /// Build the forest.
    ///
    /// Unparseable claim strings are skipped. Duplicate claim numbers keep
    /// the last text seen. Roots come back in first-encounter order.
    pub fn build<I, S>(&self, claims: I) -> DomainResult<ClaimForest>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut forest = ClaimForest::new();

        // First pass: one node per claim number.
        for raw in claims {
            match Claim::parse(raw.as_ref()) {
                Some(claim) => {
                    if forest.contains(claim.number) {
                        warn!(number = claim.number, "duplicate claim number, last definition wins");
                    }
                    forest.insert(claim);
                }
                None => debug!("skipping unparseable claim line"),
            }
        }

        // Second pass: wire children under every referenced claim.
        let parsed: Vec<(Index, u32, Vec<u32>)> = forest
            .nodes()
            .map(|(idx, node)| (idx, node.claim.number, find_references(&node.claim.text)))
            .collect();

        for (idx, number, refs) in parsed {
            if refs.is_empty() {
                forest.mark_root(idx);
                continue;
            }
            let refs = if self.dedup_references {
                refs.into_iter().unique().collect()
            } else {
                refs
            };

            let mut attached = false;
            for reference in refs {
                match forest.lookup(reference) {
                    Some(parent) => {
                        forest.attach_child(parent, idx);
                        attached = true;
                    }
                    None => match self.dangling_policy {
                        DanglingPolicy::Fail => {
                            return Err(DomainError::DanglingReference {
                                claim: number,
                                reference,
                            });
                        }
                        DanglingPolicy::Record => {
                            forest.record_fault(ReferenceFault {
                                claim: number,
                                reference,
                            });
                        }
                    },
                }
            }
            // All references dangled: keep the claim reachable.
            if !attached {
                forest.mark_root(idx);
            }
        }

        Ok(forest)
    }
}
