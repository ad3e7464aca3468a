//! Entity partitioning for multi-entity sample collections.
//!
//! ## Purpose
//!
//! This module groups a flat collection of position samples by entity
//! identifier so that per-entity derivation and aggregation can run on
//! each group independently.
//!
//! ## Design notes
//!
//! * **Deterministic**: Groups are held in a `BTreeMap`, so iteration
//!   order is the lexicographic order of entity ids, independent of the
//!   input sample order.
//! * **Borrowing**: Groups hold references into the caller's slice; no
//!   samples are cloned.
//! * **Sorted**: Each group is stably sorted ascending by `frame`, which
//!   makes every downstream computation permutation-invariant in the
//!   original input order.
//!
//! ## Non-goals
//!
//! * This module does not filter, deduplicate, or validate samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};
#[cfg(feature = "std")]
use std::collections::BTreeMap;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::PositionSample;

// ============================================================================
// Partitioning
// ============================================================================

/// Group samples by entity id, each group stably sorted by frame.
pub fn by_entity<T: Float>(
    samples: &[PositionSample<T>],
) -> BTreeMap<&str, Vec<&PositionSample<T>>> {
    let mut groups: BTreeMap<&str, Vec<&PositionSample<T>>> = BTreeMap::new();

    for sample in samples {
        groups.entry(sample.entity_id.as_str()).or_default().push(sample);
    }

    for group in groups.values_mut() {
        group.sort_by_key(|s| s.frame);
    }

    groups
}
