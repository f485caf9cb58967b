#![deny(missing_docs)]

//! Combinatorial engine for weakly separated collections and their plabic
//! tilings, implementing the `wsc-core` contracts.

mod cliques;
mod collection;
mod extension;
mod generators;
mod hash;
mod ids;
mod mutation;
mod quiver;
mod separation;
mod serialization;
mod symmetry;
mod validate;

pub use cliques::Cliques;
pub use collection::WsCollection;
pub use extension::{
    extend_to_collection, extend_to_collection_with, extend_weakly_separated,
    extend_weakly_separated_with,
};
pub use generators::{
    dual_rectangle_collection, dual_rectangle_labels, frozen_labels, random_collection,
    rectangle_collection, rectangle_labels,
};
pub use mutation::{mutate, mutate_by_label, mutated, mutated_by_label};
pub use quiver::Quiver;
pub use separation::{pairwise_weakly_separated, weakly_separated};
pub use symmetry::{
    complement, complemented, reflect, reflected, rotate, rotated, swap_colors, swapped_colors,
};
pub use validate::validate_collection;

/// Re-export hashing for downstream determinism checks.
pub use hash::canonical_hash;

/// Re-export serialization helpers for downstream crates.
pub use serialization::{
    collection_from_bytes, collection_from_json, collection_to_bytes, collection_to_json,
};
