use rand::seq::SliceRandom;
use rand::RngCore;

use wsc_core::errors::{ErrorInfo, WscError};
use wsc_core::rng::{derive_substream_seed, RngHandle};
use wsc_core::{Label, PlabicTiling};

use crate::collection::WsCollection;
use crate::mutation::mutate;

/// The n frozen labels for `(k, n)`: every cyclic interval of length k, in
/// starting-point order beginning with `{1, ..., k}`.
pub fn frozen_labels(k: u32, n: u32) -> Result<Vec<Label>, WscError> {
    check_seed_dimensions(k, n)?;
    Ok((0..n)
        .map(|offset| Label::cyclic_interval(n, offset + 1, k))
        .collect())
}

/// Labels of the rectangle seed collection: the frozen labels followed by
/// the interior grid, row by row.
///
/// The interior label in row `r`, column `c` is
/// `{c+1, ..., c+r} + {n-k+r+1, ..., n}` for `1 <= r <= k-1` and
/// `1 <= c <= n-k-1`, giving the maximal cardinality `k * (n - k) + 1`.
pub fn rectangle_labels(k: u32, n: u32) -> Result<Vec<Label>, WscError> {
    let mut labels = frozen_labels(k, n)?;
    for row in 1..k {
        for column in 1..(n - k) {
            let mut elements: Vec<u32> = ((column + 1)..=(column + row)).collect();
            elements.extend((n - k + row + 1)..=n);
            labels.push(Label::new(elements));
        }
    }
    Ok(labels)
}

/// Labels of the dual rectangle seed: the complements of the rectangle
/// labels for `(n - k, n)`.
pub fn dual_rectangle_labels(k: u32, n: u32) -> Result<Vec<Label>, WscError> {
    check_seed_dimensions(k, n)?;
    Ok(rectangle_labels(n - k, n)?
        .iter()
        .map(|label| label.complement(n))
        .collect())
}

/// Builds the rectangle collection, the canonical maximal seed for `(k, n)`.
pub fn rectangle_collection(
    k: u32,
    n: u32,
    compute_cliques: bool,
) -> Result<WsCollection, WscError> {
    WsCollection::new(k, n, rectangle_labels(k, n)?, compute_cliques)
}

/// Builds the dual rectangle collection.
pub fn dual_rectangle_collection(
    k: u32,
    n: u32,
    compute_cliques: bool,
) -> Result<WsCollection, WscError> {
    WsCollection::new(k, n, dual_rectangle_labels(k, n)?, compute_cliques)
}

/// Builds a pseudo-random maximal collection by walking `steps` exchange
/// moves from the rectangle seed.
///
/// Each step picks uniformly among the vertices that are mutable at that
/// moment, so the walk is fully determined by the seed inside `rng`. The
/// walk runs on a substream derived from a single draw of `rng`, leaving
/// the caller's handle at the same position whatever `steps` is. The walk
/// stops early if no mutable vertex remains, which only happens for
/// degenerate dimensions.
pub fn random_collection(
    k: u32,
    n: u32,
    steps: usize,
    rng: &mut RngHandle,
    compute_cliques: bool,
) -> Result<WsCollection, WscError> {
    let mut collection = rectangle_collection(k, n, compute_cliques)?;
    let mut walk_rng = RngHandle::from_seed(derive_substream_seed(rng.next_u64(), 1));
    for _ in 0..steps {
        let mut movable = Vec::new();
        for vertex in collection.vertices() {
            if collection.is_mutable(vertex)? {
                movable.push(vertex);
            }
        }
        let Some(&choice) = movable.choose(&mut walk_rng) else {
            break;
        };
        mutate(&mut collection, choice)?;
    }
    Ok(collection)
}

fn check_seed_dimensions(k: u32, n: u32) -> Result<(), WscError> {
    if k < 1 || k >= n {
        return Err(WscError::Collection(
            ErrorInfo::new("bad-dimensions", "seed families require 1 <= k < n")
                .with_context("k", k.to_string())
                .with_context("n", n.to_string()),
        ));
    }
    Ok(())
}
