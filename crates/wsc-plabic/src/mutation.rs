use std::collections::BTreeSet;

use wsc_core::{ErrorInfo, Label, PlabicTiling, VertexId, WscError};

use crate::collection::WsCollection;
use crate::ids::make_vertex;
use crate::quiver::oriented_edge;

/// Fires the exchange move at a mutable vertex, rewriting the collection in
/// place.
///
/// The vertex label `I + {a, c}` is replaced by `I + {b, d}`, where the four
/// quiver neighbors carry `I + {a, b}`, `I + {b, c}`, `I + {c, d}` and
/// `I + {d, a}` for cyclically ordered `(a, b, c, d)`. Adjacency is patched
/// locally and, when face maps are present, only the faces incident to the
/// exchanged label are rebuilt. The move is atomic: every precondition is
/// checked before the first write, so a rejected move leaves the collection
/// exactly as it was.
pub fn mutate(collection: &mut WsCollection, vertex: VertexId) -> Result<(), WscError> {
    mutate_impl(collection, vertex)
}

/// Returns a copy of the collection with the exchange move applied, leaving
/// the original untouched.
pub fn mutated(collection: &WsCollection, vertex: VertexId) -> Result<WsCollection, WscError> {
    let mut copy = collection.clone();
    mutate_impl(&mut copy, vertex)?;
    Ok(copy)
}

/// Fires the exchange move at the vertex currently carrying `label`.
pub fn mutate_by_label(collection: &mut WsCollection, label: &Label) -> Result<(), WscError> {
    let vertex = lookup_label(collection, label)?;
    mutate_impl(collection, vertex)
}

/// Returns a copy with the exchange move applied at the vertex carrying
/// `label`.
pub fn mutated_by_label(
    collection: &WsCollection,
    label: &Label,
) -> Result<WsCollection, WscError> {
    let vertex = lookup_label(collection, label)?;
    let mut copy = collection.clone();
    mutate_impl(&mut copy, vertex)?;
    Ok(copy)
}

fn lookup_label(collection: &WsCollection, label: &Label) -> Result<VertexId, WscError> {
    collection.vertex_of_label(label).ok_or_else(|| {
        WscError::Lookup(
            ErrorInfo::new("unknown-label", "label is not part of the collection")
                .with_context("label", label.to_string()),
        )
    })
}

fn mutate_impl(collection: &mut WsCollection, vertex: VertexId) -> Result<(), WscError> {
    let idx = collection.checked_index(vertex)?;
    if collection.is_frozen(vertex)? {
        return Err(mutation_error("frozen-vertex", "cannot mutate a frozen vertex")
            .with_context("vertex", vertex.as_raw().to_string()));
    }
    let degree = collection.degree(vertex)?;
    if degree != 4 {
        return Err(
            mutation_error("bad-degree", "mutable vertices must have quiver degree 4")
                .with_context("vertex", vertex.as_raw().to_string())
                .with_context("degree", degree.to_string()),
        );
    }
    let old_label = collection.label(vertex)?.clone();
    let neighbor_ids = collection.quiver().neighbors(vertex)?;

    // The four neighbors must pair two removed elements with two inserted
    // ones in all four combinations, the inserted pair splitting the arcs
    // between the removed pair.
    let mut removed: BTreeSet<u32> = BTreeSet::new();
    let mut inserted: BTreeSet<u32> = BTreeSet::new();
    let mut exchange_pairs: BTreeSet<(u32, u32)> = BTreeSet::new();
    for neighbor in &neighbor_ids {
        let neighbor_label = collection.label(*neighbor)?;
        let out_diff = old_label.difference(neighbor_label);
        let in_diff = neighbor_label.difference(&old_label);
        if out_diff.len() != 1 || in_diff.len() != 1 {
            return Err(no_exchange_pattern(vertex, &old_label));
        }
        removed.insert(out_diff[0]);
        inserted.insert(in_diff[0]);
        exchange_pairs.insert((out_diff[0], in_diff[0]));
    }
    if removed.len() != 2 || inserted.len() != 2 || exchange_pairs.len() != 4 {
        return Err(no_exchange_pattern(vertex, &old_label));
    }
    let mut removed_iter = removed.iter();
    let a = *removed_iter.next().ok_or_else(|| no_exchange_pattern(vertex, &old_label))?;
    let c = *removed_iter.next().ok_or_else(|| no_exchange_pattern(vertex, &old_label))?;
    let between = inserted.iter().filter(|e| a < **e && **e < c).count();
    if between != 1 {
        return Err(no_exchange_pattern(vertex, &old_label));
    }
    let mut new_label = old_label.without_element(a).without_element(c);
    for element in &inserted {
        new_label = new_label.with_element(*element);
    }

    // Commit point. No fallible step remains past here.
    collection.replace_label(idx, new_label.clone());

    let subset_size = old_label.len();
    let n = collection.n();
    let (labels, quiver, cliques) = collection.split_mut();

    // Adjacency and face membership can change only at vertices sharing all
    // but one element with the old or new center label; rebuild exactly
    // those pairs and, below, scan exactly those vertices per face key.
    let mut affected: BTreeSet<usize> = BTreeSet::new();
    affected.insert(idx);
    for (other, label) in labels.iter().enumerate() {
        if other == idx {
            continue;
        }
        if label.shared_count(&old_label) + 1 == subset_size
            || label.shared_count(&new_label) + 1 == subset_size
        {
            affected.insert(other);
        }
    }
    quiver.clear_edges_among(&affected);
    let present: BTreeSet<&Label> = labels.iter().collect();
    let indices: Vec<usize> = affected.iter().copied().collect();
    for (pos, &u) in indices.iter().enumerate() {
        for &v in indices.iter().skip(pos + 1) {
            if labels[u].shared_count(&labels[v]) + 1 != labels[u].len() {
                continue;
            }
            if let Some((from, to)) = oriented_edge(n, labels, &present, u, v) {
                quiver.insert_edge(make_vertex(from), make_vertex(to));
            }
        }
    }

    if let Some(cliques) = cliques {
        cliques.rebuild_around(n, labels, &affected, &old_label, &new_label);
    }
    Ok(())
}

fn mutation_error(code: impl Into<String>, message: impl Into<String>) -> WscError {
    WscError::Mutation(ErrorInfo::new(code, message))
}

fn no_exchange_pattern(vertex: VertexId, label: &Label) -> WscError {
    WscError::Mutation(
        ErrorInfo::new(
            "no-exchange-pattern",
            "neighbor labels do not form the exchange quadrilateral",
        )
        .with_context("vertex", vertex.as_raw().to_string())
        .with_context("label", label.to_string())
        .with_hint("the quiver may not match a weakly separated label set"),
    )
}

trait ContextExt {
    fn with_context(self, key: impl Into<String>, value: impl Into<String>) -> WscError;
}

impl ContextExt for WscError {
    fn with_context(self, key: impl Into<String>, value: impl Into<String>) -> WscError {
        match self {
            WscError::Mutation(info) => WscError::Mutation(info.with_context(key, value)),
            other => other,
        }
    }
}
