use std::collections::BTreeSet;

use wsc_core::{ErrorInfo, Label, VertexId, WscError};

use crate::ids::{make_vertex, vertex_index};

/// Directed adjacency structure over the vertices of a collection.
///
/// An edge connects two vertices whose labels are related by the local
/// exchange pattern; the edge direction records the cyclic orientation of the
/// exchange. Neighbor sets are kept ordered so every query and the edge list
/// are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiver {
    outs: Vec<BTreeSet<VertexId>>,
    ins: Vec<BTreeSet<VertexId>>,
}

impl Quiver {
    /// Creates a quiver over `num_vertices` vertices with no edges.
    pub fn empty(num_vertices: usize) -> Self {
        Self {
            outs: vec![BTreeSet::new(); num_vertices],
            ins: vec![BTreeSet::new(); num_vertices],
        }
    }

    /// Number of vertices the quiver is defined over.
    pub fn num_vertices(&self) -> usize {
        self.outs.len()
    }

    /// Inserts the directed edge `from -> to`.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<(), WscError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.insert_edge(from, to);
        Ok(())
    }

    /// Removes the directed edge `from -> to`, reporting whether it existed.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<bool, WscError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        let removed = self.outs[vertex_index(from)].remove(&to);
        self.ins[vertex_index(to)].remove(&from);
        Ok(removed)
    }

    /// True iff the directed edge `from -> to` exists.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.outs
            .get(vertex_index(from))
            .map(|targets| targets.contains(&to))
            .unwrap_or(false)
    }

    /// Returns the outgoing neighbors of a vertex in increasing index order.
    pub fn out_neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>, WscError> {
        self.check_vertex(vertex)?;
        Ok(self.outs[vertex_index(vertex)].iter().copied().collect())
    }

    /// Returns the incoming neighbors of a vertex in increasing index order.
    pub fn in_neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>, WscError> {
        self.check_vertex(vertex)?;
        Ok(self.ins[vertex_index(vertex)].iter().copied().collect())
    }

    /// Returns every neighbor of a vertex, inbound or outbound, without
    /// duplicates and in increasing index order.
    pub fn neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>, WscError> {
        self.check_vertex(vertex)?;
        let mut merged: BTreeSet<VertexId> =
            self.ins[vertex_index(vertex)].iter().copied().collect();
        merged.extend(self.outs[vertex_index(vertex)].iter().copied());
        Ok(merged.into_iter().collect())
    }

    /// Returns the outbound degree of a vertex.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize, WscError> {
        self.check_vertex(vertex)?;
        Ok(self.outs[vertex_index(vertex)].len())
    }

    /// Returns the inbound degree of a vertex.
    pub fn in_degree(&self, vertex: VertexId) -> Result<usize, WscError> {
        self.check_vertex(vertex)?;
        Ok(self.ins[vertex_index(vertex)].len())
    }

    /// Returns the total degree (in plus out) of a vertex.
    pub fn degree(&self, vertex: VertexId) -> Result<usize, WscError> {
        Ok(self.in_degree(vertex)? + self.out_degree(vertex)?)
    }

    /// Returns every directed edge as `(from, to)`, ordered by source then
    /// target index.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges = Vec::new();
        for (idx, targets) in self.outs.iter().enumerate() {
            for target in targets {
                edges.push((make_vertex(idx), *target));
            }
        }
        edges
    }

    /// Reverses the direction of every edge in place.
    pub fn transpose(&mut self) {
        std::mem::swap(&mut self.outs, &mut self.ins);
    }

    pub(crate) fn insert_edge(&mut self, from: VertexId, to: VertexId) {
        debug_assert!(vertex_index(from) < self.outs.len());
        debug_assert!(vertex_index(to) < self.outs.len());
        self.outs[vertex_index(from)].insert(to);
        self.ins[vertex_index(to)].insert(from);
    }

    /// Drops every edge whose endpoints both lie in `indices`.
    pub(crate) fn clear_edges_among(&mut self, indices: &BTreeSet<usize>) {
        for &idx in indices {
            let targets: Vec<VertexId> = self.outs[idx]
                .iter()
                .copied()
                .filter(|target| indices.contains(&vertex_index(*target)))
                .collect();
            for target in targets {
                self.outs[idx].remove(&target);
                self.ins[vertex_index(target)].remove(&make_vertex(idx));
            }
        }
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<(), WscError> {
        if vertex_index(vertex) >= self.outs.len() {
            return Err(WscError::Lookup(
                ErrorInfo::new("unknown-vertex", "vertex does not exist")
                    .with_context("vertex", vertex.as_raw().to_string()),
            ));
        }
        Ok(())
    }
}

/// Derives the full quiver of a label sequence by testing every pair for the
/// exchange relation.
pub(crate) fn derive_quiver(n: u32, labels: &[Label]) -> Quiver {
    let present: BTreeSet<&Label> = labels.iter().collect();
    let mut quiver = Quiver::empty(labels.len());
    for u in 0..labels.len() {
        for v in (u + 1)..labels.len() {
            if labels[u].shared_count(&labels[v]) + 1 != labels[u].len() {
                continue;
            }
            if let Some((from, to)) = oriented_edge(n, labels, &present, u, v) {
                quiver.insert_edge(make_vertex(from), make_vertex(to));
            }
        }
    }
    quiver
}

/// Decides whether the labels at indices `u` and `v` span a quiver edge and,
/// if so, in which direction.
///
/// The labels must share all but one element. Writing them as `S + {alpha}`
/// and `S + {beta}`, an element `e` outside `{alpha, beta}` blocks the pair
/// when `S + {e}` is itself a label of the collection, or when `e` lies in
/// `S` and `(S - {e}) + {alpha, beta}` does. The two labels are adjacent
/// exactly when exactly one of the two open arcs of the ground circle
/// between `alpha` and `beta` carries no blocking element; a pair with both
/// arcs unblocked bounds no exchange quadrilateral and stays disconnected,
/// which keeps the derived quiver stable under any relabeling of the ground
/// circle. The edge runs from the label holding the element that starts the
/// free arc toward the label holding the element that ends it.
pub(crate) fn oriented_edge(
    n: u32,
    labels: &[Label],
    present: &BTreeSet<&Label>,
    u: usize,
    v: usize,
) -> Option<(usize, usize)> {
    let removed = labels[u].difference(&labels[v]);
    let inserted = labels[v].difference(&labels[u]);
    if removed.len() != 1 || inserted.len() != 1 {
        return None;
    }
    let alpha = removed[0];
    let beta = inserted[0];
    let shared = labels[u].without_element(alpha);

    let mut blocked = vec![false; n as usize + 1];
    for e in 1..=n {
        if e == alpha || e == beta {
            continue;
        }
        let candidate = if shared.contains(e) {
            shared
                .without_element(e)
                .with_element(alpha)
                .with_element(beta)
        } else {
            shared.with_element(e)
        };
        if present.contains(&candidate) {
            blocked[e as usize] = true;
        }
    }

    let (lo, hi) = if alpha < beta { (alpha, beta) } else { (beta, alpha) };
    let lo_vertex = if alpha == lo { u } else { v };
    let hi_vertex = if alpha == lo { v } else { u };
    let increasing_free = ((lo + 1)..hi).all(|e| !blocked[e as usize]);
    let wrapping_free = ((hi + 1)..=n).chain(1..lo).all(|e| !blocked[e as usize]);
    match (increasing_free, wrapping_free) {
        (true, false) => Some((lo_vertex, hi_vertex)),
        (false, true) => Some((hi_vertex, lo_vertex)),
        _ => None,
    }
}
