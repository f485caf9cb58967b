use std::collections::{BTreeMap, BTreeSet};

use wsc_core::{maximal_size, ErrorInfo, FaceKey, Label, PlabicTiling, VertexId, WscError};

use crate::cliques::{build_cliques, Cliques};
use crate::ids::{make_vertex, vertex_index};
use crate::quiver::{derive_quiver, Quiver};

/// A weakly separated collection with its induced quiver and optional
/// 2-colored face maps.
///
/// Pairwise weak separation and label well-formedness are a caller contract:
/// constructors and transforms never re-verify them, so violating callers
/// get structurally meaningless output rather than an error. The opt-in
/// checks live in [`crate::validate_collection`].
#[derive(Debug, Clone)]
pub struct WsCollection {
    k: u32,
    n: u32,
    labels: Vec<Label>,
    quiver: Quiver,
    cliques: Option<Cliques>,
}

impl WsCollection {
    /// Builds a collection from its label sequence, deriving the quiver from
    /// the exchange relation on label pairs.
    ///
    /// Passing `compute_cliques = false` leaves the face maps absent, which
    /// is cheaper when only labels and adjacency are needed.
    pub fn new(
        k: u32,
        n: u32,
        labels: Vec<Label>,
        compute_cliques: bool,
    ) -> Result<Self, WscError> {
        check_dimensions(k, n)?;
        let quiver = derive_quiver(n, &labels);
        let cliques = compute_cliques.then(|| build_cliques(n, &labels));
        Ok(Self {
            k,
            n,
            labels,
            quiver,
            cliques,
        })
    }

    /// Builds a collection around a caller-provided quiver instead of
    /// deriving one.
    pub fn with_quiver(
        k: u32,
        n: u32,
        labels: Vec<Label>,
        quiver: Quiver,
        compute_cliques: bool,
    ) -> Result<Self, WscError> {
        check_dimensions(k, n)?;
        if quiver.num_vertices() != labels.len() {
            return Err(WscError::Collection(
                ErrorInfo::new(
                    "quiver-size-mismatch",
                    "quiver vertex count does not match label count",
                )
                .with_context("labels", labels.len().to_string())
                .with_context("quiver_vertices", quiver.num_vertices().to_string()),
            ));
        }
        let cliques = compute_cliques.then(|| build_cliques(n, &labels));
        Ok(Self {
            k,
            n,
            labels,
            quiver,
            cliques,
        })
    }

    /// Size k of every label in the collection.
    pub fn k(&self) -> u32 {
        self.k
    }

    /// Size n of the cyclic ground set.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// The induced quiver.
    pub fn quiver(&self) -> &Quiver {
        &self.quiver
    }

    /// The face maps, when they have been computed.
    pub fn cliques(&self) -> Option<&Cliques> {
        self.cliques.as_ref()
    }

    /// True iff the face maps are present.
    pub fn has_cliques(&self) -> bool {
        self.cliques.is_some()
    }

    /// Populates the face maps if they are currently absent.
    pub fn compute_cliques(&mut self) {
        if self.cliques.is_none() {
            self.cliques = Some(build_cliques(self.n, &self.labels));
        }
    }

    /// Discards the face maps to save memory.
    pub fn drop_cliques(&mut self) {
        self.cliques = None;
    }

    /// True iff the collection has reached the maximal cardinality
    /// `k * (n - k) + 1`.
    pub fn is_maximal(&self) -> bool {
        self.labels.len() == maximal_size(self.k, self.n)
    }

    pub(crate) fn checked_index(&self, vertex: VertexId) -> Result<usize, WscError> {
        let idx = vertex_index(vertex);
        if idx >= self.labels.len() {
            return Err(WscError::Lookup(
                ErrorInfo::new("unknown-vertex", "vertex does not exist")
                    .with_context("vertex", vertex.as_raw().to_string())
                    .with_context("num_vertices", self.labels.len().to_string()),
            ));
        }
        Ok(idx)
    }

    pub(crate) fn replace_label(&mut self, index: usize, label: Label) {
        self.labels[index] = label;
    }

    pub(crate) fn split_mut(&mut self) -> (&[Label], &mut Quiver, &mut Option<Cliques>) {
        (&self.labels, &mut self.quiver, &mut self.cliques)
    }

    pub(crate) fn set_subset_size(&mut self, k: u32) {
        self.k = k;
    }

    pub(crate) fn set_labels(&mut self, labels: Vec<Label>) {
        self.labels = labels;
    }

    pub(crate) fn quiver_mut(&mut self) -> &mut Quiver {
        &mut self.quiver
    }

    pub(crate) fn set_cliques(&mut self, cliques: Option<Cliques>) {
        self.cliques = cliques;
    }
}

impl PlabicTiling for WsCollection {
    fn subset_size(&self) -> u32 {
        self.k
    }

    fn ground_size(&self) -> u32 {
        self.n
    }

    fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_> {
        Box::new((0..self.labels.len()).map(make_vertex))
    }

    fn label(&self, vertex: VertexId) -> Result<&Label, WscError> {
        let idx = self.checked_index(vertex)?;
        Ok(&self.labels[idx])
    }

    fn labels(&self) -> &[Label] {
        &self.labels
    }

    fn quiver_edges(&self) -> Vec<(VertexId, VertexId)> {
        self.quiver.edges()
    }

    fn out_neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>, WscError> {
        self.quiver.out_neighbors(vertex)
    }

    fn in_neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>, WscError> {
        self.quiver.in_neighbors(vertex)
    }

    fn degree(&self, vertex: VertexId) -> Result<usize, WscError> {
        self.quiver.degree(vertex)
    }

    fn is_frozen(&self, vertex: VertexId) -> Result<bool, WscError> {
        let label = self.label(vertex)?;
        Ok(label.len() as u32 == self.k && label.is_cyclic_interval(self.n))
    }

    fn is_mutable(&self, vertex: VertexId) -> Result<bool, WscError> {
        Ok(!self.is_frozen(vertex)? && self.degree(vertex)? == 4)
    }

    fn vertex_of_label(&self, label: &Label) -> Option<VertexId> {
        self.labels
            .iter()
            .position(|candidate| candidate == label)
            .map(make_vertex)
    }

    fn white_faces(&self) -> Option<&BTreeMap<FaceKey, Vec<VertexId>>> {
        self.cliques.as_ref().map(|cliques| cliques.white())
    }

    fn black_faces(&self) -> Option<&BTreeMap<FaceKey, Vec<VertexId>>> {
        self.cliques.as_ref().map(|cliques| cliques.black())
    }
}

impl PartialEq for WsCollection {
    /// Collections are equal when their dimensions match and their label
    /// sets coincide, irrespective of vertex ordering.
    fn eq(&self, other: &Self) -> bool {
        if self.k != other.k || self.n != other.n || self.labels.len() != other.labels.len() {
            return false;
        }
        let mine: BTreeSet<&Label> = self.labels.iter().collect();
        let theirs: BTreeSet<&Label> = other.labels.iter().collect();
        mine == theirs
    }
}

impl Eq for WsCollection {}

pub(crate) fn check_dimensions(k: u32, n: u32) -> Result<(), WscError> {
    if k < 1 || k > n {
        return Err(WscError::Collection(
            ErrorInfo::new("bad-dimensions", "subset size must satisfy 1 <= k <= n")
                .with_context("k", k.to_string())
                .with_context("n", n.to_string()),
        ));
    }
    Ok(())
}
