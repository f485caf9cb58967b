#![deny(missing_docs)]
#![doc = "Core traits and data types for the weakly separated collections engine."]

use std::collections::BTreeMap;
use std::iter::ExactSizeIterator;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;
mod schema;
mod types;

pub use errors::{ErrorInfo, WscError};
pub use rng::{derive_substream_seed, RngHandle};
pub use schema::SchemaVersion;
pub use types::{maximal_size, FaceKey, Label};

/// Identifier for a vertex within a [`PlabicTiling`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u64);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Read view over a weakly separated collection and its plabic tiling.
///
/// This is the boundary consumed by renderers and persistence layers: label
/// access by stable vertex index, quiver adjacency, frozen/mutable queries,
/// and the optional 2-colored face maps. All write operations live on the
/// concrete collection type.
pub trait PlabicTiling: Send + Sync {
    /// Size k of every label.
    fn subset_size(&self) -> u32;

    /// Size n of the cyclic ground set.
    fn ground_size(&self) -> u32;

    /// Number of vertices (labels) in the collection.
    fn num_vertices(&self) -> usize;

    /// Returns an iterator over all vertex identifiers in index order.
    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_>;

    /// Returns the label attached to the given vertex.
    fn label(&self, vertex: VertexId) -> Result<&Label, WscError>;

    /// Returns the full label sequence in vertex-index order.
    fn labels(&self) -> &[Label];

    /// Returns every directed quiver edge as `(from, to)` pairs.
    fn quiver_edges(&self) -> Vec<(VertexId, VertexId)>;

    /// Returns the outgoing quiver neighbors of a vertex.
    fn out_neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>, WscError>;

    /// Returns the incoming quiver neighbors of a vertex.
    fn in_neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>, WscError>;

    /// Returns the total quiver degree (in plus out) of a vertex.
    fn degree(&self, vertex: VertexId) -> Result<usize, WscError>;

    /// True iff the vertex label is one of the n frozen cyclic intervals.
    fn is_frozen(&self, vertex: VertexId) -> Result<bool, WscError>;

    /// True iff the vertex is not frozen and has quiver degree exactly 4.
    fn is_mutable(&self, vertex: VertexId) -> Result<bool, WscError>;

    /// Looks up the vertex currently carrying the given label.
    fn vertex_of_label(&self, label: &Label) -> Option<VertexId>;

    /// The white face map, when faces have been computed.
    fn white_faces(&self) -> Option<&BTreeMap<FaceKey, Vec<VertexId>>>;

    /// The black face map, when faces have been computed.
    fn black_faces(&self) -> Option<&BTreeMap<FaceKey, Vec<VertexId>>>;
}
