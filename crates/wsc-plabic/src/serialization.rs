use serde::{Deserialize, Serialize};

use wsc_core::errors::{ErrorInfo, WscError};
use wsc_core::{Label, PlabicTiling, SchemaVersion, VertexId};

use crate::collection::WsCollection;
use crate::quiver::Quiver;

/// Serializes the collection to a compact binary representation using
/// `bincode`.
pub fn collection_to_bytes(collection: &WsCollection) -> Result<Vec<u8>, WscError> {
    let serializable = SerializableCollection::from_collection(collection);
    bincode::serialize(&serializable)
        .map_err(|err| WscError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a collection from its binary representation.
pub fn collection_from_bytes(bytes: &[u8]) -> Result<WsCollection, WscError> {
    let serializable: SerializableCollection = bincode::deserialize(bytes)
        .map_err(|err| WscError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_collection()
}

/// Serializes the collection to a JSON string.
pub fn collection_to_json(collection: &WsCollection) -> Result<String, WscError> {
    let serializable = SerializableCollection::from_collection(collection);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| WscError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a collection from a JSON string.
pub fn collection_from_json(json: &str) -> Result<WsCollection, WscError> {
    let serializable: SerializableCollection = serde_json::from_str(json)
        .map_err(|err| WscError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_collection()
}

/// Index-stable payload: labels and quiver edges are recorded in vertex
/// order, and face maps are rebuilt from them on restore rather than
/// persisted.
#[derive(Debug, Serialize, Deserialize)]
struct SerializableCollection {
    schema_version: SchemaVersion,
    k: u32,
    n: u32,
    labels: Vec<Vec<u32>>,
    quiver_edges: Vec<(u64, u64)>,
    cliques_present: bool,
}

impl SerializableCollection {
    fn from_collection(collection: &WsCollection) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            k: collection.k(),
            n: collection.n(),
            labels: collection
                .labels()
                .iter()
                .map(|label| label.as_slice().to_vec())
                .collect(),
            quiver_edges: collection
                .quiver_edges()
                .into_iter()
                .map(|(from, to)| (from.as_raw(), to.as_raw()))
                .collect(),
            cliques_present: collection.has_cliques(),
        }
    }

    fn into_collection(self) -> Result<WsCollection, WscError> {
        let supported = SchemaVersion::default();
        if self.schema_version.major != supported.major {
            return Err(WscError::Serde(
                ErrorInfo::new(
                    "unsupported-schema",
                    "payload was written by an incompatible schema",
                )
                .with_context("payload_major", self.schema_version.major.to_string())
                .with_context("supported_major", supported.major.to_string()),
            ));
        }
        let labels: Vec<Label> = self.labels.into_iter().map(Label::from_unsorted).collect();
        let mut quiver = Quiver::empty(labels.len());
        for (from, to) in self.quiver_edges {
            quiver
                .add_edge(VertexId::from_raw(from), VertexId::from_raw(to))
                .map_err(|err| {
                    WscError::Serde(
                        ErrorInfo::new(
                            "invalid-quiver-edge",
                            "edge endpoint falls outside the vertex range",
                        )
                        .with_context("from", from.to_string())
                        .with_context("to", to.to_string())
                        .with_context("cause", err.info().message.clone()),
                    )
                })?;
        }
        WsCollection::with_quiver(self.k, self.n, labels, quiver, self.cliques_present)
    }
}
