use wsc_core::VertexId;

/// Converts a [`VertexId`] into its underlying index within label arrays.
pub(crate) fn vertex_index(id: VertexId) -> usize {
    id.as_raw() as usize
}

/// Creates a [`VertexId`] from an index.
pub(crate) fn make_vertex(index: usize) -> VertexId {
    VertexId::from_raw(index as u64)
}
