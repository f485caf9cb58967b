use wsc_core::{maximal_size, Label, PlabicTiling, VertexId, WscError};
use wsc_plabic::{
    dual_rectangle_labels, frozen_labels, rectangle_collection, rectangle_labels,
    validate_collection, Quiver, WsCollection,
};

fn label(elements: &[u32]) -> Label {
    Label::new(elements.to_vec())
}

fn vertex(idx: u64) -> VertexId {
    VertexId::from_raw(idx)
}

fn edge_pairs(collection: &WsCollection) -> Vec<(u64, u64)> {
    collection
        .quiver_edges()
        .into_iter()
        .map(|(from, to)| (from.as_raw(), to.as_raw()))
        .collect()
}

#[test]
fn rectangle_2_4_has_the_expected_labels() {
    let collection = rectangle_collection(2, 4, true).unwrap();
    let expected = vec![
        label(&[1, 2]),
        label(&[2, 3]),
        label(&[3, 4]),
        label(&[1, 4]),
        label(&[2, 4]),
    ];
    assert_eq!(collection.labels(), expected.as_slice());
    assert_eq!(collection.num_vertices(), 5);
    assert!(collection.is_maximal());
    assert_eq!(collection.k(), 2);
    assert_eq!(collection.n(), 4);
}

#[test]
fn rectangle_2_4_derives_the_expected_quiver() {
    let collection = rectangle_collection(2, 4, false).unwrap();
    let expected = vec![
        (0, 1),
        (0, 3),
        (1, 4),
        (2, 1),
        (2, 3),
        (3, 4),
        (4, 0),
        (4, 2),
    ];
    assert_eq!(edge_pairs(&collection), expected);
    for idx in 0..4 {
        assert_eq!(collection.degree(vertex(idx)).unwrap(), 3);
    }
    assert_eq!(collection.degree(vertex(4)).unwrap(), 4);
    assert_eq!(
        collection.out_neighbors(vertex(4)).unwrap(),
        vec![vertex(0), vertex(2)]
    );
    assert_eq!(
        collection.in_neighbors(vertex(4)).unwrap(),
        vec![vertex(1), vertex(3)]
    );
}

#[test]
fn frozen_and_mutable_queries_split_the_rectangle() {
    let collection = rectangle_collection(2, 4, false).unwrap();
    for idx in 0..4 {
        assert!(collection.is_frozen(vertex(idx)).unwrap());
        assert!(!collection.is_mutable(vertex(idx)).unwrap());
    }
    assert!(!collection.is_frozen(vertex(4)).unwrap());
    assert!(collection.is_mutable(vertex(4)).unwrap());
}

#[test]
fn rectangle_4_9_matches_the_grid_shape() {
    let collection = rectangle_collection(4, 9, true).unwrap();
    assert_eq!(collection.num_vertices(), maximal_size(4, 9));
    assert_eq!(collection.num_vertices(), 21);
    for idx in 0..9 {
        assert!(collection.is_frozen(vertex(idx)).unwrap());
    }
    assert_eq!(collection.label(vertex(9)).unwrap(), &label(&[2, 7, 8, 9]));
    assert!(collection.is_mutable(vertex(9)).unwrap());
    validate_collection(&collection).unwrap();
}

#[test]
fn vertex_and_label_lookup_round_trip() {
    let collection = rectangle_collection(2, 4, false).unwrap();
    let diagonal = label(&[2, 4]);
    let found = collection.vertex_of_label(&diagonal).unwrap();
    assert_eq!(found, vertex(4));
    assert_eq!(collection.label(found).unwrap(), &diagonal);
    assert!(collection.vertex_of_label(&label(&[1, 3])).is_none());
}

#[test]
fn unknown_vertices_are_reported() {
    let collection = rectangle_collection(2, 4, false).unwrap();
    let err = collection.label(vertex(99)).unwrap_err();
    assert!(matches!(err, WscError::Lookup(_)));
    assert_eq!(err.info().code, "unknown-vertex");
    assert_eq!(err.info().context.get("vertex").map(String::as_str), Some("99"));
}

#[test]
fn equality_ignores_vertex_ordering() {
    let ordered = rectangle_collection(2, 4, true).unwrap();
    let mut shuffled = rectangle_labels(2, 4).unwrap();
    shuffled.reverse();
    let reordered = WsCollection::new(2, 4, shuffled, false).unwrap();
    assert_eq!(ordered, reordered);
}

#[test]
fn equality_distinguishes_diagonals() {
    let with_24 = rectangle_collection(2, 4, false).unwrap();
    let mut labels = frozen_labels(2, 4).unwrap();
    labels.push(label(&[1, 3]));
    let with_13 = WsCollection::new(2, 4, labels, false).unwrap();
    assert_ne!(with_24, with_13);
}

#[test]
fn clique_computation_is_opt_in() {
    let mut collection = rectangle_collection(2, 4, false).unwrap();
    assert!(!collection.has_cliques());
    assert!(collection.white_faces().is_none());
    assert!(collection.black_faces().is_none());
    collection.compute_cliques();
    assert!(collection.has_cliques());
    assert_eq!(collection.cliques().unwrap().num_faces(), 4);
    collection.drop_cliques();
    assert!(!collection.has_cliques());
}

#[test]
fn constructors_reject_bad_dimensions() {
    let err = WsCollection::new(0, 4, Vec::new(), false).unwrap_err();
    assert!(matches!(err, WscError::Collection(_)));
    assert_eq!(err.info().code, "bad-dimensions");
    let err = WsCollection::new(5, 4, Vec::new(), false).unwrap_err();
    assert_eq!(err.info().code, "bad-dimensions");
}

#[test]
fn seed_families_reject_degenerate_dimensions() {
    let err = frozen_labels(4, 4).unwrap_err();
    assert_eq!(err.info().code, "bad-dimensions");
    let err = rectangle_labels(0, 4).unwrap_err();
    assert_eq!(err.info().code, "bad-dimensions");
}

#[test]
fn with_quiver_checks_the_vertex_count() {
    let labels = frozen_labels(2, 4).unwrap();
    let err = WsCollection::with_quiver(2, 4, labels, Quiver::empty(7), false).unwrap_err();
    assert!(matches!(err, WscError::Collection(_)));
    assert_eq!(err.info().code, "quiver-size-mismatch");
    assert_eq!(err.info().context.get("labels").map(String::as_str), Some("4"));
    assert_eq!(
        err.info().context.get("quiver_vertices").map(String::as_str),
        Some("7")
    );
}

#[test]
fn non_maximal_collections_report_their_size() {
    let partial = WsCollection::new(2, 4, frozen_labels(2, 4).unwrap(), false).unwrap();
    assert!(!partial.is_maximal());
    assert_eq!(partial.num_vertices(), 4);
}

#[test]
fn dual_rectangle_complements_the_transposed_rectangle() {
    let dual = dual_rectangle_labels(2, 5).unwrap();
    let rectangle = rectangle_labels(3, 5).unwrap();
    assert_eq!(dual.len(), rectangle.len());
    for (dual_label, rect_label) in dual.iter().zip(&rectangle) {
        assert_eq!(&rect_label.complement(5), dual_label);
        assert_eq!(dual_label.len(), 2);
    }
}

#[test]
fn vertices_iterate_in_index_order() {
    let collection = rectangle_collection(2, 5, false).unwrap();
    let ids: Vec<u64> = collection.vertices().map(|v| v.as_raw()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(collection.vertices().len(), 7);
}
