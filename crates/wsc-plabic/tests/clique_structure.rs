use std::collections::BTreeMap;

use wsc_core::{FaceKey, Label, PlabicTiling, VertexId};
use wsc_plabic::{rectangle_collection, validate_collection, WsCollection};

fn label(elements: &[u32]) -> Label {
    Label::new(elements.to_vec())
}

fn face(members: &[u64]) -> Vec<VertexId> {
    members.iter().copied().map(VertexId::from_raw).collect()
}

fn expected_map(entries: &[(&[u32], &[u64])]) -> BTreeMap<FaceKey, Vec<VertexId>> {
    entries
        .iter()
        .map(|(key, members)| (key.to_vec(), face(members)))
        .collect()
}

#[test]
fn rectangle_2_4_faces_are_two_triangles_per_color() {
    let collection = rectangle_collection(2, 4, true).unwrap();
    let white = expected_map(&[(&[2], &[0, 1, 4]), (&[4], &[3, 4, 2])]);
    let black = expected_map(&[(&[1, 2, 4], &[0, 3, 4]), (&[2, 3, 4], &[1, 4, 2])]);
    assert_eq!(collection.white_faces().unwrap(), &white);
    assert_eq!(collection.black_faces().unwrap(), &black);
    assert_eq!(collection.cliques().unwrap().num_faces(), 4);
}

#[test]
fn fan_collection_carries_a_four_member_face() {
    // Triangulating the pentagon from vertex 1 puts four labels around the
    // shared element 1.
    let labels = vec![
        label(&[1, 2]),
        label(&[2, 3]),
        label(&[3, 4]),
        label(&[4, 5]),
        label(&[1, 5]),
        label(&[1, 3]),
        label(&[1, 4]),
    ];
    let collection = WsCollection::new(2, 5, labels, true).unwrap();
    validate_collection(&collection).unwrap();

    let white = expected_map(&[
        (&[1], &[0, 5, 6, 4]),
        (&[3], &[5, 1, 2]),
        (&[4], &[6, 2, 3]),
    ]);
    let black = expected_map(&[
        (&[1, 2, 3], &[0, 5, 1]),
        (&[1, 3, 4], &[5, 6, 2]),
        (&[1, 4, 5], &[6, 4, 3]),
    ]);
    assert_eq!(collection.white_faces().unwrap(), &white);
    assert_eq!(collection.black_faces().unwrap(), &black);
}

#[test]
fn white_boundaries_ascend_by_attached_element() {
    let collection = rectangle_collection(2, 4, true).unwrap();
    for (key, members) in collection.white_faces().unwrap() {
        let key_label = Label::new(key.clone());
        let attached: Vec<u32> = members
            .iter()
            .map(|member| {
                let member_label = collection.label(*member).unwrap();
                member_label.difference(&key_label)[0]
            })
            .collect();
        assert!(
            attached.windows(2).all(|pair| pair[0] < pair[1]),
            "face {key:?} not ascending: {attached:?}"
        );
    }
}

#[test]
fn black_boundaries_descend_by_omitted_element() {
    let collection = rectangle_collection(2, 4, true).unwrap();
    for (key, members) in collection.black_faces().unwrap() {
        let key_label = Label::new(key.clone());
        let omitted: Vec<u32> = members
            .iter()
            .map(|member| {
                let member_label = collection.label(*member).unwrap();
                key_label.difference(member_label)[0]
            })
            .collect();
        assert!(
            omitted.windows(2).all(|pair| pair[0] > pair[1]),
            "face {key:?} not descending: {omitted:?}"
        );
    }
}

#[test]
fn two_member_groups_never_become_faces() {
    // Only four labels around element 1, but only two around element 2.
    let labels = vec![
        label(&[1, 2]),
        label(&[2, 3]),
        label(&[3, 4]),
        label(&[4, 5]),
        label(&[1, 5]),
        label(&[1, 3]),
        label(&[1, 4]),
    ];
    let collection = WsCollection::new(2, 5, labels, true).unwrap();
    assert!(!collection.white_faces().unwrap().contains_key(&vec![2]));
    assert!(!collection.white_faces().unwrap().contains_key(&vec![5]));
    assert!(!collection.black_faces().unwrap().contains_key(&vec![2, 3, 4]));
}

#[test]
fn larger_rectangles_tile_with_quadrilaterals() {
    let collection = rectangle_collection(3, 6, true).unwrap();
    validate_collection(&collection).unwrap();
    let cliques = collection.cliques().unwrap();
    assert!(cliques.num_faces() > 0);
    for members in cliques.white().values() {
        assert!(members.len() >= 3);
    }
    for members in cliques.black().values() {
        assert!(members.len() >= 3);
    }
}
