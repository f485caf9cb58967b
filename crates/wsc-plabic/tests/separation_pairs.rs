use wsc_core::Label;
use wsc_plabic::{frozen_labels, pairwise_weakly_separated, weakly_separated};

fn label(elements: &[u32]) -> Label {
    Label::new(elements.to_vec())
}

#[test]
fn adjacent_intervals_are_separated() {
    assert!(weakly_separated(4, &label(&[1, 2]), &label(&[3, 4])));
}

#[test]
fn crossing_diagonals_are_not_separated() {
    assert!(!weakly_separated(4, &label(&[1, 3]), &label(&[2, 4])));
}

#[test]
fn the_predicate_is_symmetric() {
    let first = label(&[1, 3]);
    let second = label(&[2, 4]);
    assert_eq!(
        weakly_separated(4, &first, &second),
        weakly_separated(4, &second, &first)
    );
    let third = label(&[1, 2]);
    let fourth = label(&[3, 4]);
    assert_eq!(
        weakly_separated(4, &third, &fourth),
        weakly_separated(4, &fourth, &third)
    );
}

#[test]
fn small_differences_cannot_cross() {
    // A crossing quadruple needs two private elements on each side.
    assert!(weakly_separated(6, &label(&[1, 2, 3]), &label(&[1, 2, 5])));
    assert!(weakly_separated(6, &label(&[1, 2, 3]), &label(&[1, 2, 3])));
    assert!(weakly_separated(6, &label(&[1, 2, 3, 4]), &label(&[2, 3])));
}

#[test]
fn interleaved_pairs_of_unequal_size_cross() {
    assert!(!weakly_separated(8, &label(&[1, 5]), &label(&[3, 7])));
    assert!(!weakly_separated(
        8,
        &label(&[1, 2, 5, 6]),
        &label(&[3, 4, 7, 8])
    ));
}

#[test]
fn six_element_labels_on_nine_points() {
    let base = label(&[1, 2, 3, 5, 6, 9]);
    // Private elements 3, 6, 9 against 4, 7, 8 alternate around the circle.
    assert!(!weakly_separated(9, &base, &label(&[1, 2, 4, 5, 7, 8])));
    // Private elements 6, 9 against 7, 8 stay on two arcs.
    assert!(weakly_separated(9, &base, &label(&[1, 2, 3, 5, 7, 8])));
}

#[test]
fn pairwise_family_on_nine_points() {
    let family = vec![
        label(&[1, 2, 3, 4, 5, 6]),
        label(&[1, 2, 3, 5, 6, 9]),
        label(&[1, 2, 3, 5, 7, 8]),
    ];
    assert!(pairwise_weakly_separated(9, &family));
}

#[test]
fn pairwise_rejects_a_single_crossing() {
    let family = vec![
        label(&[1, 2]),
        label(&[1, 3]),
        label(&[2, 4]),
        label(&[3, 4]),
    ];
    assert!(!pairwise_weakly_separated(4, &family));
}

#[test]
fn pairwise_accepts_the_empty_and_singleton_families() {
    assert!(pairwise_weakly_separated(5, &[]));
    assert!(pairwise_weakly_separated(5, &[label(&[2, 4])]));
}

#[test]
fn frozen_labels_are_pairwise_separated() {
    for (k, n) in [(2, 4), (2, 5), (3, 6), (4, 9)] {
        let frozen = frozen_labels(k, n).unwrap();
        assert_eq!(frozen.len(), n as usize);
        assert!(pairwise_weakly_separated(n, &frozen), "failed for ({k}, {n})");
    }
}
