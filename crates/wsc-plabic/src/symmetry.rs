use wsc_core::{Label, PlabicTiling};

use crate::cliques::transform_faces;
use crate::collection::WsCollection;

/// Rotates the ground set by `amount`, relabeling every vertex in place.
///
/// Ground element `x` maps to `((x - 1 + amount) mod n) + 1`. Rotation
/// preserves cyclic orientation, so the quiver and the face maps are carried
/// over unchanged apart from their rewritten keys.
pub fn rotate(collection: &mut WsCollection, amount: i64) {
    let n = i64::from(collection.n());
    apply_ground_bijection(
        collection,
        move |x| ((i64::from(x) - 1 + amount).rem_euclid(n) + 1) as u32,
        false,
    );
}

/// Returns a rotated copy, leaving the original untouched.
pub fn rotated(collection: &WsCollection, amount: i64) -> WsCollection {
    let mut copy = collection.clone();
    rotate(&mut copy, amount);
    copy
}

/// Reflects the ground set across `axis`, relabeling every vertex in place.
///
/// Ground element `x` maps to `(2 * axis - x) mod n`, taken into `1..=n`.
/// Reflection reverses cyclic orientation: every quiver edge flips and the
/// two face colors swap.
pub fn reflect(collection: &mut WsCollection, axis: i64) {
    let n = i64::from(collection.n());
    apply_ground_bijection(
        collection,
        move |x| {
            let image = (2 * axis - i64::from(x)).rem_euclid(n);
            if image == 0 {
                n as u32
            } else {
                image as u32
            }
        },
        true,
    );
}

/// Returns a reflected copy, leaving the original untouched.
pub fn reflected(collection: &WsCollection, axis: i64) -> WsCollection {
    let mut copy = collection.clone();
    reflect(&mut copy, axis);
    copy
}

/// Replaces every label by its ground-set complement in place, turning a
/// k-subset collection into an (n-k)-subset collection.
///
/// Complementation preserves which label pairs are adjacent but reverses the
/// combinatorial orientation: the quiver transposes, the face colors swap,
/// and every face key is replaced by its complement.
pub fn complement(collection: &mut WsCollection) {
    let n = collection.n();
    let new_k = n - collection.k();
    let new_labels: Vec<Label> = collection
        .labels()
        .iter()
        .map(|label| label.complement(n))
        .collect();
    let new_cliques = collection.cliques().map(|cliques| {
        transform_faces(
            cliques,
            &new_labels,
            |key| Label::new(key.clone()).complement(n).into_inner(),
            true,
        )
    });
    collection.set_labels(new_labels);
    collection.set_subset_size(new_k);
    collection.quiver_mut().transpose();
    collection.set_cliques(new_cliques);
}

/// Returns a complemented copy, leaving the original untouched.
pub fn complemented(collection: &WsCollection) -> WsCollection {
    let mut copy = collection.clone();
    complement(&mut copy);
    copy
}

/// Exchanges the black and white face roles in place.
///
/// This is exactly complementation followed by rotation by the original
/// subset size; the resulting collection keeps subset size `n - k`.
pub fn swap_colors(collection: &mut WsCollection) {
    let original_k = i64::from(collection.k());
    complement(collection);
    rotate(collection, original_k);
}

/// Returns a color-swapped copy, leaving the original untouched.
pub fn swapped_colors(collection: &WsCollection) -> WsCollection {
    let mut copy = collection.clone();
    swap_colors(&mut copy);
    copy
}

fn apply_ground_bijection(
    collection: &mut WsCollection,
    f: impl Fn(u32) -> u32,
    reverses_orientation: bool,
) {
    let new_labels: Vec<Label> = collection
        .labels()
        .iter()
        .map(|label| label.map_elements(&f))
        .collect();
    let new_cliques = collection.cliques().map(|cliques| {
        transform_faces(
            cliques,
            &new_labels,
            |key| Label::new(key.clone()).map_elements(&f).into_inner(),
            reverses_orientation,
        )
    });
    collection.set_labels(new_labels);
    if reverses_orientation {
        collection.quiver_mut().transpose();
    }
    collection.set_cliques(new_cliques);
}
