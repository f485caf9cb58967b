use std::collections::{BTreeMap, BTreeSet};

use wsc_core::{FaceKey, Label, VertexId};

use crate::ids::{make_vertex, vertex_index};

/// The 2-colored face maps of a plabic tiling.
///
/// Each face is a clique of three or more labels sharing a common ground-set
/// pattern. White faces are keyed by the shared subset of their members (all
/// members attach one extra element to the key), black faces by the covering
/// superset (all members omit one key element). Boundaries list member
/// vertices in cyclic order: ascending by attached element for shared-key
/// faces, descending by omitted element for covering-key faces, so adjacent
/// faces always alternate color. The reflection and complement operators
/// reverse cyclic orientation and swap the two maps; which map currently
/// holds shared-key faces is recovered from key length where it matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cliques {
    white: BTreeMap<FaceKey, Vec<VertexId>>,
    black: BTreeMap<FaceKey, Vec<VertexId>>,
}

impl Cliques {
    /// The white face map, keyed by face signature.
    pub fn white(&self) -> &BTreeMap<FaceKey, Vec<VertexId>> {
        &self.white
    }

    /// The black face map, keyed by face signature.
    pub fn black(&self) -> &BTreeMap<FaceKey, Vec<VertexId>> {
        &self.black
    }

    /// Total number of faces across both colors.
    pub fn num_faces(&self) -> usize {
        self.white.len() + self.black.len()
    }

    /// Rebuilds exactly the faces incident to an exchanged label.
    ///
    /// Only faces keyed by a subset or superset of the old or new center
    /// label can gain or lose a member, so those keys are recomputed and
    /// every other face is left untouched. Any member of such a face shares
    /// all but one element with the center that produced the key, so the
    /// member scans cover just `candidates`, the vertex set the exchange
    /// already collected for its adjacency patch.
    pub(crate) fn rebuild_around(
        &mut self,
        n: u32,
        labels: &[Label],
        candidates: &BTreeSet<usize>,
        old_label: &Label,
        new_label: &Label,
    ) {
        let k = old_label.len() as u32;
        let mut shared_keys: BTreeSet<FaceKey> = BTreeSet::new();
        for element in old_label.iter() {
            shared_keys.insert(old_label.without_element(element).into_inner());
        }
        for element in new_label.iter() {
            shared_keys.insert(new_label.without_element(element).into_inner());
        }
        let mut covering_keys: BTreeSet<FaceKey> = BTreeSet::new();
        for e in 1..=n {
            if !old_label.contains(e) {
                covering_keys.insert(old_label.with_element(e).into_inner());
            }
            if !new_label.contains(e) {
                covering_keys.insert(new_label.with_element(e).into_inner());
            }
        }
        let (shared_map, covering_map) = self.polarity_mut(k);
        for key in &shared_keys {
            refresh_shared_face(shared_map, key, labels, candidates);
        }
        for key in &covering_keys {
            refresh_covering_face(covering_map, key, labels, candidates);
        }
    }

    /// Splits the maps into (shared-key faces, covering-key faces) regardless
    /// of which color currently holds which role.
    fn polarity_mut(
        &mut self,
        k: u32,
    ) -> (
        &mut BTreeMap<FaceKey, Vec<VertexId>>,
        &mut BTreeMap<FaceKey, Vec<VertexId>>,
    ) {
        let white_holds_shared = holds_shared_keys(&self.white, k)
            .or_else(|| holds_shared_keys(&self.black, k).map(|black| !black))
            .unwrap_or(true);
        if white_holds_shared {
            (&mut self.white, &mut self.black)
        } else {
            (&mut self.black, &mut self.white)
        }
    }
}

fn holds_shared_keys(map: &BTreeMap<FaceKey, Vec<VertexId>>, k: u32) -> Option<bool> {
    map.keys().next().map(|key| key.len() + 1 == k as usize)
}

/// Builds the complete face maps for a label sequence.
pub(crate) fn build_cliques(n: u32, labels: &[Label]) -> Cliques {
    let mut white_groups: BTreeMap<FaceKey, Vec<(u32, VertexId)>> = BTreeMap::new();
    for (idx, label) in labels.iter().enumerate() {
        for attached in label.iter() {
            let key = label.without_element(attached).into_inner();
            white_groups
                .entry(key)
                .or_default()
                .push((attached, make_vertex(idx)));
        }
    }
    let mut black_groups: BTreeMap<FaceKey, Vec<(u32, VertexId)>> = BTreeMap::new();
    for (idx, label) in labels.iter().enumerate() {
        for omitted in 1..=n {
            if label.contains(omitted) {
                continue;
            }
            let key = label.with_element(omitted).into_inner();
            black_groups
                .entry(key)
                .or_default()
                .push((omitted, make_vertex(idx)));
        }
    }
    Cliques {
        white: finish_groups(white_groups, true),
        black: finish_groups(black_groups, false),
    }
}

fn finish_groups(
    groups: BTreeMap<FaceKey, Vec<(u32, VertexId)>>,
    ascending: bool,
) -> BTreeMap<FaceKey, Vec<VertexId>> {
    let mut faces = BTreeMap::new();
    for (key, mut members) in groups {
        // Two labels around a common pattern form a quiver edge, not a face.
        if members.len() < 3 {
            continue;
        }
        members.sort_by_key(|(element, _)| *element);
        if !ascending {
            members.reverse();
        }
        faces.insert(key, members.into_iter().map(|(_, vertex)| vertex).collect());
    }
    faces
}

fn refresh_shared_face(
    map: &mut BTreeMap<FaceKey, Vec<VertexId>>,
    key: &FaceKey,
    labels: &[Label],
    candidates: &BTreeSet<usize>,
) {
    let key_label = Label::new(key.clone());
    let mut members: Vec<(u32, VertexId)> = Vec::new();
    for &idx in candidates {
        let label = &labels[idx];
        if label.shared_count(&key_label) == key_label.len() {
            let attached = label.difference(&key_label);
            debug_assert_eq!(attached.len(), 1);
            members.push((attached[0], make_vertex(idx)));
        }
    }
    if members.len() < 3 {
        map.remove(key);
        return;
    }
    members.sort_by_key(|(element, _)| *element);
    map.insert(
        key.clone(),
        members.into_iter().map(|(_, vertex)| vertex).collect(),
    );
}

fn refresh_covering_face(
    map: &mut BTreeMap<FaceKey, Vec<VertexId>>,
    key: &FaceKey,
    labels: &[Label],
    candidates: &BTreeSet<usize>,
) {
    let key_label = Label::new(key.clone());
    let mut members: Vec<(u32, VertexId)> = Vec::new();
    for &idx in candidates {
        let label = &labels[idx];
        if label.shared_count(&key_label) == label.len() {
            let omitted = key_label.difference(label);
            debug_assert_eq!(omitted.len(), 1);
            members.push((omitted[0], make_vertex(idx)));
        }
    }
    if members.len() < 3 {
        map.remove(key);
        return;
    }
    members.sort_by_key(|(element, _)| *element);
    members.reverse();
    map.insert(
        key.clone(),
        members.into_iter().map(|(_, vertex)| vertex).collect(),
    );
}

/// Carries the face maps across a ground-set relabeling without recomputing
/// face membership.
///
/// Keys are rewritten by `key_transform`, member vertex lists are kept, and
/// each boundary is re-anchored by sorting members on their attached or
/// omitted element under the new key. Orientation-reversing operators pass
/// `swap_maps` to exchange the two colors.
pub(crate) fn transform_faces(
    cliques: &Cliques,
    labels: &[Label],
    key_transform: impl Fn(&FaceKey) -> FaceKey,
    swap_maps: bool,
) -> Cliques {
    let white = transform_map(&cliques.white, labels, &key_transform);
    let black = transform_map(&cliques.black, labels, &key_transform);
    if swap_maps {
        Cliques {
            white: black,
            black: white,
        }
    } else {
        Cliques { white, black }
    }
}

fn transform_map(
    map: &BTreeMap<FaceKey, Vec<VertexId>>,
    labels: &[Label],
    key_transform: &impl Fn(&FaceKey) -> FaceKey,
) -> BTreeMap<FaceKey, Vec<VertexId>> {
    let mut out = BTreeMap::new();
    for (key, members) in map {
        let new_key = key_transform(key);
        let key_label = Label::new(new_key.clone());
        let mut anchored: Vec<(u32, VertexId)> = Vec::with_capacity(members.len());
        let mut covering = false;
        for vertex in members {
            let label = &labels[vertex_index(*vertex)];
            covering = key_label.len() > label.len();
            let anchor = if covering {
                key_label.difference(label)
            } else {
                label.difference(&key_label)
            };
            debug_assert_eq!(anchor.len(), 1);
            anchored.push((anchor[0], *vertex));
        }
        anchored.sort_by_key(|(element, _)| *element);
        if covering {
            anchored.reverse();
        }
        out.insert(
            new_key,
            anchored.into_iter().map(|(_, vertex)| vertex).collect(),
        );
    }
    out
}
