use sha2::{Digest, Sha256};

use wsc_core::{Label, PlabicTiling};

use crate::collection::WsCollection;

/// Computes the canonical structural hash of a collection.
///
/// The hash covers the dimensions and the sorted label set, so two
/// collections that compare equal hash identically regardless of vertex
/// ordering or whether face maps are present.
pub fn canonical_hash(collection: &WsCollection) -> String {
    let mut hasher = Sha256::new();
    hasher.update(collection.k().to_le_bytes());
    hasher.update(collection.n().to_le_bytes());
    let mut sorted: Vec<&Label> = collection.labels().iter().collect();
    sorted.sort();
    hasher.update((sorted.len() as u64).to_le_bytes());
    for label in sorted {
        update_label(label, &mut hasher);
    }
    format!("{:x}", hasher.finalize())
}

fn update_label(label: &Label, hasher: &mut Sha256) {
    hasher.update((label.len() as u64).to_le_bytes());
    for element in label.iter() {
        hasher.update(element.to_le_bytes());
    }
}
