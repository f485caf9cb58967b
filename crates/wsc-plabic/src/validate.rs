use std::collections::BTreeSet;

use wsc_core::{ErrorInfo, Label, PlabicTiling, WscError};

use crate::cliques::build_cliques;
use crate::collection::WsCollection;
use crate::quiver::derive_quiver;
use crate::separation::weakly_separated;

/// Checks every structural invariant the hot paths deliberately skip.
///
/// Verifies label well-formedness, pairwise weak separation, that the quiver
/// matches a fresh derivation from the labels, and that the face maps match
/// a fresh build in either color polarity (orientation-reversing operators
/// legitimately swap the two maps). Intended for debug and test use; the
/// engine itself never calls it.
pub fn validate_collection(collection: &WsCollection) -> Result<(), WscError> {
    let k = collection.k();
    let n = collection.n();
    if k < 1 || k > n {
        return Err(validation_error("bad-dimensions", "k must satisfy 1 <= k <= n")
            .with_context("k", k.to_string())
            .with_context("n", n.to_string()));
    }

    let mut seen: BTreeSet<&Label> = BTreeSet::new();
    for (idx, label) in collection.labels().iter().enumerate() {
        if label.len() != k as usize {
            return Err(validation_error("bad-label", "label size differs from k")
                .with_context("vertex", idx.to_string())
                .with_context("label", label.to_string()));
        }
        let elements = label.as_slice();
        let ordered = elements.windows(2).all(|pair| pair[0] < pair[1]);
        let in_range = elements.first().map(|e| *e >= 1).unwrap_or(true)
            && elements.last().map(|e| *e <= n).unwrap_or(true);
        if !ordered || !in_range {
            return Err(validation_error(
                "bad-label",
                "label elements must be strictly increasing within 1..=n",
            )
            .with_context("vertex", idx.to_string())
            .with_context("label", label.to_string()));
        }
        if !seen.insert(label) {
            return Err(validation_error("duplicate-label", "label appears twice")
                .with_context("vertex", idx.to_string())
                .with_context("label", label.to_string()));
        }
    }

    let labels = collection.labels();
    for (i, first) in labels.iter().enumerate() {
        for (j, second) in labels.iter().enumerate().skip(i + 1) {
            if !weakly_separated(n, first, second) {
                return Err(validation_error(
                    "not-weakly-separated",
                    "two labels admit a crossing quadruple",
                )
                .with_context("first_vertex", i.to_string())
                .with_context("second_vertex", j.to_string())
                .with_context("first", first.to_string())
                .with_context("second", second.to_string()));
            }
        }
    }

    let fresh_quiver = derive_quiver(n, labels);
    if *collection.quiver() != fresh_quiver {
        return Err(validation_error(
            "quiver-mismatch",
            "stored quiver differs from the exchange relation of the labels",
        ));
    }

    if let Some(cliques) = collection.cliques() {
        let fresh = build_cliques(n, labels);
        let direct =
            cliques.white() == fresh.white() && cliques.black() == fresh.black();
        let swapped =
            cliques.white() == fresh.black() && cliques.black() == fresh.white();
        if !direct && !swapped {
            return Err(validation_error(
                "cliques-mismatch",
                "stored face maps differ from a fresh build in both polarities",
            ));
        }
    }

    Ok(())
}

fn validation_error(code: impl Into<String>, message: impl Into<String>) -> WscError {
    WscError::Validation(ErrorInfo::new(code, message))
}

trait ContextExt {
    fn with_context(self, key: impl Into<String>, value: impl Into<String>) -> WscError;
}

impl ContextExt for WscError {
    fn with_context(self, key: impl Into<String>, value: impl Into<String>) -> WscError {
        match self {
            WscError::Validation(info) => WscError::Validation(info.with_context(key, value)),
            other => other,
        }
    }
}
