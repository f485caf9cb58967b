use wsc_core::{maximal_size, ErrorInfo, Label, WscError};

use crate::collection::{check_dimensions, WsCollection};
use crate::separation::weakly_separated;

/// Greedily grows a pairwise weakly separated label set to the maximal
/// cardinality `k * (n - k) + 1`, in place.
///
/// Candidates are scanned in a fixed order: every k-subset of the ground set
/// in lexicographic order, admitting each candidate that is weakly separated
/// from all labels admitted so far. The container is only written on
/// success; a stalled search leaves it untouched and reports an error. The
/// input being pairwise weakly separated is a caller contract.
pub fn extend_weakly_separated(k: u32, n: u32, labels: &mut Vec<Label>) -> Result<(), WscError> {
    extend_weakly_separated_with(k, n, labels, &[])
}

/// In-place extension scanning the `preferred` labels in their given order
/// before the lexicographic pool.
pub fn extend_weakly_separated_with(
    k: u32,
    n: u32,
    labels: &mut Vec<Label>,
    preferred: &[Label],
) -> Result<(), WscError> {
    check_dimensions(k, n)?;
    let mut admitted = labels.clone();
    extend_impl(k, n, &mut admitted, preferred)?;
    *labels = admitted;
    Ok(())
}

/// Builds a maximal collection, with adjacency and faces computed, by
/// extending the given labels. The inputs are not modified.
pub fn extend_to_collection(k: u32, n: u32, labels: &[Label]) -> Result<WsCollection, WscError> {
    extend_to_collection_with(k, n, labels, &[])
}

/// Builds a maximal collection, preferring candidates from `preferred`.
///
/// Passing the labels of an existing collection as `preferred` steers the
/// extension toward reproducing that collection wherever compatible.
pub fn extend_to_collection_with(
    k: u32,
    n: u32,
    labels: &[Label],
    preferred: &[Label],
) -> Result<WsCollection, WscError> {
    check_dimensions(k, n)?;
    let mut admitted = labels.to_vec();
    extend_impl(k, n, &mut admitted, preferred)?;
    WsCollection::new(k, n, admitted, true)
}

fn extend_impl(
    k: u32,
    n: u32,
    admitted: &mut Vec<Label>,
    preferred: &[Label],
) -> Result<(), WscError> {
    let target = maximal_size(k, n);
    if admitted.len() >= target {
        return Ok(());
    }
    let candidates = preferred.iter().cloned().chain(Combinations::new(n, k));
    for candidate in candidates {
        if admitted.len() == target {
            break;
        }
        if candidate.len() != k as usize || admitted.contains(&candidate) {
            continue;
        }
        if admitted
            .iter()
            .all(|label| weakly_separated(n, label, &candidate))
        {
            admitted.push(candidate);
        }
    }
    if admitted.len() == target {
        Ok(())
    } else {
        Err(WscError::Extension(
            ErrorInfo::new(
                "extension-stalled",
                "no admissible candidate remains below the maximal cardinality",
            )
            .with_context("admitted", admitted.len().to_string())
            .with_context("target", target.to_string())
            .with_hint("the input labels were likely not pairwise weakly separated"),
        ))
    }
}

/// Lexicographic enumerator of the k-subsets of `1..=n`.
struct Combinations {
    n: u32,
    k: usize,
    next: Option<Vec<u32>>,
}

impl Combinations {
    fn new(n: u32, k: u32) -> Self {
        let next = if k == 0 {
            Some(Vec::new())
        } else if k > n {
            None
        } else {
            Some((1..=k).collect())
        };
        Self {
            n,
            k: k as usize,
            next,
        }
    }
}

impl Iterator for Combinations {
    type Item = Label;

    fn next(&mut self) -> Option<Label> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        let mut position = self.k;
        while position > 0 {
            position -= 1;
            let max_here = self.n - (self.k - 1 - position) as u32;
            if successor[position] < max_here {
                successor[position] += 1;
                for tail in (position + 1)..self.k {
                    successor[tail] = successor[tail - 1] + 1;
                }
                self.next = Some(successor);
                break;
            }
        }
        Some(Label::new(current))
    }
}
