//! Label vocabulary for weakly separated collections.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Sorted ground-element key identifying a face in the clique maps.
///
/// Subset-cliques are keyed by the shared (k-1)-subset of their members,
/// superset-cliques by the covering (k+1)-subset.
pub type FaceKey = Vec<u32>;

/// Number of labels in any maximal weakly separated collection for `(k, n)`.
pub fn maximal_size(k: u32, n: u32) -> usize {
    (k as usize) * (n.saturating_sub(k) as usize) + 1
}

/// A vertex label: a duplicate-free subset of the cyclic ground set `1..=n`,
/// stored in increasing order.
///
/// Sortedness and duplicate freedom are a caller contract on [`Label::new`];
/// they are asserted only in debug builds, never re-checked on hot paths.
/// [`Label::from_unsorted`] is the normalizing constructor for callers holding
/// raw element lists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(Vec<u32>);

impl Label {
    /// Wraps an already increasing, duplicate-free element sequence.
    pub fn new(elements: Vec<u32>) -> Self {
        debug_assert!(
            elements.windows(2).all(|pair| pair[0] < pair[1]),
            "label elements must be strictly increasing"
        );
        Self(elements)
    }

    /// Builds a label from raw elements, sorting and removing duplicates.
    pub fn from_unsorted(mut elements: Vec<u32>) -> Self {
        elements.sort_unstable();
        elements.dedup();
        Self(elements)
    }

    /// Builds the cyclic interval of `len` consecutive ground elements
    /// starting at `start` (wrapping past `n` back to 1).
    pub fn cyclic_interval(n: u32, start: u32, len: u32) -> Self {
        let mut elements: Vec<u32> = (0..len).map(|j| (start - 1 + j) % n + 1).collect();
        elements.sort_unstable();
        Self(elements)
    }

    /// Number of elements in the label.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True iff the label has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The elements in increasing order.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Consumes the label and returns its element vector.
    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }

    /// Iterates over the elements in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// True iff `element` belongs to the label.
    pub fn contains(&self, element: u32) -> bool {
        self.0.binary_search(&element).is_ok()
    }

    /// Elements of `self` that do not belong to `other`, in increasing order.
    pub fn difference(&self, other: &Label) -> Vec<u32> {
        let mut out = Vec::new();
        let mut i = 0;
        let mut j = 0;
        while i < self.0.len() {
            if j == other.0.len() || self.0[i] < other.0[j] {
                out.push(self.0[i]);
                i += 1;
            } else if self.0[i] == other.0[j] {
                i += 1;
                j += 1;
            } else {
                j += 1;
            }
        }
        out
    }

    /// Number of elements shared between `self` and `other`.
    pub fn shared_count(&self, other: &Label) -> usize {
        let mut count = 0;
        let mut i = 0;
        let mut j = 0;
        while i < self.0.len() && j < other.0.len() {
            match self.0[i].cmp(&other.0[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    count += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        count
    }

    /// Returns a copy of the label with `element` inserted in order.
    ///
    /// Inserting an element already present returns an unchanged copy.
    pub fn with_element(&self, element: u32) -> Label {
        match self.0.binary_search(&element) {
            Ok(_) => self.clone(),
            Err(pos) => {
                let mut elements = self.0.clone();
                elements.insert(pos, element);
                Self(elements)
            }
        }
    }

    /// Returns a copy of the label with `element` removed, if present.
    pub fn without_element(&self, element: u32) -> Label {
        let mut elements = self.0.clone();
        if let Ok(pos) = elements.binary_search(&element) {
            elements.remove(pos);
        }
        Self(elements)
    }

    /// The complement of the label within the ground set `1..=n`.
    pub fn complement(&self, n: u32) -> Label {
        let elements = (1..=n).filter(|e| !self.contains(*e)).collect();
        Self(elements)
    }

    /// Applies a ground-set bijection to every element and restores order.
    pub fn map_elements(&self, f: impl Fn(u32) -> u32) -> Label {
        let mut elements: Vec<u32> = self.0.iter().map(|e| f(*e)).collect();
        elements.sort_unstable();
        Self(elements)
    }

    /// True iff the label is a cyclic interval of the ground set `1..=n`,
    /// i.e. one of the frozen labels when its length equals k.
    pub fn is_cyclic_interval(&self, n: u32) -> bool {
        if self.0.is_empty() || self.0.len() as u32 > n {
            return false;
        }
        let jumps = self
            .0
            .windows(2)
            .filter(|pair| pair[1] != pair[0] + 1)
            .count();
        match jumps {
            0 => true,
            1 => self.0.first() == Some(&1) && self.0.last() == Some(&n),
            _ => false,
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, element) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}
