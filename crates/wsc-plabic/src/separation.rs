use wsc_core::Label;

/// Tests whether two labels, viewed as subsets of the cyclic ground set
/// `1..=n`, are weakly separated.
///
/// Two labels are weakly separated when no crossing quadruple exists: no
/// `a, c` drawn from `first` minus `second` and `b, d` drawn from `second`
/// minus `first` occur in strict cyclic order `(a, b, c, d)` around the
/// ground set. Equivalently, the two difference sets occupy at most two
/// alternating arcs of the circle. If either difference holds fewer than two
/// elements no quadruple can form and the labels are trivially separated.
pub fn weakly_separated(n: u32, first: &Label, second: &Label) -> bool {
    debug_assert!(first.iter().all(|e| (1..=n).contains(&e)));
    debug_assert!(second.iter().all(|e| (1..=n).contains(&e)));
    let only_first = first.difference(second);
    let only_second = second.difference(first);
    if only_first.len() < 2 || only_second.len() < 2 {
        return true;
    }
    // Merge the sorted difference sets into one circular ownership sequence
    // and count the block transitions; the sets interleave exactly when more
    // than two transitions occur.
    let mut tags = Vec::with_capacity(only_first.len() + only_second.len());
    let mut i = 0;
    let mut j = 0;
    while i < only_first.len() || j < only_second.len() {
        if j == only_second.len() || (i < only_first.len() && only_first[i] < only_second[j]) {
            tags.push(true);
            i += 1;
        } else {
            tags.push(false);
            j += 1;
        }
    }
    let mut transitions = 0;
    for idx in 0..tags.len() {
        if tags[idx] != tags[(idx + 1) % tags.len()] {
            transitions += 1;
        }
    }
    transitions <= 2
}

/// Tests whether every pair of labels in the sequence is weakly separated.
///
/// Short-circuits on the first violating pair.
pub fn pairwise_weakly_separated(n: u32, labels: &[Label]) -> bool {
    for (idx, first) in labels.iter().enumerate() {
        for second in labels.iter().skip(idx + 1) {
            if !weakly_separated(n, first, second) {
                return false;
            }
        }
    }
    true
}
