//! Lazy lexicographic permutation enumeration.
//!
//! Enumerates all L! orderings of an L-element sequence, starting from the
//! sorted arrangement and advancing with the classic next-permutation step.
//! Positions are permuted rather than values, so an input containing
//! duplicates still yields exactly L! sequences (with the duplicates
//! producing repeated output, per multiset-permutation semantics).

/// Returns a lazy iterator over all permutations of `items`.
///
/// The input is sorted first, then every ordering is produced exactly once
/// per position arrangement, in lexicographic order. Each call builds an
/// independent iterator, so enumeration is restartable and deterministic.
///
/// Correct for any length; callers that need an operational cap (the tour
/// planner allows at most 6 waypoints) enforce it themselves.
///
/// # Examples
///
/// ```
/// use roundtrip::permutation::permutations;
///
/// let all: Vec<Vec<u32>> = permutations(&[2, 1]).collect();
/// assert_eq!(all, vec![vec![1, 2], vec![2, 1]]);
/// ```
pub fn permutations<T: Clone + Ord>(items: &[T]) -> Permutations<T> {
    let mut sorted = items.to_vec();
    sorted.sort();
    Permutations {
        items: sorted,
        positions: (0..items.len()).collect(),
        started: false,
        exhausted: false,
    }
}

/// Iterator over the permutations of a fixed sequence.
///
/// Created by [`permutations`].
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    positions: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl<T: Clone> Permutations<T> {
    fn current(&self) -> Vec<T> {
        self.positions
            .iter()
            .map(|&p| self.items[p].clone())
            .collect()
    }

    /// Steps `positions` to its lexicographic successor. Returns `false`
    /// when the arrangement is fully descending (enumeration complete).
    fn advance(&mut self) -> bool {
        let p = &mut self.positions;
        if p.len() < 2 {
            return false;
        }
        // Pivot: last index whose suffix is not non-increasing.
        let Some(pivot) = (0..p.len() - 1).rev().find(|&i| p[i] < p[i + 1]) else {
            return false;
        };
        // Smallest suffix element greater than the pivot; the suffix is
        // descending, so scan from the right.
        let swap_with = (pivot + 1..p.len())
            .rev()
            .find(|&j| p[j] > p[pivot])
            .expect("suffix contains an element greater than the pivot");
        p.swap(pivot, swap_with);
        p[pivot + 1..].reverse();
        true
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }
        if self.advance() {
            Some(self.current())
        } else {
            self.exhausted = true;
            None
        }
    }
}
