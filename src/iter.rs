//! Shape-union iterator adaptors.
//!
//! - [`align_iter`]: positional union, runs until both sides are exhausted.
//! - [`align_by_key`]: key union of two ascending `(K, V)` streams.
//!
//! Sequence and ordered-map instances are thin wrappers over these.

use core::cmp::Ordering;
use core::iter::{FusedIterator, Peekable};

use crate::these::These;

// =============================================================================
// Positional
// =============================================================================

/// Pair up two iterators position by position, keeping the surplus of the
/// longer one as `This`/`That`.
pub fn align_iter<I, J>(a: I, b: J) -> AlignIter<I::IntoIter, J::IntoIter>
where
    I: IntoIterator,
    J: IntoIterator,
{
    AlignIter {
        a: a.into_iter().fuse(),
        b: b.into_iter().fuse(),
    }
}

/// Iterator returned by [`align_iter`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct AlignIter<I, J> {
    a: core::iter::Fuse<I>,
    b: core::iter::Fuse<J>,
}

impl<I: Iterator, J: Iterator> Iterator for AlignIter<I, J> {
    type Item = These<I::Item, J::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        These::from_options(self.a.next(), self.b.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lo, a_hi) = self.a.size_hint();
        let (b_lo, b_hi) = self.b.size_hint();
        let hi = match (a_hi, b_hi) {
            (Some(x), Some(y)) => Some(x.max(y)),
            _ => None,
        };
        (a_lo.max(b_lo), hi)
    }
}

impl<I: ExactSizeIterator, J: ExactSizeIterator> ExactSizeIterator for AlignIter<I, J> {}

impl<I: Iterator, J: Iterator> FusedIterator for AlignIter<I, J> {}

// =============================================================================
// By key
// =============================================================================

/// Merge two iterators of `(K, V)` pairs, each sorted ascending by key and
/// free of duplicate keys, into one `(K, These<V, W>)` per distinct key.
///
/// On a shared key the left key is kept and the right one dropped.
pub fn align_by_key<K, V, W, I, J>(a: I, b: J) -> AlignByKey<I::IntoIter, J::IntoIter>
where
    K: Ord,
    I: IntoIterator<Item = (K, V)>,
    J: IntoIterator<Item = (K, W)>,
{
    AlignByKey {
        a: a.into_iter().peekable(),
        b: b.into_iter().peekable(),
    }
}

/// Iterator returned by [`align_by_key`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct AlignByKey<I: Iterator, J: Iterator> {
    a: Peekable<I>,
    b: Peekable<J>,
}

impl<K, V, W, I, J> Iterator for AlignByKey<I, J>
where
    K: Ord,
    I: Iterator<Item = (K, V)>,
    J: Iterator<Item = (K, W)>,
{
    type Item = (K, These<V, W>);

    fn next(&mut self) -> Option<Self::Item> {
        let order = match (self.a.peek(), self.b.peek()) {
            (Some((ka, _)), Some((kb, _))) => ka.cmp(kb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => return None,
        };
        match order {
            Ordering::Less => {
                let (k, v) = self.a.next()?;
                Some((k, These::This(v)))
            }
            Ordering::Greater => {
                let (k, w) = self.b.next()?;
                Some((k, These::That(w)))
            }
            Ordering::Equal => {
                let (k, v) = self.a.next()?;
                let (_, w) = self.b.next()?;
                Some((k, These::Both(v, w)))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lo, a_hi) = self.a.size_hint();
        let (b_lo, b_hi) = self.b.size_hint();
        let hi = match (a_hi, b_hi) {
            (Some(x), Some(y)) => x.checked_add(y),
            _ => None,
        };
        (a_lo.max(b_lo), hi)
    }
}

impl<K, V, W, I, J> FusedIterator for AlignByKey<I, J>
where
    K: Ord,
    I: FusedIterator<Item = (K, V)>,
    J: FusedIterator<Item = (K, W)>,
{
}

// =============================================================================
// Tests
// =============================================================================
