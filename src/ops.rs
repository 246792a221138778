//! Helpers derived from `align`.
//!
//! The generic ones work for any [`Semialign`]; the `lpad`/`rpad` family
//! only makes sense for sequences, where one side's length can be kept.

use crate::align::Semialign;
use crate::kind::Of;
use crate::these::These;

/// Align two containers of the same element type, combining overlaps with
/// `combine`. With a sum, this is the pointwise sum over the union of shapes.
#[inline]
pub fn salign<F, A, G>(fa: Of<F, A>, fb: Of<F, A>, mut combine: G) -> Of<F, A>
where
    F: Semialign,
    G: FnMut(A, A) -> A,
{
    F::align_with(fa, fb, |t: These<A, A>| t.merge(&mut combine))
}

/// Zip over the union of shapes, padding the missing side with `None`.
#[inline]
pub fn pad_zip<F, A, B>(fa: Of<F, A>, fb: Of<F, B>) -> Of<F, (Option<A>, Option<B>)>
where
    F: Semialign,
{
    F::align_with(fa, fb, These::<A, B>::into_options)
}

/// [`pad_zip`] followed by `f` at every position.
#[inline]
pub fn pad_zip_with<F, A, B, C, G>(fa: Of<F, A>, fb: Of<F, B>, mut f: G) -> Of<F, C>
where
    F: Semialign,
    G: FnMut(Option<A>, Option<B>) -> C,
{
    F::align_with(fa, fb, |t: These<A, B>| {
        let (a, b) = t.into_options();
        f(a, b)
    })
}

#[cfg(feature = "alloc")]
pub use self::seq::{lpad_zip, lpad_zip_with, rpad_zip, rpad_zip_with};

#[cfg(feature = "alloc")]
mod seq {
    use alloc::vec::Vec;

    /// Zip keeping the length of `right`: missing left values become `None`,
    /// surplus left values are dropped.
    pub fn lpad_zip<A, B>(left: Vec<A>, right: Vec<B>) -> Vec<(Option<A>, B)> {
        lpad_zip_with(left, right, |a, b| (a, b))
    }

    pub fn lpad_zip_with<A, B, C, F>(left: Vec<A>, right: Vec<B>, mut f: F) -> Vec<C>
    where
        F: FnMut(Option<A>, B) -> C,
    {
        // Stop at the end of `right` instead of draining the rest of `left`.
        let mut left = left.into_iter();
        right.into_iter().map(|b| f(left.next(), b)).collect()
    }

    /// Zip keeping the length of `left`: missing right values become `None`,
    /// surplus right values are dropped.
    pub fn rpad_zip<A, B>(left: Vec<A>, right: Vec<B>) -> Vec<(A, Option<B>)> {
        rpad_zip_with(left, right, |a, b| (a, b))
    }

    pub fn rpad_zip_with<A, B, C, F>(left: Vec<A>, right: Vec<B>, mut f: F) -> Vec<C>
    where
        F: FnMut(A, Option<B>) -> C,
    {
        // Stop at the end of `left` instead of draining the rest of `right`.
        let mut right = right.into_iter();
        left.into_iter().map(|a| f(a, right.next())).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::instances::{OptionK, VecK};

    #[test]
    fn test_salign_sums_overlap() {
        let got = salign::<VecK, _, _>(vec![1, 2, 3], vec![10, 20], |a, b| a + b);
        assert_eq!(got, vec![11, 22, 3]);
    }

    #[test]
    fn test_salign_option() {
        assert_eq!(salign::<OptionK, _, _>(Some(2), Some(3), |a, b| a * b), Some(6));
        assert_eq!(salign::<OptionK, i32, _>(None, Some(3), |a, b| a * b), Some(3));
        assert_eq!(salign::<OptionK, i32, _>(None, None, |a, b| a * b), None);
    }

    #[test]
    fn test_pad_zip() {
        let got = pad_zip::<VecK, _, _>(vec![1], vec!['a', 'b']);
        assert_eq!(got, vec![(Some(1), Some('a')), (None, Some('b'))]);

        let sums = pad_zip_with::<VecK, _, _, _, _>(vec![1, 2], vec![5], |a, b| {
            a.unwrap_or(0) + b.unwrap_or(0)
        });
        assert_eq!(sums, vec![6, 2]);
    }

    #[test]
    fn test_lpad_zip_keeps_right_length() {
        assert_eq!(
            lpad_zip(vec![1], vec!['a', 'b']),
            vec![(Some(1), 'a'), (None, 'b')]
        );
        assert_eq!(lpad_zip(vec![1, 2, 3], vec!['a']), vec![(Some(1), 'a')]);
        assert_eq!(lpad_zip(vec![1, 2], Vec::<char>::new()), vec![]);
    }

    #[test]
    fn test_lpad_zip_with_calls_once_per_right() {
        let mut seen = Vec::new();
        let got = lpad_zip_with(vec![1, 2, 3, 4, 5], vec!['a', 'b'], |a, b| {
            seen.push(a);
            b
        });
        assert_eq!(got, vec!['a', 'b']);
        assert_eq!(seen, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_rpad_zip_keeps_left_length() {
        assert_eq!(
            rpad_zip(vec![1, 2], vec!['a']),
            vec![(1, Some('a')), (2, None)]
        );
        assert_eq!(rpad_zip(vec![1], vec!['a', 'b', 'c']), vec![(1, Some('a'))]);
    }
}
