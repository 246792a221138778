//! Sequences: positions are indices `0..len`, the union runs to the longer
//! length.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::align::{Align, Semialign};
use crate::functor::Functor;
use crate::iter::align_iter;
use crate::kind::Kind;
use crate::these::These;

// =============================================================================
// Vec
// =============================================================================

/// Witness for `Vec<_>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VecK;

impl Kind for VecK {
    type Of<A> = Vec<A>;
}

crate::impl_has_kind!([A] Vec<A> => VecK, A);

impl Functor for VecK {
    #[inline]
    fn map<A, B, F>(fa: Vec<A>, f: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        fa.into_iter().map(f).collect()
    }
}

impl Semialign for VecK {
    #[inline]
    fn align<A, B>(fa: Vec<A>, fb: Vec<B>) -> Vec<These<A, B>> {
        align_iter(fa, fb).collect()
    }

    #[inline]
    fn align_with<A, B, C, F>(fa: Vec<A>, fb: Vec<B>, f: F) -> Vec<C>
    where
        F: FnMut(These<A, B>) -> C,
    {
        align_iter(fa, fb).map(f).collect()
    }
}

impl Align for VecK {
    #[inline]
    fn nil<A>() -> Vec<A> {
        Vec::new()
    }
}

// =============================================================================
// VecDeque
// =============================================================================

/// Witness for `VecDeque<_>`. Positions count from the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VecDequeK;

impl Kind for VecDequeK {
    type Of<A> = VecDeque<A>;
}

crate::impl_has_kind!([A] VecDeque<A> => VecDequeK, A);

impl Functor for VecDequeK {
    #[inline]
    fn map<A, B, F>(fa: VecDeque<A>, f: F) -> VecDeque<B>
    where
        F: FnMut(A) -> B,
    {
        fa.into_iter().map(f).collect()
    }
}

impl Semialign for VecDequeK {
    #[inline]
    fn align<A, B>(fa: VecDeque<A>, fb: VecDeque<B>) -> VecDeque<These<A, B>> {
        align_iter(fa, fb).collect()
    }

    #[inline]
    fn align_with<A, B, C, F>(fa: VecDeque<A>, fb: VecDeque<B>, f: F) -> VecDeque<C>
    where
        F: FnMut(These<A, B>) -> C,
    {
        align_iter(fa, fb).map(f).collect()
    }
}

impl Align for VecDequeK {
    #[inline]
    fn nil<A>() -> VecDeque<A> {
        VecDeque::new()
    }
}
