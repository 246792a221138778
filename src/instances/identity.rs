use crate::align::Semialign;
use crate::functor::Functor;
use crate::kind::Kind;
use crate::these::These;

/// The trivial shape: exactly one position, always populated.
///
/// Every alignment is `Both`. There is no empty shape, so no [`Align`](crate::Align).
/// Derived records use this for fields typed as the bare element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Identity;

impl Kind for Identity {
    type Of<A> = A;
}

impl Functor for Identity {
    #[inline(always)]
    fn map<A, B, F>(fa: A, mut f: F) -> B
    where
        F: FnMut(A) -> B,
    {
        f(fa)
    }
}

impl Semialign for Identity {
    #[inline(always)]
    fn align<A, B>(fa: A, fb: B) -> These<A, B> {
        These::Both(fa, fb)
    }

    #[inline(always)]
    fn align_with<A, B, C, F>(fa: A, fb: B, mut f: F) -> C
    where
        F: FnMut(These<A, B>) -> C,
    {
        f(These::Both(fa, fb))
    }
}
