use crate::align::{Align, Semialign};
use crate::functor::Functor;
use crate::kind::Kind;
use crate::these::These;

/// Witness for `Option<_>`: the shape is presence, the union is presence-or.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionK;

impl Kind for OptionK {
    type Of<A> = Option<A>;
}

crate::impl_has_kind!([A] Option<A> => OptionK, A);

impl Functor for OptionK {
    #[inline]
    fn map<A, B, F>(fa: Option<A>, f: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        fa.map(f)
    }
}

impl Semialign for OptionK {
    #[inline]
    fn align<A, B>(fa: Option<A>, fb: Option<B>) -> Option<These<A, B>> {
        These::from_options(fa, fb)
    }

    #[inline]
    fn align_with<A, B, C, F>(fa: Option<A>, fb: Option<B>, f: F) -> Option<C>
    where
        F: FnMut(These<A, B>) -> C,
    {
        These::from_options(fa, fb).map(f)
    }
}

impl Align for OptionK {
    #[inline]
    fn nil<A>() -> Option<A> {
        None
    }
}
