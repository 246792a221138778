//! # Layer 1: Alignment
//!
//! `zip` is only defined where two containers agree in shape. `align` takes
//! the *union* of the two shapes instead and records, per position, which
//! side contributed a value:
//!
//! ```text
//! align([1, 2, 3], [10, 20]) = [Both(1, 10), Both(2, 20), This(3)]
//! align(Some(5),   None)     = Some(This(5))
//! align({a: 1},    {b: 2})   = {a: This(1), b: That(2)}
//! ```
//!
//! ## Laws
//!
//! Every [`Semialign`] instance must satisfy, for all inputs:
//!
//! | # | Law | Statement |
//! |---|-----|-----------|
//! | 1 | self-align  | `align(fa, fa) == map(fa, \|a\| Both(a, a))` |
//! | 2 | naturality  | `align(map(fa, f), map(fb, g)) == map(align(fa, fb), \|t\| t.bimap(f, g))` |
//! | 3 | align_with  | `align_with(fa, fb, f) == map(align(fa, fb), f)` |
//! | 4 | associativity | `map(align(fa, align(fb, fc)), These::assoc) == align(align(fa, fb), fc)` |
//!
//! [`Align`] adds the empty shape and two unit laws:
//!
//! | # | Law | Statement |
//! |---|-----|-----------|
//! | 5 | right identity | `align(fa, nil()) == map(fa, This)` |
//! | 6 | left identity  | `align(nil(), fb) == map(fb, That)` |
//!
//! The type system cannot check any of these; [`crate::laws`] and the
//! `semialign_laws!` suite generator do.

use crate::functor::Functor;
use crate::these::These;

/// Functors supporting a zip over the union of non-uniform shapes.
///
/// Implementors only need [`Semialign::align`]; [`Semialign::align_with`]
/// defaults to align-then-map. An override is allowed (to skip the
/// intermediate container) but must be observably identical.
///
/// Instances hold no state, so concurrent use is always sound.
pub trait Semialign: Functor {
    fn align<A, B>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<These<A, B>>;

    #[inline]
    fn align_with<A, B, C, F>(fa: Self::Of<A>, fb: Self::Of<B>, f: F) -> Self::Of<C>
    where
        F: FnMut(These<A, B>) -> C,
    {
        Self::map(Self::align::<A, B>(fa, fb), f)
    }
}

/// A [`Semialign`] with an empty shape that is the unit of `align`.
pub trait Align: Semialign {
    fn nil<A>() -> Self::Of<A>;
}

/// The law-correct `align_with` for any instance, regardless of overrides.
///
/// Useful for checking a hand-written `align_with` against the derivation.
#[inline]
pub fn align_with_default<F, A, B, C, G>(fa: F::Of<A>, fb: F::Of<B>, f: G) -> F::Of<C>
where
    F: Semialign,
    G: FnMut(These<A, B>) -> C,
{
    F::map(F::align::<A, B>(fa, fb), f)
}
