//! # Law Harness
//!
//! The [`Semialign`] and [`Align`] laws as executable checks. Each `check_*`
//! function evaluates both sides of one law and returns a [`LawViolation`]
//! carrying their `Debug` renderings when they differ.
//!
//! Property suites for a whole instance come from [`semialign_laws!`] and
//! [`align_laws!`], which feed `proptest` inputs through these checks:
//!
//! ```ignore
//! use proptest::prelude::*;
//! use semialign::{align_laws, semialign_laws, VecK};
//!
//! semialign_laws!(vec, VecK, proptest::collection::vec(any::<i32>(), 0..8));
//! align_laws!(vec, VecK, proptest::collection::vec(any::<i32>(), 0..8));
//! ```
//!
//! With the `tracing` feature, every violation is also emitted as a
//! `warn`-level event.

use core::fmt;
use std::fmt::Debug;

use crate::align::{Align, Semialign};
use crate::functor::Functor;
use crate::kind::Of;
use crate::these::These;

// =============================================================================
// Violation
// =============================================================================

/// Which law a check exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    FunctorIdentity,
    FunctorComposition,
    SelfAlign,
    Naturality,
    AlignWith,
    Associativity,
    RightIdentity,
    LeftIdentity,
}

impl Law {
    pub const fn as_str(self) -> &'static str {
        match self {
            Law::FunctorIdentity => "functor identity",
            Law::FunctorComposition => "functor composition",
            Law::SelfAlign => "self-align",
            Law::Naturality => "naturality",
            Law::AlignWith => "align_with derivation",
            Law::Associativity => "associativity",
            Law::RightIdentity => "right identity",
            Law::LeftIdentity => "left identity",
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An instance produced `actual` where the law demands `expected`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{law} law violated: expected {expected}, got {actual}")]
pub struct LawViolation {
    pub law: Law,
    pub expected: String,
    pub actual: String,
}

fn ensure<T: PartialEq + Debug>(law: Law, actual: T, expected: T) -> Result<(), LawViolation> {
    if actual == expected {
        return Ok(());
    }
    let violation = LawViolation {
        law,
        expected: format!("{expected:?}"),
        actual: format!("{actual:?}"),
    };
    #[cfg(feature = "tracing")]
    tracing::warn!(
        law = %violation.law,
        expected = %violation.expected,
        actual = %violation.actual,
        "semialign law violated"
    );
    Err(violation)
}

// =============================================================================
// Functor
// =============================================================================

/// `map(fa, id) == fa`
pub fn check_functor_identity<F, A>(fa: Of<F, A>) -> Result<(), LawViolation>
where
    F: Functor,
    Of<F, A>: Clone + PartialEq + Debug,
{
    ensure(Law::FunctorIdentity, F::map(fa.clone(), |a: A| a), fa)
}

/// `map(map(fa, f), g) == map(fa, g . f)`
pub fn check_functor_composition<F, A, B, C>(
    fa: Of<F, A>,
    f: impl Fn(A) -> B,
    g: impl Fn(B) -> C,
) -> Result<(), LawViolation>
where
    F: Functor,
    Of<F, A>: Clone,
    Of<F, C>: PartialEq + Debug,
{
    let actual = F::map(F::map(fa.clone(), &f), &g);
    let expected = F::map(fa, |a: A| g(f(a)));
    ensure(Law::FunctorComposition, actual, expected)
}

// =============================================================================
// Semialign
// =============================================================================

/// `align(fa, fa) == map(fa, |a| Both(a, a))`
pub fn check_self_align<F, A>(fa: Of<F, A>) -> Result<(), LawViolation>
where
    F: Semialign,
    A: Clone,
    Of<F, A>: Clone,
    Of<F, These<A, A>>: PartialEq + Debug,
{
    let actual = F::align::<A, A>(fa.clone(), fa.clone());
    let expected = F::map(fa, |a: A| These::Both(a.clone(), a));
    ensure(Law::SelfAlign, actual, expected)
}

/// `align(map(fa, f), map(fb, g)) == map(align(fa, fb), |t| t.bimap(f, g))`
pub fn check_naturality<F, A, B, C, D>(
    fa: Of<F, A>,
    fb: Of<F, B>,
    f: impl Fn(A) -> C,
    g: impl Fn(B) -> D,
) -> Result<(), LawViolation>
where
    F: Semialign,
    Of<F, A>: Clone,
    Of<F, B>: Clone,
    Of<F, These<C, D>>: PartialEq + Debug,
{
    let actual = F::align::<C, D>(F::map(fa.clone(), &f), F::map(fb.clone(), &g));
    let expected = F::map(F::align::<A, B>(fa, fb), |t: These<A, B>| t.bimap(&f, &g));
    ensure(Law::Naturality, actual, expected)
}

/// `align_with(fa, fb, f) == map(align(fa, fb), f)`
pub fn check_align_with<F, A, B, C>(
    fa: Of<F, A>,
    fb: Of<F, B>,
    f: impl Fn(These<A, B>) -> C,
) -> Result<(), LawViolation>
where
    F: Semialign,
    Of<F, A>: Clone,
    Of<F, B>: Clone,
    Of<F, C>: PartialEq + Debug,
{
    let actual = F::align_with::<A, B, C, _>(fa.clone(), fb.clone(), &f);
    let expected = F::map(F::align::<A, B>(fa, fb), &f);
    ensure(Law::AlignWith, actual, expected)
}

/// `map(align(fa, align(fb, fc)), These::assoc) == align(align(fa, fb), fc)`
///
/// Reassociating the right-nested alignment must land exactly on the
/// left-nested one.
pub fn check_associativity<F, A, B, C>(
    fa: Of<F, A>,
    fb: Of<F, B>,
    fc: Of<F, C>,
) -> Result<(), LawViolation>
where
    F: Semialign,
    Of<F, A>: Clone,
    Of<F, B>: Clone,
    Of<F, C>: Clone,
    Of<F, These<These<A, B>, C>>: PartialEq + Debug,
{
    let actual = F::map(
        F::align::<A, These<B, C>>(fa.clone(), F::align::<B, C>(fb.clone(), fc.clone())),
        These::<A, These<B, C>>::assoc,
    );
    let expected = F::align::<These<A, B>, C>(F::align::<A, B>(fa, fb), fc);
    ensure(Law::Associativity, actual, expected)
}

// =============================================================================
// Align
// =============================================================================

/// `align(fa, nil()) == map(fa, This)`
pub fn check_right_identity<F, A>(fa: Of<F, A>) -> Result<(), LawViolation>
where
    F: Align,
    Of<F, A>: Clone,
    Of<F, These<A, ()>>: PartialEq + Debug,
{
    let actual = F::align::<A, ()>(fa.clone(), F::nil::<()>());
    let expected = F::map(fa, These::<A, ()>::This);
    ensure(Law::RightIdentity, actual, expected)
}

/// `align(nil(), fb) == map(fb, That)`
pub fn check_left_identity<F, B>(fb: Of<F, B>) -> Result<(), LawViolation>
where
    F: Align,
    Of<F, B>: Clone,
    Of<F, These<(), B>>: PartialEq + Debug,
{
    let actual = F::align::<(), B>(F::nil::<()>(), fb.clone());
    let expected = F::map(fb, These::<(), B>::That);
    ensure(Law::LeftIdentity, actual, expected)
}

// =============================================================================
// Suite Generators
// =============================================================================

/// Generate a `proptest` suite checking every [`Semialign`] law for `$kind`.
///
/// `$strategy` must produce `Of<$kind, i32>`. Emits one test per law, named
/// `<$name>_<law>`. The calling crate needs `proptest` in scope.
#[macro_export]
macro_rules! semialign_laws {
    ($name:ident, $kind:ty, $strategy:expr $(,)?) => {
        $crate::paste::paste! {
            ::proptest::proptest! {
                #[test]
                fn [<$name _functor_identity>](fa in $strategy) {
                    if let Err(v) = $crate::laws::check_functor_identity::<$kind, i32>(fa) {
                        ::proptest::prop_assert!(false, "{}", v);
                    }
                }

                #[test]
                fn [<$name _functor_composition>](fa in $strategy) {
                    let r = $crate::laws::check_functor_composition::<$kind, i32, _, _>(
                        fa,
                        |a: i32| a.wrapping_mul(7),
                        |b: i32| b % 3 == 0,
                    );
                    if let Err(v) = r {
                        ::proptest::prop_assert!(false, "{}", v);
                    }
                }

                #[test]
                fn [<$name _self_align>](fa in $strategy) {
                    if let Err(v) = $crate::laws::check_self_align::<$kind, i32>(fa) {
                        ::proptest::prop_assert!(false, "{}", v);
                    }
                }

                #[test]
                fn [<$name _naturality>](fa in $strategy, fb in $strategy) {
                    let r = $crate::laws::check_naturality::<$kind, i32, i32, _, _>(
                        fa,
                        fb,
                        |a: i32| a.wrapping_mul(31) ^ 7,
                        |b: i32| b % 5 == 0,
                    );
                    if let Err(v) = r {
                        ::proptest::prop_assert!(false, "{}", v);
                    }
                }

                #[test]
                fn [<$name _align_with>](fa in $strategy, fb in $strategy) {
                    let r = $crate::laws::check_align_with::<$kind, i32, i32, _>(
                        fa,
                        fb,
                        |t: $crate::These<i32, i32>| {
                            t.fold(|a| a, |b| b.wrapping_neg(), |a, b| a.wrapping_sub(b))
                        },
                    );
                    if let Err(v) = r {
                        ::proptest::prop_assert!(false, "{}", v);
                    }
                }

                #[test]
                fn [<$name _associativity>](fa in $strategy, fb in $strategy, fc in $strategy) {
                    let r = $crate::laws::check_associativity::<$kind, i32, i32, i32>(fa, fb, fc);
                    if let Err(v) = r {
                        ::proptest::prop_assert!(false, "{}", v);
                    }
                }
            }
        }
    };
}

/// Generate a `proptest` suite checking the [`Align`] unit laws for `$kind`.
///
/// Same conventions as [`semialign_laws!`]; also asserts that aligning two
/// empty shapes is empty.
#[macro_export]
macro_rules! align_laws {
    ($name:ident, $kind:ty, $strategy:expr $(,)?) => {
        $crate::paste::paste! {
            ::proptest::proptest! {
                #[test]
                fn [<$name _right_identity>](fa in $strategy) {
                    if let Err(v) = $crate::laws::check_right_identity::<$kind, i32>(fa) {
                        ::proptest::prop_assert!(false, "{}", v);
                    }
                }

                #[test]
                fn [<$name _left_identity>](fb in $strategy) {
                    if let Err(v) = $crate::laws::check_left_identity::<$kind, i32>(fb) {
                        ::proptest::prop_assert!(false, "{}", v);
                    }
                }
            }

            #[test]
            fn [<$name _nil_nil>]() {
                let got = <$kind as $crate::Semialign>::align(
                    <$kind as $crate::Align>::nil::<i32>(),
                    <$kind as $crate::Align>::nil::<i32>(),
                );
                assert!(got == <$kind as $crate::Align>::nil::<$crate::These<i32, i32>>());
            }
        }
    };
}

// =============================================================================
// Tests
// =============================================================================
