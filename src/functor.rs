//! The mappable capability.

use crate::kind::Kind;

/// Structure-preserving map over every element of `F::Of<A>`.
///
/// Instances must satisfy
///
/// 1. identity: `map(fa, |a| a) == fa`
/// 2. composition: `map(map(fa, f), g) == map(fa, |a| g(f(a)))`
///
/// The order in which `f` is called is unspecified for unordered containers.
pub trait Functor: Kind {
    fn map<A, B, F>(fa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        F: FnMut(A) -> B;
}
