//! Hash maps: positions are keys, the union is the key-set union.

use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;
use std::collections::HashMap;

use crate::align::{Align, Semialign};
use crate::functor::Functor;
use crate::kind::Kind;
use crate::these::These;

/// Witness for `HashMap<K, _, S>`; key type and hasher are fixed by the witness.
///
/// The result takes a fresh `S::default()` hasher. Iteration order of the
/// output, like any `HashMap`, is unspecified.
pub struct HashMapK<K, S = std::collections::hash_map::RandomState>(PhantomData<(K, S)>);

impl<K, S> Kind for HashMapK<K, S> {
    type Of<A> = HashMap<K, A, S>;
}

crate::impl_has_kind!([K, A, S] HashMap<K, A, S> => HashMapK<K, S>, A);

impl<K, S> Functor for HashMapK<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn map<A, B, F>(fa: HashMap<K, A, S>, mut f: F) -> HashMap<K, B, S>
    where
        F: FnMut(A) -> B,
    {
        fa.into_iter().map(|(k, a)| (k, f(a))).collect()
    }
}

impl<K, S> Semialign for HashMapK<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn align<A, B>(fa: HashMap<K, A, S>, mut fb: HashMap<K, B, S>) -> HashMap<K, These<A, B>, S> {
        let mut out = HashMap::with_capacity_and_hasher(fa.len().max(fb.len()), S::default());
        for (k, a) in fa {
            let t = match fb.remove(&k) {
                Some(b) => These::Both(a, b),
                None => These::This(a),
            };
            out.insert(k, t);
        }
        out.extend(fb.into_iter().map(|(k, b)| (k, These::That(b))));
        out
    }
}

impl<K, S> Align for HashMapK<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn nil<A>() -> HashMap<K, A, S> {
        HashMap::default()
    }
}
