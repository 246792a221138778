//! Ordered maps: positions are keys, the union is the key-set union.

use alloc::collections::BTreeMap;
use core::marker::PhantomData;

use crate::align::{Align, Semialign};
use crate::functor::Functor;
use crate::iter::align_by_key;
use crate::kind::Kind;
use crate::these::These;

/// Witness for `BTreeMap<K, _>`; the key type is fixed by the witness.
///
/// Alignment is a single merge walk over both maps in key order.
pub struct BTreeMapK<K>(PhantomData<K>);

impl<K> Kind for BTreeMapK<K> {
    type Of<A> = BTreeMap<K, A>;
}

crate::impl_has_kind!([K, A] BTreeMap<K, A> => BTreeMapK<K>, A);

impl<K: Ord> Functor for BTreeMapK<K> {
    #[inline]
    fn map<A, B, F>(fa: BTreeMap<K, A>, mut f: F) -> BTreeMap<K, B>
    where
        F: FnMut(A) -> B,
    {
        fa.into_iter().map(|(k, a)| (k, f(a))).collect()
    }
}

impl<K: Ord> Semialign for BTreeMapK<K> {
    #[inline]
    fn align<A, B>(fa: BTreeMap<K, A>, fb: BTreeMap<K, B>) -> BTreeMap<K, These<A, B>> {
        align_by_key(fa, fb).collect()
    }

    #[inline]
    fn align_with<A, B, C, F>(fa: BTreeMap<K, A>, fb: BTreeMap<K, B>, mut f: F) -> BTreeMap<K, C>
    where
        F: FnMut(These<A, B>) -> C,
    {
        align_by_key(fa, fb).map(|(k, t)| (k, f(t))).collect()
    }
}

impl<K: Ord> Align for BTreeMapK<K> {
    #[inline]
    fn nil<A>() -> BTreeMap<K, A> {
        BTreeMap::new()
    }
}
