//! # Layer 0: Kinds
//!
//! Rust has no higher-kinded generics, so a container *shape* is named by a
//! zero-sized witness type carrying a generic associated type:
//!
//! ```text
//! VecK          ::Of<A> = Vec<A>
//! OptionK       ::Of<A> = Option<A>
//! BTreeMapK<K>  ::Of<A> = BTreeMap<K, A>     (fixed key lives on the witness)
//! HashMapK<K,S> ::Of<A> = HashMap<K, A, S>   (fixed key and hasher)
//! ```
//!
//! Witnesses are never constructed; every capability built on top of them
//! is a set of associated functions.

/// A type constructor `F<_>`, witnessed by `Self`.
pub trait Kind {
    /// The container of `A` with this shape.
    type Of<A>;
}

/// Shorthand for `<F as Kind>::Of<A>`.
pub type Of<F, A> = <F as Kind>::Of<A>;

/// Maps a concrete container type back to its witness and element type.
///
/// `Vec<u8>` has `Kind = VecK` and `Elem = u8`. The conversions are the
/// identity for every impl in this crate; they exist so generic code can move
/// between the concrete type and the projected `Of<Kind, Elem>`.
pub trait HasKind: Sized {
    type Kind: Kind;
    type Elem;

    fn into_kind(self) -> Of<Self::Kind, Self::Elem>;
    fn from_kind(of: Of<Self::Kind, Self::Elem>) -> Self;
}

/// Implements [`HasKind`] for `$ty` whose last generic parameter is `$elem`.
///
/// ```ignore
/// impl_has_kind!([A] Vec<A> => VecK, A);
/// impl_has_kind!([K, A] BTreeMap<K, A> => BTreeMapK<K>, A);
/// ```
#[macro_export]
macro_rules! impl_has_kind {
    ([$($g:ident),*] $ty:ty => $kind:ty, $elem:ident) => {
        impl<$($g),*> $crate::HasKind for $ty {
            type Kind = $kind;
            type Elem = $elem;

            #[inline(always)]
            fn into_kind(self) -> $crate::Of<Self::Kind, Self::Elem> {
                self
            }

            #[inline(always)]
            fn from_kind(of: $crate::Of<Self::Kind, Self::Elem>) -> Self {
                of
            }
        }
    };
}
