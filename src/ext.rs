//! Method-call syntax for aligning concrete containers.
//!
//! ```
//! use semialign::prelude::*;
//!
//! let got = vec![1, 2, 3].align(vec!['a']);
//! assert_eq!(got, vec![These::Both(1, 'a'), These::This(2), These::This(3)]);
//! ```

use crate::align::Semialign;
use crate::kind::{HasKind, Of};
use crate::these::These;

/// `left.align(right)` for any two containers sharing a witness.
///
/// Blanket-implemented for every [`HasKind`] type; the methods are only
/// callable when the witness is [`Semialign`].
pub trait AlignExt: HasKind {
    #[inline]
    fn align<O>(self, other: O) -> Of<Self::Kind, These<Self::Elem, O::Elem>>
    where
        Self::Kind: Semialign,
        O: HasKind<Kind = Self::Kind>,
    {
        <Self::Kind as Semialign>::align::<Self::Elem, O::Elem>(self.into_kind(), other.into_kind())
    }

    #[inline]
    fn align_with<O, C, F>(self, other: O, f: F) -> Of<Self::Kind, C>
    where
        Self::Kind: Semialign,
        O: HasKind<Kind = Self::Kind>,
        F: FnMut(These<Self::Elem, O::Elem>) -> C,
    {
        <Self::Kind as Semialign>::align_with(self.into_kind(), other.into_kind(), f)
    }
}

impl<T: HasKind> AlignExt for T {}
