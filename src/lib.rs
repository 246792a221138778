#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library (HashMap instance, law harness)
// - alloc: enables Vec / VecDeque / BTreeMap instances in no_std
// - derive: default, re-exports #[derive(Functor, Semialign, Align)]
// - tracing: law violations are emitted as tracing events

//! # semialign
//!
//! Zip over the **union** of two container shapes.
//!
//! `zip` stops where the shorter input stops. `align` keeps going and records
//! for every position which side contributed, using [`These`]:
//!
//! ```
//! use semialign::prelude::*;
//!
//! let got = VecK::align(vec![1, 2, 3], vec![10, 20]);
//! assert_eq!(got, vec![Both(1, 10), Both(2, 20), This(3)]);
//!
//! assert_eq!(OptionK::align(Some(5), None::<i32>), Some(This(5)));
//! assert_eq!(OptionK::align(None::<i32>, None::<i32>), None);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Kinds                                                   |
//! |  - Kind (witness + GAT Of<A>), HasKind, Functor, These            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Alignment                                               |
//! |  - Semialign (align, align_with), Align (nil)                     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Instances                                               |
//! |  - Option, Vec, VecDeque, BTreeMap, HashMap, Identity             |
//! |  - iter adaptors, ops helpers, AlignExt                           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Contract                                                |
//! |  - laws (check_*), semialign_laws! / align_laws!, derive macros   |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Higher-kinded witnesses
//!
//! A shape constructor is a zero-sized type with a generic associated type.
//! Extra fixed parameters (a map's key, a hasher) sit on the witness, so one
//! trait covers shapes with zero, one or two fixed parameters:
//!
//! ```text
//! VecK::Of<A>            = Vec<A>
//! BTreeMapK<K>::Of<A>    = BTreeMap<K, A>
//! HashMapK<K, S>::Of<A>  = HashMap<K, A, S>
//! ```
//!
//! ## Deriving
//!
//! A struct whose last type parameter is the element, and whose fields are
//! each either that element or a shape of it, aligns field by field:
//!
//! ```
//! use semialign::prelude::*;
//!
//! #[derive(Debug, PartialEq, Functor, Semialign, Align)]
//! struct Series<T> {
//!     samples: Vec<T>,
//!     peak: Option<T>,
//! }
//!
//! let a = Series { samples: vec![1, 2], peak: Some(2) };
//! let b = Series { samples: vec![7], peak: None };
//!
//! // Generated witness: SeriesKind
//! let merged = SeriesKind::align(a, b);
//! assert_eq!(merged.samples, vec![Both(1, 7), This(2)]);
//! assert_eq!(merged.peak, Some(This(2)));
//! ```
//!
//! Enums have no single shape to align:
//!
//! ```compile_fail
//! use semialign::prelude::*;
//!
//! #[derive(Functor)]
//! enum Either<T> {
//!     Left(Vec<T>),
//!     Right(Option<T>),
//! }
//! ```
//!
//! A bare element field is always present, so there is no empty record:
//!
//! ```compile_fail
//! use semialign::prelude::*;
//!
//! #[derive(Functor, Semialign, Align)]
//! struct Tagged<T>(T, Vec<T>);
//! ```
//!
//! The record needs an element parameter and at least one field:
//!
//! ```compile_fail
//! use semialign::prelude::*;
//!
//! #[derive(Functor)]
//! struct Empty;
//! ```
//!
//! ```compile_fail
//! use semialign::prelude::*;
//!
//! #[derive(Functor)]
//! struct Marker<T> {}
//! ```
//!
//! Unions are rejected like enums:
//!
//! ```compile_fail
//! use semialign::prelude::*;
//!
//! #[derive(Functor)]
//! union Raw<T: Copy> {
//!     one: Option<T>,
//!     many: [T; 2],
//! }
//! ```
//!
//! Every field must hold the element:
//!
//! ```compile_fail
//! use semialign::prelude::*;
//!
//! #[derive(Functor)]
//! struct Counted<T> {
//!     n: u8,
//!     items: Vec<T>,
//! }
//! ```
//!
//! The element must be the last argument of the field type, not nested:
//!
//! ```compile_fail
//! use semialign::prelude::*;
//!
//! #[derive(Functor)]
//! struct Nested<T> {
//!     items: Vec<Option<T>>,
//! }
//! ```
//!
//! Lifetime parameters are rejected:
//!
//! ```compile_fail
//! use semialign::prelude::*;
//!
//! #[derive(Functor)]
//! struct Borrowed<'a, T> {
//!     label: Option<&'a str>,
//!     items: Vec<T>,
//! }
//! ```
//!
//! The element cannot be bounded, inline or in a where clause, and cannot
//! appear in the bounds of a fixed parameter:
//!
//! ```compile_fail
//! use semialign::prelude::*;
//!
//! #[derive(Functor)]
//! struct Bounded<T: Clone> {
//!     items: Vec<T>,
//! }
//! ```
//!
//! ```compile_fail
//! use semialign::prelude::*;
//!
//! #[derive(Functor)]
//! struct Constrained<T>
//! where
//!     T: Clone,
//! {
//!     items: Vec<T>,
//! }
//! ```
//!
//! ```compile_fail
//! use std::collections::BTreeMap;
//! use semialign::prelude::*;
//!
//! #[derive(Functor, Semialign)]
//! struct Keyed<K: Ord + From<T>, T> {
//!     by_key: BTreeMap<K, T>,
//! }
//! ```

// Allow `::semialign` to work inside the crate itself
extern crate self as semialign;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the law suite macros
pub use paste;

// =============================================================================
// Layer 0: Kinds
// =============================================================================
pub mod kind;
pub mod functor;
pub mod these;

// =============================================================================
// Layer 1: Alignment
// =============================================================================
pub mod align;

// =============================================================================
// Layer 2: Instances
// =============================================================================
pub mod instances;
pub mod iter;
pub mod ops;
pub mod ext;

// =============================================================================
// Layer 3: Contract
// =============================================================================
#[cfg(feature = "std")]
pub mod laws;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use kind::{HasKind, Kind, Of};
pub use functor::Functor;
pub use these::These;
pub use align::{align_with_default, Align, Semialign};
pub use ext::AlignExt;
pub use instances::{Identity, OptionK};

#[cfg(feature = "alloc")]
pub use instances::{BTreeMapK, VecDequeK, VecK};

#[cfg(feature = "std")]
pub use instances::HashMapK;

#[cfg(feature = "std")]
pub use laws::{Law, LawViolation};

// Re-export proc-macros
#[cfg(feature = "derive")]
pub use macros::{Align, Functor, Semialign};

/// Common items for aligning containers.
pub mod prelude {
    pub use crate::align::{Align, Semialign};
    pub use crate::ext::AlignExt;
    pub use crate::functor::Functor;
    pub use crate::kind::{HasKind, Kind, Of};
    pub use crate::these::These::{self, Both, That, This};
    pub use crate::instances::{Identity, OptionK};
    #[cfg(feature = "alloc")]
    pub use crate::instances::{BTreeMapK, VecDequeK, VecK};
    #[cfg(feature = "std")]
    pub use crate::instances::HashMapK;
    #[cfg(feature = "derive")]
    pub use macros::{Align, Functor, Semialign};
}
