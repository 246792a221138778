//! Procedural macros for the semialign traits
//!
//! | Macro | Target | Generates |
//! |-------|--------|-----------|
//! | `#[derive(Functor)]` | struct | witness `<Name>Kind`, `Kind`, `HasKind`, `Functor` |
//! | `#[derive(Semialign)]` | struct | `Semialign` for the witness (needs `Functor`) |
//! | `#[derive(Align)]` | struct | `Align` for the witness (needs `Semialign`) |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Functor, Semialign, Align)]
//! pub struct Scores<K: Ord, T> {
//!     by_key: BTreeMap<K, T>,
//!     best: Option<T>,
//! }
//!
//! // Expands to (abridged):
//! pub struct ScoresKind<K>(PhantomData<fn() -> (K,)>);
//! impl<K: Ord> Kind for ScoresKind<K> { type Of<__A> = Scores<K, __A>; }
//! impl<K: Ord> Semialign for ScoresKind<K> {
//!     fn align<__A, __B>(fa: Scores<K, __A>, fb: Scores<K, __B>) -> Scores<K, These<__A, __B>> {
//!         Scores {
//!             by_key: <<BTreeMap<K, __A> as HasKind>::Kind as Semialign>::align(fa.by_key, fb.by_key),
//!             best: <<Option<__A> as HasKind>::Kind as Semialign>::align(fa.best, fb.best),
//!         }
//!     }
//! }
//! ```
//!
//! The **last** type parameter is the element. Each field is either the bare
//! element (aligned as `Identity`) or a container whose last generic argument
//! is the element.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive the witness type and `Functor` for a record of containers.
#[proc_macro_derive(Functor)]
pub fn derive_functor(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_functor(input).into()
}

/// Derive field-wise `Semialign` for the witness generated by `Functor`.
#[proc_macro_derive(Semialign)]
pub fn derive_semialign(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_semialign(input).into()
}

/// Derive field-wise `Align`. Every field must be a container.
#[proc_macro_derive(Align)]
pub fn derive_align(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_align(input).into()
}
