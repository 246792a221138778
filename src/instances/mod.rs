//! # Layer 2: Instances
//!
//! Shape union per container:
//!
//! | Witness          | Container          | Union of       | Feature |
//! |------------------|--------------------|----------------|---------|
//! | [`OptionK`]      | `Option<A>`        | presence       | -       |
//! | [`Identity`]     | `A`                | (single slot)  | -       |
//! | [`VecK`]         | `Vec<A>`           | indices        | `alloc` |
//! | [`VecDequeK`]    | `VecDeque<A>`      | indices        | `alloc` |
//! | [`BTreeMapK`]    | `BTreeMap<K, A>`   | key sets       | `alloc` |
//! | [`HashMapK`]     | `HashMap<K, A, S>` | key sets       | `std`   |

mod identity;
mod option;

#[cfg(feature = "alloc")]
mod seq;

#[cfg(feature = "alloc")]
mod btree;

#[cfg(feature = "std")]
mod hash;

pub use identity::Identity;
pub use option::OptionK;

#[cfg(feature = "alloc")]
pub use seq::{VecDequeK, VecK};

#[cfg(feature = "alloc")]
pub use btree::BTreeMapK;

#[cfg(feature = "std")]
pub use hash::HashMapK;
