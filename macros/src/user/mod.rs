//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Functor)]` | on struct | Witness type + field-wise `map` |
//! | `#[derive(Semialign)]` | on struct | Field-wise `align` / `align_with` |
//! | `#[derive(Align)]` | on struct | Field-wise `nil` |

mod derive;

pub use derive::{expand_derive_align, expand_derive_functor, expand_derive_semialign};
