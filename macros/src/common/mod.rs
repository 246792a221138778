// Common utilities shared by the derive expansions
//
// This module contains:
// - record: element-parameter analysis and per-field shape classification

mod record;

pub use record::*;
