//! Property suites: every shipped instance against every law.

use std::collections::VecDeque;

use proptest::collection::{btree_map, hash_map, vec};
use proptest::prelude::*;
use semialign::{align_laws, semialign_laws};
use semialign::{BTreeMapK, HashMapK, Identity, OptionK, VecDequeK, VecK};

// =============================================================================
// Option
// =============================================================================

semialign_laws!(option, OptionK, proptest::option::of(any::<i32>()));
align_laws!(option, OptionK, proptest::option::of(any::<i32>()));

// =============================================================================
// Sequences
// =============================================================================

semialign_laws!(vec, VecK, vec(any::<i32>(), 0..8));
align_laws!(vec, VecK, vec(any::<i32>(), 0..8));

semialign_laws!(
    vec_deque,
    VecDequeK,
    vec(any::<i32>(), 0..8).prop_map(VecDeque::from)
);
align_laws!(
    vec_deque,
    VecDequeK,
    vec(any::<i32>(), 0..8).prop_map(VecDeque::from)
);

// =============================================================================
// Maps (small key space so shapes overlap often)
// =============================================================================

semialign_laws!(btree_map, BTreeMapK<u8>, btree_map(0u8..12, any::<i32>(), 0..6));
align_laws!(btree_map, BTreeMapK<u8>, btree_map(0u8..12, any::<i32>(), 0..6));

semialign_laws!(hash_map, HashMapK<u8>, hash_map(0u8..12, any::<i32>(), 0..6));
align_laws!(hash_map, HashMapK<u8>, hash_map(0u8..12, any::<i32>(), 0..6));

// =============================================================================
// Identity (no Align)
// =============================================================================

semialign_laws!(identity, Identity, any::<i32>());
