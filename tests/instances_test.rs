//! Concrete alignment scenarios for every shipped instance.

use std::collections::{BTreeMap, HashMap, VecDeque};

use semialign::prelude::*;
use semialign::align_with_default;

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn test_vec_longer_left() {
    let got = VecK::align(vec![1, 2, 3], vec![10, 20]);
    assert_eq!(got, vec![Both(1, 10), Both(2, 20), This(3)]);
}

#[test]
fn test_vec_against_empty() {
    let got = VecK::align(vec![1, 2, 3], Vec::<i32>::new());
    assert_eq!(got, vec![This(1), This(2), This(3)]);

    let got = VecK::align(Vec::<i32>::new(), vec!['a', 'b']);
    assert_eq!(got, vec![That('a'), That('b')]);
}

#[test]
fn test_vec_both_empty() {
    let got = VecK::align(Vec::<u8>::new(), Vec::<char>::new());
    assert!(got.is_empty());
}

#[test]
fn test_vec_mixed_types() {
    let got = VecK::align(vec!["x"], vec![1.5, 2.5]);
    assert_eq!(got, vec![Both("x", 1.5), That(2.5)]);
}

#[test]
fn test_vec_align_with_matches_default() {
    let f = |t: These<i32, i32>| t.fold(|a| a, |b| -b, |a, b| a * b);
    let direct = VecK::align_with(vec![1, 2, 3], vec![4], f);
    let derived = align_with_default::<VecK, _, _, _, _>(vec![1, 2, 3], vec![4], f);
    assert_eq!(direct, vec![4, 2, 3]);
    assert_eq!(direct, derived);
}

#[test]
fn test_vec_deque() {
    let a: VecDeque<i32> = [1, 2].into_iter().collect();
    let b: VecDeque<i32> = [7, 8, 9].into_iter().collect();
    let got = VecDequeK::align(a, b);
    assert_eq!(got, VecDeque::from(vec![Both(1, 7), Both(2, 8), That(9)]));
}

#[test]
fn test_vec_deque_counts_from_front() {
    let mut a = VecDeque::new();
    a.push_back(2);
    a.push_front(1);
    let got = VecDequeK::align(a, VecDeque::from(vec!['a']));
    assert_eq!(got, VecDeque::from(vec![Both(1, 'a'), This(2)]));
}

// =============================================================================
// Option
// =============================================================================

#[test]
fn test_option_present_absent() {
    assert_eq!(OptionK::align(Some(5), None::<i32>), Some(This(5)));
    assert_eq!(OptionK::align(None::<i32>, Some(5)), Some(That(5)));
}

#[test]
fn test_option_both_present() {
    assert_eq!(OptionK::align(Some(5), Some(7)), Some(Both(5, 7)));
}

#[test]
fn test_option_both_absent() {
    assert_eq!(OptionK::align(None::<i32>, None::<i32>), None);
    assert_eq!(OptionK::align_with(None::<i32>, None::<i32>, |_| 1), None);
}

// =============================================================================
// Maps
// =============================================================================

#[test]
fn test_btree_map_key_union() {
    let a = BTreeMap::from([("a", 1), ("b", 2)]);
    let b = BTreeMap::from([("b", 'x'), ("c", 'y')]);
    let got = BTreeMapK::<&str>::align(a, b);
    let expected = BTreeMap::from([("a", This(1)), ("b", Both(2, 'x')), ("c", That('y'))]);
    assert_eq!(got, expected);
}

#[test]
fn test_btree_map_with_empty() {
    let a = BTreeMap::from([(1, "one"), (2, "two")]);
    let got = BTreeMapK::<i32>::align(a, BTreeMap::<i32, ()>::new());
    assert!(got.values().all(These::is_this));
    assert_eq!(got.len(), 2);
}

#[test]
fn test_btree_map_align_with() {
    let a = BTreeMap::from([(1, 10), (2, 20)]);
    let b = BTreeMap::from([(2, 1), (3, 2)]);
    let got = BTreeMapK::<i32>::align_with(a, b, |t: These<i32, i32>| t.merge(|x, y| x + y));
    assert_eq!(got, BTreeMap::from([(1, 10), (2, 21), (3, 2)]));
}

#[test]
fn test_hash_map_key_union() {
    let a: HashMap<&str, i32> = HashMap::from([("a", 1), ("b", 2)]);
    let b: HashMap<&str, bool> = HashMap::from([("b", true), ("c", false)]);
    let got = HashMapK::<&str>::align(a, b);
    let expected = HashMap::from([("a", This(1)), ("b", Both(2, true)), ("c", That(false))]);
    assert_eq!(got, expected);
}

#[test]
fn test_hash_map_both_empty() {
    let got = HashMapK::<u8>::align(HashMap::<u8, u8>::new(), HashMap::<u8, u8>::new());
    assert!(got.is_empty());
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn test_identity_always_both() {
    assert_eq!(Identity::align(1, 'a'), Both(1, 'a'));
    assert_eq!(Identity::align_with(2, 3, |t: These<i32, i32>| t.merge(|a, b| a * b)), 6);
    assert_eq!(Identity::map(4, |x: i32| x + 1), 5);
}

// =============================================================================
// Nil
// =============================================================================

#[test]
fn test_nil_is_empty() {
    assert_eq!(OptionK::nil::<i32>(), None);
    assert!(VecK::nil::<i32>().is_empty());
    assert!(VecDequeK::nil::<i32>().is_empty());
    assert!(BTreeMapK::<i32>::nil::<i32>().is_empty());
    assert!(HashMapK::<i32>::nil::<i32>().is_empty());
}
