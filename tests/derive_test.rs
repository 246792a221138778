//! `#[derive(Functor, Semialign, Align)]` on user records.

use std::collections::{BTreeMap, VecDeque};

use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use semialign::prelude::*;
use semialign::{align_laws, semialign_laws};

// =============================================================================
// Records
// =============================================================================

#[derive(Debug, Clone, PartialEq, Functor, Semialign, Align)]
pub struct Series<T> {
    samples: Vec<T>,
    peak: Option<T>,
}

#[derive(Debug, Clone, PartialEq, Functor, Semialign, Align)]
struct Scores<K: Ord, T> {
    by_key: BTreeMap<K, T>,
    history: VecDeque<T>,
}

/// Tuple struct with a bare element slot: semialign, but no `Align`.
#[derive(Debug, Clone, PartialEq, Functor, Semialign)]
struct Labeled<T>(T, Vec<T>);

// =============================================================================
// Concrete
// =============================================================================

#[test]
fn test_series_aligns_field_by_field() {
    let a = Series {
        samples: vec![1, 2, 3],
        peak: Some(3),
    };
    let b = Series {
        samples: vec![10],
        peak: None,
    };
    let got = SeriesKind::align(a, b);
    assert_eq!(
        got,
        Series {
            samples: vec![Both(1, 10), This(2), This(3)],
            peak: Some(This(3)),
        }
    );
}

#[test]
fn test_series_method_syntax() {
    let a = Series {
        samples: vec![1],
        peak: None,
    };
    let b = Series {
        samples: vec!['x', 'y'],
        peak: Some('y'),
    };
    let got = a.align(b);
    assert_eq!(got.samples, vec![Both(1, 'x'), That('y')]);
    assert_eq!(got.peak, Some(That('y')));
}

#[test]
fn test_series_map() {
    let s = Series {
        samples: vec![1, 2],
        peak: Some(2),
    };
    let got = SeriesKind::map(s, |x: i32| x * 10);
    assert_eq!(
        got,
        Series {
            samples: vec![10, 20],
            peak: Some(20),
        }
    );
}

#[test]
fn test_series_nil() {
    assert_eq!(
        SeriesKind::nil::<u8>(),
        Series {
            samples: vec![],
            peak: None,
        }
    );
}

#[test]
fn test_scores_with_fixed_key() {
    let a = Scores {
        by_key: BTreeMap::from([("ann", 3), ("bob", 5)]),
        history: VecDeque::from(vec![3]),
    };
    let b = Scores {
        by_key: BTreeMap::from([("bob", 1), ("cat", 4)]),
        history: VecDeque::from(vec![1, 4]),
    };
    let got = ScoresKind::<&str>::align_with(a, b, |t: These<i32, i32>| t.merge(|x, y| x + y));
    assert_eq!(got.by_key, BTreeMap::from([("ann", 3), ("bob", 6), ("cat", 4)]));
    assert_eq!(got.history, VecDeque::from(vec![4, 4]));
}

#[test]
fn test_labeled_bare_slot_is_always_both() {
    let got = LabeledKind::align(Labeled(1, vec![]), Labeled('a', vec!['b']));
    assert_eq!(got, Labeled(Both(1, 'a'), vec![That('b')]));
}

#[test]
fn test_witness_is_zero_sized() {
    assert_eq!(std::mem::size_of::<SeriesKind>(), 0);
    assert_eq!(std::mem::size_of::<ScoresKind<String>>(), 0);
}

#[test]
fn test_has_kind_round_trip() {
    let s = Series {
        samples: vec![1],
        peak: None,
    };
    let of = s.clone().into_kind();
    assert_eq!(Series::from_kind(of), s);
}

// =============================================================================
// Laws
// =============================================================================

fn series() -> impl Strategy<Value = Series<i32>> {
    (vec(any::<i32>(), 0..6), proptest::option::of(any::<i32>()))
        .prop_map(|(samples, peak)| Series { samples, peak })
}

fn scores() -> impl Strategy<Value = Scores<u8, i32>> {
    (
        btree_map(0u8..8, any::<i32>(), 0..5),
        vec(any::<i32>(), 0..5).prop_map(VecDeque::from),
    )
        .prop_map(|(by_key, history)| Scores { by_key, history })
}

fn labeled() -> impl Strategy<Value = Labeled<i32>> {
    (any::<i32>(), vec(any::<i32>(), 0..6)).prop_map(|(head, rest)| Labeled(head, rest))
}

semialign_laws!(series, SeriesKind, series());
align_laws!(series, SeriesKind, series());

semialign_laws!(scores, ScoresKind<u8>, scores());
align_laws!(scores, ScoresKind<u8>, scores());

semialign_laws!(labeled, LabeledKind, labeled());
