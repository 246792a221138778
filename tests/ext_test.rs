//! Method syntax and the derived helpers in `ops`.

use std::collections::{BTreeMap, HashMap};

use semialign::ops::{lpad_zip, lpad_zip_with, pad_zip, rpad_zip_with, salign};
use semialign::prelude::*;

#[test]
fn test_vec_method_align() {
    let got = vec![1, 2, 3].align(vec![10, 20]);
    assert_eq!(got, vec![Both(1, 10), Both(2, 20), This(3)]);
}

#[test]
fn test_option_method_align_with() {
    let got = Some(5).align_with(Some(7), |t: These<i32, i32>| t.merge(i32::max));
    assert_eq!(got, Some(7));
    let got = None::<i32>.align_with(None::<i32>, |t: These<i32, i32>| t.merge(i32::max));
    assert_eq!(got, None);
}

#[test]
fn test_map_method_align() {
    let a = BTreeMap::from([(1, 'a')]);
    let b = BTreeMap::from([(2, "two")]);
    let got = a.align(b);
    assert_eq!(got, BTreeMap::from([(1, This('a')), (2, That("two"))]));

    let a: HashMap<u8, u8> = HashMap::from([(1, 1)]);
    let b: HashMap<u8, u8> = HashMap::from([(1, 2)]);
    assert_eq!(a.align(b), HashMap::from([(1, Both(1, 2))]));
}

#[test]
fn test_salign_over_maps() {
    let a = BTreeMap::from([("x", 1), ("y", 2)]);
    let b = BTreeMap::from([("y", 10), ("z", 20)]);
    let got = salign::<BTreeMapK<&str>, _, _>(a, b, |l, r| l + r);
    assert_eq!(got, BTreeMap::from([("x", 1), ("y", 12), ("z", 20)]));
}

#[test]
fn test_pad_zip_over_option() {
    assert_eq!(pad_zip::<OptionK, i32, char>(Some(1), None), Some((Some(1), None)));
    assert_eq!(pad_zip::<OptionK, i32, char>(None, None), None);
}

#[test]
fn test_lpad_and_rpad() {
    assert_eq!(
        lpad_zip(vec!["a"], vec![1, 2]),
        vec![(Some("a"), 1), (None, 2)]
    );
    let labels = lpad_zip_with(vec!["a", "b", "c"], vec![1], |l, n| {
        format!("{}{n}", l.unwrap_or("-"))
    });
    assert_eq!(labels, vec!["a1".to_string()]);

    let filled = rpad_zip_with(vec![1, 2, 3], vec![10], |a, b| a + b.unwrap_or(0));
    assert_eq!(filled, vec![11, 2, 3]);
}
