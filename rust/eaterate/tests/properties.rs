use eaterate::prelude::*;
use proptest::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..40)
}

proptest! {
    #[test]
    fn map_identity_preserves_elements(v in small_vec()) {
        prop_assert_eq!(eater(v.clone()).map(|x| x).collect_vec(), v);
    }

    #[test]
    fn count_matches_length(v in small_vec()) {
        let mut eat = eater(v.clone());
        prop_assert_eq!(eat.count(), v.len());
        prop_assert_eq!(eat.advance(), Maybe::absent());
    }

    #[test]
    fn chain_concatenates(a in small_vec(), b in small_vec()) {
        let mut expected = a.clone();
        expected.extend(b.iter().copied());
        prop_assert_eq!(eater(a.clone()).chain(b.clone()).collect_vec(), expected);
        prop_assert_eq!(eater(a.clone()).chain(b.clone()).count(), a.len() + b.len());
    }

    #[test]
    fn zip_pairs_up_to_shorter(a in small_vec(), b in small_vec()) {
        let pairs = eater(a.clone()).zip(b.clone()).collect_vec();
        prop_assert_eq!(pairs.len(), a.len().min(b.len()));
        let expected: Vec<_> = a.into_iter().zip(b).collect();
        prop_assert_eq!(pairs, expected);
    }

    #[test]
    fn take_bounds_count(v in small_vec(), n in 0usize..60) {
        let taken = eater(v.clone()).take(n).count();
        prop_assert!(taken <= n);
        if v.len() >= n {
            prop_assert_eq!(taken, n);
        }
    }

    #[test]
    fn skip_then_take_on_range(k in 0i64..50, n in 0usize..60, m in 0usize..60) {
        let result = erange(..k).skip(n).take(m).collect_vec();
        let lo = (n as i64).min(k);
        let hi = (n as i64 + m as i64).min(k);
        let expected: Vec<i64> = (lo..hi).collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn windows_are_contiguous_slices(v in small_vec(), size in 1usize..8) {
        let windows = eater(v.clone()).windows(size).unwrap().collect_vec();
        let expected_len = (v.len() + 1).saturating_sub(size);
        prop_assert_eq!(windows.len(), expected_len);
        for (i, w) in windows.iter().enumerate() {
            prop_assert_eq!(w.as_slice(), &v[i..i + size]);
        }
    }

    #[test]
    fn step_by_matches_std(v in small_vec(), step in 1usize..7) {
        let expected: Vec<i32> = v.iter().copied().step_by(step).collect();
        prop_assert_eq!(eater(v).step_by(step).unwrap().collect_vec(), expected);
    }

    #[test]
    fn intersperse_length(v in small_vec()) {
        let out = eater(v.clone()).intersperse(0).collect_vec();
        prop_assert_eq!(out.len(), (2 * v.len()).saturating_sub(1));
        let originals: Vec<i32> = out.iter().copied().step_by(2).collect();
        prop_assert_eq!(originals, v);
    }

    #[test]
    fn flatten_concatenates(vs in prop::collection::vec(small_vec(), 0..8)) {
        let expected: Vec<i32> = vs.iter().flatten().copied().collect();
        prop_assert_eq!(eater(vs).flatten().collect_vec(), expected);
    }
}

#[test]
fn step_by_two_on_six() {
    assert_eq!(
        eater([0, 1, 2, 3, 4, 5]).step_by(2).unwrap().collect_vec(),
        vec![0, 2, 4]
    );
}

#[test]
fn intersperse_three() {
    assert_eq!(
        eater(["a", "b", "c"]).intersperse("sep").collect_vec(),
        vec!["a", "sep", "b", "sep", "c"]
    );
}

#[test]
fn randomized_filter_matches_std() {
    fastrand::seed(2985745485);
    for _ in 0..50 {
        let len = fastrand::usize(0..200);
        let data: Vec<u32> = (0..len).map(|_| fastrand::u32(..1000)).collect();
        let modulus = fastrand::u32(1..10);
        let expected: Vec<u32> = data.iter().copied().filter(|x| x % modulus == 0).collect();
        let actual = eater(data).filter(|x| x % modulus == 0).collect_vec();
        assert_eq!(actual, expected);
    }
}
