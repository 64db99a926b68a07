use skipiter::{Exhausted, SkipIter, SkipIterExt};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn skipped<T: Clone + Eq + std::hash::Hash>(v: &[T], skips: &[(T, usize)]) -> Vec<T> {
    let mut iter = v.iter().cloned().skippable();
    for (x, n) in skips {
        iter.skip_value_n(x.clone(), *n)
    }
    iter.collect()
}

#[test]
fn identity() {
    init();
    let seqs: [&[u8]; 4] = [&[], &[1], &[1, 1, 1], &[3, 1, 4, 1, 5, 9, 2, 6]];
    for seq in seqs {
        assert_eq!(skipped(seq, &[]), seq.to_vec());
    }
}

#[test]
fn no_skips() {
    init();
    assert_eq!(skipped(&[1, 2, 3, 2, 4], &[]), vec![1, 2, 3, 2, 4]);
}

#[test]
fn skip_once() {
    init();
    assert_eq!(skipped(&[1, 2, 3, 2, 4], &[(2, 1)]), vec![1, 3, 2, 4]);
}

#[test]
fn skip_twice() {
    init();
    assert_eq!(skipped(&[5, 5, 5], &[(5, 2)]), vec![5]);
}

#[test]
fn skip_k() {
    init();
    let seq = [7, 0, 7, 1, 7, 2, 7];
    for k in 0..6 {
        let out = skipped(&seq, &[(7, k)]);
        let sevens = out.iter().filter(|x| **x == 7).count();
        assert_eq!(sevens, 4usize.saturating_sub(k));
        assert_eq!(out.iter().filter(|x| **x != 7).count(), 3);
    }
}

#[test]
fn skip_absent() {
    init();
    assert_eq!(skipped(&[1, 2, 3], &[(9, 1)]), vec![1, 2, 3]);
}

#[test]
fn skip_several() {
    init();
    let out = skipped(&["a", "b", "a", "c", "b", "a"], &[("a", 2), ("b", 1)]);
    assert_eq!(out, vec!["c", "b", "a"]);
}

#[test]
fn empty() {
    init();
    let mut iter = SkipIter::new(std::iter::empty::<u8>());
    iter.skip_value(1);
    assert!(!iter.has_next());
    assert!(!iter.has_next());
    assert_eq!(iter.try_next(), Err(Exhausted));
    assert_eq!(iter.next(), None);
}

#[test]
fn try_next() {
    init();
    let mut iter = SkipIter::from(vec![1, 2].into_iter());
    iter.skip_value(2);
    assert_eq!(iter.try_next(), Ok(1));
    assert_eq!(iter.try_next(), Err(Exhausted));
    assert_eq!(iter.stats().suppressed, 1);
}

#[test]
fn interleaved() {
    init();
    let mut iter = vec![1, 2, 3, 2, 3, 2].into_iter().skippable();
    assert_eq!(iter.next(), Some(1));
    iter.skip_value(2);
    assert_eq!(iter.next(), Some(3));
    iter.skip_value_n(3, 1);
    iter.skip_value(2);
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.pending(&2), 0);
    assert_eq!(iter.next(), None);
}

#[cfg(feature = "std")]
#[test]
fn exhausted_error() {
    let e: Box<dyn std::error::Error> = Box::new(Exhausted);
    assert_eq!(e.to_string(), "called next, but no element survives");
}

#[cfg(feature = "serde")]
#[test]
fn stats_json() {
    let mut iter = vec![1, 1, 2].into_iter().skippable();
    iter.skip_value(1);
    assert!(iter.has_next());
    let json = serde_json::to_string(&iter.stats()).unwrap();
    assert_eq!(json, r#"{"pulled":2,"suppressed":1,"delivered":0}"#);
}
