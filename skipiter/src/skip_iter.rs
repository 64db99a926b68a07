use crate::{Exhausted, Skips, Stats};
use core::hash::Hash;
use core::iter::FusedIterator;
use log::trace;

/// Iterator that suppresses future occurrences of values marked via
/// [`skip_value`](SkipIter::skip_value).
///
/// Marking a value `n` times suppresses exactly its next `n` occurrences;
/// all other elements are yielded in their original order.
/// At most one element is buffered, namely the next surviving element
/// once it has been determined by [`has_next`](SkipIter::has_next) or
/// [`peek`](SkipIter::peek).
/// Suppressions never apply to this buffered element.
///
/// Once the underlying iterator returns `None`, it is never polled again.
///
/// ~~~
/// # use skipiter::SkipIter;
/// let mut iter = SkipIter::new(vec![5, 5, 5].into_iter());
/// iter.skip_value_n(5, 2);
/// assert_eq!(iter.next(), Some(5));
/// assert!(!iter.has_next());
/// ~~~
#[derive(Clone, Debug)]
pub struct SkipIter<I: Iterator> {
    iter: I,
    skips: Skips<I::Item>,
    peek: Option<I::Item>,
    done: bool,
    stats: Stats,
}

impl<I: Iterator> SkipIter<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            skips: Skips::new(),
            peek: None,
            done: false,
            stats: Stats::default(),
        }
    }

    /// Return the pending suppressions.
    pub fn skips(&self) -> &Skips<I::Item> {
        &self.skips
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}

impl<I: Iterator> SkipIter<I>
where
    I::Item: Eq + Hash,
{
    /// Return true if a surviving element remains.
    ///
    /// This may consume suppressed elements from the underlying iterator,
    /// but never more than up to the next surviving element.
    pub fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }

    /// Return a reference to the next surviving element without consuming it.
    pub fn peek(&mut self) -> Option<&I::Item> {
        if self.peek.is_none() && !self.done {
            self.peek = self.pull();
        }
        self.peek.as_ref()
    }

    /// Return the next surviving element, failing if there is none.
    ///
    /// This is the same as [`Iterator::next`], but with an explicit error.
    pub fn try_next(&mut self) -> Result<I::Item, Exhausted> {
        self.next().ok_or(Exhausted)
    }

    /// Suppress the next occurrence of `x`.
    pub fn skip_value(&mut self, x: I::Item) {
        self.skip_value_n(x, 1)
    }

    /// Suppress the next `n` occurrences of `x`.
    ///
    /// This does not affect an element that was already peeked.
    pub fn skip_value_n(&mut self, x: I::Item, n: usize) {
        self.skips.insert(x, n)
    }

    /// Return the number of future occurrences of `x` still to be suppressed.
    pub fn pending(&self, x: &I::Item) -> usize {
        self.skips.pending(x)
    }

    /// Take elements from the underlying iterator until one survives.
    fn pull(&mut self) -> Option<I::Item> {
        for x in &mut self.iter {
            self.stats.pulled += 1;
            if !self.skips.take(&x) {
                return Some(x);
            }
            self.stats.suppressed += 1;
            trace!("suppressed element, {} suppressions left", self.skips.len());
        }
        trace!("exhausted after {} elements", self.stats.pulled);
        self.done = true;
        None
    }
}

impl<I: Iterator> Iterator for SkipIter<I>
where
    I::Item: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.peek();
        let x = self.peek.take()?;
        self.stats.delivered += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let peeked = usize::from(self.peek.is_some());
        if self.done {
            return (peeked, Some(peeked));
        }
        let (_, upper) = self.iter.size_hint();
        (peeked, upper.and_then(|n| n.checked_add(peeked)))
    }
}

impl<I: Iterator> FusedIterator for SkipIter<I> where I::Item: Eq + Hash {}

impl<I: Iterator> From<I> for SkipIter<I> {
    fn from(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Obtain a [`SkipIter`] from any iterator.
pub trait SkipIterExt: Iterator + Sized {
    fn skippable(self) -> SkipIter<Self> {
        SkipIter::new(self)
    }
}

impl<I: Iterator> SkipIterExt for I {}

#[cfg(test)]
use alloc::{vec, vec::Vec};

#[test]
fn peek_is_committed() {
    let mut iter = SkipIter::new(vec![1, 2, 1].into_iter());
    assert_eq!(iter.peek(), Some(&1));
    iter.skip_value(1);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.pending(&1), 0);
}

#[test]
fn has_next_idempotent() {
    let mut iter = SkipIter::new(vec![3, 3, 4, 5].into_iter());
    iter.skip_value(3);
    assert!(iter.has_next());
    assert!(iter.has_next());
    assert_eq!(iter.stats().pulled, 2);
    assert_eq!(iter.next(), Some(3));
    assert_eq!(iter.stats().buffered(), 0);
}

#[test]
fn stats() {
    let mut iter = SkipIter::new(vec![1, 2, 2, 3].into_iter());
    iter.skip_value_n(2, 2);
    let v: Vec<_> = iter.by_ref().collect();
    assert_eq!(v, vec![1, 3]);
    let stats = Stats {
        pulled: 4,
        suppressed: 2,
        delivered: 2,
    };
    assert_eq!(iter.stats(), stats);
    assert!(iter.skips().is_empty());
}

#[test]
fn size_hint() {
    let mut iter = SkipIter::new(vec![1, 2, 3].into_iter());
    assert_eq!(iter.size_hint(), (0, Some(3)));
    iter.peek();
    assert_eq!(iter.size_hint(), (1, Some(3)));
    iter.skip_value_n(2, 1);
    iter.skip_value_n(3, 1);
    iter.next();
    assert!(!iter.has_next());
    assert_eq!(iter.size_hint(), (0, Some(0)));
}

/// Iterator that yields `None` on every second call.
#[cfg(test)]
struct Flaky(u8);

#[cfg(test)]
impl Iterator for Flaky {
    type Item = u8;
    fn next(&mut self) -> Option<u8> {
        self.0 += 1;
        (self.0 % 2 == 0).then(|| self.0)
    }
}

#[test]
fn fused() {
    let mut iter = SkipIter::new(Flaky(0));
    assert_eq!(iter.next(), None);
    assert!(!iter.has_next());
    assert_eq!(iter.next(), None);
    assert_eq!(iter.stats().pulled, 0);
}
