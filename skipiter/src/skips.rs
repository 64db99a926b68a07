use core::fmt::{self, Display};
use core::hash::Hash;
use core::iter::FromIterator;
use hashbrown::HashMap;

/// A multiset of values, counting how many future occurrences of each value to suppress.
///
/// Values without pending suppressions are never stored.
///
/// ~~~
/// # use skipiter::Skips;
/// let mut skips: Skips<_> = vec![5, 5, 7].into_iter().collect();
/// assert_eq!(skips.pending(&5), 2);
/// assert!(skips.take(&7));
/// assert!(!skips.take(&7));
/// assert_eq!(skips.len(), 2);
/// ~~~
#[derive(Clone, Debug)]
pub struct Skips<T>(HashMap<T, usize>);

impl<T> Default for Skips<T> {
    fn default() -> Self {
        Self(HashMap::new())
    }
}

impl<T> Skips<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the total number of pending suppressions.
    pub fn len(&self) -> usize {
        self.0.values().fold(0, |acc, n| acc.saturating_add(*n))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all values with pending suppressions and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.0.iter().map(|(x, n)| (x, *n))
    }
}

impl<T: Eq + Hash> Skips<T> {
    /// Return the number of pending suppressions for `x`.
    pub fn pending(&self, x: &T) -> usize {
        self.0.get(x).copied().unwrap_or(0)
    }

    /// Add `n` pending suppressions for `x`.
    pub fn insert(&mut self, x: T, n: usize) {
        if n > 0 {
            let count = self.0.entry(x).or_default();
            *count = count.saturating_add(n)
        }
    }

    /// Consume a pending suppression for `x`, returning whether there was one.
    pub fn take(&mut self, x: &T) -> bool {
        match self.0.get_mut(x) {
            Some(n) => {
                *n -= 1;
                if *n == 0 {
                    self.0.remove(x);
                }
                true
            }
            None => false,
        }
    }
}

impl<T: Display> Display for Skips<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.0.iter().peekable();
        while let Some((x, n)) = iter.next() {
            write!(f, "{} ↦ {}", x, n)?;
            if iter.peek().is_some() {
                write!(f, ", ")?;
            }
        }
        write!(f, "}}")
    }
}

impl<T: Eq + Hash> Extend<T> for Skips<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|x| self.insert(x, 1))
    }
}

impl<T: Eq + Hash> FromIterator<T> for Skips<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut skips = Self::new();
        skips.extend(iter);
        skips
    }
}

#[test]
fn take() {
    let mut s = Skips::new();
    s.insert('a', 2);
    assert_eq!(s.pending(&'a'), 2);
    assert!(s.take(&'a'));
    assert_eq!(s.pending(&'a'), 1);
    assert!(s.take(&'a'));
    assert_eq!(s.pending(&'a'), 0);
    assert!(!s.take(&'a'));
    assert!(s.is_empty());
}

#[test]
fn insert_zero() {
    let mut s = Skips::new();
    s.insert(1, 0);
    assert!(s.is_empty());
    assert_eq!(s.iter().count(), 0);
    assert!(!s.take(&1));
}

#[test]
fn saturate() {
    let mut s = Skips::new();
    s.insert(1, usize::MAX);
    s.insert(1, 3);
    assert_eq!(s.pending(&1), usize::MAX);
}

#[test]
fn display() {
    use alloc::string::ToString;
    let mut s = Skips::new();
    assert_eq!(s.to_string(), "{}");
    s.insert(5, 2);
    assert_eq!(s.to_string(), "{5 ↦ 2}");
}
