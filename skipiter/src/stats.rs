#[cfg(feature = "serde")]
use serde::Serialize;

/// Element statistics of a skip iterator.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    /// How many elements were taken from the underlying iterator?
    pub pulled: usize,
    /// How many of them were suppressed?
    pub suppressed: usize,
    /// How many of them were handed out?
    pub delivered: usize,
}

impl Stats {
    /// Return the number of elements pulled but neither suppressed nor handed out.
    ///
    /// This is one if an element waits in the lookahead, else zero.
    pub fn buffered(&self) -> usize {
        self.pulled - self.suppressed - self.delivered
    }
}

#[test]
fn buffered() {
    let stats = Stats {
        pulled: 5,
        suppressed: 2,
        delivered: 2,
    };
    assert_eq!(stats.buffered(), 1);
    assert_eq!(Stats::default().buffered(), 0);
}
