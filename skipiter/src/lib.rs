//! Iterators whose future elements can be skipped by value.
//!
//! ~~~
//! use skipiter::SkipIterExt;
//! let mut iter = vec![1, 2, 3, 2, 4].into_iter().skippable();
//! iter.skip_value(2);
//! assert_eq!(iter.collect::<Vec<_>>(), vec![1, 3, 2, 4]);
//! ~~~
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod skip_iter;
mod skips;
mod stats;

pub use error::Exhausted;
pub use skip_iter::{SkipIter, SkipIterExt};
pub use skips::Skips;
pub use stats::Stats;
