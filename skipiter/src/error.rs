use core::fmt::{self, Display};

/// No element survives in a [`SkipIter`](crate::SkipIter).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exhausted;

impl Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "called next, but no element survives")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Exhausted {}
