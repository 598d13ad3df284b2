//! Source positions attached to every reported event.

use std::fmt;

/// A `(file, line)` pair identifying where a test or check was written.
///
/// Produced at the call site by [`location!`](crate::location) and copied by
/// value from then on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    file: &'static str,
    line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Location { file, line }
    }

    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
