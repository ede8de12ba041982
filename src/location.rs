//! Source code location of the call that detected a failure.
//!
//! Every raising function in this crate is annotated with `#[track_caller]`,
//! and so is every internal helper between it and the point where the
//! [`Failure`](crate::Failure) is built. The location captured through
//! [`core::panic::Location::caller()`] is therefore always the user's call
//! expression (or the invocation of [`must!`](crate::must!) /
//! [`hold!`](crate::hold!)), never a frame inside this crate.

use std::borrow::Cow;

/// Source code location information.
///
/// Represents the file, line, and column of the call that raised a failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// The source file path of the raising call.
    pub file: Cow<'static, str>,
    /// The line number of the raising call.
    pub line: u32,
    /// The column number of the raising call.
    pub column: u32,
}

impl Location {
    /// Captures the location of the outermost `#[track_caller]` caller.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        core::panic::Location::caller().into()
    }
}

/// Formats as `file:line`, the shape used by the failure rendering.
impl core::fmt::Display for Location {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(formatter, "{}:{}", self.file, self.line)
    }
}

impl From<&core::panic::Location<'static>> for Location {
    fn from(location: &core::panic::Location<'static>) -> Self {
        Self {
            file: location.file().into(),
            line: location.line(),
            column: location.column(),
        }
    }
}
