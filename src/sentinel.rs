//! Identity-comparable errors for failures that did not come from a caller.
//!
//! When [`hold`](crate::hold), [`get`](crate::get) or [`cast`](crate::cast)
//! fail there is no caller-supplied error to report, so the raised
//! [`Failure`](crate::Failure) carries one of the [`Sentinel`] values instead.
//! They compare by variant, which lets a recovery boundary tell which kind of
//! assertion fired:
//!
//! ```
//! use must::{Sentinel, catch, hold};
//!
//! let failure = catch(|| hold(1 + 1 == 3)).unwrap_err();
//! assert!(failure.is(Sentinel::ConditionNotHeld));
//! assert_eq!(failure.sentinel(), Some(Sentinel::ConditionNotHeld));
//! ```

/// The error kinds raised by the direct assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Sentinel {
    /// Raised by [`hold`](crate::hold) when the condition is `false`.
    ConditionNotHeld,
    /// Raised by [`get`](crate::get) when the key is not present.
    KeyNotFound,
    /// Raised by [`cast`](crate::cast) and [`cast_ref`](crate::cast_ref) when
    /// the runtime type does not match.
    CastFailed,
}

impl Sentinel {
    fn message(self) -> &'static str {
        match self {
            Sentinel::ConditionNotHeld => "condition did not hold true",
            Sentinel::KeyNotFound => "value is not in a map",
            Sentinel::CastFailed => "type assertion failed",
        }
    }
}

impl core::fmt::Display for Sentinel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for Sentinel {}
