//! Recovery boundaries: turning raised failures back into return values.
//!
//! A raised [`Failure`] unwinds the stack like any other panic. The frame that
//! wants to convert it into an ordinary `Err` installs a boundary:
//!
//! - [`catch`] runs a closure and returns `Result<R, Failure>`. This is the
//!   usual way to recover.
//! - [`as_failure_or_resume`] classifies a payload obtained from
//!   [`std::panic::catch_unwind`] yourself.
//!
//! Both only ever consume failures. Any other panic payload (a genuine bug,
//! an `unwrap` on `None`, a panic from another library) is resumed exactly as
//! it was caught.
//!
//! ```
//! use std::num::ParseIntError;
//!
//! fn sum(inputs: &[&str]) -> Result<i64, ParseIntError> {
//!     must::catch(|| {
//!         inputs
//!             .iter()
//!             .map(|input| must::capture(input.parse::<i64>()).extract())
//!             .sum()
//!     })
//!     .map_err(|failure| match failure.downcast::<ParseIntError>() {
//!         Ok(error) => error,
//!         Err(failure) => unreachable!("only parse errors are raised: {failure}"),
//!     })
//! }
//!
//! assert_eq!(sum(&["1", "2", "3"]), Ok(6));
//! assert!(sum(&["1", "two"]).is_err());
//! ```

use std::{
    any::Any,
    panic::{self, UnwindSafe},
};

use crate::{
    Failure,
    hooks::{self, panic_hook::BoundaryGuard},
};

/// Classifies whatever a recovery boundary caught.
///
/// - `None` (nothing was caught) gives `None`.
/// - A [`Failure`] payload gives `Some(failure)`; the recover hooks run.
/// - Any other payload is re-raised with [`std::panic::resume_unwind`],
///   unmodified.
///
/// ```
/// use std::panic;
///
/// assert!(must::as_failure_or_resume(None).is_none());
///
/// let caught = panic::catch_unwind(|| must::hold(false)).err();
/// let failure = must::as_failure_or_resume(caught).expect("hold(false) raises");
/// assert!(failure.is(must::Sentinel::ConditionNotHeld));
/// ```
pub fn as_failure_or_resume(caught: Option<Box<dyn Any + Send>>) -> Option<Failure> {
    caught.map(into_failure_or_resume)
}

fn into_failure_or_resume(payload: Box<dyn Any + Send>) -> Failure {
    match payload.downcast::<Failure>() {
        Ok(failure) => {
            hooks::run_recover_hooks(&failure);
            *failure
        }
        Err(payload) => panic::resume_unwind(payload),
    }
}

/// Runs `f`, recovering a [`Failure`] raised inside it.
///
/// Returns `Ok` with the closure's value when it completes, or `Err` with the
/// failure it raised. Panics that are not failures pass through untouched.
///
/// While `f` runs, the panic hook installed by this crate stays silent about
/// failures, since they are going to be recovered here.
///
/// As with [`std::panic::catch_unwind`], `f` must be [`UnwindSafe`]; wrap it
/// in [`std::panic::AssertUnwindSafe`] when it captures mutable state that is
/// fine to observe after a failure.
pub fn catch<F, R>(f: F) -> Result<R, Failure>
where
    F: FnOnce() -> R + UnwindSafe,
{
    let caught = {
        let _guard = BoundaryGuard::enter();
        panic::catch_unwind(f)
    };
    caught.map_err(into_failure_or_resume)
}
