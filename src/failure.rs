//! The structured record raised when an assertion or extraction fails.
//!
//! A [`Failure`] is the panic payload used by every raising function in this
//! crate. It carries:
//!
//! - the **underlying** error: either the error the caller handed in, or one
//!   of the [`Sentinel`] values,
//! - an optional **context** string built from the `*_with_context` format
//!   arguments (empty when none were supplied),
//! - the **location** of the user's call that detected the failure.
//!
//! Failures are only built inside this crate, at the moment the failure is
//! detected, and are never mutated afterwards.
//!
//! # Rendering
//!
//! The [`Display`](core::fmt::Display) form is a fixed layout that tools and
//! logs may depend on:
//!
//! ```text
//! must(<context>) |<file>:<line>| failed with: <underlying>
//! ```

use std::{borrow::Cow, error::Error, fmt};

use crate::{Location, Sentinel, hooks};

/// Boxed, thread-safe error trait object.
///
/// Any `E: Into<BoxError>` can be captured: every
/// `E: Error + Send + Sync + 'static`, `Box<dyn Error + Send + Sync>` itself,
/// `String` and `&str`, as well as `anyhow::Error` and `eyre::Report`.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A failure raised by this crate.
///
/// See the [module documentation](self) for details.
pub struct Failure {
    underlying: BoxError,
    context: Cow<'static, str>,
    location: Location,
}

impl Failure {
    #[must_use]
    #[track_caller]
    pub(crate) fn new(underlying: BoxError, context: Option<fmt::Arguments<'_>>) -> Self {
        let context = match context {
            None => Cow::Borrowed(""),
            Some(args) => match args.as_str() {
                Some(message) => Cow::Borrowed(message),
                None => Cow::Owned(fmt::format(args)),
            },
        };
        Self {
            underlying,
            context,
            location: Location::caller(),
        }
    }

    /// Returns the error that caused this failure.
    #[must_use]
    pub fn underlying(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.underlying
    }

    /// Returns the formatted context, or `""` if none was supplied.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Returns the location of the call that raised this failure.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the source file of the call that raised this failure.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.location.file
    }

    /// Returns the line of the call that raised this failure.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.location.line
    }

    /// Returns the column of the call that raised this failure.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.location.column
    }

    /// Returns the sentinel carried by this failure, if the underlying error
    /// is one.
    #[must_use]
    pub fn sentinel(&self) -> Option<Sentinel> {
        self.downcast_ref::<Sentinel>().copied()
    }

    /// Returns `true` if the underlying error is the given sentinel.
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use must::{Sentinel, catch, get};
    ///
    /// let map: HashMap<&str, i32> = HashMap::new();
    /// let failure = catch(|| *get(&map, "missing")).unwrap_err();
    /// assert!(failure.is(Sentinel::KeyNotFound));
    /// assert!(!failure.is(Sentinel::CastFailed));
    /// ```
    #[must_use]
    pub fn is(&self, sentinel: Sentinel) -> bool {
        self.sentinel() == Some(sentinel)
    }

    /// Attempts to downcast the underlying error to a concrete type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.underlying.downcast_ref::<E>()
    }

    /// Attempts to take the underlying error out as a concrete type.
    ///
    /// On mismatch the failure is handed back unchanged.
    pub fn downcast<E>(self) -> Result<E, Self>
    where
        E: Error + 'static,
    {
        let Self {
            underlying,
            context,
            location,
        } = self;
        match underlying.downcast::<E>() {
            Ok(error) => Ok(*error),
            Err(underlying) => Err(Self {
                underlying,
                context,
                location,
            }),
        }
    }

    /// Consumes the failure, returning the underlying error.
    #[must_use]
    pub fn into_underlying(self) -> BoxError {
        self.underlying
    }
}

/// Builds a failure at the user's call site, runs the raise hooks and starts
/// unwinding with it as the payload.
#[cold]
#[track_caller]
pub(crate) fn raise(underlying: BoxError, context: Option<fmt::Arguments<'_>>) -> ! {
    let failure = Failure::new(underlying, context);
    hooks::panic_hook::install_if_enabled();
    hooks::run_raise_hooks(&failure);
    std::panic::panic_any(failure)
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "must({}) |{}| failed with: {}",
            self.context, self.location, self.underlying
        )
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("underlying", &self.underlying)
            .field("context", &self.context)
            .field("location", &self.location)
            .finish()
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.underlying)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("boom")
        }
    }

    impl Error for Boom {}

    fn failure_at(context: &'static str, file: &'static str, line: u32) -> Failure {
        Failure {
            underlying: Box::new(Boom),
            context: Cow::Borrowed(context),
            location: Location {
                file: Cow::Borrowed(file),
                line,
                column: 1,
            },
        }
    }

    #[test]
    fn test_failure_send_sync() {
        static_assertions::assert_impl_all!(Failure: Send, Sync, Error);
        static_assertions::assert_not_impl_any!(Failure: Clone);
    }

    #[test]
    fn test_rendering_layout() {
        let failure = failure_at("ctx", "f.x", 10);
        assert_eq!(failure.to_string(), "must(ctx) |f.x:10| failed with: boom");
    }

    #[test]
    fn test_rendering_without_context() {
        let failure = failure_at("", "src/main.rs", 7);
        assert_eq!(
            failure.to_string(),
            "must() |src/main.rs:7| failed with: boom"
        );
    }

    #[test]
    fn test_new_captures_caller_and_context() {
        let failure = Failure::new(Box::new(Boom), Some(format_args!("value {}", 3)));
        assert_eq!(failure.file(), file!());
        assert_eq!(failure.line(), line!() - 2);
        assert_eq!(failure.context(), "value 3");

        let failure = Failure::new(Box::new(Boom), Some(format_args!("static")));
        assert!(matches!(failure.context, Cow::Borrowed("static")));

        let failure = Failure::new(Box::new(Boom), None);
        assert_eq!(failure.context(), "");
    }

    #[test]
    fn test_downcast() {
        let failure = failure_at("", "f.x", 1);
        assert_eq!(failure.downcast_ref::<Boom>(), Some(&Boom));
        assert_eq!(failure.sentinel(), None);

        let failure = match failure.downcast::<Sentinel>() {
            Ok(_) => panic!("underlying is not a sentinel"),
            Err(failure) => failure,
        };
        assert_eq!(failure.context(), "");
        assert_eq!(failure.line(), 1);
        assert_eq!(failure.downcast::<Boom>().ok(), Some(Boom));
    }

    #[test]
    fn test_source_is_underlying() {
        let failure = failure_at("", "f.x", 1);
        let source = failure.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("boom"));
        assert_eq!(failure.into_underlying().to_string(), "boom");
    }

    #[test]
    fn test_sentinel_underlying() {
        let mut failure = failure_at("", "f.x", 1);
        failure.underlying = Box::new(Sentinel::KeyNotFound);
        assert!(failure.is(Sentinel::KeyNotFound));
        assert_eq!(
            failure.to_string(),
            "must() |f.x:1| failed with: value is not in a map"
        );
    }
}
