//! Result holders: capture a call's values and error, then extract or raise.
//!
//! A holder pairs up to four values with one error. It is built by one of the
//! `capture` functions (or `HolderN::new`) and consumed right away by one of
//! its extractors:
//!
//! - [`extract`](Holder1::extract) returns the values, or raises a
//!   [`Failure`](crate::Failure) carrying the stored error,
//! - [`extract_with_context`](Holder1::extract_with_context) does the same
//!   but attaches formatted context to the failure.
//!
//! The context arguments are only formatted when the holder contains an
//! error.
//!
//! ```
//! use std::num::ParseIntError;
//!
//! fn parse_pair(a: &str, b: &str) -> Result<(i32, i32), ParseIntError> {
//!     Ok((a.parse()?, b.parse()?))
//! }
//!
//! let port: u16 = must::capture("8080".parse::<u16>()).extract();
//! let (x, y) = must::capture2(parse_pair("1", "2")).extract_with_context(format_args!("pair"));
//! assert_eq!((port, x, y), (8080, 1, 2));
//!
//! let failure = must::catch(|| must::capture2(parse_pair("1", "z")).extract()).unwrap_err();
//! assert!(failure.downcast_ref::<ParseIntError>().is_some());
//! ```

use core::fmt;

use crate::failure::{BoxError, raise};

/// Holds one captured value and an error.
///
/// Created by [`capture`] or [`Holder1::new`].
#[must_use = "a holder does nothing until it is extracted"]
pub struct Holder1<T, E> {
    result: Result<T, E>,
}

/// Captures the result of a call returning one value or an error.
///
/// This never raises; the error is stored until the holder is extracted.
pub fn capture<T, E>(result: Result<T, E>) -> Holder1<T, E> {
    Holder1 { result }
}

impl<T, E> Holder1<T, E> {
    /// Builds a holder from a value and an optional error.
    ///
    /// When `err` is `Some`, the value can never be extracted and is dropped.
    pub fn new(value: T, err: Option<E>) -> Self {
        let result = match err {
            None => Ok(value),
            Some(err) => Err(err),
        };
        Self { result }
    }
}

impl<T, E> Holder1<T, E>
where
    E: Into<BoxError>,
{
    /// Returns the captured value, or raises a failure with an empty context.
    #[track_caller]
    pub fn extract(self) -> T {
        match self.result {
            Ok(value) => value,
            Err(err) => raise(err.into(), None),
        }
    }

    /// Returns the captured value, or raises a failure with the given
    /// context.
    #[track_caller]
    pub fn extract_with_context(self, context: fmt::Arguments<'_>) -> T {
        match self.result {
            Ok(value) => value,
            Err(err) => raise(err.into(), Some(context)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Holder1<T, E> {
    fn from(result: Result<T, E>) -> Self {
        capture(result)
    }
}

macro_rules! holder {
    (
        $(#[$struct_meta:meta])*
        $holder:ident,
        $(#[$capture_meta:meta])*
        $capture:ident,
        $($value:ident: $ty:ident),+
    ) => {
        $(#[$struct_meta])*
        #[must_use = "a holder does nothing until it is extracted"]
        pub struct $holder<$($ty,)+ E> {
            result: Result<($($ty,)+), E>,
        }

        $(#[$capture_meta])*
        ///
        /// This never raises; the error is stored until the holder is
        /// extracted.
        pub fn $capture<$($ty,)+ E>(result: Result<($($ty,)+), E>) -> $holder<$($ty,)+ E> {
            $holder { result }
        }

        impl<$($ty,)+ E> $holder<$($ty,)+ E> {
            /// Builds a holder from the values and an optional error.
            ///
            /// When `err` is `Some`, the values can never be extracted and
            /// are dropped.
            pub fn new($($value: $ty,)+ err: Option<E>) -> Self {
                let result = match err {
                    None => Ok(($($value,)+)),
                    Some(err) => Err(err),
                };
                Self { result }
            }
        }

        impl<$($ty,)+ E> $holder<$($ty,)+ E>
        where
            E: Into<BoxError>,
        {
            /// Returns the captured values in order, or raises a failure with
            /// an empty context.
            #[track_caller]
            pub fn extract(self) -> ($($ty,)+) {
                match self.result {
                    Ok(values) => values,
                    Err(err) => raise(err.into(), None),
                }
            }

            /// Returns the captured values in order, or raises a failure with
            /// the given context.
            #[track_caller]
            pub fn extract_with_context(self, context: fmt::Arguments<'_>) -> ($($ty,)+) {
                match self.result {
                    Ok(values) => values,
                    Err(err) => raise(err.into(), Some(context)),
                }
            }
        }

        impl<$($ty,)+ E> From<Result<($($ty,)+), E>> for $holder<$($ty,)+ E> {
            fn from(result: Result<($($ty,)+), E>) -> Self {
                $capture(result)
            }
        }
    };
}

holder!(
    /// Holds two captured values and an error.
    Holder2,
    /// Captures the result of a call returning two values or an error.
    capture2,
    v1: T1,
    v2: T2
);

holder!(
    /// Holds three captured values and an error.
    Holder3,
    /// Captures the result of a call returning three values or an error.
    capture3,
    v1: T1,
    v2: T2,
    v3: T3
);

holder!(
    /// Holds four captured values and an error.
    Holder4,
    /// Captures the result of a call returning four values or an error.
    capture4,
    v1: T1,
    v2: T2,
    v3: T3,
    v4: T4
);
