//! Raise-or-pass helpers that do not go through a holder.
//!
//! | Function | Raises when | Underlying error |
//! |----------|-------------|------------------|
//! | [`must`] | the error is `Some` | the error itself |
//! | [`hold`] | the condition is `false` | [`Sentinel::ConditionNotHeld`] |
//! | [`get`] | the key is absent | [`Sentinel::KeyNotFound`] |
//! | [`cast`], [`cast_ref`] | the runtime type differs | [`Sentinel::CastFailed`] |
//!
//! Each has a `*_with_context` form taking [`format_args!`] output, which is
//! only formatted on failure.

use core::{any::Any, fmt};

use crate::{
    Sentinel,
    failure::{BoxError, raise},
    lookup::Lookup,
};

/// Raises a failure if `err` is `Some`.
///
/// Useful when a call's only relevant output is success or failure. A
/// `Result<(), E>` can be passed as `result.err()`.
///
/// ```
/// use std::io;
///
/// must::must(None::<io::Error>);
///
/// let failure = must::catch(|| must::must(Some(io::Error::other("disk full")))).unwrap_err();
/// assert_eq!(failure.underlying().to_string(), "disk full");
/// assert_eq!(failure.context(), "");
/// ```
#[track_caller]
pub fn must<E>(err: Option<E>)
where
    E: Into<BoxError>,
{
    if let Some(err) = err {
        raise(err.into(), None);
    }
}

/// Raises a failure with the given context if `err` is `Some`.
#[track_caller]
pub fn must_with_context<E>(err: Option<E>, context: fmt::Arguments<'_>)
where
    E: Into<BoxError>,
{
    if let Some(err) = err {
        raise(err.into(), Some(context));
    }
}

/// Raises a [`Sentinel::ConditionNotHeld`] failure if `cond` is `false`.
#[track_caller]
pub fn hold(cond: bool) {
    if !cond {
        raise(Box::new(Sentinel::ConditionNotHeld), None);
    }
}

/// Raises a [`Sentinel::ConditionNotHeld`] failure with the given context if
/// `cond` is `false`.
#[track_caller]
pub fn hold_with_context(cond: bool, context: fmt::Arguments<'_>) {
    if !cond {
        raise(Box::new(Sentinel::ConditionNotHeld), Some(context));
    }
}

/// Returns the value stored under `key`, or raises a
/// [`Sentinel::KeyNotFound`] failure.
///
/// ```
/// use std::collections::HashMap;
///
/// let ports = HashMap::from([("http", 80), ("https", 443)]);
/// assert_eq!(*must::get(&ports, "https"), 443);
///
/// let failure = must::catch(|| *must::get(&ports, "gopher")).unwrap_err();
/// assert!(failure.is(must::Sentinel::KeyNotFound));
/// ```
#[track_caller]
pub fn get<'m, M, Q>(map: &'m M, key: &Q) -> &'m M::Value
where
    M: Lookup<Q> + ?Sized,
    Q: ?Sized,
{
    match map.lookup(key) {
        Some(value) => value,
        None => raise(Box::new(Sentinel::KeyNotFound), None),
    }
}

/// Returns the value stored under `key`, or raises a
/// [`Sentinel::KeyNotFound`] failure with the given context.
#[track_caller]
pub fn get_with_context<'m, M, Q>(
    map: &'m M,
    key: &Q,
    context: fmt::Arguments<'_>,
) -> &'m M::Value
where
    M: Lookup<Q> + ?Sized,
    Q: ?Sized,
{
    match map.lookup(key) {
        Some(value) => value,
        None => raise(Box::new(Sentinel::KeyNotFound), Some(context)),
    }
}

/// Unboxes `value` as a `T`, or raises a [`Sentinel::CastFailed`] failure.
///
/// A `Box<dyn Any + Send>` coerces to the expected `Box<dyn Any>`.
///
/// ```
/// use std::any::Any;
///
/// let value: Box<dyn Any> = Box::new(String::from("hello"));
/// let text: String = must::cast(value);
/// assert_eq!(text, "hello");
///
/// let failure = must::catch(|| must::cast::<i32>(Box::new("hello"))).unwrap_err();
/// assert!(failure.is(must::Sentinel::CastFailed));
/// ```
#[track_caller]
pub fn cast<T>(value: Box<dyn Any>) -> T
where
    T: Any,
{
    match value.downcast::<T>() {
        Ok(value) => *value,
        Err(_) => raise(Box::new(Sentinel::CastFailed), None),
    }
}

/// Unboxes `value` as a `T`, or raises a [`Sentinel::CastFailed`] failure with
/// the given context.
#[track_caller]
pub fn cast_with_context<T>(value: Box<dyn Any>, context: fmt::Arguments<'_>) -> T
where
    T: Any,
{
    match value.downcast::<T>() {
        Ok(value) => *value,
        Err(_) => raise(Box::new(Sentinel::CastFailed), Some(context)),
    }
}

/// Borrows `value` as a `T`, or raises a [`Sentinel::CastFailed`] failure.
///
/// Pass `&*boxed` rather than `&boxed` for boxed values; a `&Box<dyn Any>`
/// would itself be viewed as the `dyn Any`.
#[track_caller]
pub fn cast_ref<T>(value: &dyn Any) -> &T
where
    T: Any,
{
    match value.downcast_ref::<T>() {
        Some(value) => value,
        None => raise(Box::new(Sentinel::CastFailed), None),
    }
}

/// Borrows `value` as a `T`, or raises a [`Sentinel::CastFailed`] failure with
/// the given context.
#[track_caller]
pub fn cast_ref_with_context<'a, T>(value: &'a dyn Any, context: fmt::Arguments<'_>) -> &'a T
where
    T: Any,
{
    match value.downcast_ref::<T>() {
        Some(value) => value,
        None => raise(Box::new(Sentinel::CastFailed), Some(context)),
    }
}
