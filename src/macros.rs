/// Raises a [`Sentinel::ConditionNotHeld`] failure if the condition is
/// `false`.
///
/// With only a condition this is [`hold`]. With additional arguments they are
/// interpreted like [`format!`] and become the failure's context, as with
/// [`hold_with_context`]. The arguments are only formatted on failure.
///
/// [`Sentinel::ConditionNotHeld`]: crate::Sentinel::ConditionNotHeld
/// [`hold`]: crate::hold
/// [`hold_with_context`]: crate::hold_with_context
/// [`format!`]: std::format
///
/// # Examples
///
/// ```
/// let index = 7;
/// let failure = must::catch(|| must::hold!(index < 5, "index {index} out of range")).unwrap_err();
/// assert_eq!(failure.context(), "index 7 out of range");
/// assert!(failure.is(must::Sentinel::ConditionNotHeld));
/// ```
#[macro_export]
macro_rules! hold {
    ($cond:expr $(,)?) => {
        $crate::hold($cond)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::hold_with_context($cond, $crate::__private::format_args!($($arg)+))
    };
}

/// Raises a failure if the error is `Some`.
///
/// With only an error this is [`must`](fn@crate::must). With additional
/// arguments they are interpreted like [`format!`] and become the failure's
/// context, as with [`must_with_context`]. The arguments are only formatted
/// on failure.
///
/// [`must_with_context`]: crate::must_with_context
/// [`format!`]: std::format
///
/// # Examples
///
/// ```
/// use std::io;
///
/// fn start(name: &str) -> Result<(), io::Error> {
///     Err(io::Error::other(format!("{name} is already running")))
/// }
///
/// let failure = must::catch(|| must::must!(start("db").err(), "start({:?})", "db")).unwrap_err();
/// assert_eq!(failure.context(), "start(\"db\")");
/// assert_eq!(failure.underlying().to_string(), "db is already running");
/// ```
#[macro_export]
macro_rules! must {
    ($err:expr $(,)?) => {
        $crate::must($err)
    };
    ($err:expr, $($arg:tt)+) => {
        $crate::must_with_context($err, $crate::__private::format_args!($($arg)+))
    };
}
