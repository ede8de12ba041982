//! Hooks for observing failures and rendering the ones nobody recovers.
//!
//! # Failure hooks
//!
//! A [`FailureHook`] is notified twice in the life of a failure:
//!
//! 1. [`on_raise`](FailureHook::on_raise), on the raising thread, after the
//!    [`Failure`] has been built and before unwinding starts.
//! 2. [`on_recover`](FailureHook::on_recover), when a recovery boundary
//!    ([`catch`](crate::catch) or
//!    [`as_failure_or_resume`](crate::as_failure_or_resume)) consumes it.
//!
//! Hooks observe failures, they cannot change them. They are called in the
//! order they were registered.
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use must::hooks::register_failure_hook;
//!
//! static RAISED: AtomicUsize = AtomicUsize::new(0);
//!
//! // Any `Fn(&Failure)` closure is a raise hook.
//! register_failure_hook(|_failure: &must::Failure| {
//!     RAISED.fetch_add(1, Ordering::Relaxed);
//! });
//!
//! let _ = must::catch(|| must::hold(false));
//! assert!(RAISED.load(Ordering::Relaxed) >= 1);
//! ```
//!
//! # Panic hook
//!
//! Failures travel as panic payloads, which the standard panic hook can only
//! print as `Box<dyn Any>`. On the first raise this crate therefore wraps the
//! current panic hook (see [`install_panic_hook`]):
//!
//! - panics that are not failures go to the previous hook untouched,
//! - failures raised inside a [`catch`](crate::catch) boundary print nothing,
//!   since they are about to be recovered,
//! - any other failure prints
//!   `thread '<name>' panicked at <file>:<line>:<column>:` followed by the
//!   failure rendering and, when `RUST_BACKTRACE` asks for one, a backtrace.
//!
//! Set `MUST_PANIC_HOOK=off` to skip the automatic installation.

mod hook_lock;
pub(crate) mod panic_hook;

pub use self::panic_hook::install_panic_hook;

use std::sync::Arc;

use self::hook_lock::HookLock;
use crate::Failure;

// Replaced wholesale on registration so that running hooks only needs a
// clone of the `Arc`, not a held lock.
type HookSet = Arc<[Arc<dyn FailureHook>]>;

static HOOKS: HookLock<HookSet> = HookLock::new();

/// A hook that is notified when failures are raised and recovered.
///
/// This trait is implemented for every `Fn(&Failure)` closure, which is
/// called on raise.
///
/// # Examples
///
/// ```rust
/// use must::{
///     Failure,
///     hooks::{FailureHook, register_failure_hook},
/// };
///
/// struct PrintRecovered;
///
/// impl FailureHook for PrintRecovered {
///     fn on_raise(&self, _failure: &Failure) {}
///
///     fn on_recover(&self, failure: &Failure) {
///         eprintln!("recovered: {failure}");
///     }
/// }
///
/// register_failure_hook(PrintRecovered);
/// ```
pub trait FailureHook: 'static + Send + Sync {
    /// Called on the raising thread right before unwinding starts.
    fn on_raise(&self, failure: &Failure);

    /// Called when a recovery boundary consumes the failure.
    fn on_recover(&self, failure: &Failure) {
        let _ = failure;
    }
}

impl<F> FailureHook for F
where
    F: 'static + Send + Sync + Fn(&Failure),
{
    fn on_raise(&self, failure: &Failure) {
        (self)(failure)
    }
}

/// Registers a hook that will be notified about every failure.
///
/// Registered hooks are global and live for the rest of the program. A hook
/// may itself raise and recover failures or register further hooks; hooks
/// registered while a failure is being reported only see later failures.
pub fn register_failure_hook<H>(hook: H)
where
    H: FailureHook,
{
    let mut guard = HOOKS.write();
    let slot = guard.get();
    let mut hooks: Vec<Arc<dyn FailureHook>> = match slot {
        Some(hooks) => hooks.to_vec(),
        None => Vec::new(),
    };
    hooks.push(Arc::new(hook));
    *slot = Some(hooks.into());
}

fn snapshot() -> Option<HookSet> {
    HOOKS.read().get().cloned()
}

pub(crate) fn run_raise_hooks(failure: &Failure) {
    if let Some(hooks) = snapshot() {
        for hook in hooks.iter() {
            hook.on_raise(failure);
        }
    }
}

pub(crate) fn run_recover_hooks(failure: &Failure) {
    if let Some(hooks) = snapshot() {
        for hook in hooks.iter() {
            hook.on_recover(failure);
        }
    }
}
