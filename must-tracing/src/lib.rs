#![deny(
    missing_docs,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! Tracing events for `must` failures.
//!
//! This crate logs every failure that is raised or recovered, so a failure
//! that gets mapped into an ordinary return value further up still leaves a
//! trace of where it came from.
//!
//! # Quick Start
//!
//! ```
//! use must_tracing::TracingHook;
//!
//! // 1. Set up tracing as usual
//! tracing_subscriber::fmt().without_time().init();
//!
//! // 2. Register the hook once
//! TracingHook::new().register();
//!
//! // 3. Failures now emit events
//! let _ = must::catch(|| must::hold!(1 > 2, "ordering"));
//! ```
//!
//! Output:
//! ```text
//!  WARN must: failure recovered file="src/main.rs" line=10 context="ordering" underlying=condition did not hold true
//! ```
//!
//! # Events
//!
//! All events use the target `must` and carry the fields `file`, `line`,
//! `context` and `underlying`.
//!
//! | Message | Level | Emitted |
//! |---------|-------|---------|
//! | `failure raised` | `DEBUG` | on the raising thread, before unwinding |
//! | `failure recovered` | `WARN` | when a recovery boundary consumes the failure |
//!
//! # Environment Variables
//!
//! - `MUST_TRACING` - Comma-separated options selecting which events are
//!   emitted (both when unset):
//!   - `raise` - Emit `failure raised`
//!   - `recover` - Emit `failure recovered`

use std::sync::OnceLock;

use must::{Failure, hooks::FailureHook};

/// Failure hook that emits a [`tracing`] event per raise and recovery.
///
/// # Examples
///
/// Basic usage with default settings:
///
/// ```
/// use must_tracing::TracingHook;
///
/// TracingHook::new().register();
/// ```
///
/// Only log failures that reach a recovery boundary:
///
/// ```
/// use must_tracing::TracingHook;
///
/// let hook = TracingHook {
///     log_raise: false,
///     log_recover: true,
/// };
/// hook.register();
/// ```
#[derive(Copy, Clone, Debug)]
pub struct TracingHook {
    /// Whether to emit a `DEBUG` event when a failure is raised.
    pub log_raise: bool,
    /// Whether to emit a `WARN` event when a failure is recovered.
    pub log_recover: bool,
}

#[derive(Debug)]
struct MustTracingEnvOptions {
    raise: bool,
    recover: bool,
}

impl MustTracingEnvOptions {
    fn get() -> &'static Self {
        static MUST_TRACING_FLAGS: OnceLock<MustTracingEnvOptions> = OnceLock::new();

        MUST_TRACING_FLAGS.get_or_init(|| match std::env::var_os("MUST_TRACING") {
            Some(var) => Self::parse(&var.to_string_lossy()),
            None => MustTracingEnvOptions {
                raise: true,
                recover: true,
            },
        })
    }

    fn parse(var: &str) -> Self {
        let mut raise = false;
        let mut recover = false;

        for v in var.split(',') {
            let v = v.trim();
            if v.eq_ignore_ascii_case("raise") {
                raise = true;
            } else if v.eq_ignore_ascii_case("recover") {
                recover = true;
            }
        }

        MustTracingEnvOptions { raise, recover }
    }
}

impl TracingHook {
    /// Creates a new [`TracingHook`] with default settings.
    ///
    /// Configuration is controlled by environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MUST_TRACING` - Comma-separated options (both when unset):
    ///   - `raise` - Emit an event when a failure is raised
    ///   - `recover` - Emit an event when a failure is recovered
    pub fn new() -> Self {
        let env_options = MustTracingEnvOptions::get();

        Self {
            log_raise: env_options.raise,
            log_recover: env_options.recover,
        }
    }

    /// Registers this hook with [`must::hooks::register_failure_hook`].
    ///
    /// Hooks stay registered for the rest of the program, so call this once.
    pub fn register(self) {
        must::hooks::register_failure_hook(self);
    }
}

impl Default for TracingHook {
    fn default() -> Self {
        Self::new()
    }
}

impl FailureHook for TracingHook {
    fn on_raise(&self, failure: &Failure) {
        if self.log_raise {
            tracing::debug!(
                target: "must",
                file = failure.file(),
                line = failure.line(),
                context = failure.context(),
                underlying = %failure.underlying(),
                "failure raised"
            );
        }
    }

    fn on_recover(&self, failure: &Failure) {
        if self.log_recover {
            tracing::warn!(
                target: "must",
                file = failure.file(),
                line = failure.line(),
                context = failure.context(),
                underlying = %failure.underlying(),
                "failure recovered"
            );
        }
    }
}
