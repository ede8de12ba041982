#![deny(
    missing_docs,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Assert-or-raise helpers that unwind with a structured failure.
//!
//! ## Overview
//!
//! Code that calls many fallible operations in a row tends to repeat the same
//! three lines after every call: check the error, maybe log it, return it.
//! This crate replaces those lines with a single expression that either
//! yields the call's values or *raises* a [`Failure`]: a panic payload that
//! records the error, an optional context string and the exact file and line
//! of the call that failed. A recovery boundary further up, usually
//! [`catch`], turns the failure back into an ordinary `Err`.
//!
//! ## Quick Example
//!
//! ```
//! use std::{collections::HashMap, num::ParseIntError};
//!
//! use must::prelude::*;
//!
//! fn parse(input: &str) -> Result<u32, ParseIntError> {
//!     input.parse()
//! }
//!
//! fn total(config: &HashMap<&str, &str>) -> Result<u32, Failure> {
//!     catch(|| {
//!         let a = capture(parse(get(config, "a"))).extract();
//!         let b = capture(parse(get(config, "b")));
//!         let b = b.extract_with_context(format_args!("config[\"b\"]"));
//!         hold!(a <= b, "a ({a}) must not exceed b ({b})");
//!         a + b
//!     })
//! }
//!
//! let config = HashMap::from([("a", "1"), ("b", "2")]);
//! assert_eq!(total(&config).unwrap(), 3);
//!
//! let config = HashMap::from([("a", "1"), ("b", "x")]);
//! let failure = total(&config).unwrap_err();
//! assert_eq!(failure.context(), "config[\"b\"]");
//! assert!(failure.downcast_ref::<ParseIntError>().is_some());
//! assert!(failure.to_string().starts_with("must(config[\"b\"]) |"));
//! ```
//!
//! ## Pieces
//!
//! - **Holders**: [`capture`] .. [`capture4`] wrap a call's `Result` and are
//!   consumed by `extract` or `extract_with_context`.
//! - **Direct assertions**: [`must`](fn@must) for a bare error, [`hold`] for a
//!   condition, [`get`] for a keyed lookup, [`cast`] and [`cast_ref`] for a
//!   dynamic type check. Each has a `*_with_context` form, and [`must!`] /
//!   [`hold!`] accept format arguments directly.
//! - **Recovery**: [`catch`] and [`as_failure_or_resume`] consume failures and
//!   resume every other panic unchanged.
//! - **Failures**: [`Failure`] exposes the underlying error, context and
//!   [`Location`]; [`Sentinel`] identifies failures raised by [`hold`],
//!   [`get`] and the casts.
//! - **Hooks**: [`hooks`] lets you observe failures (the `must-tracing`
//!   crate logs them through `tracing`) and renders uncaught ones.
//!
//! ## Rendering
//!
//! A failure displays as
//!
//! ```text
//! must(<context>) |<file>:<line>| failed with: <underlying>
//! ```
//!
//! and this layout is kept stable.

pub mod hooks;
pub mod lookup;
pub mod prelude;

mod assertions;
mod failure;
mod holder;
mod location;
mod macros;
mod recover;
mod sentinel;

pub use self::{
    assertions::{
        cast, cast_ref, cast_ref_with_context, cast_with_context, get, get_with_context, hold,
        hold_with_context, must, must_with_context,
    },
    failure::{BoxError, Failure},
    holder::{Holder1, Holder2, Holder3, Holder4, capture, capture2, capture3, capture4},
    location::Location,
    lookup::Lookup,
    recover::{as_failure_or_resume, catch},
    sentinel::Sentinel,
};

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    pub use core::format_args;
}
