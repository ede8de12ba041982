//! Commonly used items for convenient importing.
//!
//! ```rust
//! use must::prelude::*;
//!
//! fn half(value: i32) -> Result<i32, Failure> {
//!     catch(|| {
//!         hold!(value % 2 == 0, "{value} is odd");
//!         value / 2
//!     })
//! }
//!
//! assert_eq!(half(4).unwrap(), 2);
//! assert!(half(3).unwrap_err().is(Sentinel::ConditionNotHeld));
//! ```

pub use crate::{
    Failure, Sentinel, as_failure_or_resume, capture, capture2, capture3, capture4, cast, cast_ref,
    catch, get, hold, must,
};
