//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use eitherway::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`either!`], [`ensure_either!`]
//! - **Types**: [`Either`] (with its `Left`/`Right` variants), [`Lefts`]
//! - **Scopes**: [`run`], [`Scope`]
//! - **Traits**: [`OptionExt`], [`ResultExt`]
//! - **Catch** (with the `std` feature): `catch`, `catch_into`,
//!   `catch_opt`, `Fault`, `FromFault`
//!
//! # Examples
//!
//! ```
//! use eitherway::prelude::*;
//!
//! fn positive(n: i32) -> Either<&'static str, i32> {
//!     ensure_either!(n > 0, "not positive").map(|()| n)
//! }
//!
//! let total = run(|s| {
//!     let a = s.bind(positive(40))?;
//!     let b = s.bind(positive(2))?;
//!     Ok(a + b)
//! });
//! assert_eq!(total, Either::right(42));
//! ```

// Macros
pub use crate::{either, ensure_either};

// Core types
pub use crate::either::Either::{self, Left, Right};
pub use crate::either::Lefts;

// Scopes
pub use crate::scope::{run, Scope};

// Traits
pub use crate::traits::{OptionExt, ResultExt};

// Conversions
pub use crate::convert::{
    either_to_option, either_to_result, lefts, option_to_either, result_to_either, rights,
};

// Panic bridging
#[cfg(feature = "std")]
pub use crate::catch::{catch, catch_into, catch_opt, Fault, FromFault};
