//! Typed error-handling algebra built around [`Either`].
//!
//! Failures travel as ordinary values: a fallible step returns
//! `Either<L, R>` (Left is the failure branch by convention), combinators
//! transform it without unwrapping early, and [`Either::fold`] is the single
//! sanctioned point where both outcomes are turned into an effect. Nothing is
//! re-thrown to signal a recoverable condition once a value is inside the
//! algebra.
//!
//! # Examples
//!
//! ## Chaining fallible steps
//!
//! ```
//! use eitherway::Either;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse().map_or_else(
//!         |_| Either::left(format!("not a number: {input}")),
//!         Either::right,
//!     )
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Either::right(42));
//!
//! let failed = parse("abc").map(|n| n * 2);
//! assert!(failed.is_left());
//! ```
//!
//! ## Straight-line composition with a scope
//!
//! ```
//! use eitherway::{scope, Either};
//!
//! fn lookup(id: u32) -> Either<&'static str, u32> {
//!     if id == 0 { Either::left("not found") } else { Either::right(id * 10) }
//! }
//!
//! let result = scope::run(|s| {
//!     let a = s.bind(lookup(1))?;
//!     let b = s.bind(lookup(2))?;
//!     s.ensure(a < b, || "out of order")?;
//!     Ok(a + b)
//! });
//! assert_eq!(result, Either::right(30));
//! ```
//!
//! ## Bridging a panicking computation
//!
//! ```
//! # #[cfg(feature = "std")] {
//! use eitherway::catch::catch;
//! use eitherway::Either;
//!
//! let result: Either<String, i32> = catch(
//!     || panic!("missing row"),
//!     |fault| fault.message().map(str::to_owned),
//! );
//! assert_eq!(result, Either::left("missing row".to_owned()));
//! # }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod alloc_type;

/// Boundary adapters between `Result`, `Option`, and `Either`
pub mod convert;
/// The `Either` sum type and its combinator set
pub mod either;
/// Macros for lifting expressions into the algebra
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Short-circuit composition scopes
pub mod scope;
/// Extension traits over `Option` and `Result`
pub mod traits;

/// Panic bridging with an explicit fatal/recoverable boundary (requires `std`)
#[cfg(feature = "std")]
pub mod catch;

pub use convert::*;
pub use either::{Either, Lefts};
pub use traits::{OptionExt, ResultExt};
