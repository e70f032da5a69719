//! Ergonomic macros for lifting expressions into the algebra.
//!
//! - [`macro@crate::either`] - Wraps a `Result`-producing expression or block
//!   into an [`Either`](crate::Either).
//! - [`macro@crate::ensure_either`] - Expression-form guard that yields
//!   `Right(())` or the given Left.
//!
//! # Examples
//!
//! ```
//! use eitherway::{either, ensure_either, Either};
//!
//! let parsed = either!("42".parse::<i32>());
//! assert_eq!(parsed, Either::right(42));
//!
//! let guard: Either<&str, ()> = ensure_either!(2 + 2 == 4, "arithmetic broke");
//! assert!(guard.is_right());
//! ```

/// Wraps a `Result`-producing expression or block into an [`Either`](crate::Either).
///
/// # Syntax
///
/// - `either!(expr)` - Wraps a single `Result`-producing expression
/// - `either!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```
/// use eitherway::{either, Either};
///
/// let ok = either!(Ok::<_, &str>(1));
/// assert_eq!(ok, Either::right(1));
///
/// let err = either!({
///     let parsed: Result<i32, _> = "nope".parse();
///     parsed
/// });
/// assert!(err.is_left());
/// ```
#[macro_export]
macro_rules! either {
    ($expr:expr $(,)?) => {
        $crate::Either::from_result($expr)
    };
}

/// Yields `Right(())` when the condition holds, otherwise the given Left.
///
/// Useful as a standalone guard or as an argument to
/// [`Scope::bind`](crate::scope::Scope::bind).
///
/// # Examples
///
/// ```
/// use eitherway::{ensure_either, Either};
///
/// fn check_port(port: u32) -> Either<String, ()> {
///     ensure_either!(port <= u16::MAX as u32, format!("port out of range: {port}"))
/// }
///
/// assert!(check_port(8080).is_right());
/// assert!(check_port(70_000).is_left());
/// ```
#[macro_export]
macro_rules! ensure_either {
    ($cond:expr, $left:expr $(,)?) => {
        if $cond {
            $crate::Either::Right(())
        } else {
            $crate::Either::Left($left)
        }
    };
}
