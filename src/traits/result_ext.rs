//! Extension trait for moving `Result` values into the algebra.
//!
//! Collaborator code is usually written against `Result`; [`ResultExt`]
//! lets such a value enter the `Either` world in one call instead of a
//! `match` at every boundary.
//!
//! # Examples
//!
//! ```
//! use eitherway::traits::ResultExt;
//! use eitherway::Either;
//!
//! fn parse_port(raw: &str) -> Either<core::num::ParseIntError, u16> {
//!     raw.parse().into_either()
//! }
//!
//! assert_eq!(parse_port("8080"), Either::right(8080));
//! assert!(parse_port("eighty").is_left());
//! ```

use crate::either::Either;

/// Extension methods for `Result` used at the algebra's boundary.
pub trait ResultExt<T, E> {
    /// Converts into an `Either`, `Err` becoming Left.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::traits::ResultExt;
    /// use eitherway::Either;
    ///
    /// let ok: Result<i32, &str> = Ok(1);
    /// assert_eq!(ok.into_either(), Either::right(1));
    ///
    /// let err: Result<i32, &str> = Err("boom");
    /// assert_eq!(err.into_either(), Either::left("boom"));
    /// ```
    fn into_either(self) -> Either<E, T>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_either(self) -> Either<E, T> {
        Either::from_result(self)
    }
}
