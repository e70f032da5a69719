//! Boundary adapters between `Result`, `Option`, and `Either`.
//!
//! These free functions make it straightforward to adopt the algebra
//! incrementally: wrap a collaborator's `Result` or `Option` on the way in,
//! and flatten an `Either` back into a core type on the way out.
//!
//! # Examples
//!
//! ```
//! use eitherway::convert::*;
//! use eitherway::Either;
//!
//! let entered = result_to_either("7".parse::<i32>());
//! assert_eq!(entered, Either::right(7));
//!
//! let promoted: Either<&str, i32> = option_to_either(None, || "missing");
//! assert_eq!(promoted, Either::left("missing"));
//! ```

use crate::alloc_type::Vec;
use crate::either::Either;

/// Converts a `Result` to an `Either`, `Err` becoming Left.
///
/// # Examples
///
/// ```
/// use eitherway::convert::result_to_either;
/// use eitherway::Either;
///
/// let e = result_to_either(Err::<i32, &str>("boom"));
/// assert_eq!(e, Either::left("boom"));
/// ```
#[inline]
pub fn result_to_either<T, E>(result: Result<T, E>) -> Either<E, T> {
    Either::from_result(result)
}

/// Converts an `Either` to a `Result`, Right becoming `Ok`.
///
/// # Examples
///
/// ```
/// use eitherway::convert::either_to_result;
/// use eitherway::Either;
///
/// let e: Either<&str, i32> = Either::right(42);
/// assert_eq!(either_to_result(e), Ok(42));
/// ```
#[inline]
pub fn either_to_result<L, R>(either: Either<L, R>) -> Result<R, L> {
    either.into_result()
}

/// Promotes an `Option` to an `Either`, absence becoming the given Left.
///
/// # Arguments
///
/// * `option` - The possibly-absent value
/// * `if_none` - Builds the failure value when the option is `None`
///
/// # Examples
///
/// ```
/// use eitherway::convert::option_to_either;
/// use eitherway::Either;
///
/// let e = option_to_either(Some(1), || "missing");
/// assert_eq!(e, Either::right(1));
/// ```
#[inline]
pub fn option_to_either<T, L, F>(option: Option<T>, if_none: F) -> Either<L, T>
where
    F: FnOnce() -> L,
{
    match option {
        Some(value) => Either::Right(value),
        None => Either::Left(if_none()),
    }
}

/// Demotes an `Either` to an `Option`, discarding the Left payload.
///
/// This is lossy: whatever failure information the Left carried is gone.
/// Use it only at boundaries where the caller genuinely does not care why
/// the value is absent.
///
/// # Examples
///
/// ```
/// use eitherway::convert::either_to_option;
/// use eitherway::Either;
///
/// let e: Either<&str, i32> = Either::left("boom");
/// assert_eq!(either_to_option(e), None);
/// ```
#[inline]
pub fn either_to_option<L, R>(either: Either<L, R>) -> Option<R> {
    either.into_right()
}

/// Collects every Left payload from an iterator of Eithers.
///
/// # Examples
///
/// ```
/// use eitherway::convert::lefts;
/// use eitherway::Either;
///
/// let items = vec![
///     Either::<&str, i32>::right(1),
///     Either::left("a"),
///     Either::left("b"),
/// ];
/// assert_eq!(lefts(items), vec!["a", "b"]);
/// ```
pub fn lefts<L, R, I>(iter: I) -> Vec<L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter()
        .filter_map(Either::into_left)
        .collect()
}

/// Collects every Right payload from an iterator of Eithers.
///
/// # Examples
///
/// ```
/// use eitherway::convert::rights;
/// use eitherway::Either;
///
/// let items = vec![
///     Either::<&str, i32>::right(1),
///     Either::left("a"),
///     Either::right(3),
/// ];
/// assert_eq!(rights(items), vec![1, 3]);
/// ```
pub fn rights<L, R, I>(iter: I) -> Vec<R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter()
        .filter_map(Either::into_right)
        .collect()
}
