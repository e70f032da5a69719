//! Extension trait rounding out `Option` for the algebra.
//!
//! `Option<T>` already is the closed presence/absence sum type this crate
//! needs: `Option::from` covers construction from a possibly-absent value,
//! and `map`, `and_then`, `filter`, `or_else`, and `unwrap_or` are the
//! standard combinator set. What std lacks is a `fold` whose shape matches
//! [`Either::fold`](crate::Either::fold) and a direct promotion of absence
//! into a typed failure; [`OptionExt`] adds exactly those two.

use crate::either::Either;

/// Extension methods for `Option` used throughout the algebra.
///
/// # Examples
///
/// ```
/// use eitherway::traits::OptionExt;
/// use eitherway::Either;
///
/// let present = Some(2);
/// assert_eq!(present.fold(|| 0, |n| n * 10), 20);
///
/// let absent: Option<i32> = None;
/// let promoted: Either<&str, i32> = absent.into_either(|| "missing");
/// assert_eq!(promoted, Either::left("missing"));
/// ```
pub trait OptionExt<T> {
    /// Total extraction: collapses presence and absence into a single `Z`.
    ///
    /// Exactly one of the two functions runs. Equivalent to
    /// `map_or_else` with the branches in [`Either::fold`](crate::Either::fold)
    /// order (failure handler first).
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::traits::OptionExt;
    ///
    /// let greeting = Some("world").fold(|| "hello, nobody".to_owned(), |w| format!("hello, {w}"));
    /// assert_eq!(greeting, "hello, world");
    /// ```
    fn fold<Z, F, G>(self, if_none: F, if_some: G) -> Z
    where
        F: FnOnce() -> Z,
        G: FnOnce(T) -> Z;

    /// Promotes absence into a typed failure.
    ///
    /// `Some(v)` becomes `Right(v)`; `None` becomes `Left(if_none())`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::traits::OptionExt;
    /// use eitherway::Either;
    ///
    /// let found: Either<&str, i32> = Some(7).into_either(|| "not found");
    /// assert_eq!(found, Either::right(7));
    /// ```
    fn into_either<L, F>(self, if_none: F) -> Either<L, T>
    where
        F: FnOnce() -> L;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn fold<Z, F, G>(self, if_none: F, if_some: G) -> Z
    where
        F: FnOnce() -> Z,
        G: FnOnce(T) -> Z,
    {
        match self {
            None => if_none(),
            Some(value) => if_some(value),
        }
    }

    #[inline]
    fn into_either<L, F>(self, if_none: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            None => Either::Left(if_none()),
            Some(value) => Either::Right(value),
        }
    }
}
