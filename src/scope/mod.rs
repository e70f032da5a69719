//! Short-circuit composition scopes.
//!
//! A scope lets a sequence of dependent fallible steps read as straight-line
//! code while keeping the semantics of nested
//! [`and_then`](crate::Either::and_then) calls: the first Left observed by a
//! [`bind`](Scope::bind) or [`ensure`](Scope::ensure) becomes the result of
//! the whole scope and no later step runs.
//!
//! The early exit is an ordinary value, not an unwind: `bind` hands back an
//! opaque [`Early`] through `Result`, and the body threads it out with `?`.
//! Only [`run`] can open an `Early`, so a body can neither forge one nor
//! intercept one, and a genuine panic crossing the scope is untouched and
//! keeps its meaning for the `catch` module's fatal/recoverable boundary.
//!
//! # Examples
//!
//! ```
//! use eitherway::{scope, Either};
//!
//! #[derive(Debug, PartialEq)]
//! enum Error {
//!     NotFound(u32),
//!     Empty,
//! }
//!
//! fn fetch(id: u32) -> Either<Error, String> {
//!     if id == 1 { Either::right("alice".to_owned()) } else { Either::left(Error::NotFound(id)) }
//! }
//!
//! let greeting = scope::run(|s| {
//!     let name = s.bind(fetch(1))?;
//!     s.ensure(!name.is_empty(), || Error::Empty)?;
//!     Ok(format!("hello, {name}"))
//! });
//! assert_eq!(greeting, Either::right("hello, alice".to_owned()));
//!
//! let missing: Either<Error, String> = scope::run(|s| {
//!     let name = s.bind(fetch(9))?;
//!     Ok(name) // never reached
//! });
//! assert_eq!(missing, Either::left(Error::NotFound(9)));
//! ```

use core::marker::PhantomData;

use crate::either::Either;

/// Opaque control value carrying the first Left out of a scope body.
///
/// An `Early` can only be produced by the operations on [`Scope`] and only
/// be consumed by [`run`]; its payload is inaccessible in between. The `?`
/// operator threads it out of the body, which is the scope's entire
/// non-local-exit mechanism.
#[must_use = "return this with `?` so the scope can short-circuit"]
#[derive(Debug)]
pub struct Early<L> {
    left: L,
}

/// Capability handle passed to a scope body.
///
/// A `Scope` cannot be constructed outside [`run`] and holds no state; each
/// invocation of `run` is fully independent, so concurrent scopes need no
/// coordination.
#[derive(Debug)]
pub struct Scope<L> {
    _private: PhantomData<fn() -> L>,
}

impl<L> Scope<L> {
    /// Unwraps a Right, or short-circuits the scope with the Left.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::{scope, Either};
    ///
    /// let result: Either<&str, i32> = scope::run(|s| {
    ///     let a = s.bind(Either::right(40))?;
    ///     let b = s.bind(Either::right(2))?;
    ///     Ok(a + b)
    /// });
    /// assert_eq!(result, Either::right(42));
    /// ```
    #[inline]
    pub fn bind<R>(&self, value: Either<L, R>) -> Result<R, Early<L>> {
        match value {
            Either::Left(left) => Err(Early { left }),
            Either::Right(value) => Ok(value),
        }
    }

    /// [`bind`](Scope::bind) for collaborator code that returns `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::{scope, Either};
    ///
    /// let result: Either<core::num::ParseIntError, i32> = scope::run(|s| {
    ///     let n: i32 = s.bind_result("21".parse())?;
    ///     Ok(n * 2)
    /// });
    /// assert_eq!(result, Either::right(42));
    /// ```
    #[inline]
    pub fn bind_result<R>(&self, value: Result<R, L>) -> Result<R, Early<L>> {
        self.bind(Either::from_result(value))
    }

    /// Short-circuits with `or_else()` unless the condition holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::{scope, Either};
    ///
    /// let result: Either<&str, i32> = scope::run(|s| {
    ///     let n = s.bind(Either::right(-5))?;
    ///     s.ensure(n >= 0, || "negative")?;
    ///     Ok(n)
    /// });
    /// assert_eq!(result, Either::left("negative"));
    /// ```
    #[inline]
    pub fn ensure<F>(&self, condition: bool, or_else: F) -> Result<(), Early<L>>
    where
        F: FnOnce() -> L,
    {
        if condition {
            Ok(())
        } else {
            Err(Early { left: or_else() })
        }
    }

    /// Unwraps a `Some`, or short-circuits with `or_else()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::{scope, Either};
    ///
    /// let result: Either<&str, i32> = scope::run(|s| {
    ///     let n = s.ensure_some([1, 2, 3].first().copied(), || "empty")?;
    ///     Ok(n * 10)
    /// });
    /// assert_eq!(result, Either::right(10));
    /// ```
    #[inline]
    pub fn ensure_some<T, F>(&self, value: Option<T>, or_else: F) -> Result<T, Early<L>>
    where
        F: FnOnce() -> L,
    {
        match value {
            Some(value) => Ok(value),
            None => Err(Early { left: or_else() }),
        }
    }
}

/// Runs a scope body with first-Left-wins semantics.
///
/// If every `bind`/`ensure` in the body observes a Right, the body's own
/// return value is wrapped as the final Right. Otherwise the first Left is
/// the result of the scope and the rest of the body never executes.
///
/// # Examples
///
/// ```
/// use eitherway::{scope, Either};
///
/// fn step(n: i32) -> Either<&'static str, i32> {
///     if n < 3 { Either::right(n + 1) } else { Either::left("too big") }
/// }
///
/// let result = scope::run(|s| {
///     let a = s.bind(step(0))?;
///     let b = s.bind(step(a))?;
///     let c = s.bind(step(b))?;
///     Ok(a + b + c)
/// });
/// assert_eq!(result, Either::right(6));
/// ```
pub fn run<L, R, F>(body: F) -> Either<L, R>
where
    F: FnOnce(&Scope<L>) -> Result<R, Early<L>>,
{
    let scope = Scope {
        _private: PhantomData,
    };
    match body(&scope) {
        Ok(value) => Either::Right(value),
        Err(early) => Either::Left(early.left),
    }
}
