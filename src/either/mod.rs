#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

pub mod iter;
pub use iter::{IntoIter, Iter, IterMut};

/// SmallVec-backed collection of accumulated Left values.
///
/// Uses inline storage for a single element so the common one-failure case
/// of [`Either::zip`] never touches the heap.
pub type Lefts<L> = SmallVec<[L; 1]>;

/// A value that is exactly one of two disjoint things.
///
/// `Either<L, R>` holds either a `Left(L)` or a `Right(R)`. By convention
/// `L` carries failure information and `R` carries the success payload, and
/// the combinators are Right-biased: [`map`](Either::map) and
/// [`and_then`](Either::and_then) act on the Right branch and pass a Left
/// through untouched. The two type parameters are independent; nothing ties
/// them together at runtime.
///
/// Unlike `Result`, `Either` carries no judgement in its name, which makes it
/// the natural return type for lookups and boundary adapters that want the
/// failure branch to be an ordinary, exhaustively matchable value.
///
/// # Serde Support
///
/// `Either` implements `Serialize` and `Deserialize` when `L` and `R` do
/// (behind the `serde` feature).
///
/// # Examples
///
/// ```
/// use eitherway::Either;
///
/// let found: Either<&str, i32> = Either::right(42);
/// let missing: Either<&str, i32> = Either::left("not found");
///
/// assert_eq!(found.map(|n| n + 1), Either::right(43));
/// assert_eq!(missing.map(|n| n + 1), Either::left("not found"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Creates a Left value.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e = Either::<&str, i32>::left("boom");
    /// assert!(e.is_left());
    /// ```
    #[must_use]
    #[inline]
    pub fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a Right value.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e = Either::<&str, i32>::right(42);
    /// assert!(e.is_right());
    /// ```
    #[must_use]
    #[inline]
    pub fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns `true` if this is a Left.
    #[must_use]
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a Right.
    #[must_use]
    #[inline]
    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Converts `&Either<L, R>` to `Either<&L, &R>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e: Either<String, i32> = Either::right(7);
    /// assert_eq!(e.as_ref().into_right(), Some(&7));
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Converts `&mut Either<L, R>` to `Either<&mut L, &mut R>`.
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Extracts the Left payload, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e: Either<&str, i32> = Either::left("boom");
    /// assert_eq!(e.into_left(), Some("boom"));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Extracts the Right payload, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(42);
    /// assert_eq!(e.into_right(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Maps the Right payload using the provided function.
    ///
    /// A Left passes through with its original value and type; `f` is never
    /// invoked on it. Satisfies the functor laws: `map(identity)` is a no-op
    /// and mapping `f` then `g` equals mapping their composition.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success payload from `R` to `R2`
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(21);
    /// assert_eq!(e.map(|n| n * 2), Either::right(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(f(value)),
        }
    }

    /// Maps the Left payload, leaving a Right untouched.
    ///
    /// The symmetric counterpart of [`map`](Either::map); `f` is never
    /// invoked on a Right.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e: Either<u32, &str> = Either::left(404);
    /// assert_eq!(e.map_left(|code| code + 100), Either::left(504));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Self::Left(value) => Either::Left(f(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps whichever payload is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(2);
    /// let folded: Either<usize, i32> = e.map_either(str::len, |n| n * 10);
    /// assert_eq!(folded, Either::right(20));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_either<L2, R2, F, G>(self, f: F, g: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(value) => Either::Left(f(value)),
            Self::Right(value) => Either::Right(g(value)),
        }
    }

    /// Chains a dependent fallible step.
    ///
    /// If this is a Left, `f` is never invoked and the Left is the result
    /// (short-circuit). If this is a Right, the step runs and its result is
    /// adopted wholesale, so nested `Either`s never appear. `and_then` is
    /// associative and has `right` as its identity on both sides.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next fallible step
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// fn half(n: i32) -> Either<&'static str, i32> {
    ///     if n % 2 == 0 { Either::right(n / 2) } else { Either::left("odd") }
    /// }
    ///
    /// assert_eq!(Either::right(8).and_then(half).and_then(half), Either::right(2));
    /// assert_eq!(Either::right(7).and_then(half).and_then(half), Either::left("odd"));
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => f(value),
        }
    }

    /// Total extraction: collapses both branches into a single `Z`.
    ///
    /// Exactly one of the two functions runs. This is the sanctioned way to
    /// leave the algebra, because the caller is forced to say what happens on
    /// both branches.
    ///
    /// # Arguments
    ///
    /// * `if_left` - Handler for the failure branch
    /// * `if_right` - Handler for the success branch
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(42);
    /// let message = e.fold(|err| format!("failed: {err}"), |n| format!("got {n}"));
    /// assert_eq!(message, "got 42");
    /// ```
    #[inline]
    pub fn fold<Z, F, G>(self, if_left: F, if_right: G) -> Z
    where
        F: FnOnce(L) -> Z,
        G: FnOnce(R) -> Z,
    {
        match self {
            Self::Left(value) => if_left(value),
            Self::Right(value) => if_right(value),
        }
    }

    /// Exchanges the Left and Right roles without altering payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(1);
    /// assert_eq!(e.swap(), Either::left(1));
    /// ```
    #[must_use]
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the Right payload or the provided default.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e: Either<&str, i32> = Either::left("boom");
    /// assert_eq!(e.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the Right payload or computes one from the Left.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e: Either<&str, usize> = Either::left("boom");
    /// assert_eq!(e.unwrap_or_else(str::len), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => f(value),
            Self::Right(value) => value,
        }
    }

    /// Calls `op` on the Left, otherwise returns the Right unchanged.
    ///
    /// Useful for recovery: the alternative may itself fail with a new Left
    /// type.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e: Either<&str, i32> = Either::left("miss");
    /// let recovered = e.or_else(|_| Either::<&str, i32>::right(0));
    /// assert_eq!(recovered, Either::right(0));
    /// ```
    #[must_use]
    #[inline]
    pub fn or_else<L2, F>(self, op: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        match self {
            Self::Left(value) => op(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Demotes a Right whose payload fails the predicate.
    ///
    /// A rejected Right needs a failure value, so `or_else` manufactures one
    /// from the payload before it is discarded. A Left passes through.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Keeps the Right when it returns `true`
    /// * `or_else` - Builds the Left for a rejected payload
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e: Either<String, i32> = Either::right(-3);
    /// let checked = e.filter_or_else(|n| *n >= 0, |n| format!("negative: {n}"));
    /// assert_eq!(checked, Either::left("negative: -3".to_owned()));
    /// ```
    #[must_use]
    #[inline]
    pub fn filter_or_else<P, F>(self, predicate: P, or_else: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(&R) -> L,
    {
        match self {
            Self::Right(value) if !predicate(&value) => Self::Left(or_else(&value)),
            other => other,
        }
    }

    /// Combines two Eithers into a tuple, accumulating Lefts.
    ///
    /// Unlike [`and_then`](Either::and_then), which stops at the first
    /// failure, `zip` evaluates both sides and collects every Left into a
    /// [`Lefts`] vector, so independent checks can report all their failures
    /// at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let a: Either<&str, i32> = Either::left("no name");
    /// let b: Either<&str, i32> = Either::left("no age");
    /// let both = a.zip(b);
    /// assert_eq!(both.into_left().unwrap().to_vec(), vec!["no name", "no age"]);
    /// ```
    #[must_use]
    #[inline]
    pub fn zip<R2>(self, other: Either<L, R2>) -> Either<Lefts<L>, (R, R2)> {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right((a, b)),
            (Self::Left(e), Either::Right(_)) => Either::Left(smallvec![e]),
            (Self::Right(_), Either::Left(e)) => Either::Left(smallvec![e]),
            (Self::Left(e1), Either::Left(e2)) => Either::Left(smallvec![e1, e2]),
        }
    }

    /// Like [`zip`](Either::zip), but merges the two payloads with `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let a: Either<&str, i32> = Either::right(40);
    /// let b: Either<&str, i32> = Either::right(2);
    /// assert_eq!(a.zip_with(b, |x, y| x + y), Either::right(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn zip_with<R2, T, F>(self, other: Either<L, R2>, f: F) -> Either<Lefts<L>, T>
    where
        F: FnOnce(R, R2) -> T,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Wraps a `Result` into the algebra, `Err` becoming Left.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e = Either::from_result("21".parse::<i32>());
    /// assert_eq!(e.map(|n| n * 2), Either::right(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }

    /// Converts into a `Result`, Right becoming `Ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(42);
    /// assert_eq!(e.into_result(), Ok(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(error) => Err(error),
            Self::Right(value) => Ok(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        Self::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}
