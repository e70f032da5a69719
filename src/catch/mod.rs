//! Panic bridging with an explicit fatal/recoverable boundary.
//!
//! Some collaborator code signals failure by panicking. [`catch`] runs such
//! a computation and converts the outcome into the algebra: normal
//! completion becomes a Right, and a panic is offered to a *classifier*
//! that enumerates exactly which faults are recoverable. A fault the
//! classifier declines is re-raised unchanged with
//! [`resume_unwind`](std::panic::resume_unwind): there is no catch-all
//! path, and nothing here ever swallows a fault it was not told about.
//!
//! Conditions Rust treats as unrecoverable (aborting allocation failure,
//! a panic while unwinding, `panic = "abort"` builds) never reach the
//! adapter in the first place, so the fatal side of the boundary holds even
//! against a misbehaving classifier.
//!
//! # Examples
//!
//! ```
//! use eitherway::catch::{catch, Fault};
//! use eitherway::Either;
//!
//! #[derive(Debug, PartialEq)]
//! enum LookupError {
//!     NotFound,
//! }
//!
//! fn classify(fault: &Fault) -> Option<LookupError> {
//!     match fault.message() {
//!         Some("row not found") => Some(LookupError::NotFound),
//!         _ => None, // anything else stays fatal
//!     }
//! }
//!
//! let result: Either<LookupError, u32> = catch(|| panic!("row not found"), classify);
//! assert_eq!(result, Either::left(LookupError::NotFound));
//!
//! let fine: Either<LookupError, u32> = catch(|| 7, classify);
//! assert_eq!(fine, Either::right(7));
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, UnwindSafe};

use crate::either::Either;

/// An in-flight panic payload, captured for classification.
///
/// A `Fault` owns the value the panic was raised with. Classifiers inspect
/// it through [`message`](Fault::message) for ordinary string panics or
/// [`downcast_ref`](Fault::downcast_ref) for typed payloads raised via
/// [`std::panic::panic_any`], and [`resume`](Fault::resume) puts the payload
/// back on its original unwinding path.
pub struct Fault {
    payload: Box<dyn Any + Send + 'static>,
}

impl Fault {
    fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the panic message for `&str`/`String` payloads.
    ///
    /// Typed payloads raised with `panic_any` return `None`; use
    /// [`downcast_ref`](Fault::downcast_ref) for those.
    ///
    /// # Examples
    ///
    /// ```
    /// use eitherway::catch::catch_opt;
    ///
    /// let result: Option<()> = catch_opt(
    ///     || panic!("resource gone"),
    ///     |fault| fault.message() == Some("resource gone"),
    /// );
    /// assert_eq!(result, None);
    /// ```
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else {
            self.payload.downcast_ref::<String>().map(String::as_str)
        }
    }

    /// Returns `true` if the payload is a `T`.
    #[must_use]
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// Borrows the payload as a `T`, if it is one.
    #[must_use]
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }

    /// Takes the payload as a `T`, handing the fault back on mismatch.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        match self.payload.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(payload) => Err(Self { payload }),
        }
    }

    /// Releases the raw panic payload.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Re-raises the fault on its original unwinding path.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.debug_tuple("Fault").field(&message).finish(),
            None => f.write_str("Fault(<non-string payload>)"),
        }
    }
}

/// A reusable fatal/recoverable classification policy.
///
/// Implementing `FromFault` for a domain error type fixes, in one place,
/// which fault kinds that type recovers; [`catch_into`] then applies the
/// policy without a closure at every call site.
///
/// # Examples
///
/// ```
/// use eitherway::catch::{catch_into, Fault, FromFault};
/// use eitherway::Either;
///
/// #[derive(Debug, PartialEq)]
/// enum StoreError {
///     Missing,
/// }
///
/// impl FromFault for StoreError {
///     fn from_fault(fault: &Fault) -> Option<Self> {
///         (fault.message() == Some("missing")).then_some(StoreError::Missing)
///     }
/// }
///
/// let result: Either<StoreError, i32> = catch_into(|| panic!("missing"));
/// assert_eq!(result, Either::left(StoreError::Missing));
/// ```
pub trait FromFault: Sized {
    /// Classifies a fault; `None` leaves it fatal.
    fn from_fault(fault: &Fault) -> Option<Self>;
}

/// Runs `f`, converting a classified panic into a Left.
///
/// On normal completion the value is wrapped as `Right`. On a panic the
/// classifier decides: `Some(error)` recovers it as `Left(error)`, `None`
/// re-raises the original payload past the adapter. The classifier is the
/// complete recoverable set; decline anything not explicitly recognized.
///
/// # Arguments
///
/// * `f` - The computation to bridge
/// * `classify` - Maps a caught fault into a domain error, or declines it
///
/// # Examples
///
/// ```
/// use eitherway::catch::catch;
/// use eitherway::Either;
///
/// let result: Either<String, i32> = catch(
///     || "not a number".parse().unwrap_or_else(|_| panic!("bad input")),
///     |fault| (fault.message() == Some("bad input")).then(|| "invalid input".to_owned()),
/// );
/// assert_eq!(result, Either::left("invalid input".to_owned()));
/// ```
pub fn catch<R, L, F, C>(f: F, classify: C) -> Either<L, R>
where
    F: FnOnce() -> R + UnwindSafe,
    C: FnOnce(&Fault) -> Option<L>,
{
    match panic::catch_unwind(f) {
        Ok(value) => Either::Right(value),
        Err(payload) => {
            let fault = Fault::new(payload);
            match classify(&fault) {
                Some(error) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        fault = fault.message().unwrap_or("<non-string payload>"),
                        "recoverable fault converted to Left"
                    );
                    Either::Left(error)
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::error!(
                        fault = fault.message().unwrap_or("<non-string payload>"),
                        "unclassified fault, re-raising"
                    );
                    fault.resume()
                }
            }
        }
    }
}

/// Runs `f` with [`FromFault`] as the classification policy.
pub fn catch_into<R, E, F>(f: F) -> Either<E, R>
where
    E: FromFault,
    F: FnOnce() -> R + UnwindSafe,
{
    catch(f, E::from_fault)
}

/// Option-flavored [`catch`]: a recognized fault becomes `None`.
///
/// `recoverable` plays the classifier role; returning `false` re-raises the
/// fault just like `classify` returning `None` does in [`catch`].
///
/// # Examples
///
/// ```
/// use eitherway::catch::catch_opt;
///
/// let value = catch_opt(|| 42, |_| false);
/// assert_eq!(value, Some(42));
/// ```
pub fn catch_opt<R, F, P>(f: F, recoverable: P) -> Option<R>
where
    F: FnOnce() -> R + UnwindSafe,
    P: FnOnce(&Fault) -> bool,
{
    catch(f, |fault| recoverable(fault).then_some(()))
        .into_right()
}
