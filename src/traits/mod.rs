//! Extension traits that let std types participate in the algebra.
//!
//! Rust already ships the presence/absence sum type (`Option`) and a
//! success/failure one (`Result`), so this crate extends them instead of
//! shadowing them:
//!
//! - [`OptionExt`]: total extraction and promotion of absence into a typed
//!   failure
//! - [`ResultExt`]: one-call entry from `Result` into [`Either`](crate::Either)
//!
//! # Examples
//!
//! ```
//! use eitherway::traits::{OptionExt, ResultExt};
//! use eitherway::Either;
//!
//! let label = Some(3).fold(|| "empty".to_owned(), |n: i32| format!("{n} items"));
//! assert_eq!(label, "3 items");
//!
//! let entered: Either<core::num::ParseIntError, i32> = "42".parse().into_either();
//! assert_eq!(entered, Either::right(42));
//! ```

pub mod option_ext;
pub mod result_ext;

pub use option_ext::OptionExt;
pub use result_ext::ResultExt;
