#[cfg(feature = "std")]
pub(crate) type Vec<T> = std::vec::Vec<T>;
#[cfg(not(feature = "std"))]
pub(crate) type Vec<T> = alloc::vec::Vec<T>;
