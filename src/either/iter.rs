use crate::alloc_type::Vec;
use crate::either::Either;

pub struct Iter<'a, R> {
    inner: Option<&'a R>,
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IterMut<'a, R> {
    inner: Option<&'a mut R>,
}

impl<'a, R> Iterator for IterMut<'a, R> {
    type Item = &'a mut R;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<R> {
    inner: Option<R>,
}

impl<R> Iterator for IntoIter<R> {
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_right(),
        }
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, L, R> IntoIterator for &'a mut Either<L, R> {
    type Item = &'a mut R;
    type IntoIter = IterMut<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<L, R> Either<L, R> {
    /// Iterates over the Right payload (zero or one items).
    pub fn iter(&self) -> Iter<'_, R> {
        Iter {
            inner: self.as_ref().into_right(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, R> {
        IterMut {
            inner: self.as_mut().into_right(),
        }
    }
}

/// Collects a sequence of `Either` items, stopping at the first Left.
///
/// The container-level analogue of [`crate::scope::run`]: remaining items
/// are never pulled from the iterator once a Left appears.
///
/// # Examples
///
/// ```
/// use eitherway::Either;
///
/// let all: Either<&str, Vec<i32>> =
///     vec![Either::right(1), Either::right(2)].into_iter().collect();
/// assert_eq!(all, Either::right(vec![1, 2]));
///
/// let first_failure: Either<&str, Vec<i32>> =
///     vec![Either::right(1), Either::left("bad"), Either::right(3)]
///         .into_iter()
///         .collect();
/// assert_eq!(first_failure, Either::left("bad"));
/// ```
impl<L, R> FromIterator<Either<L, R>> for Either<L, Vec<R>> {
    fn from_iter<I: IntoIterator<Item = Either<L, R>>>(iter: I) -> Self {
        let mut values = Vec::new();
        for item in iter {
            match item {
                Either::Left(error) => return Either::Left(error),
                Either::Right(value) => values.push(value),
            }
        }
        Either::Right(values)
    }
}
