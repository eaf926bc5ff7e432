//! A vector that always holds at least one element.
//!
//! [`NonEmptyVec`] is the result carrier of
//! [`SemiProduct::product_many`](super::SemiProduct::product_many) and the
//! container of the non-empty traversal. Emptiness is ruled out by
//! construction, so consumers never need an identity element.

/// A sequence statically guaranteed to be non-empty.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::NonEmptyVec;
///
/// let values = NonEmptyVec::new(1, vec![2, 3]);
/// assert_eq!(*values.head(), 1);
/// assert_eq!(values.into_vec(), vec![1, 2, 3]);
///
/// assert_eq!(NonEmptyVec::<i32>::from_vec(Vec::new()), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NonEmptyVec<A> {
    head: A,
    tail: Vec<A>,
}

impl<A> NonEmptyVec<A> {
    /// Creates a non-empty vector from its first element and the rest.
    #[inline]
    pub const fn new(head: A, tail: Vec<A>) -> Self {
        Self { head, tail }
    }

    /// Creates a non-empty vector holding exactly one element.
    #[inline]
    pub const fn singleton(head: A) -> Self {
        Self::new(head, Vec::new())
    }

    /// Returns `None` when `values` is empty.
    pub fn from_vec(mut values: Vec<A>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let tail = values.split_off(1);
        values.pop().map(|head| Self::new(head, tail))
    }

    /// The first element.
    #[inline]
    pub const fn head(&self) -> &A {
        &self.head
    }

    /// Every element after the first.
    #[inline]
    pub fn tail(&self) -> &[A] {
        &self.tail
    }

    /// Splits into the first element and the rest.
    #[inline]
    pub fn into_parts(self) -> (A, Vec<A>) {
        (self.head, self.tail)
    }

    /// Number of elements, never zero.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Converts into a plain vector, head first.
    pub fn into_vec(self) -> Vec<A> {
        let mut values = Vec::with_capacity(self.tail.len() + 1);
        values.push(self.head);
        values.extend(self.tail);
        values
    }

    /// Appends an element at the end.
    pub fn push(&mut self, value: A) {
        self.tail.push(value);
    }
}

impl<A> IntoIterator for NonEmptyVec<A> {
    type Item = A;
    type IntoIter = std::iter::Chain<std::iter::Once<A>, std::vec::IntoIter<A>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<A> From<NonEmptyVec<A>> for Vec<A> {
    fn from(values: NonEmptyVec<A>) -> Self {
        values.into_vec()
    }
}
