//! Sequence type - an ordered, possibly empty collection.
//!
//! `Sequence<T>` keeps insertion order and allows duplicates. It is a
//! [`Functor`] and an [`Applicative`] with list semantics (application
//! pairs every function with every argument), and a [`Monoid`] under
//! concatenation with the empty sequence as identity.
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::Sequence;
//! use lawful::typeclass::{Functor, Monoid, Semigroup};
//!
//! let numbers: Sequence<i32> = (1..=3).collect();
//! assert_eq!(numbers.clone().fmap(|n| n * n), Sequence::from(vec![1, 4, 9]));
//!
//! let more = numbers.combine(Sequence::from(vec![4]));
//! assert_eq!(more.len(), 4);
//! assert_eq!(more.clone().combine(Sequence::identity()), more);
//! ```

use crate::typeclass::{Applicative, Functor, Monoid, Semigroup, TypeConstructor};

/// An ordered collection of zero or more elements.
///
/// Every operation returns a new `Sequence`; the backing storage is owned
/// exclusively and never shared.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a sequence holding exactly one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Sequence;
    ///
    /// assert_eq!(Sequence::singleton(7), Sequence::from(vec![7]));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self {
            elements: vec![value],
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns an iterator over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the sequence, returning its elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<F> Sequence<F> {
    /// Applies every held function to every argument.
    ///
    /// The result is the cartesian application, functions outermost:
    /// `f0(x0), f0(x1), .., f0(xn), f1(x0), ..`. Its length is the product of
    /// both lengths, so an empty side yields an empty result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Sequence;
    ///
    /// fn negate(x: i32) -> i32 { -x }
    /// fn double(x: i32) -> i32 { x * 2 }
    ///
    /// let functions = Sequence::from(vec![negate as fn(i32) -> i32, double]);
    /// let results = functions.apply(Sequence::from(vec![1, 2]));
    /// assert_eq!(results, Sequence::from(vec![-1, -2, 2, 4]));
    /// ```
    pub fn apply<A, B>(self, arguments: Sequence<A>) -> Sequence<B>
    where
        F: FnMut(A) -> B,
        A: Clone,
    {
        let capacity = self.len().saturating_mul(arguments.len());
        let mut results = Vec::with_capacity(capacity);
        for mut function in self.elements {
            for argument in &arguments.elements {
                results.push(function(argument.clone()));
            }
        }
        Sequence { elements: results }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync);

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Sequence<T> {
    type Inner = T;
    type WithType<B> = Sequence<B>;
}

impl<T> Functor for Sequence<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Sequence<B>
    where
        F: FnMut(T) -> B,
    {
        self.elements.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Sequence<B>
    where
        F: FnMut(&T) -> B,
    {
        self.elements.iter().map(function).collect()
    }
}

impl<T> Applicative for Sequence<T> {
    #[inline]
    fn pure<B>(value: B) -> Sequence<B> {
        Sequence::singleton(value)
    }

    #[inline]
    fn apply_functions<B, F>(self, functions: Sequence<F>) -> Sequence<B>
    where
        F: FnMut(T) -> B,
        T: Clone,
    {
        functions.apply(self)
    }
}

impl<T> Semigroup for Sequence<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.elements.append(&mut other.elements);
        self
    }
}

impl<T> Monoid for Sequence<T> {
    fn identity() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Sequence<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Sequence::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_and_default_are_empty() {
        assert!(Sequence::<i32>::new().is_empty());
        assert_eq!(Sequence::<i32>::default(), Sequence::new());
    }

    #[rstest]
    fn preserves_insertion_order_and_duplicates() {
        let values = Sequence::from(vec![3, 1, 3]);
        assert_eq!(values.as_slice(), &[3, 1, 3]);
        assert_eq!(values.get(2), Some(&3));
        assert_eq!(values.get(3), None);
    }

    #[rstest]
    fn collects_and_iterates() {
        let values: Sequence<char> = "abc".chars().collect();
        let borrowed: Vec<&char> = values.iter().collect();
        assert_eq!(borrowed, vec![&'a', &'b', &'c']);
        assert_eq!(values.into_vec(), vec!['a', 'b', 'c']);
    }

    #[rstest]
    fn fmap_keeps_length_and_order() {
        let words = Sequence::from(vec!["a", "bb", "ccc"]);
        assert_eq!(words.fmap(str::len), Sequence::from(vec![1, 2, 3]));
    }

    #[rstest]
    fn apply_is_not_zip() {
        let functions: Sequence<fn(i32) -> i32> = Sequence::from(vec![
            (|x: i32| x + 1) as fn(i32) -> i32,
            (|x: i32| x + 2) as fn(i32) -> i32,
        ]);
        let results = functions.apply(Sequence::from(vec![10, 20]));
        assert_eq!(results, Sequence::from(vec![11, 21, 12, 22]));
    }

    #[rstest]
    #[case(Vec::new(), vec![1, 2])]
    #[case(vec![1], Vec::new())]
    fn apply_with_empty_side_is_empty(#[case] offsets: Vec<i32>, #[case] arguments: Vec<i32>) {
        let functions: Sequence<_> = offsets
            .into_iter()
            .map(|offset| move |x: i32| x + offset)
            .collect();
        assert!(functions.apply(Sequence::from(arguments)).is_empty());
    }

    #[rstest]
    fn combine_concatenates_in_order() {
        let left = Sequence::from(vec![1, 2]);
        let right = Sequence::from(vec![3, 1]);
        assert_eq!(left.combine(right), Sequence::from(vec![1, 2, 3, 1]));
    }

    #[rstest]
    fn identity_is_empty() {
        assert!(Sequence::<u8>::identity().is_empty());
    }
}
