//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists a function
//! `combine: (T, T) -> T` that is associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Associativity is not checked at runtime. Implementations are held to it
//! by their law tests.
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::{OrderedTriState, Sequence};
//! use lawful::typeclass::Semigroup;
//!
//! let joined = Sequence::from(vec![1, 2]).combine(Sequence::from(vec![3, 4]));
//! assert_eq!(joined, Sequence::from(vec![1, 2, 3, 4]));
//!
//! assert_eq!(OrderedTriState::One.combine(OrderedTriState::One), OrderedTriState::Two);
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Sequence;
    /// use lawful::typeclass::Semigroup;
    ///
    /// let left = Sequence::from(vec![1]);
    /// let right = Sequence::from(vec![2]);
    /// assert_eq!(left.combine_ref(&right), Sequence::from(vec![1, 2]));
    /// assert_eq!(left, Sequence::from(vec![1]));
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// `combine_n(x, 1)` returns `x`, `combine_n(x, 3)` returns
    /// `x.combine(x).combine(x)`.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0: a semigroup has no value to return for an
    /// empty combination.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::OrderedTriState;
    /// use lawful::typeclass::Semigroup;
    ///
    /// assert_eq!(OrderedTriState::One.combine_n(1), OrderedTriState::One);
    /// assert_eq!(OrderedTriState::One.combine_n(2), OrderedTriState::Two);
    /// assert_eq!(OrderedTriState::One.combine_n(3), OrderedTriState::Many);
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Reduces all elements in an iterator using the semigroup operation,
    /// left to right.
    ///
    /// Returns `None` if the iterator is empty. For a version that falls back
    /// to an identity element, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::OrderedTriState;
    /// use lawful::typeclass::Semigroup;
    ///
    /// let states = vec![OrderedTriState::One, OrderedTriState::One];
    /// assert_eq!(OrderedTriState::reduce_all(states), Some(OrderedTriState::Two));
    /// assert_eq!(OrderedTriState::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}
