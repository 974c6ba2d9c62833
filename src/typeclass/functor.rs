//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape: an absent `Optional` stays absent, and a `Sequence` keeps its
//! length and order.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::{Optional, Sequence};
//! use lawful::typeclass::Functor;
//!
//! let present = Optional::present(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Optional::present("5".to_string()));
//!
//! let numbers = Sequence::from(vec![1, 2, 3]);
//! assert_eq!(numbers.fmap(|n| n * 10), Sequence::from(vec![10, 20, 30]));
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// The mapping function is `FnMut` rather than `FnOnce`: a multi-element
/// container calls it once per element, and the same contract has to serve
/// both single-value and multi-value containers.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to every value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms an inner value
    ///
    /// # Returns
    ///
    /// A new functor of the same shape holding the transformed value(s)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Optional;
    /// use lawful::typeclass::Functor;
    ///
    /// let value = Optional::present(5);
    /// assert_eq!(value.fmap(|n| n * 2), Optional::present(10));
    ///
    /// let missing: Optional<i32> = Optional::empty();
    /// assert_eq!(missing.fmap(|n| n * 2), Optional::empty());
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to references of the values inside the functor.
    ///
    /// The functor is borrowed, so it stays usable afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Sequence;
    /// use lawful::typeclass::Functor;
    ///
    /// let words = Sequence::from(vec!["hello".to_string(), "hi".to_string()]);
    /// assert_eq!(words.fmap_ref(|word| word.len()), Sequence::from(vec![5, 2]));
    /// assert_eq!(words.len(), 2);
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every value inside the functor with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Sequence;
    /// use lawful::typeclass::Functor;
    ///
    /// let numbers = Sequence::from(vec![1, 2, 3]);
    /// assert_eq!(numbers.replace('x'), Sequence::from(vec!['x', 'x', 'x']));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the values inside the functor, keeping only its shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Optional;
    /// use lawful::typeclass::Functor;
    ///
    /// assert_eq!(Optional::present(5).void(), Optional::present(()));
    /// assert_eq!(Optional::<i32>::empty().void(), Optional::empty());
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
