//! Optional type - a value that may be absent.
//!
//! This module provides `Optional<T>`, which is either `Present(value)` or
//! `Empty`. Absence is ordinary data: it flows through `fmap`, `apply` and
//! `bind` untouched, so a chain of computations needs no absence checks of
//! its own.
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::Optional;
//! use lawful::typeclass::{Functor, Monad};
//!
//! let price = Optional::present(40);
//! let with_tax = price.fmap(|p| p + p / 10);
//! assert_eq!(with_tax, Optional::present(44));
//!
//! let missing: Optional<i32> = Optional::empty();
//! assert_eq!(missing.bind(|p| Optional::present(p * 2)), Optional::empty());
//! ```

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either present or absent.
///
/// Instances are never mutated in place; every transformation produces a new
/// `Optional`.
///
/// Ordering follows `Option`: `Empty` sorts before any `Present` value.
///
/// # Examples
///
/// ```rust
/// use lawful::data::Optional;
///
/// let present = Optional::present(5);
/// assert!(present.is_present());
/// assert_eq!(present.value(), Some(&5));
///
/// let empty: Optional<i32> = Optional::empty();
/// assert!(empty.is_empty());
/// assert_eq!(empty.unwrap_or(0), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value.
    Empty,
    /// A value of type `T`.
    Present(T),
}

impl<T> Optional<T> {
    /// Creates a present value.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent value.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Optional;
    ///
    /// let text = Optional::present("hello".to_string());
    /// let borrowed: Optional<&String> = text.as_ref();
    /// assert_eq!(borrowed.value().map(|s| s.len()), Some(5));
    /// assert!(text.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Returns a reference to the held value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Returns the held value or `default` when absent.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<F> Optional<F> {
    /// Applies the held function to the held argument.
    ///
    /// The result is `Empty` when either side is `Empty`; the function runs
    /// only when both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Optional;
    ///
    /// let double = Optional::present(|x: i32| x * 2);
    /// assert_eq!(double.apply(Optional::present(4)), Optional::present(8));
    ///
    /// let double = Optional::present(|x: i32| x * 2);
    /// assert_eq!(double.apply(Optional::empty()), Optional::empty());
    /// ```
    #[inline]
    pub fn apply<A, B>(self, argument: Optional<A>) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, argument) {
            (Self::Present(function), Optional::Present(value)) => {
                Optional::Present(function(value))
            }
            _ => Optional::Empty,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Empty, Self::Present)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync);

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Optional<B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Empty => Optional::Empty,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().fmap(function)
    }
}

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn apply_functions<B, F>(self, functions: Optional<F>) -> Optional<B>
    where
        F: FnMut(A) -> B,
    {
        functions.apply(self)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn bind<B, F>(self, mut function: F) -> Optional<B>
    where
        F: FnMut(A) -> Optional<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => Optional::Empty,
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Empty => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Optional<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_is_empty() {
        let value: Optional<String> = Optional::default();
        assert!(value.is_empty());
    }

    #[rstest]
    #[case(Some(3), Optional::present(3))]
    #[case(None, Optional::empty())]
    fn converts_from_option(#[case] option: Option<i32>, #[case] expected: Optional<i32>) {
        assert_eq!(Optional::from(option), expected);
        assert_eq!(expected.into_option(), option);
    }

    #[rstest]
    fn empty_sorts_before_present() {
        assert!(Optional::empty() < Optional::present(i32::MIN));
    }

    #[rstest]
    fn apply_requires_both_sides() {
        let function: Optional<fn(i32) -> i32> = Optional::empty();
        assert_eq!(function.apply(Optional::present(1)), Optional::empty());

        let function = Optional::present(|x: i32| x - 1);
        assert_eq!(function.apply(Optional::<i32>::empty()), Optional::empty());
    }

    #[rstest]
    fn apply_runs_function_once_when_both_present() {
        let mut calls = 0;
        let function = Optional::present(|x: i32| {
            calls += 1;
            x * x
        });
        assert_eq!(function.apply(Optional::present(6)), Optional::present(36));
        assert_eq!(calls, 1);
    }

    #[rstest]
    fn fmap_ref_borrows() {
        let value = Optional::present(vec![1, 2, 3]);
        assert_eq!(value.fmap_ref(Vec::len), Optional::present(3));
        assert_eq!(value.value(), Some(&vec![1, 2, 3]));
    }

    #[rstest]
    fn bind_returns_function_result_unwrapped() {
        let nested = Optional::present(2).bind(|n| Optional::present(Optional::present(n)));
        assert_eq!(nested, Optional::present(Optional::present(2)));
    }
}
