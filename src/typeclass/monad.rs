//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::wrap(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.bind(Self::wrap) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::Optional;
//! use lawful::typeclass::Monad;
//!
//! fn halve(n: i32) -> Optional<i32> {
//!     if n % 2 == 0 { Optional::present(n / 2) } else { Optional::empty() }
//! }
//!
//! assert_eq!(Optional::present(12).bind(halve).bind(halve), Optional::present(3));
//! assert_eq!(Optional::present(6).bind(halve).bind(halve), Optional::empty());
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `bind`, which lets the value produced
/// by one computation choose the computation that runs next.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::wrap(a).bind(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.bind(Self::wrap) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// The function already returns the monad, so its result is passed
    /// through as is rather than wrapped again.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Optional;
    /// use lawful::typeclass::Monad;
    ///
    /// let x = Optional::present(5);
    /// assert_eq!(x.bind(|n| Optional::present(n * 2)), Optional::present(10));
    ///
    /// let y = Optional::present(5);
    /// assert_eq!(y.bind(|n| if n > 10 { Optional::present(n) } else { Optional::empty() }), Optional::empty());
    /// ```
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Lifts a value into the monad. Equivalent to [`Applicative::pure`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Optional;
    /// use lawful::typeclass::Monad;
    ///
    /// let wrapped: Optional<i32> = <Optional<()>>::wrap(2);
    /// assert_eq!(wrapped, Optional::present(2));
    /// ```
    #[inline]
    fn wrap<B>(value: B) -> Self::WithType<B> {
        Self::pure(value)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is a failure (such as `Optional::Empty`) the failure
    /// propagates and `next` is never reached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::data::Optional;
    /// use lawful::typeclass::Monad;
    ///
    /// assert_eq!(Optional::present(5).then(Optional::present("next")), Optional::present("next"));
    /// assert_eq!(Optional::<i32>::empty().then(Optional::present("next")), Optional::empty());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone,
    {
        self.bind::<B, _>(move |_| next.clone())
    }
}
