//! Generic algorithms written against the type classes.
//!
//! Each function names only the capabilities it needs, so it runs unchanged
//! over every type that has them:
//!
//! - [`square`]: any [`Functor`] over a multipliable element
//! - [`applicative_sum`]: any [`Applicative`] over an addable element
//! - [`combine`]: any [`Semigroup`]
//! - [`concat_all`]: a [`Sequence`] of any [`Monoid`]
//! - [`divide_twelve_by`] / [`safe_divide_chain`]: short-circuiting division
//!   through [`Monad::bind`]
//!
//! # Examples
//!
//! ```rust
//! use lawful::algorithms::{applicative_sum, square};
//! use lawful::data::{Optional, Sequence};
//!
//! assert_eq!(square(Optional::present(5)), Optional::present(25));
//! assert_eq!(square(Sequence::from(vec![1, 2, 3])), Sequence::from(vec![1, 4, 9]));
//!
//! let sums = applicative_sum(Sequence::from(vec![1, 2]), Sequence::from(vec![10, 20]));
//! assert_eq!(sums, Sequence::from(vec![11, 21, 12, 22]));
//! ```

use std::ops::{Add, Mul};

use crate::data::{Optional, Sequence};
use crate::typeclass::{Applicative, Functor, Monad, Monoid, Semigroup};

/// Addition with its first operand already supplied.
pub type Adder<T> = Box<dyn Fn(T) -> T>;

type CurriedAdd<T> = fn(T) -> Adder<T>;

/// Squares every value inside a functor.
///
/// Absence and emptiness are preserved: nothing is squared when there is
/// nothing inside.
///
/// # Panics
///
/// Overflow behaviour is that of the element type's `Mul`: primitive
/// integers panic on overflow in debug builds. Use a wrapping or checked
/// element type such as `std::num::Wrapping` when that matters.
///
/// # Examples
///
/// ```rust
/// use lawful::algorithms::square;
/// use lawful::data::{Optional, Sequence};
///
/// assert_eq!(square(Optional::<i32>::empty()), Optional::empty());
/// assert_eq!(square(Sequence::<i32>::new()), Sequence::new());
/// ```
pub fn square<F>(functor: F) -> F::WithType<F::Inner>
where
    F: Functor,
    F::Inner: Mul<Output = F::Inner> + Clone,
{
    functor.fmap(|value| value.clone() * value)
}

/// Adds the values of two applicatives through two sequential applications.
///
/// A curried addition is lifted with `pure`, applied to `left`, and the
/// resulting partially applied additions are applied to `right`. For
/// `Optional` the result is absent when either input is; for `Sequence` it
/// is every sum, `left` outermost.
///
/// # Panics
///
/// Overflow behaviour is that of the element type's `Add`: primitive
/// integers panic on overflow in debug builds.
///
/// # Examples
///
/// ```rust
/// use lawful::algorithms::applicative_sum;
/// use lawful::data::Optional;
///
/// assert_eq!(applicative_sum(Optional::present(5), Optional::present(5)), Optional::present(10));
/// assert_eq!(applicative_sum(Optional::present(5), Optional::empty()), Optional::empty());
/// ```
pub fn applicative_sum<F>(left: F, right: F) -> F::WithType<F::Inner>
where
    F: Applicative,
    F::Inner: Add<Output = F::Inner> + Clone + 'static,
{
    let add: CurriedAdd<F::Inner> = |x| Box::new(move |y: F::Inner| x.clone() + y);
    let partially_applied =
        left.apply_functions::<Adder<F::Inner>, CurriedAdd<F::Inner>>(F::pure(add));
    right.apply_functions::<F::Inner, Adder<F::Inner>>(partially_applied)
}

/// Combines two values of the same semigroup.
///
/// # Examples
///
/// ```rust
/// use lawful::algorithms::combine;
/// use lawful::data::OrderedTriState;
///
/// assert_eq!(combine(OrderedTriState::One, OrderedTriState::One), OrderedTriState::Two);
/// assert_eq!(combine(OrderedTriState::One, OrderedTriState::Many), OrderedTriState::Many);
/// ```
#[inline]
pub fn combine<S: Semigroup>(left: S, right: S) -> S {
    left.combine(right)
}

/// Folds a sequence of monoid values left to right.
///
/// The fold starts from the element type's own identity, so an empty
/// sequence yields `M::identity()`. Only monoids are accepted; a
/// semigroup without identity, such as
/// [`OrderedTriState`](crate::data::OrderedTriState), does not compile here.
///
/// # Examples
///
/// ```rust
/// use lawful::algorithms::concat_all;
/// use lawful::data::Sequence;
///
/// let nested = Sequence::from(vec![Sequence::from(vec![1, 2, 3]), Sequence::from(vec![4, 5, 6])]);
/// assert_eq!(concat_all(nested), Sequence::from(vec![1, 2, 3, 4, 5, 6]));
///
/// let none: Sequence<Sequence<i32>> = Sequence::new();
/// assert_eq!(concat_all(none), Sequence::new());
/// ```
#[inline]
pub fn concat_all<M: Monoid>(monoids: Sequence<M>) -> M {
    M::combine_all(monoids)
}

/// Divides twelve by `divisor`, absent when `divisor` is zero.
///
/// Division is floating point, so `12 / 5` is `2.4` and a chain only turns
/// absent on an actual zero.
///
/// # Examples
///
/// ```rust
/// use lawful::algorithms::divide_twelve_by;
/// use lawful::data::Optional;
///
/// assert_eq!(divide_twelve_by(2.0), Optional::present(6.0));
/// assert_eq!(divide_twelve_by(5.0), Optional::present(2.4));
/// assert_eq!(divide_twelve_by(0.0), Optional::empty());
/// ```
#[inline]
pub fn divide_twelve_by(divisor: f64) -> Optional<f64> {
    if divisor == 0.0 {
        Optional::empty()
    } else {
        Optional::present(12.0 / divisor)
    }
}

/// Binds [`divide_twelve_by`] `steps` times, starting from `start`.
///
/// The first zero met turns the chain absent and every later step is
/// skipped.
///
/// # Examples
///
/// ```rust
/// use lawful::algorithms::safe_divide_chain;
/// use lawful::data::Optional;
///
/// assert_eq!(safe_divide_chain(Optional::present(2.0), 2), Optional::present(2.0));
/// assert_eq!(safe_divide_chain(Optional::present(0.0), 1), Optional::empty());
/// ```
pub fn safe_divide_chain(start: Optional<f64>, steps: usize) -> Optional<f64> {
    (0..steps).fold(start, |current, _| current.bind(divide_twelve_by))
}
