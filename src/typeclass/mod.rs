//! Type class traits for functional programming abstractions.
//!
//! This module provides the capability contracts that concrete containers
//! implement and generic algorithms are written against:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and applying contained functions
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! A type has a capability by implementing the trait; a generic function
//! names the capabilities it needs in its bounds, so a missing operation is
//! a compile error rather than a failure at the first call.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to recover the
//! container shape (`Optional<_>`, `Sequence<_>`) from a concrete type,
//! which is what `Functor`, `Applicative` and `Monad` are defined over.
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::{OrderedTriState, Sequence};
//! use lawful::typeclass::{Monoid, Semigroup};
//!
//! let joined = Sequence::from(vec![1, 2]).combine(Sequence::from(vec![3]));
//! assert_eq!(joined, Sequence::from(vec![1, 2, 3]));
//! assert_eq!(Sequence::<i32>::identity(), Sequence::new());
//!
//! let saturated = OrderedTriState::Many.combine(OrderedTriState::One);
//! assert_eq!(saturated, OrderedTriState::Many);
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
