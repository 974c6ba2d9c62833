//! # lawful
//!
//! Algebraic type classes for Rust, with a small set of lawful instances and
//! generic algorithms written once against the classes.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Semigroup, Monoid, Monad, on top
//!   of a GAT-based [`TypeConstructor`](typeclass::TypeConstructor)
//! - **Data Types**: `Optional` (value or absence), `Sequence` (ordered
//!   collection), `OrderedTriState` (saturating `One`/`Two`/`Many` count)
//! - **Algorithms**: `square`, `applicative_sum`, `combine`, `concat_all` and
//!   a short-circuiting division chain
//!
//! Capabilities are checked at compile time: calling `concat_all` on a type
//! that is only a semigroup, or `bind` on a `Sequence`, is a type error.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `data`: Data types and algorithms (implies `typeclass`)
//! - `serde`: Serialization for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lawful::prelude::*;
//!
//! assert_eq!(square(Optional::present(4)), Optional::present(16));
//! assert_eq!(
//!     applicative_sum(Sequence::from(vec![1, 2]), Sequence::from(vec![10])),
//!     Sequence::from(vec![11, 12])
//! );
//! assert_eq!(safe_divide_chain(Optional::present(0.0), 1), Optional::empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the type classes, data types and algorithms.
///
/// # Usage
///
/// ```rust
/// use lawful::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "data")]
    pub use crate::data::*;

    #[cfg(feature = "data")]
    pub use crate::algorithms::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "data")]
pub mod algorithms;
