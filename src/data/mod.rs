//! Concrete types that implement the type classes.
//!
//! - [`Optional`]: value-or-absence; Functor, Applicative, Monad
//! - [`Sequence`]: ordered collection; Functor, Applicative, Semigroup, Monoid
//! - [`OrderedTriState`]: `One`/`Two`/`Many`; Semigroup only
//!
//! All of them are immutable: operations consume or borrow their inputs and
//! return fresh values, so instances can be shared across threads freely.

mod optional;
mod sequence;
mod tri_state;

pub use optional::Optional;
pub use sequence::Sequence;
pub use tri_state::OrderedTriState;
