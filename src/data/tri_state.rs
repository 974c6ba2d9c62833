//! Ordered tri-state - a saturating count of `One`, `Two` or `Many`.

use crate::typeclass::Semigroup;

/// A coarse count that saturates at `Many`.
///
/// Combining two `One`s gives `Two`; every other combination gives `Many`,
/// and once `Many` appears it absorbs everything combined with it.
///
/// This is a [`Semigroup`] but deliberately not a `Monoid`: no variant
/// leaves every other variant unchanged, so there is no identity to supply.
///
/// # Examples
///
/// ```rust
/// use lawful::data::OrderedTriState;
/// use lawful::typeclass::Semigroup;
///
/// assert_eq!(OrderedTriState::One.combine(OrderedTriState::One), OrderedTriState::Two);
/// assert_eq!(OrderedTriState::One.combine(OrderedTriState::Two), OrderedTriState::Many);
/// assert_eq!(OrderedTriState::Many.combine(OrderedTriState::One), OrderedTriState::Many);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderedTriState {
    /// Exactly one.
    One,
    /// Exactly two.
    Two,
    /// More than two.
    Many,
}

impl OrderedTriState {
    /// Every variant, in ascending order.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Many];
}

impl Semigroup for OrderedTriState {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::One, Self::One) => Self::Two,
            _ => Self::Many,
        }
    }
}
