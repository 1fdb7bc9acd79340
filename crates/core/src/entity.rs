//! Entity trait: data-bearing types that represent an identity.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Stable, snake_case name of the entity kind (used in log fields).
    const KIND: &'static str;
}
