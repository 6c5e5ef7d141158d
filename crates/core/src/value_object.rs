//! Value object trait: equality by value, not identity.
//!
//! Inventory items carry no identifier. Two items with the same name, sell-in
//! and quality are interchangeable, so they are modelled as value objects.

/// Marker trait for value objects.
///
/// Value objects are compared by their attribute values. Mutation is allowed
/// only through domain operations that keep the type's invariants (for example
/// a daily update clamps quality back into range).
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Baseline {
///     sell_in: i32,
///     quality: i32,
/// }
///
/// impl ValueObject for Baseline {}
///
/// assert_eq!(Baseline { sell_in: 2, quality: 0 }, Baseline { sell_in: 2, quality: 0 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
