//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two recipes with the same quantities are the
/// same recipe, and a supply snapshot is just the numbers it holds. They are
/// handed out by copy so callers never alias state owned by an aggregate.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Quantity(i64);
///
/// impl ValueObject for Quantity {}
///
/// assert_eq!(Quantity(250), Quantity(250));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
