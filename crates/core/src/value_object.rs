//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attribute
/// values are interchangeable. In this workspace that covers item categories,
/// quality bounds and configuration, but not `Item` itself, which is mutated in
/// place once per simulated day.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: shows up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct DecayRate(i32);
///
/// impl ValueObject for DecayRate {}
///
/// assert_eq!(DecayRate(2), DecayRate(2));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
