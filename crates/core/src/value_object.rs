//! Value object trait: equality by value, not identity.
//!
//! Everything the replenishment pipeline derives (statuses, depletion
//! estimates, recommendations) is a value object: recomputed from fresh input
//! on every call and never mutated in place.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two depletion
/// estimates with the same numbers are the same estimate, regardless of which
/// run produced them.
///
/// The `Send + Sync` bound lets a batch be evaluated across threads without
/// any shared mutable state.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Coverage {
///     days: f64,
/// }
///
/// impl ValueObject for Coverage {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Send + Sync {}
