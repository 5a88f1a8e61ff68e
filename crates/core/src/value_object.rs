//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Document numbers, document types and monetary amounts carry no identity of their own:
/// two instances with the same fields are the same value. Implementors are immutable; to
/// "change" one, build a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Fils(u8);
///
/// impl ValueObject for Fils {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
