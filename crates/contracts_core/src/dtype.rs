//! Dtype equivalence policy.
//!
//! Dtypes are compared as strings. The only normalization is that the text
//! aliases `object`, `str` and `string` form one class.

/// Dtype names treated as plain text.
pub const TEXT_DTYPES: [&str; 3] = ["object", "str", "string"];

/// Dtype names treated as categorical-like besides the text aliases.
pub const CATEGORICAL_DTYPES: [&str; 3] = ["category", "bool", "boolean"];

/// Canonical name of the text class.
pub const CANONICAL_TEXT: &str = "string";

/// Returns true if the dtype is one of the text aliases.
pub fn is_text(dtype: &str) -> bool {
    TEXT_DTYPES.contains(&dtype)
}

/// Maps a dtype to its equivalence-class representative.
pub fn canonical_dtype(dtype: &str) -> &str {
    if is_text(dtype) { CANONICAL_TEXT } else { dtype }
}

/// Returns true if two dtypes belong to the same class.
pub fn dtypes_equivalent(left: &str, right: &str) -> bool {
    canonical_dtype(left) == canonical_dtype(right)
}

/// Returns true for dtypes whose columns get an allowed-value set on inference.
pub fn is_categorical_like(dtype: &str) -> bool {
    is_text(dtype) || CATEGORICAL_DTYPES.contains(&dtype)
}
