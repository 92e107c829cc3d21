//! Serde helpers for lenient service replies

use serde::{Deserialize, Deserializer};

/// Deserializes `null` the same way as an absent field.
///
/// # Errors
///
/// Fails only when the value is present, non-null and of the wrong type.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
