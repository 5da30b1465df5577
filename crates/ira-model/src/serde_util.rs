//! Lenient field decoding for upstream JSON.

use serde::{Deserialize, Deserializer};

/// Decode a field that may be `null`, falling back to `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
