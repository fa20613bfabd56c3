use serde::{Deserialize, Deserializer};

pub mod content;
pub mod lang;
pub mod settings;
pub mod telegram;
pub mod tour;
pub mod tour_type;

/// Reads an explicit `null` the same way as a missing key.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
