use serde::{Deserialize, Deserializer};

//github emits `null` for payload fields that don't apply to an event (e.g.
//`ref` on a repository CreateEvent); those must decode to zero values, not
//fail the whole page
pub(super) fn null_to_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
