//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - For parties, a `Deserialize` update DTO (all `Option` fields) for patches

pub mod account_details;
pub mod account_group;
pub mod address;
pub mod bank_details;
pub mod contact;
pub mod master_type;
pub mod party;
pub mod party_payment_term;
pub mod party_product;
pub mod payment_term;
pub mod product;

use serde::{Deserialize, Deserializer};

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// - absent      -> `None`
/// - `null`      -> `Some(None)`
/// - a value     -> `Some(Some(value))`
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize an optional list where `null` means the same as absent.
///
/// Use with `#[serde(default, deserialize_with = "null_as_empty")]`.
pub(crate) fn null_as_empty<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
