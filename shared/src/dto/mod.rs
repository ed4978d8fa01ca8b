//! # Data Transfer Objects (DTOs)
//!
//! Records exchanged with the host page. The host hands the card an [`Asset`]
//! (as produced by the marketplace client) and a [`ViewState`] snapshot; the
//! card answers with [`CardEvent`] notifications.
//!
//! ## Module Organization
//!
//! - [`asset`] - Asset, collection, trait, order and payment token records
//! - [`view_state`] - Wallet/network/ownership snapshot and [`Network`]
//! - [`event`] - Outbound `button-event` payload
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase, matching the marketplace client's objects
//!   (trait tags keep the API's snake_case)
//! - **Optional fields**: `null` or missing both map to `None` / empty
//! - **Enums**: serialize to their wire identifiers (`"rinkeby"`, `"switchNetwork"`)
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "tokenId": "12",
//!   "name": "Cool Cat #12",
//!   "openseaLink": "https://opensea.io/assets/1",
//!   "collection": { "name": "Cool Cats", "slug": "cool-cats-nft", "imageUrl": null },
//!   "traits": [],
//!   "sellOrders": [],
//!   "lastSale": null
//! }
//! ```

pub mod asset;
pub mod event;
pub mod view_state;

pub use asset::*;
pub use event::*;
pub use view_state::*;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Decode a host record from its JSON text; `null` means "not set".
///
/// Host objects are stringified before decoding so that values with a
/// `toJSON` form (BigNumber prices, dates) arrive as plain JSON.
pub fn from_host_json<T: DeserializeOwned>(json: &str) -> crate::Result<Option<T>> {
    Ok(serde_json::from_str(json)?)
}

/// Deserialize `null` as the type's default value.
///
/// The marketplace client sends `null` for empty lists (`sellOrders`, `traits`).
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
