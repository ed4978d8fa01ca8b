//! # NFT Card Shared Library
//!
//! Everything the NFT card front decides, without a browser: the asset data
//! model it receives from the host, the price formatter, the action-button
//! selector and the [`card::CardView`] render plan. The `nft-card` crate only
//! turns a `CardView` into DOM nodes.
//!
//! ## Structure
//!
//! - **[`dto`]**: Host-facing records (`Asset`, `ViewState`, `CardEvent`)
//! - **[`format`]**: Raw amount → base denomination
//! - **[`button`]**: Wallet-aware button selection
//! - **[`card`]**: Render plan for one card front
//! - **[`config`]**: Mount options
//! - **[`error`]**: [`CardError`] and the `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use shared::card::{CardInputs, CardView};
//! use shared::config::CardConfig;
//! use shared::dto::{Asset, ViewState};
//!
//! let asset: Asset = serde_json::from_str(r#"{
//!     "name": "Cool Cat #12",
//!     "openseaLink": "https://opensea.io/assets/1",
//!     "collection": { "name": "Cool Cats", "slug": "cool-cats-nft" },
//!     "traits": [],
//!     "sellOrders": [],
//!     "lastSale": null
//! }"#).unwrap();
//!
//! let state = ViewState::default();
//! let view = CardView::build(
//!     CardInputs { asset: &asset, state: &state, is_owned_by_account: false, horizontal: true },
//!     &CardConfig::default(),
//! );
//! assert!(view.prices.is_empty());
//! assert!(!view.show_info_toggle);
//! ```

pub mod button;
pub mod card;
pub mod config;
pub mod constants;
pub mod dto;
pub mod error;
pub mod format;

pub use error::{CardError, Result};
