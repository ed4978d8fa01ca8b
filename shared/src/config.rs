//! # Card Configuration
//!
//! Options the host passes when mounting a card. Every field has a default,
//! so an empty options object (or none at all) yields a working card.
//!
//! ```rust
//! use shared::config::{ButtonMode, CardConfig};
//!
//! let config: CardConfig = serde_json::from_str(r#"{ "buttonMode": "walletAware" }"#).unwrap();
//! config.validate().unwrap();
//! assert_eq!(config.button_mode, ButtonMode::WalletAware);
//! assert_eq!(config.marketplace_host, "opensea.io");
//! ```
//!
//! The configuration must pass [`CardConfig::validate`] before a card is mounted.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MARKETPLACE_HOST, DEFAULT_MARKETPLACE_SCHEME, DEFAULT_PRICE_PRECISION};
use crate::dto::Network;
use crate::error::{CardError, Result};
use crate::format::MAX_DECIMALS;

/// A precision beyond the largest token decimals cannot change the output.
const MAX_PRICE_PRECISION: u32 = MAX_DECIMALS;

/// How the action button is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonMode {
    /// Always the Buy label, reporting a `view` action.
    #[default]
    Static,
    /// Label and action follow the wallet view-state.
    WalletAware,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardConfig {
    pub button_mode: ButtonMode,

    /// Scheme for collection links.
    pub marketplace_scheme: String,

    /// Marketplace host for collection links; test networks prepend a sub-domain.
    pub marketplace_host: String,

    /// Maximum fractional digits shown in prices. `None` keeps every digit.
    pub price_precision: Option<u32>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            button_mode: ButtonMode::default(),
            marketplace_scheme: DEFAULT_MARKETPLACE_SCHEME.to_string(),
            marketplace_host: DEFAULT_MARKETPLACE_HOST.to_string(),
            price_precision: Some(DEFAULT_PRICE_PRECISION),
        }
    }
}

impl CardConfig {
    /// Parse host options; a missing or `null` options object means defaults.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        let config: CardConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.marketplace_scheme.trim().is_empty() {
            return Err(CardError::Config("marketplaceScheme must not be empty".to_string()));
        }

        if self.marketplace_host.trim().is_empty() {
            return Err(CardError::Config("marketplaceHost must not be empty".to_string()));
        }

        if let Some(precision) = self.price_precision {
            if precision > MAX_PRICE_PRECISION {
                return Err(CardError::Config(format!(
                    "pricePrecision must be at most {}, got {}",
                    MAX_PRICE_PRECISION, precision
                )));
            }
        }

        Ok(())
    }

    /// Collection listing page, e.g. `http://rinkeby.opensea.io/assets/cool-cats-nft`.
    ///
    /// The slug is percent-encoded as a single path segment.
    pub fn collection_url(&self, network: Network, slug: &str) -> String {
        format!(
            "{}://{}{}/assets/{}",
            self.marketplace_scheme,
            network.host_prefix(),
            self.marketplace_host,
            urlencoding::encode(slug)
        )
    }
}
