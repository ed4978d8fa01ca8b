//! # View-State Data Transfer Objects
//!
//! Wallet, network and ownership snapshot supplied by the host on every
//! render. The card never mutates or persists it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Network an asset lives on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Main,
    Rinkeby,
}

impl Network {
    /// Wire identifier, also appended to the switch-network label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Rinkeby => "rinkeby",
        }
    }

    /// Sub-domain prefix for marketplace links (`rinkeby.` on the test network).
    pub fn host_prefix(&self) -> &'static str {
        match self {
            Network::Main => "",
            Network::Rinkeby => "rinkeby.",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wallet/network/ownership conditions used to choose the action button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewState {
    pub network: Network,
    /// A wallet provider is injected into the page.
    pub has_web3: bool,
    /// The wallet is unlocked and has granted account access.
    pub is_unlocked: bool,
    /// The wallet's active network is the asset's network.
    pub is_matching_network: bool,
    pub is_owned_by_account: bool,
}
