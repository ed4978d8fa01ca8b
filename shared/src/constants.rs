//! Display constants for the card

// Action button labels
pub const BTN_TEXT_BUY: &str = "buy this item ❯";
pub const BTN_TEXT_MANAGE: &str = "manage this item ❯";
pub const BTN_TEXT_VIEW: &str = "view on openSea ❯";
pub const BTN_TEXT_UNLOCK: &str = "unlock to purchase ❯";
pub const BTN_TEXT_SWITCH_NETWORK: &str = "switch network to ";

/// Inline style for the muted switch-network button.
pub const SWITCH_NETWORK_STYLE: &str = "background-color: rgb(183, 183, 183); cursor: not-allowed";

// Price block
pub const NATIVE_SYMBOL: &str = "ETH";
pub const NATIVE_GLYPH: &str = "Ξ";
pub const PREVIOUS_PRICE_LABEL: &str = "Prev.\u{a0}";

// Collection badge
pub const PILL_TEXT_COLOR: &str = "#828282";
pub const PILL_BORDER: &str = "1px solid #E2E6EF";

// Marketplace links
pub const DEFAULT_MARKETPLACE_SCHEME: &str = "http";
pub const DEFAULT_MARKETPLACE_HOST: &str = "opensea.io";
pub const DEFAULT_PRICE_PRECISION: u32 = 4;
