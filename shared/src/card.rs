//! # Card View Model
//!
//! Pure derivation of everything the card front displays from one set of host
//! inputs. The Leptos component renders a [`CardView`] as-is; all branching
//! (price blocks, info toggle, button state, link targets) happens here.

use log::warn;

use crate::button::ButtonSpec;
use crate::config::CardConfig;
use crate::constants::{NATIVE_GLYPH, NATIVE_SYMBOL};
use crate::dto::{Asset, PaymentToken, PriceAmount, ViewState};
use crate::format::format_price;

/// Which price a block shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceKind {
    /// Price of the active sell order.
    Current,
    /// Price of the last completed sale.
    Previous,
}

impl PriceKind {
    /// Suffix of the block's `asset-detail-price-*` class.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceKind::Current => "current",
            PriceKind::Previous => "previous",
        }
    }
}

/// How the payment token is represented next to the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenMark {
    Icon(String),
    Symbol(String),
}

impl TokenMark {
    pub fn for_token(token: &PaymentToken) -> Self {
        match &token.image_url {
            Some(url) if !url.is_empty() => TokenMark::Icon(url.clone()),
            _ if token.symbol == NATIVE_SYMBOL => TokenMark::Symbol(NATIVE_GLYPH.to_string()),
            _ => TokenMark::Symbol(token.symbol.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDisplay {
    pub kind: PriceKind,
    pub mark: TokenMark,
    pub value: String,
    /// Tooltip for previous prices with a known sale date.
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionBadge {
    pub name: String,
    pub image_url: Option<String>,
    pub href: String,
}

/// Render plan for one card front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub vertical: bool,
    pub show_info_toggle: bool,
    /// Absent when the asset carries no collection record.
    pub collection: Option<CollectionBadge>,
    pub name: String,
    pub asset_href: String,
    /// Current price first, then previous; either may be missing.
    pub prices: Vec<PriceDisplay>,
    pub button: ButtonSpec,
}

/// Host inputs for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct CardInputs<'a> {
    pub asset: &'a Asset,
    pub state: &'a ViewState,
    pub is_owned_by_account: bool,
    pub horizontal: bool,
}

impl CardView {
    pub fn build(inputs: CardInputs<'_>, config: &CardConfig) -> Self {
        let CardInputs {
            asset,
            state,
            is_owned_by_account,
            horizontal,
        } = inputs;
        let owned = is_owned_by_account || state.is_owned_by_account;

        Self {
            vertical: !horizontal,
            show_info_toggle: asset.has_traits(),
            collection: asset.collection.as_ref().map(|collection| CollectionBadge {
                name: collection.name.clone(),
                image_url: collection.image_url.clone(),
                href: config.collection_url(state.network, &collection.slug),
            }),
            name: asset.display_name(),
            asset_href: asset.opensea_link.clone(),
            prices: price_displays(asset, config.price_precision),
            button: ButtonSpec::for_mode(config.button_mode, state, owned),
        }
    }
}

/// Price blocks for an asset, current before previous.
///
/// A sell order without a payment token, or a last sale without one, yields
/// no block. Amounts that fail to format are dropped with a warning.
pub fn price_displays(asset: &Asset, precision: Option<u32>) -> Vec<PriceDisplay> {
    let current = asset.current_order().and_then(|order| {
        let token = order.payment_token_contract.as_ref()?;
        let amount = order.current_price.clone().unwrap_or_default();
        price_display(PriceKind::Current, token, &amount, precision, None)
    });

    let previous = asset.last_sale.as_ref().and_then(|sale| {
        let token = sale.payment_token.as_ref()?;
        let title = sale
            .sold_on()
            .map(|date| format!("Last sold {}", date.format("%Y-%m-%d")));
        price_display(PriceKind::Previous, token, &sale.total_price, precision, title)
    });

    current.into_iter().chain(previous).collect()
}

fn price_display(
    kind: PriceKind,
    token: &PaymentToken,
    amount: &PriceAmount,
    precision: Option<u32>,
    title: Option<String>,
) -> Option<PriceDisplay> {
    match format_price(amount, token.decimals, precision) {
        Ok(value) => Some(PriceDisplay {
            kind,
            mark: TokenMark::for_token(token),
            value,
            title,
        }),
        Err(e) => {
            warn!("Dropping {} price ({}): {}", kind.as_str(), token.symbol, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ButtonKind;
    use crate::config::ButtonMode;
    use crate::constants::BTN_TEXT_BUY;
    use crate::dto::{CardAction, Collection, LastSale, Network, Order};

    fn token(symbol: &str, image_url: Option<&str>) -> PaymentToken {
        PaymentToken {
            symbol: symbol.to_string(),
            image_url: image_url.map(str::to_string),
            decimals: 18,
            address: None,
            name: None,
        }
    }

    fn asset() -> Asset {
        Asset {
            token_id: Some("12".to_string()),
            token_address: None,
            name: Some("Cool Cat #12".to_string()),
            opensea_link: "https://opensea.io/assets/1".to_string(),
            collection: Some(Collection {
                name: "Cool Cats".to_string(),
                slug: "cool-cats-nft".to_string(),
                image_url: None,
            }),
            traits: vec![],
            sell_orders: vec![],
            last_sale: None,
        }
    }

    fn build(asset: &Asset, state: &ViewState, config: &CardConfig) -> CardView {
        CardView::build(
            CardInputs {
                asset,
                state,
                is_owned_by_account: false,
                horizontal: true,
            },
            config,
        )
    }

    #[test]
    fn test_no_orders_no_prices() {
        assert!(price_displays(&asset(), Some(4)).is_empty());
    }

    #[test]
    fn test_current_precedes_previous() {
        let mut asset = asset();
        asset.sell_orders.push(Order {
            payment_token_contract: Some(token("ETH", None)),
            current_price: Some(PriceAmount::new("2000000000000000000")),
        });
        asset.last_sale = Some(LastSale {
            payment_token: Some(token("WETH", Some("https://img/weth.png"))),
            total_price: PriceAmount::new("1500000000000000000"),
            event_timestamp: Some("2021-03-01T12:30:00".to_string()),
        });

        let prices = price_displays(&asset, Some(4));
        assert_eq!(prices.len(), 2);

        assert_eq!(prices[0].kind, PriceKind::Current);
        assert_eq!(prices[0].mark, TokenMark::Symbol("Ξ".to_string()));
        assert_eq!(prices[0].value, "2");
        assert_eq!(prices[0].title, None);

        assert_eq!(prices[1].kind, PriceKind::Previous);
        assert_eq!(prices[1].mark, TokenMark::Icon("https://img/weth.png".to_string()));
        assert_eq!(prices[1].value, "1.5");
        assert_eq!(prices[1].title.as_deref(), Some("Last sold 2021-03-01"));
    }

    #[test]
    fn test_missing_tokens_and_prices() {
        let mut asset = asset();
        asset.sell_orders.push(Order {
            payment_token_contract: None,
            current_price: Some(PriceAmount::new("1")),
        });
        asset.last_sale = Some(LastSale {
            payment_token: None,
            total_price: PriceAmount::new("1"),
            event_timestamp: None,
        });
        assert!(price_displays(&asset, Some(4)).is_empty());

        asset.sell_orders[0] = Order {
            payment_token_contract: Some(token("DAI", None)),
            current_price: None,
        };
        let prices = price_displays(&asset, Some(4));
        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].value, "0");
        assert_eq!(prices[0].mark, TokenMark::Symbol("DAI".to_string()));
    }

    #[test]
    fn test_bad_amount_is_dropped() {
        let mut asset = asset();
        asset.sell_orders.push(Order {
            payment_token_contract: Some(token("ETH", None)),
            current_price: Some(PriceAmount::new("-1")),
        });
        asset.last_sale = Some(LastSale {
            payment_token: Some(token("ETH", None)),
            total_price: PriceAmount::new("1000000000000000000"),
            event_timestamp: None,
        });

        let prices = price_displays(&asset, Some(4));
        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].kind, PriceKind::Previous);
    }

    #[test]
    fn test_info_toggle_follows_traits() {
        let config = CardConfig::default();
        let state = ViewState::default();
        let mut asset = asset();
        assert!(!build(&asset, &state, &config).show_info_toggle);

        asset.traits.push(crate::dto::Trait {
            trait_type: "fur".to_string(),
            value: serde_json::json!("blue"),
            trait_count: Some(120),
        });
        assert!(build(&asset, &state, &config).show_info_toggle);
    }

    #[test]
    fn test_static_card() {
        let view = build(&asset(), &ViewState::default(), &CardConfig::default());

        assert_eq!(view.name, "Cool Cat #12");
        assert_eq!(view.asset_href, "https://opensea.io/assets/1");
        assert_eq!(
            view.collection.unwrap().href,
            "http://opensea.io/assets/cool-cats-nft"
        );
        assert!(view.prices.is_empty());
        assert!(!view.vertical);
        assert_eq!(view.button.label, BTN_TEXT_BUY);
        assert_eq!(view.button.action, CardAction::View);
    }

    #[test]
    fn test_missing_collection_omits_badge() {
        let mut asset = asset();
        asset.collection = None;

        let view = build(&asset, &ViewState::default(), &CardConfig::default());
        assert!(view.collection.is_none());
        assert_eq!(view.name, "Cool Cat #12");
        assert_eq!(view.button.label, BTN_TEXT_BUY);
    }

    #[test]
    fn test_wallet_aware_ownership_from_either_source() {
        let config = CardConfig {
            button_mode: ButtonMode::WalletAware,
            ..CardConfig::default()
        };
        let state = ViewState {
            network: Network::Rinkeby,
            has_web3: true,
            is_unlocked: true,
            is_matching_network: true,
            is_owned_by_account: false,
        };
        let asset = asset();

        assert_eq!(build(&asset, &state, &config).button.kind, ButtonKind::Buy);

        let owned_by_prop = CardView::build(
            CardInputs {
                asset: &asset,
                state: &state,
                is_owned_by_account: true,
                horizontal: false,
            },
            &config,
        );
        assert_eq!(owned_by_prop.button.kind, ButtonKind::Manage);
        assert!(owned_by_prop.vertical);
        assert_eq!(
            owned_by_prop.collection.as_ref().unwrap().href,
            "http://rinkeby.opensea.io/assets/cool-cats-nft"
        );

        let owned_by_state = ViewState {
            is_owned_by_account: true,
            ..state
        };
        assert_eq!(build(&asset, &owned_by_state, &config).button.kind, ButtonKind::Manage);
    }
}
