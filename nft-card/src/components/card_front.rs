//! NFT Card Front Component
//!
//! Collection badge, asset name, price block and action button for one asset.
//! Clicks are reported to the host as a `button-event`; the card itself never
//! navigates.

use leptos::html::Div;
use leptos::prelude::*;
use log::{debug, warn};
use shared::card::{CardInputs, CardView, PriceDisplay, PriceKind, TokenMark};
use shared::config::CardConfig;
use shared::constants::{PILL_BORDER, PILL_TEXT_COLOR, PREVIOUS_PRICE_LABEL};
use shared::dto::{Asset, CardAction, CardEvent, ViewState};

use super::{InfoButton, Pill, CARD_STYLES};
use crate::events::dispatch_card_event;

#[component]
pub fn NftCardFront(
    /// Asset to display; nothing is rendered while unset
    #[prop(into)]
    asset: Signal<Option<Asset>>,
    /// Wallet/network/ownership snapshot
    #[prop(into)]
    state: Signal<ViewState>,
    #[prop(into)]
    is_owned_by_account: Signal<bool>,
    /// Active account address, only used for diagnostics
    #[prop(into)]
    account: Signal<String>,
    #[prop(into)]
    horizontal: Signal<bool>,
    #[prop(optional)]
    config: CardConfig,
) -> impl IntoView {
    let root = NodeRef::<Div>::new();
    let config = StoredValue::new(config);

    let emit = move |action: CardAction| {
        let Some(element) = root.get_untracked() else {
            warn!("Card not mounted, dropping {} event", action.as_str());
            return;
        };
        if let Err(e) = dispatch_card_event(&element, CardEvent::new(action)) {
            warn!("Failed to dispatch {} event: {:?}", action.as_str(), e);
        }
    };

    let card = move || {
        let asset = asset.get()?;
        let state = state.get();
        let view = config.with_value(|config| {
            CardView::build(
                CardInputs {
                    asset: &asset,
                    state: &state,
                    is_owned_by_account: is_owned_by_account.get(),
                    horizontal: horizontal.get(),
                },
                config,
            )
        });
        debug!(
            "Rendering card {:?} for account {:?} ({:?} button)",
            view.name,
            account.get(),
            view.button.kind
        );
        Some(view)
    };

    view! {
        <div class="nft-card-front" node_ref=root>
            {move || card().map(|view| render_card(view, emit))}
        </div>
    }
}

fn render_card<F>(view: CardView, emit: F) -> impl IntoView
where
    F: Fn(CardAction) + Copy + Send + Sync + 'static,
{
    let CardView {
        vertical,
        show_info_toggle,
        collection,
        name,
        asset_href,
        prices,
        button,
    } = view;
    let card_class = if vertical { "card-front is-vertical" } else { "card-front" };
    let button_style = button.inline_style();
    let button_action = button.action;

    view! {
        <style>{CARD_STYLES}</style>
        <div class=card_class>
            {show_info_toggle.then(|| {
                view! { <InfoButton on_flip=Callback::new(move |_: ()| emit(CardAction::Flip))/> }
            })}

            <div class="asset-details-container">
                <div class="asset-detail">
                    {collection.map(|collection| {
                        view! {
                            <div class="asset-detail-type">
                                <a class="asset-link" href=collection.href target="_blank">
                                    <Pill
                                        image_url=collection.image_url
                                        label=collection.name
                                        text_color=PILL_TEXT_COLOR.to_string()
                                        border=PILL_BORDER.to_string()
                                    />
                                </a>
                            </div>
                        }
                    })}
                </div>
                <div class="spacer"></div>
                <div class="asset-detail-name">
                    <a class="asset-link" href=asset_href.clone() target="_blank">
                        {name}
                    </a>
                </div>
                <PriceBlock href=asset_href prices=prices/>
                <div class="asset-action-buy">
                    <button
                        type="button"
                        style=button_style
                        on:click=move |_| emit(button_action)
                    >
                        {button.label}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Current and previous prices, wrapped in one link to the asset page.
#[component]
fn PriceBlock(href: String, prices: Vec<PriceDisplay>) -> impl IntoView {
    view! {
        <a class="asset-link" href=href target="_blank">
            {prices
                .into_iter()
                .map(|price| view! { <Price price=price/> })
                .collect_view()}
        </a>
    }
}

#[component]
fn Price(price: PriceDisplay) -> impl IntoView {
    let PriceDisplay { kind, mark, value, title } = price;
    let class = format!("asset-detail-price asset-detail-price-{}", kind.as_str());

    let mark = match mark {
        TokenMark::Icon(url) => view! { <img src=url alt=""/> }.into_any(),
        TokenMark::Symbol(symbol) => view! { <div class="previous-value">{symbol}</div> }.into_any(),
    };

    view! {
        <div class=class title=title>
            {(kind == PriceKind::Previous)
                .then(|| view! { <div class="previous-value">{PREVIOUS_PRICE_LABEL}</div> })}
            {mark}
            <div class="asset-detail-price-value">{value}</div>
        </div>
    }
}
