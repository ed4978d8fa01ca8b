//! Embeddable NFT Card Front
//!
//! Host pages mount a card with [`NftCard::mount`] and feed it inputs through
//! the setters. Clicks come back as `button-event` DOM events.
//!
//! ```text
//! const card = NftCard.mount(document.getElementById("card"), { buttonMode: "walletAware" });
//! card.setState({ hasWeb3: true, isUnlocked: true, isMatchingNetwork: true, network: "main" });
//! card.setAsset(asset);
//! element.addEventListener("button-event", (e) => console.log(e.detail.type));
//! ```

use std::any::Any;

use leptos::prelude::*;
use shared::config::CardConfig;
use shared::dto::{Asset, ViewState};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub mod components;
pub mod events;
pub mod interop;
pub mod state;

use components::NftCardFront;
use interop::{decode_optional, decode_options, to_js_error};
use state::card::CardState;

#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("nft-card loaded");
}

/// A card front mounted into a host element.
#[wasm_bindgen]
pub struct NftCard {
    state: CardState,
    // Dropping the handle unmounts the card and disposes its owner.
    _mounted: Box<dyn Any>,
}

#[wasm_bindgen]
impl NftCard {
    /// Mount an empty card into `target`. `options` is an optional `CardConfig` object.
    pub fn mount(target: HtmlElement, options: JsValue) -> Result<NftCard, JsValue> {
        let config = CardConfig::from_json(decode_options(options)?).map_err(to_js_error)?;
        log::debug!("Mounting card with {:?}", config);

        let state = CardState::new();
        let handle = leptos::mount::mount_to(target, move || {
            view! {
                <NftCardFront
                    asset=state.asset
                    state=state.view_state
                    is_owned_by_account=state.is_owned_by_account
                    account=state.account
                    horizontal=state.horizontal
                    config=config
                />
            }
        });

        Ok(NftCard {
            state,
            _mounted: Box::new(handle),
        })
    }

    /// Replace the displayed asset; `null` clears the card.
    #[wasm_bindgen(js_name = setAsset)]
    pub fn set_asset(&self, asset: JsValue) -> Result<(), JsValue> {
        let asset = decode_optional::<Asset>(asset)?;
        self.state.set_asset(asset);
        Ok(())
    }

    /// Replace the wallet view-state; `null` resets it to "no wallet".
    #[wasm_bindgen(js_name = setState)]
    pub fn set_state(&self, state: JsValue) -> Result<(), JsValue> {
        let state = decode_optional::<ViewState>(state)?.unwrap_or_default();
        self.state.set_view_state(state);
        Ok(())
    }

    #[wasm_bindgen(js_name = setOwnedByAccount)]
    pub fn set_owned_by_account(&self, owned: bool) {
        self.state.set_owned_by_account(owned);
    }

    #[wasm_bindgen(js_name = setAccount)]
    pub fn set_account(&self, account: String) {
        self.state.set_account(account);
    }

    #[wasm_bindgen(js_name = setHorizontal)]
    pub fn set_horizontal(&self, horizontal: bool) {
        self.state.set_horizontal(horizontal);
    }

    /// Remove the card from the page.
    pub fn unmount(self) {
        log::debug!("Unmounting card");
    }
}
