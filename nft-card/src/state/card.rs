//! Card input state
//!
//! Each host-supplied input is a signal that is replaced wholesale; setting one
//! re-renders the card synchronously.

use leptos::prelude::*;
use shared::dto::{Asset, ViewState};

#[derive(Clone, Copy)]
pub struct CardState {
    pub asset: RwSignal<Option<Asset>>,
    pub view_state: RwSignal<ViewState>,
    pub is_owned_by_account: RwSignal<bool>,
    pub account: RwSignal<String>,
    pub horizontal: RwSignal<bool>,
}

impl CardState {
    pub fn new() -> Self {
        Self {
            asset: RwSignal::new(None),
            view_state: RwSignal::new(ViewState::default()),
            is_owned_by_account: RwSignal::new(false),
            account: RwSignal::new(String::new()),
            horizontal: RwSignal::new(true),
        }
    }

    pub fn set_asset(&self, asset: Option<Asset>) {
        self.asset.set(asset);
    }

    pub fn set_view_state(&self, state: ViewState) {
        self.view_state.set(state);
    }

    pub fn set_owned_by_account(&self, owned: bool) {
        self.is_owned_by_account.set(owned);
    }

    pub fn set_account(&self, account: String) {
        self.account.set(account);
    }

    pub fn set_horizontal(&self, horizontal: bool) {
        self.horizontal.set(horizontal);
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::new()
    }
}
