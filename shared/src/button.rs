//! # Action Button Selection
//!
//! Picks the card's action button from the host's [`ViewState`]. Rules are
//! evaluated top-down, first match wins:
//!
//! | Condition | Kind |
//! |-----------|------|
//! | no wallet provider | [`ButtonKind::View`] |
//! | provider locked | [`ButtonKind::Unlock`] |
//! | network mismatch | [`ButtonKind::SwitchNetwork`] |
//! | asset owned by the account | [`ButtonKind::Manage`] |
//! | otherwise | [`ButtonKind::Buy`] |
//!
//! In [`ButtonMode::Static`] the selector is bypassed and the card always
//! shows the Buy label while reporting a `view` action.

use serde::{Deserialize, Serialize};

use crate::config::ButtonMode;
use crate::constants::{
    BTN_TEXT_BUY, BTN_TEXT_MANAGE, BTN_TEXT_SWITCH_NETWORK, BTN_TEXT_UNLOCK, BTN_TEXT_VIEW,
    SWITCH_NETWORK_STYLE,
};
use crate::dto::{CardAction, Network, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonKind {
    Buy,
    Manage,
    SwitchNetwork,
    Unlock,
    View,
}

impl ButtonKind {
    /// Fixed label for this kind. `SwitchNetwork` still needs the network appended,
    /// see [`button_label`].
    pub fn base_label(&self) -> &'static str {
        match self {
            ButtonKind::Buy => BTN_TEXT_BUY,
            ButtonKind::Manage => BTN_TEXT_MANAGE,
            ButtonKind::SwitchNetwork => BTN_TEXT_SWITCH_NETWORK,
            ButtonKind::Unlock => BTN_TEXT_UNLOCK,
            ButtonKind::View => BTN_TEXT_VIEW,
        }
    }
}

/// Choose the button kind for a view-state snapshot.
///
/// `owned` is the ownership of the asset by the active account as known to
/// the caller; it is only consulted once the wallet is unlocked on the
/// matching network.
pub fn select_button_kind(state: &ViewState, owned: bool) -> ButtonKind {
    if !state.has_web3 {
        return ButtonKind::View;
    }
    if !state.is_unlocked {
        return ButtonKind::Unlock;
    }
    if !state.is_matching_network {
        return ButtonKind::SwitchNetwork;
    }
    if owned {
        ButtonKind::Manage
    } else {
        ButtonKind::Buy
    }
}

/// Label shown on the button; switch-network labels name the asset's network.
pub fn button_label(kind: ButtonKind, network: Network) -> String {
    match kind {
        ButtonKind::SwitchNetwork => format!("{}{}", kind.base_label(), network.as_str()),
        _ => kind.base_label().to_string(),
    }
}

/// Everything the renderer needs to draw the action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub kind: ButtonKind,
    pub label: String,
    /// Tag reported in the `button-event` when the button is activated.
    pub action: CardAction,
}

impl ButtonSpec {
    pub fn for_mode(mode: ButtonMode, state: &ViewState, owned: bool) -> Self {
        match mode {
            ButtonMode::Static => Self {
                kind: ButtonKind::Buy,
                label: BTN_TEXT_BUY.to_string(),
                action: CardAction::View,
            },
            ButtonMode::WalletAware => {
                let kind = select_button_kind(state, owned);
                Self {
                    kind,
                    label: button_label(kind, state.network),
                    action: kind.into(),
                }
            }
        }
    }

    /// Switch-network buttons are greyed out and not clickable-looking.
    pub fn is_muted(&self) -> bool {
        self.kind == ButtonKind::SwitchNetwork
    }

    pub fn inline_style(&self) -> Option<&'static str> {
        self.is_muted().then_some(SWITCH_NETWORK_STYLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(has_web3: bool, is_unlocked: bool, is_matching_network: bool) -> ViewState {
        ViewState {
            network: Network::Rinkeby,
            has_web3,
            is_unlocked,
            is_matching_network,
            is_owned_by_account: false,
        }
    }

    #[test]
    fn test_no_provider_always_view() {
        for unlocked in [false, true] {
            for matching in [false, true] {
                for owned in [false, true] {
                    assert_eq!(
                        select_button_kind(&state(false, unlocked, matching), owned),
                        ButtonKind::View
                    );
                }
            }
        }
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(select_button_kind(&state(true, false, true), true), ButtonKind::Unlock);
        assert_eq!(select_button_kind(&state(true, true, false), true), ButtonKind::SwitchNetwork);
        assert_eq!(select_button_kind(&state(true, true, true), true), ButtonKind::Manage);
        assert_eq!(select_button_kind(&state(true, true, true), false), ButtonKind::Buy);
    }

    #[test]
    fn test_switch_network_label() {
        let label = button_label(ButtonKind::SwitchNetwork, Network::Rinkeby);
        assert_eq!(label, format!("{}{}", BTN_TEXT_SWITCH_NETWORK, "rinkeby"));
        assert!(label.ends_with("rinkeby"));
        assert_eq!(button_label(ButtonKind::Buy, Network::Rinkeby), BTN_TEXT_BUY);
    }

    #[test]
    fn test_wallet_aware_spec() {
        let spec = ButtonSpec::for_mode(ButtonMode::WalletAware, &state(true, true, false), false);
        assert_eq!(spec.kind, ButtonKind::SwitchNetwork);
        assert_eq!(spec.action, CardAction::SwitchNetwork);
        assert!(spec.label.ends_with("rinkeby"));
        assert_eq!(spec.inline_style(), Some(SWITCH_NETWORK_STYLE));
    }

    #[test]
    fn test_static_spec_ignores_state() {
        let spec = ButtonSpec::for_mode(ButtonMode::Static, &state(true, true, false), true);
        assert_eq!(spec.kind, ButtonKind::Buy);
        assert_eq!(spec.label, BTN_TEXT_BUY);
        assert_eq!(spec.action, CardAction::View);
        assert!(spec.inline_style().is_none());
    }
}
