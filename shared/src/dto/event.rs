//! # Card Event Payload
//!
//! The card talks to its host only through a fire-and-forget DOM event named
//! [`BUTTON_EVENT`] whose `detail` is a [`CardEvent`]. The host correlates the
//! event back to its asset.

use serde::{Deserialize, Serialize};

use crate::button::ButtonKind;

/// Name of the DOM event dispatched by the card.
pub const BUTTON_EVENT: &str = "button-event";

/// Action tag carried in the event's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardAction {
    /// Trait panel toggle.
    Flip,
    View,
    Buy,
    Manage,
    SwitchNetwork,
    Unlock,
}

impl CardAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardAction::Flip => "flip",
            CardAction::View => "view",
            CardAction::Buy => "buy",
            CardAction::Manage => "manage",
            CardAction::SwitchNetwork => "switchNetwork",
            CardAction::Unlock => "unlock",
        }
    }
}

impl From<ButtonKind> for CardAction {
    fn from(kind: ButtonKind) -> Self {
        match kind {
            ButtonKind::Buy => CardAction::Buy,
            ButtonKind::Manage => CardAction::Manage,
            ButtonKind::SwitchNetwork => CardAction::SwitchNetwork,
            ButtonKind::Unlock => CardAction::Unlock,
            ButtonKind::View => CardAction::View,
        }
    }
}

/// `detail` of the `button-event` CustomEvent: `{ "type": "<action>" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEvent {
    #[serde(rename = "type")]
    pub action: CardAction,
}

impl CardEvent {
    pub fn new(action: CardAction) -> Self {
        Self { action }
    }
}
