//! Outbound `button-event` dispatch
//!
//! The card never calls into the host. It fires a bubbling, composed
//! `CustomEvent` whose `detail` is `{ type }` and lets the host decide.

use shared::dto::{CardEvent, BUTTON_EVENT};
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, EventTarget};

/// Dispatch `event` on `target`. Returns `false` if a listener cancelled it.
pub fn dispatch_card_event(target: &EventTarget, event: CardEvent) -> Result<bool, JsValue> {
    let detail = serde_wasm_bindgen::to_value(&event)?;

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_composed(true);
    init.set_detail(&detail);

    let custom_event = CustomEvent::new_with_event_init_dict(BUTTON_EVENT, &init)?;
    log::debug!("Dispatching {} {{ type: {} }}", BUTTON_EVENT, event.action.as_str());
    target.dispatch_event(&custom_event)
}
