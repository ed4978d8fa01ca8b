//! Trait-disclosure toggle shown in the card's top-right corner.

use leptos::prelude::*;

#[component]
pub fn InfoButton(
    /// Fired when the toggle is activated
    on_flip: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="info-button"
            type="button"
            title="Show traits"
            aria-label="Show traits"
            on:click=move |_| on_flip.run(())
        >
            "i"
        </button>
    }
}
