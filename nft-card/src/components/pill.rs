use leptos::prelude::*;

/// Rounded badge with an optional leading icon
#[component]
pub fn Pill(
    /// Badge text
    #[prop(into)]
    label: String,
    /// Icon shown before the label
    #[prop(optional, into)]
    image_url: MaybeProp<String>,
    #[prop(optional, into)]
    text_color: MaybeProp<String>,
    /// CSS border shorthand
    #[prop(optional, into)]
    border: MaybeProp<String>,
    #[prop(optional, into)]
    background_color: MaybeProp<String>,
) -> impl IntoView {
    let style = move || {
        let mut style = String::new();
        if let Some(color) = text_color.get() {
            style.push_str(&format!("color: {};", color));
        }
        if let Some(border) = border.get() {
            style.push_str(&format!("border: {};", border));
        }
        if let Some(background) = background_color.get() {
            style.push_str(&format!("background-color: {};", background));
        }
        style
    };

    view! {
        <span class="pill" style=style>
            {move || image_url.get().map(|url| view! { <img src=url alt=""/> })}
            <span class="pill-label">{label}</span>
        </span>
    }
}
