use leptos::prelude::*;

/// Button with a "primary" (default) or "secondary" variant
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Large buttons for the main form action
    #[prop(optional)]
    large: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        _ => "button--primary",
    };
    let size_class = if large { "button--large" } else { "" };
    let button_id = move || id.get().unwrap_or_default();
    let button_title = move || title.get().unwrap_or_default();

    view! {
        <button
            type="button"
            id=button_id
            title=button_title
            class=move || format!("button {} {}", variant_class(), size_class)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
