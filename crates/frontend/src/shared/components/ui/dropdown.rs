use crate::shared::icons::icon;
use leptos::prelude::*;

/// Toggle button with a menu of items.
///
/// The button shows `label`; picking an item closes the menu and reports the
/// item text through `on_select`. The owner decides what the new label is.
#[component]
pub fn Dropdown(
    /// Text shown on the toggle button
    #[prop(into)]
    label: Signal<String>,
    /// Menu entries, in display order
    items: Vec<String>,
    #[prop(optional)]
    on_select: Option<Callback<String>>,
    /// ID for the toggle button
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let items = StoredValue::new(items);
    let toggle_id = move || id.get().unwrap_or_default();

    view! {
        <div class=move || if open.get() { "dropdown dropdown--open" } else { "dropdown" }>
            <button
                type="button"
                id=toggle_id
                class="button button--secondary dropdown__toggle"
                aria-haspopup="true"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="dropdown__label">{move || label.get()}</span>
                <span class="dropdown__caret">{icon("chevron-down")}</span>
            </button>
            <Show when=move || open.get()>
                <ul class="dropdown__menu">
                    <For
                        each=move || items.get_value()
                        key=|item| item.clone()
                        children=move |item| {
                            let picked = item.clone();
                            view! {
                                <li>
                                    <a
                                        href="#"
                                        class="dropdown__item"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            set_open.set(false);
                                            if let Some(handler) = on_select {
                                                handler.run(picked.clone());
                                            }
                                        }
                                    >
                                        {item}
                                    </a>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
