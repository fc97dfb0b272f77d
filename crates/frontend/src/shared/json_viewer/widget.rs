use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const DOWNLOAD_FILE_NAME: &str = "ner_output.json";

/// Output region for a highlighted JSON document.
///
/// `html` is inserted as markup and must already be escaped. Copy and
/// download act on `raw` and are only offered while it is present.
#[component]
pub fn JsonViewer(
    /// Markup for the output region
    #[prop(into)]
    html: Signal<String>,
    /// Plain JSON text behind the markup
    #[prop(into)]
    raw: Signal<Option<String>>,
    /// Extra footer text, e.g. number of detected entities
    #[prop(into)]
    note: Signal<Option<String>>,
    #[prop(optional)]
    title: Option<String>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let handle_copy = move |_| {
        let Some(content) = raw.get_untracked() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        leptos::task::spawn_local(async move {
            let promise = clipboard.write_text(&content);
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("Clipboard write failed: {:?}", err);
            }
        });
        set_copied.set(true);

        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            set_copied.set(false);
        });
    };

    let handle_download = move |_| {
        if let Some(content) = raw.get_untracked() {
            if let Err(err) = download_json(&content) {
                log::warn!("JSON download failed: {:?}", err);
            }
        }
    };

    view! {
        <div class="json-viewer">
            <div class="json-viewer__header">
                <h3 class="json-viewer__title">
                    {title.unwrap_or_else(|| "Output".to_string())}
                </h3>
                <Show when=move || raw.with(Option::is_some)>
                    <div class="json-viewer__actions">
                        <button
                            class="button button--secondary"
                            on:click=handle_copy
                            title="Copy to clipboard"
                        >
                            {move || if copied.get() {
                                view! {
                                    <>
                                        {icon("check")}
                                        {"Copied!"}
                                    </>
                                }.into_any()
                            } else {
                                view! {
                                    <>
                                        {icon("copy")}
                                        {"Copy"}
                                    </>
                                }.into_any()
                            }}
                        </button>
                        <button
                            class="button button--secondary"
                            on:click=handle_download
                            title="Download as file"
                        >
                            {icon("download")}
                            {"Download"}
                        </button>
                    </div>
                </Show>
            </div>

            <div class="json-viewer__body">
                // rebuilt on every change so the markup replaces the old content wholesale
                {move || {
                    let markup = html.get();
                    view! { <pre id="entity-output" class="json-viewer__content" inner_html=markup></pre> }
                }}
            </div>

            {move || raw.get().map(|text| {
                let chars = text.chars().count();
                let lines = text.lines().count();
                view! {
                    <div class="json-viewer__footer">
                        {"Size: "}
                        <strong>{format!("{} chars", chars)}</strong>
                        {" | "}
                        {"Lines: "}
                        <strong>{lines}</strong>
                        {move || note.get().map(|n| view! {
                            <>
                                {" | "}
                                <strong>{n}</strong>
                            </>
                        })}
                    </div>
                }
            })}
        </div>
    }
}

fn download_json(content: &str) -> Result<(), wasm_bindgen::JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&wasm_bindgen::JsValue::from_str(content));
    let blob_property_bag = web_sys::BlobPropertyBag::new();
    blob_property_bag.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &blob_property_bag)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let link = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    link.set_href(&url);
    link.set_download(DOWNLOAD_FILE_NAME);
    link.click();
    web_sys::Url::revoke_object_url(&url)
}
