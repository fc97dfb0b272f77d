use crate::dashboards::d100_entity_detection::api;
use crate::dashboards::d100_entity_detection::state::{
    EntityNameMode, FormField, FormState, OutputView, RequestSequence,
};
use crate::shared::components::ui::{Button, Dropdown, Input};
use crate::shared::config::DashboardConfig;
use crate::shared::icons::icon;
use crate::shared::json_viewer::JsonViewer;
use contracts::enums::EntityType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Flex, FlexAlign, FlexGap, Spinner};

/// Entity detection playground: pick a detector, fill the form, inspect the
/// raw JSON answer of the NER service.
#[component]
pub fn EntityDetectionDashboard() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_else(DashboardConfig::from_window);
    let config = StoredValue::new(config);

    let form = RwSignal::new(FormState::default());
    let output = RwSignal::new(OutputView::Empty);
    let sequence = StoredValue::new(RequestSequence::default());
    let (pending, set_pending) = signal(0usize);

    // re-render the entity-name control only when its mode flips
    let name_mode = Memo::new(move |_| form.with(FormState::name_mode));

    let type_items: Vec<String> = EntityType::all()
        .iter()
        .map(|t| t.label().to_string())
        .collect();

    let on_type_select = Callback::new(move |label: String| {
        form.set(form.get_untracked().select_entity_type(&label));
    });

    let on_name_select = Callback::new(move |label: String| {
        form.set(form.get_untracked().select_entity_name(&label));
    });

    let field_value = move |field: FormField| Signal::derive(move || form.with(|s| s.field(field)));
    let field_input = move |field: FormField| {
        Callback::new(move |value: String| {
            form.set(form.get_untracked().with_field(field, value));
        })
    };

    let on_submit = Callback::new(move |_: leptos::ev::MouseEvent| {
        let request = form.with_untracked(FormState::to_request);

        let mut tokens = sequence.get_value();
        let token = tokens.issue();
        sequence.set_value(tokens);

        let url = match config.with_value(|c| api::detection_url(c, &request)) {
            Ok(url) => url,
            Err(err) => {
                output.set(OutputView::from_result(Err(err)));
                return;
            }
        };

        log::info!(
            "Submitting detection #{} to '{}' (entity_name='{}')",
            token,
            request.path_segment,
            request.query.entity_name
        );
        set_pending.update(|n| *n += 1);

        spawn_local(async move {
            let result = api::detect(&url).await;
            set_pending.update(|n| *n = n.saturating_sub(1));

            if !sequence.with_value(|s| s.is_latest(token)) {
                log::debug!("Discarding stale detection response #{}", token);
                return;
            }
            output.set(OutputView::from_result(result));
        });
    });

    view! {
        <div id="d100_entity_detection--dashboard" class="ner-dashboard">
            <h2 class="ner-dashboard__title">"Entity Detection"</h2>

            <div class="ner-dashboard__form">
                <Flex gap=FlexGap::Large align=FlexAlign::Center>
                    <Dropdown
                        id="entity-types"
                        label=Signal::derive(move || form.with(FormState::entity_type_label))
                        items=type_items
                        on_select=on_type_select
                    />

                    <div id="entity-name-field" class="ner-dashboard__entity-name">
                        {move || match name_mode.get() {
                            EntityNameMode::Hidden => view! { <></> }.into_any(),
                            EntityNameMode::Dropdown => view! {
                                <Dropdown
                                    id="entity-names"
                                    label=Signal::derive(move || form.with(FormState::entity_name_label))
                                    items=form.with_untracked(FormState::name_options)
                                    on_select=on_name_select
                                />
                            }.into_any(),
                            EntityNameMode::FreeText => view! {
                                <Input
                                    id="entity-name-input"
                                    placeholder="Entity Name"
                                    value=field_value(FormField::EntityNameInput)
                                    on_input=field_input(FormField::EntityNameInput)
                                />
                            }.into_any(),
                        }}
                    </div>
                </Flex>

                <Input
                    id="message"
                    label="Message"
                    value=field_value(FormField::Message)
                    on_input=field_input(FormField::Message)
                />
                <Input
                    id="bot-message"
                    label="Bot Message"
                    value=field_value(FormField::BotMessage)
                    on_input=field_input(FormField::BotMessage)
                />
                <Input
                    id="structured-value"
                    label="Structured Value"
                    value=field_value(FormField::StructuredValue)
                    on_input=field_input(FormField::StructuredValue)
                />
                <Input
                    id="fallback-value"
                    label="Fallback Value"
                    value=field_value(FormField::FallbackValue)
                    on_input=field_input(FormField::FallbackValue)
                />

                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Button id="entity-submit" large=true on_click=on_submit>
                        {icon("search")}
                        {"Detect"}
                    </Button>
                    <Show when=move || { pending.get() > 0 }>
                        <Spinner />
                        <span class="ner-dashboard__pending">"Waiting for the NER service..."</span>
                    </Show>
                </Flex>
            </div>

            <JsonViewer
                title="Response".to_string()
                html=Signal::derive(move || output.with(OutputView::html))
                raw=Signal::derive(move || output.with(OutputView::raw))
                note=Signal::derive(move || output.with(OutputView::detected_note))
            />
        </div>
    }
}
