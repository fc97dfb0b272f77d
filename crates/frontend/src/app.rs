use crate::dashboards::EntityDetectionDashboard;
use crate::shared::config::DashboardConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::from_window();
    log::info!(
        "NER dashboard talking to '{}{}'",
        config.api_base,
        config.api_prefix
    );
    provide_context(config);

    view! {
        <main class="app">
            <EntityDetectionDashboard />
        </main>
    }
}
