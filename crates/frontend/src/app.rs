use crate::domain::a001_contact_message::ui::ContactPage;
use contracts::shared::config::{load_config, Config};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Failed to load configuration, using defaults: {e:#}");
        Config::default()
    });

    // Provide the configuration to the whole app via context.
    provide_context(config);

    view! {
        <ContactPage />
    }
}
