use leptos::prelude::*;

/// PageHeader component - centered title block on top of a page
#[component]
pub fn PageHeader(
    /// Page title (required)
    title: &'static str,

    /// Optional subtitle
    #[prop(optional)]
    subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1 class="page-header__title">{title}</h1>
            {subtitle.map(|s| view! {
                <p class="page-header__subtitle">{s}</p>
            })}
        </div>
    }
}
