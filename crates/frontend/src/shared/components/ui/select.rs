use leptos::prelude::*;

/// Select component with label support
#[component]
pub fn Select(
    /// Label text
    #[prop(optional)]
    label: &'static str,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    options: Vec<(&'static str, &'static str)>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID and name of the select element
    id: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {(!label.is_empty()).then(|| view! {
                <label class="form__label" for=id>
                    {label}
                </label>
            })}
            <select
                id=id
                name=id
                class="form__select"
                required=required
                aria-required=required.to_string()
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {options
                    .into_iter()
                    .map(|(val, label)| {
                        let is_selected = move || value.get() == val;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
