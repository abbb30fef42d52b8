use leptos::prelude::*;

/// Textarea component with label support
#[component]
pub fn Textarea(
    /// Label text
    #[prop(optional)]
    label: &'static str,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional)]
    placeholder: &'static str,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID and name of the textarea element
    id: &'static str,
) -> impl IntoView {
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <div class="form__group">
            {(!label.is_empty()).then(|| view! {
                <label class="form__label" for=id>
                    {label}
                </label>
            })}
            <textarea
                id=id
                name=id
                class="form__textarea"
                placeholder=placeholder
                required=required
                aria-required=required.to_string()
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
