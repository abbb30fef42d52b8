use leptos::prelude::*;

/// Input component with label support
#[component]
pub fn Input(
    /// Label text
    #[prop(optional)]
    label: &'static str,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional)]
    placeholder: &'static str,
    /// Input type: "text" (default), "email", "tel", etc.
    #[prop(optional)]
    input_type: Option<&'static str>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID and name of the input element
    id: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {(!label.is_empty()).then(|| view! {
                <label class="form__label" for=id>
                    {label}
                </label>
            })}
            <input
                id=id
                name=id
                class="form__input"
                type=input_type.unwrap_or("text")
                prop:value=move || value.get()
                placeholder=placeholder
                required=required
                aria-required=required.to_string()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
