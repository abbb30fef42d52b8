use leptos::prelude::*;

/// Button component with variants (primary, secondary)
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "secondary"
    #[prop(optional)]
    variant: Option<&'static str>,
    /// Additional CSS classes
    #[prop(optional)]
    class: &'static str,
    /// Button type attribute
    #[prop(optional)]
    button_type: Option<&'static str>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = match variant.unwrap_or("primary") {
        "secondary" => "button--secondary",
        _ => "button--primary",
    };

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=format!("button {} {}", variant_class, class)
            disabled=move || disabled.get()
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
