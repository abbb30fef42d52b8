use super::view_model::ContactFormViewModel;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::icons::icon;
use contracts::domain::a001_contact_message::FormField;
use contracts::shared::config::Config;
use leptos::prelude::*;

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_else(|| {
        log::warn!("Config context not found, using defaults");
        Config::default()
    });
    let vm = ContactFormViewModel::new(config);

    view! {
        <div class="contact-card">
            <h2 class="contact-card__title">"Démarrons votre projet"</h2>
            <Show
                when=move || vm.is_success()
                fallback=move || view! { <ContactFormFields vm=vm /> }
            >
                <SubmissionConfirmation vm=vm />
            </Show>
        </div>
    }
}

#[component]
fn SubmissionConfirmation(vm: ContactFormViewModel) -> impl IntoView {
    view! {
        <div class="contact-success">
            <div class="contact-success__badge">{icon("check-circle")}</div>
            <h3 class="contact-success__title">"Message envoyé !"</h3>
            <p class="contact-success__text">
                "Merci pour votre message. Je vous répondrai dans les plus brefs délais."
            </p>
            {move || vm.whatsapp_link().map(|href| view! {
                <a
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="button button--whatsapp"
                >
                    {icon("message-square-text")}
                    "Me contacter sur WhatsApp avec mes infos"
                </a>
            })}
        </div>
    }
}

#[component]
fn ContactFormFields(vm: ContactFormViewModel) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="contact-form__row">
                <Input
                    label="Nom complet *"
                    id="name"
                    value=vm.field(FormField::Name)
                    on_input=vm.on_field_input(FormField::Name)
                    placeholder="Votre nom"
                    required=true
                />
                <Input
                    label="Email *"
                    id="email"
                    input_type="email"
                    value=vm.field(FormField::Email)
                    on_input=vm.on_field_input(FormField::Email)
                    placeholder="votre@email.com"
                    required=true
                />
            </div>

            <Input
                label="Numéro WhatsApp (avec code pays)"
                id="whatsappNumber"
                input_type="tel"
                value=vm.field(FormField::WhatsappNumber)
                on_input=vm.on_field_input(FormField::WhatsappNumber)
                placeholder="+237 6XXXXXXXX"
            />

            <Select
                label="Type de projet *"
                id="projectType"
                value=vm.field(FormField::ProjectType)
                on_change=vm.on_field_input(FormField::ProjectType)
                options=ContactFormViewModel::project_type_options()
                required=true
            />

            <div class="contact-form__row">
                <Select
                    label="Budget estimé"
                    id="budget"
                    value=vm.field(FormField::Budget)
                    on_change=vm.on_field_input(FormField::Budget)
                    options=ContactFormViewModel::budget_options()
                />
                <Select
                    label="Délai souhaité"
                    id="timeline"
                    value=vm.field(FormField::Timeline)
                    on_change=vm.on_field_input(FormField::Timeline)
                    options=ContactFormViewModel::timeline_options()
                />
            </div>

            <Textarea
                label="Description du projet *"
                id="message"
                value=vm.field(FormField::Message)
                on_input=vm.on_field_input(FormField::Message)
                placeholder="Décrivez votre projet en détail..."
                rows=6
                required=true
            />

            {move || vm.error_message().map(|message| view! {
                <div class="contact-form__error" role="alert">
                    {icon("alert-circle")}
                    <span>{message}</span>
                </div>
            })}

            <Button
                button_type="submit"
                class="contact-form__submit"
                disabled=Signal::derive(move || vm.is_submitting())
            >
                {move || if vm.is_submitting() {
                    view! { "Envoi en cours..." {icon("spinner")} }.into_any()
                } else {
                    view! { "Envoyer le message" {icon("send")} }.into_any()
                }}
            </Button>
        </form>
    }
}
