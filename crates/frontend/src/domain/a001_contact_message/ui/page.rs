use super::form::ContactForm;
use super::side_panel::{ContactInfoCard, FaqCard, ResponseTimeNotice};
use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="contact-page">
            <PageHeader
                title="Contactez-moi"
                subtitle="Vous avez un projet en tête ? Discutons-en ! Je suis là pour vous accompagner et transformer vos idées en réalité."
            />
            <div class="contact-page__grid">
                <div class="contact-page__main">
                    <ContactForm />
                </div>
                <aside class="contact-page__aside">
                    <ContactInfoCard />
                    <FaqCard />
                    <ResponseTimeNotice />
                </aside>
            </div>
        </section>
    }
}
