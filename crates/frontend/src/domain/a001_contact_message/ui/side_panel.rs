use crate::shared::icons::icon;
use leptos::prelude::*;

struct ContactInfo {
    icon: &'static str,
    title: &'static str,
    value: &'static str,
    description: &'static str,
    accent: &'static str,
}

const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "mail",
        title: "Email",
        value: "divantchuisseu@gmail.com",
        description: "Réponse sous 24h",
        accent: "accent--blue",
    },
    ContactInfo {
        icon: "phone",
        title: "Téléphone",
        value: "+237 6 56 48 15 31",
        description: "Lun-Ven 9h-18h",
        accent: "accent--green",
    },
    ContactInfo {
        icon: "map-pin",
        title: "Localisation",
        value: "Cameroun, Télétravail",
        description: "Projets à distance",
        accent: "accent--purple",
    },
];

const FAQS: &[(&str, &str)] = &[
    (
        "Quels sont vos délais de réalisation ?",
        "Les délais varient selon le projet : 2-5 jours pour un CV, 1-2 semaines pour du design graphique, 2-6 semaines pour un site web.",
    ),
    (
        "Proposez-vous des révisions ?",
        "Oui, chaque projet inclut 2-3 révisions gratuites selon le service. Des modifications supplémentaires peuvent être facturées.",
    ),
    (
        "Travaillez-vous avec des clients internationaux ?",
        "Absolument ! Je travaille avec des clients du monde entier, principalement en français et en anglais.",
    ),
];

#[component]
pub fn ContactInfoCard() -> impl IntoView {
    view! {
        <div class="contact-card">
            <h3 class="contact-card__subtitle">"Informations de contact"</h3>
            <div class="contact-info">
                {CONTACT_INFO
                    .iter()
                    .map(|info| view! {
                        <div class="contact-info__item">
                            <div class=format!("contact-info__icon {}", info.accent)>
                                {icon(info.icon)}
                            </div>
                            <div>
                                <h4 class="contact-info__title">{info.title}</h4>
                                <p class="contact-info__value">{info.value}</p>
                                <p class="contact-info__description">{info.description}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn FaqCard() -> impl IntoView {
    view! {
        <div class="contact-card">
            <h3 class="contact-card__subtitle">"Questions fréquentes"</h3>
            <div class="faq">
                {FAQS
                    .iter()
                    .map(|(question, answer)| view! {
                        <div class="faq__item">
                            <h4 class="faq__question">
                                {icon("message-square")}
                                {*question}
                            </h4>
                            <p class="faq__answer">{*answer}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ResponseTimeNotice() -> impl IntoView {
    view! {
        <div class="contact-card contact-card--highlight">
            <div class="response-time__header">
                {icon("clock")}
                <h3 class="response-time__title">"Temps de réponse"</h3>
            </div>
            <p class="response-time__text">
                "Je m'engage à répondre à tous les messages dans les "
                <span class="response-time__emphasis">"24 heures"</span>
                " suivant leur réception."
            </p>
        </div>
    }
}
