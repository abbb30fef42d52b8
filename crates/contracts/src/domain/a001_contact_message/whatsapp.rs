//! Pre-filled WhatsApp follow-up link built from a submitted form

use super::aggregate::ContactFormData;

pub const WHATSAPP_SERVICE_URL: &str = "https://wa.me";

/// Recipient phone number, international format without the leading '+'
pub const WHATSAPP_RECIPIENT: &str = "237678875895";

/// Deep link to the default recipient
pub fn generate_whatsapp_link(data: &ContactFormData) -> String {
    build_whatsapp_link(WHATSAPP_SERVICE_URL, WHATSAPP_RECIPIENT, data)
}

pub fn build_whatsapp_link(service_url: &str, recipient: &str, data: &ContactFormData) -> String {
    let text = compose_message(data);
    format!(
        "{}/{}?text={}",
        service_url.trim_end_matches('/'),
        recipient,
        urlencoding::encode(&text)
    )
}

/// Greeting sent to the recipient, one line per filled field
pub fn compose_message(data: &ContactFormData) -> String {
    let mut text = String::from(
        "Bonjour, je viens de remplir le formulaire de contact sur votre site Axiom \
         avec les informations suivantes :\n\n",
    );

    text.push_str(&format!("Nom : {}\n", data.name));
    text.push_str(&format!("Email : {}\n", data.email));
    if !data.whatsapp_number.is_empty() {
        text.push_str(&format!("Mon numéro WhatsApp : {}\n", data.whatsapp_number));
    }
    text.push_str(&format!(
        "Type de projet : {}\n",
        data.project_type.map(|p| p.message_label()).unwrap_or_default()
    ));
    if let Some(budget) = data.budget {
        text.push_str(&format!("Budget estimé : {}\n", budget.message_label()));
    }
    if let Some(timeline) = data.timeline {
        text.push_str(&format!("Délai souhaité : {}\n", timeline.message_label()));
    }
    text.push_str(&format!("Description du projet : {}\n\n", data.message));
    text.push_str("Merci !");

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{BudgetRange, ProjectType, Timeline};

    fn ana() -> ContactFormData {
        ContactFormData {
            name: "Ana".into(),
            email: "a@b.com".into(),
            project_type: Some(ProjectType::WebDevelopment),
            message: "Site vitrine".into(),
            ..Default::default()
        }
    }

    fn decoded_text(link: &str) -> String {
        let (_, encoded) = link.split_once("?text=").unwrap();
        urlencoding::decode(encoded).unwrap().into_owned()
    }

    #[test]
    fn test_link_with_required_fields_only() {
        let link = generate_whatsapp_link(&ana());

        assert!(link.starts_with("https://wa.me/237678875895?text="));
        let text = decoded_text(&link);
        assert!(text.contains("Nom : Ana\n"));
        assert!(text.contains("Email : a@b.com\n"));
        assert!(text.contains("Type de projet : Developpement Web\n"));
        assert!(text.contains("Description du projet : Site vitrine\n"));
        assert!(!text.contains("Budget"));
        assert!(!text.contains("Délai"));
        assert!(!text.contains("WhatsApp :"));
        assert!(text.ends_with("Merci !"));
    }

    #[test]
    fn test_link_with_optional_fields() {
        let data = ContactFormData {
            budget: Some(BudgetRange::FiveHundredToThousand),
            timeline: Some(Timeline::Urgent),
            whatsapp_number: "+237 6 00 00 00 00".into(),
            ..ana()
        };

        let text = decoded_text(&generate_whatsapp_link(&data));
        assert!(text.contains("Mon numéro WhatsApp : +237 6 00 00 00 00\n"));
        assert!(text.contains("Budget estimé : Entre 500€ 1000€\n"));
        assert!(text.contains("Délai souhaité : Urgent < 1 semaine\n"));

        let budget_at = text.find("Budget").unwrap();
        let timeline_at = text.find("Délai").unwrap();
        let project_at = text.find("Type de projet").unwrap();
        assert!(project_at < budget_at && budget_at < timeline_at);
    }

    #[test]
    fn test_query_is_percent_encoded() {
        let data = ContactFormData {
            message: "Boutique & blog? 100%".into(),
            ..ana()
        };
        let link = generate_whatsapp_link(&data);
        let (_, query) = link.split_once("?text=").unwrap();

        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(!query.contains('&'));
        assert!(!query.contains('?'));
        assert!(decoded_text(&link).contains("Boutique & blog? 100%"));
    }

    #[test]
    fn test_custom_recipient() {
        let link = build_whatsapp_link("https://wa.me/", "33600000000", &ana());
        assert!(link.starts_with("https://wa.me/33600000000?text="));
    }
}
