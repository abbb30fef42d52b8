use serde::{Deserialize, Serialize};

use super::aggregate::ContactFormData;

// ============================================================================
// Create request
// ============================================================================

/// Body of the create-record call; the CMS expects the record under `data`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateContactMessageRequest {
    pub data: ContactMessageDto,
}

/// Contact message as the CMS collection names its fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessageDto {
    pub fullname: String,
    pub email: String,
    #[serde(rename = "projectType")]
    pub project_type: String,
    #[serde(rename = "estimatedBudget")]
    pub estimated_budget: String,
    #[serde(rename = "desiredDeadline")]
    pub desired_deadline: String,
    pub message: String,
    #[serde(rename = "whatsappNumber")]
    pub whatsapp_number: String,
}

impl From<&ContactFormData> for ContactMessageDto {
    fn from(form: &ContactFormData) -> Self {
        Self {
            fullname: form.name.clone(),
            email: form.email.clone(),
            project_type: form
                .project_type
                .map(|p| p.code().to_string())
                .unwrap_or_default(),
            estimated_budget: form
                .budget
                .map(|b| b.code().to_string())
                .unwrap_or_default(),
            desired_deadline: form
                .timeline
                .map(|t| t.code().to_string())
                .unwrap_or_default(),
            message: form.message.clone(),
            whatsapp_number: form.whatsapp_number.clone(),
        }
    }
}

impl From<&ContactFormData> for CreateContactMessageRequest {
    fn from(form: &ContactFormData) -> Self {
        Self { data: form.into() }
    }
}

// ============================================================================
// Error body
// ============================================================================

/// Error envelope returned by the CMS on a rejected request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CmsErrorResponse {
    #[serde(default)]
    pub error: Option<CmsErrorDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CmsErrorDetail {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl CmsErrorResponse {
    /// Server-supplied message, if the body carries a non-empty one
    pub fn parse_message(body: &str) -> Option<String> {
        serde_json::from_str::<CmsErrorResponse>(body)
            .ok()?
            .error?
            .message
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{ProjectType, Timeline};
    use serde_json::json;

    #[test]
    fn test_request_field_mapping() {
        let form = ContactFormData {
            name: "Ana".into(),
            email: "a@b.com".into(),
            project_type: Some(ProjectType::WebDevelopment),
            message: "Site vitrine".into(),
            budget: None,
            timeline: Some(Timeline::Normal),
            whatsapp_number: "+237 600000000".into(),
        };

        let body = serde_json::to_value(CreateContactMessageRequest::from(&form)).unwrap();
        assert_eq!(
            body,
            json!({
                "data": {
                    "fullname": "Ana",
                    "email": "a@b.com",
                    "projectType": "Developpement_Web",
                    "estimatedBudget": "",
                    "desiredDeadline": "Normal_1_4_semaines",
                    "message": "Site vitrine",
                    "whatsappNumber": "+237 600000000"
                }
            })
        );
    }

    #[test]
    fn test_parse_error_message() {
        let body = r#"{"data":null,"error":{"status":400,"name":"ValidationError","message":"email must be a valid email"}}"#;
        assert_eq!(
            CmsErrorResponse::parse_message(body).as_deref(),
            Some("email must be a valid email")
        );
    }

    #[test]
    fn test_parse_error_message_absent() {
        assert_eq!(CmsErrorResponse::parse_message(""), None);
        assert_eq!(CmsErrorResponse::parse_message("<html>502</html>"), None);
        assert_eq!(CmsErrorResponse::parse_message(r#"{"error":{}}"#), None);
        assert_eq!(CmsErrorResponse::parse_message(r#"{"error":{"message":""}}"#), None);
        assert_eq!(CmsErrorResponse::parse_message(r#"{"message":"x"}"#), None);
    }
}
