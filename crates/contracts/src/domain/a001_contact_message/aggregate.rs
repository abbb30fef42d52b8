use crate::enums::{BudgetRange, ProjectType, Timeline};

// ============================================================================
// Form fields
// ============================================================================

/// Every input of the contact form, addressed by its HTML `name`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    ProjectType,
    Message,
    Budget,
    Timeline,
    WhatsappNumber,
}

impl FormField {
    /// Value of the `name`/`id` attribute of the matching input
    pub fn input_name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::ProjectType => "projectType",
            FormField::Message => "message",
            FormField::Budget => "budget",
            FormField::Timeline => "timeline",
            FormField::WhatsappNumber => "whatsappNumber",
        }
    }

    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "projectType" => Some(FormField::ProjectType),
            "message" => Some(FormField::Message),
            "budget" => Some(FormField::Budget),
            "timeline" => Some(FormField::Timeline),
            "whatsappNumber" => Some(FormField::WhatsappNumber),
            _ => None,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FormField::Name | FormField::Email | FormField::ProjectType | FormField::Message
        )
    }
}

// ============================================================================
// Form data
// ============================================================================

/// Values currently typed into the contact form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub project_type: Option<ProjectType>,
    pub message: String,
    pub budget: Option<BudgetRange>,
    pub timeline: Option<Timeline>,
    pub whatsapp_number: String,
}

impl ContactFormData {
    /// Write a raw input value into one field.
    ///
    /// Select controls hand over option codes; an unknown or empty code
    /// leaves the field unselected.
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::ProjectType => self.project_type = ProjectType::from_code(&value),
            FormField::Message => self.message = value,
            FormField::Budget => self.budget = BudgetRange::from_code(&value),
            FormField::Timeline => self.timeline = Timeline::from_code(&value),
            FormField::WhatsappNumber => self.whatsapp_number = value,
        }
    }

    /// Raw value of a field as the input control displays it
    pub fn field_value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Email => self.email.clone(),
            FormField::ProjectType => code_or_empty(self.project_type.map(|p| p.code())),
            FormField::Message => self.message.clone(),
            FormField::Budget => code_or_empty(self.budget.map(|b| b.code())),
            FormField::Timeline => code_or_empty(self.timeline.map(|t| t.code())),
            FormField::WhatsappNumber => self.whatsapp_number.clone(),
        }
    }

    /// Required fields that are still empty, in form order
    pub fn missing_required(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(FormField::Name);
        }
        if self.email.is_empty() {
            missing.push(FormField::Email);
        }
        if self.project_type.is_none() {
            missing.push(FormField::ProjectType);
        }
        if self.message.is_empty() {
            missing.push(FormField::Message);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}

fn code_or_empty(code: Option<&'static str>) -> String {
    code.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormData {
        ContactFormData {
            name: "Ana".into(),
            email: "a@b.com".into(),
            project_type: Some(ProjectType::WebDevelopment),
            message: "Site vitrine".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_input_names_round_trip() {
        for field in [
            FormField::Name,
            FormField::Email,
            FormField::ProjectType,
            FormField::Message,
            FormField::Budget,
            FormField::Timeline,
            FormField::WhatsappNumber,
        ] {
            assert_eq!(FormField::from_input_name(field.input_name()), Some(field));
        }
        assert_eq!(FormField::from_input_name("fullname"), None);
    }

    #[test]
    fn test_set_field_parses_codes() {
        let mut form = ContactFormData::default();
        form.set_field(FormField::ProjectType, "Design_Graphique".into());
        form.set_field(FormField::Budget, "Plus_de_2500E".into());
        form.set_field(FormField::Timeline, "Flexible_1_3_mois".into());

        assert_eq!(form.project_type, Some(ProjectType::GraphicDesign));
        assert_eq!(form.budget, Some(BudgetRange::OverTwentyFiveHundred));
        assert_eq!(form.timeline, Some(Timeline::Flexible));
        assert_eq!(form.field_value(FormField::Budget), "Plus_de_2500E");

        form.set_field(FormField::Budget, String::new());
        assert_eq!(form.budget, None);
        assert_eq!(form.field_value(FormField::Budget), "");
    }

    #[test]
    fn test_missing_required() {
        assert!(filled().is_complete());
        assert_eq!(
            ContactFormData::default().missing_required(),
            vec![
                FormField::Name,
                FormField::Email,
                FormField::ProjectType,
                FormField::Message
            ]
        );

        let mut form = filled();
        form.email.clear();
        assert_eq!(form.missing_required(), vec![FormField::Email]);
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut form = filled();
        form.name = "  ".into();
        assert!(form.is_complete());
    }
}
