use serde::{Deserialize, Serialize};

/// Kind of project the visitor wants to discuss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    GraphicDesign,
    CvDocuments,
    WebDevelopment,
    DigitalCommunication,
}

impl ProjectType {
    /// Code stored in the CMS record
    pub fn code(&self) -> &'static str {
        match self {
            ProjectType::GraphicDesign => "Design_Graphique",
            ProjectType::CvDocuments => "CV _&_Documents",
            ProjectType::WebDevelopment => "Developpement_Web",
            ProjectType::DigitalCommunication => "Communication_Digitale",
        }
    }

    /// Label shown in the select control
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::GraphicDesign => "Design Graphique",
            ProjectType::CvDocuments => "CV & Documents",
            ProjectType::WebDevelopment => "Développement Web",
            ProjectType::DigitalCommunication => "Communication Digitale",
        }
    }

    /// Label used in the WhatsApp follow-up message
    pub fn message_label(&self) -> &'static str {
        match self {
            ProjectType::GraphicDesign => "Design Graphique",
            ProjectType::CvDocuments => "CV & Documents",
            ProjectType::WebDevelopment => "Developpement Web",
            ProjectType::DigitalCommunication => "Communication Digitale",
        }
    }

    pub fn all() -> Vec<ProjectType> {
        vec![
            ProjectType::GraphicDesign,
            ProjectType::CvDocuments,
            ProjectType::WebDevelopment,
            ProjectType::DigitalCommunication,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_resolve_back() {
        for project in ProjectType::all() {
            assert_eq!(ProjectType::from_code(project.code()), Some(project));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(ProjectType::from_code(""), None);
        assert_eq!(ProjectType::from_code("Sélectionnez_un_service"), None);
    }

    #[test]
    fn test_message_label_drops_separators() {
        assert_eq!(ProjectType::WebDevelopment.message_label(), "Developpement Web");
        assert!(ProjectType::all()
            .iter()
            .all(|p| !p.message_label().contains('_')));
    }
}
