use serde::{Deserialize, Serialize};

/// Desired delivery window (optional on the form)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    Urgent,
    Normal,
    Flexible,
}

impl Timeline {
    pub fn code(&self) -> &'static str {
        match self {
            Timeline::Urgent => "Urgent_moins_1_semaine",
            Timeline::Normal => "Normal_1_4_semaines",
            Timeline::Flexible => "Flexible_1_3_mois",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Timeline::Urgent => "Urgent (< 1 semaine)",
            Timeline::Normal => "Normal (1-4 semaines)",
            Timeline::Flexible => "Flexible (1-3 mois)",
        }
    }

    pub fn message_label(&self) -> &'static str {
        match self {
            Timeline::Urgent => "Urgent < 1 semaine",
            Timeline::Normal => "Normal 1-4 semaines",
            Timeline::Flexible => "Flexible 1-3 mois",
        }
    }

    pub fn all() -> Vec<Timeline> {
        vec![Timeline::Urgent, Timeline::Normal, Timeline::Flexible]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_resolve_back() {
        for timeline in Timeline::all() {
            assert_eq!(Timeline::from_code(timeline.code()), Some(timeline));
        }
        assert_eq!(Timeline::from_code("Urgent"), None);
    }

    #[test]
    fn test_message_labels() {
        assert_eq!(Timeline::Urgent.message_label(), "Urgent < 1 semaine");
        assert_eq!(Timeline::Normal.message_label(), "Normal 1-4 semaines");
        assert_eq!(Timeline::Flexible.message_label(), "Flexible 1-3 mois");
    }
}
