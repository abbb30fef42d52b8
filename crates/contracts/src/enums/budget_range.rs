use serde::{Deserialize, Serialize};

/// Estimated budget bracket (optional on the form)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetRange {
    UnderFiveHundred,
    FiveHundredToThousand,
    ThousandToTwentyFiveHundred,
    OverTwentyFiveHundred,
}

impl BudgetRange {
    pub fn code(&self) -> &'static str {
        match self {
            BudgetRange::UnderFiveHundred => "Moins_de_500E",
            BudgetRange::FiveHundredToThousand => "Entre_500E_1000E",
            BudgetRange::ThousandToTwentyFiveHundred => "Entre_1000E_2500E",
            BudgetRange::OverTwentyFiveHundred => "Plus_de_2500E",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BudgetRange::UnderFiveHundred => "Moins de 500€",
            BudgetRange::FiveHundredToThousand => "500€ - 1000€",
            BudgetRange::ThousandToTwentyFiveHundred => "1000€ - 2500€",
            BudgetRange::OverTwentyFiveHundred => "Plus de 2500€",
        }
    }

    pub fn message_label(&self) -> &'static str {
        match self {
            BudgetRange::UnderFiveHundred => "Moins de 500€",
            BudgetRange::FiveHundredToThousand => "Entre 500€ 1000€",
            BudgetRange::ThousandToTwentyFiveHundred => "Entre 1000€ 2500€",
            BudgetRange::OverTwentyFiveHundred => "Plus de 2500€",
        }
    }

    pub fn all() -> Vec<BudgetRange> {
        vec![
            BudgetRange::UnderFiveHundred,
            BudgetRange::FiveHundredToThousand,
            BudgetRange::ThousandToTwentyFiveHundred,
            BudgetRange::OverTwentyFiveHundred,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|b| b.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_resolve_back() {
        for budget in BudgetRange::all() {
            assert_eq!(BudgetRange::from_code(budget.code()), Some(budget));
        }
        assert_eq!(BudgetRange::from_code(""), None);
    }

    #[test]
    fn test_message_label_uses_euro_sign() {
        assert_eq!(
            BudgetRange::ThousandToTwentyFiveHundred.message_label(),
            "Entre 1000€ 2500€"
        );
        assert!(BudgetRange::all()
            .iter()
            .all(|b| b.message_label().contains('€') && !b.message_label().contains('_')));
    }
}
