use thiserror::Error;

pub const VALIDATION_MESSAGE: &str =
    "Veuillez remplir tous les champs obligatoires marqués d'un *.";
pub const SERVER_FALLBACK_MESSAGE: &str =
    "Une erreur est survenue lors de l'envoi à Strapi. Veuillez réessayer plus tard.";
pub const TRANSPORT_FALLBACK_MESSAGE: &str =
    "Problème de connexion au serveur Strapi. Veuillez vérifier votre réseau.";

/// Why a submission attempt ended without creating a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("required fields are empty")]
    Validation,

    #[error("server rejected the message (HTTP {status})")]
    Server {
        status: u16,
        message: Option<String>,
    },

    #[error("request did not complete: {0}")]
    Transport(String),
}

impl SubmissionError {
    /// Text shown inline under the form
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Validation => VALIDATION_MESSAGE.to_string(),
            SubmissionError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            SubmissionError::Server { message: None, .. } => SERVER_FALLBACK_MESSAGE.to_string(),
            SubmissionError::Transport(_) => TRANSPORT_FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// Failure below HTTP: no response was obtained
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportFailure(pub String);

impl From<TransportFailure> for SubmissionError {
    fn from(err: TransportFailure) -> Self {
        SubmissionError::Transport(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(SubmissionError::Validation.user_message(), VALIDATION_MESSAGE);
        assert_eq!(
            SubmissionError::Server {
                status: 400,
                message: Some("X".into())
            }
            .user_message(),
            "X"
        );
        assert_eq!(
            SubmissionError::Server {
                status: 500,
                message: None
            }
            .user_message(),
            SERVER_FALLBACK_MESSAGE
        );
        assert_eq!(
            SubmissionError::from(TransportFailure("Failed to fetch".into())).user_message(),
            TRANSPORT_FALLBACK_MESSAGE
        );
    }
}
