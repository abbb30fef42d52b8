use serde::Deserialize;

use crate::domain::a001_contact_message::whatsapp::{WHATSAPP_RECIPIENT, WHATSAPP_SERVICE_URL};
use crate::domain::a001_contact_message::{build_whatsapp_link, ContactFormData};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend: BackendConfig,
    pub whatsapp: WhatsAppConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub collection_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct WhatsAppConfig {
    pub service_url: String,
    pub recipient: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[backend]
base_url = "http://localhost:1337/api"
collection_path = "/message-de-conctacts"

[whatsapp]
service_url = "https://wa.me"
recipient = "237678875895"
"#;

impl Config {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        if config.backend.base_url.is_empty() {
            anyhow::bail!("backend.base_url must not be empty");
        }
        if config.whatsapp.recipient.is_empty() {
            anyhow::bail!("whatsapp.recipient must not be empty");
        }
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                base_url: "http://localhost:1337/api".to_string(),
                collection_path: "/message-de-conctacts".to_string(),
            },
            whatsapp: WhatsAppConfig {
                service_url: WHATSAPP_SERVICE_URL.to_string(),
                recipient: WHATSAPP_RECIPIENT.to_string(),
            },
        }
    }
}

impl BackendConfig {
    /// Full URL of the contact message collection
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.collection_path.trim_start_matches('/')
        )
    }
}

impl WhatsAppConfig {
    pub fn link_for(&self, data: &ContactFormData) -> String {
        build_whatsapp_link(&self.service_url, &self.recipient, data)
    }
}

/// Load the embedded configuration
pub fn load_config() -> anyhow::Result<Config> {
    log::info!("Using default embedded configuration");
    Config::from_toml_str(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(
            config.backend.endpoint(),
            "http://localhost:1337/api/message-de-conctacts"
        );
        assert_eq!(config.whatsapp.recipient, "237678875895");
    }

    #[test]
    fn test_embedded_config_matches_default() {
        assert_eq!(load_config().unwrap(), Config::default());
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        let backend = BackendConfig {
            base_url: "https://cms.example.com/api/".into(),
            collection_path: "contacts".into(),
        };
        assert_eq!(backend.endpoint(), "https://cms.example.com/api/contacts");
    }

    #[test]
    fn test_rejects_empty_recipient() {
        let contents = r#"
[backend]
base_url = "http://localhost:1337/api"
collection_path = "/x"

[whatsapp]
service_url = "https://wa.me"
recipient = ""
"#;
        assert!(Config::from_toml_str(contents).is_err());
    }

    #[test]
    fn test_rejects_missing_section() {
        assert!(Config::from_toml_str("[backend]\nbase_url = \"x\"\ncollection_path = \"y\"\n").is_err());
    }
}
