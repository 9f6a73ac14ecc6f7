//! Runtime configuration
//!
//! Endpoints and keys for the external collaborators, overridable through
//! the environment. Defaults point at the production services so the
//! binary works out of the box; overrides are validated as URLs where a
//! URL is expected.

use crate::error::AppError;
use url::Url;

/// Default currency-rate provider (rates are keyed off USD)
pub const DEFAULT_RATES_URL: &str =
    "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest/v1/currencies/usd.json";

/// Default WordPress REST root for the blog
pub const DEFAULT_CMS_URL: &str =
    "https://aliceblue-weasel-210326.hostingersite.com/wp-json/wp/v2";

/// Default Supabase REST root for form submissions
pub const DEFAULT_FORMS_URL: &str = "https://xebwvmjqpaitxqiijyhw.supabase.co/rest/v1";

/// Default EmailJS endpoint
pub const DEFAULT_MAIL_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Reservations WhatsApp number (digits only, country code first)
pub const DEFAULT_WHATSAPP_NUMBER: &str = "94742021777";

#[derive(Debug, Clone)]
pub struct Config {
    pub rates_url: String,
    pub cms_url: String,
    pub forms_url: String,
    pub forms_api_key: String,
    pub mail_url: String,
    pub mail_service_id: String,
    pub mail_template_id: String,
    pub mail_public_key: String,
    pub whatsapp_number: String,
    /// Bind address for server mode
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rates_url: DEFAULT_RATES_URL.to_string(),
            cms_url: DEFAULT_CMS_URL.to_string(),
            forms_url: DEFAULT_FORMS_URL.to_string(),
            forms_api_key: String::new(),
            mail_url: DEFAULT_MAIL_URL.to_string(),
            mail_service_id: "service_bi9iwvb".to_string(),
            mail_template_id: "template_piuerfs".to_string(),
            mail_public_key: "mT_76Q8nVkBYvW123".to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            listen_addr: "127.0.0.1:8787".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment on top of the defaults
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Config::default();

        if let Some(v) = env_nonempty("KAYJAY_RATES_URL") {
            config.rates_url = validated_url(&v)?;
        }
        if let Some(v) = env_nonempty("KAYJAY_CMS_URL") {
            config.cms_url = validated_url(&v)?;
        }
        if let Some(v) = env_nonempty("KAYJAY_FORMS_URL") {
            config.forms_url = validated_url(&v)?;
        }
        if let Some(v) = env_nonempty("KAYJAY_FORMS_API_KEY") {
            config.forms_api_key = v;
        }
        if let Some(v) = env_nonempty("KAYJAY_MAIL_URL") {
            config.mail_url = validated_url(&v)?;
        }
        if let Some(v) = env_nonempty("KAYJAY_MAIL_SERVICE_ID") {
            config.mail_service_id = v;
        }
        if let Some(v) = env_nonempty("KAYJAY_MAIL_TEMPLATE_ID") {
            config.mail_template_id = v;
        }
        if let Some(v) = env_nonempty("KAYJAY_MAIL_PUBLIC_KEY") {
            config.mail_public_key = v;
        }
        if let Some(v) = env_nonempty("KAYJAY_WHATSAPP_NUMBER") {
            config.whatsapp_number = v;
        }
        if let Some(v) = env_nonempty("KAYJAY_LISTEN_ADDR") {
            config.listen_addr = v;
        }

        Ok(config)
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

fn validated_url(raw: &str) -> Result<String, AppError> {
    Url::parse(raw)
        .map_err(|e| AppError::InvalidInput(format!("Invalid URL '{}': {}", raw, e)))?;
    // Keep the caller's spelling; trailing slashes matter for path joins
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.rates_url.contains("currency-api"));
        assert!(config.cms_url.ends_with("/wp/v2"));
        assert_eq!(config.whatsapp_number, "94742021777");
    }

    #[test]
    fn test_validated_url_rejects_garbage() {
        assert!(validated_url("https://example.com/api/").is_ok());
        assert!(validated_url("not a url").is_err());
    }

    #[test]
    fn test_validated_url_strips_trailing_slash() {
        assert_eq!(
            validated_url("https://example.com/api/").unwrap(),
            "https://example.com/api"
        );
    }
}
