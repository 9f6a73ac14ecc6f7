//! Shared site state
//!
//! One immutable bundle of configuration, the HTTP client and the
//! currency state, passed explicitly to every operation. The currency
//! state is the only mutable member and has a single writer: the rate
//! fetch completion in `pricing::load_rates`.

use crate::clients::{CmsClient, FormsClient, MailRelay};
use crate::config::Config;
use crate::pricing::{CurrencyState, RateProvider};

pub struct SiteState {
    pub config: Config,
    pub currency: CurrencyState,
    pub http: reqwest::Client,
}

impl SiteState {
    pub fn new(config: Config) -> Self {
        Self {
            currency: CurrencyState::new(),
            http: crate::http::default_client(),
            config,
        }
    }

    pub fn rate_provider(&self) -> RateProvider {
        RateProvider::new(self.http.clone(), self.config.rates_url.clone())
    }

    pub fn cms(&self) -> CmsClient {
        CmsClient::new(self.http.clone(), self.config.cms_url.clone())
    }

    pub fn forms(&self) -> FormsClient {
        FormsClient::new(
            self.http.clone(),
            self.config.forms_url.clone(),
            self.config.forms_api_key.clone(),
        )
    }

    pub fn mailer(&self) -> MailRelay {
        MailRelay::new(
            self.http.clone(),
            self.config.mail_url.clone(),
            self.config.mail_service_id.clone(),
            self.config.mail_template_id.clone(),
            self.config.mail_public_key.clone(),
        )
    }
}
