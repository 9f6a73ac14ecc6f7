//! Notification mail relay (EmailJS-compatible)
//!
//! Sends the templated inquiry notification. Best-effort by contract:
//! once the storage write succeeded, a relay failure is logged by the
//! caller and never fails the user-facing flow.

use crate::error::AppError;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a Value,
}

pub struct MailRelay {
    client: reqwest::Client,
    url: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl MailRelay {
    pub fn new(
        client: reqwest::Client,
        url: impl Into<String>,
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    /// Send one templated notification mail
    pub async fn send(&self, template_params: &Value) -> Result<(), AppError> {
        let request = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params,
        };

        debug!("Relaying notification mail via {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::MailRelayFailed(format!("Mail relay unreachable: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(AppError::MailRelayFailed(format!(
                "Mail relay returned {}: {}",
                status, body
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_send_request_wire_shape() {
        let params = json!({ "hotelName": "KayJay Amorea" });
        let request = SendRequest {
            service_id: "service_x",
            template_id: "template_y",
            user_id: "key_z",
            template_params: &params,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["service_id"], "service_x");
        assert_eq!(value["template_id"], "template_y");
        assert_eq!(value["user_id"], "key_z");
        assert_eq!(value["template_params"]["hotelName"], "KayJay Amorea");
    }
}
