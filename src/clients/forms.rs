//! Form-submission storage (Supabase-style REST sink)
//!
//! Inserts contact messages, booking inquiries and job applications.
//! This is the one collaborator whose failure is surfaced to the user
//! during a synchronous submit; the caller decides when to degrade.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which channel the inquiry left through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubmissionType {
    Email,
    Whatsapp,
}

/// Row for the `contact_submissions` table
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

/// Row for the `inquiry_submissions` table. Empty date strings are
/// stored as null; the table's date columns reject "".
#[derive(Debug, Clone, Serialize)]
pub struct InquirySubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub hotel_name: String,
    pub room_name: String,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub adults: u32,
    pub children: u32,
    pub meal_plan: String,
    pub is_custom_inquiry: bool,
    pub submission_type: SubmissionType,
    pub payment_method: Option<String>,
    pub final_price: Option<String>,
}

/// Row for the `career_applications` table
#[derive(Debug, Clone, Serialize)]
pub struct CareerApplication {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub position: String,
    pub cover_letter: String,
}

/// REST client for the submission store
pub struct FormsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FormsClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub async fn save_contact(&self, submission: &ContactSubmission) -> Result<(), AppError> {
        self.insert("contact_submissions", submission).await
    }

    pub async fn save_inquiry(&self, submission: &InquirySubmission) -> Result<(), AppError> {
        self.insert("inquiry_submissions", submission).await
    }

    pub async fn save_career_application(
        &self,
        application: &CareerApplication,
    ) -> Result<(), AppError> {
        self.insert("career_applications", application).await
    }

    async fn insert<T: Serialize>(&self, table: &str, row: &T) -> Result<(), AppError> {
        if self.api_key.is_empty() {
            return Err(AppError::StorageFailed(
                "Submission store is not configured".to_string(),
            ));
        }

        let url = format!("{}/{}", self.base_url, table);
        debug!("Storing submission in {}", table);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .map_err(|e| AppError::StorageFailed(format!("Submission store unreachable: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Surface the store's own message when the error body is JSON
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or_else(|| format!("Database error (code: {})", status.as_u16()));

        Err(AppError::StorageFailed(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inquiry_row_serializes_with_store_field_names() {
        let row = InquirySubmission {
            name: "Amal Perera".to_string(),
            email: "amal@example.com".to_string(),
            phone: None,
            hotel_name: "KayJay Amorea".to_string(),
            room_name: "Standard Double".to_string(),
            check_in: Some("2026-09-01".to_string()),
            check_out: None,
            adults: 2,
            children: 1,
            meal_plan: "BB".to_string(),
            is_custom_inquiry: false,
            submission_type: SubmissionType::Email,
            payment_method: Some("commercial".to_string()),
            final_price: Some("$28.22".to_string()),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["hotel_name"], "KayJay Amorea");
        assert_eq!(value["is_custom_inquiry"], false);
        assert_eq!(value["submission_type"], "EMAIL");
        // Empty date fields are serialized as null, not ""
        assert!(value["check_out"].is_null());
        assert!(value["phone"].is_null());
    }

    #[test]
    fn test_whatsapp_submission_type_casing() {
        assert_eq!(
            serde_json::to_value(SubmissionType::Whatsapp).unwrap(),
            "WHATSAPP"
        );
    }

    #[test]
    fn test_contact_row_omits_absent_optionals() {
        let row = ContactSubmission {
            name: "Guest".to_string(),
            email: "guest@example.com".to_string(),
            phone: None,
            subject: None,
            message: "Hello".to_string(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert!(value.get("phone").is_none());
        assert!(value.get("subject").is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_store_fails_as_storage_error() {
        let client = FormsClient::new(crate::http::default_client(), "https://example.com", "");
        let row = ContactSubmission {
            name: "Guest".to_string(),
            email: "guest@example.com".to_string(),
            phone: None,
            subject: None,
            message: "Hello".to_string(),
        };
        let err = client.save_contact(&row).await.unwrap_err();
        assert_eq!(err.error_code(), "storage_failed");
    }
}
