//! Contact tool implementation
//!
//! Stores a contact-form message. The storage write is synchronous and
//! its failure is surfaced as retryable.

use crate::cli::ContactArgs;
use crate::clients::forms::ContactSubmission;
use crate::error::{validate_email, AppError};
use crate::state::SiteState;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub stored: bool,
}

pub async fn execute_contact(
    args: &ContactArgs,
    state: &SiteState,
) -> Result<ContactResponse, AppError> {
    if args.name.trim().is_empty() {
        return Err(AppError::InvalidInput("Name is required".to_string()));
    }
    validate_email(&args.email)?;
    if args.message.trim().is_empty() {
        return Err(AppError::InvalidInput("Message is required".to_string()));
    }

    let submission = ContactSubmission {
        name: args.name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        subject: args.subject.clone(),
        message: args.message.clone(),
    };

    state.forms().save_contact(&submission).await?;
    info!("Contact message stored for {}", args.email);

    Ok(ContactResponse { stored: true })
}

pub fn format_contact_outcome(_response: &ContactResponse) -> String {
    "Thank you for your message! Our team will get back to you shortly.\n".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn args() -> ContactArgs {
        ContactArgs {
            name: "Guest".to_string(),
            email: "guest@example.com".to_string(),
            phone: None,
            subject: Some("Weddings".to_string()),
            message: "Do you host receptions?".to_string(),
        }
    }

    #[tokio::test]
    async fn test_blank_message_is_invalid() {
        let state = SiteState::new(Config::default());
        let mut a = args();
        a.message = "  ".to_string();
        let err = execute_contact(&a, &state).await.unwrap_err();
        assert_eq!(err.error_code(), "invalid_input");
    }

    #[tokio::test]
    async fn test_storage_failure_is_surfaced() {
        // Unconfigured store: the synchronous write must fail loudly
        let state = SiteState::new(Config::default());
        let err = execute_contact(&args(), &state).await.unwrap_err();
        assert_eq!(err.error_code(), "storage_failed");
    }
}
