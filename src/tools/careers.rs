//! Careers tool implementation
//!
//! Stores a job application, same surfaced-failure contract as the
//! contact form.

use crate::cli::CareersArgs;
use crate::clients::forms::CareerApplication;
use crate::error::{validate_email, AppError};
use crate::state::SiteState;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct CareersResponse {
    pub stored: bool,
    pub position: String,
}

pub async fn execute_careers(
    args: &CareersArgs,
    state: &SiteState,
) -> Result<CareersResponse, AppError> {
    if args.name.trim().is_empty() {
        return Err(AppError::InvalidInput("Name is required".to_string()));
    }
    validate_email(&args.email)?;
    if args.position.trim().is_empty() {
        return Err(AppError::InvalidInput("Position is required".to_string()));
    }
    if args.cover_letter.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Cover letter is required".to_string(),
        ));
    }

    let application = CareerApplication {
        name: args.name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        position: args.position.clone(),
        cover_letter: args.cover_letter.clone(),
    };

    state.forms().save_career_application(&application).await?;
    info!("Career application stored for position '{}'", args.position);

    Ok(CareersResponse {
        stored: true,
        position: args.position.clone(),
    })
}

pub fn format_careers_outcome(response: &CareersResponse) -> String {
    format!(
        "Application received for '{}'. Our team will be in touch if there is a fit.\n",
        response.position
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_missing_position_is_invalid() {
        let state = SiteState::new(Config::default());
        let args = CareersArgs {
            name: "Applicant".to_string(),
            email: "applicant@example.com".to_string(),
            phone: None,
            position: " ".to_string(),
            cover_letter: "Experienced chef".to_string(),
        };
        let err = execute_careers(&args, &state).await.unwrap_err();
        assert_eq!(err.error_code(), "invalid_input");
    }
}
