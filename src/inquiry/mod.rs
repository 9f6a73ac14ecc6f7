//! Booking inquiry flow
//!
//! An inquiry is a non-binding availability request routed to the
//! reservations team, not a reservation. Two channels exist: email
//! (storage write surfaced, notification mail best-effort) and WhatsApp
//! (storage write best-effort, deep link returned to the caller).

use crate::catalog::MealPlan;
use crate::clients::forms::{InquirySubmission, SubmissionType};
use crate::clients::{FormsClient, MailRelay};
use crate::error::{validate_email, validate_guests, validate_stay_dates, AppError};
use crate::pricing::PaymentMethod;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Whatsapp,
}

impl std::str::FromStr for Channel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "email" => Ok(Channel::Email),
            "whatsapp" => Ok(Channel::Whatsapp),
            other => Err(AppError::InvalidInput(format!(
                "Unknown channel '{}', expected email or whatsapp",
                other
            ))),
        }
    }
}

/// Guest contact details collected on the inquiry form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A complete booking inquiry ready for submission
#[derive(Debug, Clone)]
pub struct Inquiry {
    pub hotel_name: String,
    pub room_name: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub adults: u32,
    pub children: u32,
    pub meal_plan: MealPlan,
    pub payment_method: PaymentMethod,
    /// Formatted quote carried through from the price engine
    pub quoted_price: String,
    /// Guest count exceeds the room's standard capacity
    pub is_custom: bool,
    pub contact: Contact,
}

/// What the submission produced, per channel
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InquiryOutcome {
    /// Stored and (best-effort) mailed to the reservations team
    EmailSent { mail_relayed: bool },
    /// Stored best-effort; the caller opens the returned link
    WhatsappReady { url: String },
}

impl Inquiry {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.contact.name.trim().is_empty() {
            return Err(AppError::InvalidInput("Name is required".to_string()));
        }
        validate_email(&self.contact.email)?;
        validate_guests(self.adults)?;
        validate_stay_dates(self.check_in, self.check_out)?;
        Ok(())
    }

    fn check_in_label(&self) -> String {
        self.check_in
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "Not specified".to_string())
    }

    fn check_out_label(&self) -> String {
        self.check_out
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "Not specified".to_string())
    }

    /// The pre-filled WhatsApp chat message
    pub fn whatsapp_message(&self) -> String {
        let mut message = format!(
            "*New Inquiry - Kayjay Hotels*\n\n\
             Hello, I would like to inquire about the following booking:\n\n\
             *Property:* {}",
            self.hotel_name
        );

        if let Some(room) = &self.room_name {
            message.push_str(&format!("\n*Room:* {}", room));
        }

        message.push_str(&format!(
            "\n*Check-in:* {}\n*Check-out:* {}\n*Guests:* {} Adults, {} Children",
            self.check_in_label(),
            self.check_out_label(),
            self.adults,
            self.children
        ));

        message.push_str(&format!("\n*Meal Plan:* {}", self.meal_plan.code()));

        match self.payment_method {
            PaymentMethod::Standard => {
                message.push_str("\n*Payment Method:* Standard Rate");
            }
            PaymentMethod::Commercial => {
                message.push_str("\n*Payment Method:* Commercial Bank Credit Card (15% Off)");
            }
            PaymentMethod::Hnb => {
                message.push_str("\n*Payment Method:* HNB Credit Card (15% Off)");
            }
        }
        message.push_str(&format!("\n*Quoted Price:* {}", self.quoted_price));

        let custom_note = if self.is_custom {
            "\n\n(Note: This is a custom inquiry as guest count exceeds standard room capacity.)"
        } else {
            ""
        };

        message.push_str(&format!(
            "\n\nPlease let me know about availability and pricing.{}\n\n\
             *My Details:*\nName: {}\nEmail: {}\nPhone: {}\n\nThank you.",
            custom_note,
            non_empty_or(&self.contact.name, "..."),
            non_empty_or(&self.contact.email, "..."),
            non_empty_or(self.contact.phone.as_deref().unwrap_or(""), "...")
        ));

        message
    }

    /// Deep link opening a chat with the reservations number
    pub fn whatsapp_url(&self, phone_number: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            phone_number,
            urlencoding::encode(&self.whatsapp_message())
        )
    }

    fn to_submission(&self, channel: Channel) -> InquirySubmission {
        InquirySubmission {
            name: self.contact.name.clone(),
            email: self.contact.email.clone(),
            phone: self.contact.phone.clone(),
            hotel_name: self.hotel_name.clone(),
            room_name: self.room_name.clone().unwrap_or_default(),
            check_in: self.check_in.map(|d| d.format(DATE_FORMAT).to_string()),
            check_out: self.check_out.map(|d| d.format(DATE_FORMAT).to_string()),
            adults: self.adults,
            children: self.children,
            meal_plan: self.meal_plan.code().to_string(),
            is_custom_inquiry: self.is_custom,
            submission_type: match channel {
                Channel::Email => SubmissionType::Email,
                Channel::Whatsapp => SubmissionType::Whatsapp,
            },
            payment_method: Some(self.payment_method.code().to_string()),
            final_price: Some(self.quoted_price.clone()),
        }
    }

    /// Template parameters for the notification mail
    pub fn mail_params(&self) -> Value {
        json!({
            "name": self.contact.name,
            "email": self.contact.email,
            "phone": self.contact.phone.clone().unwrap_or_default(),
            "hotelName": self.hotel_name,
            "roomName": self.room_name.clone().unwrap_or_default(),
            "checkIn": self.check_in_label(),
            "checkOut": self.check_out_label(),
            "adults": self.adults.to_string(),
            "children": self.children.to_string(),
            "mealPlan": self.meal_plan.code(),
            "paymentMethod": self.payment_method.label(),
            "finalPrice": self.quoted_price,
            "time": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            "custom_inquiry_note": if self.is_custom {
                "This is a custom inquiry as the number of guests exceeds the standard room capacity."
            } else {
                ""
            },
        })
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Submit an inquiry through the chosen channel.
///
/// Email: the storage write is the synchronous step and its failure is
/// surfaced as retryable; the notification mail is detached best-effort.
/// WhatsApp: storage is best-effort and the deep link always comes back.
pub async fn submit(
    inquiry: &Inquiry,
    channel: Channel,
    forms: &FormsClient,
    mailer: &MailRelay,
    whatsapp_number: &str,
) -> Result<InquiryOutcome, AppError> {
    inquiry.validate()?;

    match channel {
        Channel::Email => {
            forms.save_inquiry(&inquiry.to_submission(channel)).await?;

            let mail_relayed = match mailer.send(&inquiry.mail_params()).await {
                Ok(()) => true,
                Err(e) => {
                    warn!("Notification mail failed, inquiry already stored: {}", e);
                    false
                }
            };

            info!("Inquiry stored for {} (email channel)", inquiry.hotel_name);
            Ok(InquiryOutcome::EmailSent { mail_relayed })
        }
        Channel::Whatsapp => {
            if let Err(e) = forms.save_inquiry(&inquiry.to_submission(channel)).await {
                warn!("Storage failed for WhatsApp inquiry, proceeding to chat: {}", e);
            }
            Ok(InquiryOutcome::WhatsappReady {
                url: inquiry.whatsapp_url(whatsapp_number),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inquiry() -> Inquiry {
        Inquiry {
            hotel_name: "KayJay Amorea".to_string(),
            room_name: Some("Standard Double".to_string()),
            check_in: NaiveDate::parse_from_str("2026-09-01", DATE_FORMAT).ok(),
            check_out: NaiveDate::parse_from_str("2026-09-04", DATE_FORMAT).ok(),
            adults: 2,
            children: 1,
            meal_plan: MealPlan::Bb,
            payment_method: PaymentMethod::Commercial,
            quoted_price: "$28.22".to_string(),
            is_custom: false,
            contact: Contact {
                name: "Amal Perera".to_string(),
                email: "amal@example.com".to_string(),
                phone: None,
            },
        }
    }

    #[test]
    fn test_validation_requires_name_and_email() {
        let mut inquiry = sample_inquiry();
        inquiry.contact.name = "  ".to_string();
        assert!(inquiry.validate().is_err());

        let mut inquiry = sample_inquiry();
        inquiry.contact.email = "not-an-email".to_string();
        assert!(inquiry.validate().is_err());

        assert!(sample_inquiry().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_inverted_dates() {
        let mut inquiry = sample_inquiry();
        std::mem::swap(&mut inquiry.check_in, &mut inquiry.check_out);
        assert!(inquiry.validate().is_err());
    }

    #[test]
    fn test_whatsapp_message_contents() {
        let message = sample_inquiry().whatsapp_message();
        assert!(message.starts_with("*New Inquiry - Kayjay Hotels*"));
        assert!(message.contains("*Property:* KayJay Amorea"));
        assert!(message.contains("*Room:* Standard Double"));
        assert!(message.contains("*Check-in:* 2026-09-01"));
        assert!(message.contains("*Guests:* 2 Adults, 1 Children"));
        assert!(message.contains("*Meal Plan:* BB"));
        assert!(message.contains("*Payment Method:* Commercial Bank Credit Card (15% Off)"));
        assert!(message.contains("*Quoted Price:* $28.22"));
        assert!(message.contains("Name: Amal Perera"));
        assert!(message.ends_with("Thank you."));
    }

    #[test]
    fn test_whatsapp_message_fallbacks() {
        let mut inquiry = sample_inquiry();
        inquiry.room_name = None;
        inquiry.check_in = None;
        inquiry.check_out = None;
        inquiry.payment_method = PaymentMethod::Standard;
        inquiry.is_custom = true;

        let message = inquiry.whatsapp_message();
        assert!(!message.contains("*Room:*"));
        assert!(message.contains("*Check-in:* Not specified"));
        assert!(message.contains("*Payment Method:* Standard Rate"));
        assert!(message.contains("custom inquiry as guest count exceeds"));
        assert!(message.contains("Phone: ..."));
    }

    #[test]
    fn test_whatsapp_url_is_percent_encoded() {
        let url = sample_inquiry().whatsapp_url("94742021777");
        assert!(url.starts_with("https://wa.me/94742021777?text="));
        assert!(!url.contains(' '), "spaces must be percent-encoded");
        assert!(!url.contains('\n'), "newlines must be percent-encoded");
        assert!(url.contains("%2A"), "asterisks are reserved and encoded");
    }

    #[test]
    fn test_submission_row_carries_channel_and_codes() {
        let row = sample_inquiry().to_submission(Channel::Whatsapp);
        assert_eq!(row.submission_type, SubmissionType::Whatsapp);
        assert_eq!(row.meal_plan, "BB");
        assert_eq!(row.payment_method.as_deref(), Some("commercial"));
        assert_eq!(row.check_in.as_deref(), Some("2026-09-01"));
    }

    #[test]
    fn test_mail_params_use_display_labels() {
        let params = sample_inquiry().mail_params();
        assert_eq!(params["paymentMethod"], "Commercial Bank Card (15% Off)");
        assert_eq!(params["checkOut"], "2026-09-04");
        assert_eq!(params["custom_inquiry_note"], "");
    }
}
