//! Inquire tool implementation
//!
//! Resolves the property and room, prices the stay, determines whether
//! the party makes this a custom inquiry, then submits through the
//! chosen channel.

use crate::catalog::{self, MealPlan};
use crate::cli::InquireArgs;
use crate::error::AppError;
use crate::inquiry::{self, Channel, Contact, Inquiry, InquiryOutcome};
use crate::pricing::{build_quote, Currency, PaymentMethod};
use crate::state::SiteState;
use serde::Serialize;

use super::parse_date;

#[derive(Debug, Clone, Serialize)]
pub struct InquiryResponse {
    pub hotel: String,
    pub room: Option<String>,
    pub is_custom: bool,
    pub quoted_price: String,
    pub outcome: InquiryOutcome,
}

pub async fn execute_inquire(
    args: &InquireArgs,
    state: &SiteState,
) -> Result<InquiryResponse, AppError> {
    let meal_plan: MealPlan = args.meal_plan.parse()?;
    let currency: Currency = args.currency.parse()?;
    let payment: PaymentMethod = args.payment.parse()?;
    let channel: Channel = args.channel.parse()?;

    let hotel = catalog::hotel_by_slug(&args.hotel)
        .ok_or_else(|| AppError::NotFound(format!("No property with slug '{}'", args.hotel)))?;

    let room = match &args.room {
        Some(id) => Some(hotel.room_by_id(id).ok_or_else(|| {
            AppError::NotFound(format!("No room '{}' at {}", id, hotel.name))
        })?),
        None => None,
    };

    // A roomless inquiry is a custom request by definition
    let is_custom = room
        .map(|r| r.is_custom_for(args.adults, args.children))
        .unwrap_or(true);

    let quoted_price = match room {
        Some(room) => {
            build_quote(
                room.base_price(meal_plan),
                meal_plan,
                currency,
                payment,
                &state.currency,
            )
            .total
        }
        None => "Not specified".to_string(),
    };

    let inquiry = Inquiry {
        hotel_name: hotel.name.clone(),
        room_name: room.map(|r| r.name.clone()),
        check_in: parse_date(args.check_in.as_deref(), "check-in")?,
        check_out: parse_date(args.check_out.as_deref(), "check-out")?,
        adults: args.adults,
        children: args.children,
        meal_plan,
        payment_method: payment,
        quoted_price: quoted_price.clone(),
        is_custom,
        contact: Contact {
            name: args.name.clone(),
            email: args.email.clone(),
            phone: args.phone.clone(),
        },
    };

    let outcome = inquiry::submit(
        &inquiry,
        channel,
        &state.forms(),
        &state.mailer(),
        &state.config.whatsapp_number,
    )
    .await?;

    Ok(InquiryResponse {
        hotel: hotel.name.clone(),
        room: inquiry.room_name.clone(),
        is_custom,
        quoted_price,
        outcome,
    })
}

pub fn format_inquiry_outcome(response: &InquiryResponse) -> String {
    let mut md = String::new();

    match &response.outcome {
        InquiryOutcome::EmailSent { mail_relayed } => {
            md.push_str("Inquiry sent successfully!\n");
            md.push_str("Our team will get back to you shortly.\n");
            if !mail_relayed {
                md.push_str("(The notification mail could not be relayed; the inquiry itself is stored.)\n");
            }
        }
        InquiryOutcome::WhatsappReady { url } => {
            md.push_str("Open this link to send your inquiry via WhatsApp:\n\n");
            md.push_str(url);
            md.push('\n');
        }
    }

    if response.is_custom {
        md.push_str(
            "\nThis is a custom inquiry: the guest selection exceeds the standard room \
             capacity, so our team will review it for special arrangements.\n",
        );
    }

    md
}
