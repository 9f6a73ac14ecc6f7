//! Quote tool implementation
//!
//! Selects the room's base price by meal plan and runs it through the
//! price engine for the requested currency and payment method.

use crate::catalog::{self, MealPlan};
use crate::cli::QuoteArgs;
use crate::error::AppError;
use crate::pricing::{build_quote, Currency, PaymentMethod, Quote, UNAVAILABLE};
use crate::state::SiteState;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub hotel: String,
    pub room: String,
    pub room_id: String,
    pub capacity: String,
    pub quote: Quote,
    /// Present when a party size was given
    pub is_custom: Option<bool>,
}

pub fn execute_quote(args: &QuoteArgs, state: &SiteState) -> Result<QuoteResponse, AppError> {
    let meal_plan: MealPlan = args.meal_plan.parse()?;
    let currency: Currency = args.currency.parse()?;
    let payment: PaymentMethod = args.payment.parse()?;

    let hotel = catalog::hotel_by_slug(&args.hotel)
        .ok_or_else(|| AppError::NotFound(format!("No property with slug '{}'", args.hotel)))?;
    let room = hotel.room_by_id(&args.room).ok_or_else(|| {
        AppError::NotFound(format!(
            "No room '{}' at {}",
            args.room, hotel.name
        ))
    })?;

    let quote = build_quote(
        room.base_price(meal_plan),
        meal_plan,
        currency,
        payment,
        &state.currency,
    );

    let is_custom = match (args.adults, args.children) {
        (None, None) => None,
        (adults, children) => {
            Some(room.is_custom_for(adults.unwrap_or(1), children.unwrap_or(0)))
        }
    };

    Ok(QuoteResponse {
        hotel: hotel.name.clone(),
        room: room.name.clone(),
        room_id: room.id.clone(),
        capacity: room.capacity.clone(),
        quote,
        is_custom,
    })
}

pub fn format_quote(response: &QuoteResponse) -> String {
    let quote = &response.quote;
    let mut md = format!(
        "# {} · {}\n\n- Meal plan: {} ({})\n- Payment: {}\n",
        response.hotel,
        response.room,
        quote.meal_plan.label(),
        quote.meal_plan.code(),
        quote.payment_method.label()
    );

    if !quote.available {
        md.push_str(&format!(
            "\nTotal: {} (rates not loaded yet)\n",
            UNAVAILABLE
        ));
        return md;
    }

    match &quote.original {
        Some(original) => {
            md.push_str(&format!("\nTotal: {} (was {})\n", quote.total, original));
        }
        None => {
            md.push_str(&format!("\nTotal: {}\n", quote.total));
        }
    }

    if response.is_custom == Some(true) {
        md.push_str("\nYour selection exceeds standard capacity. This will be a custom inquiry.\n");
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pricing::{CurrencyState, RateTable};

    fn ready_state() -> SiteState {
        let mut state = SiteState::new(Config::default());
        state.currency = CurrencyState::ready(RateTable::fallback());
        state
    }

    fn args(hotel: &str, room: &str) -> QuoteArgs {
        QuoteArgs {
            hotel: hotel.to_string(),
            room: room.to_string(),
            meal_plan: "RO".to_string(),
            currency: "LKR".to_string(),
            payment: "standard".to_string(),
            adults: None,
            children: None,
        }
    }

    #[test]
    fn test_quote_selects_meal_plan_price() {
        let state = ready_state();
        let mut a = args("kayjay-amorea", "101");
        a.meal_plan = "FB".to_string();
        let response = execute_quote(&a, &state).unwrap();
        assert_eq!(response.quote.base_lkr, 13_780);
        assert_eq!(response.quote.total, "LKR 13,780");
    }

    #[test]
    fn test_quote_in_usd_with_card_discount() {
        let state = ready_state();
        let mut a = args("kayjay-amorea", "101");
        a.currency = "USD".to_string();
        a.payment = "hnb".to_string();
        let response = execute_quote(&a, &state).unwrap();
        assert_eq!(response.quote.total, "$28.22");
        assert_eq!(response.quote.original.as_deref(), Some("$33.20"));

        let md = format_quote(&response);
        assert!(md.contains("$28.22 (was $33.20)"));
    }

    #[test]
    fn test_pending_rates_render_placeholder() {
        let state = SiteState::new(Config::default());
        let mut a = args("kayjay-amorea", "101");
        a.currency = "EUR".to_string();
        let response = execute_quote(&a, &state).unwrap();
        assert!(!response.quote.available);
        assert!(format_quote(&response).contains("rates not loaded yet"));
    }

    #[test]
    fn test_party_size_sets_custom_flag() {
        let state = ready_state();
        let mut a = args("kayjay-amorea", "101");
        a.adults = Some(2);
        let response = execute_quote(&a, &state).unwrap();
        assert_eq!(response.is_custom, Some(true), "single room, two adults");

        let mut a = args("kayjay-amorea", "102");
        a.adults = Some(2);
        a.children = Some(1);
        let response = execute_quote(&a, &state).unwrap();
        assert_eq!(response.is_custom, Some(false));
    }

    #[test]
    fn test_unknown_room_is_not_found() {
        let state = ready_state();
        let err = execute_quote(&args("kayjay-amorea", "999"), &state).unwrap_err();
        assert_eq!(err.error_code(), "not_found");
    }

    #[test]
    fn test_bad_currency_is_invalid_input() {
        let state = ready_state();
        let mut a = args("kayjay-amorea", "101");
        a.currency = "BTC".to_string();
        assert_eq!(
            execute_quote(&a, &state).unwrap_err().error_code(),
            "invalid_input"
        );
    }
}
