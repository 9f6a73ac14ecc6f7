//! Quote construction: meal-plan price selection, conversion and the
//! flat card discount, with the pre-discount price kept for display.

use super::format::{format_price, UNAVAILABLE};
use super::rates::{Currency, CurrencyState};
use crate::catalog::MealPlan;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Multiplier applied for the two card payment methods (15% off)
pub const CARD_DISCOUNT: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Standard,
    Commercial,
    Hnb,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Standard => "standard",
            PaymentMethod::Commercial => "commercial",
            PaymentMethod::Hnb => "hnb",
        }
    }

    /// Label shown on inquiry summaries and notification emails
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Standard => "Standard Rate / Pay at Hotel",
            PaymentMethod::Commercial => "Commercial Bank Card (15% Off)",
            PaymentMethod::Hnb => "HNB Credit Card (15% Off)",
        }
    }

    pub fn is_discounted(&self) -> bool {
        matches!(self, PaymentMethod::Commercial | PaymentMethod::Hnb)
    }
}

impl FromStr for PaymentMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(PaymentMethod::Standard),
            "commercial" => Ok(PaymentMethod::Commercial),
            "hnb" => Ok(PaymentMethod::Hnb),
            other => Err(AppError::InvalidInput(format!(
                "Unknown payment method '{}', expected standard, commercial or hnb",
                other
            ))),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A displayable price quote
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub currency: Currency,
    pub meal_plan: MealPlan,
    pub payment_method: PaymentMethod,
    /// Base price in LKR before conversion
    pub base_lkr: u32,
    /// Final formatted price, or the placeholder when rates are pending
    pub total: String,
    /// Pre-discount formatted price, shown struck through; present only
    /// for the discounted payment methods while rates are available
    pub original: Option<String>,
    pub available: bool,
}

/// Build a quote from a room's base LKR price for the selected meal plan.
/// Rate unavailability is not an error: the quote carries the
/// placeholder and `available: false`.
pub fn build_quote(
    base_lkr: u32,
    meal_plan: MealPlan,
    currency: Currency,
    payment_method: PaymentMethod,
    state: &CurrencyState,
) -> Quote {
    match state.convert(base_lkr as f64, currency) {
        Some(converted) => {
            let (total, original) = if payment_method.is_discounted() {
                (
                    format_price(converted * CARD_DISCOUNT, currency),
                    Some(format_price(converted, currency)),
                )
            } else {
                (format_price(converted, currency), None)
            };
            Quote {
                currency,
                meal_plan,
                payment_method,
                base_lkr,
                total,
                original,
                available: true,
            }
        }
        None => Quote {
            currency,
            meal_plan,
            payment_method,
            base_lkr,
            total: UNAVAILABLE.to_string(),
            original: None,
            available: false,
        },
    }
}
