//! Price engine
//!
//! Currency conversion through the USD pivot, locale-style formatting,
//! and the flat card-payment discount. All base prices are authored in
//! LKR; rates come from a fallback table until the live fetch resolves.

pub mod format;
pub mod quote;
pub mod rates;

pub use format::{format_price, UNAVAILABLE};
pub use quote::{build_quote, PaymentMethod, Quote, CARD_DISCOUNT};
pub use rates::{
    load_rates, Currency, CurrencyState, RateProvider, RateTable, HOME_CURRENCY, PIVOT_CURRENCY,
    SUPPORTED_CURRENCIES,
};
