//! Currency codes, the rate table and its single-writer lifecycle
//!
//! The state starts Pending: every conversion is "unavailable" until the
//! live fetch resolves. On success the fetched rates replace the
//! fallback wholesale (supported currencies only); on any failure the
//! hardcoded fallback becomes active and the failure is only logged.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;
use tracing::{debug, info, warn};

/// Display currencies offered by the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Lkr,
    Usd,
    Eur,
    Gbp,
    Aud,
    Cad,
}

/// All base prices are authored in LKR
pub const HOME_CURRENCY: Currency = Currency::Lkr;

/// The external rate table is expressed per-USD
pub const PIVOT_CURRENCY: Currency = Currency::Usd;

pub const SUPPORTED_CURRENCIES: [Currency; 6] = [
    Currency::Lkr,
    Currency::Usd,
    Currency::Eur,
    Currency::Gbp,
    Currency::Aud,
    Currency::Cad,
];

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Lkr => "LKR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
        }
    }

    /// Symbol used in en-US currency formatting
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Lkr => "LKR",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Aud => "A$",
            Currency::Cad => "CA$",
        }
    }
}

impl FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LKR" => Ok(Currency::Lkr),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "AUD" => Ok(Currency::Aud),
            "CAD" => Ok(Currency::Cad),
            other => Err(AppError::InvalidInput(format!(
                "Unsupported currency '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Conversion rates relative to the USD pivot
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: HashMap<Currency, f64>,
}

impl RateTable {
    /// The hardcoded fallback, so prices are never blocked from rendering
    pub fn fallback() -> Self {
        let rates = HashMap::from([
            (Currency::Usd, 1.0),
            (Currency::Lkr, 300.0),
            (Currency::Eur, 0.92),
            (Currency::Gbp, 0.79),
            (Currency::Aud, 1.5),
            (Currency::Cad, 1.37),
        ]);
        Self { rates }
    }

    #[cfg(test)]
    pub fn from_rates(rates: HashMap<Currency, f64>) -> Self {
        Self { rates }
    }

    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.rates.get(&currency).copied()
    }

    /// Convert an LKR amount into the target currency through the pivot.
    /// Missing rates yield None, never zero.
    pub fn convert_from_home(&self, amount_lkr: f64, target: Currency) -> Option<f64> {
        let home_rate = self.rate(HOME_CURRENCY)?;
        let target_rate = self.rate(target)?;
        let amount_in_pivot = amount_lkr / home_rate;
        Some(amount_in_pivot * target_rate)
    }

    /// Fallback overlaid with fetched per-USD rates, for the supported
    /// currencies present in the response. Unknown codes are ignored.
    fn merged_with(fetched: &HashMap<String, f64>) -> Self {
        let mut table = Self::fallback();
        for currency in SUPPORTED_CURRENCIES {
            let code = currency.code().to_lowercase();
            if let Some(rate) = fetched.get(&code) {
                table.rates.insert(currency, *rate);
            }
        }
        table
    }
}

enum RatesStatus {
    /// The live fetch has not resolved yet; conversions are unavailable
    Pending,
    Ready(RateTable),
}

/// Process-wide currency state: many readers, one writer (the fetch
/// completion). Reset only by process restart.
pub struct CurrencyState {
    status: RwLock<RatesStatus>,
}

impl Default for CurrencyState {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyState {
    pub fn new() -> Self {
        Self {
            status: RwLock::new(RatesStatus::Pending),
        }
    }

    #[cfg(test)]
    pub fn ready(table: RateTable) -> Self {
        Self {
            status: RwLock::new(RatesStatus::Ready(table)),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.status.read().unwrap(), RatesStatus::Ready(_))
    }

    /// Convert an LKR amount; None while rates are pending or when a
    /// rate is missing from the active table.
    pub fn convert(&self, amount_lkr: f64, target: Currency) -> Option<f64> {
        match &*self.status.read().unwrap() {
            RatesStatus::Pending => None,
            RatesStatus::Ready(table) => table.convert_from_home(amount_lkr, target),
        }
    }

    /// Current table, for the diagnostics surface
    pub fn snapshot(&self) -> Option<RateTable> {
        match &*self.status.read().unwrap() {
            RatesStatus::Pending => None,
            RatesStatus::Ready(table) => Some(table.clone()),
        }
    }

    fn set_ready(&self, table: RateTable) {
        *self.status.write().unwrap() = RatesStatus::Ready(table);
    }
}

/// Wire shape of the rate provider: `{"usd": {"lkr": 299.1, ...}}`
#[derive(Debug, Deserialize)]
struct RatesResponse {
    usd: HashMap<String, f64>,
}

/// Client for the external currency-rate API
pub struct RateProvider {
    client: reqwest::Client,
    url: String,
}

impl RateProvider {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Fetch the per-USD rate map. Non-success statuses and empty
    /// payloads are errors; the caller decides how to degrade.
    pub async fn fetch(&self) -> Result<HashMap<String, f64>, AppError> {
        debug!("Fetching currency rates from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamFailed(format!(
                "Rate provider returned status {}",
                response.status()
            )));
        }

        let payload: RatesResponse = response
            .json()
            .await
            .map_err(|e| AppError::ParseFailed(format!("Invalid rates payload: {}", e)))?;

        if payload.usd.is_empty() {
            return Err(AppError::ParseFailed(
                "Rate provider returned an empty rate set".to_string(),
            ));
        }

        Ok(payload.usd)
    }
}

/// Resolve the currency state exactly once: fetched rates on success,
/// the fallback table otherwise. This is the sole writer of the state.
pub async fn load_rates(state: &CurrencyState, provider: &RateProvider) {
    match provider.fetch().await {
        Ok(fetched) => {
            info!("Live currency rates loaded ({} codes)", fetched.len());
            state.set_ready(RateTable::merged_with(&fetched));
        }
        Err(e) => {
            warn!("Failed to fetch live currency rates, using fallback: {}", e);
            state.set_ready(RateTable::fallback());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parsing() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("LKR".parse::<Currency>().unwrap(), Currency::Lkr);
        assert!("BTC".parse::<Currency>().is_err());
    }

    #[test]
    fn test_fallback_table_covers_all_supported_currencies() {
        let table = RateTable::fallback();
        for currency in SUPPORTED_CURRENCIES {
            assert!(
                table.rate(currency).is_some(),
                "fallback table must cover {}",
                currency
            );
        }
    }

    #[test]
    fn test_conversion_through_pivot() {
        let table = RateTable::fallback();
        // 9960 LKR at 300/USD is 33.2 USD
        let usd = table.convert_from_home(9_960.0, Currency::Usd).unwrap();
        assert!((usd - 33.2).abs() < 1e-9);
        // Identity: LKR to LKR returns the amount itself
        let lkr = table.convert_from_home(9_960.0, Currency::Lkr).unwrap();
        assert!((lkr - 9_960.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_rate_is_none_not_zero() {
        let table = RateTable::from_rates(HashMap::from([(Currency::Lkr, 300.0)]));
        assert_eq!(table.convert_from_home(1_000.0, Currency::Usd), None);
        // Missing home rate also yields None
        let table = RateTable::from_rates(HashMap::from([(Currency::Usd, 1.0)]));
        assert_eq!(table.convert_from_home(1_000.0, Currency::Usd), None);
    }

    #[test]
    fn test_pending_state_is_unavailable_for_every_currency() {
        let state = CurrencyState::new();
        assert!(!state.is_ready());
        for currency in SUPPORTED_CURRENCIES {
            assert_eq!(
                state.convert(9_960.0, currency),
                None,
                "pending rates must never produce a numeric value"
            );
        }
    }

    #[test]
    fn test_merge_keeps_fallback_for_absent_codes_and_ignores_unknown() {
        let fetched = HashMap::from([
            ("lkr".to_string(), 299.5),
            ("eur".to_string(), 0.9),
            ("jpy".to_string(), 151.2),
        ]);
        let table = RateTable::merged_with(&fetched);
        assert_eq!(table.rate(Currency::Lkr), Some(299.5));
        assert_eq!(table.rate(Currency::Eur), Some(0.9));
        // Codes absent from the response keep their fallback values
        assert_eq!(table.rate(Currency::Gbp), Some(0.79));
        // Unsupported codes never enter the table
        assert_eq!(table.rates.len(), SUPPORTED_CURRENCIES.len());
    }

    #[tokio::test]
    async fn test_load_rates_falls_back_on_network_failure() {
        let state = CurrencyState::new();
        let provider = RateProvider::new(
            crate::http::client_with_timeout(std::time::Duration::from_millis(50)),
            // Unroutable address: the fetch fails fast
            "http://127.0.0.1:9/usd.json",
        );
        load_rates(&state, &provider).await;
        assert!(state.is_ready(), "failure must still resolve the state");
        assert_eq!(state.snapshot().unwrap(), RateTable::fallback());
    }
}
