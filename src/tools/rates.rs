//! Rates tool implementation
//!
//! Diagnostic view of the currency state: pending or ready, and the
//! active table when ready.

use crate::cli::RatesArgs;
use crate::pricing::{load_rates, HOME_CURRENCY, PIVOT_CURRENCY, SUPPORTED_CURRENCIES};
use crate::state::SiteState;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct RatesResponse {
    pub status: &'static str,
    pub home: &'static str,
    pub pivot: &'static str,
    pub supported: Vec<&'static str>,
    /// Per-pivot rates when the state is ready
    pub rates: Option<BTreeMap<&'static str, f64>>,
}

pub async fn execute_rates(args: &RatesArgs, state: &SiteState) -> RatesResponse {
    if args.wait && !state.currency.is_ready() {
        load_rates(&state.currency, &state.rate_provider()).await;
    }

    let rates = state.currency.snapshot().map(|table| {
        SUPPORTED_CURRENCIES
            .iter()
            .filter_map(|c| table.rate(*c).map(|r| (c.code(), r)))
            .collect()
    });

    RatesResponse {
        status: if rates.is_some() { "ready" } else { "pending" },
        home: HOME_CURRENCY.code(),
        pivot: PIVOT_CURRENCY.code(),
        supported: SUPPORTED_CURRENCIES.iter().map(|c| c.code()).collect(),
        rates,
    }
}

pub fn format_rates(response: &RatesResponse) -> String {
    let mut md = format!(
        "# Currency Rates\n\nStatus: {}\nHome: {} · Pivot: {}\n\n",
        response.status, response.home, response.pivot
    );
    match &response.rates {
        Some(rates) => {
            for (code, rate) in rates {
                md.push_str(&format!("- {} = {:.4} per {}\n", code, rate, response.pivot));
            }
        }
        None => {
            md.push_str("Rates have not loaded yet; prices render as \"...\" until they do.\n");
        }
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pricing::{CurrencyState, RateTable};

    #[tokio::test]
    async fn test_pending_state_reports_pending() {
        let state = SiteState::new(Config::default());
        let args = RatesArgs { wait: false };
        let response = execute_rates(&args, &state).await;
        assert_eq!(response.status, "pending");
        assert!(response.rates.is_none());
        assert!(format_rates(&response).contains("have not loaded yet"));
    }

    #[tokio::test]
    async fn test_ready_state_lists_all_supported_codes() {
        let mut state = SiteState::new(Config::default());
        state.currency = CurrencyState::ready(RateTable::fallback());
        let args = RatesArgs { wait: false };
        let response = execute_rates(&args, &state).await;
        assert_eq!(response.status, "ready");
        let rates = response.rates.unwrap();
        assert_eq!(rates.len(), SUPPORTED_CURRENCIES.len());
        assert_eq!(rates["LKR"], 300.0);
    }
}
