//! FX ticker line.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use crate::{Error, Result};

pub const USD_RATES_URL: &str = "https://api.frankfurter.app/latest?from=USD&to=PLN,UAH";
pub const EUR_RATES_URL: &str = "https://api.frankfurter.app/latest?from=EUR&to=USD";

pub const LOADING_TEXT: &str = "$$$ MARKET_DATA // LOADING...";
pub const ERROR_TEXT: &str = "$$$ MARKET_DATA // CONNECTION ERROR // RETRYING...";

/// The three pairs shown on the ticker.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FxRates {
    pub usd_pln: f64,
    pub usd_uah: f64,
    pub eur_usd: f64,
}

#[derive(Debug, Deserialize)]
struct RatesPayload {
    rates: HashMap<String, f64>,
}

impl RatesPayload {
    fn rate(&self, currency: &'static str) -> Result<f64> {
        self.rates.get(currency).copied().ok_or(Error::MissingField(currency))
    }
}

impl FxRates {
    /// Decode the two frankfurter responses: USD→PLN,UAH and EUR→USD.
    pub fn from_frankfurter(usd_body: &str, eur_body: &str) -> Result<Self> {
        let usd: RatesPayload = serde_json::from_str(usd_body)?;
        let eur: RatesPayload = serde_json::from_str(eur_body)?;
        Ok(Self { usd_pln: usd.rate("PLN")?, usd_uah: usd.rate("UAH")?, eur_usd: eur.rate("USD")? })
    }

    pub fn ticker_text(&self) -> String {
        format!(
            "$$$ MARKET_DATA // 1 USD = [{:.2}] PLN // 1 USD = [{:.2}] UAH // 1 EUR = [{:.2}] USD",
            self.usd_pln, self.usd_uah, self.eur_usd
        )
    }
}

/// Ticker text for a fetch outcome: `None` while loading, the rates line on
/// success and the retry banner on any failure.
pub fn ticker_text(outcome: Option<&Result<FxRates>>) -> String {
    match outcome {
        None => LOADING_TEXT.to_string(),
        Some(Ok(rates)) => rates.ticker_text(),
        Some(Err(err)) => {
            warn!(target: "meridian::ticker", %err, "ticker falling back");
            ERROR_TEXT.to_string()
        }
    }
}
