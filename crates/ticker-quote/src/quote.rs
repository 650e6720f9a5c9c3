//! Quote values derived from price history

/// Change of the latest price against the previous session's close
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChange {
    /// Absolute change, `latest - previous_close`
    pub change: f64,
    /// Percentage change, `0.0` when the previous close is zero
    pub percent_change: f64,
}

impl PriceChange {
    /// Compute the change from `previous_close` to `latest`
    pub fn between(latest: f64, previous_close: f64) -> Self {
        let change = latest - previous_close;
        let percent_change = if previous_close == 0.0 {
            0.0
        } else {
            change / previous_close * 100.0
        };

        Self {
            change,
            percent_change,
        }
    }
}

/// Latest index quote
///
/// `latest_price` is `None` when no price could be obtained at all; `change`
/// is `None` when the price is known but the previous close is not.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quote {
    pub latest_price: Option<f64>,
    pub change: Option<PriceChange>,
}

impl Quote {
    /// A quote carrying no data, signalling a failed fetch
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Quote with a price and no change figures
    pub fn price_only(latest_price: f64) -> Self {
        Self {
            latest_price: Some(latest_price),
            change: None,
        }
    }

    /// Quote with the change computed against `previous_close`
    pub fn with_previous_close(latest_price: f64, previous_close: f64) -> Self {
        Self {
            latest_price: Some(latest_price),
            change: Some(PriceChange::between(latest_price, previous_close)),
        }
    }

    /// Whether a price was obtained
    pub fn is_available(&self) -> bool {
        self.latest_price.is_some()
    }
}
