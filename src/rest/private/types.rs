//! Request types for trade (private) API operations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side (buy/sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

/// Parameters for placing a new order.
///
/// Field order is the order the fields are form-encoded and signed in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceOrderParams {
    /// Whether to buy or sell.
    pub order_type: OrderSide,
    /// Price per unit, in the market's quote currency.
    pub rate: Decimal,
    /// Amount to trade, in the market's base currency.
    pub quantity: Decimal,
}

impl PlaceOrderParams {
    /// Create order parameters.
    pub fn new(order_type: OrderSide, rate: Decimal, quantity: Decimal) -> Self {
        Self {
            order_type,
            rate,
            quantity,
        }
    }
}

/// Filters for listing orders on a market.
///
/// The exchange accepts a free-form set of filter fields here, so the
/// filters are an ordered key/value list rather than a fixed struct.
/// They are form-encoded and signed in insertion order.
///
/// # Example
///
/// ```rust
/// use coinse_api_client::rest::private::ListOrdersParams;
///
/// let params = ListOrdersParams::new()
///     .filter("filter", "open")
///     .filter("limit", "50");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOrdersParams {
    filters: Vec<(String, String)>,
}

impl ListOrdersParams {
    /// Create an empty filter set (lists every order on the market).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter field.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }
}

impl Serialize for ListOrdersParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.filters.serialize(serializer)
    }
}
