//! Coins-E REST API endpoint constants.

/// Base URL for the Coins-E v2 API (public and trade endpoints share it).
pub const COINSE_API_URL: &str = "https://www.coins-e.com/api/v2/";

/// Resource prefixes. The first path segment of every endpoint URL.
pub mod prefix {
    /// All wallets on the account.
    pub const WALLETS: &str = "wallets";
    /// A single coin's wallet.
    pub const WALLET: &str = "wallet";
    /// A single market.
    pub const MARKET: &str = "market";
    /// All markets.
    pub const MARKETS: &str = "markets";
    /// All coins.
    pub const COINS: &str = "coins";
}

/// Method names for trade (private) API operations. Sent in the request
/// body, not the URL.
pub mod private {
    /// List all wallets.
    pub const GET_WALLETS: &str = "getwallets";
    /// Get a single wallet.
    pub const GET_WALLET: &str = "getwallet";
    /// Get a wallet's deposit address.
    pub const GET_DEPOSIT_ADDRESS: &str = "getdepositaddress";
    /// Refresh a wallet.
    pub const UPDATE_WALLET: &str = "updatewallet";
    /// Place an order.
    pub const NEW_ORDER: &str = "neworder";
    /// Get a single order.
    pub const GET_ORDER: &str = "getorder";
    /// Cancel an order.
    pub const CANCEL_ORDER: &str = "cancelorder";
    /// List orders.
    pub const LIST_ORDERS: &str = "listorders";
}

/// Final URL segments for public API operations.
pub mod public {
    /// Listing segment for markets and coins.
    pub const LIST: &str = "list";
    /// Aggregated market data segment.
    pub const DATA: &str = "data";
    /// Trade history segment.
    pub const TRADES: &str = "trades";
    /// Order book depth segment.
    pub const DEPTH: &str = "depth";
}
