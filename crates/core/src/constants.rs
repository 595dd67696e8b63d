/// Longest ticker accepted into a portfolio
pub const MAX_SYMBOL_LEN: usize = 5;

/// Default portfolio size cap
pub const DEFAULT_MAX_HOLDINGS: usize = 5;

/// Default bound on a single quote fetch during valuation, in milliseconds
pub const DEFAULT_QUOTE_TIMEOUT_MS: u64 = 10_000;

/// Decimal places kept on derived percentages
pub const PERCENT_PRECISION: u32 = 4;

/// Largest share quantity a single holding may carry
pub const MAX_SHARES: u64 = 1_000_000_000;

/// Largest accepted purchase price per share
pub const MAX_PURCHASE_PRICE: u64 = 1_000_000_000;
