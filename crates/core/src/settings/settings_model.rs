//! Portfolio policy settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{DEFAULT_MAX_HOLDINGS, DEFAULT_QUOTE_TIMEOUT_MS};
use crate::errors::Error;

/// How many shares a single holding may carry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SharesPolicy {
    /// Any strictly positive quantity.
    #[default]
    Any,
    /// Every holding is exactly one share.
    ExactlyOne,
}

impl FromStr for SharesPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" | "" => Ok(SharesPolicy::Any),
            "exactly_one" | "exactly-one" | "one" => Ok(SharesPolicy::ExactlyOne),
            other => Err(Error::InvalidConfigValue(format!(
                "shares policy '{}' (expected 'any' or 'exactly_one')",
                other
            ))),
        }
    }
}

impl fmt::Display for SharesPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SharesPolicy::Any => write!(f, "any"),
            SharesPolicy::ExactlyOne => write!(f, "exactly_one"),
        }
    }
}

/// Policy knobs for one portfolio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSettings {
    /// Cap on the number of holdings; `None` means unbounded.
    pub max_holdings: Option<usize>,
    pub shares_policy: SharesPolicy,
    /// Bound on each quote fetch during valuation. A fetch that does not
    /// finish in time counts as failed.
    pub quote_timeout: Duration,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            max_holdings: Some(DEFAULT_MAX_HOLDINGS),
            shares_policy: SharesPolicy::Any,
            quote_timeout: Duration::from_millis(DEFAULT_QUOTE_TIMEOUT_MS),
        }
    }
}

impl PortfolioSettings {
    pub fn unbounded() -> Self {
        Self {
            max_holdings: None,
            ..Self::default()
        }
    }

    pub fn with_max_holdings(mut self, max_holdings: Option<usize>) -> Self {
        self.max_holdings = max_holdings;
        self
    }

    pub fn with_shares_policy(mut self, shares_policy: SharesPolicy) -> Self {
        self.shares_policy = shares_policy;
        self
    }

    pub fn with_quote_timeout(mut self, quote_timeout: Duration) -> Self {
        self.quote_timeout = quote_timeout;
        self
    }
}

/// Parse a holding cap: a positive integer, or `unbounded`/`none`.
pub fn parse_max_holdings(value: &str) -> Result<Option<usize>, Error> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("unbounded") || value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(Error::InvalidConfigValue(format!(
            "max holdings '{}' (expected a positive integer or 'unbounded')",
            value
        ))),
    }
}
