//! Admission rules for new holdings.
//!
//! All functions here are pure. [`validate_new_holding`] applies the rules in
//! a fixed order (symbol, shares, price, duplicate) and reports the first one
//! violated, so the same bad input always yields the same error. The capacity
//! rule needs the live count and is enforced by the store.

use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

use super::holdings_model::{Holding, NewHolding};
use crate::constants::{MAX_PURCHASE_PRICE, MAX_SHARES, MAX_SYMBOL_LEN};
use crate::errors::{Result, ValidationError};
use crate::settings::SharesPolicy;

static SYMBOL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[A-Z]{{1,{}}}$", MAX_SYMBOL_LEN)).expect("symbol pattern is valid")
});

/// Canonical form of a ticker: surrounding whitespace removed, uppercased.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Normalize and check the ticker format.
pub fn validate_symbol(symbol: &str) -> Result<String> {
    let normalized = normalize_symbol(symbol);
    if !SYMBOL_PATTERN.is_match(&normalized) {
        return Err(ValidationError::InvalidSymbol(symbol.to_string()).into());
    }
    Ok(normalized)
}

pub fn validate_shares(shares: Decimal, policy: SharesPolicy) -> Result<()> {
    if shares <= Decimal::ZERO {
        return Err(
            ValidationError::InvalidShares(format!("{} (must be greater than zero)", shares))
                .into(),
        );
    }
    if shares > Decimal::from(MAX_SHARES) {
        return Err(ValidationError::InvalidShares(format!(
            "{} (must not exceed {})",
            shares, MAX_SHARES
        ))
        .into());
    }
    if policy == SharesPolicy::ExactlyOne && shares != Decimal::ONE {
        return Err(ValidationError::InvalidShares(format!(
            "{} (each holding must be exactly 1 share)",
            shares
        ))
        .into());
    }
    Ok(())
}

pub fn validate_price(purchase_price: Decimal) -> Result<()> {
    if purchase_price <= Decimal::ZERO {
        return Err(ValidationError::InvalidPrice(format!(
            "{} (must be greater than zero)",
            purchase_price
        ))
        .into());
    }
    if purchase_price > Decimal::from(MAX_PURCHASE_PRICE) {
        return Err(ValidationError::InvalidPrice(format!(
            "{} (must not exceed {})",
            purchase_price, MAX_PURCHASE_PRICE
        ))
        .into());
    }
    Ok(())
}

/// Validate a candidate against the rules and the current holdings.
///
/// Returns the candidate in canonical form (uppercase symbol, trimmed name)
/// ready to be stored.
pub fn validate_new_holding(
    candidate: &NewHolding,
    existing: &[Holding],
    policy: SharesPolicy,
) -> Result<NewHolding> {
    let symbol = validate_symbol(&candidate.symbol)?;
    validate_shares(candidate.shares, policy)?;
    validate_price(candidate.purchase_price)?;

    if existing.iter().any(|h| h.symbol == symbol) {
        return Err(ValidationError::DuplicateSymbol(symbol).into());
    }

    let name = candidate
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    Ok(NewHolding {
        symbol,
        name,
        shares: candidate.shares,
        purchase_price: candidate.purchase_price,
    })
}
