//! Market data models
//!
//! - `types` - Type aliases for common identifiers (ProviderId, Currency)
//! - `quote` - Latest quote for a single symbol

mod quote;
mod types;

pub use quote::Quote;
pub use types::{Currency, ProviderId};
