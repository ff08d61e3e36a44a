//! Validated boundary in front of the pricing engines: typed model selection,
//! input validation with structured errors, and the narrow price / greek /
//! implied-volatility interface consumed by presentation layers.

pub mod error;
pub mod valuation;

pub use error::RiskError;
pub use valuation::{GreekValue, ModelParameter, greek, implied_volatility, price, validate};
