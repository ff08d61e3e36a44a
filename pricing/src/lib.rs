//! Closed-form European option pricing: Black-Scholes-Merton, Leland's
//! transaction-cost adjustment, Newton-Raphson implied volatility and
//! strike/maturity surface grids.

pub mod analytic;
pub mod common;
pub mod implied;
pub mod surface;
