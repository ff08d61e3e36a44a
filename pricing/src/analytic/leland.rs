use crate::analytic::black_scholes::{BlackScholesMerton, OptionGreeks, OptionPrice};
use crate::common::models::{DerivativeParameter, LelandParameter};
use std::f64::consts::PI;

/// Hayne Leland's transaction-cost extension of Black-Scholes-Merton.
/// Leland (1985), "Option Pricing and Replication with Transactions Costs",
/// The Journal of Finance 40(5).
///
/// Round-trip costs and discrete rehedging inflate the effective volatility:
/// sigma_adj^2 = sigma^2 * (1 + Le) with the Leland number
/// Le = sqrt(2/pi) * k / (sigma * sqrt(dt)). Pricing and greeks delegate to
/// [`BlackScholesMerton`] at the adjusted volatility; only vega needs the
/// chain rule back to the input volatility.
///
/// The Leland number divides by sigma * sqrt(dt), so sigma = 0 or a zero
/// rehedging interval is undefined (inf/NaN). Callers guard dt > 0 before
/// invoking this model; the engine itself never panics.
pub struct LelandModel;

impl LelandModel {
    /// Le = sqrt(2/pi) * k / (sigma * sqrt(dt))
    pub fn leland_number(lp: &LelandParameter) -> f64 {
        (2.0 / PI).sqrt() * lp.cost_rate / (lp.option.vola * lp.rehedge_interval.sqrt())
    }

    /// sigma_adj = sqrt(sigma^2 * (1 + Le))
    pub fn adjusted_volatility(lp: &LelandParameter) -> f64 {
        (lp.option.vola.powi(2) * (1.0 + Self::leland_number(lp))).sqrt()
    }

    /// The underlying parameter with the volatility replaced by sigma_adj.
    pub fn adjusted_parameter(lp: &LelandParameter) -> DerivativeParameter {
        lp.option.with_vola(Self::adjusted_volatility(lp))
    }

    /// d(sigma_adj)/d(sigma) = sigma * (1 + Le/2) / sigma_adj
    fn adjusted_vola_slope(lp: &LelandParameter) -> f64 {
        let le = Self::leland_number(lp);
        lp.option.vola * (1.0 + le / 2.0) / Self::adjusted_volatility(lp)
    }
}

impl OptionPrice for LelandModel {
    type Params = LelandParameter;

    fn call(lp: &LelandParameter) -> f64 {
        BlackScholesMerton::call(&Self::adjusted_parameter(lp))
    }

    fn put(lp: &LelandParameter) -> f64 {
        BlackScholesMerton::put(&Self::adjusted_parameter(lp))
    }
}

impl OptionGreeks for LelandModel {
    fn delta(lp: &LelandParameter) -> (f64, f64) {
        BlackScholesMerton::delta(&Self::adjusted_parameter(lp))
    }

    fn gamma(lp: &LelandParameter) -> f64 {
        BlackScholesMerton::gamma(&Self::adjusted_parameter(lp))
    }

    /// Sensitivity to the *input* volatility, not to sigma_adj. The plain
    /// adjusted-vol vega would silently break Newton-Raphson inversion.
    fn vega(lp: &LelandParameter) -> f64 {
        BlackScholesMerton::vega(&Self::adjusted_parameter(lp)) * Self::adjusted_vola_slope(lp)
    }

    fn theta(lp: &LelandParameter) -> (f64, f64) {
        BlackScholesMerton::theta(&Self::adjusted_parameter(lp))
    }

    fn rho(lp: &LelandParameter) -> (f64, f64) {
        BlackScholesMerton::rho(&Self::adjusted_parameter(lp))
    }
}
