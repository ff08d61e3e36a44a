use crate::common::models::{DerivativeParameter, OptionSide};
use probability::distribution::{Continuous, Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub(crate) fn pdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(d)
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;

    fn price(params: &Self::Params, side: OptionSide) -> f64 {
        match side {
            OptionSide::Call => Self::call(params),
            OptionSide::Put => Self::put(params),
        }
    }
}

/// Price sensitivities with respect to the model inputs. Delta, theta and rho
/// come as a (call, put) pair; gamma and vega are shared by both sides.
pub trait OptionGreeks: OptionPrice {
    fn delta(params: &Self::Params) -> (f64, f64);
    fn gamma(params: &Self::Params) -> f64;
    fn vega(params: &Self::Params) -> f64;
    fn theta(params: &Self::Params) -> (f64, f64);
    fn rho(params: &Self::Params) -> (f64, f64);
}

/// European Put and Call option prices for stocks, with a continuous dividend yield.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
///
/// Degenerate inputs (vola <= 0 or expiration <= 0) leave d1/d2 undefined; every
/// dependent price and greek is NaN then. That is a defined state, not an error.
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    /// The (d1, d2) values of the pricing formulas, or (NaN, NaN) when undefined.
    pub fn d(dp: &DerivativeParameter) -> (f64, f64) {
        if dp.vola <= 0.0 || dp.time_to_expiration <= 0.0 {
            return (f64::NAN, f64::NAN);
        }
        let sigma_exp = dp.vola * dp.time_to_expiration.sqrt();
        let d1 = ((dp.asset_price / dp.strike).ln()
            + (dp.rfr - dp.dividend_yield + dp.vola.powi(2) / 2.0) * dp.time_to_expiration)
            / sigma_exp;
        (d1, d1 - sigma_exp)
    }
}

impl OptionPrice for BlackScholesMerton {
    type Params = DerivativeParameter;

    fn call(dp: &DerivativeParameter) -> f64 {
        let (d1, d2) = Self::d(dp);
        if d1.is_nan() {
            return f64::NAN;
        }
        cdf(d1) * dp.asset_price * dp.dividend_discount() - cdf(d2) * dp.strike * dp.rate_discount()
    }

    fn put(dp: &DerivativeParameter) -> f64 {
        let (d1, d2) = Self::d(dp);
        if d1.is_nan() {
            return f64::NAN;
        }
        cdf(-d2) * dp.strike * dp.rate_discount() - cdf(-d1) * dp.asset_price * dp.dividend_discount()
    }
}

impl OptionGreeks for BlackScholesMerton {
    fn delta(dp: &DerivativeParameter) -> (f64, f64) {
        let (d1, _) = Self::d(dp);
        if d1.is_nan() {
            return (f64::NAN, f64::NAN);
        }
        let call_delta = dp.dividend_discount() * cdf(d1);
        (call_delta, dp.dividend_discount() * (cdf(d1) - 1.0))
    }

    fn gamma(dp: &DerivativeParameter) -> f64 {
        let (d1, _) = Self::d(dp);
        if d1.is_nan() {
            return f64::NAN;
        }
        pdf(d1) * dp.dividend_discount()
            / (dp.asset_price * dp.vola * dp.time_to_expiration.sqrt())
    }

    fn vega(dp: &DerivativeParameter) -> f64 {
        let (d1, _) = Self::d(dp);
        if d1.is_nan() {
            return f64::NAN;
        }
        dp.asset_price * dp.dividend_discount() * pdf(d1) * dp.time_to_expiration.sqrt()
    }

    /// Both thetas are per year; day-count scaling for display is the caller's business.
    fn theta(dp: &DerivativeParameter) -> (f64, f64) {
        let (d1, d2) = Self::d(dp);
        if d1.is_nan() {
            return (f64::NAN, f64::NAN);
        }
        let time_decay = -dp.asset_price * dp.dividend_discount() * pdf(d1) * dp.vola
            / (2.0 * dp.time_to_expiration.sqrt());
        let call_theta = time_decay - dp.rfr * dp.strike * dp.rate_discount() * cdf(d2)
            + dp.dividend_yield * dp.asset_price * dp.dividend_discount() * cdf(d1);
        let put_theta = time_decay + dp.rfr * dp.strike * dp.rate_discount() * cdf(-d2)
            - dp.dividend_yield * dp.asset_price * dp.dividend_discount() * cdf(-d1);
        (call_theta, put_theta)
    }

    fn rho(dp: &DerivativeParameter) -> (f64, f64) {
        let (_, d2) = Self::d(dp);
        if d2.is_nan() {
            return (f64::NAN, f64::NAN);
        }
        let discounted_strike = dp.strike * dp.time_to_expiration * dp.rate_discount();
        (discounted_strike * cdf(d2), -discounted_strike * cdf(-d2))
    }
}
