use crate::error::RiskError;
use pricing::analytic::{BlackScholesMerton, LelandModel, OptionGreeks, OptionPrice};
use pricing::common::models::{DerivativeParameter, Greek, LelandParameter, OptionSide};
use pricing::implied::NewtonRaphson;

/// Typed model selection. Replaces string-flag dispatch: the caller decides
/// once which model applies and the parameters carry everything the engine
/// needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelParameter {
    BlackScholes(DerivativeParameter),
    Leland(LelandParameter),
}

impl ModelParameter {
    fn option(&self) -> &DerivativeParameter {
        match self {
            ModelParameter::BlackScholes(dp) => dp,
            ModelParameter::Leland(lp) => &lp.option,
        }
    }
}

/// A greek value: gamma and vega are side-independent, the others are a
/// (call, put) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GreekValue {
    Scalar(f64),
    Pair { call: f64, put: f64 },
}

fn require_finite(name: &'static str, value: f64) -> Result<(), RiskError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RiskError::InvalidParameter { name, value })
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), RiskError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(RiskError::InvalidParameter { name, value })
    }
}

/// Validates what the engines deliberately do not: positivity of spot and
/// strike, finiteness everywhere, and for Leland the division-by-zero guard
/// on the rehedging interval and volatility.
///
/// A non-positive volatility or maturity under plain Black-Scholes is *not*
/// rejected: that is the defined degenerate NaN state of the engine.
pub fn validate(model: &ModelParameter) -> Result<(), RiskError> {
    let dp = model.option();
    require_positive("asset_price", dp.asset_price)?;
    require_positive("strike", dp.strike)?;
    require_finite("time_to_expiration", dp.time_to_expiration)?;
    if dp.time_to_expiration < 0.0 {
        return Err(RiskError::InvalidParameter {
            name: "time_to_expiration",
            value: dp.time_to_expiration,
        });
    }
    require_finite("rfr", dp.rfr)?;
    require_finite("dividend_yield", dp.dividend_yield)?;
    require_finite("vola", dp.vola)?;

    if let ModelParameter::Leland(lp) = model {
        require_finite("cost_rate", lp.cost_rate)?;
        if lp.cost_rate < 0.0 {
            return Err(RiskError::InvalidParameter {
                name: "cost_rate",
                value: lp.cost_rate,
            });
        }
        require_finite("rehedge_interval", lp.rehedge_interval)?;
        // the Leland number divides by vola * sqrt(rehedge_interval)
        if lp.rehedge_interval <= 0.0 || lp.option.vola <= 0.0 {
            return Err(RiskError::ZeroDivision);
        }
    }

    Ok(())
}

/// (call, put) prices under the selected model.
pub fn price(model: &ModelParameter) -> Result<(f64, f64), RiskError> {
    validate(model)?;
    Ok(match model {
        ModelParameter::BlackScholes(dp) => {
            (BlackScholesMerton::call(dp), BlackScholesMerton::put(dp))
        }
        ModelParameter::Leland(lp) => (LelandModel::call(lp), LelandModel::put(lp)),
    })
}

fn greek_of<M: OptionGreeks>(greek: Greek, params: &M::Params) -> GreekValue {
    let pair = |(call, put): (f64, f64)| GreekValue::Pair { call, put };
    match greek {
        Greek::Delta => pair(M::delta(params)),
        Greek::Gamma => GreekValue::Scalar(M::gamma(params)),
        Greek::Vega => GreekValue::Scalar(M::vega(params)),
        Greek::Theta => pair(M::theta(params)),
        Greek::Rho => pair(M::rho(params)),
    }
}

/// The requested sensitivity under the selected model.
pub fn greek(greek: Greek, model: &ModelParameter) -> Result<GreekValue, RiskError> {
    validate(model)?;
    Ok(match model {
        ModelParameter::BlackScholes(dp) => greek_of::<BlackScholesMerton>(greek, dp),
        ModelParameter::Leland(lp) => greek_of::<LelandModel>(greek, lp),
    })
}

/// Implied volatility for an observed market price.
///
/// Validation failures are errors; solver non-convergence is still `Ok(NaN)`,
/// the sentinel batch callers replace with "N/A" without unwinding.
pub fn implied_volatility(
    model: &ModelParameter,
    side: OptionSide,
    market_price: f64,
) -> Result<f64, RiskError> {
    validate(model)?;
    require_finite("market_price", market_price)?;
    if market_price < 0.0 {
        return Err(RiskError::InvalidParameter {
            name: "market_price",
            value: market_price,
        });
    }

    let solver = NewtonRaphson::default();
    Ok(match model {
        ModelParameter::BlackScholes(dp) => {
            solver.implied_volatility::<BlackScholesMerton>(dp, side, market_price)
        }
        ModelParameter::Leland(lp) => {
            solver.implied_volatility::<LelandModel>(lp, side, market_price)
        }
    })
}
