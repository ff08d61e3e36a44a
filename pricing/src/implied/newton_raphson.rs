use crate::analytic::black_scholes::OptionGreeks;
use crate::common::models::{HasVolatility, OptionSide};

/// Newton-Raphson inversion of a pricing model for the implied volatility.
///
/// Works against any [`OptionGreeks`] implementation; for the Leland model the
/// reported vega is already chain-rule corrected, so the iteration converges on
/// the *input* volatility before adjustment.
///
/// Failure is signalled by NaN, never by a panic or an error: a zero (or
/// non-finite) vega terminates early, and exhausting the iteration budget
/// returns NaN as well. This keeps grid-wide batch inversion free of
/// per-element error handling.
pub struct NewtonRaphson {
    pub max_iterations: usize,
    /// absolute price-difference tolerance for convergence
    pub tolerance: f64,
}

impl NewtonRaphson {
    pub fn new(max_iterations: usize, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }

    /// Finds the volatility at which the model reproduces `market_price` for the
    /// requested side, starting from the volatility stored in `params`.
    ///
    /// The parameter record is never mutated; each iteration rebuilds a local
    /// candidate via [`HasVolatility::with_vola`].
    pub fn implied_volatility<M>(
        &self,
        params: &M::Params,
        side: OptionSide,
        market_price: f64,
    ) -> f64
    where
        M: OptionGreeks,
        M::Params: HasVolatility,
    {
        let mut vola = params.vola();

        for _ in 0..self.max_iterations {
            let candidate = params.with_vola(vola);
            let model_price = M::price(&candidate, side);
            let vega = M::vega(&candidate);

            if vega == 0.0 || !vega.is_finite() {
                break;
            }

            let diff = model_price - market_price;
            if diff.abs() < self.tolerance {
                return vola;
            }
            vola -= diff / vega;
        }

        f64::NAN
    }
}

impl Default for NewtonRaphson {
    fn default() -> Self {
        Self::new(100, 1e-5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytic::black_scholes::{BlackScholesMerton, OptionPrice};
    use crate::analytic::leland::LelandModel;
    use crate::common::models::{DerivativeParameter, LelandParameter};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn recovers_the_pricing_volatility() {
        let solver = NewtonRaphson::default();
        for vola in [0.05, 0.1, 0.25, 0.4, 0.8] {
            let priced = DerivativeParameter::new(100.0, 105.0, 0.75, 0.04, 0.01, vola);
            let market_price = BlackScholesMerton::call(&priced);

            // start the iteration away from the solution
            let guess = priced.with_vola(0.2);
            let iv =
                solver.implied_volatility::<BlackScholesMerton>(&guess, OptionSide::Call, market_price);
            assert_approx_eq!(iv, vola, 1e-4);
        }
    }

    #[test]
    fn converges_within_twenty_iterations_for_a_plain_quote() {
        let priced = DerivativeParameter::from_percent(100.0, 100.0, 1.0, 5.0, 0.0, 25.0);
        let market_price = BlackScholesMerton::call(&priced);

        let solver = NewtonRaphson::new(20, 1e-5);
        let guess = priced.with_vola(0.1);
        let iv = solver.implied_volatility::<BlackScholesMerton>(&guess, OptionSide::Call, market_price);
        assert_approx_eq!(iv, 0.25, 1e-4);
    }

    #[test]
    fn solves_puts_as_well() {
        let priced = DerivativeParameter::new(90.0, 100.0, 1.2, 0.03, 0.0, 0.35);
        let market_price = BlackScholesMerton::put(&priced);

        let solver = NewtonRaphson::default();
        let iv = solver.implied_volatility::<BlackScholesMerton>(
            &priced.with_vola(0.15),
            OptionSide::Put,
            market_price,
        );
        assert_approx_eq!(iv, 0.35, 1e-4);
    }

    #[test]
    fn inverts_the_leland_model_for_the_input_volatility() {
        let dp = DerivativeParameter::from_percent(100.0, 100.0, 1.0, 5.0, 0.0, 20.0);
        let lp = LelandParameter::from_percent(dp, 1.0, 1.0);
        let market_price = LelandModel::call(&lp);

        let solver = NewtonRaphson::default();
        let iv =
            solver.implied_volatility::<LelandModel>(&lp.with_vola(0.35), OptionSide::Call, market_price);

        // the solution is the unadjusted input volatility, not sigma_adj
        assert_approx_eq!(iv, 0.2, 1e-4);
    }

    #[test]
    fn unreachable_price_returns_nan() {
        let dp = DerivativeParameter::new(100.0, 100.0, 1.0, 0.05, 0.0, 0.2);
        let solver = NewtonRaphson::default();
        // a price above the spot can never be matched by any volatility
        let iv = solver.implied_volatility::<BlackScholesMerton>(&dp, OptionSide::Call, 150.0);
        assert!(iv.is_nan());
    }

    #[test]
    fn degenerate_start_returns_nan() {
        // expired option: price and vega are NaN from the first iteration
        let dp = DerivativeParameter::new(100.0, 100.0, 0.0, 0.05, 0.0, 0.2);
        let solver = NewtonRaphson::default();
        let iv = solver.implied_volatility::<BlackScholesMerton>(&dp, OptionSide::Call, 10.0);
        assert!(iv.is_nan());
    }

    #[test]
    fn converged_volatility_reprices_the_market_quote() {
        let priced = DerivativeParameter::new(100.0, 110.0, 1.5, 0.02, 0.01, 0.3);
        let market_price = BlackScholesMerton::call(&priced);

        let solver = NewtonRaphson::default();
        let iv = solver.implied_volatility::<BlackScholesMerton>(
            &priced.with_vola(0.5),
            OptionSide::Call,
            market_price,
        );
        let repriced = BlackScholesMerton::call(&priced.with_vola(iv));
        assert_approx_eq!(repriced, market_price, 1e-5);
    }
}
