use crate::analytic::black_scholes::{BlackScholesMerton, OptionPrice};
use crate::analytic::leland::LelandModel;
use crate::common::models::{DerivativeParameter, LelandParameter, OptionSide};
use ndarray::{Array1, Array2};

/// A strike/maturity mesh for surface evaluation.
///
/// Every grid point is an independent pricing call with no ordering dependency,
/// so callers are free to evaluate grids from multiple threads as long as each
/// evaluation owns its parameter record. Rendering the resulting matrix is a
/// presentation concern and lives outside this crate.
pub struct SurfaceGrid {
    strikes: Array1<f64>,
    maturities: Array1<f64>,
}

impl SurfaceGrid {
    pub fn new(
        strike_min: f64,
        strike_max: f64,
        maturity_min: f64,
        maturity_max: f64,
        nr_strikes: usize,
        nr_maturities: usize,
    ) -> Self {
        Self {
            strikes: Array1::linspace(strike_min, strike_max, nr_strikes),
            maturities: Array1::linspace(maturity_min, maturity_max, nr_maturities),
        }
    }

    pub fn strikes(&self) -> &Array1<f64> {
        &self.strikes
    }

    pub fn maturities(&self) -> &Array1<f64> {
        &self.maturities
    }

    /// Evaluates `point_value(strike, maturity)` over the mesh. Row index runs
    /// over maturities, column index over strikes.
    pub fn evaluate(&self, point_value: impl Fn(f64, f64) -> f64) -> Array2<f64> {
        Array2::from_shape_fn(
            (self.maturities.len(), self.strikes.len()),
            |(row, col)| point_value(self.strikes[col], self.maturities[row]),
        )
    }
}

/// Black-Scholes-Merton price surface; `base` supplies spot, rates and vola.
pub fn bsm_price_surface(
    grid: &SurfaceGrid,
    base: &DerivativeParameter,
    side: OptionSide,
) -> Array2<f64> {
    grid.evaluate(|strike, time_to_expiration| {
        let point = DerivativeParameter {
            strike,
            time_to_expiration,
            ..*base
        };
        BlackScholesMerton::price(&point, side)
    })
}

/// Leland price surface at the transaction-cost-adjusted volatility.
pub fn leland_price_surface(
    grid: &SurfaceGrid,
    base: &LelandParameter,
    side: OptionSide,
) -> Array2<f64> {
    grid.evaluate(|strike, time_to_expiration| {
        let point = LelandParameter {
            option: DerivativeParameter {
                strike,
                time_to_expiration,
                ..base.option
            },
            ..*base
        };
        LelandModel::price(&point, side)
    })
}

/// Pointwise Leland-minus-BSM premium, i.e. the transaction-cost markup
/// across the whole mesh.
pub fn premium_difference_surface(
    grid: &SurfaceGrid,
    base: &LelandParameter,
    side: OptionSide,
) -> Array2<f64> {
    grid.evaluate(|strike, time_to_expiration| {
        let bsm_point = DerivativeParameter {
            strike,
            time_to_expiration,
            ..base.option
        };
        let leland_point = LelandParameter {
            option: bsm_point,
            ..*base
        };
        LelandModel::price(&leland_point, side) - BlackScholesMerton::price(&bsm_point, side)
    })
}
