/// Trading-day convention used to convert rehedging intervals into year fractions.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// All rate-like fields (`rfr`, `dividend_yield`, `vola`) are stored as decimals,
/// e.g. 0.2 for 20%. Use [`DerivativeParameter::from_percent`] when the inputs
/// arrive in percent form; the division by 100 happens there and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivativeParameter {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized continuous dividend yield
    pub dividend_yield: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
}

impl DerivativeParameter {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        dividend_yield: f64,
        vola: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            dividend_yield,
            vola,
        }
    }

    /// Constructor for percent-quoted inputs (e.g. 20.0 meaning 20%), as supplied
    /// by dashboard-style callers. Rate, dividend yield and volatility are
    /// normalized to decimals exactly once here.
    pub fn from_percent(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr_percent: f64,
        dividend_yield_percent: f64,
        vola_percent: f64,
    ) -> Self {
        Self::new(
            asset_price,
            strike,
            time_to_expiration,
            rfr_percent / 100.0,
            dividend_yield_percent / 100.0,
            vola_percent / 100.0,
        )
    }

    /// A copy of the parameter with the volatility replaced.
    pub fn with_vola(&self, vola: f64) -> Self {
        Self { vola, ..*self }
    }

    /// e^(-rT)
    pub fn rate_discount(&self) -> f64 {
        (-self.rfr * self.time_to_expiration).exp()
    }

    /// e^(-qT)
    pub fn dividend_discount(&self) -> f64 {
        (-self.dividend_yield * self.time_to_expiration).exp()
    }
}

/// Parameters for Leland's transaction-cost adjustment on top of the
/// plain derivative parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LelandParameter {
    pub option: DerivativeParameter,
    /// round-trip transaction cost rate per unit dollar of transaction
    pub cost_rate: f64,
    /// time between hedging adjustments, in years
    pub rehedge_interval: f64,
}

impl LelandParameter {
    /// The rehedging interval is quoted in trading days and converted to years
    /// with the fixed 252-day convention.
    pub fn new(option: DerivativeParameter, cost_rate: f64, rehedge_days: f64) -> Self {
        Self {
            option,
            cost_rate,
            rehedge_interval: rehedge_days / TRADING_DAYS_PER_YEAR,
        }
    }

    /// Percent-quoted cost rate variant (e.g. 1.0 meaning 1%).
    pub fn from_percent(
        option: DerivativeParameter,
        cost_rate_percent: f64,
        rehedge_days: f64,
    ) -> Self {
        Self::new(option, cost_rate_percent / 100.0, rehedge_days)
    }

    /// A copy with the *input* (unadjusted) volatility replaced. The Leland
    /// adjustment is recomputed from it on the next pricing call.
    pub fn with_vola(&self, vola: f64) -> Self {
        Self {
            option: self.option.with_vola(vola),
            ..*self
        }
    }
}

/// Which side of the vanilla contract is priced or inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionSide {
    Call,
    Put,
}

/// The supported price sensitivities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Greek {
    Delta,
    Gamma,
    Vega,
    Theta,
    Rho,
}

/// Seam for the implied-volatility solver: both parameter types expose their
/// volatility and can be rebuilt with a new guess without mutation.
pub trait HasVolatility {
    fn vola(&self) -> f64;
    fn with_vola(&self, vola: f64) -> Self;
}

impl HasVolatility for DerivativeParameter {
    fn vola(&self) -> f64 {
        self.vola
    }

    fn with_vola(&self, vola: f64) -> Self {
        DerivativeParameter::with_vola(self, vola)
    }
}

impl HasVolatility for LelandParameter {
    fn vola(&self) -> f64 {
        self.option.vola
    }

    fn with_vola(&self, vola: f64) -> Self {
        LelandParameter::with_vola(self, vola)
    }
}
