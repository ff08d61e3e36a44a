use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RiskError {
    /// A Leland computation would divide by 0 (zero rehedging interval or
    /// zero volatility). Guarded here so the engines never see it.
    #[error("division by 0")]
    ZeroDivision,
    /// A raw input outside its domain (non-positive price, negative maturity,
    /// non-finite value).
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
