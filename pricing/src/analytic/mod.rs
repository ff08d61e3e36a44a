pub mod black_scholes;
pub mod leland;

pub use black_scholes::{BlackScholesMerton, OptionGreeks, OptionPrice};
pub use leland::LelandModel;
