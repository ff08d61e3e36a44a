pub mod grid;

pub use grid::{
    SurfaceGrid, bsm_price_surface, leland_price_surface, premium_difference_surface,
};
