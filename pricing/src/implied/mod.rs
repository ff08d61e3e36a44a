pub mod newton_raphson;

pub use newton_raphson::NewtonRaphson;
