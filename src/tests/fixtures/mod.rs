pub mod products;
pub mod state;
