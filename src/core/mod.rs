pub mod config;
pub mod errors;
pub mod kernel;
pub mod traits;
pub mod types;
pub mod utils;
