pub mod client;
pub mod core;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{AsyncKudaClient, KudaBuilder, KudaClient};
pub use crate::core::config::{KudaConfig, Mode, SettlementConfig, TransportConfig};
pub use crate::core::{
    errors::KudaError,
    kernel::ApiCall,
    traits::{ApiWrapper, BlockingApiWrapper, Operation},
    types::*,
};
