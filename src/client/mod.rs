pub mod async_client;
pub mod blocking;
pub mod builder;

pub use async_client::AsyncKudaClient;
pub use blocking::KudaClient;
pub use builder::KudaBuilder;
