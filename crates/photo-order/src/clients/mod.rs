//! Typed clients over the generic actor handles.

pub mod order_client;

pub use order_client::OrderClient;
