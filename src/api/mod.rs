//! REST API client module for the CoinGate payment gateway.
//!
//! This module provides an authenticated HTTP client for the order and
//! exchange-rate endpoints of the CoinGate API, in both schema versions.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use coingate::api::CoinGateV2Client;
//! use coingate::api::types::{OrderSort, V2Order};
//! use coingate::network::Environment;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinGateV2Client::new("my-app", "my-api-token", Environment::Sandbox)?;
//!
//!     let order = V2Order::new("invoice-1", 49.99, "USD", "EUR");
//!     let created = client.create_order(&order).await?;
//!     println!("created {created}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All methods return [`Result<T>`] with [`CoinGateError`] distinguishing
//! local contract violations from remote-reported failures:
//!
//! ```rust,ignore
//! use coingate::api::{CoinGateError, ClientError};
//!
//! match client.get_order(1587).await {
//!     Ok(order) => println!("status: {:?}", order.status),
//!     Err(CoinGateError::Api(e)) => println!("CoinGate said no: {e}"),
//!     Err(CoinGateError::Client(e)) => println!("local problem: {e}"),
//! }
//! ```

pub mod client;
pub mod error;
pub mod mapping;
pub mod types;

// Re-export main types for convenience
pub use client::{CoinGateClient, CoinGateClientBuilder, CoinGateV1Client, CoinGateV2Client};
pub use error::{ApiError, ClientError, CoinGateError, Result};
pub use types::*;
