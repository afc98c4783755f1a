//! # CoinGate Rust client
//!
//! A client library for the [CoinGate](https://coingate.com) cryptocurrency
//! payment processing API. It lets a merchant application create payment
//! orders, retrieve order status, list and paginate historical orders, and
//! fetch currency exchange rates, with request authentication and
//! response-to-object mapping handled by the crate.
//!
//! ## Modules
//!
//! - [`api`]: REST API client, domain types, field mapping, and errors
//! - [`auth`]: per-version credentials and request signing
//! - [`network`]: environment selection (sandbox vs. live) and hostnames
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coingate::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinGateV2Client::new("my-app", "my-api-token", Environment::Sandbox)?;
//!
//!     // Create a payment order
//!     let order = V2Order::new("invoice-1", 49.99, "USD", "EUR")
//!         .with_title("Pro subscription");
//!     let created = client.create_order(&order).await?;
//!     println!("pay at {:?}", created.payment_url);
//!
//!     // Look it up again by its CoinGate-assigned id
//!     let fetched = client.get_order(created.coingate_id.unwrap()).await?;
//!     println!("status: {:?}", fetched.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Listing orders
//!
//! `list_orders` fetches a single page; [`iterate_all_orders`] walks every
//! page lazily as a [`Stream`](futures_core::Stream):
//!
//! ```rust,ignore
//! use futures_util::TryStreamExt;
//!
//! let mut stream = std::pin::pin!(client.iterate_all_orders(100, OrderSort::CreatedAtDesc));
//! while let Some(order) = stream.try_next().await? {
//!     println!("{order}");
//! }
//! ```
//!
//! [`iterate_all_orders`]: api::CoinGateClient::iterate_all_orders
//!
//! ## Error Handling
//!
//! Every operation returns [`Result`](api::Result), whose error type
//! [`CoinGateError`](api::CoinGateError) separates local contract violations
//! ([`ClientError`](api::ClientError)) from failures reported by the remote
//! API ([`ApiError`](api::ApiError)). Nothing is retried automatically; the
//! caller owns retry policy.

// ============================================================================
// MODULES
// ============================================================================

/// REST API client, domain types, field mapping, and errors.
pub mod api;

/// Per-version credentials and request signing.
pub mod auth;

/// Environment selection (sandbox vs. live) and hostname constants.
pub mod network;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use coingate::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiError, ApiOrder, ClientError, CoinGateClient, CoinGateClientBuilder, CoinGateError,
        CoinGateV1Client, CoinGateV2Client, OrderPage, OrderSort, RateCategory, RateNode, Result,
        TraderSide, V1Order, V2Order,
    };
    pub use crate::auth::{ApiVersion, V1Credentials, V2Credentials};
    pub use crate::network::{Environment, LIVE_HOSTNAME, SANDBOX_HOSTNAME};
}
