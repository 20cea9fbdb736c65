//! Typed async client for the TON blockchain HTTP API.
//!
//! The crate marshals typed requests to JSON, issues HTTP calls against a
//! configured gateway, and unmarshals typed responses. It keeps no state
//! between calls, never retries, and treats blockchain payloads (cells,
//! BOCs, contract data) as opaque strings it forwards and decodes
//! structurally.
//!
//! # Example
//!
//! ```rust,no_run
//! use toncenter_client::TonClient;
//! use toncenter_client::utils::format_nano_ton;
//!
//! # async fn example() -> Result<(), toncenter_client::ClientError> {
//! let client = TonClient::new("my-api-key-here")?;
//!
//! let address = "EQCkR1cGmnsE45N4K0otPl5EnxnRakmGqeJUNua5fkWhales";
//! let balance = client.get_address_balance(address).await?;
//! println!("balance: {} TON", format_nano_ton(&balance));
//! # Ok(())
//! # }
//! ```
//!
//! # Error handling
//!
//! Every operation returns [`ClientError`], which keeps the failure layers
//! distinct: configuration, request encoding, network transport, API-level
//! rejection (including HTTP-200 bodies carrying `ok: false`), and response
//! decoding. No failure is recovered internally; resilience belongs to the
//! caller.

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod utils;

pub use crate::config::ClientConfig;
pub use crate::error::ClientError;
pub use crate::http::{StackValue, TonClient};
