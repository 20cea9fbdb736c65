//! HTTP transport and typed endpoint bindings for the TON API.
//!
//! The module has two layers, kept deliberately separate:
//!
//! - The transport (`http_client`) builds requests against the configured
//!   base URL, attaches the API key header, and classifies HTTP-level
//!   outcomes. On a 2xx status it hands back raw bytes without inspecting
//!   the body.
//! - The bindings ([`TonClient`]) shape data for the transport, decode the
//!   typed response, and enforce the API's `{ok, result}` envelope
//!   convention, where an HTTP 200 can still carry a failure.

mod http_client;
mod ton_client;
mod types;

pub use ton_client::TonClient;
pub use types::{ApiResponse, JsonRpcError, JsonRpcRequest, JsonRpcResponse, StackValue};
