//! Remote gateway contract and transport for rigsync device consoles.
//!
//! The device exposes one request/response RPC per operation. This crate
//! owns everything on the wire side of that boundary:
//!
//! - **[`RemoteGateway`]** — the `call(method, args, timeout)` contract every
//!   transport implements. No retry, no queuing.
//! - **[`DeviceClient`]** — typed wrapper that serializes arguments, enforces
//!   the caller's timeout, and decodes results into [`types`].
//! - **[`HttpGateway`]** — JSON-over-HTTP implementation built on `reqwest`.
//! - **[`Method`]** — the fixed vocabulary of remote operations.

pub mod client;
pub mod error;
pub mod gateway;
pub mod http;
pub mod transport;
pub mod types;

pub use client::DeviceClient;
pub use error::Error;
pub use gateway::{Method, RemoteGateway};
pub use http::HttpGateway;
pub use transport::TransportConfig;
