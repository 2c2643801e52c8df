//! # broker-console-rest
//!
//! REST transport for the broker management console: looks up and deletes
//! named management objects (trust stores, key stores, ports, ...) over the
//! broker's management HTTP API.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)* — Use rustls.
//! - **`native-tls`** — Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use broker_console_rest::{
//!     object_path, ClientOptions, HttpManagementClient, ManagementApi, TRUSTSTORE_CATEGORY,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpManagementClient::new(&ClientOptions::default())?;
//!     let path = object_path(TRUSTSTORE_CATEGORY, "clientTrust");
//!
//!     let objects = client.get_objects(&path).await?;
//!     if let Some(store) = objects.first() {
//!         println!("{:?}", store.get("path"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, RestError>`](RestError). Transient
//! errors (`NetworkError`, `Timeout`, gateway statuses) are retried for GET requests;
//! [`RestError::operator_message`] yields the broker's error payload verbatim.

mod client;
mod error;
mod http_client;
mod path;
mod traits;
mod types;
mod utils;

pub use client::HttpManagementClient;
pub use error::{RestError, Result};
pub use path::{REST_PREFIX, TRUSTSTORE_CATEGORY, object_name, object_path};
pub use traits::ManagementApi;
pub use types::{ClientOptions, ObjectAttributes};
pub use utils::log_sanitizer::truncate_for_log;
