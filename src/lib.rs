//! LogSnag Client Library
//!
//! Thin client for the LogSnag event-logging and analytics service. Two
//! operations are supported: publishing a named event to a channel
//! (`POST <base>/log`) and recording a titled metric, an "insight"
//! (`POST <base>/insight`). Payloads are serialized to JSON and sent with
//! a static bearer token; responses come back as untyped JSON values.
//!
//! Each call is a single request/response round trip: no batching, no
//! queueing, no retries. The caller owns retry policy.
//!
//! # Examples
//!
//! ## Publishing an event
//!
//! ```no_run
//! use std::sync::Arc;
//! use logsnag::{ApiClient, ClientConfig, LogSnag, PublishOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new("ls_token", ClientConfig::default())?;
//! let logsnag = LogSnag::new("my-saas", Arc::new(client));
//!
//! let response = logsnag
//!     .publish(
//!         "waitlist",
//!         "User Joined",
//!         PublishOptions::default()
//!             .description("from landing page")
//!             .icon("\u{1F389}")
//!             .tag("source", "organic")
//!             .notify(true),
//!     )
//!     .await?;
//! println!("{}", response.data);
//! # Ok(())
//! # }
//! ```
//!
//! ## Recording an insight
//!
//! ```no_run
//! use std::sync::Arc;
//! use logsnag::{ApiClient, ClientConfig, InsightOptions, LogSnag};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new("ls_token", ClientConfig::default())?;
//! let logsnag = LogSnag::new("my-saas", Arc::new(client));
//!
//! logsnag
//!     .insight("User Count", 120, InsightOptions::default().icon("\u{1F465}"))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Blocking Usage (Sync Contexts)
//!
//! ```no_run
//! use std::sync::Arc;
//! use logsnag::{ApiClient, ClientConfig, LogSnag, PublishOptions};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new("ls_token", ClientConfig::default())?;
//! let logsnag = LogSnag::new("my-saas", Arc::new(client));
//!
//! logsnag.publish_blocking("deploys", "Deploy Finished", PublishOptions::default())?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod logsnag;
mod payload;

// Re-export public API
pub use client::{ApiClient, ClientConfig};
pub use error::ClientError;
pub use logsnag::{LogResponse, LogSnag};
pub use payload::{InsightOptions, InsightPayload, InsightValue, PublishOptions, PublishPayload};

// Re-export commonly used types from dependencies
pub use http::StatusCode;
