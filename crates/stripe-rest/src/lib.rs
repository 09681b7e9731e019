//! # stripe-rest
//!
//! Thin HTTP call layer over the Stripe REST API.
//!
//! Every call wrapper follows the same shape: format a fixed URL template,
//! delegate to the shared [`RequestExecutor`], and decode the JSON body
//! into a record from `stripe-core`. There is no state beyond the HTTP
//! connection pool, no retries, and no caching.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stripe_rest::StripeClient;
//! use stripe_core::{CreatedRange, ListParams};
//! use chrono::{TimeZone, Utc};
//!
//! // Reads STRIPE_SECRET_KEY from the environment
//! let client = StripeClient::from_env()?;
//!
//! // List events created since the start of 2020
//! let since = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
//! let params = stripe_rest::ListEventsParams::new()
//!     .with_page(ListParams::new().with_created(CreatedRange::unbounded().gte(since)));
//!
//! let events = client.list_events(&params).await?;
//! for event in &events.data {
//!     println!("{}: {}", event.id, event.event_type);
//! }
//! ```
//!
//! ## Webhook Verification
//!
//! ```rust,ignore
//! use stripe_rest::webhook;
//!
//! // In your webhook endpoint:
//! let event = webhook::parse_event(body, signature_header, "whsec_...")?;
//! match event.event_type.as_str() {
//!     "application_fee.refunded" => { /* reconcile the refund */ }
//!     _ => { /* ignore */ }
//! }
//! ```

pub mod alipay;
pub mod config;
pub mod discount;
pub mod event;
pub mod fee_refund;
pub mod http;
pub mod webhook;

// Re-exports
pub use config::StripeConfig;
pub use event::ListEventsParams;
pub use fee_refund::CreateFeeRefundParams;
pub use http::{HttpExecutor, Method, RequestExecutor, StripeClient};
