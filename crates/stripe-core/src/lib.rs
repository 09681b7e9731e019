//! # stripe-core
//!
//! Wire-level types and codecs for the stripe-rest-rs client.
//!
//! This crate provides:
//! - `CreatedInput` for the polymorphic `created` filter on list endpoints
//! - `List` and `ListParams` for paginated collections
//! - Resource records (`AlipayAccount`, `ApplicationFeeRefund`, `Discount`,
//!   `Event`) mirroring their JSON wire objects
//! - The shared `timestamp` codec (epoch seconds / RFC 3339)
//! - `StripeError` and `DecodeError` for typed error handling
//!
//! Everything here is pure data: no HTTP, no IO, no shared state. The
//! companion `stripe-rest` crate supplies the call layer.
//!
//! ## Example
//!
//! ```rust
//! use stripe_core::{CreatedRange, ListParams};
//! use chrono::{TimeZone, Utc};
//!
//! let since = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
//! let params = ListParams::new()
//!     .with_limit(50)
//!     .with_created(CreatedRange::unbounded().gte(since));
//!
//! assert_eq!(
//!     params.to_query_params(),
//!     vec![
//!         ("limit".to_string(), "50".to_string()),
//!         ("created[gte]".to_string(), "1577836800".to_string()),
//!     ]
//! );
//! ```

pub mod alipay_account;
pub mod created;
pub mod discount;
pub mod error;
pub mod event;
pub mod fee_refund;
pub mod list;
pub mod timestamp;

// Re-exports for convenience
pub use alipay_account::AlipayAccount;
pub use created::{CreatedInput, CreatedRange};
pub use discount::{Coupon, DeletedDiscount, Discount};
pub use error::{DecodeError, StripeError, StripeResult};
pub use event::{Event, EventData, EventRequest};
pub use fee_refund::ApplicationFeeRefund;
pub use list::{List, ListParams};
