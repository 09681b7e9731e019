//! # Events
//!
//! The event envelope Stripe emits for every state change. The payload
//! inside `data.object` is the resource the event is about, kept as raw
//! JSON here; callers decode it into a concrete record once they have
//! matched on the event type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event envelope, as returned by `GET /v1/events` and delivered to
/// webhook endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Object id (evt_...)
    pub id: String,

    /// Always "event"
    pub object: String,

    /// API version the payload was rendered with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,

    pub data: EventData,

    pub livemode: bool,

    /// Webhook deliveries still pending for this event
    pub pending_webhooks: i64,

    /// The request that caused the event, absent for automatic events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<EventRequest>,

    /// Dotted event name, e.g. "application_fee.refunded"
    #[serde(rename = "type")]
    pub event_type: String,
}

/// The resource payload carried by an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    /// The resource the event describes, in its post-change state
    pub object: serde_json::Value,

    /// For update events, the changed fields with their previous values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_attributes: Option<serde_json::Value>,
}

/// Provenance of the API request that produced an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}
