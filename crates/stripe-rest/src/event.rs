//! # Event Calls
//!
//! Retrieve and list event envelopes. Listing supports the polymorphic
//! `created` filter and an event-name filter.

use crate::http::StripeClient;
use stripe_core::{Event, List, ListParams, StripeResult};
use tracing::instrument;

/// Parameters for listing events
#[derive(Debug, Clone, Default)]
pub struct ListEventsParams {
    /// Pagination and creation-time filtering
    pub page: ListParams,

    /// Only return events with this dotted name
    /// (e.g. "application_fee.refunded")
    pub event_type: Option<String>,
}

impl ListEventsParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set pagination/filter parameters
    pub fn with_page(mut self, page: ListParams) -> Self {
        self.page = page;
        self
    }

    /// Builder: filter by event name
    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = self.page.to_query_params();
        if let Some(ref event_type) = self.event_type {
            params.push(("type".to_string(), event_type.clone()));
        }
        params
    }
}

impl StripeClient {
    /// Retrieve a single event by id.
    ///
    /// `GET /v1/events/{id}`
    #[instrument(skip(self))]
    pub async fn retrieve_event(&self, id: &str) -> StripeResult<Event> {
        let path = format!("/v1/events/{}", id);
        self.get_json(&path, &[]).await
    }

    /// List events, newest first.
    ///
    /// `GET /v1/events`
    #[instrument(skip(self, params))]
    pub async fn list_events(&self, params: &ListEventsParams) -> StripeResult<List<Event>> {
        self.get_json("/v1/events", &params.to_query_params()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StripeConfig;
    use chrono::{TimeZone, Utc};
    use stripe_core::CreatedInput;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn event_body(id: &str, event_type: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "object": "event",
            "created": 1577836800,
            "data": {"object": {"id": "fr_123", "object": "fee_refund"}},
            "livemode": false,
            "pending_webhooks": 0,
            "type": event_type
        })
    }

    async fn client_for(server: &MockServer) -> StripeClient {
        let config = StripeConfig::new("sk_test_abc")
            .unwrap()
            .with_api_base_url(server.uri());
        StripeClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_retrieve_event() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/events/evt_1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(event_body("evt_1", "application_fee.refunded")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let event = client.retrieve_event("evt_1").await.unwrap();
        assert_eq!(event.event_type, "application_fee.refunded");
        assert_eq!(event.data.object["id"], "fr_123");
    }

    #[tokio::test]
    async fn test_list_events_with_exact_created_filter() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/events"))
            .and(query_param("created", "1577836800"))
            .and(query_param("type", "application_fee.refunded"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "object": "list",
                "data": [event_body("evt_1", "application_fee.refunded")],
                "has_more": false,
                "url": "/v1/events"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let params = ListEventsParams::new()
            .with_page(ListParams::new().with_created(CreatedInput::at(at)))
            .with_event_type("application_fee.refunded");

        let page = client.list_events(&params).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.data[0].id, "evt_1");
    }
}
