//! Contact form delivery through the hosted email relay

use bevy::prelude::*;
use std::sync::{Arc, Mutex};

use scripsmith_core::{EmailPayload, RelayConfig, RelayError, RelayOutcome};

use crate::app::{ContactForm, Notices};

pub struct RelayPlugin;

/// Resource storing the relay identifiers used for submissions
#[derive(Resource, Clone, Default)]
pub struct RelaySettings {
    pub config: RelayConfig,
}

impl RelaySettings {
    /// Create settings from URL query-parameter overrides or the built-in defaults
    #[cfg(target_arch = "wasm32")]
    pub fn from_browser() -> Self {
        let window = web_sys::window().expect("no window");
        let location = window.location();

        let mut config = RelayConfig::default();
        if let Ok(search) = location.search() {
            if let Some(service) = parse_query_param(&search, "relay_service") {
                tracing::info!("Using relay service from URL parameter: {}", service);
                config.service_id = service;
            }
            if let Some(template) = parse_query_param(&search, "relay_template") {
                config.template_id = template;
            }
            if let Some(key) = parse_query_param(&search, "relay_key") {
                config.public_key = key;
            }
        }

        Self { config }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_browser() -> Self {
        Self::default()
    }
}

/// Parse a query parameter from a search string
#[allow(dead_code)]
fn parse_query_param(search: &str, param: &str) -> Option<String> {
    let search = search.trim_start_matches('?');
    for pair in search.split('&') {
        let mut parts = pair.splitn(2, '=');
        if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
            if key == param {
                // URL decode the value
                return Some(value.replace("%3A", ":").replace("%2F", "/"));
            }
        }
    }
    None
}

/// Pending submission outcomes from async sends
#[derive(Resource, Default)]
pub struct PendingOutcomes(pub Arc<Mutex<Vec<RelayOutcome>>>);

/// Send one validated submission to the relay (called from UI)
pub fn submit_message(config: &RelayConfig, payload: EmailPayload, pending: &PendingOutcomes) {
    #[cfg(target_arch = "wasm32")]
    {
        use scripsmith_core::SendEmailRequest;
        use wasm_bindgen_futures::spawn_local;

        let config = config.clone();
        let queue = pending.0.clone();

        spawn_local(async move {
            let outcome = match serde_json::to_string(&SendEmailRequest::new(&config, &payload)) {
                Ok(body) => send_body(body).await,
                Err(e) => RelayOutcome::Failed(RelayError::Transport(e.to_string())),
            };

            if let Ok(mut queue) = queue.lock() {
                queue.push(outcome);
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (config, payload);
        tracing::warn!("Email relay not available in native mode");
        if let Ok(mut queue) = pending.0.lock() {
            queue.push(RelayOutcome::Failed(RelayError::Transport(
                "relay requires the browser runtime".to_string(),
            )));
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn send_body(body: String) -> RelayOutcome {
    use scripsmith_core::relay::RELAY_ENDPOINT;

    let request = match gloo_net::http::Request::post(RELAY_ENDPOINT)
        .header("Content-Type", "application/json")
        .body(body)
    {
        Ok(request) => request,
        Err(e) => return RelayOutcome::Failed(RelayError::Transport(e.to_string())),
    };

    match request.send().await {
        Ok(response) => {
            if response.ok() {
                RelayOutcome::Delivered
            } else {
                RelayOutcome::Failed(RelayError::Rejected {
                    status: response.status(),
                })
            }
        }
        Err(e) => RelayOutcome::Failed(RelayError::Transport(e.to_string())),
    }
}

/// Drain finished submissions into the form state and the notice queue
fn apply_outcomes(
    pending: Res<PendingOutcomes>,
    mut form: ResMut<ContactForm>,
    mut notices: ResMut<Notices>,
) {
    let outcomes = {
        if let Ok(mut queue) = pending.0.lock() {
            std::mem::take(&mut *queue)
        } else {
            Vec::new()
        }
    };

    for outcome in outcomes {
        form.apply_outcome(&outcome);
        match outcome {
            RelayOutcome::Delivered => {
                tracing::info!("Contact message delivered");
                notices.push_success("Message sent successfully!");
            }
            RelayOutcome::Failed(error) => {
                tracing::error!("Contact message failed: {}", error);
                notices.push_failure("Failed to send message. Please try again.");
            }
        }
    }
}

impl Plugin for RelayPlugin {
    fn build(&self, app: &mut App) {
        // Read overrides from the page URL before the first frame
        let settings = RelaySettings::from_browser();

        app.insert_resource(settings)
            .init_resource::<PendingOutcomes>()
            .add_systems(Update, apply_outcomes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_param() {
        let search = "?relay_service=service_abc&relay_key=key_123";
        assert_eq!(
            parse_query_param(search, "relay_service"),
            Some("service_abc".to_string())
        );
        assert_eq!(
            parse_query_param(search, "relay_key"),
            Some("key_123".to_string())
        );
        assert_eq!(parse_query_param(search, "relay_template"), None);
    }

    #[test]
    fn test_parse_query_param_decodes_separators() {
        let search = "?next=https%3A%2F%2Fexample.com";
        assert_eq!(
            parse_query_param(search, "next"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_parse_query_param_ignores_flags_without_values() {
        assert_eq!(parse_query_param("?debug&x=1", "debug"), None);
        assert_eq!(parse_query_param("", "x"), None);
    }

    #[test]
    fn test_pending_outcomes_drain() {
        let pending = PendingOutcomes::default();
        pending
            .0
            .lock()
            .unwrap()
            .push(RelayOutcome::Failed(RelayError::Rejected { status: 500 }));

        let drained = std::mem::take(&mut *pending.0.lock().unwrap());
        assert_eq!(drained.len(), 1);
        assert!(pending.0.lock().unwrap().is_empty());
    }
}
