//! Email-relay request types and validation

use serde::Serialize;
use thiserror::Error;

/// Hosted send endpoint
pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Externally provisioned relay identifiers. The defaults are the site's
/// own provisioning; the page URL may override them for staging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            service_id: "service_rurns6n".to_string(),
            template_id: "template_is6sjbv".to_string(),
            public_key: "ViYAawJ3tmX_sqoQ_".to_string(),
        }
    }
}

/// The three captured form fields, sent as the relay template parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

impl EmailPayload {
    /// Check the fields before spending the network call
    pub fn validate(&self) -> Result<(), RelayError> {
        if self.user_name.trim().is_empty() {
            return Err(RelayError::EmptyField("name"));
        }
        let email = self.user_email.trim();
        if email.is_empty() {
            return Err(RelayError::EmptyField("email"));
        }
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(RelayError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(RelayError::EmptyField("message"));
        }
        Ok(())
    }
}

/// JSON body for the hosted send endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SendEmailRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a EmailPayload,
}

impl<'a> SendEmailRequest<'a> {
    pub fn new(config: &'a RelayConfig, payload: &'a EmailPayload) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: payload,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("{0} is required")]
    EmptyField(&'static str),
    #[error("email address looks invalid")]
    InvalidEmail,
    #[error("relay rejected the message (status {status})")]
    Rejected { status: u16 },
    #[error("network error: {0}")]
    Transport(String),
}

/// Terminal result of one submission, reported back to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Delivered,
    Failed(RelayError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> EmailPayload {
        EmailPayload {
            user_name: "Ada".to_string(),
            user_email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let config = RelayConfig::default();
        let payload = payload();
        let body = serde_json::to_value(SendEmailRequest::new(&config, &payload)).unwrap();
        assert_eq!(body["service_id"], "service_rurns6n");
        assert_eq!(body["template_id"], "template_is6sjbv");
        assert_eq!(body["user_id"], "ViYAawJ3tmX_sqoQ_");
        assert_eq!(body["template_params"]["user_name"], "Ada");
        assert_eq!(body["template_params"]["user_email"], "ada@example.com");
        assert_eq!(body["template_params"]["message"], "Hello there");
        assert_eq!(body.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_validate_accepts_complete_payload() {
        assert_eq!(payload().validate(), Ok(()));
    }

    #[test]
    fn test_validate_requires_every_field() {
        let mut p = payload();
        p.user_name = "  ".to_string();
        assert_eq!(p.validate(), Err(RelayError::EmptyField("name")));

        let mut p = payload();
        p.user_email.clear();
        assert_eq!(p.validate(), Err(RelayError::EmptyField("email")));

        let mut p = payload();
        p.message = "\n".to_string();
        assert_eq!(p.validate(), Err(RelayError::EmptyField("message")));
    }

    #[test]
    fn test_validate_rejects_odd_addresses() {
        for bad in ["nobody", "@example.com", "nobody@"] {
            let mut p = payload();
            p.user_email = bad.to_string();
            assert_eq!(p.validate(), Err(RelayError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn test_error_messages_read_well() {
        assert_eq!(
            RelayError::Rejected { status: 400 }.to_string(),
            "relay rejected the message (status 400)"
        );
        assert_eq!(RelayError::EmptyField("name").to_string(), "name is required");
    }
}
