use gloo_net::http::Request;
use thiserror::Error;

use super::form::ContactDraft;
use crate::config;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("could not reach the contact service: {0}")]
    Network(String),
    #[error("the contact service rejected the message (status {status})")]
    Rejected { status: u16 },
    #[error("could not encode the message: {0}")]
    Encode(String),
}

impl SubmitError {
    /// Text shown under the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Network(_) => "We couldn't reach our servers. Check your connection and try again.",
            SubmitError::Rejected { .. } => "Something went wrong on our side. Please try again in a moment.",
            SubmitError::Encode(_) => "Your message couldn't be prepared for sending.",
        }
    }
}

/// Maps an HTTP answer to the submission result; any non-2xx is a rejection.
pub fn check_status(ok: bool, status: u16) -> Result<(), SubmitError> {
    if ok {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

/// Where a finished draft goes.
#[derive(Clone, Debug, PartialEq)]
pub enum Transport {
    /// Logs the draft to the console and reports success.
    Simulated,
    /// POSTs the draft as JSON.
    Http { endpoint: String },
}

impl Transport {
    pub fn from_config() -> Self {
        match config::contact_endpoint() {
            Some(endpoint) => Transport::Http { endpoint },
            None => Transport::Simulated,
        }
    }

    pub async fn send(&self, draft: &ContactDraft) -> Result<(), SubmitError> {
        match self {
            Transport::Simulated => {
                let dump = serde_json::to_string(draft)
                    .map_err(|e| SubmitError::Encode(e.to_string()))?;
                gloo_console::log!("Form submitted:", dump);
                Ok(())
            }
            Transport::Http { endpoint } => {
                let response = Request::post(endpoint)
                    .json(draft)
                    .map_err(|e| SubmitError::Encode(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| SubmitError::Network(e.to_string()))?;

                let result = check_status(response.ok(), response.status());
                match &result {
                    Ok(()) => log::info!("contact message accepted by {}", endpoint),
                    Err(_) => log::error!("contact endpoint {} answered {}", endpoint, response.status()),
                }
                result
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_simulated_transport() {
        if option_env!("KODASTRA_CONTACT_ENDPOINT").is_none() {
            assert_eq!(Transport::from_config(), Transport::Simulated);
        }
    }

    #[test]
    fn non_success_status_is_a_rejection() {
        assert_eq!(check_status(true, 200), Ok(()));
        assert_eq!(check_status(true, 204), Ok(()));
        assert_eq!(check_status(false, 422), Err(SubmitError::Rejected { status: 422 }));
        assert_eq!(check_status(false, 503), Err(SubmitError::Rejected { status: 503 }));
    }

    #[test]
    fn errors_describe_themselves() {
        assert_eq!(
            SubmitError::Rejected { status: 422 }.to_string(),
            "the contact service rejected the message (status 422)"
        );
        assert!(SubmitError::Network("offline".into()).to_string().ends_with("offline"));
    }

    #[test]
    fn draft_serializes_with_input_names() {
        let draft = ContactDraft {
            email: "a@b.com".into(),
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["phone"], "");
        assert_eq!(json.as_object().map(|o| o.len()), Some(5));
    }
}
