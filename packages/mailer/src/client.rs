//! # EmailJS delivery client
//!
//! Sends a validated [`ContactForm`] through the [EmailJS] REST API. The
//! browser SDK the endpoint was designed for boils down to a single JSON
//! POST, which is all this client does:
//!
//! ```json
//! {
//!   "service_id": "service_…",
//!   "template_id": "template_…",
//!   "user_id": "<public key>",
//!   "template_params": { "name": …, "from_name": …, "from_email": …,
//!                        "to_email": …, "subject": …, "message": … }
//! }
//! ```
//!
//! A 200 response acknowledges delivery; anything else carries a plain-text
//! explanation in the body, surfaced as [`DeliveryError::Rejected`].
//!
//! [EmailJS]: https://www.emailjs.com/docs/rest-api/send/

use serde::Serialize;
use thiserror::Error;

use crate::config::DeliveryConfig;
use crate::form::ContactForm;

/// REST endpoint messages are posted to.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Variables interpolated into the "Contact Us" template.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub from_name: String,
    pub from_email: String,
    pub to_email: String,
    pub subject: String,
    pub message: String,
}

impl TemplateParams {
    /// Map the four collected fields plus the fixed recipient onto the
    /// template's variable names. `name` and `from_name` carry the same
    /// value; the template references both.
    pub fn from_form(form: &ContactForm, recipient: &str) -> Self {
        Self {
            name: form.name.clone(),
            from_name: form.name.clone(),
            from_email: form.email.clone(),
            to_email: recipient.to_string(),
            subject: form.subject.clone(),
            message: form.message.clone(),
        }
    }
}

/// Request body for [`EMAILJS_SEND_URL`].
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Why a delivery attempt failed.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The request never completed (network down, DNS, blocked fetch).
    #[error("delivery request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("delivery rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },
}

impl DeliveryError {
    /// The line shown in the failure toast. Endpoint-supplied text is
    /// actionable ("The service ID not found", quota exceeded, …) and is
    /// passed through; transport noise is replaced with a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            DeliveryError::Rejected { detail, .. } if !detail.trim().is_empty() => {
                format!("EmailJS Error: {}", detail.trim())
            }
            _ => "Please try again or contact me directly via email.".to_string(),
        }
    }
}

/// Posts contact messages to the EmailJS REST API.
#[derive(Clone, Debug)]
pub struct EmailJsClient {
    http: reqwest::Client,
    config: DeliveryConfig,
}

impl EmailJsClient {
    pub fn new(config: DeliveryConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    /// Deliver one message. Exactly one request is issued per call; retrying
    /// is left to the user resubmitting the form.
    pub async fn send(&self, form: &ContactForm) -> Result<(), DeliveryError> {
        let params = TemplateParams::from_form(form, &self.config.recipient);
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: &params,
        };

        let response = self
            .http
            .post(EMAILJS_SEND_URL)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // EmailJS explains rejections as a plain-text body.
        let detail = response.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

impl Default for EmailJsClient {
    fn default() -> Self {
        Self::new(DeliveryConfig::from_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> ContactForm {
        ContactForm {
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            subject: "Hello there".to_string(),
            message: "This is a message.".to_string(),
        }
    }

    #[test]
    fn test_template_params_carry_all_fields_and_recipient() {
        let params = TemplateParams::from_form(&sample_form(), "inbox@example.com");
        assert_eq!(params.name, "Al");
        assert_eq!(params.from_name, params.name);
        assert_eq!(params.from_email, "a@b.co");
        assert_eq!(params.to_email, "inbox@example.com");
        assert_eq!(params.subject, "Hello there");
        assert_eq!(params.message, "This is a message.");
    }

    #[test]
    fn test_request_payload_shape() {
        let config = DeliveryConfig::default();
        let params = TemplateParams::from_form(&sample_form(), &config.recipient);
        let request = SendRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: &params,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["service_id"], config.service_id.as_str());
        assert_eq!(value["template_id"], config.template_id.as_str());
        // The public key travels under the SDK's historical field name.
        assert_eq!(value["user_id"], config.public_key.as_str());
        assert_eq!(
            value["template_params"]["to_email"],
            config.recipient.as_str()
        );
        assert_eq!(value["template_params"]["from_email"], "a@b.co");
    }

    #[test]
    fn test_rejection_text_reaches_the_user() {
        let err = DeliveryError::Rejected {
            status: 400,
            detail: "The service ID not found".to_string(),
        };
        assert_eq!(err.user_message(), "EmailJS Error: The service ID not found");
    }

    #[test]
    fn test_blank_rejection_falls_back_to_generic_message() {
        let err = DeliveryError::Rejected {
            status: 500,
            detail: "  ".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Please try again or contact me directly via email."
        );
    }

    #[test]
    fn test_rejected_display_includes_status_and_detail() {
        let err = DeliveryError::Rejected {
            status: 403,
            detail: "API calls are disabled".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "delivery rejected (403): API calls are disabled"
        );
    }
}
