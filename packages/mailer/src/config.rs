//! # Delivery endpoint configuration
//!
//! Identifies which EmailJS service, template, and account the contact form
//! delivers through, and which mailbox receives the result. The site is a
//! static wasm bundle, so configuration is resolved at build time:
//! [`DeliveryConfig::from_env`] reads compile-time environment variables and
//! falls back to the published defaults for any that are absent.
//!
//! | Field | Override variable |
//! |-------|-------------------|
//! | `service_id` | `EMAILJS_SERVICE_ID` |
//! | `template_id` | `EMAILJS_TEMPLATE_ID` |
//! | `public_key` | `EMAILJS_PUBLIC_KEY` |
//! | `recipient` | `CONTACT_RECIPIENT` |
//!
//! The public key is not a secret — EmailJS keys are meant to ship in
//! client-side bundles and are scoped server-side.

use serde::{Deserialize, Serialize};

/// Identifiers and key for the EmailJS delivery endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// EmailJS service id.
    pub service_id: String,
    /// Id of the "Contact Us" template the parameters are rendered into.
    pub template_id: String,
    /// EmailJS public key. Sent as `user_id` on the wire.
    pub public_key: String,
    /// Mailbox the rendered message is delivered to.
    pub recipient: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            service_id: "service_v84vxta".to_string(),
            template_id: "template_xpmqshc".to_string(),
            public_key: "PTDsC4lsgvFNheItn".to_string(),
            recipient: "mellogamer217@gmail.com".to_string(),
        }
    }
}

impl DeliveryConfig {
    /// Resolve the configuration from compile-time environment variables,
    /// defaulting any that were not set when the site was built.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            service_id: option_env!("EMAILJS_SERVICE_ID")
                .map(str::to_string)
                .unwrap_or(defaults.service_id),
            template_id: option_env!("EMAILJS_TEMPLATE_ID")
                .map(str::to_string)
                .unwrap_or(defaults.template_id),
            public_key: option_env!("EMAILJS_PUBLIC_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.public_key),
            recipient: option_env!("CONTACT_RECIPIENT")
                .map(str::to_string)
                .unwrap_or(defaults.recipient),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_complete() {
        let config = DeliveryConfig::default();
        assert!(config.service_id.starts_with("service_"));
        assert!(config.template_id.starts_with("template_"));
        assert!(!config.public_key.is_empty());
        assert!(config.recipient.contains('@'));
    }

    #[test]
    fn test_from_env_falls_back_to_defaults() {
        // None of the override variables are set in the test build.
        assert_eq!(DeliveryConfig::from_env(), DeliveryConfig::default());
    }
}
