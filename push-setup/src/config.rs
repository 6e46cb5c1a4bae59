//! Push setup configuration.
//!
//! Lets an app ship its worker URL and VAPID key as one JSON document:
//!
//! ```json
//! {
//!   "serviceWorkerUrl": "/sw.js",
//!   "subscription": {
//!     "userVisibleOnly": true,
//!     "applicationServerKey": "BEl62iUYgUivxIkv69yViEuiBIa..."
//!   }
//! }
//! ```

// Rust guideline compliant 2026-02

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::options::SubscriptionOptions;

/// Worker script used when the configuration does not name one.
pub const DEFAULT_SERVICE_WORKER_URL: &str = "/sw.js";

/// Everything `initialize_from_setup` needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushSetup {
    /// Service worker script to register.
    #[serde(default = "default_service_worker_url")]
    pub service_worker_url: String,
    /// Options passed to the push manager.
    #[serde(default)]
    pub subscription: SubscriptionOptions,
}

fn default_service_worker_url() -> String {
    DEFAULT_SERVICE_WORKER_URL.to_string()
}

impl Default for PushSetup {
    fn default() -> Self {
        Self {
            service_worker_url: default_service_worker_url(),
            subscription: SubscriptionOptions::default(),
        }
    }
}

impl PushSetup {
    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let setup: Self =
            serde_json::from_str(json).context("Failed to parse push setup configuration")?;
        anyhow::ensure!(
            !setup.service_worker_url.trim().is_empty(),
            "serviceWorkerUrl must not be empty"
        );
        Ok(setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ApplicationServerKey;

    #[test]
    fn test_from_json_full() {
        let setup = PushSetup::from_json(
            r#"{
                "serviceWorkerUrl": "/service-worker.js",
                "subscription": { "userVisibleOnly": true, "applicationServerKey": "dummyKey" }
            }"#,
        )
        .expect("parse");

        assert_eq!(setup.service_worker_url, "/service-worker.js");
        assert!(setup.subscription.user_visible_only);
        assert_eq!(
            setup.subscription.application_server_key,
            Some(ApplicationServerKey::Text("dummyKey".to_string()))
        );
    }

    #[test]
    fn test_from_json_defaults() {
        let setup = PushSetup::from_json("{}").expect("parse");
        assert_eq!(setup, PushSetup::default());
        assert_eq!(setup.service_worker_url, DEFAULT_SERVICE_WORKER_URL);
    }

    #[test]
    fn test_from_json_errors() {
        let err = PushSetup::from_json("not json").expect_err("should fail");
        assert!(err.to_string().contains("push setup configuration"));

        let err = PushSetup::from_json(r#"{"serviceWorkerUrl": "  "}"#).expect_err("should fail");
        assert!(err.to_string().contains("serviceWorkerUrl"));
    }
}
