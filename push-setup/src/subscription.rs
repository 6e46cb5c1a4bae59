//! Backend-facing push subscription record.
//!
//! The orchestrator hands the host's subscription back untouched. A backend
//! that sends web push (RFC 8030, payload encryption per RFC 8291) only needs
//! the endpoint and the two client keys, so [`SubscriptionInfo`] flattens the
//! browser's `PushSubscription.toJSON()` output into that shape.

// Rust guideline compliant 2026-02

use serde::{Deserialize, Serialize};

/// `PushSubscription.toJSON()` as browsers produce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserSubscription {
    /// Push service endpoint URL.
    pub endpoint: String,
    /// Expiry in milliseconds since the epoch, when the push service sets one.
    #[serde(default)]
    pub expiration_time: Option<f64>,
    /// Client keys for payload encryption.
    pub keys: SubscriptionKeys,
}

/// Client keys from a browser subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionKeys {
    /// P-256 ECDH public key (base64url).
    pub p256dh: String,
    /// Shared auth secret (base64url).
    pub auth: String,
}

/// What a backend needs to send a push message to one browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionInfo {
    /// Push service endpoint URL.
    pub endpoint: String,
    /// Browser's P-256 ECDH public key (base64url).
    pub p256dh: String,
    /// Shared auth secret (base64url).
    pub auth: String,
}

impl SubscriptionInfo {
    /// Parse the JSON of a browser subscription.
    pub fn from_browser_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<BrowserSubscription>(json).map(Self::from)
    }
}

impl From<BrowserSubscription> for SubscriptionInfo {
    fn from(subscription: BrowserSubscription) -> Self {
        Self {
            endpoint: subscription.endpoint,
            p256dh: subscription.keys.p256dh,
            auth: subscription.keys.auth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_browser_json() {
        let info = SubscriptionInfo::from_browser_json(
            r#"{
                "endpoint": "https://fcm.googleapis.com/fcm/send/abc",
                "expirationTime": null,
                "keys": { "p256dh": "BNcRdreALRFX", "auth": "tBHItJI5svbpez7KI4CCXg" }
            }"#,
        )
        .expect("parse");

        assert_eq!(
            info,
            SubscriptionInfo {
                endpoint: "https://fcm.googleapis.com/fcm/send/abc".to_string(),
                p256dh: "BNcRdreALRFX".to_string(),
                auth: "tBHItJI5svbpez7KI4CCXg".to_string(),
            }
        );

        let json = serde_json::to_value(&info).expect("serialize");
        assert_eq!(json["endpoint"], "https://fcm.googleapis.com/fcm/send/abc");
        assert!(json.get("keys").is_none());
    }

    #[test]
    fn test_expiration_time_is_optional() {
        let subscription: BrowserSubscription = serde_json::from_str(
            r#"{"endpoint": "https://push.example.com/1", "keys": {"p256dh": "k", "auth": "a"}}"#,
        )
        .expect("parse");
        assert_eq!(subscription.expiration_time, None);

        let subscription: BrowserSubscription = serde_json::from_str(
            r#"{"endpoint": "https://push.example.com/1", "expirationTime": 1700000000000,
                "keys": {"p256dh": "k", "auth": "a"}}"#,
        )
        .expect("parse");
        assert_eq!(subscription.expiration_time, Some(1_700_000_000_000.0));
    }

    #[test]
    fn test_missing_keys_is_an_error() {
        assert!(SubscriptionInfo::from_browser_json(r#"{"endpoint": "https://push.example.com/1"}"#)
            .is_err());
    }
}
