//! Subscription options handed to the host push manager.
//!
//! Options are passed through unmodified. In particular `user_visible_only`
//! is not forced to `true` even though most push services reject `false`;
//! the host reports that failure as a subscription error.

// Rust guideline compliant 2026-02

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Options for `PushManager.subscribe()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionOptions {
    /// Promise that every push message results in a visible notification.
    #[serde(default)]
    pub user_visible_only: bool,
    /// Public key of the sending application server (VAPID).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_server_key: Option<ApplicationServerKey>,
}

impl SubscriptionOptions {
    /// Options with no key and `user_visible_only` unset, matching the host default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `user_visible_only`.
    pub fn user_visible_only(mut self, user_visible_only: bool) -> Self {
        self.user_visible_only = user_visible_only;
        self
    }

    /// Set the application server key.
    pub fn application_server_key(mut self, key: impl Into<ApplicationServerKey>) -> Self {
        self.application_server_key = Some(key.into());
        self
    }
}

/// VAPID public key identifying the sending application server.
///
/// Browsers accept either the base64url text form or the raw bytes of the
/// uncompressed P-256 point. The key is handed to the host in whichever form
/// the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationServerKey {
    /// Base64url-encoded key.
    Text(String),
    /// Raw key bytes.
    Bytes(Vec<u8>),
}

impl From<&str> for ApplicationServerKey {
    fn from(key: &str) -> Self {
        Self::Text(key.to_string())
    }
}

impl From<String> for ApplicationServerKey {
    fn from(key: String) -> Self {
        Self::Text(key)
    }
}

impl From<Vec<u8>> for ApplicationServerKey {
    fn from(key: Vec<u8>) -> Self {
        Self::Bytes(key)
    }
}

impl From<&[u8]> for ApplicationServerKey {
    fn from(key: &[u8]) -> Self {
        Self::Bytes(key.to_vec())
    }
}

impl Serialize for ApplicationServerKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(key) => serializer.serialize_str(key),
            Self::Bytes(key) => serializer.collect_seq(key),
        }
    }
}

impl<'de> Deserialize<'de> for ApplicationServerKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}

/// Accepts a string, a byte buffer (`Uint8Array` via serde-wasm-bindgen),
/// or a sequence of numbers.
struct KeyVisitor;

impl<'de> Visitor<'de> for KeyVisitor {
    type Value = ApplicationServerKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a base64url string or a byte array")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ApplicationServerKey::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ApplicationServerKey::Text(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(ApplicationServerKey::Bytes(v.to_vec()))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(ApplicationServerKey::Bytes(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(65));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(ApplicationServerKey::Bytes(bytes))
    }
}
