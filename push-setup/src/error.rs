//! Error taxonomy for push setup.

// Rust guideline compliant 2026-02

use std::fmt;

use thiserror::Error;

use crate::permission::PermissionStatus;

/// A host capability the orchestrator depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Notification permission query/request (`Notification`).
    Notifications,
    /// Worker registration (`navigator.serviceWorker`).
    ServiceWorker,
    /// Push management attached to a registration (`registration.pushManager`).
    PushManager,
}

impl Capability {
    /// Short stable identifier, e.g. `"service-worker"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Notifications => "notifications",
            Self::ServiceWorker => "service-worker",
            Self::PushManager => "push-manager",
        }
    }

    /// User-facing message reported when the capability is missing.
    pub fn unsupported_message(self) -> &'static str {
        match self {
            Self::Notifications => "Notifications are not supported in this browser.",
            Self::ServiceWorker => "Service Workers are not supported in this browser.",
            Self::PushManager => {
                "Push messaging is not supported by this service worker registration."
            }
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure of a push setup operation.
///
/// `E` is the host's own error type. Host failures carry it unchanged so the
/// caller sees exactly what the platform reported.
#[derive(Debug, Error)]
pub enum PushError<E> {
    /// The host lacks a required capability entirely.
    #[error("{}", .0.unsupported_message())]
    UnsupportedCapability(Capability),
    /// The user declined (or previously declined) notification permission.
    #[error("Notification permission not granted.")]
    PermissionDenied(PermissionStatus),
    /// A subscription was attempted while permission is not `granted`.
    #[error("Push subscription requires granted notification permission.")]
    PermissionNotGranted,
    /// The host permission request itself failed.
    #[error("Notification permission request failed: {0}")]
    PermissionRequestFailed(E),
    /// The host could not register the worker script.
    #[error("Service Worker registration failed: {0}")]
    RegistrationFailed(E),
    /// The host push service refused or failed the subscription.
    #[error("Push subscription failed: {0}")]
    SubscriptionFailed(E),
}

impl<E> PushError<E> {
    /// The host error behind this failure, if the host reported one.
    pub fn cause(&self) -> Option<&E> {
        match self {
            Self::PermissionRequestFailed(cause)
            | Self::RegistrationFailed(cause)
            | Self::SubscriptionFailed(cause) => Some(cause),
            _ => None,
        }
    }

    /// Take ownership of the host error, if any.
    pub fn into_cause(self) -> Option<E> {
        match self {
            Self::PermissionRequestFailed(cause)
            | Self::RegistrationFailed(cause)
            | Self::SubscriptionFailed(cause) => Some(cause),
            _ => None,
        }
    }

    /// The missing capability, for `UnsupportedCapability` errors.
    pub fn missing_capability(&self) -> Option<Capability> {
        match self {
            Self::UnsupportedCapability(capability) => Some(*capability),
            _ => None,
        }
    }
}
