//! Host capability traits.
//!
//! A host exposes each platform capability as an `Option`: `None` means the
//! environment lacks it, and the orchestrator reports that before invoking
//! anything. Every method that reaches the platform is async and may suspend
//! until the user or the platform responds.
//!
//! Futures are not required to be `Send`; browser promises are bound to the
//! thread that created them.

// Rust guideline compliant 2026-02

use async_trait::async_trait;

use crate::options::SubscriptionOptions;
use crate::permission::PermissionStatus;

/// Notification permission query and prompt.
#[async_trait(?Send)]
pub trait NotificationCapability {
    /// Host error type.
    type Error;

    /// The currently recorded permission, without prompting.
    fn permission(&self) -> PermissionStatus;

    /// Prompt the user (or return a previously recorded decision).
    async fn request_permission(&self) -> Result<PermissionStatus, Self::Error>;
}

/// Worker script registration.
#[async_trait(?Send)]
pub trait ServiceWorkerCapability {
    /// Opaque registration handle.
    type Registration;
    /// Host error type.
    type Error;

    /// Register `script_url` and wait for the host to accept it.
    async fn register(&self, script_url: &str) -> Result<Self::Registration, Self::Error>;
}

/// Push subscription management attached to a registration.
#[async_trait(?Send)]
pub trait PushManagerCapability {
    /// Opaque subscription handle.
    type Subscription;
    /// Host error type.
    type Error;

    /// Create (or return the existing) push subscription.
    async fn subscribe(
        &self,
        options: &SubscriptionOptions,
    ) -> Result<Self::Subscription, Self::Error>;
}

/// Environment providing the capabilities push setup needs.
pub trait PushHost {
    /// Registration handle returned by [`ServiceWorkerCapability::register`].
    type Registration;
    /// Subscription handle returned by [`PushManagerCapability::subscribe`].
    type Subscription;
    /// Error reported by the host when a capability call fails.
    type Error;

    /// Notification permission, if the host supports notifications.
    fn notifications(&self) -> Option<&dyn NotificationCapability<Error = Self::Error>>;

    /// Worker registration, if the host supports service workers.
    fn service_worker(
        &self,
    ) -> Option<&dyn ServiceWorkerCapability<Registration = Self::Registration, Error = Self::Error>>;

    /// Push management for `registration`, if it exposes one.
    fn push_manager<'r>(
        &self,
        registration: &'r Self::Registration,
    ) -> Option<&'r dyn PushManagerCapability<Subscription = Self::Subscription, Error = Self::Error>>;
}
